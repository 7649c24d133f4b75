use crate::commonmark::harness::spec_test;

spec_test!(
    basic_definition,
    "[foo]: /url \"title\"\n\n[foo]\n",
    "<p><a href=\"/url\" title=\"title\">foo</a></p>\n"
);
spec_test!(
    definition_parts_on_separate_lines,
    "[foo]:\n/url\n'the title'\n\n[foo]\n",
    "<p><a href=\"/url\" title=\"the title\">foo</a></p>\n"
);
spec_test!(no_title, "[foo]: /url\n\n[foo]\n", "<p><a href=\"/url\">foo</a></p>\n");
spec_test!(
    definition_can_come_after_use,
    "[foo]\n\n[foo]: /url\n",
    "<p><a href=\"/url\">foo</a></p>\n"
);
spec_test!(
    labels_are_case_folded,
    "[\u{1F1EB}\u{1F1F7}]: /fr\n\n[\u{1F1EB}\u{1F1F7}]\n",
    "<p><a href=\"/fr\">\u{1F1EB}\u{1F1F7}</a></p>\n"
);
spec_test!(
    case_and_whitespace_insensitive_lookup,
    "[FOO]: /url\n\n[Foo]\n",
    "<p><a href=\"/url\">Foo</a></p>\n"
);
spec_test!(
    whitespace_runs_collapse,
    "[Foo bar]: /url\n\n[foo  bar]\n",
    "<p><a href=\"/url\">foo  bar</a></p>\n"
);
spec_test!(
    first_definition_wins,
    "[foo]: /url1\n[foo]: /url2\n\n[foo]\n",
    "<p><a href=\"/url1\">foo</a></p>\n"
);
spec_test!(
    definitions_emit_nothing,
    "[foo]: /url\n",
    ""
);
spec_test!(
    leftover_text_becomes_a_paragraph,
    "[foo]: /url\nbar\n",
    "<p>bar</p>\n"
);
spec_test!(
    junk_after_destination_keeps_paragraph,
    "[foo]: /url \"title\" ok\n",
    "<p>[foo]: /url &quot;title&quot; ok</p>\n"
);
spec_test!(
    cannot_interrupt_a_paragraph,
    "Foo\n[bar]: /baz\n\n[bar]\n",
    "<p>Foo\n[bar]: /baz</p>\n<p>[bar]</p>\n"
);
spec_test!(
    definition_inside_a_quote_is_global,
    "> [foo]: /url\n\n[foo]\n",
    "<blockquote>\n</blockquote>\n<p><a href=\"/url\">foo</a></p>\n"
);
spec_test!(
    definition_needs_its_closing_newline,
    "[foo]: /url",
    "<p>[foo]: /url</p>\n"
);
