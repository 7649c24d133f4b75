use crate::commonmark::harness::spec_test;

spec_test!(
    inline_link,
    "[link](/uri \"title\")\n",
    "<p><a href=\"/uri\" title=\"title\">link</a></p>\n"
);
spec_test!(no_title, "[link](/uri)\n", "<p><a href=\"/uri\">link</a></p>\n");
spec_test!(empty_destination, "[link]()\n", "<p><a href=\"\">link</a></p>\n");
spec_test!(
    angle_bracket_destination,
    "[link](</my uri>)\n",
    "<p><a href=\"/my%20uri\">link</a></p>\n"
);
spec_test!(
    destination_cannot_span_lines,
    "[link](foo\nbar)\n",
    "<p>[link](foo\nbar)</p>\n"
);
spec_test!(
    balanced_parens_in_destination,
    "[link](foo(and(bar)))\n",
    "<p><a href=\"foo(and(bar))\">link</a></p>\n"
);
spec_test!(
    escaped_parens_in_destination,
    "[link](foo\\(and\\(bar\\))\n",
    "<p><a href=\"foo(and(bar)\">link</a></p>\n"
);
spec_test!(
    whitespace_around_destination,
    "[link](   /uri\n  \"title\"  )\n",
    "<p><a href=\"/uri\" title=\"title\">link</a></p>\n"
);
spec_test!(
    label_with_balanced_brackets,
    "[link [foo [bar]]](/uri)\n",
    "<p><a href=\"/uri\">link [foo [bar]]</a></p>\n"
);
spec_test!(
    emphasis_inside_label,
    "[link *foo **bar** `#`*](/uri)\n",
    "<p><a href=\"/uri\">link <em>foo <strong>bar</strong> <code>#</code></em></a></p>\n"
);
spec_test!(
    links_do_not_nest,
    "[foo [bar](/uri)](/uri2)\n",
    "<p>[foo <a href=\"/uri\">bar</a>](/uri2)</p>\n"
);
spec_test!(
    full_reference,
    "[bar]: /url \"t\"\n[foo][bar]\n",
    "<p><a href=\"/url\" title=\"t\">foo</a></p>\n"
);
spec_test!(
    undefined_full_reference,
    "[foo][bar]\n",
    "<p>[foo][bar]</p>\n"
);
spec_test!(
    collapsed_reference,
    "[foo]: /url\n[foo][]\n",
    "<p><a href=\"/url\">foo</a></p>\n"
);
spec_test!(
    shortcut_reference,
    "[foo]: /url\n[foo]\n",
    "<p><a href=\"/url\">foo</a></p>\n"
);
spec_test!(
    spec_boundary_case,
    "[x]: /u \"t\"\n[x]\n",
    "<p><a href=\"/u\" title=\"t\">x</a></p>\n"
);
spec_test!(
    shortcut_with_following_parenthetical,
    "[foo]: /url\n[foo] (not a resource)\n",
    "<p><a href=\"/url\">foo</a> (not a resource)</p>\n"
);
spec_test!(
    inline_resource_beats_reference,
    "[foo]: /ref\n[foo](/inline)\n",
    "<p><a href=\"/inline\">foo</a></p>\n"
);
spec_test!(
    unmatched_bracket_is_literal,
    "[foo\n",
    "<p>[foo</p>\n"
);
spec_test!(
    code_span_swallows_bracket,
    "[foo`]`\n",
    "<p>[foo<code>]</code></p>\n"
);
spec_test!(
    destination_with_entity,
    "[link](/url?a=b&amp;c=d)\n",
    "<p><a href=\"/url?a=b&amp;c=d\">link</a></p>\n"
);
