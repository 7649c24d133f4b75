use crate::commonmark::harness::spec_test;

spec_test!(two_spaces_make_a_hard_break, "foo  \nbaz\n", "<p>foo<br />\nbaz</p>\n");
spec_test!(backslash_makes_a_hard_break, "foo\\\nbaz\n", "<p>foo<br />\nbaz</p>\n");
spec_test!(many_spaces_still_one_break, "foo       \nbaz\n", "<p>foo<br />\nbaz</p>\n");
spec_test!(
    next_line_leading_whitespace_is_swallowed,
    "foo  \n     bar\n",
    "<p>foo<br />\nbar</p>\n"
);
spec_test!(soft_break, "foo\nbaz\n", "<p>foo\nbaz</p>\n");
spec_test!(one_space_is_soft, "foo \nbaz\n", "<p>foo\nbaz</p>\n");
spec_test!(
    break_inside_emphasis,
    "*foo  \nbar*\n",
    "<p><em>foo<br />\nbar</em></p>\n"
);
spec_test!(
    no_break_inside_code_spans,
    "`code  \nspan`\n",
    "<p><code>code   span</code></p>\n"
);
spec_test!(
    no_hard_break_at_paragraph_end,
    "foo  \n",
    "<p>foo</p>\n"
);
