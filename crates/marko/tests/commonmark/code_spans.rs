use crate::commonmark::harness::spec_test;

spec_test!(simple_span, "`code`\n", "<p><code>code</code></p>\n");
spec_test!(
    double_backtick_delimiters,
    "`` foo ` bar ``\n",
    "<p><code>foo ` bar</code></p>\n"
);
spec_test!(stripping_needs_both_sides, "` `` `\n", "<p><code>``</code></p>\n");
spec_test!(only_one_space_is_stripped, "`  ``  `\n", "<p><code> `` </code></p>\n");
spec_test!(interior_spaces_survive, "` a`\n", "<p><code> a</code></p>\n");
spec_test!(all_spaces_are_kept, "` `\n` `\n", "<p><code> </code>\n<code> </code></p>\n");
spec_test!(
    line_endings_become_spaces,
    "``\nfoo\nbar  \nbaz\n``\n",
    "<p><code>foo bar   baz</code></p>\n"
);
spec_test!(
    backslashes_are_literal,
    "`foo\\`bar`\n",
    "<p><code>foo\\</code>bar`</p>\n"
);
spec_test!(
    code_beats_emphasis,
    "*foo`*`\n",
    "<p>*foo<code>*</code></p>\n"
);
spec_test!(
    unmatched_backticks_stay_literal,
    "```foo``\n",
    "<p>```foo``</p>\n"
);
spec_test!(single_unmatched_backtick, "`foo\n", "<p>`foo</p>\n");
