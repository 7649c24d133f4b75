use crate::commonmark::harness::spec_test;

spec_test!(
    tab_indents_a_code_block,
    "\tfoo\tbaz\t\tbim\n",
    "<pre><code>foo\tbaz\t\tbim\n</code></pre>\n"
);
spec_test!(
    spaces_and_tab_share_the_stop,
    "  \tfoo\tbaz\t\tbim\n",
    "<pre><code>foo\tbaz\t\tbim\n</code></pre>\n"
);
spec_test!(
    extra_tab_columns_stay_in_content,
    "    a\ta\n    \u{1F50E}\ta\n",
    "<pre><code>a\ta\n\u{1F50E}\ta\n</code></pre>\n"
);
spec_test!(
    continuation_tab_in_list,
    "- foo\n\n\tbar\n",
    "<ul>\n<li>\n<p>foo</p>\n<p>bar</p>\n</li>\n</ul>\n"
);
spec_test!(
    quote_marker_splits_a_tab,
    ">\t\tfoo\n",
    "<blockquote>\n<pre><code>  foo\n</code></pre>\n</blockquote>\n"
);
spec_test!(
    list_marker_splits_a_tab,
    "-\t\tfoo\n",
    "<ul>\n<li>\n<pre><code>  foo\n</code></pre>\n</li>\n</ul>\n"
);
spec_test!(
    tab_is_not_special_midline,
    "foo\tbar\n",
    "<p>foo\tbar</p>\n"
);
