use crate::commonmark::harness::spec_test;

spec_test!(
    tight_bullet_list,
    "- a\n- b\n",
    "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
);
spec_test!(
    changing_the_bullet_starts_a_new_list,
    "- foo\n- bar\n+ baz\n",
    "<ul>\n<li>foo</li>\n<li>bar</li>\n</ul>\n<ul>\n<li>baz</li>\n</ul>\n"
);
spec_test!(
    tight_ordered_list,
    "1. foo\n2. bar\n",
    "<ol>\n<li>foo</li>\n<li>bar</li>\n</ol>\n"
);
spec_test!(
    changing_the_delimiter_starts_a_new_list,
    "1. foo\n2) bar\n",
    "<ol>\n<li>foo</li>\n</ol>\n<ol start=\"2\">\n<li>bar</li>\n</ol>\n"
);
spec_test!(
    start_number_is_kept,
    "3. foo\n4. bar\n",
    "<ol start=\"3\">\n<li>foo</li>\n<li>bar</li>\n</ol>\n"
);
spec_test!(
    later_numbers_are_ignored,
    "1. foo\n9. bar\n",
    "<ol>\n<li>foo</li>\n<li>bar</li>\n</ol>\n"
);
spec_test!(
    loose_list_wraps_paragraphs,
    "- a\n\n- b\n",
    "<ul>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n</ul>\n"
);
spec_test!(
    blank_inside_an_item_makes_the_list_loose,
    "- foo\n\n  bar\n- baz\n",
    "<ul>\n<li>\n<p>foo</p>\n<p>bar</p>\n</li>\n<li>\n<p>baz</p>\n</li>\n</ul>\n"
);
spec_test!(
    nested_list_stays_tight,
    "- foo\n  - bar\n",
    "<ul>\n<li>foo\n<ul>\n<li>bar</li>\n</ul>\n</li>\n</ul>\n"
);
spec_test!(
    blank_between_outer_items_only_loosens_the_outer_list,
    "- a\n  - b\n\n- c\n",
    "<ul>\n<li>\n<p>a</p>\n<ul>\n<li>b</li>\n</ul>\n</li>\n<li>\n<p>c</p>\n</li>\n</ul>\n"
);
spec_test!(
    trailing_blank_lines_do_not_loosen,
    "- a\n- b\n\npara\n",
    "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>para</p>\n"
);
spec_test!(
    bullet_list_interrupts_paragraph,
    "Foo\n- bar\n",
    "<p>Foo</p>\n<ul>\n<li>bar</li>\n</ul>\n"
);
spec_test!(
    numbered_from_one_interrupts,
    "Foo\n1. bar\n",
    "<p>Foo</p>\n<ol>\n<li>bar</li>\n</ol>\n"
);
spec_test!(
    other_numbers_do_not_interrupt,
    "Foo\n2. bar\n",
    "<p>Foo\n2. bar</p>\n"
);
spec_test!(
    empty_item_in_the_middle,
    "- foo\n-\n- bar\n",
    "<ul>\n<li>foo</li>\n<li></li>\n<li>bar</li>\n</ul>\n"
);
spec_test!(
    item_starting_with_a_blank_line,
    "-\n  foo\n",
    "<ul>\n<li>foo</li>\n</ul>\n"
);
spec_test!(
    at_most_one_leading_blank_line,
    "-\n\n  foo\n",
    "<ul>\n<li></li>\n</ul>\n<p>foo</p>\n"
);
spec_test!(
    item_content_indent_comes_from_the_marker,
    "1.  foo\n\n    bar\n",
    "<ol>\n<li>\n<p>foo</p>\n<p>bar</p>\n</li>\n</ol>\n"
);
spec_test!(
    indented_code_keeps_one_column,
    "- foo\n\n      bar\n",
    "<ul>\n<li>\n<p>foo</p>\n<pre><code>bar\n</code></pre>\n</li>\n</ul>\n"
);
spec_test!(
    lazy_continuation_inside_items,
    "- foo\nbar\n",
    "<ul>\n<li>foo\nbar</li>\n</ul>\n"
);
spec_test!(
    list_inside_a_quote,
    "> - foo\n> - bar\n",
    "<blockquote>\n<ul>\n<li>foo</li>\n<li>bar</li>\n</ul>\n</blockquote>\n"
);
spec_test!(
    item_with_heading_and_paragraph,
    "- # Foo\n- Bar\n  ---\n",
    "<ul>\n<li>\n<h1>Foo</h1>\n</li>\n<li>\n<h2>Bar</h2>\n</li>\n</ul>\n"
);
spec_test!(
    thematic_break_ends_the_list,
    "- foo\n***\n- bar\n",
    "<ul>\n<li>foo</li>\n</ul>\n<hr />\n<ul>\n<li>bar</li>\n</ul>\n"
);
