use crate::commonmark::harness::spec_test;

spec_test!(
    simple_quote,
    "> # Foo\n> bar\n> baz\n",
    "<blockquote>\n<h1>Foo</h1>\n<p>bar\nbaz</p>\n</blockquote>\n"
);
spec_test!(
    space_after_marker_is_optional,
    "># Foo\n>bar\n> baz\n",
    "<blockquote>\n<h1>Foo</h1>\n<p>bar\nbaz</p>\n</blockquote>\n"
);
spec_test!(
    marker_may_be_indented,
    "   > # Foo\n   > bar\n > baz\n",
    "<blockquote>\n<h1>Foo</h1>\n<p>bar\nbaz</p>\n</blockquote>\n"
);
spec_test!(
    four_spaces_is_code,
    "    > # Foo\n",
    "<pre><code>&gt; # Foo\n</code></pre>\n"
);
spec_test!(
    lazy_continuation,
    "> # Foo\n> bar\nbaz\n",
    "<blockquote>\n<h1>Foo</h1>\n<p>bar\nbaz</p>\n</blockquote>\n"
);
spec_test!(
    laziness_works_mid_paragraph,
    "> bar\nbaz\n> foo\n",
    "<blockquote>\n<p>bar\nbaz\nfoo</p>\n</blockquote>\n"
);
spec_test!(
    blank_line_separates_quotes,
    "> foo\n\n> bar\n",
    "<blockquote>\n<p>foo</p>\n</blockquote>\n<blockquote>\n<p>bar</p>\n</blockquote>\n"
);
spec_test!(
    one_quote_two_paragraphs,
    "> foo\n>\n> bar\n",
    "<blockquote>\n<p>foo</p>\n<p>bar</p>\n</blockquote>\n"
);
spec_test!(empty_quote, ">\n", "<blockquote>\n</blockquote>\n");
spec_test!(
    quote_interrupts_paragraph,
    "foo\n> bar\n",
    "<p>foo</p>\n<blockquote>\n<p>bar</p>\n</blockquote>\n"
);
spec_test!(
    nested_quotes,
    "> > > foo\nbar\n",
    "<blockquote>\n<blockquote>\n<blockquote>\n<p>foo\nbar</p>\n</blockquote>\n</blockquote>\n</blockquote>\n"
);
spec_test!(
    code_needs_five_columns,
    ">     code\n\n>    not code\n",
    "<blockquote>\n<pre><code>code\n</code></pre>\n</blockquote>\n<blockquote>\n<p>not code</p>\n</blockquote>\n"
);
