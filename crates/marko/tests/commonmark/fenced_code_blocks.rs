use crate::commonmark::harness::spec_test;

spec_test!(
    backtick_fence,
    "```\n<\n >\n```\n",
    "<pre><code>&lt;\n &gt;\n</code></pre>\n"
);
spec_test!(
    tilde_fence,
    "~~~\n<\n >\n~~~\n",
    "<pre><code>&lt;\n &gt;\n</code></pre>\n"
);
spec_test!(
    info_string,
    "```py\nprint(1)\n```\n",
    "<pre><code class=\"language-py\">print(1)\n</code></pre>\n"
);
spec_test!(
    info_string_extra_words,
    "```ruby startline=3\ndef foo(x)\n```\n",
    "<pre><code class=\"language-ruby\">def foo(x)\n</code></pre>\n"
);
spec_test!(
    two_backticks_is_not_a_fence,
    "``\nfoo\n``\n",
    "<p><code>foo</code></p>\n"
);
spec_test!(
    closing_fence_must_be_long_enough,
    "````\naaa\n```\n``````\n",
    "<pre><code>aaa\n```\n</code></pre>\n"
);
spec_test!(unclosed_fence_runs_to_eof, "```\nfoo\n", "<pre><code>foo\n</code></pre>\n");
spec_test!(empty_block, "```\n```\n", "<pre><code></code></pre>\n");
spec_test!(
    opening_indent_is_stripped,
    "   ```\n   aaa\n    aaa\n  ```\n",
    "<pre><code>aaa\n aaa\n</code></pre>\n"
);
spec_test!(
    backtick_info_cannot_contain_backticks,
    "``` aa ```\nfoo\n",
    "<p><code>aa</code>\nfoo</p>\n"
);
spec_test!(
    tilde_info_may_contain_backticks,
    "~~~ aa ``` ~~~\nfoo\n~~~\n",
    "<pre><code class=\"language-aa\">foo\n</code></pre>\n"
);
spec_test!(
    fence_interrupts_paragraph,
    "foo\n```\nbar\n```\nbaz\n",
    "<p>foo</p>\n<pre><code>bar\n</code></pre>\n<p>baz</p>\n"
);
spec_test!(
    blank_lines_are_content,
    "```\n\na\n\n```\n",
    "<pre><code>\na\n\n</code></pre>\n"
);
spec_test!(
    escaped_ampersand_in_info_string_blocks_decoding,
    "```f\\&ouml;o\nx\n```\n",
    "<pre><code class=\"language-f&amp;ouml;o\">x\n</code></pre>\n"
);
spec_test!(
    entity_in_info_string_is_decoded,
    "```f&ouml;o\nx\n```\n",
    "<pre><code class=\"language-f\u{F6}o\">x\n</code></pre>\n"
);
