use crate::commonmark::harness::spec_test;

spec_test!(
    simple_block,
    "    a simple\n      indented code block\n",
    "<pre><code>a simple\n  indented code block\n</code></pre>\n"
);
spec_test!(
    contents_are_literal,
    "    <a/>\n    *hi*\n\n    - one\n",
    "<pre><code>&lt;a/&gt;\n*hi*\n\n- one\n</code></pre>\n"
);
spec_test!(
    blank_line_chunks_stay_one_block,
    "    chunk1\n\n    chunk2\n  \n \n \n    chunk3\n",
    "<pre><code>chunk1\n\nchunk2\n\n\n\nchunk3\n</code></pre>\n"
);
spec_test!(
    extra_indent_is_content,
    "    chunk1\n      \n      chunk2\n",
    "<pre><code>chunk1\n  \n  chunk2\n</code></pre>\n"
);
spec_test!(
    cannot_interrupt_paragraph,
    "Foo\n    bar\n",
    "<p>Foo\nbar</p>\n"
);
spec_test!(
    paragraph_can_follow_directly,
    "    foo\nbar\n",
    "<pre><code>foo\n</code></pre>\n<p>bar</p>\n"
);
spec_test!(
    trailing_blanks_are_not_content,
    "    foo  \n\n\n",
    "<pre><code>foo  \n</code></pre>\n"
);
