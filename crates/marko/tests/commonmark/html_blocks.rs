use crate::commonmark::harness::spec_test;

spec_test!(
    div_block_runs_to_blank_line,
    "<div>\n*foo*\n</div>\n",
    "<div>\n*foo*\n</div>\n"
);
spec_test!(
    markdown_resumes_after_blank,
    "<div>\n</div>\n\n*foo*\n",
    "<div>\n</div>\n<p><em>foo</em></p>\n"
);
spec_test!(
    block_tag_interrupts_paragraph,
    "*foo*\n<div>\nbar\n",
    "<p><em>foo</em></p>\n<div>\nbar\n"
);
spec_test!(
    comment_block,
    "<!-- comment -->\nhello\n",
    "<!-- comment -->\n<p>hello</p>\n"
);
spec_test!(
    multi_line_comment,
    "<!--\nfoo\n-->\nbar\n",
    "<!--\nfoo\n-->\n<p>bar</p>\n"
);
spec_test!(
    processing_instruction,
    "<?php\necho '>';\n?>\nok\n",
    "<?php\necho '>';\n?>\n<p>ok</p>\n"
);
spec_test!(declaration, "<!DOCTYPE html>\n", "<!DOCTYPE html>\n");
spec_test!(
    cdata_section,
    "<![CDATA[\nfunction matchwo(a,b)\n]]>\nok\n",
    "<![CDATA[\nfunction matchwo(a,b)\n]]>\n<p>ok</p>\n"
);
spec_test!(
    pre_block_keeps_blank_lines,
    "<pre>\ntwo\n\nlines\n</pre>\nok\n",
    "<pre>\ntwo\n\nlines\n</pre>\n<p>ok</p>\n"
);
spec_test!(
    complete_tag_alone_starts_a_block,
    "<a href=\"foo\">\n*bar*\n</a>\n",
    "<a href=\"foo\">\n*bar*\n</a>\n"
);
spec_test!(
    complete_tag_cannot_interrupt,
    "foo\n<a href=\"bar\">\n",
    "<p>foo\n<a href=\"bar\"></p>\n"
);
spec_test!(
    indented_tag_is_code,
    "    <div>\n",
    "<pre><code>&lt;div&gt;\n</code></pre>\n"
);
