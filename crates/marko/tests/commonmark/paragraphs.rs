use crate::commonmark::harness::spec_test;

spec_test!(two_paragraphs, "aaa\n\nbbb\n", "<p>aaa</p>\n<p>bbb</p>\n");
spec_test!(
    multi_line_paragraphs,
    "aaa\nbbb\n\nccc\nddd\n",
    "<p>aaa\nbbb</p>\n<p>ccc\nddd</p>\n"
);
spec_test!(extra_blank_lines, "aaa\n\n\nbbb\n", "<p>aaa</p>\n<p>bbb</p>\n");
spec_test!(leading_spaces_are_skipped, "  aaa\n bbb\n", "<p>aaa\nbbb</p>\n");
spec_test!(
    continuation_can_be_deeply_indented,
    "aaa\n             bbb\n                                       ccc\n",
    "<p>aaa\nbbb\nccc</p>\n"
);
spec_test!(
    blank_lines_at_the_edges_are_ignored,
    "  \n\naaa\n  \n\n",
    "<p>aaa</p>\n"
);
spec_test!(empty_document, "", "");
spec_test!(only_blank_lines, "\n  \n\n", "");
