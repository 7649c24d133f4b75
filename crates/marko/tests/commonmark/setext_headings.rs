use crate::commonmark::harness::spec_test;

spec_test!(level_one, "Foo\n===\n", "<h1>Foo</h1>\n");
spec_test!(level_two, "Foo\n---\n", "<h2>Foo</h2>\n");
spec_test!(single_character_underline, "Foo bar\n=\n", "<h1>Foo bar</h1>\n");
spec_test!(underline_may_be_indented, "Foo\n   ----      \n", "<h2>Foo</h2>\n");
spec_test!(inline_content, "Foo *bar*\n=========\n", "<h1>Foo <em>bar</em></h1>\n");
spec_test!(multi_line_content, "Foo *bar\nbaz*\n====\n", "<h1>Foo <em>bar\nbaz</em></h1>\n");
spec_test!(underline_cannot_be_lazy, "> Foo\n---\n", "<blockquote>\n<p>Foo</p>\n</blockquote>\n<hr />\n");
spec_test!(lazy_continuation_swallows_underline, "> foo\nbar\n===\n", "<blockquote>\n<p>foo\nbar\n===</p>\n</blockquote>\n");
spec_test!(underline_needs_a_paragraph, "---\nFoo\n", "<hr />\n<p>Foo</p>\n");
spec_test!(dashes_with_spaces_are_a_break, "Foo\n- - -\n", "<p>Foo</p>\n<hr />\n");
