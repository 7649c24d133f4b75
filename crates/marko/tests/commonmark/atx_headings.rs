use crate::commonmark::harness::spec_test;

spec_test!(simple_heading, "# foo\n", "<h1>foo</h1>\n");
spec_test!(all_levels, "# a\n## b\n### c\n", "<h1>a</h1>\n<h2>b</h2>\n<h3>c</h3>\n");
spec_test!(level_six, "###### foo\n", "<h6>foo</h6>\n");
spec_test!(seven_hashes_is_a_paragraph, "####### foo\n", "<p>####### foo</p>\n");
spec_test!(requires_a_space, "#5 bolt\n", "<p>#5 bolt</p>\n");
spec_test!(escaped_hash_is_text, "\\## foo\n", "<p>## foo</p>\n");
spec_test!(inline_content_is_parsed, "# foo *bar* \\*baz\\*\n", "<h1>foo <em>bar</em> *baz*</h1>\n");
spec_test!(leading_and_trailing_whitespace, "#                  foo                     \n", "<h1>foo</h1>\n");
spec_test!(three_spaces_of_indent_are_fine, "   ### foo\n", "<h3>foo</h3>\n");
spec_test!(four_spaces_is_code, "    # foo\n", "<pre><code># foo\n</code></pre>\n");
spec_test!(closing_sequence, "## foo ##\n", "<h2>foo</h2>\n");
spec_test!(closing_sequence_length_is_free, "# foo ##################################\n", "<h1>foo</h1>\n");
spec_test!(closing_sequence_needs_whitespace, "### foo###\n", "<h3>foo###</h3>\n");
spec_test!(empty_headings, "## \n#\n### ###\n", "<h2></h2>\n<h1></h1>\n<h3></h3>\n");
spec_test!(interrupts_a_paragraph, "foo\n# bar\n", "<p>foo</p>\n<h1>bar</h1>\n");
spec_test!(no_blank_lines_needed, "****\n## foo\n****\n", "<hr />\n<h2>foo</h2>\n<hr />\n");
