use crate::commonmark::harness::spec_test;

spec_test!(all_three_characters, "***\n---\n___\n", "<hr />\n<hr />\n<hr />\n");
spec_test!(wrong_characters, "+++\n", "<p>+++</p>\n");
spec_test!(equals_are_not_breaks, "===\n", "<p>===</p>\n");
spec_test!(two_is_not_enough, "--\n**\n__\n", "<p>--\n**\n__</p>\n");
spec_test!(up_to_three_spaces_of_indent, " ***\n  ***\n   ***\n", "<hr />\n<hr />\n<hr />\n");
spec_test!(four_spaces_is_code, "    ***\n", "<pre><code>***\n</code></pre>\n");
spec_test!(more_than_three_characters, "_____________________________________\n", "<hr />\n");
spec_test!(spaces_between_characters, " - - -\n", "<hr />\n");
spec_test!(spaces_at_the_end, "- - - -    \n", "<hr />\n");
spec_test!(no_other_characters_allowed, "_ _ _ _ a\n\na------\n", "<p>_ _ _ _ a</p>\n<p>a------</p>\n");
spec_test!(interrupts_a_paragraph, "Foo\n***\nbar\n", "<p>Foo</p>\n<hr />\n<p>bar</p>\n");
spec_test!(wins_over_a_list_item, "* Foo\n* * *\n* Bar\n", "<ul>\n<li>Foo</li>\n</ul>\n<hr />\n<ul>\n<li>Bar</li>\n</ul>\n");
