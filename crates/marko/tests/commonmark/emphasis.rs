use crate::commonmark::harness::spec_test;

spec_test!(star_emphasis, "*foo bar*\n", "<p><em>foo bar</em></p>\n");
spec_test!(underscore_emphasis, "_foo bar_\n", "<p><em>foo bar</em></p>\n");
spec_test!(star_strong, "**foo bar**\n", "<p><strong>foo bar</strong></p>\n");
spec_test!(underscore_strong, "__foo bar__\n", "<p><strong>foo bar</strong></p>\n");
spec_test!(
    opener_cannot_face_whitespace,
    "a * foo bar*\n",
    "<p>a * foo bar*</p>\n"
);
spec_test!(intra_word_star_works, "5*6*78\n", "<p>5<em>6</em>78</p>\n");
spec_test!(intra_word_underscore_fails, "foo_bar_\n", "<p>foo_bar_</p>\n");
spec_test!(mixed_intra_word, "*a*b_c_\n", "<p><em>a</em>b_c_</p>\n");
spec_test!(
    underscore_next_to_punctuation,
    "foo-_(bar)_\n",
    "<p>foo-<em>(bar)</em></p>\n"
);
spec_test!(mismatched_delimiters_fail, "_foo*\n", "<p>_foo*</p>\n");
spec_test!(
    nested_parenthesized_strong,
    "*(**foo**)*\n",
    "<p><em>(<strong>foo</strong>)</em></p>\n"
);
spec_test!(
    nested_strong_in_strong,
    "__foo, __bar__, baz__\n",
    "<p><strong>foo, <strong>bar</strong>, baz</strong></p>\n"
);
spec_test!(em_in_strong, "**foo *bar* baz**\n", "<p><strong>foo <em>bar</em> baz</strong></p>\n");
spec_test!(triple_delimiters, "***foo***\n", "<p><em><strong>foo</strong></em></p>\n");
spec_test!(leftover_opener, "**foo*\n", "<p>*<em>foo</em></p>\n");
spec_test!(leftover_closer, "*foo**\n", "<p><em>foo</em>*</p>\n");
spec_test!(
    emphasis_cannot_cross,
    "*foo _bar* baz_\n",
    "<p><em>foo _bar</em> baz_</p>\n"
);
spec_test!(
    strong_emphasis_chain,
    "*foo**bar**baz*\n",
    "<p><em>foo<strong>bar</strong>baz</em></p>\n"
);
spec_test!(
    whitespace_facing_runs_stay_literal,
    "foo * a * bar\n",
    "<p>foo * a * bar</p>\n"
);

// For opener length o and closer length c, both able to open and close,
// pairing fails when o + c is a multiple of three unless both are.
#[test]
fn multiple_of_three_rule() {
    for opener in 1usize..=6 {
        for closer in 1usize..=6 {
            let input = format!("x{}a{}b\n", "*".repeat(opener), "*".repeat(closer));
            let output = marko::convert(&input);
            let blocked = (opener + closer) % 3 == 0 && (opener % 3 != 0 || closer % 3 != 0);
            let has_markup = output.contains("<em>") || output.contains("<strong>");
            assert_eq!(
                !blocked, has_markup,
                "opener {opener}, closer {closer}: {output:?}"
            );
        }
    }
}
