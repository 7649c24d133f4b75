use crate::commonmark::harness::spec_test;

// Any ASCII punctuation character can be backslash-escaped into a literal
// with no surrounding markup.
#[test]
fn every_ascii_punctuation_escapes() {
    for byte in 0u8..=127 {
        if !byte.is_ascii_punctuation() {
            continue;
        }
        let ch = byte as char;
        let input = format!("\\{ch}\n");
        let expected_char = match ch {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            '"' => "&quot;".to_string(),
            other => other.to_string(),
        };
        let expected = format!("<p>{expected_char}</p>\n");
        assert_eq!(expected, marko::convert(&input), "escaping {ch:?}");
    }
}

spec_test!(
    other_characters_keep_the_backslash,
    "\\A\\a\\ \\3\n",
    "<p>\\A\\a\\ \\3</p>\n"
);
spec_test!(
    escapes_disable_markup,
    "\\*not emphasized*\n",
    "<p>*not emphasized*</p>\n"
);
spec_test!(
    escaped_bracket_is_not_a_link,
    "\\[not a link](/foo)\n",
    "<p>[not a link](/foo)</p>\n"
);
spec_test!(
    escaped_backslash_before_emphasis,
    "\\\\*emphasis*\n",
    "<p>\\<em>emphasis</em></p>\n"
);
spec_test!(
    no_escapes_inside_code_spans,
    "`` \\[\\` ``\n",
    "<p><code>\\[\\`</code></p>\n"
);
spec_test!(
    no_escapes_inside_code_blocks,
    "    \\[\\]\n",
    "<pre><code>\\[\\]\n</code></pre>\n"
);
spec_test!(
    backslash_in_autolink_stays,
    "<http://example.com?find=\\*>\n",
    "<p><a href=\"http://example.com?find=%5C*\">http://example.com?find=\\*</a></p>\n"
);
