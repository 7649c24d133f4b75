pub mod harness {
    /// Test that the input converts to the given HTML with the default
    /// CommonMark parser.
    pub fn assert_html(input: &str, expected: &str) {
        let output = marko::convert(input);
        assert_eq!(expected, output, "input: {input:?}");
    }

    macro_rules! spec_test {
        ($name:ident, $input:expr, $expected:expr) => {
            #[test]
            fn $name() {
                crate::commonmark::harness::assert_html($input, $expected);
            }
        };
    }
    pub(crate) use spec_test;
}

mod atx_headings;
mod autolinks;
mod backslash_escapes;
mod block_quotes;
mod code_spans;
mod emphasis;
mod entities;
mod fenced_code_blocks;
mod html_blocks;
mod images;
mod indented_code_blocks;
mod line_breaks;
mod link_reference_definitions;
mod links;
mod lists;
mod paragraphs;
mod setext_headings;
mod tabs;
mod thematic_breaks;
