use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::source::PrefixedLine;

/// The universal fallback: any non-blank line nothing else claims starts
/// or continues a paragraph. The accumulation itself (lazy continuation,
/// setext conversion) lives on the scanner.
#[derive(Debug)]
pub(super) struct Paragraph;

impl BlockRule for Paragraph {
    fn kind(&self) -> &'static str {
        "paragraph"
    }

    fn priority(&self) -> u8 {
        priority::PARAGRAPH
    }

    fn match_line(&self, line: &PrefixedLine<'_>, ctx: &BlockContext) -> bool {
        !ctx.interrupting && !line.is_blank()
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        scanner.parse_paragraph()
    }
}
