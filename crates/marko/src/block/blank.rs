use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::source::PrefixedLine;

/// Blank lines produce no element; they only terminate paragraphs and feed
/// list tightness tracking.
#[derive(Debug)]
pub(super) struct BlankLine;

impl BlockRule for BlankLine {
    fn kind(&self) -> &'static str {
        "blank_line"
    }

    fn priority(&self) -> u8 {
        priority::BLANK_LINE
    }

    fn match_line(&self, line: &PrefixedLine<'_>, _ctx: &BlockContext) -> bool {
        line.is_blank()
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        scanner.consume_line();
        BlockParse::Transparent
    }
}
