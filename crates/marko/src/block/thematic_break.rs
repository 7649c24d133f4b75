use lazy_static::lazy_static;
use regex::Regex;

use crate::ast::Block;
use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::source::PrefixedLine;

lazy_static! {
    static ref BREAK_LINE: Regex = Regex::new(
        r"^[ \t]*(?:(?:\*[ \t]*){3,}|(?:-[ \t]*){3,}|(?:_[ \t]*){3,})$"
    )
    .unwrap();
}

/// Three or more matching `*`, `-` or `_` characters, optionally interleaved
/// with whitespace. Ranked above lists so `- - -` never opens one.
#[derive(Debug)]
pub(super) struct ThematicBreak;

impl BlockRule for ThematicBreak {
    fn kind(&self) -> &'static str {
        "thematic_break"
    }

    fn priority(&self) -> u8 {
        priority::THEMATIC_BREAK
    }

    fn match_line(&self, line: &PrefixedLine<'_>, _ctx: &BlockContext) -> bool {
        line.indent() < 4 && line.expect(&BREAK_LINE).is_some()
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        scanner.consume_line();
        BlockParse::Matched(Block::ThematicBreak)
    }
}
