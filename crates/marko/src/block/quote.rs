use log::warn;

use crate::ast::{self, Block};
use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::source::{Prefix, PrefixedLine};

/// Block quotes. The rule only registers the prefix matcher; the recursive
/// `parse_children` call consumes the `>` marker of the current line along
/// with every continuation line.
#[derive(Debug)]
pub(super) struct Quote;

impl BlockRule for Quote {
    fn kind(&self) -> &'static str {
        "quote"
    }

    fn priority(&self) -> u8 {
        priority::QUOTE
    }

    fn match_line(&self, line: &PrefixedLine<'_>, _ctx: &BlockContext) -> bool {
        line.indent() < 4 && line.content()[line.indent_len()..].starts_with('>')
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        if scanner.at_max_depth() {
            warn!("maximum container depth reached; treating quote marker as text");
            return BlockParse::Declined;
        }
        scanner.push_prefix(Prefix::Quote);
        let (children, _) = scanner.parse_children();
        scanner.pop_prefix();
        BlockParse::Matched(Block::Quote(ast::Quote { children }))
    }
}
