//! Block-level element kinds and the scanner that drives them.
//!
//! Each kind is a rule with a `match_line` predicate and a `parse` method.
//! The scanner walks lines through the source cursor, asks the registered
//! rules in descending priority order which one claims the current line,
//! and lets the winner consume. Rules never fail: they consume or decline,
//! and any line nothing claims becomes paragraph content.

use std::sync::Arc;

use crate::ast::Block;
use crate::registry::ElementRegistry;
use crate::source::PrefixedLine;

mod blank;
mod code;
mod fence;
mod heading;
mod html_block;
mod link_ref_def;
mod list;
mod paragraph;
mod quote;
mod scanner;
mod thematic_break;

pub use scanner::BlockScanner;

/// Context handed to `match_line`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockContext {
    /// True when the match is being asked whether this line interrupts an
    /// open paragraph (or would start a block on a lazy-continuation
    /// candidate). Kinds that cannot interrupt paragraphs must decline.
    pub interrupting: bool,
}

/// Outcome of a block rule's `parse`.
pub enum BlockParse {
    Matched(Block),
    /// Input was consumed but no element is produced (blank lines, link
    /// reference definitions).
    Transparent,
    /// The rule changed its mind without consuming; the scanner moves on to
    /// the next matching rule.
    Declined,
}

pub trait BlockRule: Send + Sync {
    /// Stable snake-case kind name, used for override matching and renderer
    /// dispatch.
    fn kind(&self) -> &'static str;

    /// Higher priorities are tried earlier.
    fn priority(&self) -> u8;

    /// Virtual kinds are only produced as by-products of other kinds and
    /// never match a line themselves.
    fn is_virtual(&self) -> bool {
        false
    }

    /// When set, registering this rule replaces an existing rule of the
    /// same kind name.
    fn replaces(&self) -> bool {
        false
    }

    fn match_line(&self, line: &PrefixedLine<'_>, ctx: &BlockContext) -> bool;

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse;
}

// Priorities encode the CommonMark edge rules: a blank line wins over
// everything, paragraphs are the universal fallback, and a thematic break
// beats a list marker so `- - -` never opens a list.
pub(crate) mod priority {
    pub const BLANK_LINE: u8 = 10;
    pub const HTML_BLOCK: u8 = 9;
    pub const HEADING: u8 = 8;
    pub const FENCED_CODE: u8 = 7;
    pub const THEMATIC_BREAK: u8 = 6;
    pub const LIST: u8 = 5;
    pub const QUOTE: u8 = 4;
    pub const LINK_REF_DEF: u8 = 3;
    pub const CODE_BLOCK: u8 = 2;
    pub const PARAGRAPH: u8 = 1;
}

/// A virtual block kind descriptor: present in the registry so the kind can
/// be addressed and overridden, but never matching input directly.
#[derive(Debug)]
struct VirtualBlockKind {
    kind: &'static str,
    priority: u8,
}

impl BlockRule for VirtualBlockKind {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn is_virtual(&self) -> bool {
        true
    }

    fn match_line(&self, _line: &PrefixedLine<'_>, _ctx: &BlockContext) -> bool {
        false
    }

    fn parse(&self, _scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        BlockParse::Declined
    }
}

pub(crate) fn register_defaults(registry: &mut ElementRegistry) {
    registry.add_block(Arc::new(blank::BlankLine));
    registry.add_block(Arc::new(html_block::HtmlBlock));
    registry.add_block(Arc::new(heading::Heading));
    registry.add_block(Arc::new(VirtualBlockKind {
        kind: "setext_heading",
        priority: priority::HEADING,
    }));
    registry.add_block(Arc::new(fence::FencedCode));
    registry.add_block(Arc::new(thematic_break::ThematicBreak));
    registry.add_block(Arc::new(list::List));
    registry.add_block(Arc::new(VirtualBlockKind {
        kind: "list_item",
        priority: priority::LIST,
    }));
    registry.add_block(Arc::new(quote::Quote));
    registry.add_block(Arc::new(link_ref_def::LinkRefDef));
    registry.add_block(Arc::new(code::CodeBlock));
    registry.add_block(Arc::new(paragraph::Paragraph));
}
