//! The line-driven block scanner.
//!
//! The scanner owns the source cursor and the in-progress link reference
//! map, and drives the registered block rules over the input. Container
//! rules call back into [`BlockScanner::parse_children`] after pushing
//! their prefix matcher, so the open container stack lives implicitly in
//! the call stack plus the cursor's prefix stack.

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::ast::{self, Block, Document, InlineContent, LinkRefDef};
use crate::block::{BlockContext, BlockParse};
use crate::inline::link::normalize_label;
use crate::registry::ElementRegistry;
use crate::source::{Prefix, PrefixedLine, Source};

/// Containers nested deeper than this degrade to paragraph content instead
/// of recursing further.
const MAX_CONTAINER_DEPTH: usize = 128;

pub struct BlockScanner<'a, 'r> {
    source: Source<'a>,
    registry: &'r ElementRegistry,
    link_ref_defs: FxHashMap<String, LinkRefDef>,
    /// True when the most recently consumed structural line was blank.
    /// List rules read this to decide tightness.
    blank_pending: bool,
    depth: usize,
}

impl<'a, 'r> BlockScanner<'a, 'r> {
    pub fn new(text: &'a str, registry: &'r ElementRegistry) -> Self {
        Self {
            source: Source::new(text),
            registry,
            link_ref_defs: FxHashMap::default(),
            blank_pending: false,
            depth: 0,
        }
    }

    /// Run the scanner over the whole input and produce the document. Never
    /// fails: unrecognizable lines end up in paragraphs.
    pub fn scan(mut self) -> Document {
        let (children, _) = self.parse_children();
        debug_assert!(
            self.source.is_exhausted(),
            "block scanner stopped before the end of input"
        );
        debug!(
            "block scan produced {} top-level blocks, {} link reference definitions",
            children.len(),
            self.link_ref_defs.len()
        );
        Document {
            children,
            link_ref_defs: self.link_ref_defs,
        }
    }

    // Cursor access for block rules.

    pub fn peek(&self) -> Option<PrefixedLine<'_>> {
        self.source.peek()
    }

    /// Consume the current line as block structure, tracking blank lines for
    /// list tightness.
    pub fn consume_line(&mut self) {
        if let Some(line) = self.source.peek() {
            self.blank_pending = line.is_blank();
        }
        self.source.consume_line();
    }

    /// Consume the current line as verbatim element content (code block and
    /// HTML block bodies). Blank lines consumed this way are content, not
    /// separators, so they never make a list loose.
    pub fn consume_line_verbatim(&mut self) {
        self.blank_pending = false;
        self.source.consume_line();
    }

    /// Leave the rest of the current line pending for the rules invoked by a
    /// recursive [`parse_children`] call. See [`Source::advance_into_line`].
    pub fn advance_into_line(&mut self, rest: String, col: usize) {
        self.blank_pending = false;
        self.source.advance_into_line(rest, col);
    }

    pub fn push_prefix(&mut self, prefix: Prefix) {
        self.source.push_prefix(prefix);
    }

    pub fn pop_prefix(&mut self) {
        self.source.pop_prefix();
    }

    pub fn save(&mut self) {
        self.source.save();
    }

    pub fn restore(&mut self) {
        self.source.restore();
    }

    pub fn discard(&mut self) {
        self.source.discard();
    }

    pub fn blank_pending(&self) -> bool {
        self.blank_pending
    }

    pub fn at_max_depth(&self) -> bool {
        self.depth >= MAX_CONTAINER_DEPTH
    }

    /// Register a parsed link reference definition. The first definition of
    /// a label wins.
    pub fn register_link_ref_def(&mut self, def: LinkRefDef) {
        debug!("registering link reference definition [{}]", def.label);
        self.link_ref_defs
            .entry(normalize_label(&def.label))
            .or_insert(def);
    }

    /// Parse blocks at the current container level until the input ends or
    /// a prefix above this level stops matching. Returns the blocks plus
    /// whether a blank line separated two of them, which is what decides
    /// list tightness.
    pub fn parse_children(&mut self) -> (Vec<Block>, bool) {
        let my_prefixes = self.source.prefix_count();
        let mut children: Vec<Block> = Vec::new();
        let mut internal_blank = false;
        self.depth += 1;

        loop {
            let Some(line) = self.source.peek() else { break };
            if line.matched < my_prefixes {
                break;
            }
            let is_blank = line.is_blank();
            drop(line);

            if !is_blank && self.blank_pending && !children.is_empty() {
                internal_blank = true;
            }

            if !self.dispatch(&mut children) {
                // No rule claimed the line. The fallback rules make this
                // unreachable for any registry containing them; consume the
                // line so a misconfigured registry cannot loop forever.
                warn!("no block rule claimed a line; skipping it");
                self.consume_line();
            }
        }

        self.depth -= 1;
        (children, internal_blank)
    }

    /// Offer the current line to the registered rules in priority order.
    /// Returns false if every rule declined.
    fn dispatch(&mut self, children: &mut Vec<Block>) -> bool {
        let ctx = BlockContext::default();
        let count = self.registry.blocks().len();
        for index in 0..count {
            let rule = self.registry.blocks()[index].clone();
            if rule.is_virtual() {
                continue;
            }
            let matched = match self.source.peek() {
                Some(line) => rule.match_line(&line, &ctx),
                None => false,
            };
            if !matched {
                continue;
            }
            match rule.parse(self) {
                BlockParse::Matched(block) => {
                    children.push(block);
                    return true;
                }
                BlockParse::Transparent => return true,
                BlockParse::Declined => continue,
            }
        }
        false
    }

    /// True if a rule registered ahead of `kind` claims the current line.
    /// Container rules use this inside their own line loops so that, for
    /// example, `- - -` stays a thematic break instead of a list item.
    pub fn line_matches_before(&self, kind: &str) -> bool {
        let Some(line) = self.source.peek() else {
            return false;
        };
        let ctx = BlockContext::default();
        for rule in self.registry.blocks() {
            if rule.kind() == kind {
                return false;
            }
            if !rule.is_virtual() && rule.match_line(&line, &ctx) {
                return true;
            }
        }
        false
    }

    /// True if the current line would start a block that is allowed to
    /// interrupt a paragraph. Used both for ending paragraphs and for
    /// rejecting lazy continuation candidates, so extension rules
    /// participate automatically.
    pub fn current_line_interrupts(&self) -> bool {
        let Some(line) = self.source.peek() else {
            return false;
        };
        let ctx = BlockContext { interrupting: true };
        self.registry
            .blocks()
            .iter()
            .any(|rule| !rule.is_virtual() && rule.match_line(&line, &ctx))
    }

    /// Accumulate a paragraph from the current line. Continuation lines may
    /// be lazy: when a container prefix above this level stops matching,
    /// the remainder still joins the paragraph as long as it is not blank
    /// and would not start a new block. A `=`/`-` underline converts the
    /// paragraph into a setext heading.
    pub(crate) fn parse_paragraph(&mut self) -> BlockParse {
        let my_prefixes = self.source.prefix_count();
        let mut text = String::new();
        let mut setext_level: u8 = 0;
        let mut first = true;

        loop {
            let Some(line) = self.source.peek() else { break };
            if line.is_blank() {
                break;
            }
            let fully = line.matched >= my_prefixes;
            let indent = line.indent();
            let content = line.content().to_string();
            drop(line);

            if fully && !first && indent < 4 {
                let trimmed = content.trim_matches([' ', '\t']);
                if !trimmed.is_empty()
                    && (trimmed.bytes().all(|b| b == b'=') || trimmed.bytes().all(|b| b == b'-'))
                {
                    setext_level = if trimmed.as_bytes()[0] == b'=' { 1 } else { 2 };
                    self.consume_line();
                    break;
                }
            }

            if !first && self.current_line_interrupts() {
                break;
            }

            text.push_str(content.trim_start_matches([' ', '\t']));
            text.push('\n');
            self.consume_line();
            first = false;
        }

        // Final whitespace never participates in the inline content; a hard
        // break cannot end a paragraph.
        let body = InlineContent::Raw(text.trim_end().to_string());
        if setext_level > 0 {
            BlockParse::Matched(Block::SetextHeading(ast::Heading {
                level: setext_level,
                body,
            }))
        } else {
            BlockParse::Matched(Block::Paragraph(ast::Paragraph { body }))
        }
    }
}
