//! The two-pass inline tokenizer.
//!
//! Phase A walks the text once, jumping between trigger bytes and asking
//! the registered rules for matches; accepted tokens become nodes and the
//! stretches between them stay raw. Phase B splits those raw stretches
//! into plain text and delimiter runs, resolves brackets as they close,
//! and finally runs the emphasis algorithm. Completed emphasis is recorded
//! as character-span pairs, and the finished tree is assembled in a single
//! balanced walk over items and pair boundaries.

use std::ops::Range;
use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use crate::ast::{self, Block, Document, Inline, InlineContent, LinkRefDef, RawText};
use crate::inline::delimiter::{
    bracket_delim, emphasis_delim, process_emphasis, Delim, Pair, PairKind,
};
use crate::inline::link::{
    normalize_label, parse_inline_resource, scan_link_label,
};
use crate::inline::{relate, InlineMatch, InlineRule, SpanRelation};
use crate::registry::ElementRegistry;

/// Nested inline containers beyond this depth degrade to literal text.
const MAX_INLINE_DEPTH: usize = 64;

/// Run the inline tokenizer over every block that still carries a raw
/// inline body. After this pass no `InlineContent::Raw` values remain.
pub(crate) fn process_document(doc: &mut Document, registry: &ElementRegistry) {
    let refs = &doc.link_ref_defs;
    for block in &mut doc.children {
        process_block(block, refs, registry);
    }
}

fn process_block(
    block: &mut Block,
    refs: &FxHashMap<String, LinkRefDef>,
    registry: &ElementRegistry,
) {
    match block {
        Block::Heading(h) | Block::SetextHeading(h) => process_body(&mut h.body, refs, registry),
        Block::Paragraph(p) => process_body(&mut p.body, refs, registry),
        Block::Quote(q) => {
            for child in &mut q.children {
                process_block(child, refs, registry);
            }
        }
        Block::List(l) => {
            for child in &mut l.children {
                process_block(child, refs, registry);
            }
        }
        Block::ListItem(item) => {
            for child in &mut item.children {
                process_block(child, refs, registry);
            }
        }
        _ => {}
    }
}

fn process_body(
    body: &mut InlineContent,
    refs: &FxHashMap<String, LinkRefDef>,
    registry: &ElementRegistry,
) {
    if let InlineContent::Raw(text) = body {
        let text = std::mem::take(text);
        let mut ctx = InlineContext::new(&text, refs, registry);
        let children = ctx.tokenize_range(0..text.len());
        *body = InlineContent::Parsed(children);
    }
}

/// Shared state handed to inline rules. Rules read the text and the link
/// reference map, and may re-tokenize an inner range (a fresh delimiter
/// context, the way nested constructs require).
pub struct InlineContext<'p> {
    text: &'p str,
    refs: &'p FxHashMap<String, LinkRefDef>,
    registry: &'p ElementRegistry,
    depth: usize,
}

impl<'p> InlineContext<'p> {
    pub(crate) fn new(
        text: &'p str,
        refs: &'p FxHashMap<String, LinkRefDef>,
        registry: &'p ElementRegistry,
    ) -> Self {
        Self {
            text,
            refs,
            registry,
            depth: 0,
        }
    }

    pub fn text(&self) -> &'p str {
        self.text
    }

    pub fn link_ref_defs(&self) -> &'p FxHashMap<String, LinkRefDef> {
        self.refs
    }

    /// Tokenize a subrange of the text with a fresh delimiter context.
    /// Surrounding characters still participate in flanking decisions.
    pub fn tokenize_range(&mut self, range: Range<usize>) -> Vec<Inline> {
        if self.depth >= MAX_INLINE_DEPTH {
            let text = self.text[range].to_string();
            return vec![Inline::RawText(RawText { text, escape: true })];
        }
        self.depth += 1;
        let tokens = self.scan_tokens(range.clone());
        let resolver = Resolver::new(self, range, tokens);
        let result = resolver.resolve();
        self.depth -= 1;
        result
    }

    /// Phase A: find non-emphasis tokens, resolving overlap positionally —
    /// the earlier candidate wins, and at equal positions the first rule in
    /// priority-then-registration order does.
    fn scan_tokens(&mut self, range: Range<usize>) -> Vec<(Range<usize>, Inline)> {
        let rules: Vec<Arc<dyn InlineRule>> = self.registry.inlines().to_vec();
        let mut trigger_table = [false; 256];
        for rule in &rules {
            for byte in rule.triggers() {
                trigger_table[*byte as usize] = true;
            }
        }

        let bytes = self.text.as_bytes();
        let mut tokens: Vec<(Range<usize>, Inline)> = Vec::new();
        let mut last_end = range.start;
        let mut pos = range.start;
        while pos < range.end {
            let byte = bytes[pos];
            if !trigger_table[byte as usize] {
                pos += 1;
                continue;
            }
            let mut accepted: Option<InlineMatch> = None;
            for rule in &rules {
                if rule.is_virtual() || !rule.triggers().contains(&byte) {
                    continue;
                }
                if let Some(found) = rule.find(self, pos) {
                    accepted = Some(found);
                    break;
                }
            }
            match accepted {
                // A match may extend backwards over whitespace (line breaks
                // swallow trailing spaces) but never into a prior token.
                Some(m) if m.end <= range.end && m.end > pos => {
                    let span = m.start.max(last_end)..m.end;
                    debug_assert!(tokens
                        .iter()
                        .all(|(prior, _)| relate(prior, &span) == SpanRelation::Precede));
                    tokens.push((span, m.node));
                    last_end = m.end;
                    pos = m.end;
                }
                _ => pos += 1,
            }
        }
        tokens
    }
}

/// One entry in the working sequence Phase B operates on. The vector's
/// length never changes during resolution; entries are only rewritten in
/// place, so delimiter records can hold stable indices.
#[derive(Debug)]
enum Item {
    Node { span: Range<usize>, node: Inline },
    Text { span: Range<usize> },
    Delim { span: Range<usize>, delim: usize },
    Consumed,
}

struct Resolver<'c, 'p> {
    ctx: &'c mut InlineContext<'p>,
    range: Range<usize>,
    items: Vec<Item>,
    delims: Vec<Delim>,
    pairs: Vec<Pair>,
}

impl<'c, 'p> Resolver<'c, 'p> {
    fn new(
        ctx: &'c mut InlineContext<'p>,
        range: Range<usize>,
        tokens: Vec<(Range<usize>, Inline)>,
    ) -> Self {
        let mut resolver = Self {
            ctx,
            range: range.clone(),
            items: Vec::new(),
            delims: Vec::new(),
            pairs: Vec::new(),
        };
        let mut cursor = range.start;
        for (span, node) in tokens {
            if cursor < span.start {
                resolver.segment_text(cursor..span.start);
            }
            cursor = span.end;
            resolver.items.push(Item::Node { span, node });
        }
        if cursor < range.end {
            resolver.segment_text(cursor..range.end);
        }
        resolver
    }

    /// Split a raw stretch into plain text and delimiter items, depositing
    /// delimiter records as they are found.
    fn segment_text(&mut self, span: Range<usize>) {
        let text = self.ctx.text;
        let bytes = text.as_bytes();
        let mut start = span.start;
        let mut pos = span.start;
        while pos < span.end {
            match bytes[pos] {
                ch @ (b'*' | b'_') => {
                    let run_end = pos
                        + bytes[pos..span.end]
                            .iter()
                            .take_while(|b| **b == ch)
                            .count();
                    self.flush_text(start..pos);
                    let delim = emphasis_delim(text, self.items.len(), ch, pos..run_end);
                    self.push_delim(delim, pos..run_end);
                    pos = run_end;
                    start = run_end;
                }
                b'[' => {
                    if pos > start && bytes[pos - 1] == b'!' {
                        self.flush_text(start..pos - 1);
                        let delim = bracket_delim(self.items.len(), b'!', pos - 1..pos + 1);
                        self.push_delim(delim, pos - 1..pos + 1);
                    } else {
                        self.flush_text(start..pos);
                        let delim = bracket_delim(self.items.len(), b'[', pos..pos + 1);
                        self.push_delim(delim, pos..pos + 1);
                    }
                    pos += 1;
                    start = pos;
                }
                b']' => {
                    self.flush_text(start..pos);
                    let delim = bracket_delim(self.items.len(), b']', pos..pos + 1);
                    self.push_delim(delim, pos..pos + 1);
                    pos += 1;
                    start = pos;
                }
                _ => pos += 1,
            }
        }
        self.flush_text(start..span.end);
    }

    fn flush_text(&mut self, span: Range<usize>) {
        if !span.is_empty() {
            self.items.push(Item::Text { span });
        }
    }

    fn push_delim(&mut self, delim: Delim, span: Range<usize>) {
        let index = self.delims.len();
        self.delims.push(delim);
        self.items.push(Item::Delim { span, delim: index });
    }

    /// Phase B proper: resolve brackets in order, then emphasis, then build
    /// the tree.
    fn resolve(mut self) -> Vec<Inline> {
        let mut index = 0;
        while index < self.items.len() {
            let closer = match &self.items[index] {
                Item::Delim { delim, .. } => (self.delims[*delim].ch == b']').then_some(*delim),
                _ => None,
            };
            index = match closer {
                Some(delim) => self.close_bracket(index, delim),
                None => index + 1,
            };
        }

        let delims_len = self.delims.len();
        process_emphasis(&mut self.delims, 0..delims_len, &mut self.pairs);
        let pairs = std::mem::take(&mut self.pairs);
        self.assemble(0..self.items.len(), pairs)
    }

    /// Handle a `]`: find the nearest open bracket, try the resource forms,
    /// and either splice a link/image into place or leave literal text.
    /// Returns the next item index to examine.
    fn close_bracket(&mut self, close_item: usize, close_delim: usize) -> usize {
        let close_span = self.delims[close_delim].span.clone();
        self.delims[close_delim].count = 0;

        let Some(opener) = self
            .delims[..close_delim]
            .iter()
            .rposition(|d| d.is_bracket() && d.ch != b']' && d.count > 0)
        else {
            self.textify(close_item);
            return close_item + 1;
        };
        // The opener pairs with this closer no matter what follows.
        self.delims[opener].count = 0;
        if !self.delims[opener].active {
            self.textify(close_item);
            return close_item + 1;
        }

        let is_image = self.delims[opener].ch == b'!';
        let label_span = self.delims[opener].span.end..close_span.start;
        let after = close_span.end;

        let Some((dest, title, end)) = self.match_resource(after, &label_span) else {
            self.textify(close_item);
            return close_item + 1;
        };

        // Tokens straddling the resource boundary veto the link; tokens
        // wholly inside it are plain destination/title bytes and disappear.
        if !self.consume_span(close_item + 1, end) {
            self.textify(close_item);
            return close_item + 1;
        }

        let opener_item = self.delims[opener].item;
        let opener_start = self.delims[opener].span.start;

        // Emphasis inside the label resolves now, bounded by the brackets.
        process_emphasis(&mut self.delims, opener + 1..close_delim, &mut self.pairs);
        let all_pairs = std::mem::take(&mut self.pairs);
        let (label_pairs, rest): (Vec<Pair>, Vec<Pair>) = all_pairs.into_iter().partition(|p| {
            p.open.start >= label_span.start && p.close.end <= label_span.end
        });
        self.pairs = rest;
        let mut children = self.assemble(opener_item + 1..close_item, label_pairs);

        for delim in &mut self.delims[opener + 1..close_delim] {
            delim.deactivate();
        }
        if !is_image {
            // Links cannot nest: every earlier link opener dies with this
            // closure.
            for delim in &mut self.delims[..opener] {
                if delim.ch == b'[' && delim.active {
                    delim.deactivate();
                }
            }
        }

        let node = if is_image {
            children = strip_links(children);
            Inline::Image(ast::Image {
                dest,
                title,
                children,
            })
        } else {
            Inline::Link(ast::Link {
                dest,
                title,
                children,
            })
        };
        self.items[close_item] = Item::Consumed;
        self.items[opener_item] = Item::Node {
            span: opener_start..end,
            node,
        };
        close_item + 1
    }

    /// Try the resource forms behind a closed bracket: inline `(…)`, full
    /// `[ref]`, collapsed `[]`, then shortcut. Returns the destination,
    /// title, and the position after the resource.
    fn match_resource(
        &mut self,
        after: usize,
        label_span: &Range<usize>,
    ) -> Option<(String, Option<String>, usize)> {
        let text = self.ctx.text;
        if text.as_bytes().get(after) == Some(&b'(') {
            if let Some(resource) = parse_inline_resource(text, after, self.range.end) {
                return Some(resource);
            }
        }

        if text.as_bytes().get(after) == Some(&b'[') {
            if let Some((inner, end)) = scan_link_label(text, after) {
                if end <= self.range.end {
                    return if inner.is_empty() {
                        // Collapsed reference: the label is the link text.
                        self.lookup(&text[label_span.clone()])
                            .map(|(dest, title)| (dest, title, end))
                    } else {
                        // Full reference: an unknown label is not a link,
                        // with no shortcut fallback.
                        self.lookup(&text[inner]).map(|(dest, title)| (dest, title, end))
                    };
                }
            }
        }

        self.lookup(&text[label_span.clone()])
            .map(|(dest, title)| (dest, title, after))
    }

    fn lookup(&self, label: &str) -> Option<(String, Option<String>)> {
        if label.trim().is_empty() {
            return None;
        }
        let def = self.ctx.refs.get(&normalize_label(label))?;
        Some((def.dest.clone(), def.title.clone()))
    }

    /// Mark every item covered by `[.. end)` as consumed, starting from
    /// `from`. A text item reaching past the end is split; any other
    /// partial overlap fails the caller's match.
    fn consume_span(&mut self, from: usize, end: usize) -> bool {
        // First pass: make sure the boundary is clean.
        let mut plan: Vec<usize> = Vec::new();
        let mut split: Option<(usize, Range<usize>)> = None;
        for index in from..self.items.len() {
            let span = match &self.items[index] {
                Item::Node { span, .. } | Item::Text { span } | Item::Delim { span, .. } => {
                    span.clone()
                }
                Item::Consumed => continue,
            };
            if span.start >= end {
                break;
            }
            if span.end <= end {
                plan.push(index);
                continue;
            }
            if matches!(self.items[index], Item::Text { .. }) {
                split = Some((index, end..span.end));
                break;
            }
            return false;
        }

        for index in plan {
            if let Item::Delim { delim, .. } = &self.items[index] {
                let delim = *delim;
                self.delims[delim].count = 0;
                self.delims[delim].deactivate();
            }
            self.items[index] = Item::Consumed;
        }
        if let Some((index, span)) = split {
            self.items[index] = Item::Text { span };
        }
        true
    }

    fn textify(&mut self, index: usize) {
        if let Item::Delim { span, .. } = &self.items[index] {
            self.items[index] = Item::Text { span: span.clone() };
        }
    }

    /// Build the final node list for a range of items plus the emphasis
    /// pairs recorded inside it. Consumes the item contents.
    fn assemble(&mut self, item_range: Range<usize>, pairs: Vec<Pair>) -> Vec<Inline> {
        enum Event {
            Text(Range<usize>),
            Node(Inline),
            Open(PairKind),
            Close,
        }

        let mut events: Vec<(usize, Event)> = Vec::new();
        for index in item_range {
            match std::mem::replace(&mut self.items[index], Item::Consumed) {
                Item::Consumed => {}
                Item::Node { span, node } => events.push((span.start, Event::Node(node))),
                Item::Text { span } => {
                    if !span.is_empty() {
                        events.push((span.start, Event::Text(span)));
                    }
                }
                Item::Delim { delim, .. } => {
                    let leftover = self.delims[delim].leftover_span();
                    if !leftover.is_empty() {
                        events.push((leftover.start, Event::Text(leftover)));
                    }
                }
            }
        }
        for pair in pairs {
            events.push((pair.open.start, Event::Open(pair.kind)));
            events.push((pair.close.start, Event::Close));
        }
        events.sort_by_key(|(pos, _)| *pos);

        let text = self.ctx.text;
        let mut stack: Vec<Vec<Inline>> = vec![Vec::new()];
        let mut kinds: Vec<PairKind> = Vec::new();
        for (pos, event) in events {
            match event {
                Event::Text(span) => push_text(stack.last_mut().unwrap(), &text[span]),
                Event::Node(node) => stack.last_mut().unwrap().push(node),
                Event::Open(kind) => {
                    stack.push(Vec::new());
                    kinds.push(kind);
                }
                Event::Close => {
                    let children = stack.pop().unwrap_or_default();
                    // Pairs are nested by construction; anything else is a
                    // delimiter-stack bug, not bad input.
                    let kind = kinds.pop().unwrap_or_else(|| {
                        panic!("unbalanced emphasis span closing at byte {pos}")
                    });
                    let node = match kind {
                        PairKind::Emphasis => Inline::Emphasis(ast::Emphasis { children }),
                        PairKind::Strong => {
                            Inline::StrongEmphasis(ast::StrongEmphasis { children })
                        }
                    };
                    stack.last_mut().unwrap().push(node);
                }
            }
        }
        assert_eq!(
            stack.len(),
            1,
            "unbalanced emphasis spans left open at end of inline content"
        );
        debug!("assembled {} inline nodes", stack.last().unwrap().len());
        stack.pop().unwrap()
    }
}

/// Append raw text, merging into a trailing escaping `RawText` node so
/// adjacent leftovers collapse into a single node.
fn push_text(children: &mut Vec<Inline>, text: &str) {
    if let Some(Inline::RawText(last)) = children.last_mut() {
        if last.escape {
            last.text.push_str(text);
            return;
        }
    }
    children.push(Inline::RawText(RawText {
        text: text.to_string(),
        escape: true,
    }));
}

/// Images render their label as plain content: any links nested inside are
/// replaced by their own children.
fn strip_links(children: Vec<Inline>) -> Vec<Inline> {
    let mut out = Vec::with_capacity(children.len());
    for node in children {
        match node {
            Inline::Link(link) => out.extend(strip_links(link.children)),
            Inline::Emphasis(mut e) => {
                e.children = strip_links(e.children);
                out.push(Inline::Emphasis(e));
            }
            Inline::StrongEmphasis(mut e) => {
                e.children = strip_links(e.children);
                out.push(Inline::StrongEmphasis(e));
            }
            other => out.push(other),
        }
    }
    out
}
