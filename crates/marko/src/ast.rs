//! The element model: typed block and inline nodes produced by the block
//! scanner and inline tokenizer.
//!
//! Every node has a stable snake-case kind name used for renderer dispatch
//! and AST serialization. Nodes are created by the parser and never mutated
//! by renderers.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The root of a parsed document. Link reference definitions are lifted out
/// of the block tree into `link_ref_defs` as they are parsed; the first
/// definition of a label wins.
#[derive(Debug, Default)]
pub struct Document {
    pub children: Vec<Block>,
    /// Keyed by the normalized label (see [`crate::inline::link::normalize_label`]).
    pub link_ref_defs: FxHashMap<String, LinkRefDef>,
}

impl Document {
    /// Returns true if any block still holds an unparsed inline body,
    /// meaning the inline tokenizer has not yet run over this document.
    pub fn has_raw_inline_content(&self) -> bool {
        fn block_is_raw(block: &Block) -> bool {
            match block {
                Block::Heading(h) | Block::SetextHeading(h) => h.body.is_raw(),
                Block::Paragraph(p) => p.body.is_raw(),
                Block::Quote(q) => q.children.iter().any(block_is_raw),
                Block::List(l) => l.children.iter().any(block_is_raw),
                Block::ListItem(item) => item.children.iter().any(block_is_raw),
                _ => false,
            }
        }
        self.children.iter().any(block_is_raw)
    }
}

/// A link reference definition: `[label]: dest "title"`. Never rendered;
/// looked up by reference links and images during inline parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRefDef {
    /// The label as written, before normalization.
    pub label: String,
    pub dest: String,
    pub title: Option<String>,
}

/// The inline content of a leaf block across the two parsing phases. Block
/// parsing leaves the raw text behind; the inline tokenizer replaces it with
/// the parsed element list. After a full parse no `Raw` values remain.
#[derive(Debug)]
pub enum InlineContent {
    Raw(String),
    Parsed(Vec<Inline>),
}

impl Default for InlineContent {
    fn default() -> Self {
        InlineContent::Parsed(Vec::new())
    }
}

impl InlineContent {
    pub fn is_raw(&self) -> bool {
        matches!(self, InlineContent::Raw(_))
    }

    /// The parsed element list, or an empty slice while still raw.
    pub fn parsed(&self) -> &[Inline] {
        match self {
            InlineContent::Raw(_) => &[],
            InlineContent::Parsed(children) => children,
        }
    }
}

#[derive(Debug)]
pub enum Block {
    Heading(Heading),
    /// Produced when a paragraph is followed by a `=`/`-` underline; never
    /// matched directly.
    SetextHeading(Heading),
    Paragraph(Paragraph),
    Quote(Quote),
    List(List),
    ListItem(ListItem),
    /// An indented code block.
    CodeBlock(CodeBlock),
    FencedCode(FencedCode),
    HtmlBlock(HtmlBlock),
    ThematicBreak,
    Custom(Box<dyn CustomBlock>),
}

impl Block {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading(_) => "heading",
            Block::SetextHeading(_) => "setext_heading",
            Block::Paragraph(_) => "paragraph",
            Block::Quote(_) => "quote",
            Block::List(_) => "list",
            Block::ListItem(_) => "list_item",
            Block::CodeBlock(_) => "code_block",
            Block::FencedCode(_) => "fenced_code",
            Block::HtmlBlock(_) => "html_block",
            Block::ThematicBreak => "thematic_break",
            Block::Custom(custom) => custom.kind(),
        }
    }

    /// Child blocks of container blocks. Leaf blocks return an empty slice.
    pub fn children(&self) -> &[Block] {
        match self {
            Block::Quote(q) => &q.children,
            Block::List(l) => &l.children,
            Block::ListItem(item) => &item.children,
            Block::Custom(custom) => custom.children(),
            _ => &[],
        }
    }
}

#[derive(Debug)]
pub struct Heading {
    /// 1 through 6 for ATX headings; 1 or 2 for setext headings.
    pub level: u8,
    pub body: InlineContent,
}

#[derive(Debug, Default)]
pub struct Paragraph {
    pub body: InlineContent,
}

#[derive(Debug, Default)]
pub struct Quote {
    pub children: Vec<Block>,
}

#[derive(Debug)]
pub struct List {
    /// Always `ListItem` blocks.
    pub children: Vec<Block>,
    pub tight: bool,
    pub ordered: bool,
    /// The number of the first marker. Meaningless for bullet lists.
    pub start: u32,
    /// The bullet character for bullet lists (`-`, `+`, `*`), or the marker
    /// delimiter for ordered lists (`.`, `)`).
    pub bullet: char,
}

#[derive(Debug, Default)]
pub struct ListItem {
    pub children: Vec<Block>,
}

#[derive(Debug)]
pub struct CodeBlock {
    /// Always a single `RawText` with `escape` unset.
    pub children: Vec<Inline>,
}

impl CodeBlock {
    pub fn new(body: String) -> Self {
        Self {
            children: vec![Inline::RawText(RawText {
                text: body,
                escape: false,
            })],
        }
    }

    pub fn text(&self) -> &str {
        match self.children.first() {
            Some(Inline::RawText(raw)) => &raw.text,
            _ => "",
        }
    }
}

#[derive(Debug)]
pub struct FencedCode {
    /// The first word of the info string.
    pub lang: String,
    /// Any text after the first word of the info string.
    pub extra: Option<String>,
    /// Always a single `RawText` with `escape` unset.
    pub children: Vec<Inline>,
}

impl FencedCode {
    pub fn new(lang: String, extra: Option<String>, body: String) -> Self {
        Self {
            lang,
            extra,
            children: vec![Inline::RawText(RawText {
                text: body,
                escape: false,
            })],
        }
    }

    pub fn text(&self) -> &str {
        match self.children.first() {
            Some(Inline::RawText(raw)) => &raw.text,
            _ => "",
        }
    }
}

/// A raw HTML block. The body is held apart from `children` and is never
/// inline-parsed.
#[derive(Debug)]
pub struct HtmlBlock {
    pub body: String,
}

#[derive(Debug)]
pub enum Inline {
    RawText(RawText),
    Literal(Literal),
    LineBreak(LineBreak),
    CodeSpan(CodeSpan),
    Emphasis(Emphasis),
    StrongEmphasis(StrongEmphasis),
    Link(Link),
    Image(Image),
    AutoLink(AutoLink),
    InlineHtml(InlineHtml),
    Custom(Box<dyn CustomInline>),
}

impl Inline {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Inline::RawText(_) => "raw_text",
            Inline::Literal(_) => "literal",
            Inline::LineBreak(_) => "line_break",
            Inline::CodeSpan(_) => "code_span",
            Inline::Emphasis(_) => "emphasis",
            Inline::StrongEmphasis(_) => "strong_emphasis",
            Inline::Link(_) => "link",
            Inline::Image(_) => "image",
            Inline::AutoLink(_) => "auto_link",
            Inline::InlineHtml(_) => "inline_html",
            Inline::Custom(custom) => custom.kind(),
        }
    }

    pub fn children(&self) -> &[Inline] {
        match self {
            Inline::Emphasis(e) => &e.children,
            Inline::StrongEmphasis(e) => &e.children,
            Inline::Link(link) => &link.children,
            Inline::Image(image) => &image.children,
            Inline::Custom(custom) => custom.children(),
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    pub text: String,
    /// When set, renderers that escape text (HTML) escape this node. Code
    /// block and code span bodies carry it unset and handle escaping at the
    /// enclosing element.
    pub escape: bool,
}

/// A backslash-escaped character, preserved verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub ch: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreak {
    pub soft: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpan {
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Emphasis {
    pub children: Vec<Inline>,
}

#[derive(Debug, Default)]
pub struct StrongEmphasis {
    pub children: Vec<Inline>,
}

#[derive(Debug)]
pub struct Link {
    pub dest: String,
    pub title: Option<String>,
    pub children: Vec<Inline>,
}

#[derive(Debug)]
pub struct Image {
    pub dest: String,
    pub title: Option<String>,
    pub children: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoLink {
    /// The destination as written, without the surrounding angle brackets.
    pub dest: String,
    /// Email autolinks render with a `mailto:` scheme prepended.
    pub email: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineHtml {
    pub text: String,
}

/// A block element kind contributed by an extension. The serialization
/// methods feed the generic On-AST mapping, so the AST renderer never needs
/// to learn about new kinds.
pub trait CustomBlock: fmt::Debug + Send + Sync {
    fn kind(&self) -> &'static str;

    fn children(&self) -> &[Block] {
        &[]
    }

    /// Leaf text content, for kinds whose children are a string.
    fn text(&self) -> Option<&str> {
        None
    }

    /// Element-specific fields for AST serialization.
    fn fields(&self) -> serde_json::Map<String, serde_json::Value> {
        serde_json::Map::new()
    }
}

/// An inline element kind contributed by an extension.
pub trait CustomInline: fmt::Debug + Send + Sync {
    fn kind(&self) -> &'static str;

    fn children(&self) -> &[Inline] {
        &[]
    }

    fn text(&self) -> Option<&str> {
        None
    }

    fn fields(&self) -> serde_json::Map<String, serde_json::Value> {
        serde_json::Map::new()
    }
}

// On-AST contract: every element serializes to a mapping with at least
// `element` (the kind name) and `children` (a string for leaves, a list of
// nested mappings otherwise), plus element-specific fields when defined.

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("element", "document")?;
        map.serialize_entry("children", &self.children)?;
        if !self.link_ref_defs.is_empty() {
            // Sort for deterministic output across parses.
            let mut defs: Vec<(&String, &LinkRefDef)> = self.link_ref_defs.iter().collect();
            defs.sort_by(|a, b| a.0.cmp(b.0));
            let mut out = serde_json::Map::new();
            for (label, def) in defs {
                let mut entry = serde_json::Map::new();
                entry.insert("dest".into(), def.dest.clone().into());
                if let Some(title) = &def.title {
                    entry.insert("title".into(), title.clone().into());
                }
                out.insert(label.clone(), entry.into());
            }
            map.serialize_entry("link_ref_defs", &out)?;
        }
        map.end()
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("element", self.kind_name())?;
        match self {
            Block::Heading(h) | Block::SetextHeading(h) => {
                map.serialize_entry("level", &h.level)?;
                map.serialize_entry("children", h.body.parsed())?;
            }
            Block::Paragraph(p) => {
                map.serialize_entry("children", p.body.parsed())?;
            }
            Block::Quote(q) => {
                map.serialize_entry("children", &q.children)?;
            }
            Block::List(l) => {
                map.serialize_entry("ordered", &l.ordered)?;
                map.serialize_entry("tight", &l.tight)?;
                if l.ordered {
                    map.serialize_entry("start", &l.start)?;
                }
                map.serialize_entry("bullet", &l.bullet.to_string())?;
                map.serialize_entry("children", &l.children)?;
            }
            Block::ListItem(item) => {
                map.serialize_entry("children", &item.children)?;
            }
            Block::CodeBlock(code) => {
                map.serialize_entry("children", &code.children)?;
            }
            Block::FencedCode(code) => {
                map.serialize_entry("lang", &code.lang)?;
                if let Some(extra) = &code.extra {
                    map.serialize_entry("extra", extra)?;
                }
                map.serialize_entry("children", &code.children)?;
            }
            Block::HtmlBlock(html) => {
                map.serialize_entry("children", &html.body)?;
            }
            Block::ThematicBreak => {
                map.serialize_entry("children", &[] as &[Block])?;
            }
            Block::Custom(custom) => {
                for (key, value) in custom.fields() {
                    map.serialize_entry(&key, &value)?;
                }
                if let Some(text) = custom.text() {
                    map.serialize_entry("children", text)?;
                } else {
                    map.serialize_entry("children", custom.children())?;
                }
            }
        }
        map.end()
    }
}

impl Serialize for Inline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("element", self.kind_name())?;
        match self {
            Inline::RawText(raw) => {
                map.serialize_entry("escape", &raw.escape)?;
                map.serialize_entry("children", &raw.text)?;
            }
            Inline::Literal(literal) => {
                map.serialize_entry("children", &literal.ch.to_string())?;
            }
            Inline::LineBreak(brk) => {
                map.serialize_entry("soft", &brk.soft)?;
                map.serialize_entry("children", "\n")?;
            }
            Inline::CodeSpan(code) => {
                map.serialize_entry("children", &code.text)?;
            }
            Inline::Emphasis(e) => {
                map.serialize_entry("children", &e.children)?;
            }
            Inline::StrongEmphasis(e) => {
                map.serialize_entry("children", &e.children)?;
            }
            Inline::Link(link) => {
                map.serialize_entry("dest", &link.dest)?;
                if let Some(title) = &link.title {
                    map.serialize_entry("title", title)?;
                }
                map.serialize_entry("children", &link.children)?;
            }
            Inline::Image(image) => {
                map.serialize_entry("dest", &image.dest)?;
                if let Some(title) = &image.title {
                    map.serialize_entry("title", title)?;
                }
                map.serialize_entry("children", &image.children)?;
            }
            Inline::AutoLink(auto) => {
                map.serialize_entry("dest", &auto.dest)?;
                map.serialize_entry("email", &auto.email)?;
                map.serialize_entry("children", &auto.dest)?;
            }
            Inline::InlineHtml(html) => {
                map.serialize_entry("children", &html.text)?;
            }
            Inline::Custom(custom) => {
                for (key, value) in custom.fields() {
                    map.serialize_entry(&key, &value)?;
                }
                if let Some(text) = custom.text() {
                    map.serialize_entry("children", text)?;
                } else {
                    map.serialize_entry("children", custom.children())?;
                }
            }
        }
        map.end()
    }
}
