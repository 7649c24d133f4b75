//! A CommonMark-conformant Markdown parser with a pluggable rendering
//! layer and an extension mechanism.
//!
//! Parsing runs in two phases: a line-oriented block scanner produces the
//! document tree with raw inline bodies, and the inline tokenizer rewrites
//! those bodies into inline element trees. Renderers walk the finished
//! tree; extensions contribute element kinds and renderer overrides.
//!
//! ```ignore
//! let html = marko::convert("# hello world\n");
//! assert_eq!(html, "<h1>hello world</h1>\n");
//! ```

use log::debug;

pub mod ast;
pub mod block;
pub mod error;
pub mod extension;
pub mod extensions;
pub mod inline;
pub mod registry;
pub mod render;
pub mod source;

mod html_entities;

pub use ast::{Block, Document, Inline, LinkRefDef};
pub use block::{BlockContext, BlockParse, BlockRule, BlockScanner};
pub use error::{ExtensionError, RenderError};
pub use extension::{load, Extension};
pub use inline::{InlineContext, InlineMatch, InlineRule, SpanRelation};
pub use registry::ElementRegistry;
pub use render::{AstRenderer, ElementRef, HtmlRenderer, MarkdownRenderer, RendererKind};

use rustc_hash::FxHashMap;

/// A parser/renderer pair composed from the CommonMark element set plus
/// any registered extensions. Each instance owns its registry; nothing is
/// shared, so distinct instances may parse on distinct threads freely.
pub struct Markdown {
    registry: ElementRegistry,
    html_overrides: FxHashMap<&'static str, render::HtmlRenderFn>,
    markdown_overrides: FxHashMap<&'static str, render::MarkdownRenderFn>,
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Markdown {
    /// The plain CommonMark parser.
    pub fn new() -> Self {
        Self {
            registry: ElementRegistry::commonmark(),
            html_overrides: FxHashMap::default(),
            markdown_overrides: FxHashMap::default(),
        }
    }

    pub fn with_extensions(extensions: impl IntoIterator<Item = Extension>) -> Self {
        let mut markdown = Self::new();
        for extension in extensions {
            markdown.use_extension(extension);
        }
        markdown
    }

    /// Register an extension. Later registrations shadow earlier ones for
    /// the same element kind.
    pub fn use_extension(&mut self, extension: Extension) {
        debug!("registering extension `{}`", extension.name);
        for rule in extension.blocks {
            self.registry.add_block(rule);
        }
        for rule in extension.inlines {
            self.registry.add_inline(rule);
        }
        for (kind, render) in extension.html_overrides {
            self.html_overrides.insert(kind, render);
        }
        for (kind, render) in extension.markdown_overrides {
            self.markdown_overrides.insert(kind, render);
        }
    }

    /// Parse a document: the block scan followed by the inline pass over
    /// every block with a pending inline body. Never fails on input.
    pub fn parse(&self, text: &str) -> Document {
        let text = normalize_input(text);
        debug!("parsing {} bytes", text.len());
        let mut doc = BlockScanner::new(&text, &self.registry).scan();
        inline::tokenizer::process_document(&mut doc, &self.registry);
        doc
    }

    /// Run the inline pass over a document whose inline bodies are still
    /// raw strings. Documents from [`Markdown::parse`] are already done.
    pub fn finish_inline(&self, doc: &mut Document) {
        inline::tokenizer::process_document(doc, &self.registry);
    }

    /// Render a document as HTML, finishing inline parsing first if the
    /// document still carries raw inline bodies.
    pub fn render(&self, doc: &mut Document) -> Result<String, RenderError> {
        if doc.has_raw_inline_content() {
            self.finish_inline(doc);
        }
        self.render_html(doc)
    }

    pub fn render_html(&self, doc: &Document) -> Result<String, RenderError> {
        let mut renderer = HtmlRenderer::new();
        for (&kind, &render) in &self.html_overrides {
            renderer.add_override(kind, render);
        }
        renderer.render(doc)
    }

    pub fn render_markdown(&self, doc: &Document) -> Result<String, RenderError> {
        let mut renderer = MarkdownRenderer::new();
        for (&kind, &render) in &self.markdown_overrides {
            renderer.add_override(kind, render);
        }
        renderer.render(doc)
    }

    pub fn render_ast(&self, doc: &Document) -> Result<serde_json::Value, RenderError> {
        AstRenderer::new().render(doc)
    }

    /// One-shot: parse and render HTML.
    pub fn convert(&self, text: &str) -> Result<String, RenderError> {
        let doc = self.parse(text);
        self.render_html(&doc)
    }
}

/// Parse with the default CommonMark parser.
pub fn parse(text: &str) -> Document {
    Markdown::new().parse(text)
}

/// Convert with the default CommonMark parser and the HTML renderer.
pub fn convert(text: &str) -> String {
    Markdown::new()
        .convert(text)
        .expect("the built-in element set renders without dispatch misses")
}

/// Line endings become `\n` and NUL bytes become the replacement
/// character before any parsing happens.
fn normalize_input(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\0' => out.push('\u{FFFD}'),
            c => out.push(c),
        }
    }
    out
}
