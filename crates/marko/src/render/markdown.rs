//! The Markdown re-serializer. Output is normalized (ATX headings, `*`
//! emphasis, inline links) and reaches a fixed point after one round trip
//! through the parser.

use rustc_hash::FxHashMap;

use crate::ast::{Block, Document, Inline};
use crate::error::RenderError;
use crate::render::ElementRef;

pub type MarkdownRenderFn = fn(&mut MarkdownRenderer, ElementRef<'_>) -> Result<String, RenderError>;

/// Characters backslash-escaped in ordinary text so the output re-parses
/// into the same rendering.
const ESCAPE_IN_TEXT: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '&'];

pub struct MarkdownRenderer {
    overrides: FxHashMap<&'static str, MarkdownRenderFn>,
    guard: Vec<(usize, &'static str)>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            overrides: FxHashMap::default(),
            guard: Vec::new(),
        }
    }

    pub fn add_override(&mut self, kind: &'static str, render: MarkdownRenderFn) {
        self.overrides.insert(kind, render);
    }

    pub fn render(mut self, doc: &Document) -> Result<String, RenderError> {
        let mut out = self.render_blocks(&doc.children, "\n\n")?;
        out.push('\n');
        Ok(out)
    }

    /// Render sibling blocks joined by `separator` (a blank line, except
    /// inside tight list items).
    pub fn render_blocks(&mut self, blocks: &[Block], separator: &str) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(blocks.len());
        for block in blocks {
            parts.push(self.render_element(block.into())?);
        }
        Ok(parts.join(separator))
    }

    pub fn render_element(&mut self, element: ElementRef<'_>) -> Result<String, RenderError> {
        let kind = element.kind_name();
        if let Some(render) = self.overrides.get(kind).copied() {
            let key = (element.addr(), kind);
            if !self.guard.contains(&key) {
                self.guard.push(key);
                let result = render(self, element);
                self.guard.pop();
                return result;
            }
        }
        self.render_default(element)
    }

    pub fn render_default(&mut self, element: ElementRef<'_>) -> Result<String, RenderError> {
        match element {
            ElementRef::Block(block) => self.render_block(block),
            ElementRef::Inline(inline) => self.render_inline(inline),
        }
    }

    pub fn render_inlines(&mut self, children: &[Inline]) -> Result<String, RenderError> {
        let mut out = String::new();
        for child in children {
            out.push_str(&self.render_element(child.into())?);
        }
        Ok(out)
    }

    fn render_block(&mut self, block: &Block) -> Result<String, RenderError> {
        match block {
            Block::Heading(h) | Block::SetextHeading(h) => {
                let body = self.render_inlines(h.body.parsed())?;
                let mut out = "#".repeat(h.level.clamp(1, 6) as usize);
                if !body.is_empty() {
                    out.push(' ');
                    out.push_str(&body);
                }
                Ok(out)
            }
            Block::Paragraph(p) => self.render_inlines(p.body.parsed()),
            Block::Quote(q) => {
                let inner = self.render_blocks(&q.children, "\n\n")?;
                Ok(prefix_lines(&inner, "> ", ">"))
            }
            Block::List(l) => {
                let mut items = Vec::with_capacity(l.children.len());
                for (index, child) in l.children.iter().enumerate() {
                    let item_blocks = match child {
                        Block::ListItem(item) => item.children.as_slice(),
                        other => std::slice::from_ref(other),
                    };
                    let separator = if l.tight { "\n" } else { "\n\n" };
                    let content = self.render_blocks(item_blocks, separator)?;
                    let marker = if l.ordered {
                        format!("{}{} ", l.start as usize + index, l.bullet)
                    } else {
                        format!("{} ", l.bullet)
                    };
                    items.push(attach_marker(&marker, &content));
                }
                Ok(items.join(if l.tight { "\n" } else { "\n\n" }))
            }
            Block::ListItem(item) => self.render_blocks(&item.children, "\n\n"),
            Block::CodeBlock(code) => {
                let body = code.text();
                Ok(prefix_lines(body.trim_end_matches('\n'), "    ", ""))
            }
            Block::FencedCode(code) => {
                let body = code.text();
                let longest = longest_run(body, '`');
                let fence = "`".repeat((longest + 1).max(3));
                let mut out = fence.clone();
                out.push_str(&code.lang);
                if let Some(extra) = &code.extra {
                    out.push(' ');
                    out.push_str(extra);
                }
                out.push('\n');
                out.push_str(body);
                out.push_str(&fence);
                Ok(out)
            }
            Block::HtmlBlock(html) => Ok(html.body.trim_end_matches('\n').to_string()),
            Block::ThematicBreak => Ok("---".to_string()),
            Block::Custom(custom) => Err(RenderError::DispatchMiss {
                kind: custom.kind().to_string(),
            }),
        }
    }

    fn render_inline(&mut self, inline: &Inline) -> Result<String, RenderError> {
        match inline {
            Inline::RawText(raw) => Ok(escape_text(&raw.text)),
            Inline::Literal(literal) => Ok(format!("\\{}", literal.ch)),
            Inline::LineBreak(brk) => Ok(if brk.soft { "\n" } else { "\\\n" }.to_string()),
            Inline::CodeSpan(code) => Ok(fence_code_span(&code.text)),
            Inline::Emphasis(e) => Ok(format!("*{}*", self.render_inlines(&e.children)?)),
            Inline::StrongEmphasis(e) => {
                Ok(format!("**{}**", self.render_inlines(&e.children)?))
            }
            Inline::Link(link) => {
                let label = self.render_inlines(&link.children)?;
                Ok(format!(
                    "[{label}]({}{})",
                    destination(&link.dest),
                    title_suffix(link.title.as_deref())
                ))
            }
            Inline::Image(image) => {
                let label = self.render_inlines(&image.children)?;
                Ok(format!(
                    "![{label}]({}{})",
                    destination(&image.dest),
                    title_suffix(image.title.as_deref())
                ))
            }
            Inline::AutoLink(auto) => Ok(format!("<{}>", auto.dest)),
            Inline::InlineHtml(html) => Ok(html.text.clone()),
            Inline::Custom(custom) => Err(RenderError::DispatchMiss {
                kind: custom.kind().to_string(),
            }),
        }
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if ESCAPE_IN_TEXT.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Prefix every line of `text`; blank lines get the bare variant so no
/// trailing whitespace is emitted.
fn prefix_lines(text: &str, prefix: &str, blank_prefix: &str) -> String {
    let mut out = String::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(if line.is_empty() { blank_prefix } else { prefix });
        out.push_str(line);
    }
    out
}

/// Put a list marker in front of the first line and indent the rest to the
/// marker's width.
fn attach_marker(marker: &str, content: &str) -> String {
    let indent = " ".repeat(marker.len());
    let mut out = String::new();
    for (index, line) in content.split('\n').enumerate() {
        if index == 0 {
            out.push_str(marker.trim_end());
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
        } else {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&indent);
                out.push_str(line);
            }
        }
    }
    out
}

fn longest_run(text: &str, ch: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == ch {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Wrap a code span in one more backtick than its longest interior run,
/// padding with spaces when the content would bleed into the fence.
fn fence_code_span(text: &str) -> String {
    let fence = "`".repeat(longest_run(text, '`') + 1);
    let pad = text.starts_with('`')
        || text.ends_with('`')
        || (!text.is_empty() && text.starts_with(' ') && text.ends_with(' '));
    if pad {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

fn destination(dest: &str) -> String {
    let needs_brackets = dest.is_empty()
        || dest.contains(|c: char| c.is_whitespace() || c == '<' || c == '>' || c == '(' || c == ')');
    if needs_brackets {
        let mut out = String::from("<");
        for c in dest.chars() {
            if matches!(c, '<' | '>' | '\\') {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('>');
        out
    } else {
        dest.to_string()
    }
}

fn title_suffix(title: Option<&str>) -> String {
    match title {
        Some(title) => {
            let mut out = String::from(" \"");
            for c in title.chars() {
                if matches!(c, '"' | '\\') {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('"');
            out
        }
        None => String::new(),
    }
}
