//! The CommonMark HTML renderer.

use rustc_hash::FxHashMap;

use crate::ast::{Block, Document, Inline};
use crate::error::RenderError;
use crate::render::util::{push_href_escaped, push_html_escaped};
use crate::render::ElementRef;

pub type HtmlRenderFn = fn(&mut HtmlRenderer, ElementRef<'_>) -> Result<(), RenderError>;

static HEADING_OPEN_TAGS: [&str; 6] = ["<h1>", "<h2>", "<h3>", "<h4>", "<h5>", "<h6>"];
static HEADING_CLOSE_TAGS: [&str; 6] = ["</h1>\n", "</h2>\n", "</h3>\n", "</h4>\n", "</h5>\n", "</h6>\n"];

pub struct HtmlRenderer {
    out: String,
    overrides: FxHashMap<&'static str, HtmlRenderFn>,
    /// Tightness of each enclosing list, innermost last.
    tight: Vec<bool>,
    /// `(element, kind)` pairs currently dispatching through an override;
    /// re-entry for the same pair falls through to the built-in body.
    guard: Vec<(usize, &'static str)>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            overrides: FxHashMap::default(),
            tight: Vec::new(),
            guard: Vec::new(),
        }
    }

    pub fn add_override(&mut self, kind: &'static str, render: HtmlRenderFn) {
        self.overrides.insert(kind, render);
    }

    pub fn render(mut self, doc: &Document) -> Result<String, RenderError> {
        for block in &doc.children {
            self.render_element(block.into())?;
        }
        Ok(self.out)
    }

    /// The output buffer, for override functions.
    pub fn out(&mut self) -> &mut String {
        &mut self.out
    }

    pub fn write_escaped(&mut self, text: &str) {
        push_html_escaped(&mut self.out, text);
    }

    /// Dispatch one element through the override table, falling back to the
    /// built-in rendering.
    pub fn render_element(&mut self, element: ElementRef<'_>) -> Result<(), RenderError> {
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

    /// The built-in rendering for an element, bypassing the override table.
    pub fn render_default(&mut self, element: ElementRef<'_>) -> Result<(), RenderError> {
        match element {
            ElementRef::Block(block) => self.render_block(block),
            ElementRef::Inline(inline) => self.render_inline(inline),
        }
    }

    /// Render an element's children with the natural join for HTML:
    /// straight concatenation into the output buffer.
    pub fn render_children(&mut self, element: ElementRef<'_>) -> Result<(), RenderError> {
        match element {
            ElementRef::Block(block) => match block {
                Block::Heading(h) | Block::SetextHeading(h) => self.render_inlines(h.body.parsed()),
                Block::Paragraph(p) => self.render_inlines(p.body.parsed()),
                _ => {
                    for child in block.children() {
                        self.render_element(child.into())?;
                    }
                    Ok(())
                }
            },
            ElementRef::Inline(inline) => self.render_inlines(inline.children()),
        }
    }

    fn render_inlines(&mut self, children: &[Inline]) -> Result<(), RenderError> {
        for child in children {
            self.render_element(child.into())?;
        }
        Ok(())
    }

    fn render_block(&mut self, block: &Block) -> Result<(), RenderError> {
        match block {
            Block::Heading(h) | Block::SetextHeading(h) => {
                let index = (h.level.clamp(1, 6) - 1) as usize;
                self.out.push_str(HEADING_OPEN_TAGS[index]);
                self.render_inlines(h.body.parsed())?;
                self.out.push_str(HEADING_CLOSE_TAGS[index]);
            }
            Block::Paragraph(p) => {
                self.out.push_str("<p>");
                self.render_inlines(p.body.parsed())?;
                self.out.push_str("</p>\n");
            }
            Block::Quote(q) => {
                self.out.push_str("<blockquote>\n");
                for child in &q.children {
                    self.render_element(child.into())?;
                }
                self.out.push_str("</blockquote>\n");
            }
            Block::List(l) => {
                if l.ordered {
                    if l.start != 1 {
                        self.out.push_str("<ol start=\"");
                        self.out.push_str(&l.start.to_string());
                        self.out.push_str("\">\n");
                    } else {
                        self.out.push_str("<ol>\n");
                    }
                } else {
                    self.out.push_str("<ul>\n");
                }
                self.tight.push(l.tight);
                for child in &l.children {
                    self.render_element(child.into())?;
                }
                self.tight.pop();
                self.out.push_str(if l.ordered { "</ol>\n" } else { "</ul>\n" });
            }
            Block::ListItem(item) => self.render_list_item(&item.children)?,
            Block::CodeBlock(code) => {
                self.out.push_str("<pre><code>");
                self.write_escaped(code.text());
                self.out.push_str("</code></pre>\n");
            }
            Block::FencedCode(code) => {
                if code.lang.is_empty() {
                    self.out.push_str("<pre><code>");
                } else {
                    // The language class is escaped like any attribute, so
                    // a hostile info string cannot smuggle markup through.
                    self.out.push_str("<pre><code class=\"language-");
                    self.write_escaped(&code.lang);
                    self.out.push_str("\">");
                }
                self.write_escaped(code.text());
                self.out.push_str("</code></pre>\n");
            }
            Block::HtmlBlock(html) => self.out.push_str(&html.body),
            Block::ThematicBreak => self.out.push_str("<hr />\n"),
            Block::Custom(custom) => {
                return Err(RenderError::DispatchMiss {
                    kind: custom.kind().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Paragraph unwrapping in tight lists: a direct paragraph child of an
    /// item in a tight list renders only its inline content.
    fn render_list_item(&mut self, children: &[Block]) -> Result<(), RenderError> {
        let tight = self.tight.last().copied().unwrap_or(false);
        self.out.push_str("<li>");
        let mut first = true;
        let mut last_was_inline = false;
        for child in children {
            match child {
                Block::Paragraph(p) if tight => {
                    if last_was_inline {
                        self.out.push('\n');
                    }
                    self.render_inlines(p.body.parsed())?;
                    last_was_inline = true;
                }
                block => {
                    if first || last_was_inline {
                        self.out.push('\n');
                    }
                    self.render_element(block.into())?;
                    last_was_inline = false;
                }
            }
            first = false;
        }
        self.out.push_str("</li>\n");
        Ok(())
    }

    fn render_inline(&mut self, inline: &Inline) -> Result<(), RenderError> {
        match inline {
            Inline::RawText(raw) => {
                if raw.escape {
                    self.write_escaped(&raw.text);
                } else {
                    self.out.push_str(&raw.text);
                }
            }
            Inline::Literal(literal) => {
                let mut buffer = [0u8; 4];
                self.write_escaped(literal.ch.encode_utf8(&mut buffer));
            }
            Inline::LineBreak(brk) => {
                self.out.push_str(if brk.soft { "\n" } else { "<br />\n" });
            }
            Inline::CodeSpan(code) => {
                self.out.push_str("<code>");
                self.write_escaped(&code.text);
                self.out.push_str("</code>");
            }
            Inline::Emphasis(e) => {
                self.out.push_str("<em>");
                self.render_inlines(&e.children)?;
                self.out.push_str("</em>");
            }
            Inline::StrongEmphasis(e) => {
                self.out.push_str("<strong>");
                self.render_inlines(&e.children)?;
                self.out.push_str("</strong>");
            }
            Inline::Link(link) => {
                self.out.push_str("<a href=\"");
                push_href_escaped(&mut self.out, &link.dest);
                self.out.push('"');
                if let Some(title) = &link.title {
                    self.out.push_str(" title=\"");
                    self.write_escaped(title);
                    self.out.push('"');
                }
                self.out.push('>');
                self.render_inlines(&link.children)?;
                self.out.push_str("</a>");
            }
            Inline::Image(image) => {
                self.out.push_str("<img src=\"");
                push_href_escaped(&mut self.out, &image.dest);
                self.out.push_str("\" alt=\"");
                let mut alt = String::new();
                collect_alt_text(&image.children, &mut alt);
                self.write_escaped(&alt);
                self.out.push('"');
                if let Some(title) = &image.title {
                    self.out.push_str(" title=\"");
                    self.write_escaped(title);
                    self.out.push('"');
                }
                self.out.push_str(" />");
            }
            Inline::AutoLink(auto) => {
                self.out.push_str("<a href=\"");
                if auto.email {
                    self.out.push_str("mailto:");
                }
                push_href_escaped(&mut self.out, &auto.dest);
                self.out.push_str("\">");
                self.write_escaped(&auto.dest);
                self.out.push_str("</a>");
            }
            Inline::InlineHtml(html) => self.out.push_str(&html.text),
            Inline::Custom(custom) => {
                return Err(RenderError::DispatchMiss {
                    kind: custom.kind().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The plain-text rendering of an image label for its `alt` attribute.
fn collect_alt_text(children: &[Inline], out: &mut String) {
    for child in children {
        match child {
            Inline::RawText(raw) => out.push_str(&raw.text),
            Inline::Literal(literal) => out.push(literal.ch),
            Inline::CodeSpan(code) => out.push_str(&code.text),
            Inline::AutoLink(auto) => out.push_str(&auto.dest),
            Inline::LineBreak(_) => out.push('\n'),
            other => collect_alt_text(other.children(), out),
        }
    }
}
