//! GFM-flavored extensions. Strikethrough is the reference consumer of the
//! extension mechanism: a Phase-A inline rule whose inner content is
//! re-tokenized, plus renderer overrides for HTML and Markdown output.

use std::sync::Arc;

use crate::ast::{CustomInline, Inline};
use crate::error::RenderError;
use crate::extension::Extension;
use crate::inline::{InlineContext, InlineMatch, InlineRule};
use crate::render::{ElementRef, HtmlRenderer, MarkdownRenderer};

/// Everything GFM this crate bundles. Tables and task lists live in their
/// own crates downstream; this is deliberately just the inline pieces.
pub fn extension() -> Extension {
    let strike = strikethrough();
    let mut ext = Extension::new("gfm");
    ext.inlines = strike.inlines;
    ext.html_overrides = strike.html_overrides;
    ext.markdown_overrides = strike.markdown_overrides;
    ext
}

pub fn strikethrough() -> Extension {
    Extension::new("gfm.strikethrough")
        .with_inline(Arc::new(Strikethrough))
        .with_html_override("strikethrough", render_html)
        .with_markdown_override("strikethrough", render_markdown)
}

#[derive(Debug)]
struct StrikethroughNode {
    children: Vec<Inline>,
}

impl CustomInline for StrikethroughNode {
    fn kind(&self) -> &'static str {
        "strikethrough"
    }

    fn children(&self) -> &[Inline] {
        &self.children
    }
}

#[derive(Debug)]
struct Strikethrough;

impl InlineRule for Strikethrough {
    fn kind(&self) -> &'static str {
        "strikethrough"
    }

    fn priority(&self) -> u8 {
        5
    }

    fn triggers(&self) -> &'static [u8] {
        b"~"
    }

    fn find(&self, ctx: &mut InlineContext<'_>, pos: usize) -> Option<InlineMatch> {
        let text = ctx.text();
        let bytes = text.as_bytes();
        // Runs are used whole: starting inside one would let `~~~a~` match
        // part of the opening run.
        if pos > 0 && bytes[pos - 1] == b'~' {
            return None;
        }
        let run = bytes[pos..].iter().take_while(|b| **b == b'~').count();
        if run > 2 {
            return None;
        }
        // The opener cannot sit against whitespace on its inside.
        match text[pos + run..].chars().next() {
            None => return None,
            Some(c) if c.is_whitespace() || c == '~' => return None,
            Some(_) => {}
        }

        // Take the nearest closing run of exactly the opening length whose
        // inside edge is not whitespace.
        let mut cursor = pos + run;
        while cursor < bytes.len() {
            if bytes[cursor] != b'~' {
                cursor += 1;
                continue;
            }
            let close_run = bytes[cursor..].iter().take_while(|b| **b == b'~').count();
            let before = text[..cursor].chars().next_back();
            if close_run == run && !before.is_some_and(|c| c.is_whitespace()) {
                let children = ctx.tokenize_range(pos + run..cursor);
                return Some(InlineMatch {
                    start: pos,
                    end: cursor + close_run,
                    node: Inline::Custom(Box::new(StrikethroughNode { children })),
                });
            }
            cursor += close_run;
        }
        None
    }
}

fn render_html(renderer: &mut HtmlRenderer, element: ElementRef<'_>) -> Result<(), RenderError> {
    renderer.out().push_str("<del>");
    renderer.render_children(element)?;
    renderer.out().push_str("</del>");
    Ok(())
}

fn render_markdown(
    renderer: &mut MarkdownRenderer,
    element: ElementRef<'_>,
) -> Result<String, RenderError> {
    let children = match element {
        ElementRef::Inline(inline) => inline.children(),
        ElementRef::Block(_) => &[],
    };
    Ok(format!("~~{}~~", renderer.render_inlines(children)?))
}
