//! Soft and hard line breaks. Two or more trailing spaces make the break
//! hard; the spaces themselves and the following line's leading whitespace
//! belong to the break token.

use crate::ast::{self, Inline};
use crate::inline::{priority, InlineContext, InlineMatch, InlineRule};
use crate::source::measure_indent;

#[derive(Debug)]
pub(crate) struct LineBreak;

impl InlineRule for LineBreak {
    fn kind(&self) -> &'static str {
        "line_break"
    }

    fn priority(&self) -> u8 {
        priority::LINE_BREAK
    }

    fn triggers(&self) -> &'static [u8] {
        b"\n"
    }

    fn find(&self, ctx: &mut InlineContext<'_>, pos: usize) -> Option<InlineMatch> {
        let text = ctx.text();
        let bytes = text.as_bytes();
        let mut spaces = 0;
        while spaces < pos && bytes[pos - 1 - spaces] == b' ' {
            spaces += 1;
        }
        let mut start = pos - spaces;
        while start > 0 && matches!(bytes[start - 1], b' ' | b'\t') {
            start -= 1;
        }
        // Only literal spaces harden a break.
        let soft = spaces < 2;
        let mut end = pos + 1;
        end += measure_indent(&text[end..], 0).1;
        Some(InlineMatch {
            start,
            end,
            node: Inline::LineBreak(ast::LineBreak { soft }),
        })
    }
}
