//! Backslash escapes. `\` before an ASCII punctuation character produces a
//! literal; `\` before a line ending produces a hard break.

use crate::ast::{self, Inline};
use crate::inline::{priority, InlineContext, InlineMatch, InlineRule};

#[derive(Debug)]
pub(crate) struct Literal;

impl InlineRule for Literal {
    fn kind(&self) -> &'static str {
        "literal"
    }

    fn priority(&self) -> u8 {
        priority::LITERAL
    }

    fn triggers(&self) -> &'static [u8] {
        b"\\"
    }

    fn find(&self, ctx: &mut InlineContext<'_>, pos: usize) -> Option<InlineMatch> {
        let text = ctx.text();
        match text.as_bytes().get(pos + 1).copied() {
            Some(b'\n') => {
                // A backslash at the end of the line is a hard break; the
                // next line's leading whitespace goes with it.
                let mut end = pos + 2;
                end += crate::source::measure_indent(&text[end..], 0).1;
                Some(InlineMatch {
                    start: pos,
                    end,
                    node: Inline::LineBreak(ast::LineBreak { soft: false }),
                })
            }
            Some(byte) if byte.is_ascii_punctuation() => Some(InlineMatch {
                start: pos,
                end: pos + 2,
                node: Inline::Literal(ast::Literal { ch: byte as char }),
            }),
            _ => None,
        }
    }
}
