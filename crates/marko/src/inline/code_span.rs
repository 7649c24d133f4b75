//! Code spans. Matching is speculative: the scanner looks ahead for a
//! closing backtick run of exactly the opening length, and if none exists
//! the opening run stays literal text.

use crate::ast::{self, Inline};
use crate::inline::{priority, InlineContext, InlineMatch, InlineRule};

#[derive(Debug)]
pub(crate) struct CodeSpan;

impl InlineRule for CodeSpan {
    fn kind(&self) -> &'static str {
        "code_span"
    }

    fn priority(&self) -> u8 {
        priority::CODE_SPAN
    }

    fn triggers(&self) -> &'static [u8] {
        b"`"
    }

    fn find(&self, ctx: &mut InlineContext<'_>, pos: usize) -> Option<InlineMatch> {
        let text = ctx.text();
        let bytes = text.as_bytes();
        // The opening delimiter is the whole backtick run; starting inside
        // one would let part of an unmatched run open a span.
        if pos > 0 && bytes[pos - 1] == b'`' {
            return None;
        }
        let open_len = bytes[pos..].iter().take_while(|b| **b == b'`').count();

        // Find a run of exactly `open_len` backticks.
        let mut cursor = pos + open_len;
        while cursor < bytes.len() {
            if bytes[cursor] != b'`' {
                cursor += match memchr::memchr(b'`', &bytes[cursor..]) {
                    Some(skip) => skip,
                    None => return None,
                };
            }
            let run = bytes[cursor..].iter().take_while(|b| **b == b'`').count();
            if run == open_len {
                let body = &text[pos + open_len..cursor];
                return Some(InlineMatch {
                    start: pos,
                    end: cursor + run,
                    node: Inline::CodeSpan(ast::CodeSpan {
                        text: normalize_body(body),
                    }),
                });
            }
            cursor += run;
        }
        None
    }
}

/// Line endings become spaces; one leading and trailing space is stripped
/// when both are present and the content is not all spaces.
fn normalize_body(body: &str) -> String {
    let body = body.replace('\n', " ");
    if body.len() >= 2
        && body.starts_with(' ')
        && body.ends_with(' ')
        && body.bytes().any(|b| b != b' ')
    {
        body[1..body.len() - 1].to_string()
    } else {
        body
    }
}
