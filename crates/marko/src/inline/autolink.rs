//! Autolinks: `<scheme:address>` and `<name@example.com>`.

use crate::ast::{self, Inline};
use crate::inline::{priority, InlineContext, InlineMatch, InlineRule};

#[derive(Debug)]
pub(crate) struct AutoLink;

impl InlineRule for AutoLink {
    fn kind(&self) -> &'static str {
        "auto_link"
    }

    fn priority(&self) -> u8 {
        priority::AUTO_LINK
    }

    fn triggers(&self) -> &'static [u8] {
        b"<"
    }

    fn find(&self, ctx: &mut InlineContext<'_>, pos: usize) -> Option<InlineMatch> {
        let text = ctx.text();
        let close = text[pos + 1..].find('>').map(|i| pos + 1 + i)?;
        let inner = &text[pos + 1..close];
        let email = if is_uri(inner) {
            false
        } else if is_email_address(inner) {
            true
        } else {
            return None;
        };
        Some(InlineMatch {
            start: pos,
            end: close + 1,
            node: Inline::AutoLink(ast::AutoLink {
                dest: inner.to_string(),
                email,
            }),
        })
    }
}

/// A scheme of 2–32 letters, digits, `+`, `.` or `-` (starting with a
/// letter), a colon, then anything but whitespace, controls and `<`.
fn is_uri(text: &str) -> bool {
    let bytes = text.as_bytes();
    let Some(colon) = bytes.iter().position(|b| *b == b':') else {
        return false;
    };
    if !(2..=32).contains(&colon) {
        return false;
    }
    if !bytes[0].is_ascii_alphabetic() {
        return false;
    }
    if !bytes[1..colon]
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-'))
    {
        return false;
    }
    text[colon + 1..]
        .chars()
        .all(|c| !c.is_ascii_control() && c != ' ' && c != '<')
}

fn is_email_address(text: &str) -> bool {
    let Some(at) = text.find('@') else {
        return false;
    };
    let (local, domain) = (&text[..at], &text[at + 1..]);
    if local.is_empty()
        || !local
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b".!#$%&'*+/=?^_`{|}~-".contains(&b))
    {
        return false;
    }
    if domain.is_empty() {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}
