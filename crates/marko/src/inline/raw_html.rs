//! Raw inline HTML: open/closing tags, comments, processing instructions,
//! declarations, and CDATA sections. The matched text passes through to
//! HTML output untouched. Hand-coded so pathological inputs stay linear.

use crate::ast::{self, Inline};
use crate::inline::{priority, InlineContext, InlineMatch, InlineRule};

#[derive(Debug)]
pub(crate) struct InlineHtml;

impl InlineRule for InlineHtml {
    fn kind(&self) -> &'static str {
        "inline_html"
    }

    fn priority(&self) -> u8 {
        priority::INLINE_HTML
    }

    fn triggers(&self) -> &'static [u8] {
        b"<"
    }

    fn find(&self, ctx: &mut InlineContext<'_>, pos: usize) -> Option<InlineMatch> {
        let text = ctx.text();
        let end = scan_html(text, pos)?;
        Some(InlineMatch {
            start: pos,
            end,
            node: Inline::InlineHtml(ast::InlineHtml {
                text: text[pos..end].to_string(),
            }),
        })
    }
}

/// Try to match one HTML construct at `pos` (which holds `<`); returns the
/// position after it.
pub(crate) fn scan_html(text: &str, pos: usize) -> Option<usize> {
    let rest = &text[pos..];
    let end = if rest.starts_with("<!--") {
        scan_comment(rest)
    } else if rest.starts_with("<![CDATA[") {
        rest.find("]]>").map(|i| i + 3)
    } else if rest.starts_with("<?") {
        rest.find("?>").map(|i| i + 2)
    } else if rest.starts_with("<!") {
        scan_declaration(rest)
    } else if rest.starts_with("</") {
        scan_closing_tag(rest)
    } else {
        scan_open_tag(rest)
    }?;
    Some(pos + end)
}

fn scan_comment(rest: &str) -> Option<usize> {
    // `<!-->` and `<!--->` are complete comments.
    for short in ["<!-->", "<!--->"] {
        if rest.starts_with(short) {
            return Some(short.len());
        }
    }
    rest[4..].find("-->").map(|i| 4 + i + 3)
}

fn scan_declaration(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.len() < 3 || !bytes[2].is_ascii_alphabetic() {
        return None;
    }
    rest.find('>').map(|i| i + 1)
}

fn scan_tag_name(bytes: &[u8]) -> Option<usize> {
    if bytes.is_empty() || !bytes[0].is_ascii_alphabetic() {
        return None;
    }
    Some(
        bytes
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-')
            .count(),
    )
}

fn scan_whitespace(bytes: &[u8], mut cursor: usize) -> usize {
    while cursor < bytes.len() && matches!(bytes[cursor], b' ' | b'\t' | b'\n') {
        cursor += 1;
    }
    cursor
}

fn scan_closing_tag(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let name_len = scan_tag_name(&bytes[2..])?;
    let cursor = scan_whitespace(bytes, 2 + name_len);
    (bytes.get(cursor) == Some(&b'>')).then_some(cursor + 1)
}

fn scan_open_tag(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let name_len = scan_tag_name(&bytes[1..])?;
    let mut cursor = 1 + name_len;

    loop {
        let after_ws = scan_whitespace(bytes, cursor);
        match bytes.get(after_ws).copied() {
            Some(b'>') => return Some(after_ws + 1),
            Some(b'/') => {
                return (bytes.get(after_ws + 1) == Some(&b'>')).then_some(after_ws + 2);
            }
            Some(_) if after_ws > cursor => {
                // Attribute: name, optionally `=` value.
                cursor = scan_attribute(bytes, after_ws)?;
            }
            _ => return None,
        }
    }
}

fn scan_attribute(bytes: &[u8], cursor: usize) -> Option<usize> {
    let first = *bytes.get(cursor)?;
    if !(first.is_ascii_alphabetic() || first == b'_' || first == b':') {
        return None;
    }
    let mut cursor = cursor + 1;
    while cursor < bytes.len()
        && (bytes[cursor].is_ascii_alphanumeric() || matches!(bytes[cursor], b'_' | b'.' | b':' | b'-'))
    {
        cursor += 1;
    }

    let after_ws = scan_whitespace(bytes, cursor);
    if bytes.get(after_ws) != Some(&b'=') {
        return Some(cursor);
    }
    let value_start = scan_whitespace(bytes, after_ws + 1);
    scan_attribute_value(bytes, value_start)
}

fn scan_attribute_value(bytes: &[u8], cursor: usize) -> Option<usize> {
    match *bytes.get(cursor)? {
        quote @ (b'"' | b'\'') => {
            let mut end = cursor + 1;
            while end < bytes.len() && bytes[end] != quote {
                end += 1;
            }
            (end < bytes.len()).then_some(end + 1)
        }
        _ => {
            let mut end = cursor;
            while end < bytes.len()
                && !matches!(bytes[end], b' ' | b'\t' | b'\n' | b'"' | b'\'' | b'=' | b'<' | b'>' | b'`')
            {
                end += 1;
            }
            (end > cursor).then_some(end)
        }
    }
}
