//! Character references: `&name;`, `&#1234;`, `&#xBEEF;`.

use crate::ast::{Inline, RawText};
use crate::html_entities::lookup_entity;
use crate::inline::{priority, InlineContext, InlineMatch, InlineRule};

/// Longest recognized entity name (`ClockwiseContourIntegral` and friends
/// stay well under this).
const MAX_NAME_LEN: usize = 32;

/// Decode one character reference starting at `pos` (which must hold `&`).
/// Returns the decoded text and the position after the closing `;`.
pub(crate) fn scan_entity(text: &str, pos: usize) -> Option<(String, usize)> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes.get(pos), Some(&b'&'));
    let mut cursor = pos + 1;

    if bytes.get(cursor) == Some(&b'#') {
        cursor += 1;
        let (radix, max_digits) = match bytes.get(cursor).copied() {
            Some(b'x') | Some(b'X') => {
                cursor += 1;
                (16, 6)
            }
            _ => (10, 7),
        };
        let start = cursor;
        while cursor < bytes.len()
            && (bytes[cursor] as char).is_digit(radix)
            && cursor - start < max_digits + 1
        {
            cursor += 1;
        }
        let digits = cursor - start;
        if digits == 0 || digits > max_digits || bytes.get(cursor) != Some(&b';') {
            return None;
        }
        let code = u32::from_str_radix(&text[start..cursor], radix).ok()?;
        // NUL and invalid code points decode to the replacement character.
        let decoded = match code {
            0 => '\u{FFFD}',
            code => char::from_u32(code).unwrap_or('\u{FFFD}'),
        };
        return Some((decoded.to_string(), cursor + 1));
    }

    // Named reference. Names are ASCII alphanumeric and case-sensitive.
    let start = cursor;
    while cursor < bytes.len()
        && bytes[cursor].is_ascii_alphanumeric()
        && cursor - start <= MAX_NAME_LEN
    {
        cursor += 1;
    }
    if cursor == start || bytes.get(cursor) != Some(&b';') {
        return None;
    }
    let value = lookup_entity(&text[start..cursor])?;
    Some((value.to_string(), cursor + 1))
}

/// Apply backslash escapes and character references to a string outside the
/// inline element stream (link destinations and titles, fenced-code info
/// strings).
pub(crate) fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let bytes = text.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' if pos + 1 < bytes.len() && bytes[pos + 1].is_ascii_punctuation() => {
                out.push(bytes[pos + 1] as char);
                pos += 2;
            }
            b'&' => match scan_entity(text, pos) {
                Some((decoded, end)) => {
                    out.push_str(&decoded);
                    pos = end;
                }
                None => {
                    out.push('&');
                    pos += 1;
                }
            },
            _ => {
                // Copy the whole UTF-8 sequence for non-ASCII starts.
                let end = (pos + 1..)
                    .take_while(|i| *i < bytes.len() && !text.is_char_boundary(*i))
                    .last()
                    .map_or(pos + 1, |i| i + 1);
                out.push_str(&text[pos..end]);
                pos = end;
            }
        }
    }
    out
}

#[derive(Debug)]
pub(crate) struct Entity;

impl InlineRule for Entity {
    fn kind(&self) -> &'static str {
        "entity"
    }

    fn priority(&self) -> u8 {
        priority::ENTITY
    }

    fn triggers(&self) -> &'static [u8] {
        b"&"
    }

    fn find(&self, ctx: &mut InlineContext<'_>, pos: usize) -> Option<InlineMatch> {
        let (decoded, end) = scan_entity(ctx.text(), pos)?;
        Some(InlineMatch {
            start: pos,
            end,
            node: Inline::RawText(RawText {
                text: decoded,
                escape: true,
            }),
        })
    }
}
