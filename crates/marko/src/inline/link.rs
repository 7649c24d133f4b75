//! Link resource scanning shared between inline links and link reference
//! definitions, plus label normalization.

use std::ops::Range;

use crate::inline::entity::unescape_text;

/// Case-fold a link label: trim the ends, collapse interior whitespace runs
/// to a single space, and apply a full Unicode fold (upper then lower, so
/// `ẞ`, `ß` and `SS` all meet at `ss`).
pub(crate) fn normalize_label(label: &str) -> String {
    let mut collapsed = String::with_capacity(label.len());
    let mut in_whitespace = false;
    for c in label.trim().chars() {
        if c.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace {
            collapsed.push(' ');
            in_whitespace = false;
        }
        collapsed.push(c);
    }
    collapsed.to_uppercase().to_lowercase()
}

/// Scan a link label starting at `pos` (which must hold `[`). Returns the
/// inner range and the position after the closing `]`. Labels are capped at
/// 999 bytes and cannot contain unescaped brackets.
pub(crate) fn scan_link_label(text: &str, pos: usize) -> Option<(Range<usize>, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(pos) != Some(&b'[') {
        return None;
    }
    let start = pos + 1;
    let mut cursor = start;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b'\\' if cursor + 1 < bytes.len() && bytes[cursor + 1].is_ascii_punctuation() => {
                cursor += 2;
            }
            b']' => {
                if cursor - start > 999 {
                    return None;
                }
                return Some((start..cursor, cursor + 1));
            }
            b'[' => return None,
            _ => cursor += 1,
        }
    }
    None
}

/// Scan a link destination at `pos`: either `<...>` (no newlines, no
/// unescaped angle brackets) or a bare run of non-whitespace characters
/// with balanced parentheses. Returns the raw (still escaped) destination
/// and the position after it.
pub(crate) fn scan_link_destination(text: &str, pos: usize) -> Option<(String, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(pos) == Some(&b'<') {
        let mut cursor = pos + 1;
        while cursor < bytes.len() {
            match bytes[cursor] {
                b'\\' if cursor + 1 < bytes.len() && bytes[cursor + 1].is_ascii_punctuation() => {
                    cursor += 2;
                }
                b'>' => return Some((text[pos + 1..cursor].to_string(), cursor + 1)),
                b'<' | b'\n' => return None,
                _ => cursor += 1,
            }
        }
        return None;
    }

    let mut cursor = pos;
    let mut depth: usize = 0;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b'\\' if cursor + 1 < bytes.len() && bytes[cursor + 1].is_ascii_punctuation() => {
                cursor += 2;
            }
            b'(' => {
                // Deeply nested parentheses are capped so pathological
                // inputs cannot force quadratic rescanning.
                depth += 1;
                if depth > 32 {
                    return None;
                }
                cursor += 1;
            }
            b')' => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                cursor += 1;
            }
            byte if byte <= b' ' => break,
            _ => cursor += 1,
        }
    }
    if cursor == pos || depth > 0 {
        return None;
    }
    Some((text[pos..cursor].to_string(), cursor))
}

/// Scan a link title delimited by `"`, `'` or parentheses. Titles may span
/// lines but not blank lines. Returns the raw title and the position after
/// the closing delimiter.
pub(crate) fn scan_link_title(text: &str, pos: usize) -> Option<(String, usize)> {
    let bytes = text.as_bytes();
    let closer = match *bytes.get(pos)? {
        b'"' => b'"',
        b'\'' => b'\'',
        b'(' => b')',
        _ => return None,
    };
    let start = pos + 1;
    let mut cursor = start;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b'\\' if cursor + 1 < bytes.len() && bytes[cursor + 1].is_ascii_punctuation() => {
                cursor += 2;
            }
            byte if byte == closer => {
                return Some((text[start..cursor].to_string(), cursor + 1));
            }
            b'(' if closer == b')' => return None,
            b'\n' => {
                if is_blank_ahead(text, cursor + 1) {
                    return None;
                }
                cursor += 1;
            }
            _ => cursor += 1,
        }
    }
    None
}

/// Skip spaces, tabs and line endings from `pos`, refusing to cross a blank
/// line. Returns the new position and whether any whitespace was skipped.
pub(crate) fn skip_resource_whitespace(text: &str, pos: usize) -> (usize, bool) {
    let bytes = text.as_bytes();
    let mut cursor = pos;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b' ' | b'\t' => cursor += 1,
            b'\n' => {
                if is_blank_ahead(text, cursor + 1) {
                    break;
                }
                cursor += 1;
            }
            _ => break,
        }
    }
    (cursor, cursor > pos)
}

fn is_blank_ahead(text: &str, pos: usize) -> bool {
    for byte in text.as_bytes()[pos..].iter() {
        match byte {
            b' ' | b'\t' => continue,
            b'\n' => return true,
            _ => return false,
        }
    }
    true
}

/// Parse an inline link resource `(dest "title")` starting at `pos` (which
/// must hold `(`). Returns the unescaped destination and title plus the
/// position after the closing parenthesis, bounded by `limit`.
pub(crate) fn parse_inline_resource(
    text: &str,
    pos: usize,
    limit: usize,
) -> Option<(String, Option<String>, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(pos) != Some(&b'(') {
        return None;
    }
    let (mut cursor, _) = skip_resource_whitespace(text, pos + 1);

    if bytes.get(cursor) == Some(&b')') {
        let end = cursor + 1;
        return (end <= limit).then(|| (String::new(), None, end));
    }

    let (dest_raw, after_dest) = scan_link_destination(text, cursor)?;
    cursor = after_dest;

    let mut title_raw = None;
    let (after_ws, had_ws) = skip_resource_whitespace(text, cursor);
    if had_ws {
        if let Some((title, after_title)) = scan_link_title(text, after_ws) {
            title_raw = Some(title);
            cursor = after_title;
        } else {
            cursor = after_ws;
        }
    } else {
        cursor = after_ws;
    }

    let (end, _) = skip_resource_whitespace(text, cursor);
    if bytes.get(end) != Some(&b')') || end + 1 > limit {
        return None;
    }
    Some((
        unescape_text(&dest_raw),
        title_raw.map(|t| unescape_text(&t)),
        end + 1,
    ))
}
