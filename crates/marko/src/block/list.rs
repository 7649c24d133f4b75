use log::warn;

use crate::ast::{self, Block};
use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::source::{consume_columns, measure_indent, Prefix, PrefixedLine};

/// A parsed list marker: bullet (`-`, `+`, `*`) or ordered (1–9 digits
/// followed by `.` or `)`).
#[derive(Clone, Copy, Debug)]
struct Marker {
    /// Columns of indentation before the marker (always < 4).
    indent: usize,
    /// Bytes of indentation before the marker.
    indent_len: usize,
    /// Width of the marker itself, in bytes and columns alike.
    width: usize,
    ordered: bool,
    number: u32,
    /// The bullet character, or the ordered delimiter.
    bullet: char,
}

fn parse_marker(line: &PrefixedLine<'_>) -> Option<Marker> {
    if line.is_blank() || line.indent() >= 4 {
        return None;
    }
    let indent = line.indent();
    let indent_len = line.indent_len();
    let content = &line.content()[indent_len..];
    let bytes = content.as_bytes();

    let (width, ordered, number, bullet) = match bytes[0] {
        b @ (b'-' | b'+' | b'*') => (1, false, 0, b as char),
        b'0'..=b'9' => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits > 9 {
                return None;
            }
            let delim = match bytes.get(digits).copied() {
                Some(b @ (b'.' | b')')) => b as char,
                _ => return None,
            };
            // Guaranteed to fit: at most nine digits.
            let number: u32 = content[..digits].parse().ok()?;
            (digits + 1, true, number, delim)
        }
        _ => return None,
    };

    // The marker must be followed by whitespace or the end of the line.
    match bytes.get(width).copied() {
        None | Some(b' ') | Some(b'\t') => {}
        _ => return None,
    }

    Some(Marker {
        indent,
        indent_len,
        width,
        ordered,
        number,
        bullet,
    })
}

/// Whether the text after the marker is blank, i.e. the item starts empty.
fn rest_is_blank(line: &PrefixedLine<'_>, marker: &Marker) -> bool {
    line.content()[marker.indent_len + marker.width..]
        .bytes()
        .all(|b| b == b' ' || b == b'\t')
}

#[derive(Debug)]
pub(super) struct List;

impl BlockRule for List {
    fn kind(&self) -> &'static str {
        "list"
    }

    fn priority(&self) -> u8 {
        priority::LIST
    }

    fn match_line(&self, line: &PrefixedLine<'_>, ctx: &BlockContext) -> bool {
        let Some(marker) = parse_marker(line) else {
            return false;
        };
        if ctx.interrupting {
            // Only a list whose first item has content may interrupt a
            // paragraph, and an ordered one only when it starts at 1.
            return !rest_is_blank(line, &marker) && (!marker.ordered || marker.number == 1);
        }
        true
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        if scanner.at_max_depth() {
            warn!("maximum container depth reached; treating list marker as text");
            return BlockParse::Declined;
        }
        let Some(first) = scanner.peek().as_ref().and_then(parse_marker) else {
            return BlockParse::Declined;
        };

        let mut children: Vec<Block> = Vec::new();
        let mut loose = false;
        loop {
            let Some(line) = scanner.peek() else { break };
            if !line.fully_matched() {
                break;
            }
            // Blank lines between items stay inside the list; tightness
            // tracking sees them through the pending flag.
            if line.is_blank() {
                drop(line);
                scanner.consume_line();
                continue;
            }
            let Some(marker) = parse_marker(&line) else {
                break;
            };
            drop(line);
            // Sibling items share a marker family: same bullet character,
            // or same ordered delimiter.
            if marker.ordered != first.ordered || marker.bullet != first.bullet {
                break;
            }
            // A higher-priority kind (in practice the thematic break) takes
            // the line even when it also parses as a marker.
            if scanner.line_matches_before(self.kind()) {
                break;
            }
            if !children.is_empty() && scanner.blank_pending() {
                loose = true;
            }
            let (item, internal_blank) = parse_item(scanner, &marker);
            loose |= internal_blank;
            children.push(Block::ListItem(ast::ListItem { children: item }));
        }

        BlockParse::Matched(Block::List(ast::List {
            children,
            tight: !loose,
            ordered: first.ordered,
            start: first.number,
            bullet: first.bullet,
        }))
    }
}

/// Parse one list item: consume the marker, register the content-column
/// prefix, and recurse. Returns the item's blocks and whether a blank line
/// separated two of them.
fn parse_item(scanner: &mut BlockScanner<'_, '_>, marker: &Marker) -> (Vec<Block>, bool) {
    let mut starts_empty = false;
    let mut width = marker.indent + marker.width;
    let mut rest: Option<(String, usize)> = None;
    {
        let line = scanner.peek().expect("list item rule matched a line");
        let after_marker = &line.text[marker.indent_len + marker.width..];
        let col_after = line.start_col + marker.indent + marker.width;
        if rest_is_blank(&line, marker) {
            // An empty first line gives the item a content width of one
            // column past the marker.
            starts_empty = true;
            width += 1;
        } else {
            let (ws_cols, ws_len) = measure_indent(after_marker, col_after);
            if ws_cols <= 4 {
                width += ws_cols;
                rest = Some((after_marker[ws_len..].to_string(), col_after + ws_cols));
            } else {
                // Five or more columns means the item starts with indented
                // code; only one column belongs to the marker.
                width += 1;
                let (stripped, col) = consume_columns(after_marker, 1, col_after)
                    .expect("whitespace measured above");
                rest = Some((stripped.into_owned(), col));
            }
        }
    }

    scanner.push_prefix(Prefix::Indent(width));
    match rest {
        Some((text, col)) => scanner.advance_into_line(text, col),
        None => scanner.consume_line(),
    }

    // An item can begin with at most one blank line, and the empty marker
    // line is it: a blank directly after closes the item.
    if starts_empty && scanner.peek().is_some_and(|line| line.is_blank()) {
        scanner.pop_prefix();
        return (Vec::new(), false);
    }

    let (children, internal_blank) = scanner.parse_children();
    scanner.pop_prefix();
    (children, internal_blank)
}
