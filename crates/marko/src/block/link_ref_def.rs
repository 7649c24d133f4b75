//! Link reference definitions: `[label]: dest "title"`.
//!
//! Matched eagerly where a paragraph would otherwise begin. The definition
//! must end at a line boundary — a definition whose last construct is
//! followed by anything but whitespace on the same line is rejected, and
//! the text stays paragraph content.

use crate::ast::LinkRefDef as LinkRefDefNode;
use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::inline::entity::unescape_text;
use crate::inline::link::{
    scan_link_destination, scan_link_label, scan_link_title, skip_resource_whitespace,
};
use crate::source::{measure_indent, PrefixedLine};

/// Longest run of lines a single definition may span.
const MAX_DEF_LINES: usize = 32;

/// Skip trailing spaces and tabs; succeed only at a line ending. The
/// newline is part of the definition.
fn line_end_after(text: &str, pos: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut cursor = pos;
    while cursor < bytes.len() && matches!(bytes[cursor], b' ' | b'\t') {
        cursor += 1;
    }
    (bytes.get(cursor) == Some(&b'\n')).then_some(cursor + 1)
}

/// Parse one definition from the start of `text` (a buffer of contiguous
/// lines with their terminators). Returns the definition and the number of
/// bytes consumed, which always ends just past a newline.
pub(crate) fn parse_link_ref_def(text: &str) -> Option<(LinkRefDefNode, usize)> {
    let (indent, indent_len) = measure_indent(text, 0);
    if indent >= 4 {
        return None;
    }

    let (label_range, after_label) = scan_link_label(text, indent_len)?;
    let label = &text[label_range];
    if label.trim().is_empty() {
        return None;
    }
    if text.as_bytes().get(after_label) != Some(&b':') {
        return None;
    }

    let (dest_pos, _) = skip_resource_whitespace(text, after_label + 1);
    let (dest_raw, after_dest) = scan_link_destination(text, dest_pos)?;

    // A title is optional and must be separated from the destination by
    // whitespace. When the title attempt fails, the definition can still
    // stand with only its destination, provided the title candidate was not
    // on the destination's own line.
    let (title_pos, had_ws) = skip_resource_whitespace(text, after_dest);
    if had_ws {
        if let Some((title_raw, after_title)) = scan_link_title(text, title_pos) {
            if let Some(end) = line_end_after(text, after_title) {
                return Some((
                    LinkRefDefNode {
                        label: label.to_string(),
                        dest: unescape_text(&dest_raw),
                        title: Some(unescape_text(&title_raw)),
                    },
                    end,
                ));
            }
        }
    }

    let end = line_end_after(text, after_dest)?;
    Some((
        LinkRefDefNode {
            label: label.to_string(),
            dest: unescape_text(&dest_raw),
            title: None,
        },
        end,
    ))
}

#[derive(Debug)]
pub(super) struct LinkRefDef;

impl BlockRule for LinkRefDef {
    fn kind(&self) -> &'static str {
        "link_ref_def"
    }

    fn priority(&self) -> u8 {
        priority::LINK_REF_DEF
    }

    fn match_line(&self, line: &PrefixedLine<'_>, ctx: &BlockContext) -> bool {
        !ctx.interrupting
            && line.indent() < 4
            && line.content()[line.indent_len()..].starts_with('[')
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        // Buffer the candidate lines, then parse the definition from text
        // and map the consumed bytes back onto whole lines.
        scanner.save();
        let mut buffer = String::new();
        let mut buffered = 0;
        while buffered < MAX_DEF_LINES {
            let Some(line) = scanner.peek() else { break };
            if !line.fully_matched() || line.is_blank() {
                break;
            }
            buffer.push_str(&line.text);
            drop(line);
            scanner.consume_line();
            buffered += 1;
        }
        scanner.restore();

        let Some((def, consumed)) = parse_link_ref_def(&buffer) else {
            return BlockParse::Declined;
        };
        let lines = buffer[..consumed].matches('\n').count();
        for _ in 0..lines {
            scanner.consume_line();
        }
        scanner.register_link_ref_def(def);
        BlockParse::Transparent
    }
}
