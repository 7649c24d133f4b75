use lazy_static::lazy_static;
use regex::Regex;

use crate::ast::{self, Block, InlineContent};
use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::source::PrefixedLine;

lazy_static! {
    static ref ATX_OPENING: Regex = Regex::new(r"^[ \t]*(#{1,6})([ \t]|$)").unwrap();
}

/// ATX headings: `#` through `######`, opening sequence separated from the
/// content by whitespace.
#[derive(Debug)]
pub(super) struct Heading;

impl BlockRule for Heading {
    fn kind(&self) -> &'static str {
        "heading"
    }

    fn priority(&self) -> u8 {
        priority::HEADING
    }

    fn match_line(&self, line: &PrefixedLine<'_>, _ctx: &BlockContext) -> bool {
        line.indent() < 4 && line.expect(&ATX_OPENING).is_some()
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        let (level, body) = {
            let line = scanner.peek().expect("heading rule matched a line");
            let content = &line.content()[line.indent_len()..];
            let hashes = content.bytes().take_while(|b| *b == b'#').count();
            (hashes as u8, heading_body(&content[hashes..]).to_string())
        };
        scanner.consume_line();
        BlockParse::Matched(Block::Heading(ast::Heading {
            level,
            body: InlineContent::Raw(body),
        }))
    }
}

/// Trim the whitespace around the heading content and remove a closing hash
/// sequence. The closing sequence only counts when preceded by whitespace
/// or when the heading is nothing but hashes.
fn heading_body(rest: &str) -> &str {
    let body = rest.trim_matches([' ', '\t']);
    let stripped = body.trim_end_matches('#');
    if stripped.len() == body.len() {
        return body;
    }
    if stripped.is_empty() {
        return "";
    }
    if stripped.ends_with([' ', '\t']) {
        return stripped.trim_end_matches([' ', '\t']);
    }
    body
}
