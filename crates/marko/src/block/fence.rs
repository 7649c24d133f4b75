use crate::ast::{Block, FencedCode as FencedCodeNode};
use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::inline::entity::unescape_text;
use crate::source::PrefixedLine;

/// Fenced code blocks: at least three backticks or tildes, closed by a
/// matching fence of at least the opening length, or by the end of the
/// enclosing container.
#[derive(Debug)]
pub(super) struct FencedCode;

struct Opener {
    fence: u8,
    count: usize,
    indent: usize,
    info: String,
}

fn parse_opener(line: &PrefixedLine<'_>) -> Option<Opener> {
    let indent = line.indent();
    if indent >= 4 {
        return None;
    }
    let content = &line.content()[line.indent_len()..];
    let fence = match content.bytes().next() {
        Some(b @ (b'`' | b'~')) => b,
        _ => return None,
    };
    let count = content.bytes().take_while(|b| *b == fence).count();
    if count < 3 {
        return None;
    }
    let info = content[count..].trim_matches([' ', '\t']);
    // An info string on a backtick fence cannot contain backticks; that
    // text is a code span candidate instead.
    if fence == b'`' && info.contains('`') {
        return None;
    }
    Some(Opener {
        fence,
        count,
        indent,
        info: info.to_string(),
    })
}

fn is_closer(line: &PrefixedLine<'_>, opener: &Opener) -> bool {
    if line.indent() >= 4 {
        return false;
    }
    let content = line.content().trim_matches([' ', '\t']);
    let count = content.bytes().take_while(|b| *b == opener.fence).count();
    count >= opener.count && count == content.len()
}

impl BlockRule for FencedCode {
    fn kind(&self) -> &'static str {
        "fenced_code"
    }

    fn priority(&self) -> u8 {
        priority::FENCED_CODE
    }

    fn match_line(&self, line: &PrefixedLine<'_>, _ctx: &BlockContext) -> bool {
        parse_opener(line).is_some()
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        let Some(opener) = scanner.peek().as_ref().and_then(parse_opener) else {
            return BlockParse::Declined;
        };
        scanner.consume_line_verbatim();

        let mut body = String::new();
        loop {
            let Some(line) = scanner.peek() else { break };
            if !line.fully_matched() {
                break;
            }
            if is_closer(&line, &opener) {
                drop(line);
                scanner.consume_line_verbatim();
                break;
            }
            // Content loses at most the opening fence's indentation.
            let take = line.indent().min(opener.indent);
            match line.strip_columns(take) {
                Some((rest, _)) => body.push_str(rest.trim_end_matches('\n')),
                None => body.push_str(line.content()),
            }
            body.push('\n');
            drop(line);
            scanner.consume_line_verbatim();
        }

        // Backslash escapes and character references apply to the info
        // string even though its content is never inline-parsed.
        let info = unescape_text(&opener.info);
        let mut words = info.splitn(2, [' ', '\t']);
        let lang = words.next().unwrap_or("").to_string();
        let extra = words
            .next()
            .map(|rest| rest.trim_matches([' ', '\t']).to_string())
            .filter(|rest| !rest.is_empty());
        BlockParse::Matched(Block::FencedCode(FencedCodeNode::new(lang, extra, body)))
    }
}
