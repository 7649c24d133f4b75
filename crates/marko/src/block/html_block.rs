use lazy_static::lazy_static;
use regex::Regex;

use crate::ast::{Block, HtmlBlock as HtmlBlockNode};
use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::source::PrefixedLine;

lazy_static! {
    // The seven HTML block start conditions, in specification order.
    static ref START_TEXT_TAG: Regex =
        Regex::new(r"^<(?i:pre|script|style|textarea)(?:[ \t>]|$|/>)").unwrap();
    static ref START_COMMENT: Regex = Regex::new(r"^<!--").unwrap();
    static ref START_PI: Regex = Regex::new(r"^<\?").unwrap();
    static ref START_DECLARATION: Regex = Regex::new(r"^<![A-Za-z]").unwrap();
    static ref START_CDATA: Regex = Regex::new(r"^<!\[CDATA\[").unwrap();
    static ref START_BLOCK_TAG: Regex = Regex::new(
        r"^</?(?i:address|article|aside|base|basefont|blockquote|body|caption|center|col|colgroup|dd|details|dialog|dir|div|dl|dt|fieldset|figcaption|figure|footer|form|frame|frameset|h1|h2|h3|h4|h5|h6|head|header|hr|html|iframe|legend|li|link|main|menu|menuitem|nav|noframes|ol|optgroup|option|p|param|search|section|summary|table|tbody|td|tfoot|th|thead|title|tr|track|ul)(?:[ \t]|$|/?>)"
    )
    .unwrap();
    // Condition 7: a complete open or closing tag, alone on its line.
    static ref START_ANY_TAG: Regex = Regex::new(
        r#"^(?:<[A-Za-z][A-Za-z0-9-]*(?:[ \t]+[A-Za-z_:][A-Za-z0-9_.:-]*(?:[ \t]*=[ \t]*(?:[^ \t"'=<>`]+|'[^']*'|"[^"]*"))?)*[ \t]*/?>|</[A-Za-z][A-Za-z0-9-]*[ \t]*>)[ \t]*$"#
    )
    .unwrap();
    static ref END_TEXT_TAG: Regex =
        Regex::new(r"(?i:</pre>|</script>|</style>|</textarea>)").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Condition {
    TextTag,
    Comment,
    ProcessingInstruction,
    Declaration,
    Cdata,
    BlockTag,
    AnyTag,
}

impl Condition {
    fn of(line: &PrefixedLine<'_>, interrupting: bool) -> Option<Condition> {
        if line.indent() >= 4 {
            return None;
        }
        let content = &line.content()[line.indent_len()..];
        if !content.starts_with('<') {
            return None;
        }
        if START_TEXT_TAG.is_match(content) {
            return Some(Condition::TextTag);
        }
        if START_COMMENT.is_match(content) {
            return Some(Condition::Comment);
        }
        if START_PI.is_match(content) {
            return Some(Condition::ProcessingInstruction);
        }
        if START_CDATA.is_match(content) {
            return Some(Condition::Cdata);
        }
        if START_DECLARATION.is_match(content) {
            return Some(Condition::Declaration);
        }
        if START_BLOCK_TAG.is_match(content) {
            return Some(Condition::BlockTag);
        }
        // A bare complete tag opens an HTML block only outside paragraphs.
        if !interrupting && START_ANY_TAG.is_match(content) {
            return Some(Condition::AnyTag);
        }
        None
    }

    /// Whether a line of content also terminates the block (the terminator
    /// line is included in the block).
    fn ends_on(&self, content: &str) -> bool {
        match self {
            Condition::TextTag => END_TEXT_TAG.is_match(content),
            Condition::Comment => content.contains("-->"),
            Condition::ProcessingInstruction => content.contains("?>"),
            Condition::Declaration => content.contains('>'),
            Condition::Cdata => content.contains("]]>"),
            // Conditions 6 and 7 run until a blank line instead.
            Condition::BlockTag | Condition::AnyTag => false,
        }
    }

    fn ends_on_blank(&self) -> bool {
        matches!(self, Condition::BlockTag | Condition::AnyTag)
    }
}

/// Raw HTML blocks. The body is captured verbatim (after container
/// prefixes) and never inline-parsed.
#[derive(Debug)]
pub(super) struct HtmlBlock;

impl BlockRule for HtmlBlock {
    fn kind(&self) -> &'static str {
        "html_block"
    }

    fn priority(&self) -> u8 {
        priority::HTML_BLOCK
    }

    fn match_line(&self, line: &PrefixedLine<'_>, ctx: &BlockContext) -> bool {
        Condition::of(line, ctx.interrupting).is_some()
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        let Some(condition) = scanner
            .peek()
            .as_ref()
            .and_then(|line| Condition::of(line, false))
        else {
            return BlockParse::Declined;
        };

        let mut body = String::new();
        loop {
            let Some(line) = scanner.peek() else { break };
            if !line.fully_matched() {
                break;
            }
            if condition.ends_on_blank() && line.is_blank() {
                break;
            }
            let content = line.content().to_string();
            drop(line);
            body.push_str(&content);
            body.push('\n');
            scanner.consume_line_verbatim();
            if condition.ends_on(&content) {
                break;
            }
        }

        BlockParse::Matched(Block::HtmlBlock(HtmlBlockNode { body }))
    }
}
