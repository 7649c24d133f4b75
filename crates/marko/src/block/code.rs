use crate::ast::{Block, CodeBlock as CodeBlockNode};
use crate::block::{priority, BlockContext, BlockParse, BlockRule, BlockScanner};
use crate::source::PrefixedLine;

/// Indented code blocks: four or more columns of indentation. Cannot
/// interrupt a paragraph, so a would-be code line after paragraph text is
/// just a continuation line.
#[derive(Debug)]
pub(super) struct CodeBlock;

impl BlockRule for CodeBlock {
    fn kind(&self) -> &'static str {
        "code_block"
    }

    fn priority(&self) -> u8 {
        priority::CODE_BLOCK
    }

    fn match_line(&self, line: &PrefixedLine<'_>, ctx: &BlockContext) -> bool {
        !ctx.interrupting && !line.is_blank() && line.indent() >= 4
    }

    fn parse(&self, scanner: &mut BlockScanner<'_, '_>) -> BlockParse {
        let mut body = String::new();
        loop {
            let Some(line) = scanner.peek() else { break };
            if !line.fully_matched() {
                break;
            }
            if line.is_blank() {
                drop(line);
                // Blank lines belong to the block only when more indented
                // content follows; otherwise they separate it from whatever
                // comes next and are left for the blank-line rule.
                if !self.consume_interior_blanks(scanner, &mut body) {
                    break;
                }
                continue;
            }
            if line.indent() < 4 {
                break;
            }
            push_stripped(&line, &mut body);
            drop(line);
            scanner.consume_line_verbatim();
        }
        BlockParse::Matched(Block::CodeBlock(CodeBlockNode::new(body)))
    }
}

impl CodeBlock {
    /// Speculatively consume a run of blank lines. Keeps them (returning
    /// true) when indented content follows, rewinds otherwise.
    fn consume_interior_blanks(
        &self,
        scanner: &mut BlockScanner<'_, '_>,
        body: &mut String,
    ) -> bool {
        scanner.save();
        let mut gathered = String::new();
        loop {
            let Some(line) = scanner.peek() else {
                scanner.restore();
                return false;
            };
            if !line.fully_matched() {
                scanner.restore();
                return false;
            }
            if line.is_blank() {
                push_stripped(&line, &mut gathered);
                drop(line);
                scanner.consume_line_verbatim();
                continue;
            }
            if line.indent() >= 4 {
                scanner.discard();
                body.push_str(&gathered);
                return true;
            }
            scanner.restore();
            return false;
        }
    }
}

/// Append the line with up to four columns of indentation removed.
fn push_stripped(line: &PrefixedLine<'_>, body: &mut String) {
    let take = line.indent().min(4);
    match line.strip_columns(take) {
        Some((rest, _)) => body.push_str(rest.trim_end_matches('\n')),
        None => body.push_str(line.content()),
    }
    body.push('\n');
}
