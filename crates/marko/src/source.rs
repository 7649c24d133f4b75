//! A line/column-tracked view over the input text.
//!
//! Container blocks register prefix matchers (a block-quote marker, an
//! N-column indent) that are peeled off the front of every line before the
//! block rules examine it. Tabs are never rewritten in the stored text; they
//! only expand to 4-column stops while measuring or consuming indentation,
//! which means consuming part of a tab leaves the remaining columns behind
//! as literal spaces.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// A container prefix matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prefix {
    /// `>` preceded by up to three columns of indentation, optionally
    /// followed by one column of whitespace. Fails on blank lines, which is
    /// what ends a block quote at a blank.
    Quote,
    /// At least this many columns of leading whitespace. Blank lines match
    /// unconditionally so that list items stay open across them.
    Indent(usize),
}

/// One line of input with the leading container prefixes peeled off.
#[derive(Debug)]
pub struct PrefixedLine<'s> {
    /// The line after the matched prefixes, including its terminator when
    /// the source has one.
    pub text: Cow<'s, str>,
    /// How many prefixes of the full stack matched. When this is less than
    /// `total`, `text` is the remainder after the prefixes that did match.
    pub matched: usize,
    pub total: usize,
    /// The column at which `text` begins, for tab-stop computation.
    pub start_col: usize,
}

impl<'s> PrefixedLine<'s> {
    pub fn fully_matched(&self) -> bool {
        self.matched == self.total
    }

    /// The line content without its terminator.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches('\n')
    }

    pub fn is_blank(&self) -> bool {
        self.content().bytes().all(|b| b == b' ' || b == b'\t')
    }

    /// Columns of leading whitespace, with tabs expanded from `start_col`.
    pub fn indent(&self) -> usize {
        measure_indent(self.content(), self.start_col).0
    }

    /// Byte length of the leading whitespace.
    pub fn indent_len(&self) -> usize {
        measure_indent(self.content(), self.start_col).1
    }

    /// Anchored regex match against the line content.
    pub fn expect<'t>(&'t self, re: &Regex) -> Option<Captures<'t>> {
        re.captures(self.content())
    }

    /// Consume exactly `want` columns of leading whitespace, returning the
    /// remainder and its starting column. Returns `None` when the line has
    /// fewer columns of whitespace than requested.
    pub fn strip_columns(&self, want: usize) -> Option<(Cow<'_, str>, usize)> {
        consume_columns(&self.text, want, self.start_col)
    }
}

#[derive(Debug, Clone)]
struct MidLine {
    /// The unconsumed remainder of the current line, terminator included.
    text: String,
    col: usize,
    /// Prefix-stack depth when the remainder was produced. Only prefixes
    /// pushed after that point apply to it.
    applied: usize,
}

#[derive(Debug)]
struct SavePoint {
    pos: usize,
    line_rest: Option<MidLine>,
    prefixes: usize,
}

#[derive(Debug)]
pub(crate) struct Source<'a> {
    text: &'a str,
    /// Byte offset of the current physical line start, or `text.len()`.
    pos: usize,
    line_rest: Option<MidLine>,
    prefixes: Vec<Prefix>,
    saves: Vec<SavePoint>,
}

impl<'a> Source<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line_rest: None,
            prefixes: Vec::new(),
            saves: Vec::new(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.line_rest.is_none() && self.pos >= self.text.len()
    }

    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    pub fn push_prefix(&mut self, prefix: Prefix) {
        self.prefixes.push(prefix);
    }

    pub fn pop_prefix(&mut self) {
        self.prefixes.pop();
    }

    /// The current line with as many prefixes peeled as will match. Returns
    /// `None` at end of input.
    pub fn peek(&self) -> Option<PrefixedLine<'_>> {
        if let Some(mid) = &self.line_rest {
            let pending = self.prefixes.get(mid.applied..).unwrap_or(&[]);
            let (extra, text, col) = match_prefixes(&mid.text, pending, mid.col);
            return Some(PrefixedLine {
                text,
                matched: mid.applied + extra,
                total: self.prefixes.len(),
                start_col: col,
            });
        }

        if self.pos >= self.text.len() {
            return None;
        }
        let line = self.current_physical_line();
        let (matched, text, col) = match_prefixes(line, &self.prefixes, 0);
        Some(PrefixedLine {
            text,
            matched,
            total: self.prefixes.len(),
            start_col: col,
        })
    }

    /// Advance past the current line (or its unconsumed remainder).
    pub fn consume_line(&mut self) {
        self.line_rest = None;
        if self.pos < self.text.len() {
            let line = self.current_physical_line();
            self.pos += line.len();
        }
    }

    /// Leave the rest of the current line (terminator included) pending, to
    /// be re-examined with only prefixes pushed after this call applied.
    /// Container rules use this after consuming their marker mid-line.
    pub fn advance_into_line(&mut self, rest: String, col: usize) {
        self.line_rest = Some(MidLine {
            text: rest,
            col,
            applied: self.prefixes.len(),
        });
    }

    /// Checkpoint for speculative matching.
    pub fn save(&mut self) {
        self.saves.push(SavePoint {
            pos: self.pos,
            line_rest: self.line_rest.clone(),
            prefixes: self.prefixes.len(),
        });
    }

    /// Rewind to the most recent checkpoint.
    pub fn restore(&mut self) {
        let save = self
            .saves
            .pop()
            .expect("restore called without a matching save");
        self.pos = save.pos;
        self.line_rest = save.line_rest;
        self.prefixes.truncate(save.prefixes);
    }

    /// Drop the most recent checkpoint, keeping the current position.
    pub fn discard(&mut self) {
        self.saves
            .pop()
            .expect("discard called without a matching save");
    }

    fn current_physical_line(&self) -> &'a str {
        let rest = &self.text[self.pos..];
        match memchr::memchr(b'\n', rest.as_bytes()) {
            Some(index) => &rest[..=index],
            None => rest,
        }
    }
}

/// Measure leading whitespace of `text` in columns (with `start_col` tab
/// anchoring) and bytes.
pub fn measure_indent(text: &str, start_col: usize) -> (usize, usize) {
    let mut col = start_col;
    let mut len = 0;
    for byte in text.bytes() {
        match byte {
            b' ' => col += 1,
            b'\t' => col += 4 - (col % 4),
            _ => break,
        }
        len += 1;
    }
    (col - start_col, len)
}

/// Consume exactly `want` columns of leading whitespace from `text`. A tab
/// that overshoots the requested width is split: the leftover columns are
/// materialized as spaces in an owned remainder.
pub fn consume_columns(text: &str, want: usize, start_col: usize) -> Option<(Cow<'_, str>, usize)> {
    let target = start_col + want;
    let mut col = start_col;
    let mut len = 0;
    for byte in text.bytes() {
        if col >= target {
            break;
        }
        match byte {
            b' ' => col += 1,
            b'\t' => col += 4 - (col % 4),
            _ => return None,
        }
        len += 1;
    }
    if col < target {
        return None;
    }
    if col == target {
        Some((Cow::Borrowed(&text[len..]), col))
    } else {
        // A tab carried us past the stop; pad the difference with spaces.
        let mut rest = " ".repeat(col - target);
        rest.push_str(&text[len..]);
        Some((Cow::Owned(rest), target))
    }
}

/// Apply `prefixes` to `line` left to right, stopping at the first one that
/// fails. Returns the number matched, the remainder, and its column.
fn match_prefixes<'t>(
    line: &'t str,
    prefixes: &[Prefix],
    start_col: usize,
) -> (usize, Cow<'t, str>, usize) {
    let mut text: Cow<'t, str> = Cow::Borrowed(line);
    let mut col = start_col;
    let mut matched = 0;

    for prefix in prefixes {
        let outcome = match prefix {
            Prefix::Quote => match_quote(text.as_ref(), col),
            Prefix::Indent(want) => match_indent(text.as_ref(), *want, col),
        };
        match outcome {
            Some((rest, rest_col)) => {
                let rest = rest.into_owned();
                text = Cow::Owned(rest);
                col = rest_col;
                matched += 1;
            }
            None => break,
        }
    }

    // Re-borrow when nothing was consumed so the common no-container case
    // stays allocation-free.
    if matched == 0 {
        return (0, Cow::Borrowed(line), start_col);
    }
    (matched, text, col)
}

fn is_blank_line(text: &str) -> bool {
    text.trim_end_matches('\n')
        .bytes()
        .all(|b| b == b' ' || b == b'\t')
}

fn match_quote<'t>(text: &'t str, start_col: usize) -> Option<(Cow<'t, str>, usize)> {
    let (indent, len) = measure_indent(text, start_col);
    if indent > 3 {
        return None;
    }
    let rest = &text[len..];
    if !rest.starts_with('>') {
        return None;
    }
    let col = start_col + indent + 1;
    let rest = &rest[1..];
    // One column of whitespace after the marker belongs to the prefix. A tab
    // here only gives up a single column; the rest of its width stays with
    // the content.
    match rest.bytes().next() {
        Some(b' ') => Some((Cow::Borrowed(&rest[1..]), col + 1)),
        Some(b'\t') => {
            let stop = col + (4 - (col % 4));
            let leftover = stop - col - 1;
            if leftover == 0 {
                Some((Cow::Borrowed(&rest[1..]), col + 1))
            } else {
                let mut padded = " ".repeat(leftover);
                padded.push_str(&rest[1..]);
                Some((Cow::Owned(padded), col + 1))
            }
        }
        _ => Some((Cow::Borrowed(rest), col)),
    }
}

fn match_indent<'t>(text: &'t str, want: usize, start_col: usize) -> Option<(Cow<'t, str>, usize)> {
    if is_blank_line(text) {
        return Some((Cow::Borrowed(text), start_col));
    }
    consume_columns(text, want, start_col)
}
