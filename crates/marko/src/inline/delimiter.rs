//! Delimiter runs and the emphasis resolution algorithm.
//!
//! Every `*`/`_` run and every `[`/`![` bracket found while segmenting the
//! text becomes a [`Delim`] record. Emphasis is resolved by walking closers
//! from the bottom of the stack upward, pairing each with the nearest
//! usable opener and consuming up to two characters at a time, preferring
//! strong emphasis. Consumed character spans are recorded as [`Pair`]s; the
//! tree is assembled from those spans afterwards, so pairing never has to
//! restructure the item list mid-flight.

use std::ops::Range;

use bitflags::bitflags;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

bitflags! {
    /// Context of the characters surrounding a delimiter run.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) struct DelimFlags: u8 {
        const PRECEDING_WHITESPACE = 1 << 0;
        const PRECEDING_PUNCTUATION = 1 << 1;
        const FOLLOWING_WHITESPACE = 1 << 2;
        const FOLLOWING_PUNCTUATION = 1 << 3;
    }
}

/// A delimiter stack entry.
#[derive(Debug)]
pub(crate) struct Delim {
    /// Index of the `Item::Delim` this entry describes.
    pub item: usize,
    /// `*`, `_`, `[` for a link opener, `!` for an image opener.
    pub ch: u8,
    /// The full span of the run in the source text (for `!` this covers
    /// both bytes of `![`).
    pub span: Range<usize>,
    /// Unconsumed delimiter characters. Brackets go from 1 to 0 when they
    /// are resolved, without affecting their literal text.
    pub count: usize,
    /// The run length as written, for the multiple-of-3 rule.
    pub orig_len: usize,
    /// Characters consumed from the start of the run (as a closer).
    pub used_start: usize,
    /// Characters consumed from the end of the run (as an opener).
    pub used_end: usize,
    pub can_open: bool,
    pub can_close: bool,
    pub active: bool,
}

impl Delim {
    pub fn is_bracket(&self) -> bool {
        matches!(self.ch, b'[' | b'!')
    }

    /// The span of characters not consumed by any pairing; rendered as
    /// literal text.
    pub fn leftover_span(&self) -> Range<usize> {
        self.span.start + self.used_start..self.span.end - self.used_end
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PairKind {
    Emphasis,
    Strong,
}

/// A completed emphasis pairing: the consumed opening and closing character
/// spans. Pairs produced by the algorithm are properly nested or disjoint.
#[derive(Debug)]
pub(crate) struct Pair {
    pub kind: PairKind,
    pub open: Range<usize>,
    pub close: Range<usize>,
}

/// "A Unicode whitespace character is a character in the Unicode Zs general
/// category, or a tab, line feed, form feed, or carriage return."
pub(crate) fn is_unicode_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{C}' | '\r')
        || c.general_category() == GeneralCategory::SpaceSeparator
}

/// "A Unicode punctuation character is a character in the Unicode P or S
/// general categories."
pub(crate) fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Punctuation | GeneralCategoryGroup::Symbol
    )
}

/// Compute the surrounding-character flags for a run spanning `span` of
/// `text`. The beginning and end of the text count as whitespace.
pub(crate) fn surrounding_flags(text: &str, span: &Range<usize>) -> DelimFlags {
    let mut flags = DelimFlags::empty();
    match text[..span.start].chars().next_back() {
        None => flags |= DelimFlags::PRECEDING_WHITESPACE,
        Some(c) if is_unicode_whitespace(c) => flags |= DelimFlags::PRECEDING_WHITESPACE,
        Some(c) if is_unicode_punctuation(c) => flags |= DelimFlags::PRECEDING_PUNCTUATION,
        Some(_) => {}
    }
    match text[span.end..].chars().next() {
        None => flags |= DelimFlags::FOLLOWING_WHITESPACE,
        Some(c) if is_unicode_whitespace(c) => flags |= DelimFlags::FOLLOWING_WHITESPACE,
        Some(c) if is_unicode_punctuation(c) => flags |= DelimFlags::FOLLOWING_PUNCTUATION,
        Some(_) => {}
    }
    flags
}

/// Build a delimiter entry for an emphasis run, computing whether it can
/// open and/or close from the flanking rules.
pub(crate) fn emphasis_delim(text: &str, item: usize, ch: u8, span: Range<usize>) -> Delim {
    let flags = surrounding_flags(text, &span);
    let preceding_ws = flags.contains(DelimFlags::PRECEDING_WHITESPACE);
    let preceding_punct = flags.contains(DelimFlags::PRECEDING_PUNCTUATION);
    let following_ws = flags.contains(DelimFlags::FOLLOWING_WHITESPACE);
    let following_punct = flags.contains(DelimFlags::FOLLOWING_PUNCTUATION);

    // Left-flanking: not followed by whitespace, and either not followed by
    // punctuation or preceded by whitespace or punctuation.
    let left_flanking =
        !following_ws && (!following_punct || preceding_ws || preceding_punct);
    // Right-flanking is the mirror image.
    let right_flanking =
        !preceding_ws && (!preceding_punct || following_ws || following_punct);

    // "A single _ character can open emphasis iff it is part of a
    // left-flanking delimiter run and either (a) not part of a
    // right-flanking delimiter run or (b) part of a right-flanking
    // delimiter run preceded by a Unicode punctuation character." This is
    // what forbids intra-word `_` emphasis.
    let (can_open, can_close) = match ch {
        b'_' => (
            left_flanking && (!right_flanking || preceding_punct),
            right_flanking && (!left_flanking || following_punct),
        ),
        _ => (left_flanking, right_flanking),
    };

    let count = span.len();
    Delim {
        item,
        ch,
        span,
        count,
        orig_len: count,
        used_start: 0,
        used_end: 0,
        can_open,
        can_close,
        active: true,
    }
}

pub(crate) fn bracket_delim(item: usize, ch: u8, span: Range<usize>) -> Delim {
    Delim {
        item,
        ch,
        span,
        count: 1,
        orig_len: 1,
        used_start: 0,
        used_end: 0,
        can_open: ch != b']',
        can_close: ch == b']',
        active: true,
    }
}

/// Process the delimiter stack entries within `range`, pairing emphasis
/// closers with openers and appending the completed spans to `pairs`.
pub(crate) fn process_emphasis(delims: &mut [Delim], range: Range<usize>, pairs: &mut Vec<Pair>) {
    for closer_index in range.clone() {
        loop {
            {
                let closer = &delims[closer_index];
                if closer.is_bracket()
                    || !closer.can_close
                    || !closer.active
                    || closer.count == 0
                {
                    break;
                }
            }

            let Some(opener_index) = find_opener(delims, range.start, closer_index) else {
                break;
            };

            consume_pair(delims, opener_index, closer_index, pairs);

            // Delimiters between the opener and closer could only have
            // completed inside that span, which has now been passed over.
            for index in opener_index + 1..closer_index {
                if !delims[index].is_bracket() {
                    delims[index].deactivate();
                }
            }
        }
    }
}

/// Search backwards from the closer for the nearest opener of the same kind
/// that the multiple-of-3 rule permits.
fn find_opener(delims: &[Delim], bottom: usize, closer_index: usize) -> Option<usize> {
    let closer_ch = delims[closer_index].ch;
    for opener_index in (bottom..closer_index).rev() {
        let opener = &delims[opener_index];
        if opener.ch != closer_ch || !opener.active || !opener.can_open || opener.count == 0 {
            continue;
        }
        // "If one of the delimiters can both open and close emphasis, then
        // the sum of the lengths of the delimiter runs containing the
        // opening and closing delimiters must not be a multiple of 3
        // unless both lengths are multiples of 3." Lengths here are the
        // runs as written, not what remains of them.
        let closer = &delims[closer_index];
        if opener.can_open && opener.can_close || closer.can_open && closer.can_close {
            let total = opener.orig_len + closer.orig_len;
            if total % 3 == 0 && (opener.orig_len % 3 != 0 || closer.orig_len % 3 != 0) {
                continue;
            }
        }
        return Some(opener_index);
    }
    None
}

/// Consume as many characters as possible from the opener/closer pair, two
/// at a time (strong emphasis first), recording a `Pair` per step.
fn consume_pair(
    delims: &mut [Delim],
    opener_index: usize,
    closer_index: usize,
    pairs: &mut Vec<Pair>,
) {
    let mut to_consume = delims[opener_index]
        .count
        .min(delims[closer_index].count);

    while to_consume > 0 {
        let take = to_consume.min(2);
        let kind = if take == 2 {
            PairKind::Strong
        } else {
            PairKind::Emphasis
        };

        let open = {
            let opener = &mut delims[opener_index];
            let end = opener.span.end - opener.used_end;
            opener.used_end += take;
            opener.count -= take;
            end - take..end
        };
        let close = {
            let closer = &mut delims[closer_index];
            let start = closer.span.start + closer.used_start;
            closer.used_start += take;
            closer.count -= take;
            start..start + take
        };
        pairs.push(Pair { kind, open, close });

        to_consume -= take;
    }
}
