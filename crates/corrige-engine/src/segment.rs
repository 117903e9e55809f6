// Paragraph segmentation.
//
// The paragraph itself is the unit of the first rule pass. For the second
// pass it is split into sentence spans at terminal punctuation (period,
// question or exclamation mark, colon, semicolon, ellipsis), each boundary
// absorbing any trailing spaces, closing quotes and brackets; text without a
// final terminator yields one last span ending at the end of the paragraph.
// Leading non-word characters of the paragraph are skipped.
//
// Only spans whose character length lies strictly between MIN_SENTENCE_CHARS
// and MAX_SENTENCE_CHARS are forwarded to the sentence pass; shorter spans
// carry no checkable grammar and longer ones are treated as degenerate
// input. The bound also caps the work a pathological regex can do on one
// sentence.
//
// Sentence boundaries are always computed on the text as it stands after
// the paragraph pass, so paragraph rewrites shift segmentation, not offsets.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buffer::CharMap;

/// Exclusive lower bound on forwarded sentence length, in characters.
pub const MIN_SENTENCE_CHARS: usize = 4;
/// Exclusive upper bound on forwarded sentence length, in characters.
pub const MAX_SENTENCE_CHARS: usize = 2000;

static END_OF_SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.?!:;…][ .?!… »”")]*"#).unwrap());
static BEGIN_OF_PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\W*").unwrap());

/// A sentence span in character offsets, end-exclusive.
pub type SentenceSpan = (usize, usize);

/// Split a paragraph into sentence spans (character offsets).
///
/// Every span is returned; length filtering is the caller's decision via
/// [`is_checkable`].
pub fn sentence_spans(text: &str) -> Vec<SentenceSpan> {
    let map = CharMap::new(text);
    let mut spans = Vec::new();

    let lead = BEGIN_OF_PARAGRAPH
        .find(text)
        .map(|m| m.end())
        .unwrap_or(0);
    let mut start = map.char_of(lead);

    for m in END_OF_SENTENCE.find_iter(text) {
        let end = map.char_of(m.end());
        spans.push((start, end));
        start = end;
    }
    if start < map.len_chars() {
        spans.push((start, map.len_chars()));
    }
    spans
}

/// True when a span's length is inside the forwarding bounds.
pub fn is_checkable(span: SentenceSpan) -> bool {
    let len = span.1 - span.0;
    len > MIN_SENTENCE_CHARS && len < MAX_SENTENCE_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_sentence_with_period() {
        let spans = sentence_spans("Les chats dorment.");
        assert_eq!(spans, vec![(0, 18)]);
    }

    #[test]
    fn two_sentences() {
        let text = "Il pleut. Nous restons.";
        let spans = sentence_spans(text);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], (0, 10)); // boundary absorbs the space
        assert_eq!(spans[1], (10, 23));
    }

    #[test]
    fn trailing_text_without_terminator() {
        let text = "Il pleut. Nous restons";
        let spans = sentence_spans(text);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1], (10, 22));
    }

    #[test]
    fn leading_nonword_skipped() {
        let text = "  — Bonjour à tous.";
        let spans = sentence_spans(text);
        assert_eq!(spans[0].0, 4);
        assert_eq!(spans[0].1, text.chars().count());
    }

    #[test]
    fn closing_quote_absorbed() {
        let text = "« Venez ! » Il sourit.";
        let spans = sentence_spans(text);
        // boundary after "!" swallows the closing guillemet and spaces
        assert_eq!(spans[0].0, 2);
        assert_eq!(spans[0].1, 12);
        assert_eq!(spans[1], (12, 22));
    }

    #[test]
    fn colon_and_semicolon_terminate() {
        let text = "Premier point ; second point : la fin.";
        let spans = sentence_spans(text);
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn empty_paragraph() {
        assert!(sentence_spans("").is_empty());
    }

    #[test]
    fn checkable_bounds_are_exclusive() {
        assert!(!is_checkable((0, 4)));
        assert!(is_checkable((0, 5)));
        assert!(is_checkable((0, 1999)));
        assert!(!is_checkable((0, 2000)));
    }

    #[test]
    fn offsets_are_char_based() {
        let text = "Été fini. Automne déjà.";
        let spans = sentence_spans(text);
        assert_eq!(spans[0], (0, 10));
        assert_eq!(spans[1], (10, 23));
    }
}
