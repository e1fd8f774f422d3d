//! # Text Highlighter
//!
//! Splits an example sentence around every literal occurrence of a marker
//! so the presentation layer can colour the marker distinctly.
//!
//! ```text
//! highlight("cat sat", "at")
//!   → "c" | [at] | " s" | [at] | ""
//! ```
//!
//! Every piece the split produces is kept, empty ones included, so the
//! output always alternates plain/marked and ends on a plain segment.

/// A run of text tagged as marked or unmarked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub is_marked: bool,
}

impl Segment {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_marked: false,
        }
    }

    pub fn marked(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_marked: true,
        }
    }
}

/// Split `text` on `marker` (exact substring, not a pattern) and interleave
/// a marked segment between adjacent pieces.
///
/// An empty marker yields the whole text as one unmarked segment.
pub fn highlight(text: &str, marker: &str) -> Vec<Segment> {
    if marker.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut pieces = text.split(marker).peekable();
    while let Some(piece) = pieces.next() {
        segments.push(Segment::plain(piece));
        if pieces.peek().is_some() {
            segments.push(Segment::marked(marker));
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_occurs_twice() {
        assert_eq!(
            highlight("cat sat", "at"),
            vec![
                Segment::plain("c"),
                Segment::marked("at"),
                Segment::plain(" s"),
                Segment::marked("at"),
                Segment::plain(""),
            ]
        );
    }

    #[test]
    fn test_marker_absent_returns_whole_text() {
        assert_eq!(highlight("hello", "xyz"), vec![Segment::plain("hello")]);
    }

    #[test]
    fn test_marker_at_start_keeps_leading_empty_piece() {
        assert_eq!(
            highlight("ship", "sh"),
            vec![Segment::plain(""), Segment::marked("sh"), Segment::plain("ip")]
        );
    }

    #[test]
    fn test_adjacent_markers_produce_empty_plain_between() {
        assert_eq!(
            highlight("oo", "o"),
            vec![
                Segment::plain(""),
                Segment::marked("o"),
                Segment::plain(""),
                Segment::marked("o"),
                Segment::plain(""),
            ]
        );
    }

    #[test]
    fn test_empty_marker_is_not_split() {
        assert_eq!(highlight("bed", ""), vec![Segment::plain("bed")]);
    }

    #[test]
    fn test_multibyte_marker() {
        let segments = highlight("θink baθ", "θ");
        let rebuilt: String = segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(rebuilt, "θink baθ");
        assert_eq!(segments.iter().filter(|s| s.is_marked).count(), 2);
    }

    #[test]
    fn test_output_alternates_and_ends_plain() {
        let segments = highlight("banana", "an");
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.is_marked, i % 2 == 1);
        }
        assert!(!segments.last().unwrap().is_marked);
    }
}
