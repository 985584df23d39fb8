//! Inline emphasis parsing.
//!
//! Splits free-form story text into plain and emphasized runs. Three marker
//! patterns are recognized, all built from `*`:
//!
//! - `***text***` is bold and italic
//! - `**text**` is bold
//! - `*text*` is italic
//!
//! Matching is non-greedy and never crosses a line break. The patterns are
//! scanned independently in precedence order (triple, double, single); a match
//! from a later pass is dropped when its start falls inside a span claimed by an
//! earlier pass. Only the start is checked, so a dropped match can leave stray
//! markers behind as literal text:
//!
//! ```
//! use broadsheet::emphasis::{parse_emphasis, Segment};
//!
//! let segments = parse_emphasis("**a *b** c*");
//! assert_eq!(
//!     segments,
//!     vec![Segment::bold("a *b"), Segment::plain(" c*")]
//! );
//! ```
//!
//! Unterminated markers are literal text; the parser never fails.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static BOLD_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").expect("valid bold-italic pattern"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic pattern"));

/// Style of a parsed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    PlainText,
    Bold,
    Italic,
    BoldItalic,
}

impl SegmentKind {
    /// The marker that wraps this kind in source text.
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::PlainText => "",
            Self::Bold => "**",
            Self::Italic => "*",
            Self::BoldItalic => "***",
        }
    }

    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

/// One contiguous run of output text.
///
/// `text` never contains the delimiters of an emphasis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    kind: SegmentKind,
    text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::PlainText, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Italic, text)
    }

    pub fn bold_italic(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::BoldItalic, text)
    }

    pub const fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Re-wrap the text in its delimiters, recovering the source it came from.
    pub fn to_markup(&self) -> String {
        let delimiter = self.kind.delimiter();
        format!("{delimiter}{}{delimiter}", self.text)
    }
}

/// A pattern hit, in byte offsets of the scanned input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Match<'a> {
    kind: SegmentKind,
    start: usize,
    end: usize,
    text: &'a str,
}

impl Match<'_> {
    const fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Scan `input` for every non-overlapping hit of `pattern`.
///
/// Each call starts from the beginning of the input; nothing carries over
/// between passes.
fn scan<'a>(pattern: &Regex, kind: SegmentKind, input: &'a str) -> Vec<Match<'a>> {
    pattern
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(Match {
                kind,
                start: whole.start(),
                end: whole.end(),
                text: inner.as_str(),
            })
        })
        .collect()
}

fn starts_inside(candidate: &Match<'_>, claimed: &[Match<'_>]) -> bool {
    claimed
        .iter()
        .any(|existing| existing.span().contains(&candidate.start))
}

/// Find surviving matches in priority order, merged and sorted by start.
fn resolve_matches(input: &str) -> Vec<Match<'_>> {
    let mut claimed = scan(&BOLD_ITALIC, SegmentKind::BoldItalic, input);

    for (pattern, kind) in [(&*BOLD, SegmentKind::Bold), (&*ITALIC, SegmentKind::Italic)] {
        let survivors: Vec<Match<'_>> = scan(pattern, kind, input)
            .into_iter()
            .filter(|candidate| !starts_inside(candidate, &claimed))
            .collect();
        claimed.extend(survivors);
    }

    claimed.sort_by_key(|m| m.start);
    claimed
}

/// Split `input` into plain and emphasized segments, left to right.
///
/// Empty input gives an empty vector; input without markers gives a single
/// plain segment.
pub fn parse_emphasis(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in resolve_matches(input) {
        // Start-only containment lets a later-pass match begin under an
        // earlier one's tail; the earlier one has already been emitted.
        if found.start < cursor {
            tracing::trace!(
                start = found.start,
                end = found.end,
                cursor,
                "skipping overlapping emphasis match"
            );
            continue;
        }
        if found.start > cursor {
            segments.push(Segment::plain(&input[cursor..found.start]));
        }
        segments.push(Segment::new(found.kind, found.text));
        cursor = found.end;
    }

    if cursor < input.len() {
        segments.push(Segment::plain(&input[cursor..]));
    }

    segments
}

/// The input with every consumed emphasis delimiter removed.
pub fn strip_emphasis(input: &str) -> String {
    parse_emphasis(input)
        .iter()
        .map(Segment::text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(segments: &[Segment]) -> String {
        segments.iter().map(Segment::to_markup).collect()
    }

    #[test]
    fn test_plain_text_is_single_segment() {
        assert_eq!(
            parse_emphasis("hello world"),
            vec![Segment::plain("hello world")]
        );
    }

    #[test]
    fn test_empty_input_has_no_segments() {
        assert!(parse_emphasis("").is_empty());
    }

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(
            parse_emphasis("**bold** and *italic*"),
            vec![
                Segment::bold("bold"),
                Segment::plain(" and "),
                Segment::italic("italic"),
            ]
        );
    }

    #[test]
    fn test_triple_marker_is_bold_italic() {
        assert_eq!(parse_emphasis("***both***"), vec![Segment::bold_italic("both")]);
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(
            parse_emphasis("**a** **b**"),
            vec![Segment::bold("a"), Segment::plain(" "), Segment::bold("b")]
        );
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        assert_eq!(
            parse_emphasis("*unterminated"),
            vec![Segment::plain("*unterminated")]
        );
    }

    #[test]
    fn test_italic_after_bold_close() {
        assert_eq!(
            parse_emphasis("**x***y*"),
            vec![Segment::bold("x"), Segment::italic("y")]
        );
    }

    #[test]
    fn test_start_only_containment_leaves_stray_marker() {
        assert_eq!(
            parse_emphasis("**a *b** c*"),
            vec![Segment::bold("a *b"), Segment::plain(" c*")]
        );
    }

    #[test]
    fn test_adjacent_markers_give_empty_bold() {
        assert_eq!(parse_emphasis("****"), vec![Segment::bold("")]);
    }

    #[test]
    fn test_bold_inside_italic_span_is_skipped_on_overlap() {
        // Italic `*a *` starts outside the bold span `**b**` but runs into it.
        let segments = parse_emphasis("*a **b** c*");
        assert_eq!(segments[0], Segment::italic("a "));
        assert_eq!(markup(&segments), "*a **b** c*");
    }

    #[test]
    fn test_emphasis_does_not_cross_newline() {
        assert_eq!(
            parse_emphasis("*open\nclose*"),
            vec![Segment::plain("*open\nclose*")]
        );
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        let segments = parse_emphasis("café **crème** brûlée");
        assert_eq!(
            segments,
            vec![
                Segment::plain("café "),
                Segment::bold("crème"),
                Segment::plain(" brûlée"),
            ]
        );
    }

    #[test]
    fn test_markup_reconstructs_input() {
        for input in [
            "plain",
            "**bold** and *italic* and ***both***",
            "**x***y*",
            "**a *b** c*",
            "*a **b** c*",
            "* lone * stars **",
        ] {
            assert_eq!(markup(&parse_emphasis(input)), input, "input: {input:?}");
        }
    }

    #[test]
    fn test_strip_emphasis_removes_consumed_markers() {
        assert_eq!(strip_emphasis("**Bold** news, *today*"), "Bold news, today");
        assert_eq!(strip_emphasis("3 * 4"), "3 * 4");
    }

    #[test]
    fn test_segment_kind_flags() {
        assert!(SegmentKind::BoldItalic.is_bold());
        assert!(SegmentKind::BoldItalic.is_italic());
        assert!(!SegmentKind::Bold.is_italic());
        assert!(!SegmentKind::PlainText.is_bold());
    }
}
