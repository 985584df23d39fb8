//! Edition document and rendered line types.

use serde::{Deserialize, Serialize};

use crate::emphasis::SegmentKind;

/// One day's content for one region, as served by the edition API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    #[serde(default)]
    pub region_id: String,
    #[serde(default)]
    pub edition_date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    pub main_story: MainStory,
}

impl Edition {
    /// Parse an edition from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns the decoder error when `json` is not a valid edition document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Subtitle, ignoring blank values.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainStory {
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<String>,
    pub body: String,
}

impl MainStory {
    /// Angle line, ignoring blank values.
    pub fn angle(&self) -> Option<&str> {
        self.angle.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub summary: String,
}

/// A single rendered line with styling information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// The text content of the line
    content: String,
    /// The type of line (for styling)
    line_type: LineType,
    /// Inline-styled spans; empty when the line is uniformly styled
    spans: Vec<InlineSpan>,
}

impl RenderedLine {
    pub const fn new(content: String, line_type: LineType) -> Self {
        Self {
            content,
            line_type,
            spans: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new(String::new(), LineType::Empty)
    }

    /// Build a line from spans; the plain content is their concatenation.
    pub fn from_spans(line_type: LineType, spans: Vec<InlineSpan>) -> Self {
        let content = spans.iter().map(InlineSpan::text).collect();
        Self {
            content,
            line_type,
            spans,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn line_type(&self) -> &LineType {
        &self.line_type
    }

    /// Inline spans, if the line carries any.
    pub fn spans(&self) -> Option<&[InlineSpan]> {
        if self.spans.is_empty() {
            None
        } else {
            Some(&self.spans)
        }
    }
}

/// Inline style flags for a text span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub emphasis: bool,
    pub strong: bool,
    pub code: bool,
    pub strikethrough: bool,
    pub link: bool,
    /// Oversized first letter of the main story
    pub drop_cap: bool,
}

impl From<SegmentKind> for InlineStyle {
    fn from(kind: SegmentKind) -> Self {
        Self {
            strong: kind.is_bold(),
            emphasis: kind.is_italic(),
            ..Self::default()
        }
    }
}

/// A styled inline span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    text: String,
    style: InlineStyle,
}

impl InlineSpan {
    pub const fn new(text: String, style: InlineStyle) -> Self {
        Self { text, style }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text.into(), InlineStyle::default())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn style(&self) -> InlineStyle {
        self.style
    }
}

/// Type of a rendered line, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Masthead title
    Title,
    /// Masthead subtitle
    Subtitle,
    /// Region and date under the masthead
    Dateline,
    /// Heavy rule closing the masthead
    DoubleRule,
    /// Thin separator rule
    Rule,
    /// Main story headline
    Headline,
    /// Main story angle, set off with a left rule
    Angle,
    /// Story or summary paragraph
    Paragraph,
    /// Section heading (announcements)
    SectionHeading,
    /// Announcement title
    AnnouncementTitle,
    /// Block quote line inside a summary
    BlockQuote,
    /// List item with nesting level
    ListItem(usize),
    /// Placeholder text such as "No announcements available."
    Notice,
    /// Empty line
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "region_id": "7",
        "edition_date": "2026-10-18",
        "title": "The Valley Ledger",
        "subtitle": "Morning edition",
        "announcements": [{"title": "Road works", "summary": "Main St closed."}],
        "main_story": {"headline": "Bridge reopens", "angle": "Commuters relieved", "body": "It is open."}
    }"#;

    #[test]
    fn test_edition_deserializes_all_fields() {
        let edition = Edition::from_json(SAMPLE).unwrap();
        assert_eq!(edition.region_id, "7");
        assert_eq!(edition.edition_date, "2026-10-18");
        assert_eq!(edition.subtitle(), Some("Morning edition"));
        assert_eq!(edition.announcements.len(), 1);
        assert_eq!(edition.main_story.angle(), Some("Commuters relieved"));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"title": "T", "main_story": {"headline": "H", "body": "B"}}"#;
        let edition = Edition::from_json(json).unwrap();
        assert!(edition.region_id.is_empty());
        assert!(edition.subtitle().is_none());
        assert!(edition.main_story.angle().is_none());
        assert!(edition.announcements.is_empty());
    }

    #[test]
    fn test_blank_subtitle_is_treated_as_missing() {
        let json = r#"{"title": "T", "subtitle": "  ", "main_story": {"headline": "H", "angle": "", "body": "B"}}"#;
        let edition = Edition::from_json(json).unwrap();
        assert!(edition.subtitle().is_none());
        assert!(edition.main_story.angle().is_none());
    }

    #[test]
    fn test_missing_main_story_is_an_error() {
        assert!(Edition::from_json(r#"{"title": "T"}"#).is_err());
    }

    #[test]
    fn test_rendered_line_from_spans_concatenates_content() {
        let line = RenderedLine::from_spans(
            LineType::Paragraph,
            vec![InlineSpan::plain("Hello "), InlineSpan::plain("world")],
        );
        assert_eq!(line.content(), "Hello world");
        assert_eq!(line.spans().map(<[InlineSpan]>::len), Some(2));
    }

    #[test]
    fn test_inline_style_from_segment_kind() {
        let style = InlineStyle::from(SegmentKind::BoldItalic);
        assert!(style.strong && style.emphasis);
        assert_eq!(InlineStyle::from(SegmentKind::PlainText), InlineStyle::default());
    }
}
