//! Lay out an edition as a newspaper page of styled lines.

use crate::emphasis::parse_emphasis;

use super::markdown::render_markdown;
use super::types::{Edition, InlineSpan, InlineStyle, LineType, RenderedLine};
use super::wrap::{center, wrap_spans};

/// Inputs that shape the page besides the edition itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Page width in terminal columns
    pub width: u16,
    /// Region label shown in the dateline, e.g. "Region 7"
    pub region_label: String,
    /// Date shown in the dateline, `YYYY-MM-DD`
    pub date: String,
}

/// An edition laid out into rendered lines at a fixed width.
#[derive(Debug, Clone)]
pub struct EditionView {
    edition: Edition,
    options: LayoutOptions,
    lines: Vec<RenderedLine>,
}

impl EditionView {
    pub fn build(edition: Edition, options: LayoutOptions) -> Self {
        let lines = layout_edition(&edition, &options);
        Self {
            edition,
            options,
            lines,
        }
    }

    /// Re-wrap for a new page width. No-op when the width is unchanged.
    pub fn relayout(&mut self, width: u16) {
        if width == self.options.width {
            return;
        }
        self.options.width = width;
        self.lines = layout_edition(&self.edition, &self.options);
    }

    pub const fn edition(&self) -> &Edition {
        &self.edition
    }

    pub const fn width(&self) -> u16 {
        self.options.width
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines from `offset` to `offset + count`, clamped to the page.
    pub fn visible_lines(&self, offset: usize, count: usize) -> &[RenderedLine] {
        let start = offset.min(self.lines.len());
        let end = offset.saturating_add(count).min(self.lines.len());
        &self.lines[start..end]
    }

    /// The page as plain text, one rendered line per output line.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line.content().trim_end());
            out.push('\n');
        }
        out
    }
}

/// Split a story body into paragraphs.
///
/// Every non-blank line is its own paragraph; surrounding whitespace is
/// trimmed.
pub fn story_paragraphs(body: &str) -> Vec<&str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Run `text` through the emphasis parser, layering each run's style over `base`.
pub fn emphasis_spans(text: &str, base: InlineStyle) -> Vec<InlineSpan> {
    parse_emphasis(text)
        .into_iter()
        .map(|segment| {
            let kind = InlineStyle::from(segment.kind());
            let style = InlineStyle {
                strong: base.strong || kind.strong,
                emphasis: base.emphasis || kind.emphasis,
                ..base
            };
            InlineSpan::new(segment.text().to_string(), style)
        })
        .collect()
}

fn layout_edition(edition: &Edition, options: &LayoutOptions) -> Vec<RenderedLine> {
    let width = usize::from(options.width.max(1));
    let mut lines = Vec::new();

    push_masthead(&mut lines, edition, options, width);
    push_main_story(&mut lines, edition, width);
    lines.push(RenderedLine::empty());
    push_announcements(&mut lines, edition, width);

    lines
}

fn push_masthead(
    lines: &mut Vec<RenderedLine>,
    edition: &Edition,
    options: &LayoutOptions,
    width: usize,
) {
    push_centered(lines, &[InlineSpan::plain(edition.title.trim())], width, LineType::Title);
    if let Some(subtitle) = edition.subtitle() {
        push_centered(lines, &[InlineSpan::plain(subtitle.trim())], width, LineType::Subtitle);
    }
    let dateline = format!("{} • {}", options.region_label, options.date).to_uppercase();
    push_centered(lines, &[InlineSpan::plain(dateline)], width, LineType::Dateline);
    lines.push(RenderedLine::new("═".repeat(width), LineType::DoubleRule));
    lines.push(RenderedLine::empty());
}

fn push_main_story(lines: &mut Vec<RenderedLine>, edition: &Edition, width: usize) {
    let story = &edition.main_story;
    push_wrapped(
        lines,
        &[InlineSpan::plain(story.headline.trim())],
        width,
        "",
        "",
        LineType::Headline,
    );
    lines.push(RenderedLine::empty());

    if let Some(angle) = story.angle() {
        let italic = InlineStyle {
            emphasis: true,
            ..InlineStyle::default()
        };
        push_wrapped(
            lines,
            &[InlineSpan::new(angle.trim().to_string(), italic)],
            width,
            "│ ",
            "│ ",
            LineType::Angle,
        );
        lines.push(RenderedLine::empty());
    }

    for (index, paragraph) in story_paragraphs(&story.body).into_iter().enumerate() {
        if index > 0 {
            lines.push(RenderedLine::empty());
        }
        let mut spans = emphasis_spans(paragraph, InlineStyle::default());
        if index == 0 {
            spans = with_drop_cap(spans);
        }
        push_wrapped(lines, &spans, width, "", "", LineType::Paragraph);
    }
}

fn push_announcements(lines: &mut Vec<RenderedLine>, edition: &Edition, width: usize) {
    lines.push(RenderedLine::new(
        "ANNOUNCEMENTS".to_string(),
        LineType::SectionHeading,
    ));
    lines.push(RenderedLine::new("─".repeat(width), LineType::Rule));

    if edition.announcements.is_empty() {
        let italic = InlineStyle {
            emphasis: true,
            ..InlineStyle::default()
        };
        lines.push(RenderedLine::from_spans(
            LineType::Notice,
            vec![InlineSpan::new("No announcements available.".to_string(), italic)],
        ));
        return;
    }

    let bold = InlineStyle {
        strong: true,
        ..InlineStyle::default()
    };
    let last = edition.announcements.len() - 1;
    for (index, announcement) in edition.announcements.iter().enumerate() {
        lines.push(RenderedLine::empty());
        push_wrapped(
            lines,
            &emphasis_spans(announcement.title.trim(), bold),
            width,
            "",
            "",
            LineType::AnnouncementTitle,
        );
        lines.extend(render_markdown(&announcement.summary, width));
        if index < last {
            lines.push(RenderedLine::empty());
            lines.push(RenderedLine::new("─".repeat(width), LineType::Rule));
        }
    }
}

/// Split the first visible character off into its own drop-cap span.
fn with_drop_cap(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len() + 1);
    let mut done = false;
    for span in spans {
        if done {
            out.push(span);
            continue;
        }
        let mut chars = span.text().chars();
        let Some(first) = chars.next() else {
            out.push(span);
            continue;
        };
        let rest = chars.as_str();
        let cap_style = InlineStyle {
            drop_cap: true,
            ..span.style()
        };
        out.push(InlineSpan::new(first.to_string(), cap_style));
        if !rest.is_empty() {
            out.push(InlineSpan::new(rest.to_string(), span.style()));
        }
        done = true;
    }
    out
}

fn push_wrapped(
    lines: &mut Vec<RenderedLine>,
    spans: &[InlineSpan],
    width: usize,
    prefix_first: &str,
    prefix_next: &str,
    line_type: LineType,
) {
    for line_spans in wrap_spans(spans, width, prefix_first, prefix_next) {
        lines.push(RenderedLine::from_spans(line_type, line_spans));
    }
}

fn push_centered(
    lines: &mut Vec<RenderedLine>,
    spans: &[InlineSpan],
    width: usize,
    line_type: LineType,
) {
    for line_spans in wrap_spans(spans, width, "", "") {
        lines.push(RenderedLine::from_spans(line_type, center(line_spans, width)));
    }
}
