//! Theming and color definitions.
//!
//! Uses ANSI and 256-color indexes that read on both light and dark
//! terminals; the background comes from [`super::theme`].

use ratatui::style::{Color, Modifier, Style};

use crate::edition::{InlineStyle, LineType};

use super::theme::is_light_background;

/// Get the style for a given line type.
pub fn style_for_line_type(line_type: &LineType) -> Style {
    let light_bg = is_light_background();
    let accent = if light_bg {
        Color::Indexed(88)
    } else {
        Color::Indexed(174)
    };
    let muted = if light_bg {
        Color::Indexed(241)
    } else {
        Color::Indexed(245)
    };

    match line_type {
        // Masthead
        LineType::Title => Style::default().add_modifier(Modifier::BOLD),
        LineType::Subtitle => Style::default().fg(muted).add_modifier(Modifier::ITALIC),
        LineType::Dateline => Style::default().fg(muted),
        LineType::DoubleRule => Style::default().fg(muted),
        LineType::Rule => Style::default().fg(muted).add_modifier(Modifier::DIM),

        // Main story
        LineType::Headline => Style::default().add_modifier(Modifier::BOLD),
        LineType::Angle => Style::default().fg(muted).add_modifier(Modifier::ITALIC),

        // Announcements
        LineType::SectionHeading => Style::default()
            .fg(accent)
            .add_modifier(Modifier::BOLD),
        LineType::AnnouncementTitle => Style::default().add_modifier(Modifier::BOLD),
        LineType::BlockQuote => Style::default()
            .fg(if light_bg {
                Color::Indexed(24)
            } else {
                Color::Blue
            })
            .add_modifier(Modifier::ITALIC),
        LineType::Notice => Style::default().fg(muted).add_modifier(Modifier::ITALIC),

        LineType::ListItem(_) | LineType::Paragraph | LineType::Empty => Style::default(),
    }
}

/// Get the style for an inline span, merged with a base line style.
pub fn style_for_inline(base: Style, inline: InlineStyle) -> Style {
    let mut style = base;

    if inline.emphasis {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if inline.strong {
        style = style.add_modifier(Modifier::BOLD);
    }
    if inline.strikethrough {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    if inline.link {
        style = style.add_modifier(Modifier::UNDERLINED).fg(if is_light_background() {
            Color::Blue
        } else {
            Color::LightBlue
        });
    }
    if inline.code {
        style = style.fg(if is_light_background() {
            Color::Indexed(88)
        } else {
            Color::Red
        });
    }
    if inline.drop_cap {
        style = style
            .fg(if is_light_background() {
                Color::Indexed(88)
            } else {
                Color::Indexed(174)
            })
            .add_modifier(Modifier::BOLD);
    }

    style
}

/// Background bars: the controls bar and the status bar.
pub fn bar_style() -> Style {
    if is_light_background() {
        Style::default().bg(Color::Indexed(252)).fg(Color::Indexed(235))
    } else {
        Style::default().bg(Color::Indexed(236)).fg(Color::Indexed(252))
    }
}

/// Error alert border and title.
pub fn alert_style() -> Style {
    Style::default()
        .fg(if is_light_background() {
            Color::Indexed(124)
        } else {
            Color::LightRed
        })
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_and_title_are_bold() {
        for line_type in [LineType::Title, LineType::Headline, LineType::AnnouncementTitle] {
            let style = style_for_line_type(&line_type);
            assert!(style.add_modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn test_angle_and_notice_are_italic() {
        assert!(
            style_for_line_type(&LineType::Angle)
                .add_modifier
                .contains(Modifier::ITALIC)
        );
        assert!(
            style_for_line_type(&LineType::Notice)
                .add_modifier
                .contains(Modifier::ITALIC)
        );
    }

    #[test]
    fn test_bold_italic_span_gets_both_modifiers() {
        let inline = InlineStyle {
            strong: true,
            emphasis: true,
            ..InlineStyle::default()
        };
        let style = style_for_inline(Style::default(), inline);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_drop_cap_is_bold_and_colored() {
        let inline = InlineStyle {
            drop_cap: true,
            ..InlineStyle::default()
        };
        let style = style_for_inline(Style::default(), inline);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.fg.is_some());
    }

    #[test]
    fn test_plain_span_keeps_base_style() {
        let base = style_for_line_type(&LineType::Angle);
        assert_eq!(style_for_inline(base, InlineStyle::default()), base);
    }
}
