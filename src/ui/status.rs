use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};
use crate::dates::format_date;

use super::style::bar_style;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_controls_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut spans = vec![
        Span::styled(" BROADSHEET ", bold),
        Span::raw("│ Region: "),
        Span::styled(model.region().label.clone(), bold),
        Span::raw(" │ Date: "),
        Span::styled(format_date(model.date), bold),
    ];
    if model.is_loading() {
        let frame_idx = model.spinner_frame() % SPINNER.len();
        spans.push(Span::raw(format!(" │ {} loading", SPINNER[frame_idx])));
    }
    let bar = Paragraph::new(Line::from(spans)).style(bar_style());
    frame.render_widget(bar, area);
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let position = model.edition_view().map_or_else(String::new, |view| {
        format!(
            "  [{}%]  Line {}/{}",
            model.viewport.scroll_percent(),
            model.viewport.offset() + 1,
            view.line_count()
        )
    });
    let watch_indicator = if model.watch_enabled {
        " [watching]"
    } else {
        ""
    };

    let status = format!(
        " {}{}{}  ?:help",
        model.source_label, position, watch_indicator
    );
    frame.render_widget(Paragraph::new(status).style(bar_style()), area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
