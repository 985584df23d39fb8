use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).clamp(20, 64);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let lines = vec![
        Line::styled("Reading", section_style),
        Line::raw("  j/k or Up/Down      Scroll"),
        Line::raw("  Space/PageDown      Page down"),
        Line::raw("  b/PageUp            Page up"),
        Line::raw("  Ctrl-d / Ctrl-u     Half page"),
        Line::raw("  g / G               Top / bottom"),
        Line::raw(""),
        Line::styled("Editions", section_style),
        Line::raw("  ] / Right           Next region"),
        Line::raw("  [ / Left            Previous region"),
        Line::raw("  + or .              Next day"),
        Line::raw("  - or ,              Previous day"),
        Line::raw("  t                   Today"),
        Line::raw("  d                   Enter a date"),
        Line::raw("  r                   Reload"),
        Line::raw(""),
        Line::styled("Other", section_style),
        Line::raw("  ? / F1              Toggle help"),
        Line::raw("  q / Ctrl-c          Quit"),
        Line::raw(""),
        Line::styled("Config", section_style),
        Line::raw(format!("  Global: {global_cfg}")),
        Line::raw(format!("  Local override: {local_cfg}")),
        Line::raw(""),
        Line::styled("Any key closes", dim_style),
    ];

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn render_date_prompt(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(input) = model.date_input.as_deref() else {
        return;
    };
    let popup = centered_popup_rect(40, 7, area);
    let lines = vec![
        Line::from(vec![
            Span::raw("Date: "),
            Span::styled(
                format!("{input}_"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::styled(
            "YYYY-MM-DD  Enter apply │ Esc cancel",
            Style::default().fg(Color::Indexed(245)),
        ),
    ];
    let block = Block::default()
        .title("Go to date")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
