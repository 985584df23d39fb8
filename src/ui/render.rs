use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::app::{LoadState, Model};
use crate::edition::RenderedLine;
use crate::provider::FetchError;

use super::style::{alert_style, style_for_inline, style_for_line_type};
use super::{overlays, status};

const NO_EDITION_MESSAGE: &str = "No published edition for this region/date.";

/// The column of `area` the page occupies: `page_width` wide, centered.
pub fn page_column(area: Rect, page_width: u16) -> Rect {
    let width = page_width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let [controls_area, page_outer, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    status::render_controls_bar(model, frame, controls_area);

    let toast_active = model.active_toast().is_some();
    let page_area = Rect {
        height: page_outer.height.saturating_sub(u16::from(toast_active)),
        ..page_outer
    };
    frame.render_widget(Clear, page_outer);
    match &model.load_state {
        LoadState::Loading => render_loading(frame, page_area),
        LoadState::Failed(err) => {
            render_alert(err, frame, page_column(page_area, model.page_width()));
        }
        LoadState::Loaded(view) => {
            let lines = view.visible_lines(model.viewport.offset(), page_area.height as usize);
            render_page_lines(lines, frame, page_column(page_area, model.page_width()));
        }
    }

    if toast_active {
        let toast_area = Rect {
            y: page_outer.y + page_outer.height.saturating_sub(1),
            height: 1,
            ..page_outer
        };
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    if model.date_input.is_some() {
        overlays::render_date_prompt(model, frame, area);
    } else if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_page_lines(lines: &[RenderedLine], frame: &mut Frame, area: Rect) {
    let content: Vec<Line> = lines.iter().map(to_line).collect();
    frame.render_widget(Paragraph::new(content), area);
}

fn to_line(line: &RenderedLine) -> Line<'static> {
    let line_style = style_for_line_type(line.line_type());
    match line.spans() {
        Some(spans) => Line::from(
            spans
                .iter()
                .map(|span| {
                    Span::styled(
                        span.text().to_string(),
                        style_for_inline(line_style, span.style()),
                    )
                })
                .collect::<Vec<_>>(),
        ),
        None => Line::styled(line.content().to_string(), line_style),
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let row = Rect {
        y: area.y + area.height / 3,
        height: 1,
        ..area
    };
    let text = Line::styled(
        "Loading edition...",
        Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
    )
    .centered();
    frame.render_widget(Paragraph::new(text), row);
}

fn render_alert(err: &FetchError, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::raw(NO_EDITION_MESSAGE)];
    let detail = err.to_string();
    if detail != err.user_message() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            detail,
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "[ ] region   - + day   d date   r retry",
        Style::default().add_modifier(Modifier::DIM),
    ));

    #[allow(clippy::cast_possible_truncation)]
    let height = (lines.len() as u16 + 4).min(area.height);
    let alert_area = Rect {
        y: area.y + u16::from(area.height > height),
        height,
        ..area
    };
    let block = Block::default()
        .title(Line::styled(format!(" {} ", err.user_message()), alert_style()))
        .borders(Borders::ALL)
        .border_style(alert_style())
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        alert_area,
    );
}
