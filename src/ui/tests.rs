use super::*;
use crate::app::{Message, Model, update};
use crate::edition::{Announcement, Edition, MainStory};
use crate::provider::FetchError;
use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    Terminal::new(backend).unwrap()
}

fn loading_model() -> Model {
    let mut model = Model::new(0, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), (80, 24));
    model.source_label = "news.example.com".to_string();
    model
}

fn sample_edition() -> Edition {
    Edition {
        region_id: "7".to_string(),
        edition_date: "2026-10-18".to_string(),
        title: "The Valley Courier".to_string(),
        subtitle: None,
        announcements: vec![Announcement {
            title: "Library hours".to_string(),
            summary: "Open *late* on Thursdays.".to_string(),
        }],
        main_story: MainStory {
            headline: "Harvest festival returns".to_string(),
            angle: Some("Three days of music".to_string()),
            body: "The festival opens **Friday** at noon.".to_string(),
        },
    }
}

fn finish(model: Model, result: Result<Edition, FetchError>) -> Model {
    let request = model.latest_request();
    update(model, Message::EditionLoaded { request, result })
}

fn render_to_string(model: &Model) -> String {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_controls_bar_shows_region_and_date() {
    let model = finish(loading_model(), Ok(sample_edition()));
    let screen = render_to_string(&model);
    let first_row = screen.lines().next().unwrap();
    assert!(first_row.contains("BROADSHEET"));
    assert!(first_row.contains("Region: Region 7"));
    assert!(first_row.contains("Date: 2026-10-18"));
    assert!(!first_row.contains("loading"));
}

#[test]
fn test_loading_state_shows_spinner_and_message() {
    let model = loading_model();
    let screen = render_to_string(&model);
    assert!(screen.lines().next().unwrap().contains("loading"));
    assert!(screen.contains("Loading edition..."));
}

#[test]
fn test_loaded_page_shows_masthead_and_story() {
    let model = finish(loading_model(), Ok(sample_edition()));
    let screen = render_to_string(&model);
    assert!(screen.contains("The Valley Courier"));
    assert!(screen.contains("REGION 7 • 2026-10-18"));
    assert!(screen.contains("Harvest festival returns"));
    assert!(screen.contains("The festival opens Friday at noon."));
    assert!(screen.contains("ANNOUNCEMENTS"));
    assert!(!screen.contains("**"));
}

#[test]
fn test_status_bar_shows_source_and_position() {
    let model = finish(loading_model(), Ok(sample_edition()));
    let screen = render_to_string(&model);
    let last_row = screen.lines().last().unwrap();
    assert!(last_row.contains("news.example.com"));
    assert!(last_row.contains("Line 1/"));
    assert!(last_row.contains("?:help"));
}

#[test]
fn test_failed_fetch_shows_alert() {
    let model = finish(loading_model(), Err(FetchError::NotFound));
    let screen = render_to_string(&model);
    assert!(screen.contains("Edition not found"));
    assert!(screen.contains("No published edition for this region/date."));
    assert!(!screen.contains("Loading edition..."));
}

#[test]
fn test_failed_fetch_alert_keeps_detail() {
    let model = finish(loading_model(), Err(FetchError::RequestFailed { status: 503 }));
    let screen = render_to_string(&model);
    assert!(screen.contains("Request failed"));
    assert!(screen.contains("HTTP status 503"));
}

#[test]
fn test_help_overlay_lists_keys() {
    let model = finish(loading_model(), Ok(sample_edition()));
    let model = update(model, Message::ToggleHelp);
    let screen = render_to_string(&model);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Next region"));
    assert!(screen.contains("Previous day"));
}

#[test]
fn test_date_prompt_shows_typed_text() {
    let model = finish(loading_model(), Ok(sample_edition()));
    let model = update(model, Message::StartDateInput);
    let model = update(model, Message::DateInput("2026-10".to_string()));
    let screen = render_to_string(&model);
    assert!(screen.contains("Go to date"));
    assert!(screen.contains("Date: 2026-10_"));
}

#[test]
fn test_toast_takes_last_page_row() {
    let model = finish(loading_model(), Ok(sample_edition()));
    let model = update(model, Message::Reload);
    let screen = render_to_string(&model);
    let rows: Vec<&str> = screen.lines().collect();
    assert!(rows[rows.len() - 2].contains("[info] Reloading"));
}

#[test]
fn test_page_is_centered_and_capped() {
    assert_eq!(page_width(80, None), 76);
    assert_eq!(page_width(200, None), PAGE_MAX_WIDTH);
    assert_eq!(page_width(200, Some(60)), 60);
    assert_eq!(page_width(200, Some(0)), PAGE_MAX_WIDTH);
    assert_eq!(page_width(3, None), 1);

    let column = page_column(Rect::new(0, 1, 200, 20), 88);
    assert_eq!(column, Rect::new(56, 1, 88, 20));
}

#[test]
fn test_page_height_leaves_room_for_bars() {
    assert_eq!(page_height(24), 22);
    assert_eq!(page_height(1), 1);
}

#[test]
fn test_centered_popup_rect_fits_area() {
    let area = Rect::new(0, 0, 30, 10);
    let popup = centered_popup_rect(40, 7, area);
    assert_eq!(popup, Rect::new(0, 1, 30, 7));
}
