use tracing::debug;

use crate::app::{Model, ToastLevel};
use crate::dates::{parse_date, shift_days, today};
use crate::edition::Edition;
use crate::provider::FetchError;
use crate::regions::{next_index, prev_index};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug)]
pub enum Message {
    // Navigation
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Scroll up half page
    HalfPageUp,
    /// Scroll down half page
    HalfPageDown,
    /// Go to top of the page
    GoToTop,
    /// Go to bottom of the page
    GoToBottom,

    // Edition selection
    /// Select the next region (wraps)
    NextRegion,
    /// Select the previous region (wraps)
    PrevRegion,
    /// Move one day forward
    NextDay,
    /// Move one day back
    PrevDay,
    /// Jump to today's edition
    Today,
    /// Open the date prompt
    StartDateInput,
    /// Update the date prompt text
    DateInput(String),
    /// Apply the date typed into the prompt
    SubmitDate,
    /// Close the date prompt without changing the date
    CancelDateInput,

    // Loading
    /// Fetch the current edition again
    Reload,
    /// A fetch finished
    EditionLoaded {
        request: u64,
        result: Result<Edition, FetchError>,
    },
    /// The watched edition file changed on disk
    FileChanged,

    // Overlays
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here. Fetches are
/// only queued on the model; the event loop starts them.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Navigation
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::HalfPageUp => model.viewport.half_page_up(),
        Message::HalfPageDown => model.viewport.half_page_down(),
        Message::GoToTop => model.viewport.go_to_top(),
        Message::GoToBottom => model.viewport.go_to_bottom(),

        // Edition selection
        Message::NextRegion => {
            model.region_index = next_index(model.region_index);
            model.request_fetch(true);
        }
        Message::PrevRegion => {
            model.region_index = prev_index(model.region_index);
            model.request_fetch(true);
        }
        Message::NextDay => {
            model.date = shift_days(model.date, 1);
            model.request_fetch(true);
        }
        Message::PrevDay => {
            model.date = shift_days(model.date, -1);
            model.request_fetch(true);
        }
        Message::Today => {
            model.date = today();
            model.request_fetch(true);
        }
        Message::StartDateInput => {
            model.help_visible = false;
            model.date_input = Some(String::new());
        }
        Message::DateInput(text) => {
            model.date_input = Some(text);
        }
        Message::SubmitDate => submit_date(&mut model),
        Message::CancelDateInput => {
            model.date_input = None;
        }

        // Loading
        Message::Reload => {
            model.request_fetch(false);
            model.show_toast(ToastLevel::Info, "Reloading");
        }
        Message::FileChanged => {
            debug!("edition file changed, reloading");
            model.request_fetch(false);
        }
        Message::EditionLoaded { request, result } => {
            model.apply_fetch_result(request, result);
        }

        // Overlays
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // Window
        Message::Resize(width, height) => model.resize(width, height),
        Message::Redraw => {}

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }

    model
}

fn submit_date(model: &mut Model) {
    let Some(input) = model.date_input.take() else {
        return;
    };
    if input.trim().is_empty() {
        return;
    }
    match parse_date(&input) {
        Ok(date) if date == model.date => {}
        Ok(date) => {
            model.date = date;
            model.request_fetch(true);
        }
        Err(err) => model.show_toast(ToastLevel::Warning, err.to_string()),
    }
}
