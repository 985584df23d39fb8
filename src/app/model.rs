use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::dates::format_date;
use crate::edition::{Edition, EditionView, LayoutOptions};
use crate::provider::FetchError;
use crate::regions::{REGIONS, Region};
use crate::ui::viewport::Viewport;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// What the page area currently shows.
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(EditionView),
    Failed(FetchError),
}

/// A fetch the effect layer should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: u64,
    pub region_id: String,
    pub date: NaiveDate,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// Index into [`REGIONS`]
    pub region_index: usize,
    /// Edition date being shown or fetched
    pub date: NaiveDate,
    pub load_state: LoadState,
    /// Scroll position over the laid-out page
    pub viewport: Viewport,
    /// Full terminal width, the page is centered inside it
    pub terminal_width: u16,
    /// Optional cap on the page width (`--width`)
    pub max_page_width: Option<u16>,
    /// Where editions come from, shown in the status bar
    pub source_label: String,
    /// Whether a local edition file is being watched
    pub watch_enabled: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    pub help_visible: bool,
    /// Text typed into the date prompt, `None` when the prompt is closed
    pub date_input: Option<String>,
    pub should_quit: bool,
    spinner_frame: usize,
    latest_request: u64,
    pending_fetch: Option<FetchRequest>,
    toast: Option<Toast>,
}

impl Model {
    /// Create a model for `region_index` on `date` and queue its first fetch.
    pub fn new(region_index: usize, date: NaiveDate, terminal_size: (u16, u16)) -> Self {
        let mut model = Self {
            region_index: region_index.min(REGIONS.len().saturating_sub(1)),
            date,
            terminal_width: terminal_size.0,
            ..Self::default()
        };
        model.viewport = Viewport::new(crate::ui::page_height(terminal_size.1), 0);
        model.request_fetch(true);
        model
    }

    pub fn region(&self) -> &'static Region {
        &REGIONS[self.region_index.min(REGIONS.len() - 1)]
    }

    /// Width the edition is laid out at.
    pub fn page_width(&self) -> u16 {
        crate::ui::page_width(self.terminal_width, self.max_page_width)
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            width: self.page_width(),
            region_label: self.region().label.clone(),
            date: format_date(self.date),
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    pub const fn edition_view(&self) -> Option<&EditionView> {
        match &self.load_state {
            LoadState::Loaded(view) => Some(view),
            _ => None,
        }
    }

    pub const fn fetch_error(&self) -> Option<&FetchError> {
        match &self.load_state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Id of the most recent fetch; results tagged with any other id are stale.
    pub const fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Hand the queued fetch (if any) to the caller.
    pub fn take_fetch_request(&mut self) -> Option<FetchRequest> {
        self.pending_fetch.take()
    }

    /// Queue a fetch for the current region and date. Any earlier request
    /// becomes stale.
    pub(super) fn request_fetch(&mut self, reset_scroll: bool) {
        self.latest_request += 1;
        let request = FetchRequest {
            id: self.latest_request,
            region_id: self.region().id.clone(),
            date: self.date,
        };
        debug!(
            request = request.id,
            region_id = %request.region_id,
            date = %request.date,
            "queued edition fetch"
        );
        self.pending_fetch = Some(request);
        self.load_state = LoadState::Loading;
        if reset_scroll {
            self.viewport.go_to_top();
        }
    }

    /// Apply a finished fetch. Returns false when the result was stale and
    /// dropped.
    pub(super) fn apply_fetch_result(
        &mut self,
        request: u64,
        result: Result<Edition, FetchError>,
    ) -> bool {
        if request != self.latest_request {
            debug!(
                request,
                latest = self.latest_request,
                "dropping stale edition result"
            );
            return false;
        }
        match result {
            Ok(edition) => {
                let view = EditionView::build(edition, self.layout_options());
                self.viewport.set_total_lines(view.line_count());
                self.load_state = LoadState::Loaded(view);
            }
            Err(err) => {
                warn!(
                    request,
                    region_id = %self.region().id,
                    date = %self.date,
                    error = %err,
                    kind = ?err.kind(),
                    "edition fetch failed"
                );
                self.viewport.set_total_lines(0);
                self.load_state = LoadState::Failed(err);
            }
        }
        true
    }

    /// Track a new terminal size and re-wrap the page to fit.
    pub(super) fn resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        let page_width = self.page_width();
        self.viewport.set_height(crate::ui::page_height(height));
        if let LoadState::Loaded(view) = &mut self.load_state {
            view.relayout(page_width);
            self.viewport.set_total_lines(view.line_count());
        }
    }

    pub const fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub const fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self {
            region_index: 0,
            date: NaiveDate::default(),
            load_state: LoadState::default(),
            viewport: Viewport::new(22, 0),
            terminal_width: 80,
            max_page_width: None,
            source_label: String::new(),
            watch_enabled: false,
            config_global_path: None,
            config_local_path: None,
            help_visible: false,
            date_input: None,
            should_quit: false,
            spinner_frame: 0,
            latest_request: 0,
            pending_fetch: None,
            toast: None,
        }
    }
}
