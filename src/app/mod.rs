//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! Fetches are the only slow side effect. `update` queues them on the model
//! and the event loop runs each on its own thread.

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{FetchRequest, LoadState, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::dates::today;
use crate::provider::EditionSource;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    source: Arc<dyn EditionSource>,
    region_index: usize,
    date: NaiveDate,
    watch_enabled: bool,
    max_page_width: Option<u16>,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a reader over `source`, starting at the first region and today.
    pub fn new(source: Arc<dyn EditionSource>) -> Self {
        Self {
            source,
            region_index: 0,
            date: today(),
            watch_enabled: false,
            max_page_width: None,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Start on the region at `index` in [`crate::regions::REGIONS`].
    pub const fn with_region_index(mut self, index: usize) -> Self {
        self.region_index = index;
        self
    }

    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Enable or disable reloading when the edition file changes.
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Cap the page width in columns.
    pub const fn with_max_page_width(mut self, width: Option<u16>) -> Self {
        self.max_page_width = width;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}
