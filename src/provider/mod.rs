//! Content providers: where editions come from.
//!
//! - [`HttpSource`]: the edition API (`GET /api/edition?region_id=..&date=..`)
//! - [`FileSource`]: a local edition JSON file
//!
//! Every failure is classified into one of three kinds the UI cares about
//! (see [`FailureKind`]); the error itself keeps the detail for logs.

mod file;
mod http;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::edition::Edition;

pub use file::FileSource;
pub use http::{DEFAULT_TIMEOUT, HttpSource, classify_status, edition_url};

/// A source of editions keyed by region and date.
pub trait EditionSource: Send + Sync {
    /// Fetch the edition for `region_id` on `date`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the edition is missing, the request is
    /// rejected, or the transport or decoding fails.
    fn fetch(&self, region_id: &str, date: NaiveDate) -> Result<Edition, FetchError>;

    /// Short human description, shown in the status bar.
    fn describe(&self) -> String;

    /// Local file backing this source, if any (for change watching).
    fn watch_path(&self) -> Option<&Path> {
        None
    }
}

/// The three outcomes a reader distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No edition for that region and date
    NotFound,
    /// Malformed parameters
    BadRequest,
    /// Anything else
    RequestFailed,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Edition not found")]
    NotFound,

    #[error("Bad request")]
    BadRequest,

    #[error("Request failed with HTTP status {status}")]
    RequestFailed { status: u16 },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid edition document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to start fetch: {0}")]
    Worker(#[source] std::io::Error),
}

impl FetchError {
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound => FailureKind::NotFound,
            Self::BadRequest => FailureKind::BadRequest,
            Self::RequestFailed { .. }
            | Self::Transport(_)
            | Self::Decode(_)
            | Self::Io { .. }
            | Self::InvalidBaseUrl { .. }
            | Self::Worker(_) => FailureKind::RequestFailed,
        }
    }

    /// The short classified message: "Edition not found", "Bad request" or
    /// "Request failed".
    pub const fn user_message(&self) -> &'static str {
        match self.kind() {
            FailureKind::NotFound => "Edition not found",
            FailureKind::BadRequest => "Bad request",
            FailureKind::RequestFailed => "Request failed",
        }
    }
}
