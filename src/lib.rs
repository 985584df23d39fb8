// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. edition::EditionView)
    clippy::module_name_repetitions
)]

//! # Broadsheet
//!
//! A terminal reader for daily regional newspaper editions.
//!
//! An edition is a JSON document (masthead, main story, announcements) served
//! per region and date by an edition API, or read from a local file. It is
//! laid out as a newspaper page:
//! - Inline `*italic*`, `**bold**` and `***bold italic***` emphasis in story
//!   text and announcement titles
//! - Markdown announcement summaries (paragraphs, lists, block quotes)
//! - A drop cap on the first story paragraph
//!
//! ## Architecture
//!
//! The reader uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`emphasis`]: Inline emphasis parser
//! - [`edition`]: Edition documents and page layout
//! - [`provider`]: Where editions come from (HTTP API or file)
//! - [`regions`]: The publishing regions
//! - [`dates`]: Edition date parsing and arithmetic
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags
//! - [`watcher`]: File watching

pub mod app;
pub mod config;
pub mod dates;
pub mod edition;
pub mod emphasis;
pub mod provider;
pub mod regions;
pub mod ui;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::edition::{Edition, EditionView, LayoutOptions};
    pub use crate::emphasis::{Segment, SegmentKind, parse_emphasis};
    pub use crate::provider::{EditionSource, FetchError, FileSource, HttpSource};
    pub use crate::ui::viewport::Viewport;
}
