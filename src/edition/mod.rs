//! Edition documents and their page layout.
//!
//! This module handles:
//! - The JSON edition document served by the edition API
//! - Laying an edition out as styled, wrapped lines for display
//! - Block-level markdown for announcement summaries (comrak)

mod layout;
mod markdown;
mod types;
pub mod wrap;

pub use layout::{EditionView, LayoutOptions, emphasis_spans, story_paragraphs};
pub use markdown::render_markdown;
pub use types::{
    Announcement, Edition, InlineSpan, InlineStyle, LineType, MainStory, RenderedLine,
};
