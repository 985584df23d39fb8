//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Colors for page lines and chrome
//! - [`theme`]: Light/dark background detection
//!
//! The screen is a controls bar on top, the page centered below it, and a
//! status bar at the bottom. A toast, when active, borrows the last page row.

pub mod style;
pub mod theme;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use overlays::centered_popup_rect;
pub use render::{page_column, render};

/// Widest page laid out unless `--width` says otherwise.
pub const PAGE_MAX_WIDTH: u16 = 88;
/// Columns kept free on each side of the page.
pub const PAGE_MARGIN: u16 = 2;
/// Rows used by the controls bar and the status bar.
pub const CHROME_ROWS: u16 = 2;

/// Page width for a terminal `total_width` columns wide, capped at
/// `max_width` (or [`PAGE_MAX_WIDTH`]).
pub fn page_width(total_width: u16, max_width: Option<u16>) -> u16 {
    let cap = max_width.filter(|w| *w > 0).unwrap_or(PAGE_MAX_WIDTH);
    total_width
        .saturating_sub(PAGE_MARGIN * 2)
        .min(cap)
        .max(1)
}

/// Rows available to the page in a terminal `total_height` rows tall.
pub fn page_height(total_height: u16) -> u16 {
    total_height.saturating_sub(CHROME_ROWS).max(1)
}

#[cfg(test)]
mod tests;
