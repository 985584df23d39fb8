//! Scroll state over the laid-out page.

use std::ops::Range;

/// The visible window onto a page of `total_lines` lines.
///
/// ```
/// use broadsheet::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(20, 50);
/// vp.page_down();
/// assert_eq!(vp.visible_range(), 20..40);
/// vp.go_to_bottom();
/// assert_eq!(vp.scroll_percent(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// `height` is the number of rows available to the page.
    pub const fn new(height: u16, total_lines: usize) -> Self {
        Self {
            height,
            offset: 0,
            total_lines,
        }
    }

    /// First visible line.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Visible line indices, clamped to the page.
    pub fn visible_range(&self) -> Range<usize> {
        let end = self
            .offset
            .saturating_add(self.height as usize)
            .min(self.total_lines);
        self.offset.min(end)..end
    }

    /// How far down the page the view is, 0-100. A page that fits is 100.
    pub fn scroll_percent(&self) -> u8 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }
        let percent = self.offset.min(max_offset) * 100 / max_offset;
        u8::try_from(percent).unwrap_or(100)
    }

    pub const fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub const fn can_scroll_down(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn half_page_up(&mut self) {
        self.scroll_up(self.height as usize / 2);
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down(self.height as usize / 2);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Change the number of visible rows, keeping the offset valid.
    pub fn set_height(&mut self, height: u16) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the page length after a load or relayout, keeping the offset valid.
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(height: u16, total: usize, down: usize) -> Viewport {
        let mut vp = Viewport::new(height, total);
        vp.scroll_down(down);
        vp
    }

    #[test]
    fn test_starts_at_top_of_page() {
        let vp = Viewport::new(20, 120);
        assert_eq!(vp.offset(), 0);
        assert_eq!(vp.visible_range(), 0..20);
        assert!(!vp.can_scroll_up());
        assert!(vp.can_scroll_down());
    }

    #[test]
    fn test_scroll_down_stops_at_last_screen() {
        let vp = scrolled(20, 120, 500);
        assert_eq!(vp.offset(), 100);
        assert_eq!(vp.visible_range(), 100..120);
        assert!(!vp.can_scroll_down());
    }

    #[test]
    fn test_scroll_up_stops_at_top() {
        let mut vp = scrolled(20, 120, 7);
        vp.scroll_up(50);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_page_and_half_page_moves() {
        let mut vp = Viewport::new(20, 120);
        vp.page_down();
        assert_eq!(vp.offset(), 20);
        vp.half_page_down();
        assert_eq!(vp.offset(), 30);
        vp.half_page_up();
        vp.page_up();
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_top_and_bottom() {
        let mut vp = Viewport::new(20, 120);
        vp.go_to_bottom();
        assert_eq!(vp.offset(), 100);
        assert_eq!(vp.scroll_percent(), 100);
        vp.go_to_top();
        assert_eq!(vp.scroll_percent(), 0);
    }

    #[test]
    fn test_short_page_reports_full_percent() {
        assert_eq!(Viewport::new(20, 0).scroll_percent(), 100);
        assert_eq!(Viewport::new(20, 12).scroll_percent(), 100);
        assert_eq!(Viewport::new(20, 12).visible_range(), 0..12);
    }

    #[test]
    fn test_percent_midway() {
        assert_eq!(scrolled(20, 120, 50).scroll_percent(), 50);
    }

    #[test]
    fn test_taller_window_clamps_offset() {
        let mut vp = scrolled(20, 120, 90);
        vp.set_height(40);
        assert_eq!(vp.offset(), 80);
    }

    #[test]
    fn test_shorter_page_after_reload_clamps_offset() {
        let mut vp = scrolled(20, 120, 90);
        vp.set_total_lines(50);
        assert_eq!(vp.offset(), 30);
        vp.set_total_lines(0);
        assert_eq!(vp.offset(), 0);
        assert_eq!(vp.visible_range(), 0..0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scrolling_stays_in_bounds(
                total_lines in 0..5000usize,
                height in 1..80u16,
                down in 0..10000usize,
                up in 0..10000usize,
            ) {
                let mut vp = Viewport::new(height, total_lines);
                vp.scroll_down(down);
                prop_assert!(vp.offset() <= total_lines.saturating_sub(height as usize));
                vp.scroll_up(up);
                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= total_lines);
                prop_assert!(vp.scroll_percent() <= 100);
            }
        }
    }
}
