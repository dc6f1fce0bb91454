//! Grid layout for listing cards
//!
//! Provides:
//! - Configurable columns × rows grid
//! - Row-major ordering (reading order)
//! - Navigation helpers (up/down/left/right, tab)
//! - Pagination

use std::ops::Range;

/// Grid layout configuration
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    /// Number of columns (default: 2)
    pub columns: u16,
    /// Number of visible rows (default: 2)
    pub visible_rows: u16,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 2,
            visible_rows: 2,
        }
    }
}

impl GridLayout {
    /// Create a new grid layout
    pub fn new(columns: u16, visible_rows: u16) -> Self {
        Self {
            columns: columns.clamp(1, 6),
            visible_rows: visible_rows.clamp(1, 6),
        }
    }

    /// Cards per page (columns × rows)
    pub fn page_size(&self) -> usize {
        (self.columns as usize) * (self.visible_rows as usize)
    }

    /// Range of listings on the page containing `selected`
    pub fn visible_range(&self, selected: usize, total: usize) -> Range<usize> {
        if total == 0 {
            return 0..0;
        }

        let page_size = self.page_size();
        let start = (selected / page_size) * page_size;
        let end = (start + page_size).min(total);
        start..end
    }

    /// Convert an index within the page to (row, col)
    /// ```text
    /// Index:  0 1
    ///         2 3
    /// ```
    pub fn index_to_position(&self, index: usize) -> (u16, u16) {
        let cols = self.columns as usize;
        ((index / cols) as u16, (index % cols) as u16)
    }

    pub fn move_up(&self, current: usize) -> usize {
        current.checked_sub(self.columns as usize).unwrap_or(current)
    }

    pub fn move_down(&self, current: usize, total: usize) -> usize {
        let target = current + self.columns as usize;
        if target < total {
            target
        } else {
            current
        }
    }

    pub fn move_left(&self, current: usize) -> usize {
        current.saturating_sub(1)
    }

    pub fn move_right(&self, current: usize, total: usize) -> usize {
        if current + 1 < total {
            current + 1
        } else {
            current
        }
    }

    /// Tab navigation (next with wrap)
    pub fn tab_next(&self, current: usize, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            (current + 1) % total
        }
    }

    /// Shift+Tab navigation (previous with wrap)
    pub fn tab_prev(&self, current: usize, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            (current + total - 1) % total
        }
    }

    /// (current page, total pages), both 1-based
    pub fn page_of(&self, selected: usize, total: usize) -> (usize, usize) {
        let page_size = self.page_size();
        let pages = total.div_ceil(page_size).max(1);
        (selected / page_size + 1, pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size() {
        assert_eq!(GridLayout::new(2, 2).page_size(), 4);
        // Clamped
        assert_eq!(GridLayout::new(0, 100).page_size(), 6);
    }

    #[test]
    fn test_visible_range() {
        let layout = GridLayout::new(2, 2);
        assert_eq!(layout.visible_range(0, 10), 0..4);
        assert_eq!(layout.visible_range(3, 10), 0..4);
        assert_eq!(layout.visible_range(4, 10), 4..8);
        assert_eq!(layout.visible_range(9, 10), 8..10);
        assert_eq!(layout.visible_range(0, 0), 0..0);
    }

    #[test]
    fn test_index_to_position() {
        let layout = GridLayout::new(2, 2);
        assert_eq!(layout.index_to_position(0), (0, 0));
        assert_eq!(layout.index_to_position(1), (0, 1));
        assert_eq!(layout.index_to_position(2), (1, 0));
        assert_eq!(layout.index_to_position(3), (1, 1));
    }

    #[test]
    fn test_navigation() {
        let layout = GridLayout::new(2, 2);
        let total = 5;

        assert_eq!(layout.move_up(3), 1);
        assert_eq!(layout.move_up(1), 1);
        assert_eq!(layout.move_down(1, total), 3);
        assert_eq!(layout.move_down(3, total), 3);
        assert_eq!(layout.move_left(0), 0);
        assert_eq!(layout.move_right(3, total), 4);
        assert_eq!(layout.move_right(4, total), 4);
    }

    #[test]
    fn test_tab_wrap() {
        let layout = GridLayout::new(2, 2);
        assert_eq!(layout.tab_next(4, 5), 0);
        assert_eq!(layout.tab_prev(0, 5), 4);
        assert_eq!(layout.tab_next(0, 0), 0);
    }

    #[test]
    fn test_page_of() {
        let layout = GridLayout::new(2, 2);
        assert_eq!(layout.page_of(0, 0), (1, 1));
        assert_eq!(layout.page_of(5, 9), (2, 3));
    }
}
