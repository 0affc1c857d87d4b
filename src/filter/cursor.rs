//! Selection cursor over the visible window
//!
//! Moving inside the window only changes the highlighted slot. Moving past
//! either edge asks the window to shift by one, and the highlight stays on
//! the edge slot so it lands on the newly revealed item.

use super::window::{FilterWindow, Shift};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Previous,
}

/// What a navigation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Highlight moved within the current window
    Moved,
    /// Window slid by one and the highlight stayed on the edge slot
    Shifted,
    /// Already at the true first or last match, or nothing is visible
    Unchanged,
}

impl Navigation {
    pub fn changed(self) -> bool {
        !matches!(self, Navigation::Unchanged)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    selected: usize,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first slot. Called after every refilter.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Highlighted slot, or `None` when nothing is visible.
    pub fn selected(&self, window: &FilterWindow) -> Option<usize> {
        if window.is_empty() {
            None
        } else {
            Some(self.selected.min(window.len() - 1))
        }
    }

    pub fn navigate(&mut self, window: &mut FilterWindow, direction: NavDirection) -> Navigation {
        match direction {
            NavDirection::Next => self.next(window),
            NavDirection::Previous => self.previous(window),
        }
    }

    pub fn next(&mut self, window: &mut FilterWindow) -> Navigation {
        if window.is_empty() {
            return Navigation::Unchanged;
        }
        if self.selected + 1 < window.len() {
            self.selected += 1;
            return Navigation::Moved;
        }
        match window.shift_right(1) {
            Shift::Shifted { .. } => {
                self.selected = window.len() - 1;
                Navigation::Shifted
            }
            Shift::Unchanged => Navigation::Unchanged,
        }
    }

    pub fn previous(&mut self, window: &mut FilterWindow) -> Navigation {
        if window.is_empty() {
            return Navigation::Unchanged;
        }
        if self.selected > 0 {
            self.selected -= 1;
            return Navigation::Moved;
        }
        match window.shift_left(1) {
            Shift::Shifted { .. } => {
                self.selected = 0;
                Navigation::Shifted
            }
            Shift::Unchanged => Navigation::Unchanged,
        }
    }

    /// Text of the highlighted item, if any.
    pub fn commit<'w>(&self, window: &'w FilterWindow) -> Option<&'w str> {
        self.selected(window).and_then(|slot| window.item(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::matcher::CaseMode;
    use crate::items::ItemStore;
    use std::sync::Arc;

    fn setup(limit: usize) -> (FilterWindow, SelectionCursor) {
        let store = Arc::new(ItemStore::from_items([
            "apple", "banana", "grape", "kiwi", "mango", "pear",
        ]));
        (
            FilterWindow::new(store, limit, CaseMode::Sensitive),
            SelectionCursor::new(),
        )
    }

    #[test]
    fn test_next_moves_then_shifts() {
        let (mut window, mut cursor) = setup(3);
        assert_eq!(cursor.next(&mut window), Navigation::Moved);
        assert_eq!(cursor.next(&mut window), Navigation::Moved);
        assert_eq!(cursor.selected(&window), Some(2));

        assert_eq!(cursor.next(&mut window), Navigation::Shifted);
        assert_eq!(cursor.selected(&window), Some(2));
        assert_eq!(cursor.commit(&window), Some("kiwi"));
    }

    #[test]
    fn test_next_at_true_end_is_idempotent() {
        let (mut window, mut cursor) = setup(3);
        for _ in 0..5 {
            cursor.next(&mut window);
        }
        assert_eq!(cursor.commit(&window), Some("pear"));
        for _ in 0..3 {
            assert_eq!(cursor.next(&mut window), Navigation::Unchanged);
            assert_eq!(cursor.selected(&window), Some(2));
            assert_eq!(window.items().collect::<Vec<_>>(), vec!["kiwi", "mango", "pear"]);
        }
    }

    #[test]
    fn test_previous_pins_to_first_slot() {
        let (mut window, mut cursor) = setup(3);
        for _ in 0..3 {
            cursor.next(&mut window);
        }
        assert_eq!(cursor.previous(&mut window), Navigation::Moved);
        assert_eq!(cursor.previous(&mut window), Navigation::Moved);
        assert_eq!(cursor.selected(&window), Some(0));
        assert_eq!(cursor.commit(&window), Some("banana"));

        assert_eq!(cursor.previous(&mut window), Navigation::Shifted);
        assert_eq!(cursor.selected(&window), Some(0));
        assert_eq!(cursor.commit(&window), Some("apple"));
        assert_eq!(cursor.previous(&mut window), Navigation::Unchanged);
    }

    #[test]
    fn test_empty_window_has_no_selection() {
        let (mut window, mut cursor) = setup(3);
        window.refilter("xyz");
        cursor.reset();
        assert_eq!(cursor.selected(&window), None);
        assert_eq!(cursor.commit(&window), None);
        assert_eq!(cursor.navigate(&mut window, NavDirection::Next), Navigation::Unchanged);
        assert_eq!(
            cursor.navigate(&mut window, NavDirection::Previous),
            Navigation::Unchanged
        );
    }

    #[test]
    fn test_zero_limit_navigation_is_noop() {
        let (mut window, mut cursor) = setup(0);
        assert_eq!(cursor.next(&mut window), Navigation::Unchanged);
        assert_eq!(cursor.previous(&mut window), Navigation::Unchanged);
        assert_eq!(cursor.commit(&window), None);
    }

    #[test]
    fn test_single_match_window() {
        let (mut window, mut cursor) = setup(3);
        window.refilter("kiwi");
        cursor.reset();
        assert_eq!(cursor.next(&mut window), Navigation::Unchanged);
        assert_eq!(cursor.previous(&mut window), Navigation::Unchanged);
        assert_eq!(cursor.commit(&window), Some("kiwi"));
        assert!(!Navigation::Unchanged.changed());
    }
}
