//! Picker - One interactive selection session
//!
//! The picker owns the frozen item store, the filter window, the selection
//! cursor and the query text. Input arrives as explicit [`Intent`] values,
//! one at a time, and each is processed to completion before the next. The
//! picker knows nothing about terminals or key codes, so every behavior can
//! be driven directly from tests.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Result, WmenuError};
use crate::filter::{CaseMode, FilterWindow, NavDirection, Navigation, SelectionCursor};
use crate::items::ItemStore;

/// Settings a session needs from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOptions {
    /// Maximum number of visible matches
    pub limit: usize,
    pub case: CaseMode,
}

/// A single user action, already decoded from whatever input device produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Append a character to the query
    Insert(char),
    /// Remove the last character of the query
    Backspace,
    /// Replace the whole query
    SetQuery(String),
    Next,
    Previous,
    /// Emit the highlighted item
    Commit,
    /// Leave without a selection
    Cancel,
}

impl Intent {
    /// Short label used in logs and timing
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Insert(_) => "insert",
            Intent::Backspace => "backspace",
            Intent::SetQuery(_) => "set_query",
            Intent::Next => "next",
            Intent::Previous => "previous",
            Intent::Commit => "commit",
            Intent::Cancel => "cancel",
        }
    }
}

/// Result of handling one intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Session continues; `redraw` is false when nothing visible changed
    Continue { redraw: bool },
    /// Session ended with this item chosen
    Selected(String),
    /// Session ended without a selection
    Cancelled,
}

/// What a renderer needs to draw the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot<'a> {
    pub query: &'a str,
    pub items: Vec<&'a str>,
    /// Highlighted slot in `items`, `None` when `items` is empty
    pub selected: Option<usize>,
}

#[derive(Debug)]
pub struct Picker {
    window: FilterWindow,
    cursor: SelectionCursor,
    query: String,
}

impl Picker {
    /// Start a session over `store`, showing the matches of the empty query.
    ///
    /// An empty store is refused: there is nothing to pick from.
    pub fn new(store: ItemStore, options: PickerOptions) -> Result<Self> {
        if store.is_empty() {
            return Err(WmenuError::EmptyStore);
        }
        info!(
            event_type = "session_start",
            items = store.len(),
            limit = options.limit,
            case = ?options.case,
            "Picker session started"
        );
        let window = FilterWindow::new(Arc::new(store), options.limit, options.case);
        Ok(Self {
            window,
            cursor: SelectionCursor::new(),
            query: String::new(),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn window(&self) -> &FilterWindow {
        &self.window
    }

    pub fn snapshot(&self) -> WindowSnapshot<'_> {
        WindowSnapshot {
            query: &self.query,
            items: self.window.items().collect(),
            selected: self.cursor.selected(&self.window),
        }
    }

    /// Replace the query, refilter from scratch and reset the highlight.
    pub fn on_query_changed(&mut self, query: impl Into<String>) -> WindowSnapshot<'_> {
        self.query = query.into();
        self.refilter();
        self.snapshot()
    }

    pub fn on_navigate(&mut self, direction: NavDirection) -> WindowSnapshot<'_> {
        self.navigate(direction);
        self.snapshot()
    }

    /// The highlighted item, or `None` when no item is visible.
    pub fn on_commit(&self) -> Option<&str> {
        self.cursor.commit(&self.window)
    }

    pub fn handle(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Insert(c) => {
                self.query.push(c);
                self.refilter();
                Outcome::Continue { redraw: true }
            }
            Intent::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                    Outcome::Continue { redraw: true }
                } else {
                    Outcome::Continue { redraw: false }
                }
            }
            Intent::SetQuery(query) => {
                if query == self.query {
                    return Outcome::Continue { redraw: false };
                }
                self.query = query;
                self.refilter();
                Outcome::Continue { redraw: true }
            }
            Intent::Next => Outcome::Continue {
                redraw: self.navigate(NavDirection::Next).changed(),
            },
            Intent::Previous => Outcome::Continue {
                redraw: self.navigate(NavDirection::Previous).changed(),
            },
            Intent::Commit => match self.on_commit() {
                Some(item) => {
                    info!(event_type = "session_end", action = "commit", "Item selected");
                    Outcome::Selected(item.to_string())
                }
                // nothing visible: stay open, the user can edit the query
                None => Outcome::Continue { redraw: false },
            },
            Intent::Cancel => {
                info!(event_type = "session_end", action = "cancel", "Picker cancelled");
                Outcome::Cancelled
            }
        }
    }

    fn refilter(&mut self) {
        self.window.refilter(&self.query);
        self.cursor.reset();
    }

    fn navigate(&mut self, direction: NavDirection) -> Navigation {
        let navigation = self.cursor.navigate(&mut self.window, direction);
        debug!(?direction, ?navigation, "Navigated");
        navigation
    }
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod tests;
