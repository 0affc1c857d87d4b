//! FilterWindow - The bounded, incrementally maintained set of visible matches
//!
//! The window holds at most `limit` matching store positions together with
//! the half-open range `[lower, upper)` that was scanned to produce them.
//! Every position in that range that matches the current query is in the
//! window, in store order, and nothing outside it has been looked at on
//! behalf of the window. That bookkeeping is what lets navigation past an
//! edge resume scanning exactly where the last scan stopped instead of
//! starting over.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, trace};

use super::matcher::{CaseMode, SubstringMatcher};
use super::scan::{scan, ScanDirection};
use crate::items::ItemStore;

/// Result of an attempt to slide the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    /// Nothing matched beyond the edge; window and bounds are untouched
    Unchanged,
    /// `count` new matches entered the window on the shifted side
    Shifted { count: usize },
}

impl Shift {
    pub fn is_shifted(self) -> bool {
        matches!(self, Shift::Shifted { .. })
    }
}

#[derive(Debug, Clone)]
pub struct FilterWindow {
    store: Arc<ItemStore>,
    limit: usize,
    matcher: SubstringMatcher,
    /// Store positions of the visible matches, ascending
    visible: VecDeque<usize>,
    /// Inclusive left edge of the scanned range
    lower: usize,
    /// Exclusive right edge of the scanned range
    upper: usize,
}

impl FilterWindow {
    /// Create a window over `store` already filtered by the empty query.
    pub fn new(store: Arc<ItemStore>, limit: usize, case: CaseMode) -> Self {
        let visible = VecDeque::with_capacity(limit.min(store.len()));
        let mut window = Self {
            store,
            limit,
            matcher: SubstringMatcher::new("", case),
            visible,
            lower: 0,
            upper: 0,
        };
        window.refilter("");
        window
    }

    /// Recompute the window from the start of the store for a new query.
    ///
    /// Cost is bounded by the position of the `limit`-th match, not by the
    /// size of the store, unless matches are rare.
    pub fn refilter(&mut self, query: &str) {
        self.matcher = SubstringMatcher::new(query, self.matcher.case());
        self.visible.clear();

        let outcome = scan(
            &self.store,
            0..self.store.len(),
            ScanDirection::Forward,
            &self.matcher,
            self.limit,
        );

        self.lower = outcome.matches.first().copied().unwrap_or(0);
        self.upper = outcome.scanned_to;
        self.visible.extend(outcome.matches.iter().copied());

        debug!(
            event_type = "refilter",
            query_len = query.chars().count(),
            visible = self.visible.len(),
            scanned = self.upper,
            "Window refiltered"
        );
    }

    /// Pull up to `amount` further matches in on the right, dropping from the
    /// left to stay within `limit`.
    pub fn shift_right(&mut self, amount: usize) -> Shift {
        if self.limit == 0 {
            return Shift::Unchanged;
        }

        let found = scan(
            &self.store,
            self.upper..self.store.len(),
            ScanDirection::Forward,
            &self.matcher,
            amount,
        );
        if found.is_empty() {
            trace!(upper = self.upper, "Nothing beyond right edge");
            return Shift::Unchanged;
        }

        self.visible.extend(found.matches.iter().copied());
        let dropped = self.visible.len().saturating_sub(self.limit);
        self.visible.drain(..dropped);

        // Move the left edge past exactly the matches that were dropped.
        let consumed = scan(
            &self.store,
            self.lower..self.store.len(),
            ScanDirection::Forward,
            &self.matcher,
            dropped,
        );
        self.lower = consumed.scanned_to;
        self.upper = found.scanned_to;

        debug!(
            event_type = "shift",
            direction = "right",
            count = found.len(),
            lower = self.lower,
            upper = self.upper,
            "Window shifted"
        );
        Shift::Shifted { count: found.len() }
    }

    /// Pull up to `amount` earlier matches in on the left, dropping from the
    /// right to stay within `limit`.
    pub fn shift_left(&mut self, amount: usize) -> Shift {
        if self.limit == 0 {
            return Shift::Unchanged;
        }

        let found = scan(
            &self.store,
            0..self.lower,
            ScanDirection::Backward,
            &self.matcher,
            amount,
        );
        if found.is_empty() {
            trace!(lower = self.lower, "Nothing beyond left edge");
            return Shift::Unchanged;
        }

        // Backward scans report descending positions.
        for &pos in &found.matches {
            self.visible.push_front(pos);
        }
        let dropped = self.visible.len().saturating_sub(self.limit);
        self.visible.truncate(self.visible.len() - dropped);

        // Pull the right edge back over exactly the matches that were dropped.
        let consumed = scan(
            &self.store,
            0..self.upper,
            ScanDirection::Backward,
            &self.matcher,
            dropped,
        );
        self.upper = consumed.scanned_to;
        self.lower = found.scanned_to;

        debug!(
            event_type = "shift",
            direction = "left",
            count = found.len(),
            lower = self.lower,
            upper = self.upper,
            "Window shifted"
        );
        Shift::Shifted { count: found.len() }
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn query(&self) -> &str {
        self.matcher.query()
    }

    pub fn matcher(&self) -> &SubstringMatcher {
        &self.matcher
    }

    /// The scanned range `[lower, upper)` backing the current window.
    pub fn bounds(&self) -> (usize, usize) {
        (self.lower, self.upper)
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Store positions of the visible matches, in store order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().copied()
    }

    /// Text of the visible match in window slot `slot`.
    pub fn item(&self, slot: usize) -> Option<&str> {
        self.visible.get(slot).map(|&pos| &self.store[pos])
    }

    /// Text of all visible matches, in store order.
    pub fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.visible.iter().map(|&pos| &self.store[pos])
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
