//! Filter module - Incremental bounded filtering of the item store
//!
//! This module provides:
//! - Literal substring matching with an optional case-insensitive mode
//! - Resumable bounded scans in either direction
//! - The visible window of at most `limit` matches and its scan bounds
//! - The selection cursor that slides the window at its edges
//!
//! # Module Structure
//!
//! - `matcher` - `MatchPredicate` and `SubstringMatcher`
//! - `scan` - Direction-parameterized bounded scan
//! - `window` - `FilterWindow` refilter and shift operations
//! - `cursor` - `SelectionCursor` navigation and commit

mod cursor;
mod matcher;
mod scan;
mod window;

pub use cursor::{NavDirection, Navigation, SelectionCursor};
pub use matcher::{CaseMode, MatchPredicate, SubstringMatcher};
pub use scan::{scan, MatchPositions, ScanDirection, ScanOutcome};
pub use window::{FilterWindow, Shift};
