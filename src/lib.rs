//! wmenu - An interactive item picker
//!
//! Items are read from a file, the command line or stdin, filtered by
//! substring as the user types, and the chosen item is printed to stdout.
//! Only a small window of matches is ever computed: moving past either edge
//! of the window slides it by scanning just far enough to find the next
//! match.

pub mod config;
pub mod error;
pub mod filter;
pub mod items;
pub mod logging;
pub mod perf;
pub mod picker;
pub mod terminal;

pub use error::{Result, WmenuError};
pub use items::ItemStore;
pub use picker::{Intent, Outcome, Picker, PickerOptions, WindowSnapshot};
