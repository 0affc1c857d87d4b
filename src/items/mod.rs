//! Items module - Loading and holding the candidates a session picks from
//!
//! # Module Structure
//!
//! - `store` - The frozen, ordered `ItemStore`
//! - `loader` - Tokenizing files, streams and argument lists into items

mod loader;
mod store;

pub use loader::tokenize;
pub use store::ItemStore;
