//! Configuration module - Menu settings and user preferences
//!
//! This module provides functionality for:
//! - Loading configuration from a JSON file
//! - Default values for all settings
//! - Layering command line overrides over file values
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, Colors, etc.)
//! - `hex_color` - Color parsing and serde helpers
//! - `loader` - File system loading and parsing

mod defaults;
mod hex_color;
mod loader;
mod types;

pub use defaults::{DEFAULT_DELIMITERS, DEFAULT_LIMIT};
pub use hex_color::{rgb_channels, HexColor};
pub use loader::{config_path, load_config, parse_config, ConfigLocation};
pub use types::{ColorScheme, Colors, Config, ConfigOverrides, Orientation, Position};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
