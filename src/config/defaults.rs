//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Default number of visible items
pub const DEFAULT_LIMIT: usize = 10;

/// Largest accepted visible item limit
pub const MAX_LIMIT: usize = 10_000;

/// Default matching mode
pub const DEFAULT_INSENSITIVE: bool = false;

/// Characters that separate items in the input stream
pub const DEFAULT_DELIMITERS: &str = ";\r\n";

/// Columns between items in horizontal layout
pub const DEFAULT_PADDING: u16 = 2;

/// Fraction of the terminal width reserved for the search box in horizontal layout
pub const DEFAULT_SEARCH_MARGIN: f32 = 0.2;

/// Default color schemes (0xRRGGBB)
pub const DEFAULT_NORMAL_FG: u32 = 0xbbbbbb;
pub const DEFAULT_NORMAL_BG: u32 = 0x222222;
pub const DEFAULT_SELECTED_FG: u32 = 0xeeeeee;
pub const DEFAULT_SELECTED_BG: u32 = 0x005577;
pub const DEFAULT_PROMPT_FG: u32 = 0xeeeeee;
pub const DEFAULT_PROMPT_BG: u32 = 0x005577;

/// Environment variable that points at an alternate config file
pub const CONFIG_ENV_VAR: &str = "WMENU_CONFIG";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.json";
