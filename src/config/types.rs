//! Configuration type definitions
//!
//! This module contains all the struct and enum definitions for configuration.

use serde::{Deserialize, Serialize};

use super::defaults::*;
use super::hex_color::{hex_color_serde, HexColor};
use crate::error::{Result, WmenuError};
use crate::filter::CaseMode;
use crate::picker::PickerOptions;

// ============================================
// LAYOUT
// ============================================

/// Which edge of the terminal the menu is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

/// How visible items are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Prompt, query and items on a single row
    #[default]
    Horizontal,
    /// Prompt and query on the first row, one item per following row
    Vertical,
}

// ============================================
// COLORS
// ============================================

/// Foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    #[serde(with = "hex_color_serde")]
    pub fg: HexColor,
    #[serde(with = "hex_color_serde")]
    pub bg: HexColor,
}

/// Color schemes for each kind of segment the menu draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    /// Unselected items, query text and the background
    #[serde(default = "default_normal_scheme")]
    pub normal: ColorScheme,
    /// The highlighted item
    #[serde(default = "default_selected_scheme")]
    pub selected: ColorScheme,
    /// The prompt label
    #[serde(default = "default_prompt_scheme")]
    pub prompt: ColorScheme,
}

fn default_normal_scheme() -> ColorScheme {
    ColorScheme {
        fg: DEFAULT_NORMAL_FG,
        bg: DEFAULT_NORMAL_BG,
    }
}
fn default_selected_scheme() -> ColorScheme {
    ColorScheme {
        fg: DEFAULT_SELECTED_FG,
        bg: DEFAULT_SELECTED_BG,
    }
}
fn default_prompt_scheme() -> ColorScheme {
    ColorScheme {
        fg: DEFAULT_PROMPT_FG,
        bg: DEFAULT_PROMPT_BG,
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            normal: default_normal_scheme(),
            selected: default_selected_scheme(),
            prompt: default_prompt_scheme(),
        }
    }
}

// ============================================
// COMMAND LINE OVERRIDES
// ============================================

/// Values given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub limit: Option<usize>,
    pub insensitive: bool,
    pub delimiters: Option<String>,
    pub prompt: Option<String>,
    pub position: Option<Position>,
    pub orientation: Option<Orientation>,
}

// ============================================
// MAIN CONFIG
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Maximum number of visible items (default: 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Match items case-insensitively (default: false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insensitive: Option<bool>,
    /// Characters that separate items in the input (default: ";\r\n")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiters: Option<String>,
    /// Label drawn before the search box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Columns between items in horizontal layout (default: 2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u16>,
    /// Fraction of the width reserved for the search box (default: 0.2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_margin: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Colors>,
}

impl Config {
    /// Returns the visible item limit, or DEFAULT_LIMIT if not configured
    pub fn get_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Returns whether matching ignores case, or DEFAULT_INSENSITIVE if not configured
    pub fn get_insensitive(&self) -> bool {
        self.insensitive.unwrap_or(DEFAULT_INSENSITIVE)
    }

    pub fn get_case_mode(&self) -> CaseMode {
        CaseMode::from_insensitive(self.get_insensitive())
    }

    /// Returns the delimiter set, or DEFAULT_DELIMITERS if not configured
    pub fn get_delimiters(&self) -> &str {
        self.delimiters.as_deref().unwrap_or(DEFAULT_DELIMITERS)
    }

    pub fn get_prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or("")
    }

    pub fn get_position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    pub fn get_orientation(&self) -> Orientation {
        self.orientation.unwrap_or_default()
    }

    /// Returns the horizontal item padding, or DEFAULT_PADDING if not configured
    pub fn get_padding(&self) -> u16 {
        self.padding.unwrap_or(DEFAULT_PADDING)
    }

    /// Returns the search box width fraction, or DEFAULT_SEARCH_MARGIN if not configured
    pub fn get_search_margin(&self) -> f32 {
        self.search_margin.unwrap_or(DEFAULT_SEARCH_MARGIN)
    }

    /// Returns the color schemes, or defaults if not configured
    pub fn get_colors(&self) -> Colors {
        self.colors.unwrap_or_default()
    }

    /// Options for the picker session built from this config
    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            limit: self.get_limit(),
            case: self.get_case_mode(),
        }
    }

    /// Layer command line values over the file values.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(limit) = overrides.limit {
            self.limit = Some(limit);
        }
        // the flag can only turn case-insensitive matching on
        if overrides.insensitive {
            self.insensitive = Some(true);
        }
        if let Some(delimiters) = overrides.delimiters {
            self.delimiters = Some(delimiters);
        }
        if let Some(prompt) = overrides.prompt {
            self.prompt = Some(prompt);
        }
        if let Some(position) = overrides.position {
            self.position = Some(position);
        }
        if let Some(orientation) = overrides.orientation {
            self.orientation = Some(orientation);
        }
    }

    /// Reject values the session cannot work with.
    pub fn validate(&self) -> Result<()> {
        let limit = self.get_limit();
        if limit > MAX_LIMIT {
            return Err(WmenuError::Config(format!(
                "limit must be at most {}, got {}",
                MAX_LIMIT, limit
            )));
        }
        if self.get_delimiters().is_empty() {
            return Err(WmenuError::Config(
                "delimiters must contain at least one character".to_string(),
            ));
        }
        let margin = self.get_search_margin();
        if !(0.0..=1.0).contains(&margin) {
            return Err(WmenuError::Config(format!(
                "searchMargin must be between 0 and 1, got {}",
                margin
            )));
        }
        Ok(())
    }
}
