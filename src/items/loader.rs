//! Item loading: split raw input into menu items
//!
//! Input is read to the end, decoded as UTF-8 (invalid sequences are
//! replaced), and cut at every character from the delimiter set. Empty
//! tokens are dropped, so runs of delimiters such as `\r\n` never produce
//! blank items.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info, instrument};

use super::store::ItemStore;
use crate::error::{Result, WmenuError};

/// Split `text` at any character contained in `delimiters`.
///
/// A trailing token without a closing delimiter is kept.
pub fn tokenize(text: &str, delimiters: &str) -> Vec<String> {
    text.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

impl ItemStore {
    /// Read every item from `reader`.
    pub fn load<R: Read>(mut reader: R, delimiters: &str) -> Result<Self> {
        check_delimiters(delimiters)?;

        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| WmenuError::ItemsRead {
                origin: "input stream".to_string(),
                source,
            })?;

        let text = String::from_utf8_lossy(&bytes);
        let store = ItemStore::from_items(tokenize(&text, delimiters));
        debug!(
            bytes = bytes.len(),
            items = store.len(),
            "Tokenized item stream"
        );
        Ok(store)
    }

    /// Read every item from the file at `path`.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_file(path: &Path, delimiters: &str) -> Result<Self> {
        let file = File::open(path).map_err(|source| WmenuError::ItemsRead {
            origin: path.display().to_string(),
            source,
        })?;
        let store = Self::load(BufReader::new(file), delimiters)?;
        info!(
            event_type = "items_loaded",
            source = "file",
            count = store.len(),
            "Loaded items"
        );
        Ok(store)
    }

    /// Build the store from command line items.
    ///
    /// Arguments are joined with the first delimiter and split again, so an
    /// argument that itself contains a delimiter yields several items.
    pub fn from_args<S: AsRef<str>>(args: &[S], delimiters: &str) -> Result<Self> {
        let first = check_delimiters(delimiters)?;

        let mut joined = String::new();
        for arg in args {
            joined.push_str(arg.as_ref());
            joined.push(first);
        }

        let store = ItemStore::from_items(tokenize(&joined, delimiters));
        info!(
            event_type = "items_loaded",
            source = "args",
            count = store.len(),
            "Loaded items"
        );
        Ok(store)
    }
}

/// Returns the first delimiter, rejecting an empty set.
fn check_delimiters(delimiters: &str) -> Result<char> {
    delimiters
        .chars()
        .next()
        .ok_or_else(|| WmenuError::Config("delimiter set must not be empty".to_string()))
}
