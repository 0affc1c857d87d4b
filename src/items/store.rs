//! Frozen, ordered collection of menu items

use std::ops::Index;

/// The items a session picks from.
///
/// Built once at load time and never resized or reordered afterwards, so a
/// position handed out by a scan stays valid for the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Box<[String]>,
}

impl ItemStore {
    /// Freeze an already tokenized sequence of items, keeping their order.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&str> {
        self.items.get(pos).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl Index<usize> for ItemStore {
    type Output = str;

    fn index(&self, pos: usize) -> &str {
        &self.items[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_items_keeps_order() {
        let store = ItemStore::from_items(vec!["b".to_string(), "a".to_string()]);
        assert_eq!(store.len(), 2);
        assert_eq!(&store[0], "b");
        assert_eq!(store.get(1), Some("a"));
        assert_eq!(store.get(2), None);
        assert_eq!(store.iter().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ItemStore::default().is_empty());
    }
}
