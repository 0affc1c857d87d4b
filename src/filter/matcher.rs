//! Literal substring matching for menu items
//!
//! The query is normalized once when the matcher is built, so testing an
//! item during a scan only pays for the item side.

/// How the query is compared against item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Exact code point comparison
    #[default]
    Sensitive,
    /// Both sides are lowercased before comparison
    Insensitive,
}

impl CaseMode {
    pub fn from_insensitive(insensitive: bool) -> Self {
        if insensitive {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }
}

/// Anything that can decide whether a single item belongs in the window.
pub trait MatchPredicate {
    fn matches(&self, item: &str) -> bool;
}

impl<F> MatchPredicate for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, item: &str) -> bool {
        self(item)
    }
}

/// Containment test of a query inside item text.
///
/// An empty query matches every item. Rust strings are always valid UTF-8,
/// so a byte-level containment test only succeeds on code point boundaries
/// and is equivalent to comparing code point sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringMatcher {
    /// Query as typed
    query: String,
    /// Query prepared for comparison (lowercased in insensitive mode)
    needle: String,
    case: CaseMode,
}

impl SubstringMatcher {
    pub fn new(query: &str, case: CaseMode) -> Self {
        let needle = match case {
            CaseMode::Sensitive => query.to_string(),
            CaseMode::Insensitive => query.to_lowercase(),
        };
        Self {
            query: query.to_string(),
            needle,
            case,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn case(&self) -> CaseMode {
        self.case
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl MatchPredicate for SubstringMatcher {
    fn matches(&self, item: &str) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        match self.case {
            CaseMode::Sensitive => item.contains(self.needle.as_str()),
            CaseMode::Insensitive => {
                if item.is_ascii() && self.needle.is_ascii() {
                    contains_ignore_ascii_case(item, &self.needle)
                } else {
                    item.to_lowercase().contains(self.needle.as_str())
                }
            }
        }
    }
}

/// Check if haystack contains needle using ASCII case-insensitive matching.
/// `needle_lower` must already be lowercase. No allocation.
#[inline]
pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle_lower: &str) -> bool {
    let h = haystack.as_bytes();
    let n = needle_lower.as_bytes();
    if n.is_empty() {
        return true;
    }
    if n.len() > h.len() {
        return false;
    }
    'outer: for i in 0..=(h.len() - n.len()) {
        for j in 0..n.len() {
            if h[i + j].to_ascii_lowercase() != n[j] {
                continue 'outer;
            }
        }
        return true;
    }
    false
}
