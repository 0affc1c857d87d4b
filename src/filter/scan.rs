//! Bounded, resumable scans over the item store
//!
//! Every window operation is built from [`scan`]: walk a half-open range of
//! store positions in one direction, collect at most `capacity` matches, and
//! report the boundary the walk stopped at so a later call can continue from
//! exactly that point.

use std::ops::Range;

use smallvec::SmallVec;

use super::matcher::MatchPredicate;
use crate::items::ItemStore;

/// Inline capacity for scan results. Shifts collect one match at a time and
/// typical limits fit without touching the heap.
pub const INLINE_MATCHES: usize = 16;

pub type MatchPositions = SmallVec<[usize; INLINE_MATCHES]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Ascending positions, starting at `range.start`
    Forward,
    /// Descending positions, starting at `range.end - 1`
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Matching store positions in the order they were encountered
    pub matches: MatchPositions,
    /// Boundary one past the last examined position, in scan direction.
    ///
    /// Forward scans examined `[range.start, scanned_to)`; backward scans
    /// examined `[scanned_to, range.end)`. When nothing was examined this is
    /// the boundary the scan started from.
    pub scanned_to: usize,
}

impl ScanOutcome {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Scan `range` in `direction`, stopping after `capacity` matches or at the
/// end of the range, whichever comes first.
///
/// The scan stops immediately after the match that fills the capacity, so
/// positions past it stay unexamined and can be picked up by a later call.
/// `range` is clamped to the store length.
pub fn scan<P>(
    store: &ItemStore,
    range: Range<usize>,
    direction: ScanDirection,
    predicate: &P,
    capacity: usize,
) -> ScanOutcome
where
    P: MatchPredicate + ?Sized,
{
    let end = range.end.min(store.len());
    let start = range.start.min(end);
    let mut matches = MatchPositions::new();

    match direction {
        ScanDirection::Forward => {
            let mut pos = start;
            while pos < end && matches.len() < capacity {
                if predicate.matches(&store[pos]) {
                    matches.push(pos);
                }
                pos += 1;
            }
            ScanOutcome {
                matches,
                scanned_to: pos,
            }
        }
        ScanDirection::Backward => {
            let mut pos = end;
            while pos > start && matches.len() < capacity {
                pos -= 1;
                if predicate.matches(&store[pos]) {
                    matches.push(pos);
                }
            }
            ScanOutcome {
                matches,
                scanned_to: pos,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::matcher::{CaseMode, SubstringMatcher};

    fn fruit() -> ItemStore {
        ItemStore::from_items(["apple", "banana", "grape", "kiwi", "mango", "pear"])
    }

    fn positions(outcome: &ScanOutcome) -> Vec<usize> {
        outcome.matches.to_vec()
    }

    #[test]
    fn test_forward_stops_right_after_capacity_match() {
        let store = fruit();
        let all = SubstringMatcher::new("", CaseMode::Sensitive);
        let outcome = scan(&store, 0..store.len(), ScanDirection::Forward, &all, 3);
        assert_eq!(positions(&outcome), vec![0, 1, 2]);
        assert_eq!(outcome.scanned_to, 3);
    }

    #[test]
    fn test_forward_exhausts_range() {
        let store = fruit();
        let an = SubstringMatcher::new("an", CaseMode::Sensitive);
        let outcome = scan(&store, 0..store.len(), ScanDirection::Forward, &an, 3);
        assert_eq!(positions(&outcome), vec![1, 4]);
        assert_eq!(outcome.scanned_to, store.len());
    }

    #[test]
    fn test_forward_reports_examined_non_matches() {
        let store = fruit();
        let mango = SubstringMatcher::new("mango", CaseMode::Sensitive);
        let outcome = scan(&store, 1..store.len(), ScanDirection::Forward, &mango, 1);
        assert_eq!(positions(&outcome), vec![4]);
        // kiwi and grape were examined on the way, pear was not
        assert_eq!(outcome.scanned_to, 5);
    }

    #[test]
    fn test_backward_scans_descending() {
        let store = fruit();
        let all = SubstringMatcher::new("", CaseMode::Sensitive);
        let outcome = scan(&store, 0..4, ScanDirection::Backward, &all, 2);
        assert_eq!(positions(&outcome), vec![3, 2]);
        assert_eq!(outcome.scanned_to, 2);
    }

    #[test]
    fn test_backward_exhausts_to_range_start() {
        let store = fruit();
        let p = SubstringMatcher::new("p", CaseMode::Sensitive);
        let outcome = scan(&store, 0..2, ScanDirection::Backward, &p, 5);
        assert_eq!(positions(&outcome), vec![0]);
        assert_eq!(outcome.scanned_to, 0);
    }

    #[test]
    fn test_zero_capacity_examines_nothing() {
        let store = fruit();
        let all = SubstringMatcher::new("", CaseMode::Sensitive);
        let forward = scan(&store, 2..5, ScanDirection::Forward, &all, 0);
        assert!(forward.is_empty());
        assert_eq!(forward.scanned_to, 2);

        let backward = scan(&store, 2..5, ScanDirection::Backward, &all, 0);
        assert!(backward.is_empty());
        assert_eq!(backward.scanned_to, 5);
    }

    #[test]
    fn test_resuming_covers_each_position_once() {
        let store = fruit();
        let examined = std::cell::RefCell::new(Vec::new());
        let record = |item: &str| {
            examined.borrow_mut().push(item.to_string());
            item.contains('a')
        };

        let first = scan(&store, 0..store.len(), ScanDirection::Forward, &record, 2);
        let second = scan(
            &store,
            first.scanned_to..store.len(),
            ScanDirection::Forward,
            &record,
            10,
        );

        assert_eq!(positions(&first), vec![0, 1]);
        assert_eq!(positions(&second), vec![2, 4, 5]);
        assert_eq!(
            examined.into_inner(),
            vec!["apple", "banana", "grape", "kiwi", "mango", "pear"]
        );
    }

    #[test]
    fn test_range_clamped_to_store() {
        let store = fruit();
        let all = SubstringMatcher::new("", CaseMode::Sensitive);
        let outcome = scan(&store, 4..100, ScanDirection::Forward, &all, 10);
        assert_eq!(positions(&outcome), vec![4, 5]);
        assert_eq!(outcome.scanned_to, 6);
    }
}
