//! The currently selected launch.
//!
//! A selection is an identifier, resolved on demand against the full launch
//! set. Filtering never clears it, and a selection that no longer resolves is
//! a normal outcome rather than an error.

use crate::launch::{FlightNumber, LaunchRecord, LaunchSet};

/// Holds at most one selected flight number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: Option<FlightNumber>,
}

impl SelectionStore {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a launch, replacing any previous selection.
    pub fn select(&mut self, flight_number: FlightNumber) {
        self.selected = Some(flight_number);
    }

    /// The stored identifier, if any.
    #[must_use]
    pub fn selected(&self) -> Option<FlightNumber> {
        self.selected
    }

    /// Find the selected launch in `launches`.
    ///
    /// Returns `None` when nothing is selected or the identifier is absent.
    #[must_use]
    pub fn resolve<'a>(&self, launches: &'a LaunchSet) -> Option<&'a LaunchRecord> {
        self.selected.and_then(|id| launches.find(id))
    }

    /// Check if the detail panel has something to show.
    #[must_use]
    pub fn is_detail_visible(&self, launches: &LaunchSet) -> bool {
        self.resolve(launches).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter, SearchQuery};
    use crate::launch::fixtures::launch;

    fn sample() -> LaunchSet {
        LaunchSet::from_records(vec![
            launch(1, "FalconSat", "Falcon 1"),
            launch(5, "RatSat", "Falcon 1"),
            launch(6, "Falcon 9 Test Flight", "Falcon 9"),
        ])
        .unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let store = SelectionStore::new();
        assert!(store.selected().is_none());
        assert!(store.resolve(&sample()).is_none());
        assert!(!store.is_detail_visible(&sample()));
    }

    #[test]
    fn test_select_and_resolve() {
        let set = sample();
        let mut store = SelectionStore::new();
        store.select(5);

        assert_eq!(store.selected(), Some(5));
        assert_eq!(store.resolve(&set).map(|r| r.mission_name.as_str()), Some("RatSat"));
        assert!(store.is_detail_visible(&set));
    }

    #[test]
    fn test_select_overwrites() {
        let mut store = SelectionStore::new();
        store.select(1);
        store.select(6);
        assert_eq!(store.selected(), Some(6));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = SelectionStore::new();
        once.select(5);
        let mut twice = once;
        twice.select(5);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_resolution_miss_is_none() {
        let mut store = SelectionStore::new();
        store.select(404);
        assert!(store.resolve(&sample()).is_none());
        assert!(!store.is_detail_visible(&sample()));
    }

    #[test]
    fn test_selection_survives_filtering() {
        let set = sample();
        let mut store = SelectionStore::new();
        store.select(5);

        let shown = filter(&set, &SearchQuery::new("zzz"));
        assert!(shown.is_empty());
        assert_eq!(store.resolve(&set).map(|r| r.flight_number), Some(5));
    }
}
