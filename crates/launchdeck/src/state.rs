//! Application state advanced by named events.
//!
//! The launch set, loading flag, last error, query, and selection live in one
//! [`AppState`] value. The only way to change it is [`AppState::reduce`],
//! which consumes the state and an [`Event`] and returns the next state.

use std::sync::Arc;

use tracing::trace;

use crate::aggregator::{FetchError, LoadOutcome, PartialFailure};
use crate::filter::{filter, SearchQuery};
use crate::launch::{FlightNumber, LaunchRecord, LaunchSet};
use crate::selection::SelectionStore;
use crate::view::{format_for_display, ViewFields};

/// Something that happened to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A load began.
    LoadStarted,
    /// A load produced a launch set.
    Loaded(LoadOutcome),
    /// A load failed.
    LoadFailed(FetchError),
    /// A load was cancelled by the caller.
    LoadCancelled,
    /// The user typed a new search query (raw, not yet normalized).
    QueryChanged(String),
    /// The user picked a launch.
    Selected(FlightNumber),
}

impl From<Result<LoadOutcome, FetchError>> for Event {
    /// The event that ends a load with this result.
    fn from(result: Result<LoadOutcome, FetchError>) -> Self {
        match result {
            Ok(outcome) => Self::Loaded(outcome),
            Err(FetchError::Cancelled) => Self::LoadCancelled,
            Err(error) => Self::LoadFailed(error),
        }
    }
}

/// What the list area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a> {
    /// A load is in flight.
    Loading,
    /// The last load failed; the message replaces the list.
    Failed(&'a FetchError),
    /// Launches passing the current query, in set order.
    Records(Vec<&'a LaunchRecord>),
}

/// Snapshot of the whole application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    launches: Arc<LaunchSet>,
    loading: bool,
    error: Option<FetchError>,
    warning: Option<PartialFailure>,
    query: SearchQuery,
    selection: SelectionStore,
}

impl AppState {
    /// Create the initial state: nothing loaded, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event and return the next state.
    #[must_use]
    pub fn reduce(self, event: Event) -> Self {
        trace!(?event, "Reducing event");
        match event {
            Event::LoadStarted => Self {
                loading: true,
                error: None,
                warning: None,
                ..self
            },
            Event::Loaded(outcome) => Self {
                launches: Arc::new(outcome.launches),
                loading: false,
                error: None,
                warning: outcome.warning,
                ..self
            },
            Event::LoadFailed(error) => Self {
                launches: Arc::default(),
                loading: false,
                error: Some(error),
                warning: None,
                ..self
            },
            Event::LoadCancelled => Self {
                loading: false,
                ..self
            },
            Event::QueryChanged(raw) => Self {
                query: SearchQuery::new(&raw),
                ..self
            },
            Event::Selected(flight_number) => {
                let mut selection = self.selection;
                selection.select(flight_number);
                Self { selection, ..self }
            }
        }
    }

    /// The full, unfiltered launch set.
    #[must_use]
    pub fn launches(&self) -> &LaunchSet {
        &self.launches
    }

    /// Check if a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error of the last failed load.
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Warning of the last partially failed load.
    #[must_use]
    pub fn warning(&self) -> Option<&PartialFailure> {
        self.warning.as_ref()
    }

    /// The normalized search query.
    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// The selected flight number, if any.
    #[must_use]
    pub fn selection(&self) -> Option<FlightNumber> {
        self.selection.selected()
    }

    /// Launches passing the current query.
    #[must_use]
    pub fn displayed(&self) -> Vec<&LaunchRecord> {
        filter(self.launches.as_ref(), &self.query)
    }

    /// What the list area shows: loading first, then an error, then launches.
    #[must_use]
    pub fn list_view(&self) -> ListView<'_> {
        if self.loading {
            ListView::Loading
        } else if let Some(error) = &self.error {
            ListView::Failed(error)
        } else {
            ListView::Records(self.displayed())
        }
    }

    /// The selected launch, resolved against the full set.
    #[must_use]
    pub fn selected(&self) -> Option<&LaunchRecord> {
        self.selection.resolve(&self.launches)
    }

    /// Detail panel fields, present only when the selection resolves.
    #[must_use]
    pub fn detail(&self) -> Option<ViewFields<'_>> {
        self.selected().map(format_for_display)
    }
}
