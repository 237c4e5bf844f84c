//! Retrieval and merge of the past and upcoming launch collections.
//!
//! The aggregator fans out to both collections concurrently, waits for both,
//! and combines the outcomes with a fixed rule:
//!
//! | past      | upcoming  | result                                       |
//! |-----------|-----------|----------------------------------------------|
//! | ok        | ok        | past followed by upcoming                    |
//! | ok        | failed    | past only, plus a [`PartialFailure`] warning |
//! | failed    | ok        | upcoming only, plus a [`PartialFailure`]     |
//! | failed    | failed    | [`FetchError::Network`]                      |
//!
//! A body that arrives but does not decode is a [`FetchError::Parse`] and
//! aborts the load. The body of a failed retrieval is never decoded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::launch::{FlightNumber, LaunchRecord, LaunchSet};
use crate::source::{HttpFetcher, LaunchFetcher, SourceKind, TransportError};

/// Ways a load can end without producing a launch set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Neither collection could be retrieved.
    #[error("failed to fetch the launch list: past ({past}); upcoming ({upcoming})")]
    Network {
        /// Why the past collection failed.
        past: TransportError,
        /// Why the upcoming collection failed.
        upcoming: TransportError,
    },

    /// A collection arrived but its body is not a list of launches.
    #[error("failed to decode {kind} launches: {message}")]
    Parse {
        /// Collection whose body was malformed.
        kind: SourceKind,
        /// Decoder message.
        message: String,
    },

    /// Two launches share an identifier.
    #[error("flight number {flight_number} appears more than once")]
    DuplicateFlightNumber {
        /// The repeated identifier.
        flight_number: FlightNumber,
    },

    /// The caller cancelled the load while it was in flight.
    #[error("load cancelled")]
    Cancelled,
}

impl FetchError {
    /// Check if this outcome is a cancellation rather than a failure.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// One collection failed while the other succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not fetch {failed} launches ({error}); showing {} launches only", .failed.other())]
pub struct PartialFailure {
    /// Collection that could not be retrieved.
    pub failed: SourceKind,
    /// Why it failed.
    pub error: TransportError,
}

/// A successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    /// The merged launch set.
    pub launches: LaunchSet,
    /// Set when only one of the two collections was retrieved.
    pub warning: Option<PartialFailure>,
}

/// Observable loading flag and last error of an [`Aggregator`].
///
/// Cheap to clone; every clone observes the same state.
#[derive(Debug, Clone, Default)]
pub struct LoadStatus {
    loading: Arc<AtomicBool>,
    last_error: Arc<Mutex<Option<FetchError>>>,
}

impl LoadStatus {
    /// Check if a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Error recorded by the most recent failed load, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<FetchError> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mark a load as started: raise the flag and clear the last error.
    fn begin(&self) -> LoadingGuard {
        self.set_error(None);
        self.loading.store(true, Ordering::SeqCst);
        LoadingGuard {
            loading: Arc::clone(&self.loading),
        }
    }

    fn set_error(&self, error: Option<FetchError>) {
        *self
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = error;
    }
}

/// Lowers the loading flag when dropped, whichever way the load exits.
#[derive(Debug)]
struct LoadingGuard {
    loading: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.loading.store(false, Ordering::SeqCst);
    }
}

/// Retrieves both launch collections and merges them into a [`LaunchSet`].
#[derive(Debug)]
pub struct Aggregator {
    fetcher: Arc<dyn LaunchFetcher>,
    status: LoadStatus,
}

impl Aggregator {
    /// Create an aggregator over the given fetcher.
    #[must_use]
    pub fn new(fetcher: Arc<dyn LaunchFetcher>) -> Self {
        Self {
            fetcher,
            status: LoadStatus::default(),
        }
    }

    /// Create an aggregator that talks HTTP to the configured API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &ApiConfig) -> crate::Result<Self> {
        Ok(Self::new(Arc::new(HttpFetcher::new(config)?)))
    }

    /// Handle to the loading flag and last error.
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status.clone()
    }

    /// Retrieve both collections and merge them.
    ///
    /// The loading flag is raised for the duration of the call. Failures other
    /// than cancellation are recorded as the last error.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Cancelled`] if `cancel` fires before both
    /// retrievals finish, and any other [`FetchError`] per the merge rule.
    pub async fn load(&self, cancel: &CancellationToken) -> Result<LoadOutcome, FetchError> {
        if cancel.is_cancelled() {
            debug!("Load cancelled before it started");
            return Err(FetchError::Cancelled);
        }

        let _guard = self.status.begin();
        info!("Loading launches");

        let fetch_both = async {
            tokio::join!(
                self.fetcher.fetch(SourceKind::Past),
                self.fetcher.fetch(SourceKind::Upcoming)
            )
        };

        let (past, upcoming) = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                info!("Load cancelled");
                return Err(FetchError::Cancelled);
            }
            pair = fetch_both => pair,
        };

        let result = merge(past, upcoming);
        match &result {
            Ok(outcome) => {
                if let Some(warning) = &outcome.warning {
                    warn!(failed = %warning.failed, error = %warning.error, "Partial load");
                }
                info!(count = outcome.launches.len(), "Launches loaded");
            }
            Err(err) => {
                warn!(error = %err, "Load failed");
                self.status.set_error(Some(err.clone()));
            }
        }
        result
    }
}

/// Combine the two retrieval outcomes into a load result.
fn merge(
    past: Result<String, TransportError>,
    upcoming: Result<String, TransportError>,
) -> Result<LoadOutcome, FetchError> {
    match (past, upcoming) {
        (Err(past), Err(upcoming)) => Err(FetchError::Network { past, upcoming }),
        (Ok(past), Ok(upcoming)) => {
            let past = decode(SourceKind::Past, &past)?;
            let upcoming = decode(SourceKind::Upcoming, &upcoming)?;
            Ok(LoadOutcome {
                launches: LaunchSet::from_sources(past, upcoming)?,
                warning: None,
            })
        }
        (Ok(past), Err(error)) => Ok(LoadOutcome {
            launches: LaunchSet::from_records(decode(SourceKind::Past, &past)?)?,
            warning: Some(PartialFailure {
                failed: SourceKind::Upcoming,
                error,
            }),
        }),
        (Err(error), Ok(upcoming)) => Ok(LoadOutcome {
            launches: LaunchSet::from_records(decode(SourceKind::Upcoming, &upcoming)?)?,
            warning: Some(PartialFailure {
                failed: SourceKind::Past,
                error,
            }),
        }),
    }
}

fn decode(kind: SourceKind, body: &str) -> Result<Vec<LaunchRecord>, FetchError> {
    let records: Vec<LaunchRecord> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse {
            kind,
            message: e.to_string(),
        })?;
    debug!(%kind, count = records.len(), "Decoded launches");
    Ok(records)
}
