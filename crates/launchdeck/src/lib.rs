//! `launchdeck` - Browse past and upcoming SpaceX launches
//!
//! This library retrieves the past and upcoming launch collections, merges
//! them into one ordered set, narrows it by free-text query, resolves a
//! selected launch, and derives display-ready fields from it.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod launch;
pub mod logging;
pub mod selection;
pub mod source;
pub mod state;
pub mod view;

pub use aggregator::{Aggregator, FetchError, LoadOutcome, LoadStatus, PartialFailure};
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{filter, SearchQuery};
pub use launch::{FlightNumber, LaunchRecord, LaunchSet};
pub use logging::init_logging;
pub use selection::SelectionStore;
pub use source::{HttpFetcher, LaunchFetcher, SourceKind, TransportError};
pub use state::{AppState, Event, ListView};
pub use view::{format_for_display, LaunchDate, PayloadMass, ViewFields};
