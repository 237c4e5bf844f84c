//! Core launch types for launchdeck.
//!
//! This module defines the launch record as decoded from the v3 launch API
//! and the merged, ordered set of records a session works with.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::aggregator::FetchError;

/// Identifier of a launch, unique within a [`LaunchSet`].
pub type FlightNumber = u32;

/// One flight as returned by either launch collection.
///
/// Only `flight_number` and `mission_name` are required. Every nested object
/// defaults when absent so that a sparse record still decodes; the view layer
/// turns the gaps into sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Identifier of the flight.
    pub flight_number: FlightNumber,

    /// Human-readable mission name.
    pub mission_name: String,

    /// Rocket flown on this mission.
    #[serde(default)]
    pub rocket: Rocket,

    /// Where the launch took place (or will take place).
    #[serde(default)]
    pub launch_site: Option<LaunchSite>,

    /// Local launch timestamp. Not meaningful for unscheduled flights.
    #[serde(default)]
    pub launch_date_local: String,

    /// Whether the flight has not happened yet.
    #[serde(default)]
    pub upcoming: bool,

    /// Outcome of the launch, absent when unknown.
    #[serde(default)]
    pub launch_success: Option<bool>,

    /// Free-form mission description.
    #[serde(default)]
    pub details: Option<String>,

    /// External links.
    #[serde(default)]
    pub links: LaunchLinks,
}

/// Rocket information of a launch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    /// Rocket name, e.g. "Falcon 9".
    #[serde(default)]
    pub rocket_name: String,

    /// Second stage and its payloads.
    #[serde(default)]
    pub second_stage: Option<SecondStage>,
}

/// Second stage of a rocket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondStage {
    /// Payloads carried, in manifest order.
    #[serde(default)]
    pub payloads: Vec<Payload>,
}

/// A single payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Mass in kilograms, when published.
    #[serde(default)]
    pub payload_mass_kg: Option<f64>,
}

/// Launch site information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSite {
    /// Full site name, e.g. "Kwajalein Atoll Omelek Island".
    #[serde(default)]
    pub site_name_long: String,
}

/// External links of a launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchLinks {
    /// Webcast or recording.
    #[serde(default)]
    pub video_link: Option<String>,

    /// Wikipedia article.
    #[serde(default)]
    pub wikipedia: Option<String>,
}

impl LaunchRecord {
    /// Create a minimal record with the given identifier and mission name.
    #[must_use]
    pub fn new(flight_number: FlightNumber, mission_name: impl Into<String>) -> Self {
        Self {
            flight_number,
            mission_name: mission_name.into(),
            rocket: Rocket::default(),
            launch_site: None,
            launch_date_local: String::new(),
            upcoming: false,
            launch_success: None,
            details: None,
            links: LaunchLinks::default(),
        }
    }

    /// Name of the rocket, empty when the API omitted it.
    #[must_use]
    pub fn rocket_name(&self) -> &str {
        &self.rocket.rocket_name
    }

    /// Long name of the launch site, if known.
    #[must_use]
    pub fn site_name(&self) -> Option<&str> {
        self.launch_site
            .as_ref()
            .map(|site| site.site_name_long.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Payloads of the second stage, empty when absent.
    #[must_use]
    pub fn payloads(&self) -> &[Payload] {
        self.rocket
            .second_stage
            .as_ref()
            .map(|stage| stage.payloads.as_slice())
            .unwrap_or_default()
    }
}

/// The merged, ordered collection of launches for a session.
///
/// Order is all past records in retrieval order followed by all upcoming
/// records in retrieval order. A set is built once per successful load and
/// replaced wholesale, never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LaunchSet {
    records: Vec<LaunchRecord>,
}

impl LaunchSet {
    /// Concatenate past and upcoming records into one set.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::DuplicateFlightNumber`] if two records share a
    /// flight number.
    pub fn from_sources(
        past: Vec<LaunchRecord>,
        upcoming: Vec<LaunchRecord>,
    ) -> Result<Self, FetchError> {
        let mut records = past;
        records.extend(upcoming);
        Self::from_records(records)
    }

    /// Build a set from already ordered records.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::DuplicateFlightNumber`] if two records share a
    /// flight number.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, FetchError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.flight_number) {
                return Err(FetchError::DuplicateFlightNumber {
                    flight_number: record.flight_number,
                });
            }
        }
        Ok(Self { records })
    }

    /// Number of launches in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the set holds no launches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over launches in set order.
    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    /// All launches as a slice.
    #[must_use]
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// First launch with the given flight number.
    #[must_use]
    pub fn find(&self, flight_number: FlightNumber) -> Option<&LaunchRecord> {
        self.records
            .iter()
            .find(|record| record.flight_number == flight_number)
    }
}

impl<'a> IntoIterator for &'a LaunchSet {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
