//! Free-text narrowing of a launch list.
//!
//! A [`SearchQuery`] is lowercased once, when it is created from user input.
//! A launch passes when its mission name or rocket name contains the query,
//! ignoring case. The empty query passes everything.

use serde::{Deserialize, Serialize};

use crate::launch::LaunchRecord;

/// Normalized search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize raw user input into a query.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the query filters nothing out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl LaunchRecord {
    /// Check if this launch passes `query`.
    #[must_use]
    pub fn matches(&self, query: &SearchQuery) -> bool {
        if query.is_empty() {
            return true;
        }
        self.mission_name.to_lowercase().contains(query.as_str())
            || self.rocket_name().to_lowercase().contains(query.as_str())
    }
}

/// Keep the launches that pass `query`, in their original order.
///
/// Accepts any iterator of borrowed launches, so the output of one call can
/// be fed straight into another.
pub fn filter<'a, I>(launches: I, query: &SearchQuery) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    launches
        .into_iter()
        .filter(|launch| launch.matches(query))
        .collect()
}
