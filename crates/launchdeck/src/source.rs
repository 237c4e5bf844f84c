//! Transport for the two launch collections.
//!
//! A [`LaunchFetcher`] returns the raw body of one collection. Decoding and
//! merging happen in the aggregator, so fetchers only decide whether the
//! retrieval succeeded at the transport level.

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// One of the two remote launch collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Launches that already happened.
    Past,
    /// Launches that are scheduled or planned.
    Upcoming,
}

impl SourceKind {
    /// Path of the collection relative to the API root.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Past => "launches/past",
            Self::Upcoming => "launches/upcoming",
        }
    }

    /// The other collection.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Past => Self::Upcoming,
            Self::Upcoming => Self::Past,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Past => write!(f, "past"),
            Self::Upcoming => write!(f, "upcoming"),
        }
    }
}

/// A retrieval that failed before a usable body arrived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {message}")]
    Request {
        /// URL that was requested.
        url: String,
        /// Description of what went wrong.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

/// Retrieves the raw body of a launch collection.
#[async_trait::async_trait]
pub trait LaunchFetcher: Send + Sync + std::fmt::Debug {
    /// Fetch one collection.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the collection could not be retrieved.
    async fn fetch(&self, kind: SourceKind) -> std::result::Result<String, TransportError>;
}

/// [`LaunchFetcher`] backed by a pooled HTTP client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Build a fetcher from API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of a collection.
    #[must_use]
    pub fn endpoint(&self, kind: SourceKind) -> String {
        format!("{}/{}", self.base_url, kind.path())
    }
}

#[async_trait::async_trait]
impl LaunchFetcher for HttpFetcher {
    async fn fetch(&self, kind: SourceKind) -> std::result::Result<String, TransportError> {
        let url = self.endpoint(kind);
        debug!(%kind, %url, "Fetching launch collection");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| TransportError::Request {
                    url: url.clone(),
                    message: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| TransportError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;

        trace!(%kind, bytes = body.len(), "Received launch collection");
        Ok(body)
    }
}
