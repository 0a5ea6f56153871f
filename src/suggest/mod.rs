//! Tag suggestion query service
//!
//! Defines the [`SuggestionService`] contract consumed by the autocomplete
//! worker, the fetch request/response messages, and the concrete sources:
//! an HTTP endpoint client and an in-memory ranking index.

use std::future::Future;
use std::path::Path;

use thiserror::Error;

use crate::error::TagError;

mod catalog;
mod http;
mod index;
mod worker;

pub use catalog::{CatalogFile, load_catalog, parse_catalog};
pub use http::{HttpSuggestionClient, parse_suggestions};
pub use index::{ArticleId, LocalSuggestions, TagIndex};
pub use worker::{SuggestionWorker, spawn_worker};

/// Errors that make a fetch fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure (connection refused, reset, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The body was not a JSON array of strings
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Superseded by a newer request before it completed
    #[error("Request cancelled")]
    Cancelled,
}

/// Fetch the controller wants issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Generation captured when the fetch was issued
    pub generation: u64,
    /// Keyword to query; empty asks for the most used tags
    pub keyword: String,
}

/// Outcome of a fetch, tagged with the generation that issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub generation: u64,
    pub result: Result<Vec<String>, FetchError>,
}

/// Source of ranked tag names
///
/// An empty keyword returns the most used tags. A non-empty keyword returns
/// tags containing it as a case-insensitive substring. Both are ordered by
/// usage count descending, then name ascending. No exclusion filtering
/// happens here.
pub trait SuggestionService: Send + Sync + 'static {
    fn suggest(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

/// Suggestion source selected by configuration
#[derive(Debug)]
pub enum SuggestionSource {
    Http(HttpSuggestionClient),
    Local(LocalSuggestions),
}

impl SuggestionSource {
    /// Build the source from an endpoint URL or a catalog file
    ///
    /// The endpoint wins when both are given.
    pub fn from_settings(
        endpoint_url: Option<&str>,
        catalog: Option<&Path>,
        max_suggestions: usize,
    ) -> Result<Self, TagError> {
        match (endpoint_url, catalog) {
            (Some(url), catalog) => {
                if let Some(path) = catalog {
                    log::warn!(
                        "both endpoint and catalog configured, ignoring catalog {}",
                        path.display()
                    );
                }
                Ok(SuggestionSource::Http(HttpSuggestionClient::new(
                    url,
                    max_suggestions,
                )?))
            }
            (None, Some(path)) => {
                let index = load_catalog(path)?;
                log::debug!("loaded {} tags from {}", index.len(), path.display());
                Ok(SuggestionSource::Local(LocalSuggestions::new(
                    index,
                    max_suggestions,
                )))
            }
            (None, None) => Err(TagError::NoSuggestionSource),
        }
    }
}

impl SuggestionService for SuggestionSource {
    fn suggest(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send {
        async move {
            match self {
                SuggestionSource::Http(client) => client.fetch(keyword).await,
                SuggestionSource::Local(local) => Ok(local.query(keyword)),
            }
        }
    }
}
