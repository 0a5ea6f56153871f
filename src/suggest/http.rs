//! HTTP suggestion endpoint client
//!
//! Issues `GET <endpoint>?q=<keyword>` and expects a JSON array of tag names.

use std::future::Future;

use reqwest::{Client, Url};

use super::{FetchError, SuggestionService};
use crate::error::TagError;

/// Query parameter carrying the keyword
const KEYWORD_PARAM: &str = "q";

#[derive(Debug, Clone)]
pub struct HttpSuggestionClient {
    client: Client,
    endpoint: Url,
    max_suggestions: usize,
}

impl HttpSuggestionClient {
    pub fn new(endpoint: &str, max_suggestions: usize) -> Result<Self, TagError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TagError::HttpClient(e.to_string()))?;
        Self::with_client(client, endpoint, max_suggestions)
    }

    /// Create a client around a preconfigured `reqwest::Client`
    pub fn with_client(
        client: Client,
        endpoint: &str,
        max_suggestions: usize,
    ) -> Result<Self, TagError> {
        let endpoint = Url::parse(endpoint).map_err(|e| TagError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(TagError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme `{}`", endpoint.scheme()),
            });
        }

        Ok(Self {
            client,
            endpoint,
            max_suggestions,
        })
    }

    /// Endpoint URL with the keyword appended as `q`
    ///
    /// Existing query parameters are kept; an empty keyword is sent as `q=`.
    pub fn request_url(&self, keyword: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(KEYWORD_PARAM, keyword);
        url
    }

    pub async fn fetch(&self, keyword: &str) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(self.request_url(keyword))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let mut names = parse_suggestions(&body)?;
        names.truncate(self.max_suggestions);
        Ok(names)
    }
}

/// Decode a suggestion response body
pub fn parse_suggestions(body: &[u8]) -> Result<Vec<String>, FetchError> {
    serde_json::from_slice::<Vec<String>>(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

impl SuggestionService for HttpSuggestionClient {
    fn suggest(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send {
        self.fetch(keyword)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
