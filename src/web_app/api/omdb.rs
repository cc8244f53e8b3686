// web_app/api/omdb.rs - OMDb API client
//
// Server-side client for the third-party movie database. A single client
// is initialized at startup and shared across workers; the reqwest handle
// inside it is cheaply clonable and pools connections.

use std::env;
use std::sync::{Mutex, OnceLock};

use thiserror::Error;

use crate::web_app::model::{ApiStatus, MovieDetail, MovieSummary, SearchResponse};

/// Public OMDb endpoint, overridable via `OMDB_BASE_URL`
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

static CLIENT: OnceLock<OmdbClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<OmdbClient>> = Mutex::new(None);

#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("OMDB_API_KEY is not set")]
    MissingApiKey,
    #[error("request to OMDb failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not decode OMDb response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("OMDb rejected the request: {0}")]
    Api(String),
}

/// Initialize the global OMDb client
pub fn init_client(client: OmdbClient) {
    tracing::info!("Initializing global OMDb client");
    if CLIENT.set(client).is_err() {
        tracing::warn!("OMDb client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: OmdbClient) {
    let mut guard = TEST_CLIENT_OVERRIDE.lock().unwrap();
    *guard = Some(client);
}

/// Get the global OMDb client
pub fn get_client() -> Option<OmdbClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE.lock().unwrap();
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    CLIENT.get().cloned()
}

/// Handle for the OMDb search and lookup endpoints
#[derive(Clone, Debug)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from the environment
    ///
    /// `OMDB_API_KEY` is required; `OMDB_BASE_URL` falls back to the
    /// public endpoint.
    pub fn from_env() -> Result<Self, OmdbError> {
        let api_key = env::var("OMDB_API_KEY").map_err(|_| OmdbError::MissingApiKey)?;
        let base_url =
            env::var("OMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, api_key))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the catalog (`s=` request)
    ///
    /// A no-match rejection ("Movie not found!", "Too many results.") is an
    /// empty result list; other rejections such as a bad credential are
    /// surfaced as [`OmdbError::Api`].
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("s", query), ("apikey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        if parsed.is_success() {
            return Ok(parsed.search);
        }

        let message = parsed
            .error
            .unwrap_or_else(|| "unknown OMDb error".to_string());
        if is_no_match(&message) {
            tracing::debug!("OMDb search for '{}' matched nothing: {}", query, message);
            Ok(Vec::new())
        } else {
            Err(OmdbError::Api(message))
        }
    }

    /// Fetch the expanded record for one identifier (`i=` request)
    pub async fn lookup(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("i", imdb_id), ("apikey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // Lookup bodies have no envelope; probe the status flag first.
        let status: ApiStatus = serde_json::from_str(&body)?;
        if !status.is_success() {
            let message = status
                .error
                .unwrap_or_else(|| "unknown OMDb error".to_string());
            return Err(OmdbError::Api(message));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn is_no_match(message: &str) -> bool {
    message.eq_ignore_ascii_case("Movie not found!")
        || message.eq_ignore_ascii_case("Too many results.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_classification() {
        assert!(is_no_match("Movie not found!"));
        assert!(is_no_match("Too many results."));
        assert!(!is_no_match("Invalid API key!"));
        assert!(!is_no_match("Request limit reached!"));
    }

    // Single test so the env-var mutations stay ordered; the parallel
    // runner would otherwise interleave them.
    #[test]
    fn test_from_env_configuration() {
        env::remove_var("OMDB_API_KEY");
        env::remove_var("OMDB_BASE_URL");
        assert!(matches!(
            OmdbClient::from_env(),
            Err(OmdbError::MissingApiKey)
        ));

        env::set_var("OMDB_API_KEY", "test-key");
        env::set_var("OMDB_BASE_URL", "http://127.0.0.1:9/");
        let client = OmdbClient::from_env().unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/");

        env::remove_var("OMDB_BASE_URL");
        let client = OmdbClient::from_env().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);

        env::remove_var("OMDB_API_KEY");
    }
}
