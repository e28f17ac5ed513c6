//! Generic "GET a JSON document" helper used by the informational commands.
//!
//! Every lookup command goes through [`fetch_json`] so that the user agent,
//! status handling, and logging stay uniform. Failures are recoverable; the
//! caller decides what to show the user.

use reqwest::header::{HeaderMap, USER_AGENT};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_USER_AGENT: &str = "StudyBot/1.0 (Discord)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Fetches `url` and parses the body as JSON. Extra headers and query
/// parameters are optional; the default user agent is always attached first
/// so callers can still override it.
pub async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
    headers: Option<HeaderMap>,
    params: Option<&[(&str, &str)]>,
) -> Result<Value, FetchError> {
    let mut request = client.get(url).header(USER_AGENT, DEFAULT_USER_AGENT);
    if let Some(headers) = headers {
        request = request.headers(headers);
    }
    if let Some(params) = params {
        request = request.query(params);
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(target: "http", %status, url, "upstream returned non-success status");
        return Err(FetchError::Status(status));
    }
    response.json::<Value>().await.map_err(FetchError::Body)
}
