//! Async JSON fetching.

use serde_json::{Map, Value};
use thiserror::Error;

/// User agent sent with fetch requests.
const USER_AGENT: &str = concat!("specimen/", env!("CARGO_PKG_VERSION"));

/// Error returned by [`fetch_data`].
///
/// A transparent wrapper over the HTTP client's own error: message and
/// source chain pass through unmodified. Failures are neither caught nor
/// classified here; connect errors, timeouts, and body-decode failures all
/// surface exactly as the client reports them.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct FetchError(#[from] reqwest::Error);

/// Fetch `url` with a single GET request and parse the body as a JSON
/// object.
///
/// A dedicated client is built for each call and dropped on every exit path,
/// along with the response handle, so no connection state outlives the call.
/// Non-success status codes are not rejected: whatever body the server sends
/// is handed to the JSON decoder, per the client's default behavior. There
/// is no retry, cancellation, or timeout beyond the client's defaults.
///
/// # Errors
///
/// Propagates the client's error unmodified when the client cannot be
/// built, the URL does not parse, the request fails to complete, or the
/// body does not decode as a JSON object.
pub async fn fetch_data(url: &str) -> Result<Map<String, Value>, FetchError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    tracing::debug!(url, "issuing GET request");
    let response = client.get(url).send().await?;
    tracing::debug!(status = %response.status(), "response received");

    let data = response.json().await?;
    Ok(data)
}
