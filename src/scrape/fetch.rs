//! Playlist page retrieval

use thiserror::Error;

/// Failure to retrieve the playlist page. Fatal to the run: without the
/// page there is nothing to segment.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Fetch the page body as text. One blocking GET, no retries.
pub fn fetch_page(url: &str) -> Result<String, FetchError> {
    log::info!("Fetching {}", url);

    let response = reqwest::blocking::get(url).map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    log::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
