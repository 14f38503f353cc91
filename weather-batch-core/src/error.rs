use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single per-city unit of work.
///
/// Every variant stays inside the unit that produced it: the orchestrator
/// collects these per city and never lets one unit's error touch another.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The API answered, but with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not JSON, or a required field is missing.
    #[error("unexpected response shape: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Writing the report file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
