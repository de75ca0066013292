use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while obtaining a forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The API could not be reached or the response body could not be read.
    #[error("request to forecast API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK.
    #[error("status is not ok ({status}): {body}")]
    Status { status: StatusCode, body: String },

    /// The document is not valid JSON or does not have the forecast shape.
    #[error("failed to parse forecast: {0}")]
    Parse(#[from] serde_json::Error),

    /// The forecast could not be written out as JSON.
    #[error("failed to serialize forecast: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A local forecast file could not be read or written.
    #[error("forecast file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
