use crate::{Config, Forecast, ForecastError, Location, SmhiClient};
use async_trait::async_trait;
use std::{fmt::Debug, path::PathBuf};

pub mod file;
pub mod live;

pub use file::FileSource;
pub use live::LiveSource;

/// Somewhere a forecast can be read from.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn forecast(&self) -> Result<Forecast, ForecastError>;

    /// Short human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// Pick the source for a run.
///
/// A file always wins over coordinates. Without explicit coordinates the
/// configured default location is used, falling back to `0, 0`.
pub fn source_from_config(
    file: Option<PathBuf>,
    location: Option<Location>,
    config: &Config,
) -> Box<dyn ForecastSource> {
    if let Some(path) = file {
        return Box::new(FileSource::new(path));
    }

    let location = location
        .or(config.default_location)
        .unwrap_or_default();

    let client = match config.base_url.as_deref() {
        Some(url) => SmhiClient::with_base_url(url),
        None => SmhiClient::new(),
    };

    Box::new(LiveSource::new(client, location))
}
