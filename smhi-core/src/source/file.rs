use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::{Forecast, ForecastError};

use super::ForecastSource;

/// Forecast stored in a local JSON file with the API's schema.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ForecastSource for FileSource {
    async fn forecast(&self) -> Result<Forecast, ForecastError> {
        debug!(path = %self.path.display(), "loading forecast file");
        Forecast::load(&self.path)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
