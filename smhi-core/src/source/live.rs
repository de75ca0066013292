use async_trait::async_trait;

use crate::{Forecast, ForecastError, Location, SmhiClient};

use super::ForecastSource;

/// Forecast fetched from the API for one coordinate.
#[derive(Debug, Clone)]
pub struct LiveSource {
    client: SmhiClient,
    location: Location,
}

impl LiveSource {
    pub fn new(client: SmhiClient, location: Location) -> Self {
        Self { client, location }
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

#[async_trait]
impl ForecastSource for LiveSource {
    async fn forecast(&self) -> Result<Forecast, ForecastError> {
        self.client
            .get_forecast(self.location.lon, self.location.lat)
            .await
    }

    fn describe(&self) -> String {
        format!("lon {:.6} lat {:.6}", self.location.lon, self.location.lat)
    }
}
