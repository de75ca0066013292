use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::{Forecast, ForecastError};

/// Host serving the `pmp3g` point forecast.
pub const DEFAULT_BASE_URL: &str = "https://opendata-download-metfcst.smhi.se";

/// Client for the SMHI point forecast API.
#[derive(Debug, Clone)]
pub struct SmhiClient {
    base_url: String,
    http: Client,
}

impl Default for SmhiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SmhiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Talk to another host, e.g. a mirror or a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for the forecast at a longitude/latitude coordinate.
    pub fn forecast_url(&self, lon: f64, lat: f64) -> String {
        format!(
            "{}/api/category/pmp3g/version/2/geotype/point/lon/{lon:.6}/lat/{lat:.6}/data.json",
            self.base_url
        )
    }

    /// Request the 10 day forecast for a longitude/latitude coordinate.
    ///
    /// The coordinates are passed through as-is; the API decides which are
    /// inside its forecast area.
    #[instrument(skip(self))]
    pub async fn get_forecast(&self, lon: f64, lat: f64) -> Result<Forecast, ForecastError> {
        let url = self.forecast_url(lon, lat);
        debug!(%url, "requesting forecast");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "forecast response received");

        if status != StatusCode::OK {
            warn!(%status, "forecast request rejected");
            return Err(ForecastError::Status { status, body });
        }

        let forecast = Forecast::from_json_str(&body)?;
        debug!(items = forecast.time_series.len(), "forecast parsed");

        Ok(forecast)
    }
}
