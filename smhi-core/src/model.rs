use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    ForecastError,
    catalog::{ParameterDescription, parameter_description},
    symbol::{WeatherSymbol, weather_symbol},
};

/// A point forecast as returned by the API, roughly ten days of time series
/// data. See <https://opendata.smhi.se/apidocs/metfcst/get-forecast.html>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub approved_time: DateTime<Utc>,
    pub reference_time: DateTime<Utc>,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub time_series: Vec<TimeSeriesItem>,
}

/// The forecast area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Vec<Point>,
}

/// A `[longitude, latitude]` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn lon(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }
}

/// Forecast values valid at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesItem {
    pub valid_time: DateTime<Utc>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// One named quantity of a time series item, e.g. temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub level_type: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub unit: String,
    pub values: Vec<f64>,
}

impl Parameter {
    /// Catalog documentation for this parameter, if the code is known.
    pub fn description(&self) -> Option<&'static ParameterDescription> {
        parameter_description(&self.name)
    }
}

impl Forecast {
    pub fn from_json_str(json: &str) -> Result<Self, ForecastError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_slice(json: &[u8]) -> Result<Self, ForecastError> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Serialize using the same schema the API responds with.
    pub fn to_json_pretty(&self) -> Result<String, ForecastError> {
        serde_json::to_string_pretty(self).map_err(ForecastError::Serialize)
    }

    /// Read a forecast previously saved to, or downloaded as, a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ForecastError> {
        let path = path.as_ref();
        let buf = fs::read(path).map_err(|source| ForecastError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&buf)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ForecastError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| ForecastError::File {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl TimeSeriesItem {
    /// First parameter with the given name.
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// First value of the named parameter, `None` if it is absent.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.param(name).and_then(|p| p.values.first().copied())
    }

    /// First value of the named parameter, or `0.0` if it is absent.
    pub fn number_param(&self, name: &str) -> f64 {
        self.value(name).unwrap_or(0.0)
    }

    /// Like [`Self::number_param`], truncated toward zero.
    pub fn integer_param(&self, name: &str) -> i64 {
        self.number_param(name) as i64
    }

    /// Air temperature in °C.
    pub fn temperature(&self) -> f64 {
        self.number_param("t")
    }

    /// Maximum precipitation intensity in mm/h.
    pub fn max_precipitation(&self) -> f64 {
        self.number_param("pmax")
    }

    /// Wind speed in m/s.
    pub fn wind_speed(&self) -> f64 {
        self.number_param("ws")
    }

    pub fn weather_symbol(&self) -> WeatherSymbol {
        weather_symbol(self.integer_param("Wsymb2"))
    }
}
