//! Core library for the `smhi` CLI.
//!
//! This crate defines:
//! - The SMHI point forecast data model and its accessors
//! - Reference tables for parameter codes and weather symbols
//! - An HTTP client for the forecast API
//! - Forecast sources (live API or local file) and on-disk configuration
//!
//! It is used by `smhi-cli`, but can also be reused by other binaries or services.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod symbol;

pub use catalog::{PARAMETER_DESCRIPTIONS, ParameterDescription, parameter_description};
pub use client::SmhiClient;
pub use config::{Config, Location};
pub use error::ForecastError;
pub use model::{Forecast, Geometry, Parameter, Point, TimeSeriesItem};
pub use source::{FileSource, ForecastSource, LiveSource, source_from_config};
pub use symbol::{WEATHER_SYMBOLS, WeatherSymbol, weather_symbol};
