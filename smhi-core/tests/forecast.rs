//! Parsing of a recorded point forecast document.

use smhi_core::{Forecast, ForecastError};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/data.json");

fn fixture() -> Forecast {
    Forecast::load(FIXTURE).expect("fixture must parse")
}

#[test]
fn parse_forecast() {
    let forecast = fixture();

    let item = &forecast.time_series[10];
    assert_eq!(item.temperature(), 18.6);
    assert_eq!(item.max_precipitation(), 2.6);
    assert_eq!(item.wind_speed(), 5.6);

    let symbol = item.weather_symbol();
    assert_eq!(symbol.value, 19);
    assert_eq!(symbol.meaning, "Moderate rain");
    assert_eq!(symbol.fixed_width(), "🌧 ");
}

#[test]
fn parse_metadata_and_geometry() {
    let forecast = fixture();

    assert_eq!(forecast.approved_time.to_rfc3339(), "2024-06-01T10:06:31+00:00");
    assert_eq!(forecast.reference_time.to_rfc3339(), "2024-06-01T10:00:00+00:00");
    assert_eq!(forecast.geometry.kind, "Point");
    assert_eq!(forecast.geometry.coordinates.len(), 1);
    assert_eq!(forecast.geometry.coordinates[0].lon(), 16.158903);
    assert_eq!(forecast.geometry.coordinates[0].lat(), 58.57812);
    assert_eq!(forecast.time_series.len(), 14);
}

#[test]
fn time_series_is_ordered() {
    let forecast = fixture();
    assert!(
        forecast
            .time_series
            .windows(2)
            .all(|w| w[0].valid_time < w[1].valid_time)
    );
}

#[test]
fn every_fixture_parameter_is_documented() {
    let forecast = fixture();
    for item in &forecast.time_series {
        for p in &item.parameters {
            assert!(p.description().is_some(), "{} has no description", p.name);
        }
    }
}

#[test]
fn save_then_load_is_identical() {
    let forecast = fixture();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.json");

    forecast.save(&path).unwrap();
    let reloaded = Forecast::load(&path).unwrap();

    assert_eq!(reloaded, forecast);
}

#[test]
fn serialized_form_uses_api_field_names() {
    let json = fixture().to_json_pretty().unwrap();
    for key in ["approvedTime", "referenceTime", "timeSeries", "validTime", "levelType"] {
        assert!(json.contains(key), "missing {key}");
    }
    assert!(json.contains(r#""type": "Point""#));
}

#[test]
fn load_missing_file() {
    let err = Forecast::load("testdata/does-not-exist.json").unwrap_err();
    assert!(matches!(err, ForecastError::File { .. }));
}
