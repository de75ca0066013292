//! Reference documentation for the parameter codes found in forecast
//! time series items.
//!
//! See <https://opendata.smhi.se/apidocs/metfcst/parameters.html>.

/// Describes one forecast parameter code, e.g. `t` or `ws`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDescription {
    pub name: &'static str,
    pub level_type: &'static str,
    pub level: i32,
    pub unit: &'static str,
    pub description: &'static str,
    /// Free-text documentation of the legal values.
    pub value_range: &'static str,
}

const fn param(
    name: &'static str,
    level_type: &'static str,
    level: i32,
    unit: &'static str,
    description: &'static str,
    value_range: &'static str,
) -> ParameterDescription {
    ParameterDescription { name, level_type, level, unit, description, value_range }
}

const DECIMAL: &str = "Decimal number, one decimal";

/// All parameter codes documented for the `pmp3g` point forecast.
pub const PARAMETER_DESCRIPTIONS: &[ParameterDescription] = &[
    param("msl", "hmsl", 0, "hPa", "Air pressure", DECIMAL),
    param("t", "hl", 2, "C", "Air temperature", DECIMAL),
    param("vis", "hl", 2, "km", "Horizontal visibility", DECIMAL),
    param("wd", "hl", 10, "degree", "Wind direction", "Integer"),
    param("ws", "hl", 10, "m/s", "Wind speed", DECIMAL),
    param("r", "hl", 2, "%", "Relative humidity", "Integer, 0-100"),
    param("tstm", "hl", 0, "%", "Thunder probability", "Integer, 0-100"),
    param("tcc_mean", "hl", 0, "octas", "Mean value of total cloud cover", "Integer, 0-8"),
    param("lcc_mean", "hl", 0, "octas", "Mean value of low level cloud cover", "Integer, 0-8"),
    param("mcc_mean", "hl", 0, "octas", "Mean value of medium level cloud cover", "Integer, 0-8"),
    param("hcc_mean", "hl", 0, "octas", "Mean value of high level cloud cover", "Integer, 0-8"),
    param("gust", "hl", 10, "m/s", "Wind gust speed", DECIMAL),
    param("pmin", "hl", 0, "mm/h", "Minimum precipitation intensity", DECIMAL),
    param("pmax", "hl", 0, "mm/h", "Maximum precipitation intensity", DECIMAL),
    param("spp", "hl", 0, "%", "Percent of precipitation in frozen form", "Integer, -9 or 0-100"),
    param("pcat", "hl", 0, "category", "Precipitation category", "Integer, 0-6"),
    param("pmean", "hl", 0, "mm/h", "Mean precipitation intensity", DECIMAL),
    param("pmedian", "hl", 0, "mm/h", "Median precipitation intensity", DECIMAL),
    param("wsymb2", "hl", 0, "code", "Weather symbol", "Integer, 1-27"),
];

/// Look up the documentation for a parameter code.
///
/// Matching ignores ASCII case since the API spells some codes differently
/// from its documentation (`Wsymb2` vs `wsymb2`).
pub fn parameter_description(name: &str) -> Option<&'static ParameterDescription> {
    PARAMETER_DESCRIPTIONS
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}
