//! Plain-text tables for terminal output.

use std::io::{self, Write};

use chrono::{Local, TimeZone};
use comfy_table::{ContentArrangement, Table, presets::NOTHING};
use smhi_core::{Forecast, PARAMETER_DESCRIPTIONS};

const PADDING: u16 = 2;

/// Borderless table with `PADDING` spaces between columns, laid out like a
/// tab writer.
fn plain_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header.to_vec());
    table
}

/// Write `table` with the last column unpadded and no trailing blanks.
fn write_table<W: Write>(w: &mut W, mut table: Table) -> io::Result<()> {
    let columns = table.column_iter().count();
    for (idx, column) in table.column_iter_mut().enumerate() {
        let right = if idx + 1 == columns { 0 } else { PADDING };
        column.set_padding((0, right));
    }

    for line in table.lines() {
        writeln!(w, "{}", line.trim_end())?;
    }
    Ok(())
}

/// One row per time series item, timestamps shown in `tz`.
pub fn forecast_table<Tz: TimeZone>(forecast: &Forecast, tz: &Tz) -> Table
where
    Tz::Offset: std::fmt::Display,
{
    let mut table = plain_table(&["Time", "Weather", "Temperature", "Max precipitation", "Wind speed"]);

    for item in &forecast.time_series {
        let weather = item.weather_symbol();
        table.add_row(vec![
            item.valid_time.with_timezone(tz).format("%a %H:%M").to_string(),
            format!("{} {}", weather.fixed_width(), weather.meaning),
            format!("{:.1}°C", item.temperature()),
            format!("{:.1} mm/h", item.max_precipitation()),
            format!("{:.1} m/s", item.wind_speed()),
        ]);
    }

    table
}

/// Print the forecast with timestamps in local time.
pub fn print_forecast<W: Write>(w: &mut W, forecast: &Forecast) -> io::Result<()> {
    write_table(w, forecast_table(forecast, &Local))
}

pub fn parameter_table() -> Table {
    let mut table = plain_table(&["Name", "Level type", "Level", "Unit", "Description", "Values"]);
    for d in PARAMETER_DESCRIPTIONS {
        table.add_row(vec![
            d.name.to_string(),
            d.level_type.to_string(),
            d.level.to_string(),
            d.unit.to_string(),
            d.description.to_string(),
            d.value_range.to_string(),
        ]);
    }
    table
}

/// Print the parameter catalog.
pub fn print_parameters<W: Write>(w: &mut W) -> io::Result<()> {
    write_table(w, parameter_table())
}
