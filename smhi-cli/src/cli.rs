use std::{ffi::OsString, io, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{CustomType, Text};
use smhi_core::{Config, Location, source_from_config};
use tracing::info;

use crate::render;

/// Flags that are also accepted with a single dash, e.g. `-lon 18.07`.
const LONG_FLAGS: &[&str] = &["lon", "lat", "file", "save"];

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "smhi",
    version,
    about = "Ten day point forecast from SMHI",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(flatten)]
    pub show: ShowArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Print the forecast table (the default action).
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Longitude
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Latitude
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Read data from file instead of the API; lon/lat are ignored.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Also write the forecast JSON to this path.
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a default location and an optional API host.
    Configure,

    /// List the forecast parameter codes.
    Params,
}

impl Cli {
    /// Parse process arguments, accepting `-lon` style flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure()?,
            Some(Command::Params) => render::print_parameters(&mut io::stdout().lock())?,
            None => self.show.run().await?,
        }

        Ok(())
    }
}

impl ShowArgs {
    /// Coordinates from the flags; a missing one is taken from `fallback`.
    fn location(&self, fallback: Option<Location>) -> Option<Location> {
        if self.lon.is_none() && self.lat.is_none() {
            return None;
        }
        let fallback = fallback.unwrap_or_default();
        Some(Location {
            lon: self.lon.unwrap_or(fallback.lon),
            lat: self.lat.unwrap_or(fallback.lat),
        })
    }

    async fn run(self) -> anyhow::Result<()> {
        let config = if self.file.is_some() {
            Config::default()
        } else {
            Config::load()?
        };

        let location = self.location(config.default_location);
        let source = source_from_config(self.file, location, &config);
        info!(source = %source.describe(), "reading forecast");

        let forecast = source
            .forecast()
            .await
            .with_context(|| format!("Failed to read forecast from {}", source.describe()))?;

        if let Some(path) = &self.save {
            forecast
                .save(path)
                .with_context(|| format!("Failed to save forecast to {}", path.display()))?;
        }

        render::print_forecast(&mut io::stdout().lock(), &forecast)?;
        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let current = config.default_location.unwrap_or_default();

    let lon = CustomType::<f64>::new("Longitude:")
        .with_default(current.lon)
        .with_error_message("Please enter a decimal number")
        .prompt()?;
    let lat = CustomType::<f64>::new("Latitude:")
        .with_default(current.lat)
        .with_error_message("Please enter a decimal number")
        .prompt()?;
    let base_url = Text::new("API host (blank for the SMHI default):")
        .with_default(config.base_url.as_deref().unwrap_or_default())
        .prompt()?;

    config.set_default_location(lon, lat);
    config.set_base_url(&base_url);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Rewrite single-dash long flags (`-lon`, `-file=x`) to their `--` form.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{s}"))
            } else {
                arg
            }
        })
        .collect()
}
