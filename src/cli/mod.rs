//! Command-line parsing for the map data generator.
//!
//! Argument parsing and command dispatch stay separate from the generators so
//! the library can be driven directly from tests.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "district-maps",
    version,
    about = "Generate department/district choropleth data from nowcast outputs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate poverty, GDP and inflation map data (the default).
    All(MapArgs),
    /// Generate the poverty map only.
    Poverty(MapArgs),
    /// Generate the GDP growth map only.
    Gdp(MapArgs),
    /// Generate the inflation map only.
    Inflation(MapArgs),
}

/// Options shared by every generator.
#[derive(Debug, Parser, Clone)]
pub struct MapArgs {
    /// Directory containing `poverty_districts_full.csv`, `gdp_nowcast.json`
    /// and `inflation_nowcast.json`.
    #[arg(long, value_name = "DIR", default_value = "public/assets/data")]
    pub data_dir: PathBuf,

    /// Directory the `*_map_data.json` files are written to.
    #[arg(long, value_name = "DIR", default_value = "public/assets/geo")]
    pub geo_dir: PathBuf,

    /// Year recorded in the poverty map metadata.
    #[arg(long, default_value_t = 2025)]
    pub year: i32,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
