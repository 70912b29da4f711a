//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initialises logging
//! - runs the requested generators in a fixed order
//! - prints one status line per generator

use clap::Parser;

use crate::cli::{Command, MapArgs};
use crate::domain::{Indicator, MapConfig};
use crate::error::AppError;
use crate::report::{START_LINE, closing_line, format_summary};

pub mod pipeline;

/// Entry point for the `district-maps` binary.
pub fn run() -> Result<(), AppError> {
    // A bare `district-maps` (or one with only flags) means `district-maps all`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let (args, indicators): (MapArgs, &[Indicator]) = match cli.command {
        Command::All(args) => (args, &Indicator::ALL),
        Command::Poverty(args) => (args, &[Indicator::Poverty]),
        Command::Gdp(args) => (args, &[Indicator::Gdp]),
        Command::Inflation(args) => (args, &[Indicator::Inflation]),
    };

    init_logging(args.verbose);
    let config = map_config_from_args(&args);
    log::debug!("config: {config:?}");

    println!("{START_LINE}");
    pipeline::run_generators(indicators, &config, |summary| {
        println!("{}", format_summary(summary));
    })?;

    if let Some(line) = closing_line(indicators) {
        println!("{line}");
    }
    Ok(())
}

pub fn map_config_from_args(args: &MapArgs) -> MapConfig {
    MapConfig {
        data_dir: args.data_dir.clone(),
        geo_dir: args.geo_dir.clone(),
        poverty_year: args.year,
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // `RUST_LOG` wins when set. A second init (tests) is harmless.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).try_init();
}

/// Rewrite argv so the binary defaults to `all`.
///
/// Rules:
/// - `district-maps`                     -> `district-maps all`
/// - `district-maps --geo-dir out ...`   -> `district-maps all --geo-dir out ...`
/// - `district-maps --help/--version/-h` -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("all".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "all".to_string());
    }
    argv
}
