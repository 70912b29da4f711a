//! Map document generators.
//!
//! Each generator is a single pass: load input, build the document in memory,
//! then write it. Nothing is written if loading or parsing fails.

pub mod gdp;
pub mod inflation;
pub mod poverty;

pub use gdp::{build_gdp_document, generate_gdp};
pub use inflation::{build_inflation_document, generate_inflation};
pub use poverty::{build_poverty_document, generate_poverty};

use crate::domain::{GenerationSummary, Indicator, MapConfig, NationalMetadata};
use crate::error::AppError;

pub const NATIONAL_SOURCE: &str = "Qhawarina DFM Model (National)";

pub(crate) fn national_metadata(indicator: &str, period: &str, note: &str) -> NationalMetadata {
    NationalMetadata {
        indicator: indicator.to_string(),
        unit: "percent".to_string(),
        period: period.to_string(),
        source: NATIONAL_SOURCE.to_string(),
        note: note.to_string(),
    }
}

/// Run the generator for one indicator.
pub fn generate(indicator: Indicator, config: &MapConfig) -> Result<GenerationSummary, AppError> {
    match indicator {
        Indicator::Poverty => generate_poverty(config),
        Indicator::Gdp => generate_gdp(config),
        Indicator::Inflation => generate_inflation(config),
    }
}
