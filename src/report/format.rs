//! Human-readable status lines printed while generating.
//!
//! Kept apart from the generators so the wording can change without touching
//! the data path.

use crate::domain::{GenerationSummary, Indicator};

pub const START_LINE: &str = "Generating district-level map data...";
pub const DONE_LINE: &str = "\n[DONE] All map data generated successfully!";

/// Final line for a run; only a full run over every indicator gets one.
pub fn closing_line(indicators: &[Indicator]) -> Option<&'static str> {
    Indicator::ALL
        .iter()
        .all(|i| indicators.contains(i))
        .then_some(DONE_LINE)
}

/// One `[OK]` line per finished generator.
pub fn format_summary(summary: &GenerationSummary) -> String {
    match summary.indicator {
        Indicator::Poverty => format!(
            "[OK] Generated poverty map data: {} depts, {} districts",
            summary.departments,
            summary.districts.unwrap_or(0)
        ),
        Indicator::Gdp => format!(
            "[OK] Generated GDP map data: {} departments",
            summary.departments
        ),
        Indicator::Inflation => format!(
            "[OK] Generated inflation map data: {} departments",
            summary.departments
        ),
    }
}
