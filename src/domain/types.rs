//! Shared domain types.
//!
//! Record and document types mirror the JSON consumed by the choropleth map
//! one-to-one, so they are used both while building documents and when
//! reading a generated file back.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Which map indicator a generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Poverty,
    Gdp,
    Inflation,
}

impl Indicator {
    /// Run order when all generators are requested.
    pub const ALL: [Indicator; 3] = [Indicator::Poverty, Indicator::Gdp, Indicator::Inflation];

    pub fn output_file_name(self) -> &'static str {
        match self {
            Indicator::Poverty => "poverty_map_data.json",
            Indicator::Gdp => "gdp_map_data.json",
            Indicator::Inflation => "inflation_map_data.json",
        }
    }
}

/// Resolved configuration for a generator run.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Directory holding the source CSV/JSON inputs.
    pub data_dir: PathBuf,
    /// Directory the map documents are written to.
    pub geo_dir: PathBuf,
    /// Year stamped into the poverty document metadata.
    pub poverty_year: i32,
}

impl MapConfig {
    pub fn poverty_input(&self) -> PathBuf {
        self.data_dir.join("poverty_districts_full.csv")
    }

    pub fn gdp_input(&self) -> PathBuf {
        self.data_dir.join("gdp_nowcast.json")
    }

    pub fn inflation_input(&self) -> PathBuf {
        self.data_dir.join("inflation_nowcast.json")
    }

    pub fn output_path(&self, indicator: Indicator) -> PathBuf {
        self.geo_dir.join(indicator.output_file_name())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("public/assets/data"),
            geo_dir: PathBuf::from("public/assets/geo"),
            poverty_year: 2025,
        }
    }
}

/// One row of the district poverty table, as read from CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct PovertyRow {
    pub ubigeo: String,
    pub department_code: String,
    /// Nowcast poverty rate as a fraction in `[0, 1]`.
    pub poverty_rate: f64,
    pub ntl_weight: f64,
    pub year: i32,
}

/// District-level poverty record emitted in the map document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictPoverty {
    pub ubigeo: String,
    pub department_code: String,
    pub department_name: String,
    /// Percentage, 1 decimal.
    pub poverty_rate: f64,
    pub ntl_weight: f64,
    pub year: i32,
}

/// Department-level poverty aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPoverty {
    pub code: String,
    pub name: String,
    pub poverty_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PovertyMetadata {
    pub indicator: String,
    pub unit: String,
    pub year: i32,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PovertyMapDocument {
    pub metadata: PovertyMetadata,
    pub departments: Vec<DepartmentPoverty>,
    pub districts: Vec<DistrictPoverty>,
}

/// Metadata block shared by the national-nowcast documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalMetadata {
    pub indicator: String,
    pub unit: String,
    pub period: String,
    pub source: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentGdp {
    pub code: String,
    pub name: String,
    pub gdp_growth_yoy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalGdp {
    pub gdp_growth_yoy: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpMapDocument {
    pub metadata: NationalMetadata,
    pub national: NationalGdp,
    pub departments: Vec<DepartmentGdp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentInflation {
    pub code: String,
    pub name: String,
    pub inflation_mom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalInflation {
    pub inflation_mom: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationMapDocument {
    pub metadata: NationalMetadata,
    pub national: NationalInflation,
    pub departments: Vec<DepartmentInflation>,
}

/// A national nowcast figure and the period it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Nowcast {
    pub value: f64,
    /// `value` exactly as it appeared upstream (`3` stays `3`, not `3.0`).
    pub national: Number,
    pub target_period: String,
}

/// What a generator produced, for status reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub indicator: Indicator,
    pub output: PathBuf,
    pub departments: usize,
    /// Only the poverty generator emits district records.
    pub districts: Option<usize>,
}
