//! Month-over-month inflation map derived from the national nowcast.

use crate::data::{VariationRange, regional_values};
use crate::domain::{
    DepartmentInflation, GenerationSummary, Indicator, InflationMapDocument, MapConfig, NationalInflation, Nowcast,
};
use crate::error::AppError;
use crate::io::{load_nowcast, write_map_json};
use crate::maps::national_metadata;
use crate::report::sort_descending_by;

pub const INFLATION_NOTE: &str = "Departmental values are estimates based on regional food price indices";
const INFLATION_DECIMALS: u32 = 3;

pub fn department_inflation(national: f64) -> Vec<DepartmentInflation> {
    let mut departments: Vec<DepartmentInflation> =
        regional_values(national, VariationRange::INFLATION, INFLATION_DECIMALS)
            .into_iter()
            .map(|(code, name, value)| DepartmentInflation {
                code: code.to_string(),
                name: name.to_string(),
                inflation_mom: value,
            })
            .collect();

    sort_descending_by(&mut departments, |d| d.inflation_mom);
    departments
}

pub fn build_inflation_document(nowcast: &Nowcast) -> InflationMapDocument {
    InflationMapDocument {
        metadata: national_metadata("inflation_mom", &nowcast.target_period, INFLATION_NOTE),
        national: NationalInflation {
            inflation_mom: nowcast.national.clone(),
        },
        departments: department_inflation(nowcast.value),
    }
}

pub fn generate_inflation(config: &MapConfig) -> Result<GenerationSummary, AppError> {
    let input = config.inflation_input();
    log::info!("reading inflation nowcast from {}", input.display());
    let nowcast = load_nowcast(&input)?;
    log::debug!("inflation nowcast {} for {}", nowcast.value, nowcast.target_period);

    let document = build_inflation_document(&nowcast);

    let output = config.output_path(Indicator::Inflation);
    write_map_json(&output, &document)?;
    log::info!("wrote {}", output.display());

    Ok(GenerationSummary {
        indicator: Indicator::Inflation,
        output,
        departments: document.departments.len(),
        districts: None,
    })
}
