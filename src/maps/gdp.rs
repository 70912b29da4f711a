//! GDP growth map derived from the national nowcast.

use crate::data::{VariationRange, regional_values};
use crate::domain::{DepartmentGdp, GdpMapDocument, GenerationSummary, Indicator, MapConfig, NationalGdp, Nowcast};
use crate::error::AppError;
use crate::io::{load_nowcast, write_map_json};
use crate::maps::national_metadata;
use crate::report::sort_descending_by;

pub const GDP_NOTE: &str = "Departmental values are NTL-weighted estimates from national nowcast";
const GDP_DECIMALS: u32 = 2;

pub fn department_growth(national: f64) -> Vec<DepartmentGdp> {
    let mut departments: Vec<DepartmentGdp> = regional_values(national, VariationRange::GDP, GDP_DECIMALS)
        .into_iter()
        .map(|(code, name, value)| DepartmentGdp {
            code: code.to_string(),
            name: name.to_string(),
            gdp_growth_yoy: value,
        })
        .collect();

    sort_descending_by(&mut departments, |d| d.gdp_growth_yoy);
    departments
}

pub fn build_gdp_document(nowcast: &Nowcast) -> GdpMapDocument {
    GdpMapDocument {
        metadata: national_metadata("gdp_growth_yoy", &nowcast.target_period, GDP_NOTE),
        national: NationalGdp {
            gdp_growth_yoy: nowcast.national.clone(),
        },
        departments: department_growth(nowcast.value),
    }
}

pub fn generate_gdp(config: &MapConfig) -> Result<GenerationSummary, AppError> {
    let input = config.gdp_input();
    log::info!("reading GDP nowcast from {}", input.display());
    let nowcast = load_nowcast(&input)?;
    log::debug!("GDP nowcast {} for {}", nowcast.value, nowcast.target_period);

    let document = build_gdp_document(&nowcast);

    let output = config.output_path(Indicator::Gdp);
    write_map_json(&output, &document)?;
    log::info!("wrote {}", output.display());

    Ok(GenerationSummary {
        indicator: Indicator::Gdp,
        output,
        departments: document.departments.len(),
        districts: None,
    })
}
