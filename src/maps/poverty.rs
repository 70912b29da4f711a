//! Poverty map: district records plus department means.

use crate::data::department_name;
use crate::domain::{
    DepartmentPoverty, DistrictPoverty, GenerationSummary, Indicator, MapConfig, PovertyMapDocument,
    PovertyMetadata, PovertyRow,
};
use crate::error::AppError;
use crate::io::{load_poverty_rows, write_map_json};
use crate::report::{mean_by_department, sort_descending_by, to_percent};

pub const POVERTY_SOURCE: &str = "Qhawarina GBR Model + NTL Disaggregation";

/// District records in source order.
pub fn district_records(rows: &[PovertyRow]) -> Vec<DistrictPoverty> {
    rows.iter()
        .map(|row| DistrictPoverty {
            ubigeo: row.ubigeo.clone(),
            department_code: row.department_code.clone(),
            department_name: department_name(&row.department_code).to_string(),
            poverty_rate: to_percent(row.poverty_rate),
            ntl_weight: row.ntl_weight,
            year: row.year,
        })
        .collect()
}

/// Department means, highest poverty first.
pub fn department_records(rows: &[PovertyRow]) -> Vec<DepartmentPoverty> {
    let mut departments: Vec<DepartmentPoverty> = mean_by_department(rows)
        .into_iter()
        .map(|(code, mean)| {
            log::debug!("poverty {code}: mean fraction {mean:.6}");
            DepartmentPoverty {
                name: department_name(&code).to_string(),
                poverty_rate: to_percent(mean),
                code,
            }
        })
        .collect();

    sort_descending_by(&mut departments, |d| d.poverty_rate);
    departments
}

pub fn build_poverty_document(rows: &[PovertyRow], year: i32) -> PovertyMapDocument {
    PovertyMapDocument {
        metadata: PovertyMetadata {
            indicator: "poverty_rate".to_string(),
            unit: "percent".to_string(),
            year,
            source: POVERTY_SOURCE.to_string(),
        },
        departments: department_records(rows),
        districts: district_records(rows),
    }
}

/// Read the district table, build the document and write it.
pub fn generate_poverty(config: &MapConfig) -> Result<GenerationSummary, AppError> {
    let input = config.poverty_input();
    log::info!("reading poverty districts from {}", input.display());
    let rows = load_poverty_rows(&input)?;

    let document = build_poverty_document(&rows, config.poverty_year);

    let output = config.output_path(Indicator::Poverty);
    write_map_json(&output, &document)?;
    log::info!("wrote {}", output.display());

    Ok(GenerationSummary {
        indicator: Indicator::Poverty,
        output,
        departments: document.departments.len(),
        districts: Some(document.districts.len()),
    })
}
