//! Sequential generator pipeline shared by the CLI and tests.
//!
//! Generators run one after another in the order given; the first failure
//! stops the run. Maps already written by earlier generators are left in place.

use crate::domain::{GenerationSummary, Indicator, MapConfig};
use crate::error::AppError;
use crate::maps::generate;

/// Run `indicators` in order, reporting each finished generator to `on_done`.
pub fn run_generators(
    indicators: &[Indicator],
    config: &MapConfig,
    mut on_done: impl FnMut(&GenerationSummary),
) -> Result<Vec<GenerationSummary>, AppError> {
    let mut summaries = Vec::with_capacity(indicators.len());
    for &indicator in indicators {
        let summary = generate(indicator, config).inspect_err(|e| {
            log::error!("{indicator:?} generator failed: {e}");
        })?;
        log::debug!("{indicator:?} -> {}", summary.output.display());
        on_done(&summary);
        summaries.push(summary);
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use crate::domain::{GdpMapDocument, InflationMapDocument, PovertyMapDocument};
    use crate::error::ErrorKind;
    use crate::io::read_map_json;

    const POVERTY_CSV: &str = "district_ubigeo,department_code,poverty_rate_nowcast,ntl_weight,year\n\
                               150101,15,0.10,0.9,2025\n\
                               040101,04,0.05,0.4,2025\n\
                               150102,15,0.20,0.6,2025\n";

    fn write_inputs(data_dir: &Path) {
        fs::create_dir_all(data_dir).unwrap();
        fs::write(data_dir.join("poverty_districts_full.csv"), POVERTY_CSV).unwrap();
        fs::write(
            data_dir.join("gdp_nowcast.json"),
            r#"{"nowcast": {"value": 2.5, "target_period": "2025-Q4"}, "forecasts": []}"#,
        )
        .unwrap();
        fs::write(
            data_dir.join("inflation_nowcast.json"),
            r#"{"nowcast": {"value": 0.15, "target_period": "2026-01"}}"#,
        )
        .unwrap();
    }

    fn config_in(root: &Path) -> MapConfig {
        MapConfig {
            data_dir: root.join("data"),
            geo_dir: root.join("geo"),
            poverty_year: 2025,
        }
    }

    #[test]
    fn all_generators_write_documents() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_inputs(&config.data_dir);

        let mut reported = Vec::new();
        let summaries = run_generators(&Indicator::ALL, &config, |s| reported.push(s.indicator)).unwrap();
        assert_eq!(reported, Indicator::ALL.to_vec());
        assert_eq!(summaries[0].departments, 2);
        assert_eq!(summaries[0].districts, Some(3));
        assert_eq!(summaries[1].departments, 25);
        assert_eq!(summaries[2].districts, None);

        let poverty: PovertyMapDocument = read_map_json(&config.output_path(Indicator::Poverty)).unwrap();
        assert_eq!(poverty.departments[0].code, "15");
        assert_eq!(poverty.departments[0].poverty_rate, 15.0);
        assert_eq!(poverty.departments[1].code, "04");
        assert_eq!(poverty.departments[1].poverty_rate, 5.0);
        let ubigeos: Vec<&str> = poverty.districts.iter().map(|d| d.ubigeo.as_str()).collect();
        assert_eq!(ubigeos, vec!["150101", "040101", "150102"]);

        let gdp: GdpMapDocument = read_map_json(&config.output_path(Indicator::Gdp)).unwrap();
        assert_eq!(gdp.national.gdp_growth_yoy.as_f64(), Some(2.5));
        assert_eq!(gdp.departments.len(), 25);
        assert!(gdp.departments.iter().all(|d| d.gdp_growth_yoy >= 0.5 && d.gdp_growth_yoy < 5.5));

        let inflation: InflationMapDocument = read_map_json(&config.output_path(Indicator::Inflation)).unwrap();
        assert_eq!(inflation.metadata.period, "2026-01");
        assert_eq!(inflation.departments.len(), 25);
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_inputs(&config.data_dir);

        run_generators(&Indicator::ALL, &config, |_| {}).unwrap();
        let first: Vec<Vec<u8>> = Indicator::ALL
            .iter()
            .map(|&i| fs::read(config.output_path(i)).unwrap())
            .collect();

        run_generators(&Indicator::ALL, &config, |_| {}).unwrap();
        for (i, bytes) in Indicator::ALL.iter().zip(&first) {
            assert_eq!(&fs::read(config.output_path(*i)).unwrap(), bytes, "{i:?} changed between runs");
        }
    }

    #[test]
    fn written_documents_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_inputs(&config.data_dir);
        run_generators(&Indicator::ALL, &config, |_| {}).unwrap();

        let rows = crate::io::load_poverty_rows(&config.poverty_input()).unwrap();
        let expected = crate::maps::build_poverty_document(&rows, 2025);
        let back: PovertyMapDocument = read_map_json(&config.output_path(Indicator::Poverty)).unwrap();
        assert_eq!(back, expected);

        let nowcast = crate::io::load_nowcast(&config.gdp_input()).unwrap();
        let back: GdpMapDocument = read_map_json(&config.output_path(Indicator::Gdp)).unwrap();
        assert_eq!(back, crate::maps::build_gdp_document(&nowcast));

        let nowcast = crate::io::load_nowcast(&config.inflation_input()).unwrap();
        let back: InflationMapDocument = read_map_json(&config.output_path(Indicator::Inflation)).unwrap();
        assert_eq!(back, crate::maps::build_inflation_document(&nowcast));
    }

    #[test]
    fn failure_stops_run_without_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_inputs(&config.data_dir);
        fs::write(config.data_dir.join("gdp_nowcast.json"), r#"{"nowcast": {}}"#).unwrap();

        let mut reported = Vec::new();
        let err = run_generators(&Indicator::ALL, &config, |s| reported.push(s.indicator)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(reported, vec![Indicator::Poverty]);
        assert!(config.output_path(Indicator::Poverty).exists());
        assert!(!config.output_path(Indicator::Gdp).exists());
        assert!(!config.output_path(Indicator::Inflation).exists());
    }

    #[test]
    fn missing_inputs_are_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let err = run_generators(&[Indicator::Gdp], &config, |_| {}).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!config.geo_dir.exists());
    }
}
