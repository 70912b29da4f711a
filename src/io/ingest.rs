//! District poverty CSV ingest.
//!
//! Turns `poverty_districts_full.csv` into `PovertyRow`s. Unlike a lenient
//! importer this one stops at the first bad row: a map built from a partially
//! read table would silently misreport department means.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::PovertyRow;
use crate::error::AppError;

const COL_UBIGEO: &str = "district_ubigeo";
const COL_DEPARTMENT: &str = "department_code";
const COL_RATE: &str = "poverty_rate_nowcast";
const COL_WEIGHT: &str = "ntl_weight";
const COL_YEAR: &str = "year";

const REQUIRED_COLUMNS: [&str; 5] = [COL_UBIGEO, COL_DEPARTMENT, COL_RATE, COL_WEIGHT, COL_YEAR];

/// Load every row of the district poverty table, in file order.
pub fn load_poverty_rows(path: &Path) -> Result<Vec<PovertyRow>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_poverty_rows(file)
}

/// Parse district poverty rows from any CSV source.
pub fn read_poverty_rows<R: Read>(source: R) -> Result<Vec<PovertyRow>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::parse(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, and lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| AppError::parse(format!("CSV parse error on line {line}: {e}")))?;
        rows.push(parse_row(&record, &header_map, line)?);
    }

    Ok(rows)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    for name in REQUIRED_COLUMNS {
        if !header_map.contains_key(name) {
            return Err(AppError::missing_field(format!("Missing required column: `{name}`")));
        }
    }
    Ok(())
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>, line: usize) -> Result<PovertyRow, AppError> {
    let ubigeo = get_required(record, header_map, COL_UBIGEO, line)?.to_string();
    let department_code = get_required(record, header_map, COL_DEPARTMENT, line)?.to_string();
    let poverty_rate = parse_f64(get_required(record, header_map, COL_RATE, line)?, COL_RATE, line)?;
    let ntl_weight = parse_f64(get_required(record, header_map, COL_WEIGHT, line)?, COL_WEIGHT, line)?;
    let year = parse_year(get_required(record, header_map, COL_YEAR, line)?, line)?;

    Ok(PovertyRow {
        ubigeo,
        department_code,
        poverty_rate,
        ntl_weight,
        year,
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    line: usize,
) -> Result<&'a str, AppError> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| AppError::missing_field(format!("Missing required column: `{name}`")))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::missing_field(format!("Line {line}: missing required value `{name}`")))
}

fn parse_f64(s: &str, name: &str, line: usize) -> Result<f64, AppError> {
    // `NaN`/`inf` parse as f64 but cannot be written to JSON.
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::parse(format!("Line {line}: invalid number '{s}' in `{name}`"))),
    }
}

fn parse_year(s: &str, line: usize) -> Result<i32, AppError> {
    if let Ok(year) = s.parse::<i32>() {
        return Ok(year);
    }
    // Tables that passed through a dataframe often carry `2025.0`.
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() <= i32::MAX as f64 => Ok(v as i32),
        _ => Err(AppError::parse(format!("Line {line}: invalid year '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const HEADER: &str = "district_ubigeo,department_code,poverty_rate_nowcast,ntl_weight,year\n";

    #[test]
    fn reads_rows_in_file_order() {
        let csv = format!("{HEADER}150101,15,0.10,0.8,2025\n040101,04,0.05,0.3,2025\n");
        let rows = read_poverty_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ubigeo, "150101");
        assert_eq!(rows[0].department_code, "15");
        assert!((rows[0].poverty_rate - 0.10).abs() < 1e-12);
        assert_eq!(rows[1].department_code, "04");
        assert_eq!(rows[1].year, 2025);
    }

    #[test]
    fn header_lookup_tolerates_bom_case_and_extra_columns() {
        let csv = "\u{feff}District_Ubigeo,extra,DEPARTMENT_CODE,poverty_rate_nowcast,ntl_weight,year\n\
                   010101,x,01,0.42,1.5,2024.0\n";
        let rows = read_poverty_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].ubigeo, "010101");
        assert_eq!(rows[0].department_code, "01");
        assert_eq!(rows[0].year, 2024);
    }

    #[test]
    fn header_only_table_is_empty() {
        let rows = read_poverty_rows(HEADER.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "district_ubigeo,department_code,ntl_weight,year\n010101,01,1.0,2025\n";
        let err = read_poverty_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert!(err.to_string().contains("poverty_rate_nowcast"));
    }

    #[test]
    fn empty_cell_is_missing_field() {
        let csv = format!("{HEADER}010101,01,,1.0,2025\n");
        let err = read_poverty_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn non_numeric_rate_is_parse_error() {
        let csv = format!("{HEADER}010101,01,0.1,1.0,2025\n010102,01,high,1.0,2025\n");
        let err = read_poverty_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("Line 3"));
    }

    #[test]
    fn non_finite_numbers_are_parse_errors() {
        for bad in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let rate_row = format!("{HEADER}010101,01,{bad},1.0,2025\n");
            let err = read_poverty_rows(rate_row.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "rate {bad}");
            assert!(err.to_string().contains("poverty_rate_nowcast"));

            let weight_row = format!("{HEADER}010101,01,0.2,{bad},2025\n");
            let err = read_poverty_rows(weight_row.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "weight {bad}");
            assert!(err.to_string().contains("ntl_weight"));
        }
    }

    #[test]
    fn fractional_year_is_rejected() {
        let csv = format!("{HEADER}010101,01,0.1,1.0,2025.5\n");
        let err = read_poverty_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn ragged_row_is_parse_error() {
        let csv = format!("{HEADER}010101,01,0.1\n");
        let err = read_poverty_rows(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_poverty_rows(Path::new("does/not/exist.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.exit_code(), 2);
    }
}
