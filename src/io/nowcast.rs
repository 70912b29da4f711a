//! National nowcast JSON reader.
//!
//! Only `nowcast.value` and `nowcast.target_period` are used; the rest of the
//! upstream document (forecasts, model params, series) is ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::domain::Nowcast;
use crate::error::AppError;

/// Read a nowcast document from disk.
pub fn load_nowcast(path: &Path) -> Result<Nowcast, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open nowcast JSON '{}': {e}", path.display())))?;
    read_nowcast(BufReader::new(file))
        .map_err(|e| AppError::new(e.kind(), format!("{}: {e}", path.display())))
}

/// Parse a nowcast document from any JSON source.
pub fn read_nowcast<R: Read>(source: R) -> Result<Nowcast, AppError> {
    let doc: Value =
        serde_json::from_reader(source).map_err(|e| AppError::parse(format!("Invalid nowcast JSON: {e}")))?;

    let nowcast = doc
        .get("nowcast")
        .ok_or_else(|| AppError::missing_field("Missing key `nowcast`"))?;

    let value = nowcast
        .get("value")
        .ok_or_else(|| AppError::missing_field("Missing key `nowcast.value`"))?;
    let Value::Number(national) = value else {
        return Err(AppError::parse(format!("`nowcast.value` is not a number: {value}")));
    };
    let value = national
        .as_f64()
        .ok_or_else(|| AppError::parse(format!("`nowcast.value` is out of range: {national}")))?;

    let target_period = nowcast
        .get("target_period")
        .ok_or_else(|| AppError::missing_field("Missing key `nowcast.target_period`"))?;
    let target_period = target_period
        .as_str()
        .ok_or_else(|| AppError::parse(format!("`nowcast.target_period` is not a string: {target_period}")))?
        .to_string();

    Ok(Nowcast {
        value,
        national: national.clone(),
        target_period,
    })
}
