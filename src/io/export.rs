//! Read/write map documents.
//!
//! Documents are pretty-printed with two-space indentation and non-ASCII
//! department names kept as literal UTF-8, which is what the map front-end
//! loads from `assets/geo`.

use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Serialize `document` over `path`, creating the parent directory if needed.
///
/// The destination is overwritten in place.
pub fn write_map_json<T: Serialize>(path: &Path, document: &T) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .map_err(|e| AppError::io(format!("Failed to create output dir '{}': {e}", parent.display())))?;
    }

    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create map JSON '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(|e| AppError::io(format!("Failed to write map JSON '{}': {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to flush map JSON '{}': {e}", path.display())))?;

    Ok(())
}

/// Read a map document written by [`write_map_json`].
pub fn read_map_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open map JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(|e| AppError::parse(format!("Invalid map JSON '{}': {e}", path.display())))
}
