// File: crates/mst-report/src/loader.rs
// Summary: Reads the benchmark results file into a ResultSet. No schema checks happen here.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ReportError, Result};
use crate::model::ResultSet;

pub fn load_results(path: impl AsRef<Path>) -> Result<ResultSet> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReportError::InputNotFound(path.to_path_buf()),
        _ => ReportError::Io { path: path.to_path_buf(), source },
    })?;
    let root = serde_json::from_str(&text)
        .map_err(|source| ReportError::Json { path: path.to_path_buf(), source })?;
    log::debug!("loaded {} ({} bytes)", path.display(), text.len());
    Ok(ResultSet::from_value(root))
}
