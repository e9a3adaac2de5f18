// File: crates/mst-report/src/error.rs
// Summary: Error type for loading results and generating charts.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The results file does not exist; the benchmark has not been run yet.
    #[error("{} not found. Please run the benchmark program first.", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `location` is a JSON path such as `results[1].prim`.
    #[error("missing key '{key}' at {location}")]
    MissingKey { location: String, key: String },

    #[error("{location}: expected {expected}, found {found}")]
    InvalidValue {
        location: String,
        expected: &'static str,
        found: String,
    },

    /// Writing status lines to the console failed.
    #[error("failed to write report output: {0}")]
    Output(#[source] std::io::Error),

    #[error("failed to render {file}: {source:#}")]
    Render {
        file: String,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_points_at_the_benchmark() {
        let e = ReportError::InputNotFound(PathBuf::from("output.json"));
        assert_eq!(e.to_string(), "output.json not found. Please run the benchmark program first.");
    }

    #[test]
    fn missing_key_names_location() {
        let e = ReportError::MissingKey { location: "results[1]".into(), key: "prim".into() };
        assert_eq!(e.to_string(), "missing key 'prim' at results[1]");
    }
}
