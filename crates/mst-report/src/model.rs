// File: crates/mst-report/src/model.rs
// Summary: Benchmark result document and column extraction.
//
// The document stays a generic JSON tree. Each chart pulls the columns it
// needs, so a missing key surfaces in the first chart that reads it.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ReportError, Result};

/// One of the two MST algorithms being compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    /// Key of this algorithm's metrics record inside a result entry.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Prim => "Prim",
            Algorithm::Kruskal => "Kruskal",
        }
    }
}

/// A per-algorithm measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    ExecutionTime,
    Operations,
    TotalCost,
}

impl Metric {
    pub fn key(self) -> &'static str {
        match self {
            Metric::ExecutionTime => "executionTime",
            Metric::Operations => "operations",
            Metric::TotalCost => "totalCost",
        }
    }
}

/// Metrics recorded for one algorithm on one graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmMetrics {
    /// Milliseconds.
    pub execution_time: f64,
    pub operations: u64,
    pub total_cost: f64,
    /// Tree edges as `"from-to"`, when the benchmark recorded them.
    #[serde(default)]
    pub mst_edges: Vec<String>,
}

/// One benchmark case.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphResult {
    pub graph_name: String,
    pub vertices: u64,
    #[serde(default)]
    pub edges: Option<u64>,
    pub prim: AlgorithmMetrics,
    pub kruskal: AlgorithmMetrics,
}

impl GraphResult {
    pub fn metrics(&self, algorithm: Algorithm) -> &AlgorithmMetrics {
        match algorithm {
            Algorithm::Prim => &self.prim,
            Algorithm::Kruskal => &self.kruskal,
        }
    }

    /// Both algorithms found trees of the same weight.
    pub fn costs_match(&self) -> bool {
        (self.prim.total_cost - self.kruskal.total_cost).abs() <= 1e-9 * self.prim.total_cost.abs().max(1.0)
    }
}

/// The loaded results document. Read-only for the lifetime of a run.
#[derive(Clone, Debug)]
pub struct ResultSet {
    root: Value,
}

impl ResultSet {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    fn entries(&self) -> Result<&[Value]> {
        let results = self.root.get("results").ok_or_else(|| ReportError::MissingKey {
            location: "document root".to_string(),
            key: "results".to_string(),
        })?;
        results
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| invalid("results", "an array", results))
    }

    /// Graph names in input order.
    pub fn graph_names(&self) -> Result<Vec<String>> {
        self.column(&["graphName"], |v, loc| {
            v.as_str().map(str::to_owned).ok_or_else(|| invalid(loc, "a string", v))
        })
    }

    /// Vertex counts in input order.
    pub fn vertex_counts(&self) -> Result<Vec<f64>> {
        self.column(&["vertices"], number)
    }

    /// One metric of one algorithm for every entry, in input order.
    pub fn metric(&self, algorithm: Algorithm, metric: Metric) -> Result<Vec<f64>> {
        self.column(&[algorithm.key(), metric.key()], number)
    }

    /// Decode every entry into typed records. Stricter than the column accessors.
    pub fn graph_results(&self) -> Result<Vec<GraphResult>> {
        self.entries()?
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                GraphResult::deserialize(entry).map_err(|e| ReportError::InvalidValue {
                    location: format!("results[{i}]"),
                    expected: "a complete graph result",
                    found: e.to_string(),
                })
            })
            .collect()
    }

    /// Walk `path` inside each entry and convert the leaf with `convert`.
    fn column<T>(&self, path: &[&str], convert: impl Fn(&Value, &str) -> Result<T>) -> Result<Vec<T>> {
        self.entries()?
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut location = format!("results[{i}]");
                let mut node = entry;
                for key in path {
                    node = node.get(key).ok_or_else(|| ReportError::MissingKey {
                        location: location.clone(),
                        key: (*key).to_string(),
                    })?;
                    location.push('.');
                    location.push_str(key);
                }
                convert(node, &location)
            })
            .collect()
    }
}

fn number(v: &Value, location: &str) -> Result<f64> {
    v.as_f64().ok_or_else(|| invalid(location, "a number", v))
}

fn invalid(location: &str, expected: &'static str, found: &Value) -> ReportError {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    ReportError::InvalidValue { location: location.to_string(), expected, found: found.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str, vertices: u64, prim_ms: f64, kruskal_ms: f64) -> Value {
        json!({
            "graphName": name,
            "vertices": vertices,
            "edges": vertices * 2,
            "prim": {"executionTime": prim_ms, "operations": 10, "totalCost": 20.0, "mstEdges": ["0-1"]},
            "kruskal": {"executionTime": kruskal_ms, "operations": 15, "totalCost": 20.0}
        })
    }

    #[test]
    fn columns_preserve_input_order() {
        let rs = ResultSet::from_value(json!({"results": [
            entry("large", 100, 5.0, 6.0),
            entry("small", 5, 1.0, 2.0),
            entry("medium", 50, 3.0, 2.5),
        ]}));
        assert_eq!(rs.graph_names().unwrap(), vec!["large", "small", "medium"]);
        assert_eq!(rs.vertex_counts().unwrap(), vec![100.0, 5.0, 50.0]);
        assert_eq!(rs.metric(Algorithm::Kruskal, Metric::ExecutionTime).unwrap(), vec![6.0, 2.0, 2.5]);
        assert_eq!(rs.metric(Algorithm::Prim, Metric::Operations).unwrap(), vec![10.0, 10.0, 10.0]);
    }

    #[test]
    fn missing_algorithm_reports_entry_index() {
        let mut bad = entry("g2", 10, 1.0, 1.0);
        bad.as_object_mut().unwrap().remove("prim");
        let rs = ResultSet::from_value(json!({"results": [entry("g1", 5, 1.0, 2.0), bad]}));
        match rs.metric(Algorithm::Prim, Metric::ExecutionTime) {
            Err(ReportError::MissingKey { location, key }) => {
                assert_eq!(location, "results[1]");
                assert_eq!(key, "prim");
            }
            other => panic!("unexpected: {other:?}"),
        }
        // Columns not touching `prim` are unaffected
        assert!(rs.metric(Algorithm::Kruskal, Metric::TotalCost).is_ok());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let rs = ResultSet::from_value(json!({"results": [{"graphName": 7}]}));
        assert!(matches!(rs.graph_names(), Err(ReportError::InvalidValue { .. })));

        let rs = ResultSet::from_value(json!({"results": {}}));
        assert!(matches!(rs.vertex_counts(), Err(ReportError::InvalidValue { .. })));

        let rs = ResultSet::from_value(json!({"other": []}));
        assert!(matches!(rs.graph_names(), Err(ReportError::MissingKey { .. })));
    }

    #[test]
    fn typed_decoding_reads_optional_fields() {
        let rs = ResultSet::from_value(json!({"results": [entry("g", 4, 1.0, 2.0)]}));
        let results = rs.graph_results().unwrap();
        assert_eq!(results[0].edges, Some(8));
        assert_eq!(results[0].prim.mst_edges, vec!["0-1"]);
        assert!(results[0].kruskal.mst_edges.is_empty());
        assert_eq!(results[0].metrics(Algorithm::Kruskal).operations, 15);
        assert!(results[0].costs_match());
    }

    #[test]
    fn empty_results_are_accepted() {
        let rs = ResultSet::from_value(json!({"results": []}));
        assert!(rs.graph_results().unwrap().is_empty());
        assert!(rs.graph_names().unwrap().is_empty());
    }
}
