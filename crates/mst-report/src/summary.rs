// File: crates/mst-report/src/summary.rs
// Summary: Per-graph summary of the loaded results, written to the log.

use crate::model::{Algorithm, GraphResult, ResultSet};

/// One line per graph: size, both costs, and time/operations per algorithm.
pub fn describe(result: &GraphResult) -> String {
    let edges = result.edges.map(|e| format!(", edges={e}")).unwrap_or_default();
    let per_algo = Algorithm::ALL
        .iter()
        .map(|&a| {
            let m = result.metrics(a);
            format!("{}: {}ms/{} ops", a.label(), m.execution_time, m.operations)
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{}: vertices={}{edges}, cost prim={} kruskal={} (match: {}), {per_algo}",
        result.graph_name,
        result.vertices,
        result.prim.total_cost,
        result.kruskal.total_cost,
        result.costs_match(),
    )
}

/// Log the summary for every entry; warn where the two trees disagree on weight.
///
/// Best-effort: entries that fail strict decoding are left to the chart generators
/// to report, so this never fails.
pub fn log_summary(data: &ResultSet) -> usize {
    let results = match data.graph_results() {
        Ok(results) => results,
        Err(e) => {
            log::debug!("skipping results summary: {e}");
            return 0;
        }
    };
    for r in &results {
        log::info!("{}", describe(r));
        if !r.costs_match() {
            log::warn!(
                "{}: MST cost differs between Prim ({}) and Kruskal ({}); cost chart shows Prim",
                r.graph_name,
                r.prim.total_cost,
                r.kruskal.total_cost
            );
        }
    }
    results.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(kruskal_cost: f64) -> ResultSet {
        ResultSet::from_value(json!({"results": [{
            "graphName": "G1", "vertices": 5, "edges": 7,
            "prim": {"executionTime": 1.0, "operations": 10, "totalCost": 20.0},
            "kruskal": {"executionTime": 2.0, "operations": 15, "totalCost": kruskal_cost}
        }]}))
    }

    #[test]
    fn describe_mentions_both_algorithms() {
        let results = data(20.0).graph_results().unwrap();
        let line = describe(&results[0]);
        assert!(line.starts_with("G1: vertices=5, edges=7"), "{line}");
        assert!(line.contains("match: true"));
        assert!(line.contains("Prim: 1ms/10 ops"));
        assert!(line.contains("Kruskal: 2ms/15 ops"));
    }

    #[test]
    fn mismatched_costs_are_flagged() {
        let results = data(21.0).graph_results().unwrap();
        assert!(describe(&results[0]).contains("match: false"));
        assert_eq!(log_summary(&data(21.0)), 1);
    }

    #[test]
    fn undecodable_results_are_skipped() {
        let rs = ResultSet::from_value(json!({"results": [{"graphName": "G1"}]}));
        assert_eq!(log_summary(&rs), 0);
    }
}
