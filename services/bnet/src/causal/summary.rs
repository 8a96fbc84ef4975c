//! Structural summary of a causal factor graph

use crate::causal::reader::{CausalGraph, CausalKind};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSummary {
    pub factors: usize,
    pub singletons: usize,
    pub conjunctions: usize,
    pub disjunctions: usize,
    /// Distinct variables seen as a head or in a body.
    pub variables: usize,
    /// Variables that never appear in any body, ascending.
    pub terminal_variables: Vec<usize>,
}

impl GraphSummary {
    pub fn from_graph(graph: &CausalGraph) -> Self {
        let mut all_vars = BTreeSet::new();
        let mut bodies = BTreeSet::new();
        let mut summary = GraphSummary {
            factors: graph.len(),
            ..Default::default()
        };

        for factor in &graph.factors {
            match factor.kind {
                CausalKind::Singleton => summary.singletons += 1,
                CausalKind::And => summary.conjunctions += 1,
                CausalKind::Or => summary.disjunctions += 1,
            }
            all_vars.insert(factor.head);
            for &v in &factor.body {
                all_vars.insert(v);
                bodies.insert(v);
            }
        }

        summary.variables = all_vars.len();
        summary.terminal_variables = all_vars.difference(&bodies).copied().collect();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::causal::read_causal_graph;

    #[test]
    fn test_summary_counts() {
        let text = "4\n\n0\nI\n0.5\n\n1\n+\n1\n0\n\n2\n*0.7\n2\n0 1\n\n3\n*0.9\n1\n0\n\n";
        let graph = read_causal_graph(text).unwrap();

        let summary = GraphSummary::from_graph(&graph);

        assert_eq!(summary.factors, 4);
        assert_eq!(summary.singletons, 1);
        assert_eq!(summary.conjunctions, 2);
        assert_eq!(summary.disjunctions, 1);
        assert_eq!(summary.variables, 4);
        assert_eq!(summary.terminal_variables, vec![2, 3]);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = GraphSummary::from_graph(&CausalGraph::default());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["factors"], 0);
        assert_eq!(json["terminal_variables"], serde_json::json!([]));
    }
}
