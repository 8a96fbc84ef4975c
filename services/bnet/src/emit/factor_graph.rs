//! Factor-graph network encoder
//!
//! Every variable is binary with labels `"false"` (index 0) and `"true"`
//! (index 1). Each conditional table is sparse: a `default` row covers every
//! parent assignment except one explicit override row. Assignments follow the
//! consumer's leftmost-varies-fastest convention, but only the all-true or
//! all-false assignment is ever written, so no linear index is computed here.

use crate::emit::sink::OutputSink;
use crate::emit::{format_probability, Emitter};
use crate::network::{variable_label, Combinator, FactorSpec, Network};
use crate::probability::{Resolver, RuleProbabilityTable};
use std::io::{self, Write};

const VARIABLE_TYPE: &str = r#"    type discrete[2] { "false" "true" };"#;

/// The two rows of a sparse conditional probability table, each as
/// `[P(child = false), P(child = true)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparseTable {
    pub default_row: [f64; 2],
    /// Value every parent takes in the override assignment.
    pub override_parents: bool,
    pub override_row: [f64; 2],
}

impl SparseTable {
    /// Conjunction: child fires with `p` only when all parents are true.
    pub fn conjunction(p: f64) -> Self {
        let q = 0.0;
        Self {
            default_row: [1.0 - q, q],
            override_parents: true,
            override_row: [1.0 - p, p],
        }
    }

    /// Disjunction: child is true unless every parent is false.
    pub fn disjunction() -> Self {
        let p = 1.0;
        let q = 0.0;
        Self {
            default_row: [q, 1.0 - q],
            override_parents: false,
            override_row: [p, 1.0 - p],
        }
    }
}

pub struct FactorGraphEmitter<'a> {
    resolver: Resolver<'a>,
}

impl<'a> FactorGraphEmitter<'a> {
    pub fn new(table: &'a RuleProbabilityTable, default_probability: f64) -> Self {
        Self::with_resolver(Resolver::new(table, default_probability))
    }

    pub fn with_resolver(resolver: Resolver<'a>) -> Self {
        tracing::debug!(
            "Unlisted rules fire with default probability {}",
            resolver.default_probability()
        );
        Self { resolver }
    }

    pub fn table_for(&self, spec: &FactorSpec) -> SparseTable {
        match spec.combinator {
            Combinator::Conjunction { .. } => SparseTable::conjunction(self.resolver.probability(spec)),
            Combinator::Disjunction => SparseTable::disjunction(),
        }
    }

    fn emit_variable<W: Write>(&self, index: usize, sink: &mut OutputSink<W>) -> io::Result<()> {
        sink.comment(&format!("Print node {}", index));
        sink.line(&format!("variable \"{}\"", variable_label(index)))?;
        sink.line("{")?;
        sink.line(VARIABLE_TYPE)?;
        sink.line("}")
    }

    fn emit_table<W: Write>(
        &self,
        spec: &FactorSpec,
        total: usize,
        sink: &mut OutputSink<W>,
    ) -> io::Result<()> {
        sink.comment(&format!(
            "Factor {} of {}. Finished printing {:.1}% of factors.",
            spec.variable_index,
            total,
            100.0 * spec.variable_index as f64 / total as f64
        ));
        sink.comment(&spec.source);

        sink.line(&probability_header(spec))?;
        sink.line("{")?;

        let table = self.table_for(spec);
        sink.line(&format!(
            "    default {} {};",
            format_probability(table.default_row[0]),
            format_probability(table.default_row[1])
        ))?;
        let value = if table.override_parents { "\"true\"" } else { "\"false\"" };
        let assignment = vec![value; spec.parent_count()].join(", ");
        sink.line(&format!(
            "    ({}) {} {};",
            assignment,
            format_probability(table.override_row[0]),
            format_probability(table.override_row[1])
        ))?;

        sink.line("}")
    }
}

/// `probability ( "n<i>" | "n<p>" ... )` with parents in parse order.
fn probability_header(spec: &FactorSpec) -> String {
    let parents: String = spec
        .parent_indices
        .iter()
        .map(|p| format!("\"{}\" ", variable_label(*p)))
        .collect();
    format!("probability ( \"{}\" | {} )", spec.label(), parents)
}

impl Emitter for FactorGraphEmitter<'_> {
    fn format_name(&self) -> &'static str {
        "factor graph"
    }

    fn emit<W: Write>(&self, network: &Network, sink: &mut OutputSink<W>) -> io::Result<()> {
        sink.line("network factor")?;
        sink.line("{")?;
        sink.line("}")?;
        sink.blank()?;

        for spec in network.iter() {
            self.emit_variable(spec.variable_index, sink)?;
        }
        for spec in network.iter() {
            self.emit_table(spec, network.num_vars(), sink)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::transcode;
    use crate::network::parse_network;

    fn render(input: &str, table: &RuleProbabilityTable, default: f64) -> String {
        let emitter = FactorGraphEmitter::new(table, default);
        let mut sink = OutputSink::new(Vec::new());
        transcode(input, &emitter, &mut sink).unwrap();
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_scenario_output() {
        let table: RuleProbabilityTable = [("R1", 0.7)].into_iter().collect();
        let out = render("2\n* R1 1 0\n+ 1 0\n", &table, 0.99);

        let expected = concat!(
            "network factor\n",
            "{\n",
            "}\n",
            "\n",
            "variable \"n0\"\n",
            "{\n",
            "    type discrete[2] { \"false\" \"true\" };\n",
            "}\n",
            "variable \"n1\"\n",
            "{\n",
            "    type discrete[2] { \"false\" \"true\" };\n",
            "}\n",
            "probability ( \"n0\" | \"n0\"  )\n",
            "{\n",
            "    default 1.0 0.0;\n",
            "    (\"true\") 0.30000000000000004 0.7;\n",
            "}\n",
            "probability ( \"n1\" | \"n0\"  )\n",
            "{\n",
            "    default 0.0 1.0;\n",
            "    (\"false\") 1.0 0.0;\n",
            "}\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_two_parent_conjunction_rows() {
        let table: RuleProbabilityTable = [("R1", 0.8)].into_iter().collect();
        let network = parse_network("3\n+ 0\n+ 0\n* R1 2 0 1\n").unwrap();
        let emitter = FactorGraphEmitter::new(&table, 0.99);

        let sparse = emitter.table_for(&network.factors[2]);
        assert_eq!(sparse.default_row, [1.0, 0.0]);
        assert!(sparse.override_parents);
        assert!((sparse.override_row[0] - 0.2).abs() < 1e-12);
        assert_eq!(sparse.override_row[1], 0.8);

        let out = render("3\n+ 0\n+ 0\n* R1 2 0 1\n", &table, 0.99);
        assert!(out.contains("probability ( \"n2\" | \"n0\" \"n1\"  )\n{\n    default 1.0 0.0;\n    (\"true\", \"true\") 0.19999999999999996 0.8;\n}\n"));
    }

    #[test]
    fn test_disjunction_rows() {
        let table = RuleProbabilityTable::new();
        let out = render("4\n+ 0\n+ 0\n+ 0\n+ 3 0 1 2\n", &table, 0.5);
        assert!(out.contains("    default 0.0 1.0;\n    (\"false\", \"false\", \"false\") 1.0 0.0;\n"));
        assert_eq!(SparseTable::disjunction().override_row, [1.0, 0.0]);
    }

    #[test]
    fn test_default_and_sentinel_probabilities() {
        let table = RuleProbabilityTable::new();
        let out = render("3\n+ 0\n* Rmissing 1 0\n* Rnarrow 1 0\n", &table, 0.25);
        assert!(out.contains("probability ( \"n1\" | \"n0\"  )\n{\n    default 1.0 0.0;\n    (\"true\") 0.75 0.25;\n"));
        assert!(out.contains("probability ( \"n2\" | \"n0\"  )\n{\n    default 1.0 0.0;\n    (\"true\") 0.0 1.0;\n"));
    }

    #[test]
    fn test_variable_blocks_in_index_order() {
        let table = RuleProbabilityTable::new();
        let out = render("5\n+ 0\n+ 1 0\n+ 1 1\n+ 1 2\n+ 1 3\n", &table, 0.5);

        let labels: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("variable "))
            .collect();
        assert_eq!(labels.len(), 5);
        for (i, label) in labels.iter().enumerate() {
            assert_eq!(*label, format!("variable \"n{}\"", i));
        }

        let tables = out.lines().filter(|l| l.starts_with("probability ")).count();
        assert_eq!(tables, 5);
    }

    #[test]
    fn test_parentless_factor() {
        let table = RuleProbabilityTable::new();
        let out = render("1\n+ 0\n", &table, 0.5);
        assert!(out.contains("probability ( \"n0\" |  )\n{\n    default 0.0 1.0;\n    () 1.0 0.0;\n}\n"));
    }

    #[test]
    fn test_comments_not_written() {
        let table = RuleProbabilityTable::new();
        let out = render("2\n+ 0\n* R 1 0\n", &table, 0.5);
        assert!(out.lines().all(|l| !l.starts_with('#')));
    }
}
