//! Causal factor graph encoder
//!
//! Layout: the factor count and a blank line, then one record per variable:
//!
//! ```text
//! <head index>
//! *<probability> | +
//! <parent count>
//! <parent indices, space separated>
//! <blank>
//! ```

use crate::emit::sink::OutputSink;
use crate::emit::{format_probability, Emitter};
use crate::network::{Combinator, FactorSpec, Network};
use crate::probability::{Resolver, RuleProbabilityTable};
use std::io::{self, Write};

pub struct CausalGraphEmitter<'a> {
    resolver: Resolver<'a>,
}

impl<'a> CausalGraphEmitter<'a> {
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

    /// Type line of a record: `*<p>` for conjunctions, `+` for disjunctions.
    pub fn type_tag(&self, spec: &FactorSpec) -> String {
        match spec.combinator {
            Combinator::Conjunction { .. } => {
                format!("*{}", format_probability(self.resolver.probability(spec)))
            }
            Combinator::Disjunction => "+".to_string(),
        }
    }

    fn emit_record<W: Write>(&self, spec: &FactorSpec, sink: &mut OutputSink<W>) -> io::Result<()> {
        let parents: Vec<String> = spec.parent_indices.iter().map(|p| p.to_string()).collect();

        sink.line(&spec.variable_index.to_string())?;
        sink.line(&self.type_tag(spec))?;
        sink.line(&spec.parent_count().to_string())?;
        sink.line(&parents.join(" "))?;
        sink.blank()
    }
}

impl Emitter for CausalGraphEmitter<'_> {
    fn format_name(&self) -> &'static str {
        "causal factor graph"
    }

    fn emit<W: Write>(&self, network: &Network, sink: &mut OutputSink<W>) -> io::Result<()> {
        sink.line(&network.num_vars().to_string())?;
        sink.blank()?;

        for spec in network.iter() {
            self.emit_record(spec, sink)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::transcode;

    fn render(input: &str, table: &RuleProbabilityTable, default: f64) -> String {
        let emitter = CausalGraphEmitter::new(table, default);
        let mut sink = OutputSink::new(Vec::new());
        transcode(input, &emitter, &mut sink).unwrap();
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_scenario_records() {
        let table: RuleProbabilityTable = [("R1", 0.7)].into_iter().collect();
        let out = render("2\n* R1 1 0\n+ 1 0\n", &table, 0.99);
        assert_eq!(out, "2\n\n0\n*0.7\n1\n0\n\n1\n+\n1\n0\n\n");
    }

    #[test]
    fn test_fallback_probabilities() {
        let table: RuleProbabilityTable = [("R1", 0.7)].into_iter().collect();
        let out = render("3\n+ 0\n* Rnarrow 1 0\n* R2 2 0 1\n", &table, 0.99);
        assert_eq!(
            out,
            "3\n\n0\n+\n0\n\n\n1\n*1.0\n1\n0\n\n2\n*0.99\n2\n0 1\n\n"
        );
    }

    #[test]
    fn test_whole_number_probability_keeps_fraction() {
        let table: RuleProbabilityTable = [("Rsure", 1.0), ("Rnever", 0.0)].into_iter().collect();
        let emitter = CausalGraphEmitter::new(&table, 0.5);
        let network = crate::network::parse_network("2\n* Rsure 0\n* Rnever 0\n").unwrap();
        assert_eq!(emitter.type_tag(&network.factors[0]), "*1.0");
        assert_eq!(emitter.type_tag(&network.factors[1]), "*0.0");
    }
}
