//! Resolve the firing probability governing a factor
//!
//! Conjunctions look their rule up in this order:
//! 1. the rule-probability table,
//! 2. the sentinel rule (`Rnarrow`), which always fires,
//! 3. the caller's default probability.
//!
//! A table entry for the sentinel rule therefore wins over the sentinel.
//! Disjunctions always resolve to `1.0`.

use crate::config::ResolverConfig;
use crate::network::{Combinator, FactorSpec};
use crate::probability::table::RuleProbabilityTable;

pub const SENTINEL_RULE: &str = "Rnarrow";

/// Where a resolved probability came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Table(f64),
    Sentinel(f64),
    Default(f64),
    Disjunction,
}

impl Resolution {
    pub fn probability(&self) -> f64 {
        match *self {
            Resolution::Table(p) | Resolution::Sentinel(p) | Resolution::Default(p) => p,
            Resolution::Disjunction => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    table: &'a RuleProbabilityTable,
    default_probability: f64,
    sentinel_rule: String,
    sentinel_probability: f64,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a RuleProbabilityTable, default_probability: f64) -> Self {
        Self::with_config(table, default_probability, &ResolverConfig::default())
    }

    pub fn with_config(
        table: &'a RuleProbabilityTable,
        default_probability: f64,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            table,
            default_probability,
            sentinel_rule: config.sentinel_rule.clone(),
            sentinel_probability: config.sentinel_probability,
        }
    }

    pub fn resolve(&self, spec: &FactorSpec) -> Resolution {
        let resolution = match &spec.combinator {
            Combinator::Disjunction => Resolution::Disjunction,
            Combinator::Conjunction { rule } => {
                if let Some(p) = self.table.get(rule) {
                    Resolution::Table(p)
                } else if *rule == self.sentinel_rule {
                    Resolution::Sentinel(self.sentinel_probability)
                } else {
                    Resolution::Default(self.default_probability)
                }
            }
        };
        tracing::debug!("{} resolved to {:?}", spec, resolution);
        resolution
    }

    pub fn probability(&self, spec: &FactorSpec) -> f64 {
        self.resolve(spec).probability()
    }

    pub fn default_probability(&self) -> f64 {
        self.default_probability
    }
}

/// Resolve with the standard sentinel rule.
pub fn resolve_probability(
    spec: &FactorSpec,
    table: &RuleProbabilityTable,
    default_probability: f64,
) -> f64 {
    Resolver::new(table, default_probability).probability(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conjunction(rule: &str) -> FactorSpec {
        FactorSpec {
            variable_index: 1,
            combinator: Combinator::Conjunction { rule: rule.to_string() },
            parent_indices: vec![0],
            source: format!("* {} 1 0", rule),
        }
    }

    fn disjunction() -> FactorSpec {
        FactorSpec {
            variable_index: 1,
            combinator: Combinator::Disjunction,
            parent_indices: vec![0],
            source: "+ 1 0".to_string(),
        }
    }

    #[test]
    fn test_table_hit() {
        let table: RuleProbabilityTable = [("R1", 0.7)].into_iter().collect();
        let resolver = Resolver::new(&table, 0.99);
        assert_eq!(resolver.resolve(&conjunction("R1")), Resolution::Table(0.7));
    }

    #[test]
    fn test_missing_rule_uses_default() {
        let tables: Vec<RuleProbabilityTable> = vec![
            RuleProbabilityTable::new(),
            [("R1", 0.7), ("R2", 0.1)].into_iter().collect(),
            [("Rother", 0.0)].into_iter().collect(),
        ];
        for table in &tables {
            assert_eq!(resolve_probability(&conjunction("R9"), table, 0.99), 0.99);
            assert_eq!(resolve_probability(&conjunction("R9"), table, 0.25), 0.25);
        }
    }

    #[test]
    fn test_sentinel_without_table_entry() {
        let table: RuleProbabilityTable = [("R1", 0.7)].into_iter().collect();
        let resolver = Resolver::new(&table, 0.5);
        assert_eq!(
            resolver.resolve(&conjunction(SENTINEL_RULE)),
            Resolution::Sentinel(1.0)
        );
    }

    #[test]
    fn test_table_entry_shadows_sentinel() {
        let table: RuleProbabilityTable = [(SENTINEL_RULE, 0.3)].into_iter().collect();
        assert_eq!(resolve_probability(&conjunction(SENTINEL_RULE), &table, 0.5), 0.3);
    }

    #[test]
    fn test_disjunction_always_certain() {
        let table: RuleProbabilityTable = [("R1", 0.7)].into_iter().collect();
        let resolver = Resolver::new(&table, 0.2);
        assert_eq!(resolver.resolve(&disjunction()), Resolution::Disjunction);
        assert_eq!(resolver.probability(&disjunction()), 1.0);
    }

    #[test]
    fn test_configured_sentinel() {
        let table = RuleProbabilityTable::new();
        let config = ResolverConfig {
            sentinel_rule: "Rexact".to_string(),
            sentinel_probability: 0.95,
        };
        let resolver = Resolver::with_config(&table, 0.5, &config);
        assert_eq!(resolver.probability(&conjunction("Rexact")), 0.95);
        assert_eq!(resolver.probability(&conjunction(SENTINEL_RULE)), 0.5);
    }
}
