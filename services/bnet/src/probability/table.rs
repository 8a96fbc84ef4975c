//! Rule-probability side table (`<rule>: <probability>` per line)

use crate::errors::TableError;
use std::collections::HashMap;
use std::path::Path;

/// Firing probability of each named rule. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleProbabilityTable {
    probs: HashMap<String, f64>,
}

impl RuleProbabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| TableError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        let table = Self::parse(&content)?;
        tracing::info!(
            "Loaded {} rule probabilities from {:?}",
            table.len(),
            path.as_ref()
        );
        Ok(table)
    }

    /// Parse table text. Blank lines are skipped and a repeated rule name
    /// keeps its last value.
    pub fn parse(content: &str) -> Result<Self, TableError> {
        let mut probs = HashMap::new();

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let (rule, value) = line.split_once(": ").ok_or_else(|| TableError::MissingSeparator {
                line: line_no,
                text: line.to_string(),
            })?;
            let value = value.trim();
            let prob: f64 = value.parse().map_err(|_| TableError::InvalidProbability {
                line: line_no,
                rule: rule.to_string(),
                value: value.to_string(),
            })?;
            if !is_probability(prob) {
                return Err(TableError::OutOfRange {
                    line: line_no,
                    rule: rule.to_string(),
                    value: prob,
                });
            }

            if probs.insert(rule.to_string(), prob).is_some() {
                tracing::debug!("Rule {} redefined on line {}", rule, line_no);
            }
        }

        Ok(Self { probs })
    }

    pub fn get(&self, rule: &str) -> Option<f64> {
        self.probs.get(rule).copied()
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.probs.contains_key(rule)
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for RuleProbabilityTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            probs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

pub fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// Value parser for probability command-line arguments.
pub fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("{:?} is not a number", s))?;
    if !is_probability(p) {
        return Err(format!("{} is outside [0, 1]", p));
    }
    Ok(p)
}
