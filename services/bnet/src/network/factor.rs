//! Per-variable factor specifications

use std::fmt;

/// How a variable's truth value combines its parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Combinator {
    /// True with the named rule's firing probability when all parents are true.
    Conjunction { rule: String },
    /// True whenever at least one parent is true.
    Disjunction,
}

impl Combinator {
    /// The bnet token introducing this combinator.
    pub fn tag(&self) -> char {
        match self {
            Combinator::Conjunction { .. } => '*',
            Combinator::Disjunction => '+',
        }
    }

    pub fn rule_name(&self) -> Option<&str> {
        match self {
            Combinator::Conjunction { rule } => Some(rule),
            Combinator::Disjunction => None,
        }
    }
}

/// One line of a bnet file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorSpec {
    pub variable_index: usize,
    pub combinator: Combinator,
    pub parent_indices: Vec<usize>,
    /// Raw text of the line this spec was parsed from.
    pub source: String,
}

impl FactorSpec {
    pub fn parent_count(&self) -> usize {
        self.parent_indices.len()
    }

    /// Output label of this variable, e.g. `n3`.
    pub fn label(&self) -> String {
        variable_label(self.variable_index)
    }
}

pub fn variable_label(index: usize) -> String {
    format!("n{}", index)
}

/// A fully parsed bnet file. `factors[i].variable_index == i` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    pub factors: Vec<FactorSpec>,
}

impl Network {
    pub fn num_vars(&self) -> usize {
        self.factors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FactorSpec> {
        self.factors.iter()
    }

    pub fn conjunction_count(&self) -> usize {
        self.factors
            .iter()
            .filter(|f| matches!(f.combinator, Combinator::Conjunction { .. }))
            .count()
    }
}

impl fmt::Display for FactorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.combinator.tag())?;
        if let Some(rule) = self.combinator.rule_name() {
            write!(f, "{}", rule)?;
        }
        write!(f, " {:?}", self.parent_indices)
    }
}
