//! Parse bnet text into a [`Network`]
//!
//! Grammar: the first line holds the variable count `N`; each of the next
//! `N` lines describes one variable, in index order:
//!
//! ```text
//! * <rule> <count> <parent>...   conjunction governed by <rule>
//! + <count> <parent>...          disjunction
//! ```
//!
//! Parsing is all-or-nothing. Lines after the `N` factor lines are ignored.

use crate::errors::ParseError;
use crate::network::factor::{Combinator, FactorSpec, Network};

/// Parse a complete bnet document.
pub fn parse_network(input: &str) -> Result<Network, ParseError> {
    let lines: Vec<&str> = input.lines().map(str::trim).collect();

    let header = lines.first().ok_or(ParseError::Empty)?;
    let num_vars: usize = header
        .parse()
        .map_err(|_| ParseError::InvalidVarCount(header.to_string()))?;

    let found = lines.len() - 1;
    if found < num_vars {
        return Err(ParseError::ShortInput {
            expected: num_vars,
            found,
        });
    }

    let factors = lines[1..=num_vars]
        .iter()
        .enumerate()
        .map(|(index, line)| parse_factor_line(index, line, index + 2))
        .collect::<Result<Vec<_>, _>>()?;

    let trailing = lines[num_vars + 1..].iter().filter(|l| !l.is_empty()).count();
    if trailing > 0 {
        tracing::warn!("Ignoring {} non-empty lines after the last factor", trailing);
    }

    tracing::debug!("Parsed {} factor specifications", factors.len());
    Ok(Network { factors })
}

/// Parse the factor line for variable `variable_index`, found at 1-based input
/// line `line_no`.
pub fn parse_factor_line(
    variable_index: usize,
    line: &str,
    line_no: usize,
) -> Result<FactorSpec, ParseError> {
    let mut tokens = line.split_whitespace();

    let tag = tokens.next().ok_or(ParseError::BlankLine { line: line_no })?;
    let combinator = match tag {
        "*" => {
            let rule = tokens.next().ok_or(ParseError::MissingToken {
                line: line_no,
                what: "rule name",
            })?;
            Combinator::Conjunction {
                rule: rule.to_string(),
            }
        }
        "+" => Combinator::Disjunction,
        other => {
            return Err(ParseError::UnknownCombinator {
                line: line_no,
                tag: other.to_string(),
            })
        }
    };

    let count_token = tokens.next().ok_or(ParseError::MissingToken {
        line: line_no,
        what: "parent count",
    })?;
    let declared: usize = count_token
        .parse()
        .map_err(|_| ParseError::InvalidParentCount {
            line: line_no,
            token: count_token.to_string(),
        })?;

    let parent_indices = tokens
        .map(|t| {
            t.parse::<usize>().map_err(|_| ParseError::InvalidParentIndex {
                line: line_no,
                token: t.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if parent_indices.len() != declared {
        return Err(ParseError::ParentCountMismatch {
            line: line_no,
            declared,
            listed: parent_indices.len(),
        });
    }

    Ok(FactorSpec {
        variable_index,
        combinator,
        parent_indices,
        source: line.to_string(),
    })
}
