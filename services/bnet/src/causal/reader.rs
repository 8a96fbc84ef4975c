//! Parser for the causal factor graph format
//!
//! Accepts everything [`crate::emit::CausalGraphEmitter`] writes, plus
//! singleton factors (`I` followed by a probability line) and `#` comment
//! lines ahead of any field except the blank separator.

use crate::errors::CausalReadError;
use serde::Serialize;
use std::iter::Enumerate;
use std::str::Lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CausalKind {
    /// Prior on the head alone.
    Singleton,
    /// Head fires with the factor probability when every body variable holds.
    And,
    /// Head fires with the factor probability when any body variable holds.
    Or,
}

impl CausalKind {
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'I' => Some(CausalKind::Singleton),
            '*' => Some(CausalKind::And),
            '+' => Some(CausalKind::Or),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CausalFactor {
    pub head: usize,
    pub kind: CausalKind,
    pub probability: f64,
    pub body: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CausalGraph {
    pub factors: Vec<CausalFactor>,
}

impl CausalGraph {
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

struct LineCursor<'a> {
    lines: Enumerate<Lines<'a>>,
    last: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            last: 0,
        }
    }

    fn next_raw(&mut self, what: &'static str) -> Result<(usize, &'a str), CausalReadError> {
        match self.lines.next() {
            Some((idx, line)) => {
                self.last = idx + 1;
                Ok((idx + 1, line.trim()))
            }
            None => Err(CausalReadError::UnexpectedEof {
                line: self.last + 1,
                what,
            }),
        }
    }

    /// Next line that is not a `#` comment.
    fn next_field(&mut self, what: &'static str) -> Result<(usize, &'a str), CausalReadError> {
        loop {
            let (line_no, line) = self.next_raw(what)?;
            if !line.starts_with('#') {
                return Ok((line_no, line));
            }
        }
    }

    fn next_number<T: std::str::FromStr>(&mut self, what: &'static str) -> Result<T, CausalReadError> {
        let (line, text) = self.next_field(what)?;
        parse_number(text, line, what)
    }
}

fn parse_number<T: std::str::FromStr>(
    text: &str,
    line: usize,
    what: &'static str,
) -> Result<T, CausalReadError> {
    text.parse().map_err(|_| CausalReadError::InvalidNumber {
        line,
        what,
        token: text.to_string(),
    })
}

pub fn read_causal_graph(text: &str) -> Result<CausalGraph, CausalReadError> {
    let mut cursor = LineCursor::new(text);
    let count: usize = cursor.next_number("factor count")?;
    tracing::debug!("Reading {} causal factors", count);

    let mut factors = Vec::new();
    for _ in 0..count {
        let (line, sep) = cursor.next_raw("empty separator line")?;
        if !sep.is_empty() {
            return Err(CausalReadError::ExpectedSeparator {
                line,
                text: sep.to_string(),
            });
        }
        factors.push(read_factor(&mut cursor)?);
    }

    Ok(CausalGraph { factors })
}

fn read_factor(cursor: &mut LineCursor<'_>) -> Result<CausalFactor, CausalReadError> {
    let head: usize = cursor.next_number("head variable")?;

    let (line, type_line) = cursor.next_field("factor type")?;
    let mut chars = type_line.chars();
    let kind = chars
        .next()
        .and_then(CausalKind::from_tag)
        .ok_or_else(|| CausalReadError::UnknownType {
            line,
            tag: type_line.to_string(),
        })?;

    if kind == CausalKind::Singleton {
        let probability: f64 = cursor.next_number("singleton probability")?;
        return Ok(CausalFactor {
            head,
            kind,
            probability,
            body: Vec::new(),
        });
    }

    let suffix = chars.as_str();
    let probability = if suffix.is_empty() {
        1.0
    } else {
        parse_number(suffix, line, "factor probability")?
    };

    let declared: usize = cursor.next_number("body length")?;
    let (line, body_line) = cursor.next_field("body variables")?;
    let body = body_line
        .split_whitespace()
        .map(|t| parse_number::<usize>(t, line, "body variable"))
        .collect::<Result<Vec<_>, _>>()?;
    if body.len() != declared {
        return Err(CausalReadError::BodyLengthMismatch {
            line,
            declared,
            listed: body.len(),
        });
    }

    Ok(CausalFactor {
        head,
        kind,
        probability,
        body,
    })
}
