//! Error types for bnet transcoding.

use thiserror::Error;

/// Structural defects in the bnet input. All of them abort the run before any
/// output is written.
///
/// Line numbers are 1-based positions in the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input is empty, expected a variable count on line 1")]
    Empty,

    #[error("line 1: invalid variable count {0:?}")]
    InvalidVarCount(String),

    #[error("declared {expected} variables but found only {found} factor lines")]
    ShortInput { expected: usize, found: usize },

    #[error("line {line}: empty factor specification")]
    BlankLine { line: usize },

    #[error("line {line}: unknown combinator tag {tag:?}, expected '*' or '+'")]
    UnknownCombinator { line: usize, tag: String },

    #[error("line {line}: missing {what}")]
    MissingToken { line: usize, what: &'static str },

    #[error("line {line}: parent count {token:?} is not a non-negative integer")]
    InvalidParentCount { line: usize, token: String },

    #[error("line {line}: parent index {token:?} is not a non-negative integer")]
    InvalidParentIndex { line: usize, token: String },

    #[error("line {line}: declared {declared} parents but listed {listed}")]
    ParentCountMismatch {
        line: usize,
        declared: usize,
        listed: usize,
    },
}

/// Defects in the rule-probability side table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read rule probabilities from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected '<rule>: <probability>', got {text:?}")]
    MissingSeparator { line: usize, text: String },

    #[error("line {line}: probability {value:?} for rule {rule} is not a number")]
    InvalidProbability {
        line: usize,
        rule: String,
        value: String,
    },

    #[error("line {line}: probability {value} for rule {rule} is outside [0, 1]")]
    OutOfRange { line: usize, rule: String, value: f64 },
}

/// Defects in a causal factor graph being read back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CausalReadError {
    #[error("line {line}: unexpected end of input, expected {what}")]
    UnexpectedEof { line: usize, what: &'static str },

    #[error("line {line}: {what} {token:?} is not a valid number")]
    InvalidNumber {
        line: usize,
        what: &'static str,
        token: String,
    },

    #[error("line {line}: expected empty separator line, got {text:?}")]
    ExpectedSeparator { line: usize, text: String },

    #[error("line {line}: unknown causal factor type {tag:?}")]
    UnknownType { line: usize, tag: String },

    #[error("line {line}: declared body length {declared} but listed {listed}")]
    BodyLengthMismatch {
        line: usize,
        declared: usize,
        listed: usize,
    },
}

#[derive(Debug, Error)]
pub enum BnetError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("rule table error: {0}")]
    Table(#[from] TableError),

    #[error("causal graph error: {0}")]
    CausalRead(#[from] CausalReadError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BnetError>;
