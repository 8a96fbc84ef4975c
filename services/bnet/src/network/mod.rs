//! bnet network model and line-grammar parser

pub mod factor;
pub mod parser;

pub use factor::*;
pub use parser::*;
