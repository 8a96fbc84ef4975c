//! Rule firing probabilities and their resolution per factor

pub mod resolver;
pub mod table;

pub use resolver::*;
pub use table::*;
