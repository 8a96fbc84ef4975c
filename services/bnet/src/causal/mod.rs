//! Reading causal factor graphs back and summarizing their structure

pub mod reader;
pub mod summary;

pub use reader::*;
pub use summary::*;
