//! Transcode logical Bayesian networks (bnet) into factor-graph and causal
//! factor graph representations.

pub mod causal;
pub mod cli;
pub mod config;
pub mod emit;
pub mod errors;
pub mod network;
pub mod probability;

pub use errors::{BnetError, Result};
