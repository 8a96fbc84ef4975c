//! Output encoders for parsed networks
//!
//! Two mutually exclusive formats share the parser and resolver:
//! - [`FactorGraphEmitter`]: discrete variables plus sparse conditional
//!   probability tables
//! - [`CausalGraphEmitter`]: compact causal-factor records

pub mod causal_graph;
pub mod factor_graph;
pub mod sink;

pub use causal_graph::*;
pub use factor_graph::*;
pub use sink::*;

use crate::errors::Result;
use crate::network::{parse_network, Network};
use std::io::{self, Write};

pub trait Emitter {
    /// Short name of the output format, for logging.
    fn format_name(&self) -> &'static str;

    /// Write the whole network in variable-index order.
    fn emit<W: Write>(&self, network: &Network, sink: &mut OutputSink<W>) -> io::Result<()>;
}

/// Parse the complete input, then emit it. Nothing reaches `sink` unless the
/// whole input parses.
pub fn transcode<E: Emitter, W: Write>(
    input: &str,
    emitter: &E,
    sink: &mut OutputSink<W>,
) -> Result<Network> {
    let network = parse_network(input)?;
    tracing::info!(
        "Parsed {} variables ({} conjunctions), emitting {}",
        network.num_vars(),
        network.conjunction_count(),
        emitter.format_name()
    );

    emitter.emit(&network, sink)?;
    sink.flush()?;

    tracing::info!("Wrote {} lines", sink.lines_written());
    Ok(network)
}

/// Render a probability in shortest round-trip form.
///
/// Magnitudes in `[1e-4, 1e16)` print as decimals that always carry a
/// fractional part (`1.0`, `0.7`). Anything else non-zero uses an exponent
/// with a sign and at least two digits (`1e-05`, `2.5e-07`).
pub fn format_probability(p: f64) -> String {
    if !p.is_finite() {
        return p.to_string();
    }
    let magnitude = p.abs();
    if p != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", p);
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            if let Ok(exp) = exponent.parse::<i32>() {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exp.abs());
            }
        }
        return sci;
    }
    let s = p.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}
