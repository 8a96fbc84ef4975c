//! Plumbing shared by the command-line programs

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only program output. `RUST_LOG`
/// overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Read the whole bnet document from `path`, or from stdin when absent.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read bnet from {:?}", p)),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read bnet from stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "2\n* R1 1 0\n+ 1 0\n").unwrap();

        let text = read_input(Some(file.path())).unwrap();
        assert_eq!(text, "2\n* R1 1 0\n+ 1 0\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/named_bnet.out"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read bnet"));
    }
}
