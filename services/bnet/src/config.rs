use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::probability::SENTINEL_RULE;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fallback behaviour for rule names missing from the probability table.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_sentinel_rule")]
    pub sentinel_rule: String,
    #[serde(default = "default_sentinel_probability")]
    pub sentinel_probability: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub mirror_output: bool,
    #[serde(default = "default_true")]
    pub progress_comments: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            sentinel_rule: default_sentinel_rule(),
            sentinel_probability: default_sentinel_probability(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            mirror_output: true,
            progress_comments: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config from {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .context("Failed to parse config TOML")?;
        if !(0.0..=1.0).contains(&config.resolver.sentinel_probability) {
            anyhow::bail!(
                "resolver.sentinel_probability {} is outside [0, 1]",
                config.resolver.sentinel_probability
            );
        }
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

fn default_sentinel_rule() -> String {
    SENTINEL_RULE.to_string()
}

fn default_sentinel_probability() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}
