use anyhow::{anyhow, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::constants::{DEFAULT_BOOK_DEPTH, DEFAULT_REFRESH_SECS, DEFAULT_TICK_SIZE};

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub thalex: ThalexConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Feed endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ThalexConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_instrument")]
    pub instrument: String,

    /// Book levels taken per side from each snapshot.
    #[serde(default = "default_depth")]
    pub depth: usize,
}

/// Simulation loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,

    #[serde(default = "default_tick_size")]
    pub tick_size: f64,

    #[serde(default = "default_layers_path")]
    pub layers_path: String,
}

fn default_base_url() -> String {
    "https://thalex.com".to_string()
}

fn default_instrument() -> String {
    "BTC-PERPETUAL".to_string()
}

fn default_depth() -> usize {
    DEFAULT_BOOK_DEPTH
}

fn default_refresh_secs() -> u64 {
    DEFAULT_REFRESH_SECS
}

fn default_tick_size() -> f64 {
    DEFAULT_TICK_SIZE
}

fn default_layers_path() -> String {
    "layers.json".to_string()
}

impl Default for ThalexConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            instrument: default_instrument(),
            depth: default_depth(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh_secs(),
            tick_size: default_tick_size(),
            layers_path: default_layers_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: AppConfig = toml::from_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!(
            "Instrument: {}, refresh every {}s",
            config.thalex.instrument, config.simulation.refresh_secs
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.thalex.instrument, "BTC-PERPETUAL");
        assert_eq!(config.thalex.depth, 5);
        assert_eq!(config.simulation.refresh_secs, 5);
        assert_eq!(config.simulation.layers_path, "layers.json");
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [thalex]
            instrument = "ETH-PERPETUAL"

            [simulation]
            refresh_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.thalex.instrument, "ETH-PERPETUAL");
        assert_eq!(config.thalex.base_url, "https://thalex.com");
        assert_eq!(config.simulation.refresh_secs, 30);
        assert_eq!(config.simulation.tick_size, 0.001);
    }
}
