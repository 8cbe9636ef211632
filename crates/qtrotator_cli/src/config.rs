//! rotator.toml handling

use anyhow::{Context, Result};
use qtrotator::{Capabilities, RotatorOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration (rotator.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RotatorConfig {
    #[serde(default)]
    pub rotator: RotatorOptions,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Demo page settings
#[derive(Debug, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Number of panels in the demo container
    #[serde(default = "default_panels")]
    pub panels: usize,
    /// How long to simulate or run, in milliseconds
    #[serde(default = "default_duration")]
    pub duration_ms: u64,
    /// Virtual clock step for `simulate`
    #[serde(default = "default_step")]
    pub step_ms: u64,
}

fn default_panels() -> usize {
    3
}

fn default_duration() -> u64 {
    20_000
}

fn default_step() -> u64 {
    1000
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            panels: default_panels(),
            duration_ms: default_duration(),
            step_ms: default_step(),
        }
    }
}

impl RotatorConfig {
    /// Load configuration from a file, or from `rotator.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("rotator.toml")
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `qtrotator init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
