// File: src/config.rs
// Purpose: Builder configuration parsed from form-builder.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::validate::ValidationMode;

/// Builder configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuilderConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub builder: PanelConfig,
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    #[serde(default)]
    pub mode: ValidationMode,
}

/// Builder panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Prefix of generated field ids (default: "field")
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Options given to new dropdown and radio fields
    #[serde(default = "default_options")]
    pub default_options: Vec<String>,
}

fn default_id_prefix() -> String {
    "field".to_string()
}

fn default_options() -> Vec<String> {
    vec!["Option 1".to_string(), "Option 2".to_string()]
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            default_options: default_options(),
        }
    }
}

impl BuilderConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./form-builder.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("form-builder.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: BuilderConfig = toml::from_str(content)?;
        Ok(config)
    }
}
