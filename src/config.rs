// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default configuration file looked up by [`KernelConfig::load`]
pub const CONFIG_FILE: &str = "meshbuilder.toml";

/// Settings for the command-line front end and bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Distance a face is pushed out when extruded
    pub extrude_distance: f32,
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Log filter directive, e.g. "warn" or "meshbuilder=debug"
    pub log_filter: String,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            extrude_distance: 0.5,
            pretty_json: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl KernelConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: KernelConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `MESHBUILDER_*` overrides from a variable lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(distance) = lookup("MESHBUILDER_EXTRUDE_DISTANCE") {
            match distance.parse() {
                Ok(value) => self.extrude_distance = value,
                Err(_) => warn!(%distance, "ignoring invalid MESHBUILDER_EXTRUDE_DISTANCE"),
            }
        }

        if let Some(pretty) = lookup("MESHBUILDER_PRETTY_JSON") {
            match pretty.parse() {
                Ok(value) => self.pretty_json = value,
                Err(_) => warn!(%pretty, "ignoring invalid MESHBUILDER_PRETTY_JSON"),
            }
        }

        if let Some(filter) = lookup("MESHBUILDER_LOG") {
            self.log_filter = filter;
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
