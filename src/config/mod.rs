// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the handing pass.
//!
//! Thresholds and the adjacency table can be loaded from YAML or TOML.
//! Every field has a default, so a config file only needs the values it
//! changes.

pub mod adjacency;

pub use adjacency::{AdjacencyTable, Neighbors};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::HandingError;
use crate::model::Millis;

/// Tunable parameters for hand assignment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandingConfig {
    /// Rest (ms) between chords that starts a new segment
    #[serde(default = "default_threshold")]
    pub default_threshold: Millis,
    /// Fastest acceptable re-hit of the same tile by the same finger (ms)
    #[serde(default = "default_min_overload_time")]
    pub min_overload_time: Millis,
    /// Time (ms) after release before a finger counts as free again
    #[serde(default = "default_release_time")]
    pub release_time: Millis,
    /// Most fingers one hand may have down at once
    #[serde(default = "default_max_fingers_per_hand")]
    pub max_fingers_per_hand: usize,
    /// Neighbor priority per tile
    #[serde(default)]
    pub adjacency: AdjacencyTable,
}

// Around one beat at 180 bpm
fn default_threshold() -> Millis {
    350
}
// A 1/4 jack at 200 bpm
fn default_min_overload_time() -> Millis {
    80
}
fn default_release_time() -> Millis {
    50
}
fn default_max_fingers_per_hand() -> usize {
    2
}

impl Default for HandingConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            min_overload_time: default_min_overload_time(),
            release_time: default_release_time(),
            max_fingers_per_hand: default_max_fingers_per_hand(),
            adjacency: AdjacencyTable::default(),
        }
    }
}

impl HandingConfig {
    /// Load a configuration file, choosing TOML or YAML by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let parsed = if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        };
        parsed.with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), HandingError> {
        if self.max_fingers_per_hand == 0 {
            return Err(HandingError::InvalidConfig(
                "max_fingers_per_hand must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("default_threshold", self.default_threshold),
            ("min_overload_time", self.min_overload_time),
            ("release_time", self.release_time),
        ] {
            if value < 0 {
                return Err(HandingError::InvalidConfig(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
