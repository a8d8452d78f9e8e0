// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Harness configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! cycles = 100000
//! mode = "unsynchronized"
//! value_ceiling = 4
//! ```

use crate::{HarnessError, SyncMode, DEFAULT_VALUE_CEILING};
use std::path::Path;

/// Reference number of compute-record cycles. Chosen, together with the
/// unthrottled mutator, to make the unsynchronized scenario observe torn
/// products with overwhelming likelihood.
pub const DEFAULT_CYCLES: usize = 100_000;

/// Configuration for a scenario run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HarnessConfig {
    /// Number of compute-record cycles the foreground loop performs.
    #[serde(default = "default_cycles")]
    pub cycles: usize,
    /// Synchronization mode name: `"unsynchronized"` or `"synchronized"`
    /// (short forms `"unsync"`/`"sync"` accepted).
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Exclusive upper bound for the mutator's random cell values.
    #[serde(default = "default_value_ceiling")]
    pub value_ceiling: u32,
}

fn default_cycles() -> usize {
    DEFAULT_CYCLES
}

fn default_mode() -> String {
    SyncMode::Unsynchronized.to_string()
}

fn default_value_ceiling() -> u32 {
    DEFAULT_VALUE_CEILING
}

impl HarnessConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, HarnessError> {
        toml::from_str(toml_str)
            .map_err(|e| HarnessError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, HarnessError> {
        toml::to_string_pretty(self)
            .map_err(|e| HarnessError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Parses the mode string into a [`SyncMode`].
    pub fn parse_mode(&self) -> Result<SyncMode, HarnessError> {
        self.mode.parse()
    }

    /// Checks the configuration for degenerate values.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.cycles == 0 {
            return Err(HarnessError::ConfigError(
                "cycles must be at least 1".into(),
            ));
        }
        if self.value_ceiling == 0 {
            return Err(HarnessError::ConfigError(
                "value_ceiling must be at least 1".into(),
            ));
        }
        self.parse_mode()?;
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            mode: default_mode(),
            value_ceiling: DEFAULT_VALUE_CEILING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = HarnessConfig::default();
        assert_eq!(c.cycles, 100_000);
        assert_eq!(c.mode, "unsynchronized");
        assert_eq!(c.value_ceiling, 4);
        c.validate().unwrap();
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
cycles = 500
mode = "sync"
value_ceiling = 8
"#;
        let c = HarnessConfig::from_toml(toml).unwrap();
        assert_eq!(c.cycles, 500);
        assert_eq!(c.parse_mode().unwrap(), SyncMode::Synchronized);
        assert_eq!(c.value_ceiling, 8);
    }

    #[test]
    fn test_from_toml_defaults_missing_fields() {
        let c = HarnessConfig::from_toml("mode = \"synchronized\"").unwrap();
        assert_eq!(c.cycles, 100_000);
        assert_eq!(c.value_ceiling, 4);
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = HarnessConfig::default();
        let toml = c.to_toml().unwrap();
        let back = HarnessConfig::from_toml(&toml).unwrap();
        assert_eq!(back.cycles, c.cycles);
        assert_eq!(back.mode, c.mode);
        assert_eq!(back.value_ceiling, c.value_ceiling);
    }

    #[test]
    fn test_validate_rejects_zero_cycles() {
        let c = HarnessConfig {
            cycles: 0,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(HarnessError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_zero_ceiling() {
        let c = HarnessConfig {
            value_ceiling: 0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_mode() {
        let c = HarnessConfig {
            mode: "spinlock".into(),
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_bad_toml_fails() {
        assert!(HarnessConfig::from_toml("cycles = \"many\"").is_err());
    }
}
