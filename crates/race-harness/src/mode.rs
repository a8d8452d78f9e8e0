// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Synchronization modes for the mutator/compute pair.

use crate::HarnessError;
use std::fmt;
use std::str::FromStr;

/// Whether the two roles coordinate through the shared lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Only per-cell atomicity protects the shared matrices. The mutator is
    /// free to interleave between the loads of a compound operation, so
    /// measured accuracy lands below 100%.
    Unsynchronized,

    /// Both the mutator's write step and the foreground's entire
    /// snapshot-compute-record sequence hold the single shared `Mutex`.
    /// Mutation and computation can never interleave; accuracy is 100%.
    Synchronized,
}

impl SyncMode {
    /// Returns `true` if this mode requires holding the shared lock.
    pub fn takes_lock(self) -> bool {
        matches!(self, Self::Synchronized)
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsynchronized => write!(f, "unsynchronized"),
            Self::Synchronized => write!(f, "synchronized"),
        }
    }
}

impl FromStr for SyncMode {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsynchronized" | "unsync" => Ok(Self::Unsynchronized),
            "synchronized" | "sync" => Ok(Self::Synchronized),
            other => Err(HarnessError::ConfigError(format!(
                "unknown mode '{other}'; expected 'unsynchronized' or 'synchronized'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_names() {
        assert_eq!(
            "unsynchronized".parse::<SyncMode>().unwrap(),
            SyncMode::Unsynchronized
        );
        assert_eq!(
            "synchronized".parse::<SyncMode>().unwrap(),
            SyncMode::Synchronized
        );
    }

    #[test]
    fn test_parse_short_aliases() {
        assert_eq!("unsync".parse::<SyncMode>().unwrap(), SyncMode::Unsynchronized);
        assert_eq!("sync".parse::<SyncMode>().unwrap(), SyncMode::Synchronized);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Synchronized".parse::<SyncMode>().unwrap(),
            SyncMode::Synchronized
        );
    }

    #[test]
    fn test_parse_unknown_fails() {
        let err = "bogus".parse::<SyncMode>().unwrap_err();
        assert!(matches!(err, HarnessError::ConfigError(_)));
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in [SyncMode::Unsynchronized, SyncMode::Synchronized] {
            assert_eq!(mode.to_string().parse::<SyncMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_takes_lock() {
        assert!(!SyncMode::Unsynchronized.takes_lock());
        assert!(SyncMode::Synchronized.takes_lock());
    }
}
