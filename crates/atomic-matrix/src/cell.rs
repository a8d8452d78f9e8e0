// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A sequentially-consistent atomic `f64` cell.
//!
//! The standard library has no `AtomicF64`, so the value is stored as its
//! IEEE-754 bit pattern in an [`AtomicU64`]. `to_bits`/`from_bits` are exact
//! round-trips, so no precision is lost.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A single atomically-accessed `f64` value.
///
/// Loads and stores use `SeqCst` ordering: each individual cell access is
/// race-free and totally ordered with respect to other accesses of the same
/// cell. No guarantee of any kind is made *across* cells — callers that read
/// several cells observe whatever value each one holds at the instant of its
/// own load.
///
/// Only load and store are offered. There is deliberately no
/// compare-exchange or fetch-add: the containing matrix never needs
/// read-modify-write cells.
pub struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    /// Creates a cell holding `value`.
    pub fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    /// Atomically loads the current value.
    pub fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::SeqCst))
    }

    /// Atomically stores `value`.
    pub fn store(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::SeqCst);
    }
}

impl Default for AtomicF64 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtomicF64({})", self.load())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_load() {
        let cell = AtomicF64::new(3.5);
        assert_eq!(cell.load(), 3.5);
    }

    #[test]
    fn test_store_overwrites() {
        let cell = AtomicF64::new(1.0);
        cell.store(-2.25);
        assert_eq!(cell.load(), -2.25);
    }

    #[test]
    fn test_default_is_zero() {
        let cell = AtomicF64::default();
        assert_eq!(cell.load(), 0.0);
    }

    #[test]
    fn test_bit_exact_roundtrip() {
        // Values that would lose precision under any non-bitwise encoding.
        for v in [f64::MIN_POSITIVE, f64::EPSILON, -0.0, 1e300, 0.1 + 0.2] {
            let cell = AtomicF64::new(v);
            assert_eq!(cell.load().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_debug_format() {
        let cell = AtomicF64::new(7.0);
        assert_eq!(format!("{cell:?}"), "AtomicF64(7)");
    }
}
