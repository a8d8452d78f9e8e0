// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Immutable records of claimed multiplication results.

use crate::{multiply, AtomicMatrix};

/// An immutable bundle of two operand snapshots and a claimed product.
///
/// A record is created once, at the moment a multiplication result is
/// computed, and never mutated afterwards: the fields are private and
/// nothing exposes a mutation path.
///
/// The operand snapshots are taken via [`AtomicMatrix`]'s torn-copy clone,
/// so a record captured under concurrent mutation is internally
/// self-consistent (its own left × right is well-defined) yet the *claimed*
/// product — computed live from the shared matrices — may not match it.
/// Counting those mismatches across many records is how the race harness
/// measures inconsistency.
#[derive(Debug, Clone)]
pub struct MultiplicationRecord {
    lhs: AtomicMatrix,
    rhs: AtomicMatrix,
    product: AtomicMatrix,
}

impl MultiplicationRecord {
    /// Bundles two operand snapshots with the product claimed for them.
    pub fn new(lhs: AtomicMatrix, rhs: AtomicMatrix, product: AtomicMatrix) -> Self {
        Self { lhs, rhs, product }
    }

    /// Recomputes left × right from the stored snapshots and compares the
    /// result to the stored claimed product.
    ///
    /// Pure and deterministic: the record owns its matrices and nothing
    /// mutates them, so repeated calls always agree.
    pub fn is_correct(&self) -> bool {
        self.product == multiply(&self.lhs, &self.rhs)
    }

    /// The stored left-operand snapshot.
    pub fn lhs(&self) -> &AtomicMatrix {
        &self.lhs
    }

    /// The stored right-operand snapshot.
    pub fn rhs(&self) -> &AtomicMatrix {
        &self.rhs
    }

    /// The stored claimed product.
    pub fn claimed_product(&self) -> &AtomicMatrix {
        &self.product
    }
}
