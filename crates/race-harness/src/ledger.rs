// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The ordered collection of multiplication records.

use crate::HarnessError;
use atomic_matrix::MultiplicationRecord;

/// A growing, append-only list of [`MultiplicationRecord`]s.
///
/// Only the foreground compute loop appends; the mutator never touches the
/// ledger. Accuracy is evaluated lazily: each record recomputes its product
/// from its own stored snapshots when asked.
#[derive(Debug, Default)]
pub struct RecordLedger {
    records: Vec<MultiplicationRecord>,
}

impl RecordLedger {
    /// Appends a record.
    pub fn push(&mut self, record: MultiplicationRecord) {
        self.records.push(record);
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records have been pushed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Counts the records whose claimed product matches a recomputation
    /// from their own snapshots.
    pub fn correct_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_correct()).count()
    }

    /// Accuracy as a percentage: `100 × correct / total`.
    ///
    /// Fails with [`HarnessError::NoRecords`] over an empty ledger rather
    /// than dividing by zero.
    pub fn accuracy(&self) -> Result<f64, HarnessError> {
        if self.records.is_empty() {
            return Err(HarnessError::NoRecords);
        }
        Ok((self.correct_count() as f64 * 100.0) / (self.records.len() as f64))
    }
}
