// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the mutation harness.

/// Errors that can occur while configuring or driving the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Accuracy was requested over an empty record ledger.
    ///
    /// 0/0 is left undefined on purpose: a caller that recorded nothing has
    /// a driver bug, and a silent 0% or 100% would mask it.
    #[error("accuracy is undefined over an empty record ledger")]
    NoRecords,

    /// Configuration is invalid or could not be parsed.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// A matrix operation rejected its input.
    #[error("matrix error: {0}")]
    Matrix(#[from] atomic_matrix::MatrixError),

    /// The OS refused to spawn the mutator thread.
    #[error("failed to spawn mutator thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The mutator thread panicked before it could be joined.
    #[error("mutator thread panicked")]
    MutatorPanicked,
}
