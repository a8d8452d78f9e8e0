// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # race-harness
//!
//! The concurrent harness that demonstrates why per-cell atomicity is not
//! enough for compound matrix operations.
//!
//! Two roles run concurrently as OS threads:
//! - a background **mutator** that loops without throttling, storing a
//!   random small integer value into one random cell of each shared operand
//!   matrix per iteration;
//! - a foreground **compute loop** that repeatedly snapshots the operands,
//!   computes their product live, and appends a
//!   [`atomic_matrix::MultiplicationRecord`] to a ledger.
//!
//! In [`SyncMode::Unsynchronized`] nothing but the per-cell atomics guards
//! the matrices, so the mutator can interleave between the product's 128
//! independent loads; recomputing each record from its own snapshots then
//! disagrees with the claimed product for a measurable fraction of records.
//! In [`SyncMode::Synchronized`] one shared `Mutex` covers both the
//! mutator's write step and the whole snapshot-compute-record sequence, and
//! the measured accuracy is exactly 100%.
//!
//! # Teardown
//! The original demonstration detaches its mutator. [`MutationHarness`]
//! keeps the join handle and joins on [`MutationHarness::shutdown`] (and in
//! `Drop`) so tests exit cleanly — a teardown discipline, not a change in
//! race semantics.

mod config;
mod error;
mod harness;
mod ledger;
mod mode;
mod mutator;
mod scenario;
mod shared;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use harness::{MutationHarness, DEFAULT_VALUE_CEILING};
pub use ledger::RecordLedger;
pub use mode::SyncMode;
pub use scenario::{
    demo_lhs, demo_rhs, expected_lhs_times_rhs, expected_rhs_times_lhs, run_scenario,
    ScenarioReport,
};
pub use shared::SharedState;
