// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The background mutator thread.

use crate::{SharedState, SyncMode};
use atomic_matrix::{AtomicMatrix, MATRIX_DIM};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Spawns the mutator as a named OS thread.
///
/// The thread loops until it observes the run-flag false: in each iteration
/// it optionally takes the shared lock (per `mode`), then stores a uniformly
/// random integer-valued `f64` in `[0, value_ceiling)` into one uniformly
/// random cell of each operand. There is no sleep or backoff anywhere in the
/// loop — the unthrottled write rate is what makes the unsynchronized
/// scenario reliably observe torn products at the reference cycle count.
///
/// Random indices are always in range by construction, so the mutator never
/// raises; it returns its local cell-write count when joined.
pub(crate) fn spawn(
    shared: Arc<SharedState>,
    mode: SyncMode,
    value_ceiling: u32,
) -> std::io::Result<JoinHandle<u64>> {
    thread::Builder::new()
        .name("matrix-mutator".into())
        .spawn(move || {
            let mut rng = rand::thread_rng();
            let mut writes = 0u64;
            while shared.is_running() {
                // Guard lives to the end of the iteration, covering both
                // stores, mirroring the compute loop's lock scope.
                let _guard = mode.takes_lock().then(|| shared.lock());
                writes += scramble_cell(shared.lhs(), &mut rng, value_ceiling);
                writes += scramble_cell(shared.rhs(), &mut rng, value_ceiling);
                shared.record_cell_write();
                shared.record_cell_write();
            }
            tracing::debug!("mutator stopping after {writes} cell writes");
            writes
        })
}

/// Stores a random small integer value into one random cell of `matrix`.
///
/// Returns the number of stores that landed (1; the indices come from
/// `gen_range(0..MATRIX_DIM)`, so the bounds check cannot fail).
fn scramble_cell(matrix: &AtomicMatrix, rng: &mut ThreadRng, value_ceiling: u32) -> u64 {
    let row = rng.gen_range(0..MATRIX_DIM);
    let col = rng.gen_range(0..MATRIX_DIM);
    let value = f64::from(rng.gen_range(0..value_ceiling));
    u64::from(matrix.set(row, col, value).is_ok())
}
