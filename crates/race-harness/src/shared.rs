// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! State shared between the mutator thread and the compute loop.

use atomic_matrix::AtomicMatrix;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Everything the two roles share, held behind one `Arc`.
///
/// The matrices themselves are mutated through their per-cell atomics, so
/// they sit here as plain fields. The `Mutex` holds no data: it exists only
/// as the external exclusive lock that [`crate::SyncMode::Synchronized`]
/// wraps around compound operations. It is the single lock in the process —
/// never nested, never re-entered, no ordering hazard.
pub struct SharedState {
    lhs: AtomicMatrix,
    rhs: AtomicMatrix,
    lock: Mutex<()>,
    /// Advisory run-flag for the mutator. Has no ordering relationship to
    /// the matrix cells beyond program order within each thread.
    running: AtomicBool,
    /// Total cell stores performed by mutators, for diagnostics.
    cell_writes: AtomicU64,
}

impl SharedState {
    /// Wraps the two operand matrices with the lock and run-flag, both in
    /// their stopped/zero state.
    pub fn new(lhs: AtomicMatrix, rhs: AtomicMatrix) -> Self {
        Self {
            lhs,
            rhs,
            lock: Mutex::new(()),
            running: AtomicBool::new(false),
            cell_writes: AtomicU64::new(0),
        }
    }

    /// The shared left operand.
    pub fn lhs(&self) -> &AtomicMatrix {
        &self.lhs
    }

    /// The shared right operand.
    pub fn rhs(&self) -> &AtomicMatrix {
        &self.rhs
    }

    /// Acquires the shared exclusive lock.
    ///
    /// A poisoned lock is recovered via `into_inner`: the lock guards no
    /// data of its own, so mutual exclusion stays meaningful even after a
    /// peer thread panicked while holding it.
    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current value of the run-flag.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Release);
    }

    pub(crate) fn record_cell_write(&self) {
        self.cell_writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Total cell stores performed by mutator threads so far.
    pub fn cell_writes(&self) -> u64 {
        self.cell_writes.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for SharedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedState")
            .field("running", &self.is_running())
            .field("cell_writes", &self.cell_writes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_stopped() {
        let state = SharedState::new(AtomicMatrix::zeros(), AtomicMatrix::zeros());
        assert!(!state.is_running());
        assert_eq!(state.cell_writes(), 0);
    }

    #[test]
    fn test_run_flag_toggles() {
        let state = SharedState::new(AtomicMatrix::zeros(), AtomicMatrix::zeros());
        state.set_running(true);
        assert!(state.is_running());
        state.set_running(false);
        assert!(!state.is_running());
    }

    #[test]
    fn test_write_counter_accumulates() {
        let state = SharedState::new(AtomicMatrix::zeros(), AtomicMatrix::zeros());
        for _ in 0..5 {
            state.record_cell_write();
        }
        assert_eq!(state.cell_writes(), 5);
    }

    #[test]
    fn test_lock_is_exclusive_but_reacquirable() {
        let state = SharedState::new(AtomicMatrix::zeros(), AtomicMatrix::zeros());
        drop(state.lock());
        // Must not deadlock after the first guard is dropped.
        drop(state.lock());
    }

    #[test]
    fn test_matrices_are_writable_through_shared_refs() {
        let state = SharedState::new(AtomicMatrix::zeros(), AtomicMatrix::zeros());
        state.lhs().set(1, 1, 3.0).unwrap();
        state.rhs().set(2, 2, 4.0).unwrap();
        assert_eq!(state.lhs().get(1, 1).unwrap(), 3.0);
        assert_eq!(state.rhs().get(2, 2).unwrap(), 4.0);
    }
}
