// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The mutation harness: mutator lifecycle plus the compute-record loop.

use crate::{mutator, HarnessError, RecordLedger, SharedState, SyncMode};
use atomic_matrix::{multiply, AtomicMatrix, MultiplicationRecord};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Default ceiling for the mutator's random cell values: stores land in
/// `[0, 4)`. Small values keep products small and collisions with stale
/// state frequent, which is what makes torn reads observable.
pub const DEFAULT_VALUE_CEILING: u32 = 4;

/// Owns the shared matrices, the mutator thread, and the record ledger.
///
/// Lifecycle is `Idle → Running → Idle`: [`MutationHarness::start`] raises
/// the run-flag and spawns exactly one mutator (idempotent while running);
/// [`MutationHarness::stop`] lowers the flag without blocking;
/// [`MutationHarness::shutdown`] additionally joins the thread.
pub struct MutationHarness {
    shared: Arc<SharedState>,
    mode: SyncMode,
    value_ceiling: u32,
    mutator: Option<JoinHandle<u64>>,
    ledger: RecordLedger,
}

impl MutationHarness {
    /// Creates an idle harness over the two operand matrices.
    pub fn new(lhs: AtomicMatrix, rhs: AtomicMatrix, mode: SyncMode) -> Self {
        Self {
            shared: Arc::new(SharedState::new(lhs, rhs)),
            mode,
            value_ceiling: DEFAULT_VALUE_CEILING,
            mutator: None,
            ledger: RecordLedger::default(),
        }
    }

    /// Overrides the mutator's random value ceiling.
    pub fn with_value_ceiling(mut self, value_ceiling: u32) -> Self {
        self.value_ceiling = value_ceiling;
        self
    }

    /// Starts the background mutator.
    ///
    /// Idempotent: if the run-flag is already up this is a no-op returning
    /// `Ok(false)`, so calling `start` twice never produces a second mutator
    /// writing at doubled frequency. Returns `Ok(true)` when a mutator was
    /// actually spawned.
    pub fn start(&mut self) -> Result<bool, HarnessError> {
        if self.shared.is_running() {
            return Ok(false);
        }
        // A mutator left over from an earlier start/stop cycle must be
        // joined before the flag goes up again, or it would latch onto the
        // new run and we would end up with two of them.
        self.reap_mutator()?;
        self.shared.set_running(true);
        let handle = mutator::spawn(Arc::clone(&self.shared), self.mode, self.value_ceiling)?;
        self.mutator = Some(handle);
        tracing::debug!("mutator started in {} mode", self.mode);
        Ok(true)
    }

    /// Lowers the run-flag without waiting for the mutator to exit.
    ///
    /// Advisory and eventually consistent: the mutator checks the flag at
    /// the top of its loop, so an unbounded number of further writes may
    /// land after `stop` returns. The matrices stay valid for the harness's
    /// whole lifetime, so the stragglers are harmless.
    pub fn stop(&self) {
        self.shared.set_running(false);
    }

    /// Stops the mutator and joins its thread.
    ///
    /// Returns the total number of cell writes performed across all runs.
    /// The original demonstration leaves its mutator detached; joining here
    /// is added teardown discipline for clean process exit and changes
    /// nothing about the race itself.
    pub fn shutdown(&mut self) -> Result<u64, HarnessError> {
        self.stop();
        self.reap_mutator()?;
        Ok(self.shared.cell_writes())
    }

    fn reap_mutator(&mut self) -> Result<(), HarnessError> {
        if let Some(handle) = self.mutator.take() {
            let local = handle.join().map_err(|_| HarnessError::MutatorPanicked)?;
            tracing::debug!("mutator joined after {local} cell writes");
        }
        Ok(())
    }

    /// Returns `true` while the run-flag is up.
    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    /// Total cell writes performed by mutator threads so far.
    pub fn cell_writes(&self) -> u64 {
        self.shared.cell_writes()
    }

    /// The synchronization mode this harness runs under.
    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    /// The state shared with the mutator, for fixture setup and assertions.
    pub fn shared(&self) -> &SharedState {
        &self.shared
    }

    /// Runs `cycles` compute-and-record iterations in the foreground.
    ///
    /// Each cycle snapshots both operands (via the torn-copy clone),
    /// computes the claimed product live from the shared matrices, and
    /// appends the resulting record to the ledger. In
    /// [`SyncMode::Synchronized`] the shared lock is held across the whole
    /// cycle body, excluding the mutator for its duration; in
    /// [`SyncMode::Unsynchronized`] the mutator is free to interleave
    /// between any two of the cycle's atomic loads.
    pub fn run_recorded_cycles(&mut self, cycles: usize) {
        for _ in 0..cycles {
            let _guard = self.mode.takes_lock().then(|| self.shared.lock());
            let lhs = self.shared.lhs().clone();
            let rhs = self.shared.rhs().clone();
            let product = multiply(self.shared.lhs(), self.shared.rhs());
            self.ledger.push(MultiplicationRecord::new(lhs, rhs, product));
        }
    }

    /// The records accumulated so far.
    pub fn ledger(&self) -> &RecordLedger {
        &self.ledger
    }

    /// Clears the record ledger, as scenario teardown does between runs.
    pub fn clear_records(&mut self) {
        self.ledger.clear();
    }
}

/// Best-effort teardown so a dropped harness cannot leak its thread.
impl Drop for MutationHarness {
    fn drop(&mut self) {
        self.stop();
        if let Some(handle) = self.mutator.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_harness(mode: SyncMode) -> MutationHarness {
        MutationHarness::new(AtomicMatrix::zeros(), AtomicMatrix::zeros(), mode)
    }

    #[test]
    fn test_cycles_without_mutator_are_all_correct() {
        let lhs = AtomicMatrix::from([
            [1.0, 2.0, 0.0, 1.0],
            [0.0, 1.0, 1.0, 0.0],
            [1.0, 1.0, 0.0, 2.0],
            [1.0, 0.0, 1.0, 0.0],
        ]);
        let rhs = AtomicMatrix::from([
            [2.0, 2.0, 0.0, 1.0],
            [1.0, 1.0, 1.0, 2.0],
            [1.0, 1.0, 3.0, 2.0],
            [1.0, 2.0, 1.0, 1.0],
        ]);
        let mut harness = MutationHarness::new(lhs, rhs, SyncMode::Unsynchronized);

        // No mutator running: even unsynchronized cycles see stable operands.
        harness.run_recorded_cycles(100);
        assert_eq!(harness.ledger().len(), 100);
        assert_eq!(harness.ledger().correct_count(), 100);
        assert_eq!(harness.ledger().accuracy().unwrap(), 100.0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut harness = idle_harness(SyncMode::Unsynchronized);
        assert!(harness.start().unwrap());
        assert!(!harness.start().unwrap());
        assert!(harness.is_running());
        harness.shutdown().unwrap();
    }

    #[test]
    fn test_shutdown_stops_and_reports_writes() {
        let mut harness = idle_harness(SyncMode::Unsynchronized);
        harness.start().unwrap();
        // Give the mutator a moment to do some work.
        std::thread::sleep(std::time::Duration::from_millis(20));
        let writes = harness.shutdown().unwrap();
        assert!(writes > 0, "mutator performed no writes");
        assert!(!harness.is_running());
    }

    #[test]
    fn test_restart_after_shutdown() {
        let mut harness = idle_harness(SyncMode::Synchronized);
        harness.start().unwrap();
        harness.shutdown().unwrap();
        assert!(harness.start().unwrap());
        assert!(harness.is_running());
        harness.shutdown().unwrap();
    }

    #[test]
    fn test_mutated_values_stay_in_ceiling_range() {
        let mut harness = idle_harness(SyncMode::Unsynchronized).with_value_ceiling(4);
        harness.start().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        harness.shutdown().unwrap();

        for matrix in [harness.shared().lhs(), harness.shared().rhs()] {
            for row in matrix.to_rows() {
                for value in row {
                    assert!((0.0..4.0).contains(&value));
                    assert_eq!(value.fract(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_clear_records() {
        let mut harness = idle_harness(SyncMode::Unsynchronized);
        harness.run_recorded_cycles(10);
        assert_eq!(harness.ledger().len(), 10);
        harness.clear_records();
        assert!(harness.ledger().is_empty());
    }
}
