// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `race-lab run` command: execute one scenario and print its report.

use race_harness::HarnessConfig;
use std::path::PathBuf;

pub fn execute(
    config_path: Option<PathBuf>,
    mode: String,
    cycles: usize,
    value_ceiling: u32,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            race-lab · Scenario Runner               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Configuration ──────────────────────────────────────────
    let config = match config_path {
        Some(path) => {
            let c = HarnessConfig::from_file(&path)?;
            println!("  Config file: {}", path.display());
            c
        }
        None => HarnessConfig {
            cycles,
            mode,
            value_ceiling,
        },
    };

    println!("  Config:");
    println!("   Mode:           {}", config.mode);
    println!("   Cycles:         {}", config.cycles);
    println!("   Value ceiling:  {}", config.value_ceiling);
    println!();

    // ── Scenario ───────────────────────────────────────────────
    println!("  Running scenario...");
    let report = race_harness::run_scenario(&config)?;
    println!();

    println!("  Results:");
    println!("   Records:        {}", report.cycles);
    println!("   Correct:        {}", report.correct_records);
    println!("   Accuracy:       {:.4}%", report.accuracy_pct);
    println!("   Mutator writes: {}", report.mutator_cell_writes);
    println!(
        "   Compute loop:   {:.2}ms",
        report.elapsed.as_secs_f64() * 1000.0,
    );
    println!();
    println!("  {}", report.summary());

    Ok(())
}
