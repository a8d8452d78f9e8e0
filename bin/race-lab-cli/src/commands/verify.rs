// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `race-lab verify` command: check the algebra with no concurrency.
//!
//! Computes both fixture products single-threaded and compares them to the
//! known-good results, confirming the multiplication itself (and its
//! non-commutativity) before any race is measured on top of it.

use atomic_matrix::multiply;
use race_harness::{demo_lhs, demo_rhs, expected_lhs_times_rhs, expected_rhs_times_lhs};

pub fn execute() -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            race-lab · Fixture Verifier              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let lhs = demo_lhs();
    let rhs = demo_rhs();

    println!("  Left operand A:");
    println!("{}", indent(&format!("{lhs}")));
    println!();
    println!("  Right operand B:");
    println!("{}", indent(&format!("{rhs}")));
    println!();

    let ab = multiply(&lhs, &rhs);
    let ba = multiply(&rhs, &lhs);

    println!("  A × B:");
    println!("{}", indent(&format!("{ab}")));
    println!();
    println!("  B × A:");
    println!("{}", indent(&format!("{ba}")));
    println!();

    if ab != expected_lhs_times_rhs() {
        anyhow::bail!("A × B does not match the expected product");
    }
    if ba != expected_rhs_times_lhs() {
        anyhow::bail!("B × A does not match the expected product");
    }
    if ab == ba {
        anyhow::bail!("A × B equals B × A; fixtures are expected not to commute");
    }

    println!("  A × B matches the expected product.");
    println!("  B × A matches the expected product.");
    println!("  A × B != B × A (non-commutativity preserved).");
    println!();

    Ok(())
}

/// Indents every line of a multi-line matrix rendering.
fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("   {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
