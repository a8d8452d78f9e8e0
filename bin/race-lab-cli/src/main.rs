// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # race-lab
//!
//! Command-line interface for the torn-read race demonstration.
//!
//! ## Usage
//! ```bash
//! # Run one scenario
//! race-lab run --mode unsynchronized --cycles 100000
//!
//! # Run both modes back to back and compare
//! race-lab compare
//!
//! # Check the multiplication fixtures without any concurrency
//! race-lab verify
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "race-lab",
    about = "Demonstrates that per-cell atomicity does not make compound matrix operations atomic",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (overrides CLI arguments).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one scenario and report its accuracy.
    Run {
        /// Synchronization mode: unsynchronized (unsync), synchronized (sync).
        #[arg(short, long, default_value = "unsynchronized")]
        mode: String,

        /// Number of compute-record cycles.
        #[arg(short = 'n', long, default_value_t = 100_000)]
        cycles: usize,

        /// Exclusive upper bound of the mutator's random cell values.
        #[arg(long, default_value_t = 4)]
        value_ceiling: u32,
    },

    /// Run both modes with identical settings and compare accuracies.
    Compare {
        /// Number of compute-record cycles per mode.
        #[arg(short = 'n', long, default_value_t = 100_000)]
        cycles: usize,

        /// Exclusive upper bound of the mutator's random cell values.
        #[arg(long, default_value_t = 4)]
        value_ceiling: u32,
    },

    /// Verify the multiplication fixtures without any concurrency.
    Verify,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            mode,
            cycles,
            value_ceiling,
        } => commands::run::execute(cli.config, mode, cycles, value_ceiling),
        Commands::Compare {
            cycles,
            value_ceiling,
        } => commands::compare::execute(cycles, value_ceiling),
        Commands::Verify => commands::verify::execute(),
    }
}
