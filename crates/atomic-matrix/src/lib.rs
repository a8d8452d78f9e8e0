// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # atomic-matrix
//!
//! A fixed 4×4 matrix whose 16 cells are independently-atomic `f64` values.
//!
//! This crate provides:
//! - [`AtomicF64`] — a sequentially-consistent atomic `f64` cell.
//! - [`AtomicMatrix`] — the 4×4 grid of such cells, with bounds-checked
//!   access, torn-copy cloning, and element-wise equality.
//! - [`multiply`] — row·column matrix multiplication built from independent
//!   per-cell atomic loads.
//! - [`MultiplicationRecord`] — an immutable (operands, claimed product)
//!   snapshot with a correctness check.
//!
//! # The Point of This Crate
//! Every single cell access is race-free, yet no compound operation over the
//! matrix is: `Clone`, `PartialEq`, and [`multiply`] all perform many
//! independent atomic loads with no cross-cell ordering, so a concurrent
//! writer can interleave between any two of them. That gap is deliberate —
//! the sibling `race-harness` crate measures it. Do not "fix" it by adding a
//! lock inside these types.

mod cell;
mod error;
mod matrix;
mod ops;
mod record;

pub use cell::AtomicF64;
pub use error::MatrixError;
pub use matrix::{AtomicMatrix, MATRIX_DIM};
pub use ops::multiply;
pub use record::MultiplicationRecord;
