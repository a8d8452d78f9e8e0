// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for matrix construction and access.

use crate::MATRIX_DIM;

/// Errors that can occur when constructing or indexing an
/// [`crate::AtomicMatrix`].
///
/// Every variant is a programming-contract violation: none of these are
/// transient, and no retry is meaningful.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// Construction was given more than four row vectors.
    #[error("cannot initialize a {MATRIX_DIM}x{MATRIX_DIM} matrix with {rows} row vectors")]
    TooManyRows { rows: usize },

    /// A row vector in the constructor input has more than four elements.
    #[error("row {row} has {cols} elements; a {MATRIX_DIM}x{MATRIX_DIM} matrix row holds at most {MATRIX_DIM}")]
    RowTooWide { row: usize, cols: usize },

    /// A row or column index ≥ 4 was used to access a cell.
    #[error("index ({row}, {col}) is outside the {MATRIX_DIM}x{MATRIX_DIM} matrix")]
    IndexOutOfBounds { row: usize, col: usize },
}
