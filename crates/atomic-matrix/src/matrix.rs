// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The 4×4 matrix of independently-atomic `f64` cells.

use crate::{AtomicF64, MatrixError};
use std::fmt;

/// Number of rows and columns in an [`AtomicMatrix`]. The dimension is fixed
/// for the lifetime of every matrix; there is no resizing.
pub const MATRIX_DIM: usize = 4;

/// A fixed 4×4 grid of [`AtomicF64`] cells.
///
/// The matrix is a value type: it owns its 16 cells and is destroyed when
/// its owner goes out of scope. Mutation goes through `&self` (interior
/// mutability via the atomic cells), so a matrix can be shared between
/// threads behind an `Arc` and written without external locking.
///
/// # Atomicity Granularity
/// Each *cell* access is atomic and `SeqCst`-ordered. The matrix as a whole
/// is not: `Clone` and `PartialEq` walk the cells with 16 independent loads
/// in row-major order, so a clone or comparison concurrent with mutation can
/// observe a torn mixture of old and new cell values. That behavior is the
/// subject of this repository's demonstration and is intentional.
pub struct AtomicMatrix {
    pub(crate) cells: [[AtomicF64; MATRIX_DIM]; MATRIX_DIM],
}

impl AtomicMatrix {
    /// Creates the all-zero matrix.
    pub fn zeros() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| AtomicF64::default())),
        }
    }

    /// Creates a matrix from an ordered sequence of row vectors.
    ///
    /// Rows beyond the fourth, or any row with more than four elements, are
    /// a construction error. Missing rows and missing trailing cells are
    /// zero-filled, so `from_rows::<[f64; 0]>(&[])` yields the zero matrix.
    ///
    /// # Examples
    /// ```
    /// use atomic_matrix::AtomicMatrix;
    /// let m = AtomicMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap();
    /// assert_eq!(m.get(0, 1).unwrap(), 2.0);
    /// assert_eq!(m.get(3, 3).unwrap(), 0.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        if rows.len() > MATRIX_DIM {
            return Err(MatrixError::TooManyRows { rows: rows.len() });
        }
        let matrix = Self::zeros();
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() > MATRIX_DIM {
                return Err(MatrixError::RowTooWide {
                    row: r,
                    cols: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                matrix.cells[r][c].store(value);
            }
        }
        Ok(matrix)
    }

    /// Atomically loads the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.cells[row][col].load())
    }

    /// Atomically stores `value` into the cell at `(row, col)`.
    ///
    /// Takes `&self`: the write goes through the cell's interior atomicity.
    pub fn set(&self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self.cells[row][col].store(value);
        Ok(())
    }

    /// Loads all 16 cells into a plain array, row-major.
    ///
    /// Like every compound read on this type, the 16 loads are independent;
    /// with a concurrent writer the array can mix old and new values.
    pub fn to_rows(&self) -> [[f64; MATRIX_DIM]; MATRIX_DIM] {
        std::array::from_fn(|r| std::array::from_fn(|c| self.cells[r][c].load()))
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= MATRIX_DIM || col >= MATRIX_DIM {
            return Err(MatrixError::IndexOutOfBounds { row, col });
        }
        Ok(())
    }
}

impl Default for AtomicMatrix {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Infallible constructor for full 4×4 literals, used by fixtures and tests.
impl From<[[f64; MATRIX_DIM]; MATRIX_DIM]> for AtomicMatrix {
    fn from(values: [[f64; MATRIX_DIM]; MATRIX_DIM]) -> Self {
        let matrix = Self::zeros();
        for (r, row) in values.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                matrix.cells[r][c].store(value);
            }
        }
        matrix
    }
}

/// Cell-by-cell copy: 16 independent load-then-store pairs in row-major
/// order.
///
/// The copy is NOT atomic as a whole. A clone taken while another thread is
/// storing into the source can capture some cells before a write and some
/// after, yielding a matrix state the source never held at any single
/// instant. This is the exact mechanism that lets the race harness observe
/// torn snapshots; adding a lock here would defeat the demonstration.
impl Clone for AtomicMatrix {
    fn clone(&self) -> Self {
        let copy = Self::zeros();
        for r in 0..MATRIX_DIM {
            for c in 0..MATRIX_DIM {
                copy.cells[r][c].store(self.cells[r][c].load());
            }
        }
        copy
    }
}

/// Element-wise equality via 16 independent pair loads, `false` on the first
/// mismatch.
///
/// Not atomic as a whole. Acceptable here because equality is only ever used
/// on values that are not being concurrently mutated at comparison time.
impl PartialEq for AtomicMatrix {
    fn eq(&self, other: &Self) -> bool {
        for r in 0..MATRIX_DIM {
            for c in 0..MATRIX_DIM {
                if self.cells[r][c].load() != other.cells[r][c].load() {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for AtomicMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.to_rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[ ")?;
            for value in row {
                write!(f, "{value:>6.2} ")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

// Derived Debug would print raw AtomicU64 bit patterns; format the loaded
// values instead.
impl fmt::Debug for AtomicMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicMatrix").field(&self.to_rows()).finish()
    }
}
