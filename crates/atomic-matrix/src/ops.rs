// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix multiplication over atomic-cell matrices.

use crate::{AtomicMatrix, MATRIX_DIM};
use std::ops::Mul;

/// Computes the row·column product of two 4×4 matrices.
///
/// Each of the 16 output cells is the dot product of a row of `lhs` and a
/// column of `rhs`: 4 independent atomic loads from each operand, 8 per
/// output cell, 128 across the whole multiplication. No lock is taken across
/// any of them — every load observes whatever value its cell holds at that
/// instant.
///
/// This is the operation under test in this repository: a writer that
/// stores into `lhs` or `rhs` between any two of the 128 loads produces a
/// product reflecting a hybrid of old and new operand states, even though
/// every individual load is race-free.
pub fn multiply(lhs: &AtomicMatrix, rhs: &AtomicMatrix) -> AtomicMatrix {
    let product = AtomicMatrix::zeros();
    for row in 0..MATRIX_DIM {
        for col in 0..MATRIX_DIM {
            let mut dot = 0.0;
            for k in 0..MATRIX_DIM {
                dot += lhs.cells[row][k].load() * rhs.cells[k][col].load();
            }
            product.cells[row][col].store(dot);
        }
    }
    product
}

/// Operator sugar: `&a * &b` delegates to [`multiply`].
impl Mul for &AtomicMatrix {
    type Output = AtomicMatrix;

    fn mul(self, rhs: &AtomicMatrix) -> AtomicMatrix {
        multiply(self, rhs)
    }
}
