//! Reference implementation of CSR addition
//!
//! This provides a baseline for correctness testing and performance comparison.
//! It is deliberately simple: every row is summed through an ordered map.

use std::collections::BTreeMap;

use crate::matrix::SparseMatrixCSR;
use crate::scalar::Scalar;

/// Computes `a + scale * b` with a map accumulator, keeping every entry
///
/// Explicit zeros produced by cancellation are retained, so the result
/// matches the kernels run with tidy-up disabled.
pub fn reference_add<T: Scalar>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    scale: T,
) -> SparseMatrixCSR<T> {
    assert_eq!(a.shape(), b.shape(), "Matrix shapes must match for addition");

    let mut row_ptr = Vec::with_capacity(a.n_rows + 1);
    let mut col_idx = Vec::new();
    let mut values = Vec::new();

    row_ptr.push(0);

    for i in 0..a.n_rows {
        let mut accum: BTreeMap<usize, T> = BTreeMap::new();

        for (j, &val) in a.row_iter(i) {
            *accum.entry(j).or_insert(T::zero()) += val;
        }
        for (j, &val) in b.row_iter(i) {
            *accum.entry(j).or_insert(T::zero()) += scale * val;
        }

        for (j, val) in accum {
            col_idx.push(j);
            values.push(val);
        }

        row_ptr.push(col_idx.len());
    }

    SparseMatrixCSR::new(a.n_rows, a.n_cols, row_ptr, col_idx, values)
}
