//! # Parallel CSR addition
//!
//! Rows are split into contiguous blocks processed with Rayon. Every block
//! owns its accumulator and output buffers, so nothing is shared between
//! workers; the blocks are stitched together afterwards with a prefix sum
//! over the per-row counts.

use rayon::prelude::*;

use crate::accumulator::{Accumulator, SparseAccumulator};
use crate::error::Result;
use crate::matrix::{check_shape, SparseMatrixCSR, TidyConfig};
use crate::ops::csr::{fast_path, scatter_row};
use crate::scalar::Scalar;
use crate::utils::exclusive_scan;

/// Rows per block handed to a worker
const MIN_BLOCK_ROWS: usize = 64;

/// Computes `left + scale * right` with rows processed in parallel
///
/// Produces the same rows as [`add_csr_with`](crate::add_csr_with) but
/// without worst-case slack, since each block knows its exact size before
/// assembly.
///
/// # Examples
///
/// ```
/// use matsum::{add_csr_parallel, SparseMatrixCSR, TidyConfig};
///
/// let a = SparseMatrixCSR::<f64>::identity(3);
/// let c = add_csr_parallel(&a, &a, 2.0, &TidyConfig::default()).unwrap();
///
/// assert_eq!(c.values, vec![3.0, 3.0, 3.0]);
/// ```
pub fn add_csr_parallel<T: Scalar>(
    left: &SparseMatrixCSR<T>,
    right: &SparseMatrixCSR<T>,
    scale: T,
    tidy: &TidyConfig,
) -> Result<SparseMatrixCSR<T>> {
    check_shape(left, right)?;

    if let Some(out) = fast_path(left, right, scale, tidy) {
        return Ok(out);
    }

    let n_rows = left.n_rows;
    let n_cols = left.n_cols;
    let tolerance = tidy.tolerance();
    let block = MIN_BLOCK_ROWS.max(n_rows / (4 * rayon::current_num_threads()).max(1));
    log::trace!(
        "add_csr_parallel: {} rows in blocks of {}, nnz {} + {}",
        n_rows,
        block,
        left.nnz(),
        right.nnz()
    );

    let blocks: Vec<(Vec<usize>, Vec<usize>, Vec<T>)> = (0..n_rows)
        .step_by(block)
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|start| {
            let end = (start + block).min(n_rows);
            let mut acc = SparseAccumulator::new(n_cols);
            let mut counts = Vec::with_capacity(end - start);
            let mut cols = Vec::new();
            let mut vals = Vec::new();

            for row in start..end {
                scatter_row(left, right, row, &|v: T| scale * v, &mut acc);

                let offset = cols.len();
                cols.resize(offset + acc.len(), 0);
                vals.resize(offset + acc.len(), T::zero());
                let n = acc.gather(&mut vals[offset..], &mut cols[offset..], tolerance);
                cols.truncate(offset + n);
                vals.truncate(offset + n);

                acc.reset();
                counts.push(n);
            }

            (counts, cols, vals)
        })
        .collect();

    let counts: Vec<usize> = blocks.iter().flat_map(|(c, _, _)| c.iter().copied()).collect();
    let row_ptr = exclusive_scan(&counts);
    let nnz = row_ptr[n_rows];

    let mut col_idx = Vec::with_capacity(nnz);
    let mut values = Vec::with_capacity(nnz);
    for (_, cols, vals) in blocks {
        col_idx.extend(cols);
        values.extend(vals);
    }

    Ok(SparseMatrixCSR {
        n_rows,
        n_cols,
        row_ptr,
        col_idx,
        values,
    })
}
