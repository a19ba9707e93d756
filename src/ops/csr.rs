//! Addition of CSR matrices
//!
//! Each output row is produced by merging the two input rows in column
//! order through a [`SparseAccumulator`], then gathering the accumulated
//! row straight into the output storage. The output is sized for the worst
//! case `nnz(a) + nnz(b)` up front, so the result may carry unused capacity
//! past `row_ptr[n_rows]`.

use crate::accumulator::{Accumulator, SparseAccumulator};
use crate::error::Result;
use crate::matrix::{check_shape, tidy_settings, SparseMatrixCSR, TidyConfig};
use crate::scalar::{minus_one, Scalar};

/// Computes `left + scale * right` using the process-wide tidy-up settings
///
/// The settings are read once, before any row is processed.
///
/// # Examples
///
/// ```
/// use matsum::{add_csr, SparseMatrixCSR};
///
/// let a = SparseMatrixCSR::new(2, 2, vec![0, 1, 2], vec![0, 1], vec![1.0, 2.0]);
/// let b = SparseMatrixCSR::new(2, 2, vec![0, 2, 2], vec![0, 1], vec![-1.0, 3.0]);
///
/// let c = add_csr(&a, &b, 1.0).unwrap();
///
/// assert_eq!(c.nnz(), 2);
/// assert_eq!(c.row_iter(0).collect::<Vec<_>>(), vec![(1, &3.0)]);
/// ```
pub fn add_csr<T: Scalar>(
    left: &SparseMatrixCSR<T>,
    right: &SparseMatrixCSR<T>,
    scale: T,
) -> Result<SparseMatrixCSR<T>> {
    add_csr_with(left, right, scale, &tidy_settings())
}

/// Computes `left - right` using the process-wide tidy-up settings
pub fn sub_csr<T: Scalar>(
    left: &SparseMatrixCSR<T>,
    right: &SparseMatrixCSR<T>,
) -> Result<SparseMatrixCSR<T>> {
    add_csr(left, right, minus_one())
}

/// Computes `left - right` with explicit tidy-up settings
pub fn sub_csr_with<T: Scalar>(
    left: &SparseMatrixCSR<T>,
    right: &SparseMatrixCSR<T>,
    tidy: &TidyConfig,
) -> Result<SparseMatrixCSR<T>> {
    add_csr_with(left, right, minus_one(), tidy)
}

/// Computes `left + scale * right` with explicit tidy-up settings
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) if the
/// operands differ in shape. Nothing is allocated in that case.
pub fn add_csr_with<T: Scalar>(
    left: &SparseMatrixCSR<T>,
    right: &SparseMatrixCSR<T>,
    scale: T,
    tidy: &TidyConfig,
) -> Result<SparseMatrixCSR<T>> {
    check_shape(left, right)?;
    log::trace!(
        "add_csr: shape {:?}, nnz {} + {}",
        left.shape(),
        left.nnz(),
        right.nnz()
    );

    if let Some(out) = fast_path(left, right, scale, tidy) {
        return Ok(out);
    }

    let mut out = SparseMatrixCSR::with_capacity(left.n_rows, left.n_cols, left.nnz() + right.nnz());
    let mut acc = SparseAccumulator::new(left.n_cols);

    if scale.is_one() {
        add_kernel(left, right, &mut acc, &mut out, tidy.tolerance());
    } else {
        add_scaled_kernel(left, right, scale, &mut acc, &mut out, tidy.tolerance());
    }

    Ok(out)
}

/// Short-circuits when either operand contributes nothing to the merge
///
/// Returns `None` when the general path is needed. Shapes must already
/// have been checked.
pub(crate) fn fast_path<T: Scalar>(
    left: &SparseMatrixCSR<T>,
    right: &SparseMatrixCSR<T>,
    scale: T,
    tidy: &TidyConfig,
) -> Option<SparseMatrixCSR<T>> {
    if right.nnz() == 0 || scale.is_zero() {
        log::debug!("add_csr: right operand contributes nothing, copying left");
        return Some(left.clone());
    }

    if left.nnz() == 0 {
        log::debug!("add_csr: left operand is empty, copying scaled right");
        let mut out = right.clone();
        if !scale.is_one() {
            out.scale(scale);
            if let Some(atol) = tidy.tolerance() {
                out.tidy_up(atol);
            }
        }
        return Some(out);
    }

    None
}

/// Merge kernel for `a + b`
///
/// `out` must be freshly allocated with the shape of `a` and capacity at
/// least `nnz(a) + nnz(b)`; `acc` must be sized for `a.n_cols` and empty.
pub fn add_kernel<T, A>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    acc: &mut A,
    out: &mut SparseMatrixCSR<T>,
    tolerance: Option<f64>,
) where
    T: Scalar,
    A: Accumulator<T>,
{
    merge_rows(a, b, |v| v, acc, out, tolerance)
}

/// Merge kernel for `a + scale * b`
///
/// Same preconditions as [`add_kernel`].
pub fn add_scaled_kernel<T, A>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    scale: T,
    acc: &mut A,
    out: &mut SparseMatrixCSR<T>,
    tolerance: Option<f64>,
) where
    T: Scalar,
    A: Accumulator<T>,
{
    merge_rows(a, b, |v| scale * v, acc, out, tolerance)
}

fn merge_rows<T, A, F>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    map_b: F,
    acc: &mut A,
    out: &mut SparseMatrixCSR<T>,
    tolerance: Option<f64>,
) where
    T: Scalar,
    A: Accumulator<T>,
    F: Fn(T) -> T,
{
    debug_assert!(out.capacity() >= a.nnz() + b.nnz());

    let mut nnz = 0;
    out.row_ptr[0] = 0;

    for row in 0..a.n_rows {
        scatter_row(a, b, row, &map_b, acc);
        nnz += acc.gather(
            &mut out.values[nnz..],
            &mut out.col_idx[nnz..],
            tolerance,
        );
        acc.reset();
        out.row_ptr[row + 1] = nnz;
    }
}

/// Scatters row `row` of `a` and of `map_b(b)` into `acc` in column order
///
/// The two rows are walked with one cursor each; the smaller column goes
/// first. Equal columns need no special case since the accumulator sums
/// them.
pub(crate) fn scatter_row<T, A, F>(
    a: &SparseMatrixCSR<T>,
    b: &SparseMatrixCSR<T>,
    row: usize,
    map_b: &F,
    acc: &mut A,
) where
    T: Scalar,
    A: Accumulator<T>,
    F: Fn(T) -> T,
{
    let done = a.n_cols + 1;
    let (mut ptr_a, end_a) = (a.row_ptr[row], a.row_ptr[row + 1]);
    let (mut ptr_b, end_b) = (b.row_ptr[row], b.row_ptr[row + 1]);

    while ptr_a < end_a || ptr_b < end_b {
        let col_a = if ptr_a < end_a { a.col_idx[ptr_a] } else { done };
        let col_b = if ptr_b < end_b { b.col_idx[ptr_b] } else { done };

        if col_a < col_b {
            acc.scatter(a.values[ptr_a], col_a);
            ptr_a += 1;
        } else {
            acc.scatter(map_b(b.values[ptr_b]), col_b);
            ptr_b += 1;
        }
    }
}
