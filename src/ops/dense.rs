//! Addition of dense matrices
//!
//! When both operands share a layout their buffers line up element for
//! element and the sum is one contiguous vector update. Otherwise the
//! destination is walked one contiguous segment at a time while the right
//! operand is read with a stride equal to the number of segments.

use crate::error::Result;
use crate::matrix::{check_shape, DenseMatrix};
use crate::ops::axpy::{axpy, axpy_strided};
use crate::scalar::{minus_one, Scalar};

/// Computes `left + scale * right` into a new matrix with `left`'s layout
///
/// # Examples
///
/// ```
/// use matsum::{add_dense, DenseMatrix};
///
/// let l = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]], false);
/// let r = DenseMatrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]], true);
///
/// let sum = add_dense(&l, &r, 1.0).unwrap();
///
/// assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
/// ```
pub fn add_dense<T: Scalar>(
    left: &DenseMatrix<T>,
    right: &DenseMatrix<T>,
    scale: T,
) -> Result<DenseMatrix<T>> {
    check_shape(left, right)?;
    let mut out = left.clone();
    add_into(&mut out, right, scale);
    Ok(out)
}

/// Computes `left += scale * right` in place and hands `left` back
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) without
/// touching `left` if the shapes differ.
pub fn iadd_dense<'a, T: Scalar>(
    left: &'a mut DenseMatrix<T>,
    right: &DenseMatrix<T>,
    scale: T,
) -> Result<&'a mut DenseMatrix<T>> {
    check_shape(&*left, right)?;
    add_into(left, right, scale);
    Ok(left)
}

/// Computes `left - right` into a new matrix
pub fn sub_dense<T: Scalar>(left: &DenseMatrix<T>, right: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    add_dense(left, right, minus_one())
}

/// `out += scale * right`, shapes already checked
fn add_into<T: Scalar>(out: &mut DenseMatrix<T>, right: &DenseMatrix<T>, scale: T) {
    log::trace!(
        "add_dense: shape {:?}, fortran {} + {}",
        out.shape(),
        out.is_fortran(),
        right.is_fortran()
    );

    if out.is_fortran() == right.is_fortran() {
        axpy(scale, right.as_slice(), out.as_mut_slice());
        return;
    }

    // (number of contiguous segments, segment length) in the destination
    let (n_outer, n_inner) = if out.is_fortran() {
        (out.n_cols, out.n_rows)
    } else {
        (out.n_rows, out.n_cols)
    };

    let src = right.as_slice();
    for (idx, segment) in out.as_mut_slice().chunks_exact_mut(n_inner.max(1)).take(n_outer).enumerate() {
        axpy_strided(n_inner, scale, &src[idx..], n_outer, segment, 1);
    }
}
