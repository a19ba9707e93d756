//! Shape validation shared by every entry point

use crate::error::{Error, Result};

/// Anything with a two-dimensional shape
pub trait Shaped {
    /// Shape as `(n_rows, n_cols)`
    fn shape(&self) -> (usize, usize);
}

impl<T: crate::Scalar> Shaped for super::SparseMatrixCSR<T> {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }
}

impl<T: crate::Scalar> Shaped for super::DenseMatrix<T> {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }
}

/// Fails with [`Error::ShapeMismatch`] unless both shapes are identical
pub fn check_shape<L, R>(left: &L, right: &R) -> Result<()>
where
    L: Shaped + ?Sized,
    R: Shaped + ?Sized,
{
    let (left, right) = (left.shape(), right.shape());
    if left != right {
        return Err(Error::ShapeMismatch { left, right });
    }
    Ok(())
}
