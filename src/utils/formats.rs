//! Utilities for converting between our matrix formats and external libraries

use ndarray::{Array2, ArrayView2, ShapeBuilder};
use sprs::CsMat;

use crate::matrix::{DenseMatrix, SparseMatrixCSR};
use crate::scalar::Scalar;

/// Converts our CSR matrix format to sprs CsMat format
///
/// Unused capacity past `nnz()` is not carried over.
pub fn to_sprs_csr<T>(matrix: &SparseMatrixCSR<T>) -> CsMat<T>
where
    T: Scalar + Default,
{
    let nnz = matrix.nnz();
    CsMat::new(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_ptr.clone(),
        matrix.col_idx[..nnz].to_vec(),
        matrix.values[..nnz].to_vec(),
    )
}

/// Converts sprs CsMat in CSR format to our SparseMatrixCSR format
pub fn from_sprs_csr<T>(matrix: CsMat<T>) -> SparseMatrixCSR<T>
where
    T: Scalar + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let shape = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    SparseMatrixCSR::new(shape.0, shape.1, indptr, indices, data)
}

/// Expands a CSR matrix into a row-major ndarray
pub fn csr_to_ndarray<T: Scalar>(matrix: &SparseMatrixCSR<T>) -> Array2<T> {
    let mut dense = Array2::zeros((matrix.n_rows, matrix.n_cols));
    for i in 0..matrix.n_rows {
        for (j, &val) in matrix.row_iter(i) {
            dense[[i, j]] = val;
        }
    }
    dense
}

/// Copies a dense matrix into an ndarray with matching memory order
pub fn dense_to_ndarray<T: Scalar>(matrix: &DenseMatrix<T>) -> Array2<T> {
    let shape = (matrix.n_rows, matrix.n_cols).set_f(matrix.is_fortran());
    Array2::from_shape_fn(shape, |(i, j)| matrix.get(i, j))
}

/// Copies an ndarray into a dense matrix stored in the requested layout
pub fn dense_from_ndarray<T: Scalar>(array: ArrayView2<'_, T>, fortran: bool) -> DenseMatrix<T> {
    let (n_rows, n_cols) = array.dim();
    let values: Vec<T> = if fortran {
        array.t().iter().copied().collect()
    } else {
        array.iter().copied().collect()
    };
    DenseMatrix::new(n_rows, n_cols, values, fortran)
}
