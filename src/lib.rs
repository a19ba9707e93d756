//! # matsum: sparse and dense matrix addition
//!
//! Kernels computing `out = left + scale * right` (and `left - right`) for
//! two storage representations:
//!
//! - **CSR** ([`SparseMatrixCSR`]): rows are merged in column order through
//!   a reusable scatter/gather [`SparseAccumulator`]. Sums whose magnitude
//!   falls at or below the tidy-up tolerance are dropped so results stay
//!   sparse. The output is allocated for `nnz(left) + nnz(right)` entries
//!   and may carry unused capacity past `row_ptr[n_rows]`.
//! - **Dense** ([`DenseMatrix`]): a flat buffer in row-major or column-major
//!   order. Operands with matching layouts are added as one contiguous
//!   vector; mismatched layouts use strided updates.
//!
//! Every entry point checks shapes first and fails with
//! [`Error::ShapeMismatch`] before touching any data.
//!
//! ## Usage
//!
//! ```
//! use matsum::{add_csr_with, sub_dense, DenseMatrix, SparseMatrixCSR, TidyConfig};
//!
//! let a = SparseMatrixCSR::<f64>::identity(2);
//! let b = SparseMatrixCSR::new(2, 2, vec![0, 2, 2], vec![0, 1], vec![-1.0, 3.0]);
//!
//! // Drop exact cancellations
//! let c = add_csr_with(&a, &b, 1.0, &TidyConfig::with_atol(0.0)).unwrap();
//! assert_eq!(c.nnz(), 2);
//!
//! // Keep them as explicit zeros
//! let c = add_csr_with(&a, &b, 1.0, &TidyConfig::DISABLED).unwrap();
//! assert_eq!(c.nnz(), 3);
//!
//! let l = DenseMatrix::from_rows(&[vec![1.0, 2.0]], false);
//! let r = DenseMatrix::from_rows(&[vec![1.0, 1.0]], true);
//! assert_eq!(sub_dense(&l, &r).unwrap().as_slice(), &[0.0, 1.0]);
//! ```

pub mod accumulator;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod parallel;
pub mod scalar;
pub mod utils;

// Re-export primary components
pub use accumulator::{Accumulator, SparseAccumulator};
pub use error::{Error, Result};
pub use matrix::{check_shape, reference_add, DenseMatrix, SparseMatrixCSR};
pub use matrix::{set_tidy_settings, tidy_settings, TidyConfig};
pub use ops::dispatch::{self, Data, Representation};
pub use ops::{add_csr, add_csr_with, add_dense, iadd_dense, sub_csr, sub_csr_with, sub_dense};
pub use parallel::add_csr_parallel;
pub use scalar::Scalar;
pub use utils::{csr_to_ndarray, dense_from_ndarray, dense_to_ndarray, from_sprs_csr, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
