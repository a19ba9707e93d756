// Matrix data structures and settings

pub mod config;
pub mod csr;
pub mod dense;
pub mod reference;
pub mod shape;

pub use config::{set_tidy_settings, tidy_settings, TidyConfig, DEFAULT_ATOL};
pub use csr::SparseMatrixCSR;
pub use dense::DenseMatrix;
pub use reference::reference_add;
pub use shape::{check_shape, Shaped};
