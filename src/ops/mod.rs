//! Addition and subtraction kernels

pub mod axpy;
pub mod csr;
pub mod dense;
pub mod dispatch;

pub use csr::{add_csr, add_csr_with, add_kernel, add_scaled_kernel, sub_csr, sub_csr_with};
pub use dense::{add_dense, iadd_dense, sub_dense};
pub use dispatch::{Data, Representation};
