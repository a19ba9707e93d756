//! Kernel table keyed by operand representation
//!
//! Each entry pairs the representations a kernel accepts with the
//! representation it produces. A caller holding type-erased [`Data`]
//! looks up the entry for its operands and calls through it. Converting
//! between representations is left to the caller, so mixed pairs have no
//! entry.

use std::fmt;

use crate::error::{Error, Result};
use crate::matrix::{DenseMatrix, SparseMatrixCSR};
use crate::ops::{csr, dense};
use crate::scalar::{minus_one, Scalar};

/// Storage representation of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Compressed sparse row
    Csr,
    /// Contiguous dense buffer
    Dense,
}

/// A matrix in one of the supported representations
#[derive(Clone)]
pub enum Data<T> {
    Csr(SparseMatrixCSR<T>),
    Dense(DenseMatrix<T>),
}

impl<T: Scalar> Data<T> {
    pub fn representation(&self) -> Representation {
        match self {
            Data::Csr(_) => Representation::Csr,
            Data::Dense(_) => Representation::Dense,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        match self {
            Data::Csr(m) => m.shape(),
            Data::Dense(m) => m.shape(),
        }
    }
}

impl<T: Scalar> fmt::Debug for Data<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Csr(m) => fmt::Debug::fmt(m, f),
            Data::Dense(m) => fmt::Debug::fmt(m, f),
        }
    }
}

impl<T> From<SparseMatrixCSR<T>> for Data<T> {
    fn from(m: SparseMatrixCSR<T>) -> Self {
        Data::Csr(m)
    }
}

impl<T> From<DenseMatrix<T>> for Data<T> {
    fn from(m: DenseMatrix<T>) -> Self {
        Data::Dense(m)
    }
}

/// Signature shared by every registered addition kernel: `(left, right, scale)`
pub type AddFn<T> = fn(&Data<T>, &Data<T>, T) -> Result<Data<T>>;

/// One row of the kernel table
#[derive(Clone, Copy)]
pub struct Specialisation<T> {
    pub left: Representation,
    pub right: Representation,
    pub output: Representation,
    pub kernel: AddFn<T>,
}

fn csr_kernel<T: Scalar>(left: &Data<T>, right: &Data<T>, scale: T) -> Result<Data<T>> {
    match (left, right) {
        (Data::Csr(l), Data::Csr(r)) => csr::add_csr(l, r, scale).map(Data::Csr),
        _ => Err(mismatch(left, right)),
    }
}

fn dense_kernel<T: Scalar>(left: &Data<T>, right: &Data<T>, scale: T) -> Result<Data<T>> {
    match (left, right) {
        (Data::Dense(l), Data::Dense(r)) => dense::add_dense(l, r, scale).map(Data::Dense),
        _ => Err(mismatch(left, right)),
    }
}

fn mismatch<T: Scalar>(left: &Data<T>, right: &Data<T>) -> Error {
    Error::NoKernel {
        left: left.representation(),
        right: right.representation(),
    }
}

/// The registered addition kernels
pub fn add_kernels<T: Scalar>() -> [Specialisation<T>; 2] {
    [
        Specialisation {
            left: Representation::Csr,
            right: Representation::Csr,
            output: Representation::Csr,
            kernel: csr_kernel::<T>,
        },
        Specialisation {
            left: Representation::Dense,
            right: Representation::Dense,
            output: Representation::Dense,
            kernel: dense_kernel::<T>,
        },
    ]
}

/// Looks up the kernel for a representation pair
pub fn lookup<T: Scalar>(left: Representation, right: Representation) -> Option<Specialisation<T>> {
    add_kernels::<T>()
        .into_iter()
        .find(|s| s.left == left && s.right == right)
}

/// `left + scale * right` through the kernel table
pub fn add<T: Scalar>(left: &Data<T>, right: &Data<T>, scale: T) -> Result<Data<T>> {
    let entry = lookup::<T>(left.representation(), right.representation())
        .ok_or_else(|| mismatch(left, right))?;
    (entry.kernel)(left, right, scale)
}

/// `left - right` through the kernel table
pub fn sub<T: Scalar>(left: &Data<T>, right: &Data<T>) -> Result<Data<T>> {
    add(left, right, minus_one())
}
