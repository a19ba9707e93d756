//! Row accumulators for sparse addition
//!
//! An accumulator collects the contributions to one output row, summing
//! repeated columns, and then writes the row out in column order. One
//! accumulator is allocated per top-level call and reused for every row.

pub mod scatter;

use crate::scalar::Scalar;

/// Trait for accumulators that build one sparse row at a time
pub trait Accumulator<T: Scalar> {
    /// Add `val` to the running total at `col`
    ///
    /// Repeated scatters to the same column sum, they never overwrite.
    fn scatter(&mut self, val: T, col: usize);

    /// Number of distinct columns touched since the last reset
    fn len(&self) -> usize;

    /// Whether no column has been touched since the last reset
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the touched columns in ascending order into the output buffers
    ///
    /// With `Some(tol)`, a column whose accumulated magnitude is at most
    /// `tol` is skipped. Returns the number of entries written, which is at
    /// most [`len`](Accumulator::len); both buffers must be at least that
    /// long.
    fn gather(&mut self, values: &mut [T], cols: &mut [usize], tolerance: Option<f64>) -> usize;

    /// Forget every touched column so the accumulator can take a new row
    fn reset(&mut self);
}

pub use scatter::SparseAccumulator;
