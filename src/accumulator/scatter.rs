//! Dense scatter/gather accumulator
//!
//! Values live in a dense array indexed by column, alongside occupancy
//! flags and the list of touched columns in arrival order. Resetting only
//! visits the touched columns, so the cost per row is proportional to the
//! row's entries rather than to the matrix width.

use crate::accumulator::Accumulator;
use crate::scalar::Scalar;

/// Scatter/gather accumulator for a single output row
pub struct SparseAccumulator<T> {
    /// The dense accumulation array
    values: Vec<T>,

    /// Flags to track which positions in the dense array are in use
    occupied: Vec<bool>,

    /// Touched columns in the order they were first scattered
    touched: Vec<usize>,

    /// Whether `touched` is still in ascending order
    sorted: bool,
}

impl<T: Scalar> SparseAccumulator<T> {
    /// Create a new accumulator for rows of `n_cols` columns
    pub fn new(n_cols: usize) -> Self {
        Self {
            values: vec![T::zero(); n_cols],
            occupied: vec![false; n_cols],
            touched: Vec::new(),
            sorted: true,
        }
    }

    /// Number of columns the accumulator was sized for
    pub fn n_cols(&self) -> usize {
        self.values.len()
    }

    /// Gathers into freshly allocated vectors
    ///
    /// Convenience for callers that do not own a preallocated output.
    pub fn gather_vec(&mut self, tolerance: Option<f64>) -> (Vec<usize>, Vec<T>) {
        let mut cols = vec![0; self.touched.len()];
        let mut values = vec![T::zero(); self.touched.len()];
        let n = self.gather(&mut values, &mut cols, tolerance);
        cols.truncate(n);
        values.truncate(n);
        (cols, values)
    }
}

impl<T: Scalar> Accumulator<T> for SparseAccumulator<T> {
    fn scatter(&mut self, val: T, col: usize) {
        if self.occupied[col] {
            self.values[col] += val;
            return;
        }

        if let Some(&last) = self.touched.last() {
            self.sorted &= last < col;
        }
        self.occupied[col] = true;
        self.touched.push(col);
        self.values[col] = val;
    }

    fn len(&self) -> usize {
        self.touched.len()
    }

    fn gather(&mut self, values: &mut [T], cols: &mut [usize], tolerance: Option<f64>) -> usize {
        // Merging two sorted rows scatters in column order, so this sort
        // only runs for callers that scatter arbitrarily.
        if !self.sorted {
            self.touched.sort_unstable();
            self.sorted = true;
        }

        let mut n = 0;
        for &col in &self.touched {
            let val = self.values[col];
            if let Some(tol) = tolerance {
                if val.magnitude() <= tol {
                    continue;
                }
            }
            values[n] = val;
            cols[n] = col;
            n += 1;
        }
        n
    }

    fn reset(&mut self) {
        for &col in &self.touched {
            self.occupied[col] = false;
            self.values[col] = T::zero();
        }
        self.touched.clear();
        self.sorted = true;
    }
}
