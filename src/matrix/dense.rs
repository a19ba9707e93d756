//! Dense matrix stored in a single contiguous buffer

use std::fmt;

use crate::scalar::Scalar;

/// A dense matrix in either row-major or column-major order
///
/// `values` always holds exactly `n_rows * n_cols` elements. When
/// `fortran` is true element `(i, j)` lives at `i + j * n_rows`,
/// otherwise at `i * n_cols + j`. The layout never changes after
/// construction.
#[derive(Clone, PartialEq)]
pub struct DenseMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Flat element buffer
    values: Vec<T>,

    /// Column-major storage flag
    fortran: bool,
}

impl<T: Scalar> DenseMatrix<T> {
    /// Wraps an existing buffer
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != n_rows * n_cols`.
    pub fn new(n_rows: usize, n_cols: usize, values: Vec<T>, fortran: bool) -> Self {
        assert_eq!(
            values.len(),
            n_rows * n_cols,
            "values.len() must be n_rows * n_cols"
        );
        Self {
            n_rows,
            n_cols,
            values,
            fortran,
        }
    }

    /// Creates a zero matrix with the requested layout
    pub fn zeros(n_rows: usize, n_cols: usize, fortran: bool) -> Self {
        Self::new(n_rows, n_cols, vec![T::zero(); n_rows * n_cols], fortran)
    }

    /// Builds a matrix from row slices, storing it in the requested layout
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<T>], fortran: bool) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == n_cols),
            "all rows must have the same length"
        );

        let mut matrix = Self::zeros(n_rows, n_cols, fortran);
        for (i, row) in rows.iter().enumerate() {
            for (j, &val) in row.iter().enumerate() {
                let idx = matrix.offset(i, j);
                matrix.values[idx] = val;
            }
        }
        matrix
    }

    /// Shape as `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Whether the buffer is column-major
    pub fn is_fortran(&self) -> bool {
        self.fortran
    }

    /// The flat buffer in storage order
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Consumes the matrix, returning its buffer in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        if self.fortran {
            i + j * self.n_rows
        } else {
            i * self.n_cols + j
        }
    }

    /// Element `(i, j)`
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.n_rows && j < self.n_cols, "Index out of bounds");
        self.values[self.offset(i, j)]
    }
}

impl<T: Scalar> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = if self.fortran { "column-major" } else { "row-major" };
        writeln!(f, "DenseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {} ({})", self.n_rows, self.n_cols, order)?;
        for i in 0..self.n_rows.min(5) {
            let row: Vec<T> = (0..self.n_cols.min(5)).map(|j| self.get(i, j)).collect();
            writeln!(f, "    row {}: {:?}", i, row)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_agree_on_elements() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let c = DenseMatrix::from_rows(&rows, false);
        let f = DenseMatrix::from_rows(&rows, true);

        assert_eq!(c.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(f.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(c.get(i, j), f.get(i, j));
            }
        }
    }

    #[test]
    #[should_panic(expected = "values.len() must be n_rows * n_cols")]
    fn test_wrong_buffer_length() {
        DenseMatrix::new(2, 2, vec![1.0, 2.0, 3.0], false);
    }
}
