//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;

use crate::scalar::Scalar;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n_rows + 1 containing offsets into col_idx and values
/// - col_idx: Column index of each stored entry, strictly increasing within a row
/// - values: Value of each stored entry
///
/// `col_idx` and `values` may be longer than the number of stored entries.
/// Only positions below `row_ptr[n_rows]` are meaningful; anything past
/// that is unused capacity left over from worst-case sizing.
#[derive(Clone)]
pub struct SparseMatrixCSR<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: capacity)
    pub col_idx: Vec<usize>,

    /// Stored values (size: capacity)
    pub values: Vec<T>,
}

impl<T: Scalar> SparseMatrixCSR<T> {
    /// Creates a new CSR matrix with the given dimensions and data
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows
    /// * `n_cols` - Number of columns
    /// * `row_ptr` - Row pointers
    /// * `col_idx` - Column indices
    /// * `values` - Stored values
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr must be non-decreasing and row_ptr[n_rows] <= col_idx.len()
    /// - column indices must be in bounds and strictly increasing within each row
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(
            col_idx.len(),
            values.len(),
            "col_idx.len() must equal values.len()"
        );
        assert_eq!(row_ptr[0], 0, "row_ptr[0] must be 0");
        assert!(
            row_ptr[n_rows] <= col_idx.len(),
            "row_ptr[n_rows] must not exceed col_idx.len()"
        );

        for row in 0..n_rows {
            let (start, end) = (row_ptr[row], row_ptr[row + 1]);
            assert!(start <= end, "row_ptr must be non-decreasing");

            let cols = &col_idx[start..end];
            for &col in cols {
                assert!(
                    col < n_cols,
                    "Column index {} out of bounds (n_cols = {})",
                    col,
                    n_cols
                );
            }
            assert!(
                cols.windows(2).all(|w| w[0] < w[1]),
                "column indices of row {} must be strictly increasing",
                row
            );
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Allocates an empty matrix able to hold `capacity` entries
    ///
    /// All row pointers are zero, so the matrix holds no entries until a
    /// kernel fills the storage and advances `row_ptr`.
    pub fn with_capacity(n_rows: usize, n_cols: usize, capacity: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: vec![0; capacity],
            values: vec![T::zero(); capacity],
        }
    }

    /// Builds a matrix from `(row, col, value)` triplets
    ///
    /// Duplicate coordinates are summed. Entries are kept even when the sum
    /// is zero.
    pub fn from_triplets(n_rows: usize, n_cols: usize, triplets: &[(usize, usize, T)]) -> Self {
        let mut sorted: Vec<(usize, usize, T)> = triplets.to_vec();
        sorted.sort_by_key(|&(row, col, _)| (row, col));

        let mut row_ptr = vec![0; n_rows + 1];
        let mut col_idx: Vec<usize> = Vec::with_capacity(sorted.len());
        let mut values: Vec<T> = Vec::with_capacity(sorted.len());
        let mut last: Option<(usize, usize)> = None;

        for (row, col, val) in sorted {
            assert!(row < n_rows, "Row index {} out of bounds (n_rows = {})", row, n_rows);
            if last == Some((row, col)) {
                if let Some(v) = values.last_mut() {
                    *v += val;
                }
                continue;
            }
            col_idx.push(col);
            values.push(val);
            row_ptr[row + 1] += 1;
            last = Some((row, col));
        }

        for row in 0..n_rows {
            row_ptr[row + 1] += row_ptr[row];
        }

        Self::new(n_rows, n_cols, row_ptr, col_idx, values)
    }

    /// Shape as `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of stored entries in the matrix
    pub fn nnz(&self) -> usize {
        self.row_ptr[self.n_rows]
    }

    /// Number of entries the storage can hold
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the stored elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a stored element
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Drops unused capacity past `nnz()`
    pub fn trim(&mut self) {
        let nnz = self.nnz();
        self.col_idx.truncate(nnz);
        self.values.truncate(nnz);
        self.col_idx.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// Multiplies every stored value by `scale` in place
    pub fn scale(&mut self, scale: T) {
        let nnz = self.nnz();
        for val in &mut self.values[..nnz] {
            *val = *val * scale;
        }
    }

    /// Removes stored entries whose magnitude is at most `atol`
    ///
    /// Compacts the storage in place; rows keep their order and the
    /// freed positions become unused capacity.
    pub fn tidy_up(&mut self, atol: f64) {
        let mut write = 0;
        let mut start = self.row_ptr[0];

        for row in 0..self.n_rows {
            let end = self.row_ptr[row + 1];
            for read in start..end {
                if self.values[read].magnitude() > atol {
                    self.col_idx[write] = self.col_idx[read];
                    self.values[write] = self.values[read];
                    write += 1;
                }
            }
            start = end;
            self.row_ptr[row + 1] = write;
        }
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self::with_capacity(n_rows, n_cols, 0)
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }
}

impl<T: fmt::Debug + Scalar> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {} (capacity {})", self.nnz(), self.capacity())?;

        let max_rows_to_print = 5.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let start = self.row_ptr[i];
                let end = self.row_ptr[i + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for j in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.col_idx[j], self.values[j])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
