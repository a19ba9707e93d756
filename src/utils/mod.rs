//! Utility functions and helpers

pub mod formats;

pub use formats::{csr_to_ndarray, dense_from_ndarray, dense_to_ndarray, from_sprs_csr, to_sprs_csr};

/// Computes an exclusive prefix sum (scan) for a vector
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0); // First element is always 0

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}
