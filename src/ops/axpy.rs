//! Scaled vector update `y += alpha * x` over strided views

use crate::scalar::Scalar;

/// `y[k * incy] += alpha * x[k * incx]` for `k in 0..n`
///
/// # Panics
///
/// Panics if either slice is too short for `n` strided elements.
#[inline]
pub fn axpy_strided<T: Scalar>(n: usize, alpha: T, x: &[T], incx: usize, y: &mut [T], incy: usize) {
    if n == 0 {
        return;
    }
    assert!(x.len() > (n - 1) * incx, "x is too short for {} elements", n);
    assert!(y.len() > (n - 1) * incy, "y is too short for {} elements", n);

    if incx == 1 && incy == 1 {
        return axpy(alpha, &x[..n], &mut y[..n]);
    }

    for (yk, &xk) in y.iter_mut().step_by(incy).zip(x.iter().step_by(incx)).take(n) {
        *yk += alpha * xk;
    }
}

/// Contiguous `y += alpha * x`
#[inline]
pub fn axpy<T: Scalar>(alpha: T, x: &[T], y: &mut [T]) {
    debug_assert_eq!(x.len(), y.len());
    if alpha.is_one() {
        for (yk, &xk) in y.iter_mut().zip(x) {
            *yk += xk;
        }
    } else {
        for (yk, &xk) in y.iter_mut().zip(x) {
            *yk += alpha * xk;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous() {
        let x = [1.0, 2.0, 3.0];
        let mut y = [10.0, 20.0, 30.0];
        axpy_strided(3, 2.0, &x, 1, &mut y, 1);
        assert_eq!(y, [12.0, 24.0, 36.0]);
    }

    #[test]
    fn test_strided_source() {
        // Column 1 of a 3x2 row-major buffer
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y = [0.0; 3];
        axpy_strided(3, 1.0, &x[1..], 2, &mut y, 1);
        assert_eq!(y, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_strided_destination() {
        let x = [1.0, 1.0];
        let mut y = [0.0; 5];
        axpy_strided(2, -1.0, &x, 1, &mut y, 3);
        assert_eq!(y, [-1.0, 0.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut y: [f64; 0] = [];
        axpy_strided(0, 1.0, &[], 7, &mut y, 7);
    }
}
