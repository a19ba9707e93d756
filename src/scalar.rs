//! Element types supported by the addition kernels

use num_complex::Complex;
use num_traits::Num;
use std::fmt::Debug;
use std::ops::AddAssign;

/// A matrix element
///
/// Besides ordinary arithmetic, the tidy-up policy needs the absolute
/// value of an element to decide whether it is small enough to drop.
pub trait Scalar: Copy + Num + AddAssign + Send + Sync + Debug + 'static {
    /// Absolute value (modulus for complex numbers)
    fn magnitude(&self) -> f64;
}

impl Scalar for f64 {
    fn magnitude(&self) -> f64 {
        self.abs()
    }
}

impl Scalar for f32 {
    fn magnitude(&self) -> f64 {
        f64::from(self.abs())
    }
}

impl Scalar for Complex<f64> {
    fn magnitude(&self) -> f64 {
        self.norm()
    }
}

impl Scalar for Complex<f32> {
    fn magnitude(&self) -> f64 {
        f64::from(self.norm())
    }
}

/// The scalar `-1`, used by the subtraction entry points
pub fn minus_one<T: Scalar>() -> T {
    T::zero() - T::one()
}
