//! Numeric element trait for matrix entries.

use std::fmt::{Debug, Display};

use num_traits::{Signed, ToPrimitive, WrappingAdd, WrappingMul, WrappingSub};

/// Scalar type a [`Matrix`](crate::Matrix) can hold.
///
/// Strassen's combination step subtracts, so only signed types qualify:
/// `i8` through `i128`, `isize`, `f32` and `f64`.
///
/// Every kernel goes through [`plus`](Element::plus),
/// [`minus`](Element::minus) and [`times`](Element::times). Integers wrap in
/// two's complement. Strassen's identities hold modulo `2^bits`, so an
/// intermediate sum may wrap while the product is still exact whenever it
/// is representable. A product that does not fit wraps the same way under
/// every strategy. Floats use IEEE arithmetic.
pub trait Element: Signed + ToPrimitive + Copy + Send + Sync + Debug + Display + 'static {
    /// `self + other`.
    fn plus(self, other: Self) -> Self;

    /// `self - other`.
    fn minus(self, other: Self) -> Self;

    /// `self * other`.
    fn times(self, other: Self) -> Self;

    /// Absolute difference as `f64`, used for tolerance comparisons.
    fn distance(self, other: Self) -> f64;
}

macro_rules! impl_wrapping_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[inline]
            fn plus(self, other: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &other)
            }

            #[inline]
            fn minus(self, other: Self) -> Self {
                WrappingSub::wrapping_sub(&self, &other)
            }

            #[inline]
            fn times(self, other: Self) -> Self {
                WrappingMul::wrapping_mul(&self, &other)
            }

            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn distance(self, other: Self) -> f64 {
                self.abs_diff(other) as f64
            }
        }
    )*};
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[inline]
            fn plus(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn minus(self, other: Self) -> Self {
                self - other
            }

            #[inline]
            fn times(self, other: Self) -> Self {
                self * other
            }

            /// `NaN` if either side is `NaN`.
            #[inline]
            fn distance(self, other: Self) -> f64 {
                (self - other).abs().to_f64().unwrap_or(f64::NAN)
            }
        }
    )*};
}

impl_wrapping_element!(i8, i16, i32, i64, i128, isize);
impl_float_element!(f32, f64);
