//! Bucket counter abstraction.
//!
//! Buckets are generic over their counter width so that memory-constrained
//! hosts can trade range for footprint (an i8 bucket is a quarter the size of
//! an i32 one). The trait is sealed: the saturation arithmetic in the
//! histogram engine is only correct for the widths implemented here.

use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// A signed integral bucket counter.
///
/// Counters saturate symmetrically at `±CEILING`. The floor is `-CEILING`,
/// one above the type's own minimum, so that every reachable count has a
/// representable negation.
pub trait Counter:
    Copy + Eq + Ord + fmt::Debug + fmt::Display + Send + Sync + sealed::Sealed + 'static
{
    /// Saturation ceiling: the largest magnitude a single bucket may hold.
    const CEILING: Self;

    /// Additive identity.
    const ZERO: Self;

    /// Saturation floor, `-CEILING`.
    fn floor() -> Self;

    /// Step up by one. Callers must have checked `self < CEILING`.
    fn inc(self) -> Self;

    /// Step down by one. Callers must have checked `self > floor()`.
    fn dec(self) -> Self;

    /// Widen losslessly.
    fn to_i64(self) -> i64;

    /// Convert for ratio arithmetic.
    fn to_f64(self) -> f64;

    /// Narrow from `i64`, rejecting values outside `[-CEILING, CEILING]`.
    fn from_i64(value: i64) -> Option<Self>;
}

macro_rules! impl_counter {
    ($($ty:ty),* $(,)?) => {$(
        impl Counter for $ty {
            const CEILING: Self = <$ty>::MAX;
            const ZERO: Self = 0;

            #[inline]
            fn floor() -> Self {
                -<$ty>::MAX
            }

            #[inline]
            fn inc(self) -> Self {
                debug_assert!(self < Self::CEILING);
                self + 1
            }

            #[inline]
            fn dec(self) -> Self {
                debug_assert!(self > Self::floor());
                self - 1
            }

            #[inline]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i64(value: i64) -> Option<Self> {
                let ceiling = <$ty>::MAX as i64;
                if (-ceiling..=ceiling).contains(&value) {
                    Some(value as $ty)
                } else {
                    None
                }
            }
        }
    )*};
}

impl_counter!(i8, i16, i32, i64);
