use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::ops::{Add, AddAssign, Div, Neg, Not, Sub, SubAssign};

mod sealed {
    pub trait Sealed {}
}

/// The signed distance type of a cursor.
///
/// Implemented for the built-in signed integers only. Raw pointers use
/// `isize`, the platform-sized signed integer.
pub trait Distance:
    sealed::Sealed
    + Copy
    + Ord
    + Hash
    + Debug
    + Display
    + Neg<Output = Self>
    + Not<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + 'static
{
    /// The value `0`.
    const ZERO: Self;

    /// The value `1`.
    const ONE: Self;

    /// The value `2`.
    const TWO: Self;

    /// Widens the distance to `i128`, used for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_distance {
    ($($Int:ty),*) => {$(
        impl sealed::Sealed for $Int {}

        impl Distance for $Int {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;

            #[inline(always)]
            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_distance!(i8, i16, i32, i64, i128, isize);
