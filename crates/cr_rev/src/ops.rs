//! Comparison and arithmetic operators of [`ReverseCursor`].
//!
//! Comparisons take two independent base types, so an adaptor over an
//! exclusive cursor compares with one over the matching shared cursor. The
//! ordering is the reverse of the bases' ordering.
//!
//! Offsets are implemented once per [`Distance`](cr_traits::Distance) type,
//! which keeps `r + n` and `r - other` apart for the trait solver.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Index, Sub, SubAssign};

use cr_traits::{BidirectionalCursor, CheckedCursor, CursorDiff, RandomAccessCursor};

use crate::adapter::ReverseCursor;

// -----------------------------------------------------------------------------
// Comparison

impl<U1, U2> PartialEq<ReverseCursor<U2>> for ReverseCursor<U1>
where
    U1: PartialEq<U2>,
{
    #[inline]
    fn eq(&self, other: &ReverseCursor<U2>) -> bool {
        self.current() == other.current()
    }
}

impl<U: Eq> Eq for ReverseCursor<U> {}

impl<U1, U2> PartialOrd<ReverseCursor<U2>> for ReverseCursor<U1>
where
    U1: PartialOrd<U2>,
{
    #[inline]
    fn partial_cmp(&self, other: &ReverseCursor<U2>) -> Option<Ordering> {
        self.current()
            .partial_cmp(other.current())
            .map(Ordering::reverse)
    }

    #[inline]
    fn lt(&self, other: &ReverseCursor<U2>) -> bool {
        self.current() > other.current()
    }

    #[inline]
    fn le(&self, other: &ReverseCursor<U2>) -> bool {
        self.current() >= other.current()
    }

    #[inline]
    fn gt(&self, other: &ReverseCursor<U2>) -> bool {
        self.current() < other.current()
    }

    #[inline]
    fn ge(&self, other: &ReverseCursor<U2>) -> bool {
        self.current() <= other.current()
    }
}

impl<U: Ord> Ord for ReverseCursor<U> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.current().cmp(self.current())
    }
}

// -----------------------------------------------------------------------------
// Distance

impl<U1, U2> Sub<ReverseCursor<U2>> for ReverseCursor<U1>
where
    U1: BidirectionalCursor,
    U2: CursorDiff<U1, Distance = U1::Distance>,
{
    type Output = U1::Distance;

    /// `rhs.base() - self.base()`.
    #[inline]
    #[track_caller]
    fn sub(self, rhs: ReverseCursor<U2>) -> U1::Distance {
        self.diff(&rhs)
    }
}

// -----------------------------------------------------------------------------
// Offsets

macro_rules! impl_offset_ops {
    ($($D:ty),*) => {$(
        impl<U> Add<$D> for ReverseCursor<U>
        where
            U: RandomAccessCursor<Distance = $D>,
        {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn add(mut self, n: $D) -> Self {
                self.advance_by(n);
                self
            }
        }

        impl<U> Add<ReverseCursor<U>> for $D
        where
            U: RandomAccessCursor<Distance = $D>,
        {
            type Output = ReverseCursor<U>;

            #[inline]
            #[track_caller]
            fn add(self, mut cursor: ReverseCursor<U>) -> ReverseCursor<U> {
                cursor.advance_by(self);
                cursor
            }
        }

        impl<U> Sub<$D> for ReverseCursor<U>
        where
            U: RandomAccessCursor<Distance = $D>,
        {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn sub(mut self, n: $D) -> Self {
                self.retreat_by(n);
                self
            }
        }

        impl<U> AddAssign<$D> for ReverseCursor<U>
        where
            U: RandomAccessCursor<Distance = $D>,
        {
            #[inline]
            #[track_caller]
            fn add_assign(&mut self, n: $D) {
                self.advance_by(n);
            }
        }

        impl<U> SubAssign<$D> for ReverseCursor<U>
        where
            U: RandomAccessCursor<Distance = $D>,
        {
            #[inline]
            #[track_caller]
            fn sub_assign(&mut self, n: $D) {
                self.retreat_by(n);
            }
        }

        impl<U> Index<$D> for ReverseCursor<U>
        where
            U: RandomAccessCursor<Distance = $D> + CheckedCursor,
        {
            type Output = U::Value;

            /// The element `n` positions further along the reversed walk.
            ///
            /// # Panics
            ///
            /// Panics if that position is not an element of the sequence.
            #[inline]
            #[track_caller]
            fn index(&self, n: $D) -> &U::Value {
                match self.try_at(n) {
                    Ok(value) => value,
                    Err(err) => panic!("{err}"),
                }
            }
        }
    )*};
}

impl_offset_ops!(i8, i16, i32, i64, i128, isize);
