//! Cursor descriptors for raw memory addresses.
//!
//! `*const T` and `*mut T` are random-access cursors with `isize` distances.
//! Stepping uses wrapping pointer arithmetic, so moving a pointer is always
//! safe; only reading through it is not.

use crate::category::RandomAccessTag;
use crate::cursor::{BidirectionalCursor, Cursor, CursorDiff, ForwardCursor, RandomAccessCursor};

/// Element stride in bytes. Zero-sized elements never move, so their
/// distance is always `0`.
#[inline(always)]
const fn stride<T>() -> isize {
    if size_of::<T>() == 0 {
        1
    } else {
        size_of::<T>() as isize
    }
}

#[inline(always)]
fn addr_diff<T>(lhs: usize, rhs: usize) -> isize {
    (lhs.wrapping_sub(rhs) as isize) / stride::<T>()
}

macro_rules! impl_raw_cursor {
    ($kw:tt $(, $m:tt)?) => {
        impl<T> Cursor for *$kw T {
            type Value = T;
            type Distance = isize;
            type Reference<'a>
                = &'a $($m)? T
            where
                Self: 'a;
            type Pointer = *$kw T;
            type Category = RandomAccessTag;
        }

        impl<T> ForwardCursor for *$kw T {
            #[inline(always)]
            fn advance(&mut self) {
                *self = self.wrapping_add(1);
            }

            #[inline(always)]
            unsafe fn get<'a>(&self) -> &'a $($m)? T
            where
                Self: 'a,
            {
                // SAFETY: the caller guarantees the pointer addresses a live element.
                unsafe { &$($m)? **self }
            }

            #[inline(always)]
            fn as_ptr(&self) -> *$kw T {
                *self
            }

            #[inline(always)]
            fn advance_n(&mut self, n: isize) {
                *self = self.wrapping_offset(n);
            }

            #[inline(always)]
            fn distance_to(&self, last: &Self) -> isize {
                last.diff(self)
            }
        }

        impl<T> BidirectionalCursor for *$kw T {
            #[inline(always)]
            fn retreat(&mut self) {
                *self = self.wrapping_sub(1);
            }

            #[inline(always)]
            fn retreat_n(&mut self, n: isize) {
                *self = self.wrapping_offset(n.wrapping_neg());
            }
        }

        impl<T> CursorDiff for *$kw T {
            #[inline(always)]
            fn diff(&self, rhs: &Self) -> isize {
                addr_diff::<T>(self.addr(), rhs.addr())
            }
        }

        impl<T> RandomAccessCursor for *$kw T {
            #[inline(always)]
            fn advance_by(&mut self, n: isize) {
                *self = self.wrapping_offset(n);
            }

            #[inline(always)]
            unsafe fn at<'a>(&self, n: isize) -> &'a $($m)? T
            where
                Self: 'a,
            {
                // SAFETY: the caller guarantees `self + n` addresses a live element.
                unsafe { &$($m)? *self.wrapping_offset(n) }
            }
        }
    };
}

impl_raw_cursor!(const);
impl_raw_cursor!(mut, mut);

impl<T> CursorDiff<*mut T> for *const T {
    #[inline(always)]
    fn diff(&self, rhs: &*mut T) -> isize {
        addr_diff::<T>(self.addr(), rhs.addr())
    }
}

impl<T> CursorDiff<*const T> for *mut T {
    #[inline(always)]
    fn diff(&self, rhs: &*const T) -> isize {
        addr_diff::<T>(self.addr(), rhs.addr())
    }
}

// -----------------------------------------------------------------------------
// Tests
