use core::iter::FusedIterator;

use crate::category::Category;
use crate::cursor::{BidirectionalCursor, ForwardCursor};
use crate::distance::Distance;

/// A half-open range `[first, last)` of cursor positions.
///
/// Iterating yields the cursors themselves, not the elements, so the range
/// works for every cursor regardless of how its elements are read.
///
/// ```
/// use cr_traits::{CursorRange, ForwardCursor};
///
/// let data = [1, 2, 3];
/// let first = data.as_ptr();
/// let last = first.wrapping_add(data.len());
///
/// let sum: i32 = CursorRange::new(first, last)
///     .map(|c| unsafe { *c.get() })
///     .sum();
/// assert_eq!(sum, 6);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorRange<C> {
    first: C,
    last: C,
}

impl<C> CursorRange<C> {
    /// Creates a range from its two boundaries.
    ///
    /// `last` must be reachable from `first` by advancing.
    #[inline]
    pub const fn new(first: C, last: C) -> Self {
        Self { first, last }
    }

    /// The first position still in the range.
    #[inline]
    pub const fn first(&self) -> &C {
        &self.first
    }

    /// The end boundary of the range.
    #[inline]
    pub const fn last(&self) -> &C {
        &self.last
    }

    /// Splits the range into its boundaries.
    #[inline]
    pub fn into_bounds(self) -> (C, C) {
        (self.first, self.last)
    }
}

impl<C: ForwardCursor> CursorRange<C> {
    /// Returns `true` if no position is left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Returns the number of positions left.
    #[inline]
    pub fn distance(&self) -> C::Distance {
        self.first.distance_to(&self.last)
    }
}

impl<C: ForwardCursor> Iterator for CursorRange<C> {
    type Item = C;

    #[inline]
    fn next(&mut self) -> Option<C> {
        if self.first == self.last {
            return None;
        }
        let current = self.first.clone();
        self.first.advance();
        Some(current)
    }

    /// Exact for random-access cursors, whose distances take constant time.
    /// Other cursors only report whether the range is empty.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.first == self.last {
            return (0, Some(0));
        }
        if <C::Category as Category>::KIND.is_random_access() {
            let len = usize::try_from(self.distance().to_i128()).unwrap_or(0);
            (len, Some(len))
        } else {
            (1, None)
        }
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for CursorRange<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C> {
        if self.first == self.last {
            return None;
        }
        self.last.retreat();
        Some(self.last.clone())
    }
}

impl<C: ForwardCursor> FusedIterator for CursorRange<C> {}

#[cfg(test)]
mod tests {
    use super::CursorRange;
    use crate::cursor::ForwardCursor;

    #[test]
    fn both_ends() {
        let data = [1u8, 2, 3, 4];
        let first = data.as_ptr();
        let mut range = CursorRange::new(first, first.wrapping_add(4));

        assert_eq!(range.distance(), 4);
        assert_eq!(range.next().map(|c| unsafe { *c.get() }), Some(1));
        assert_eq!(range.next_back().map(|c| unsafe { *c.get() }), Some(4));
        assert_eq!(range.next_back().map(|c| unsafe { *c.get() }), Some(3));
        assert_eq!(range.next().map(|c| unsafe { *c.get() }), Some(2));
        assert!(range.is_empty());
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
    }

    #[test]
    fn bounds_and_size_hint() {
        let data = [5u16; 6];
        let first = data.as_ptr();
        let last = first.wrapping_add(6);
        let mut range = CursorRange::new(first, last);

        assert_eq!(range.size_hint(), (6, Some(6)));
        range.next();
        range.next_back();
        assert_eq!(range.size_hint(), (4, Some(4)));
        assert_eq!(*range.first(), first.wrapping_add(1));
        assert_eq!(*CursorRange::last(&range), first.wrapping_add(5));

        let (lo, hi) = range.into_bounds();
        assert_eq!(hi.distance_to(&lo), -4);
        assert_eq!(CursorRange::new(last, last).size_hint(), (0, Some(0)));
    }
}
