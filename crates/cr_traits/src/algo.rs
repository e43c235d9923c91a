//! Generic algorithms over cursors.
//!
//! Movement functions take the fastest path the cursor offers: random-access
//! cursors override [`ForwardCursor::advance_n`] and
//! [`ForwardCursor::distance_to`] with constant-time versions, everything
//! else walks one step at a time.
//!
//! The searching functions read elements through [`CheckedCursor`], so they
//! are safe to call and report out-of-range reads as [`CursorError`].

use crate::category::{Category, CategoryKind};
use crate::cursor::{BidirectionalCursor, CheckedCursor, Cursor, ForwardCursor, RandomAccessCursor};
use crate::distance::Distance;
use crate::error::CursorError;

/// Returns the capability kind of the cursor type `C`.
///
/// ```
/// use cr_traits::{CategoryKind, algo};
///
/// assert_eq!(algo::category_of::<*mut u32>(), CategoryKind::RandomAccess);
/// ```
#[inline]
pub const fn category_of<C: Cursor>() -> CategoryKind {
    <C::Category as Category>::KIND
}

/// Moves `cursor` by `n` elements.
#[inline]
#[track_caller]
pub fn advance<C: ForwardCursor>(cursor: &mut C, n: C::Distance) {
    cursor.advance_n(n);
}

/// Returns a copy of `cursor` moved `n` elements forward.
#[inline]
#[must_use]
#[track_caller]
pub fn next<C: ForwardCursor>(cursor: &C, n: C::Distance) -> C {
    let mut cursor = cursor.clone();
    cursor.advance_n(n);
    cursor
}

/// Returns a copy of `cursor` moved `n` elements backward.
#[inline]
#[must_use]
pub fn prev<C: BidirectionalCursor>(cursor: &C, n: C::Distance) -> C {
    let mut cursor = cursor.clone();
    cursor.retreat_n(n);
    cursor
}

/// Returns the number of steps from `first` to `last`.
#[inline]
pub fn distance<C: ForwardCursor>(first: &C, last: &C) -> C::Distance {
    first.distance_to(last)
}

/// Returns the first position in `[first, last)` whose element satisfies
/// `pred`, or `last` if there is none.
pub fn find_if<C, F>(first: C, last: &C, mut pred: F) -> Result<C, CursorError>
where
    C: CheckedCursor,
    F: FnMut(&C::Value) -> bool,
{
    let mut first = first;
    while first != *last {
        let value = first
            .try_get()
            .inspect_err(|err| log::debug!("find_if stopped before the end of its range: {err}"))?;
        if pred(value) {
            return Ok(first);
        }
        first.advance();
    }
    Ok(first)
}

/// Returns the first position in `[first, last)` whose element does not
/// satisfy `pred`.
///
/// The range must be partitioned: every element satisfying `pred` comes
/// before every element that does not. With `pred = |x| x < value` on an
/// ascending range this is the lower bound of `value`.
pub fn partition_point<C, F>(first: C, last: &C, mut pred: F) -> Result<C, CursorError>
where
    C: RandomAccessCursor + CheckedCursor,
    F: FnMut(&C::Value) -> bool,
{
    let mut first = first;
    let mut count = first.distance_to(last);
    while count > <C::Distance as Distance>::ZERO {
        let step = count / <C::Distance as Distance>::TWO;
        let mid = first.offset_by(step);
        let value = mid
            .try_get()
            .inspect_err(|err| log::debug!("partition_point probed outside its range: {err}"))?;
        if pred(value) {
            first = mid.offset_by(<C::Distance as Distance>::ONE);
            count -= step + <C::Distance as Distance>::ONE;
        } else {
            count = step;
        }
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{BidirectionalTag, ForwardTag};
    use crate::range::CursorRange;

    /// Forward-only cursor counting upwards.
    #[derive(Debug, Clone, PartialEq)]
    struct Counter(i32);

    impl Cursor for Counter {
        type Value = i32;
        type Distance = i32;
        type Reference<'a>
            = i32
        where
            Self: 'a;
        type Pointer = ();
        type Category = ForwardTag;
    }

    impl ForwardCursor for Counter {
        fn advance(&mut self) {
            self.0 += 1;
        }

        unsafe fn get<'a>(&self) -> i32
        where
            Self: 'a,
        {
            self.0
        }

        fn as_ptr(&self) {}
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Steps(i32);

    impl Cursor for Steps {
        type Value = i32;
        type Distance = i16;
        type Reference<'a>
            = i32
        where
            Self: 'a;
        type Pointer = ();
        type Category = BidirectionalTag;
    }

    impl ForwardCursor for Steps {
        fn advance(&mut self) {
            self.0 += 1;
        }

        unsafe fn get<'a>(&self) -> i32
        where
            Self: 'a,
        {
            self.0
        }

        fn as_ptr(&self) {}
    }

    impl BidirectionalCursor for Steps {
        fn retreat(&mut self) {
            self.0 -= 1;
        }
    }

    #[test]
    fn stepwise_movement() {
        let mut cursor = Counter(0);
        advance(&mut cursor, 5);
        assert_eq!(cursor, Counter(5));
        assert_eq!(next(&cursor, 2), Counter(7));
        assert_eq!(distance(&Counter(2), &Counter(9)), 7);
        assert_eq!(category_of::<Counter>(), CategoryKind::Forward);

        let range = CursorRange::new(Counter(0), Counter(3));
        assert_eq!(range.size_hint(), (1, None));
        assert_eq!(range.count(), 3);

        assert_eq!(prev(&Steps(4), 3), Steps(1));
        assert_eq!(prev(&Steps(4), -3), Steps(7));
        assert_eq!(category_of::<Steps>(), CategoryKind::Bidirectional);
    }

    #[test]
    #[should_panic(expected = "negative offset")]
    fn forward_cursor_rejects_negative_offset() {
        let mut cursor = Counter(3);
        advance(&mut cursor, -1);
    }

    #[test]
    fn raw_pointer_movement() {
        let data = [1, 2, 3, 4, 5];
        let first = data.as_ptr();
        let last = next(&first, 5);

        assert_eq!(distance(&first, &last), 5);
        assert_eq!(prev(&last, 5), first);
        assert_eq!(category_of::<*const i32>(), CategoryKind::RandomAccess);
    }
}
