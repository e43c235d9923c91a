use core::cmp::Ordering;
use core::fmt;

use cr_traits::{BidirectionalCursor, CheckedCursor, Cursor, CursorDiff, CursorError};
use cr_traits::{ForwardCursor, RandomAccessCursor, RandomAccessTag};

use crate::bounds::{checked_position, element_index, fail, moved_position, position_diff};

/// A random-access cursor over a shared slice.
///
/// The cursor keeps the slice it walks, so every move and read is checked:
/// positions range over `0..=len`, where `len` is the end boundary, and
/// crossing a boundary panics instead of reading stray memory.
///
/// Two cursors compare equal only when they walk the same slice and sit at
/// the same position. Cursors of different slices are unordered.
///
/// # Examples
///
/// ```
/// use cr_ptr::SliceCursor;
/// use cr_traits::{BidirectionalCursor, ForwardCursor};
///
/// let data = [10, 20, 30];
/// let mut cursor = SliceCursor::begin(&data);
///
/// cursor.advance();
/// assert_eq!(*cursor.element(), 20);
///
/// let mut end = SliceCursor::end(&data);
/// end.retreat();
/// assert_eq!(*end.element(), 30);
/// ```
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    /// A cursor over an empty slice, at its only position.
    #[inline]
    fn default() -> Self {
        Self { slice: &[], pos: 0 }
    }
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at the first element of `slice`.
    #[inline]
    pub const fn begin(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Creates a cursor at the end boundary of `slice`.
    #[inline]
    pub const fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// Creates a cursor at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > slice.len()`.
    #[inline]
    #[track_caller]
    pub fn at_position(slice: &'a [T], position: usize) -> Self {
        match checked_position(position, slice.len()) {
            Ok(pos) => Self { slice, pos },
            Err(err) => fail(err),
        }
    }

    /// The position of the cursor, `0..=len`.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The slice the cursor walks.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// Returns `true` if the cursor is at the end boundary.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.pos == self.slice.len()
    }

    /// Returns the element at the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end boundary.
    #[inline]
    #[track_caller]
    pub fn element(&self) -> &'a T {
        self.element_at(0)
    }

    /// Returns the number of elements from `origin` to `self`.
    ///
    /// Fails with [`CursorError::ForeignCursor`] if the cursors walk
    /// different slices.
    #[inline]
    pub fn try_distance(&self, origin: &Self) -> Result<isize, CursorError> {
        position_diff(self.same_sequence(origin.sequence()), self.pos, origin.pos)
    }

    #[inline]
    pub(crate) fn sequence(&self) -> (*const T, usize) {
        (self.slice.as_ptr(), self.slice.len())
    }

    #[inline]
    pub(crate) fn same_sequence(&self, (ptr, len): (*const T, usize)) -> bool {
        self.slice.as_ptr() == ptr && self.slice.len() == len
    }

    #[inline]
    #[track_caller]
    fn element_at(&self, n: isize) -> &'a T {
        match element_index(self.pos, n, self.slice.len()) {
            Ok(index) => &self.slice[index],
            Err(err) => fail(err),
        }
    }

    #[inline]
    #[track_caller]
    fn move_by(&mut self, n: isize) {
        match moved_position(self.pos, n, self.slice.len()) {
            Ok(pos) => self.pos = pos,
            Err(err) => fail(err),
        }
    }
}

// -----------------------------------------------------------------------------
// Cursor

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Value = T;
    type Distance = isize;
    type Reference<'r>
        = &'r T
    where
        Self: 'r;
    type Pointer = *const T;
    type Category = RandomAccessTag;
}

impl<'a, T> ForwardCursor for SliceCursor<'a, T> {
    #[inline]
    #[track_caller]
    fn advance(&mut self) {
        self.move_by(1);
    }

    /// Bounds-checked: panics at the end boundary instead of reading.
    #[inline]
    #[track_caller]
    unsafe fn get<'r>(&self) -> &'r T
    where
        Self: 'r,
    {
        self.element()
    }

    #[inline]
    fn as_ptr(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.pos)
    }

    #[inline]
    #[track_caller]
    fn advance_n(&mut self, n: isize) {
        self.move_by(n);
    }

    #[inline]
    #[track_caller]
    fn distance_to(&self, last: &Self) -> isize {
        last.diff(self)
    }
}

impl<'a, T> BidirectionalCursor for SliceCursor<'a, T> {
    #[inline]
    #[track_caller]
    fn retreat(&mut self) {
        self.move_by(-1);
    }

    #[inline]
    #[track_caller]
    fn retreat_n(&mut self, n: isize) {
        self.move_by(n.wrapping_neg());
    }
}

impl<'a, T> CursorDiff for SliceCursor<'a, T> {
    /// # Panics
    ///
    /// Panics if the cursors walk different slices.
    #[inline]
    #[track_caller]
    fn diff(&self, rhs: &Self) -> isize {
        match self.try_distance(rhs) {
            Ok(n) => n,
            Err(err) => fail(err),
        }
    }
}

impl<'a, T> RandomAccessCursor for SliceCursor<'a, T> {
    #[inline]
    #[track_caller]
    fn advance_by(&mut self, n: isize) {
        self.move_by(n);
    }

    /// Bounds-checked: panics if `self + n` is not an element.
    #[inline]
    #[track_caller]
    unsafe fn at<'r>(&self, n: isize) -> &'r T
    where
        Self: 'r,
    {
        self.element_at(n)
    }
}

impl<'a, T> CheckedCursor for SliceCursor<'a, T> {
    #[inline]
    fn try_at(&self, n: isize) -> Result<&T, CursorError> {
        element_index(self.pos, n, self.slice.len()).map(|index| &self.slice[index])
    }
}

// -----------------------------------------------------------------------------
// Comparison

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.same_sequence(other.sequence())
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_sequence(other.sequence()) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("position", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
