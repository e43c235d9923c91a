use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;
use core::slice;

use cr_traits::{BidirectionalCursor, Cursor, CursorDiff, CursorError, CursorFrom};
use cr_traits::{ForwardCursor, RandomAccessCursor, RandomAccessTag};

use crate::bounds::{element_index, fail, moved_position, position_diff};
use crate::slice::SliceCursor;

/// A random-access cursor over an exclusively borrowed slice.
///
/// Like [`SliceCursor`], every move and read is bounds-checked. The cursor
/// is `Copy`, so several cursors may walk the same slice; reading through
/// one is `unsafe` because the returned `&mut T` must not alias a reference
/// obtained through another.
///
/// The cursor compares and measures distances against [`SliceCursor`]s of
/// the same slice, and converts into one with [`into_const`](Self::into_const).
///
/// # Examples
///
/// ```
/// use cr_ptr::SliceCursorMut;
/// use cr_traits::{ForwardCursor, RandomAccessCursor};
///
/// let mut data = [1, 2, 3];
/// let (first, last) = SliceCursorMut::bounds(&mut data);
///
/// let mut cursor = first;
/// while cursor != last {
///     // SAFETY: each element is borrowed once, and only for this statement.
///     unsafe { *cursor.get() *= 10 };
///     cursor.advance();
/// }
/// assert_eq!(data, [10, 20, 30]);
/// ```
pub struct SliceCursorMut<'a, T> {
    _marker: PhantomData<&'a mut [T]>,
    ptr: NonNull<T>,
    len: usize,
    pos: usize,
}

// SAFETY: the cursor behaves like `&'a mut [T]`.
unsafe impl<T: Send> Send for SliceCursorMut<'_, T> {}

// SAFETY: the cursor behaves like `&'a mut [T]`.
unsafe impl<T: Sync> Sync for SliceCursorMut<'_, T> {}

impl<T> Clone for SliceCursorMut<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursorMut<'_, T> {}

impl<T> Default for SliceCursorMut<'_, T> {
    /// A cursor over an empty slice, at its only position.
    #[inline]
    fn default() -> Self {
        Self {
            _marker: PhantomData,
            ptr: NonNull::dangling(),
            len: 0,
            pos: 0,
        }
    }
}

impl<'a, T> SliceCursorMut<'a, T> {
    #[inline]
    const fn with_position(slice: &'a mut [T], pos: usize) -> Self {
        Self {
            _marker: PhantomData,
            len: slice.len(),
            ptr: NonNull::from_mut(slice).cast(),
            pos,
        }
    }

    /// Creates a cursor at the first element of `slice`.
    #[inline]
    pub const fn begin(slice: &'a mut [T]) -> Self {
        Self::with_position(slice, 0)
    }

    /// Creates a cursor at the end boundary of `slice`.
    #[inline]
    pub const fn end(slice: &'a mut [T]) -> Self {
        let len = slice.len();
        Self::with_position(slice, len)
    }

    /// Creates the cursors at the first element and at the end boundary of
    /// `slice`.
    #[inline]
    pub const fn bounds(slice: &'a mut [T]) -> (Self, Self) {
        let first = Self::begin(slice);
        let last = Self {
            pos: first.len,
            ..first
        };
        (first, last)
    }

    /// The position of the cursor, `0..=len`.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` if the cursor is at the end boundary.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.pos == self.len
    }

    /// Converts into a shared cursor at the same position.
    ///
    /// The shared cursor borrows the whole slice for `'a`; the caller must
    /// not write through any copy of this cursor while it is in use.
    #[inline]
    pub fn into_const(self) -> SliceCursor<'a, T> {
        // SAFETY: `ptr` and `len` come from a `&'a mut [T]`.
        let slice = unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) };
        SliceCursor::at_position(slice, self.pos)
    }

    /// Returns the number of elements from `origin` to `self`.
    ///
    /// Fails with [`CursorError::ForeignCursor`] if the cursors walk
    /// different slices.
    #[inline]
    pub fn try_distance(&self, origin: &Self) -> Result<isize, CursorError> {
        position_diff(self.sequence() == origin.sequence(), self.pos, origin.pos)
    }

    #[inline]
    pub(crate) fn sequence(&self) -> (*const T, usize) {
        (self.ptr.as_ptr().cast_const(), self.len)
    }

    #[inline]
    #[track_caller]
    fn element_ptr(&self, n: isize) -> NonNull<T> {
        match element_index(self.pos, n, self.len) {
            // SAFETY: `index < len`, so the pointer stays inside the slice.
            Ok(index) => unsafe { self.ptr.add(index) },
            Err(err) => fail(err),
        }
    }

    #[inline]
    #[track_caller]
    fn move_by(&mut self, n: isize) {
        match moved_position(self.pos, n, self.len) {
            Ok(pos) => self.pos = pos,
            Err(err) => fail(err),
        }
    }
}

// -----------------------------------------------------------------------------
// Cursor

impl<'a, T> Cursor for SliceCursorMut<'a, T> {
    type Value = T;
    type Distance = isize;
    type Reference<'r>
        = &'r mut T
    where
        Self: 'r;
    type Pointer = *mut T;
    type Category = RandomAccessTag;
}

impl<'a, T> ForwardCursor for SliceCursorMut<'a, T> {
    #[inline]
    #[track_caller]
    fn advance(&mut self) {
        self.move_by(1);
    }

    /// Bounds-checked: panics at the end boundary instead of reading.
    ///
    /// # Safety
    ///
    /// No other reference to the element may be alive while the returned
    /// one is used.
    #[inline]
    #[track_caller]
    unsafe fn get<'r>(&self) -> &'r mut T
    where
        Self: 'r,
    {
        // SAFETY: in bounds, and the caller guarantees exclusive access.
        unsafe { self.element_ptr(0).as_mut() }
    }

    #[inline]
    fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr().wrapping_add(self.pos)
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

impl<'a, T> BidirectionalCursor for SliceCursorMut<'a, T> {
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

impl<'a, T> RandomAccessCursor for SliceCursorMut<'a, T> {
    #[inline]
    #[track_caller]
    fn advance_by(&mut self, n: isize) {
        self.move_by(n);
    }

    /// Bounds-checked: panics if `self + n` is not an element.
    ///
    /// # Safety
    ///
    /// Same aliasing contract as [`get`](ForwardCursor::get).
    #[inline]
    #[track_caller]
    unsafe fn at<'r>(&self, n: isize) -> &'r mut T
    where
        Self: 'r,
    {
        // SAFETY: in bounds, and the caller guarantees exclusive access.
        unsafe { self.element_ptr(n).as_mut() }
    }
}

impl<'a, T> CursorFrom<SliceCursorMut<'a, T>> for SliceCursor<'a, T> {
    #[inline]
    fn cursor_from(src: SliceCursorMut<'a, T>) -> Self {
        src.into_const()
    }
}

// -----------------------------------------------------------------------------
// Comparison and distance, also against shared cursors

impl<T> PartialEq for SliceCursorMut<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.sequence() == other.sequence()
    }
}

impl<T> Eq for SliceCursorMut<'_, T> {}

impl<T> PartialOrd for SliceCursorMut<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.sequence() == other.sequence()).then(|| self.pos.cmp(&other.pos))
    }
}

impl<'a, 'b, T> PartialEq<SliceCursor<'b, T>> for SliceCursorMut<'a, T> {
    #[inline]
    fn eq(&self, other: &SliceCursor<'b, T>) -> bool {
        self.pos == other.position() && other.same_sequence(self.sequence())
    }
}

impl<'a, 'b, T> PartialEq<SliceCursorMut<'b, T>> for SliceCursor<'a, T> {
    #[inline]
    fn eq(&self, other: &SliceCursorMut<'b, T>) -> bool {
        other == self
    }
}

impl<'a, 'b, T> PartialOrd<SliceCursor<'b, T>> for SliceCursorMut<'a, T> {
    #[inline]
    fn partial_cmp(&self, other: &SliceCursor<'b, T>) -> Option<Ordering> {
        other
            .same_sequence(self.sequence())
            .then(|| self.pos.cmp(&other.position()))
    }
}

impl<'a, 'b, T> PartialOrd<SliceCursorMut<'b, T>> for SliceCursor<'a, T> {
    #[inline]
    fn partial_cmp(&self, other: &SliceCursorMut<'b, T>) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl<T> CursorDiff for SliceCursorMut<'_, T> {
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

impl<'a, 'b, T> CursorDiff<SliceCursor<'b, T>> for SliceCursorMut<'a, T> {
    #[inline]
    #[track_caller]
    fn diff(&self, rhs: &SliceCursor<'b, T>) -> isize {
        let same = rhs.same_sequence(self.sequence());
        match position_diff(same, self.pos, rhs.position()) {
            Ok(n) => n,
            Err(err) => fail(err),
        }
    }
}

impl<'a, 'b, T> CursorDiff<SliceCursorMut<'b, T>> for SliceCursor<'a, T> {
    #[inline]
    #[track_caller]
    fn diff(&self, rhs: &SliceCursorMut<'b, T>) -> isize {
        let same = self.same_sequence(rhs.sequence());
        match position_diff(same, self.position(), rhs.pos) {
            Ok(n) => n,
            Err(err) => fail(err),
        }
    }
}

impl<T> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursorMut")
            .field("position", &self.pos)
            .field("len", &self.len)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
