use core::hash::{Hash, Hasher};

use cr_traits::{BidirectionalCursor, CheckedCursor, Cursor, CursorDiff, CursorError, CursorFrom};
use cr_traits::{CursorRange, Distance, ForwardCursor, RandomAccessCursor};

// -----------------------------------------------------------------------------
// ReverseCursor

/// A cursor that walks the sequence of `U` backwards.
///
/// The adaptor stores one underlying cursor, `current`, which always sits
/// one position *after* the element the adaptor refers to. Built from the
/// end boundary of a sequence, it refers to the last element; built from
/// the first element, it is the reversed end boundary.
///
/// Every movement is inverted: advancing retreats `current`, `r + n` moves
/// `current` by `-n`, and ordering and distances are mirrored so reversed
/// cursors compose with the algorithms of [`cr_traits::algo`].
///
/// # Examples
///
/// ```
/// use cr_ptr::SliceCursor;
/// use cr_rev::reverse;
/// use cr_traits::CheckedCursor;
///
/// let data = [10, 20, 30];
/// let mut r = reverse(SliceCursor::end(&data));
///
/// assert_eq!(r.try_get(), Ok(&30));
/// r.inc();
/// assert_eq!(r.try_get(), Ok(&20));
/// assert_eq!(r[1isize], 10);
/// assert_eq!(r.base().position(), 2);
/// ```
///
/// Reversing twice does not unwrap the adaptor: the base of the outer view
/// is the inner view, and getting back to the plain cursor takes a second
/// `base()` call.
///
/// ```
/// use cr_rev::reverse;
/// use cr_traits::ForwardCursor;
///
/// let data = [1, 2, 3];
/// let mid = data.as_ptr().wrapping_add(1);
/// let twice = reverse(reverse(mid));
///
/// assert_eq!(twice.base(), reverse(mid));
/// assert_eq!(twice.base().base(), mid);
/// assert_eq!(unsafe { *twice.get() }, 2);
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[repr(transparent)]
pub struct ReverseCursor<U> {
    current: U,
}

/// Creates a [`ReverseCursor`] whose base is `current`.
///
/// Pass the end boundary of a sequence to walk it from its last element.
#[inline]
pub const fn reverse<U>(current: U) -> ReverseCursor<U> {
    ReverseCursor::new(current)
}

/// Returns the reversed view of `[first, last)`: positions from the last
/// element down to the first.
///
/// ```
/// use cr_ptr::SliceCursor;
/// use cr_rev::reversed;
/// use cr_traits::CheckedCursor;
///
/// let data = ['a', 'b', 'c'];
/// let view = reversed(SliceCursor::begin(&data), SliceCursor::end(&data));
///
/// let mut text = [' '; 3];
/// for (slot, cursor) in text.iter_mut().zip(view) {
///     *slot = *cursor.try_get().unwrap();
/// }
/// assert_eq!(text, ['c', 'b', 'a']);
/// ```
#[inline]
pub const fn reversed<C>(first: C, last: C) -> CursorRange<ReverseCursor<C>> {
    CursorRange::new(ReverseCursor::new(last), ReverseCursor::new(first))
}

impl<U> ReverseCursor<U> {
    /// Creates an adaptor whose base is `current`.
    ///
    /// `current` must be one past the element the adaptor should refer to.
    #[inline]
    pub const fn new(current: U) -> Self {
        Self { current }
    }

    /// Converts an adaptor over a related cursor type, such as an exclusive
    /// cursor into a shared one. The base is converted as-is.
    ///
    /// ```
    /// use cr_rev::{ReverseCursor, reverse};
    ///
    /// let mut data = [1, 2];
    /// let end = data.as_mut_ptr().wrapping_add(2);
    ///
    /// let shared: ReverseCursor<*const i32> = ReverseCursor::from_reverse(reverse(end));
    /// assert_eq!(shared.base(), end.cast_const());
    /// ```
    #[inline]
    pub fn from_reverse<U2>(other: ReverseCursor<U2>) -> Self
    where
        U: CursorFrom<U2>,
    {
        Self::new(U::cursor_from(other.current))
    }

    /// Returns a copy of the underlying cursor.
    ///
    /// The base is one position after the element the adaptor refers to,
    /// which makes it the matching boundary of the forward range.
    #[inline]
    pub fn base(&self) -> U
    where
        U: Clone,
    {
        self.current.clone()
    }

    /// Unwraps the underlying cursor.
    #[inline]
    pub fn into_base(self) -> U {
        self.current
    }

    #[inline(always)]
    pub(crate) const fn current(&self) -> &U {
        &self.current
    }
}

impl<U: BidirectionalCursor> ReverseCursor<U> {
    /// Moves to the previous element of the underlying sequence.
    #[inline]
    #[track_caller]
    pub fn inc(&mut self) -> &mut Self {
        self.current.retreat();
        self
    }

    /// Moves to the next element of the underlying sequence.
    #[inline]
    #[track_caller]
    pub fn dec(&mut self) -> &mut Self {
        self.current.advance();
        self
    }

    /// Like [`inc`](Self::inc), but returns the adaptor as it was before
    /// moving.
    #[inline]
    #[track_caller]
    #[must_use = "use `inc` if the previous position is not needed"]
    pub fn post_inc(&mut self) -> Self {
        let snapshot = Self::new(self.current.clone());
        self.current.retreat();
        snapshot
    }

    /// Like [`dec`](Self::dec), but returns the adaptor as it was before
    /// moving.
    #[inline]
    #[track_caller]
    #[must_use = "use `dec` if the previous position is not needed"]
    pub fn post_dec(&mut self) -> Self {
        let snapshot = Self::new(self.current.clone());
        self.current.advance();
        snapshot
    }
}

impl<U: Hash> Hash for ReverseCursor<U> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.current.hash(state);
    }
}

impl<T> From<ReverseCursor<*mut T>> for ReverseCursor<*const T> {
    #[inline]
    fn from(value: ReverseCursor<*mut T>) -> Self {
        Self::from_reverse(value)
    }
}

/// `-n - 1`, the base offset of the element `n` steps along the reversed
/// walk. Two's complement `!n` is the same value and never overflows.
#[inline(always)]
fn mirrored<D: Distance>(n: D) -> D {
    !n
}

// -----------------------------------------------------------------------------
// Cursor

impl<U: BidirectionalCursor> Cursor for ReverseCursor<U> {
    type Value = U::Value;
    type Distance = U::Distance;
    type Reference<'a>
        = U::Reference<'a>
    where
        Self: 'a;
    type Pointer = U::Pointer;
    type Category = U::Category;
}

impl<U: BidirectionalCursor> ForwardCursor for ReverseCursor<U> {
    #[inline]
    #[track_caller]
    fn advance(&mut self) {
        self.current.retreat();
    }

    /// Dereferences the element before `base()`.
    ///
    /// `current` itself is not moved; a copy is stepped back and read.
    ///
    /// # Safety
    ///
    /// The element before `base()` must be a live element of the sequence.
    /// In particular the reversed end boundary cannot be dereferenced.
    #[inline]
    #[track_caller]
    unsafe fn get<'a>(&self) -> U::Reference<'a>
    where
        Self: 'a,
    {
        let mut prev = self.current.clone();
        prev.retreat();
        // SAFETY: the caller guarantees `prev` addresses a live element.
        unsafe { prev.get() }
    }

    /// Address of the element before `base()`.
    #[inline]
    #[track_caller]
    fn as_ptr(&self) -> U::Pointer {
        let mut prev = self.current.clone();
        prev.retreat();
        prev.as_ptr()
    }

    #[inline]
    #[track_caller]
    fn advance_n(&mut self, n: U::Distance) {
        self.current.retreat_n(n);
    }

    #[inline]
    fn distance_to(&self, last: &Self) -> U::Distance {
        last.current.distance_to(&self.current)
    }
}

impl<U: BidirectionalCursor> BidirectionalCursor for ReverseCursor<U> {
    #[inline]
    #[track_caller]
    fn retreat(&mut self) {
        self.current.advance();
    }

    #[inline]
    #[track_caller]
    fn retreat_n(&mut self, n: U::Distance) {
        if n < <U::Distance as Distance>::ZERO {
            self.current.retreat_n(-n);
        } else {
            self.current.advance_n(n);
        }
    }
}

impl<U1, U2> CursorDiff<ReverseCursor<U2>> for ReverseCursor<U1>
where
    U1: BidirectionalCursor,
    U2: CursorDiff<U1, Distance = U1::Distance>,
{
    /// `self - rhs`, measured in the reversed direction: `rhs.base() -
    /// self.base()`.
    #[inline]
    #[track_caller]
    fn diff(&self, rhs: &ReverseCursor<U2>) -> U1::Distance {
        rhs.current.diff(&self.current)
    }
}

impl<U: RandomAccessCursor> RandomAccessCursor for ReverseCursor<U> {
    #[inline]
    #[track_caller]
    fn advance_by(&mut self, n: U::Distance) {
        self.current.retreat_by(n);
    }

    #[inline]
    #[track_caller]
    fn retreat_by(&mut self, n: U::Distance) {
        self.current.advance_by(n);
    }

    /// Dereferences `base()[-n - 1]`.
    ///
    /// # Safety
    ///
    /// `base()[-n - 1]` must be a live element of the sequence.
    #[inline]
    #[track_caller]
    unsafe fn at<'a>(&self, n: U::Distance) -> U::Reference<'a>
    where
        Self: 'a,
    {
        // SAFETY: forwarded to the caller.
        unsafe { self.current.at(mirrored(n)) }
    }
}

impl<U: CheckedCursor + BidirectionalCursor> CheckedCursor for ReverseCursor<U> {
    #[inline]
    fn try_get(&self) -> Result<&U::Value, CursorError> {
        self.current.try_at(-<U::Distance as Distance>::ONE)
    }

    #[inline]
    fn try_at(&self, n: U::Distance) -> Result<&U::Value, CursorError> {
        self.current.try_at(mirrored(n))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ReverseCursor, reverse, reversed};
    use cr_ptr::{SliceCursor, SliceCursorMut};
    use cr_traits::{BidirectionalCursor, BidirectionalTag, CategoryKind, CheckedCursor, Cursor};
    use cr_traits::{CursorDiff, CursorError, ForwardCursor, RandomAccessCursor, algo};

    /// Bidirectional-only cursor: no offsets, no indexing.
    #[derive(Debug, Clone, PartialEq)]
    struct Walker<'a> {
        items: &'a [char],
        pos: usize,
    }

    impl<'a> Cursor for Walker<'a> {
        type Value = char;
        type Distance = i32;
        type Reference<'r>
            = &'r char
        where
            Self: 'r;
        type Pointer = *const char;
        type Category = BidirectionalTag;
    }

    impl<'a> ForwardCursor for Walker<'a> {
        fn advance(&mut self) {
            self.pos += 1;
        }

        unsafe fn get<'r>(&self) -> &'r char
        where
            Self: 'r,
        {
            let items: &'a [char] = self.items;
            &items[self.pos]
        }

        fn as_ptr(&self) -> *const char {
            self.items.as_ptr().wrapping_add(self.pos)
        }
    }

    impl<'a> BidirectionalCursor for Walker<'a> {
        fn retreat(&mut self) {
            self.pos -= 1;
        }
    }

    #[test]
    fn is_sync_send() {
        use core::panic::{RefUnwindSafe, UnwindSafe};

        fn is_send<T: Send>() {}
        fn is_sync<T: Sync>() {}
        fn is_unwindsafe<T: UnwindSafe>() {}
        fn is_refunwindsafe<T: RefUnwindSafe>() {}

        is_send::<ReverseCursor<SliceCursor<'_, i32>>>();
        is_sync::<ReverseCursor<SliceCursorMut<'_, i32>>>();
        is_unwindsafe::<ReverseCursor<SliceCursor<'_, i32>>>();
        is_refunwindsafe::<ReverseCursor<SliceCursor<'_, i32>>>();
    }

    #[test]
    fn three_element_walk() {
        let data = [10, 20, 30];
        let mut r = reverse(SliceCursor::end(&data));

        assert_eq!(unsafe { *r.get() }, 30);
        r.inc();
        assert_eq!(unsafe { *r.get() }, 20);
        assert_eq!(unsafe { *r.at(1) }, 10);
        assert_eq!(r[1isize], 10);
        assert_eq!(r.base(), SliceCursor::at_position(&data, 2));

        r.inc();
        assert_eq!(*r.try_get().unwrap(), 10);
        assert_eq!(r.base(), SliceCursor::at_position(&data, 1));
    }

    #[test]
    fn base_after_construction() {
        let data = [1, 2, 3];
        for position in 0..=data.len() {
            let x = SliceCursor::at_position(&data, position);
            assert_eq!(reverse(x).base(), x);
            assert_eq!(reverse(x).into_base(), x);
        }
    }

    #[test]
    fn dereference_and_index_laws() {
        let data = [4, 8, 15, 16, 23, 42];
        let n = data.len();
        let rbegin = reverse(SliceCursor::end(&data));

        assert_eq!(*rbegin.try_get().unwrap(), data[n - 1]);
        assert_eq!(*(rbegin + 1isize).try_get().unwrap(), data[n - 2]);
        for k in 0..n {
            assert_eq!(rbegin[k as isize], data[n - 1 - k]);
            assert_eq!(unsafe { *rbegin.at(k as isize) }, data[n - 1 - k]);
        }
    }

    #[test]
    fn increment_decrement_symmetry() {
        let data = [1, 2, 3, 4, 5];
        let start = reverse(SliceCursor::end(&data));

        let mut r = start;
        for _ in 1..data.len() {
            r.inc();
        }
        assert_eq!(*r.try_get().unwrap(), 1);
        for _ in 1..data.len() {
            r.dec();
        }
        assert_eq!(r, start);
    }

    #[test]
    fn post_forms_return_the_previous_position() {
        let data = [1, 2, 3];
        let mut r = reverse(SliceCursor::end(&data));

        let before = r.post_inc();
        assert_eq!(*before.try_get().unwrap(), 3);
        assert_eq!(*r.try_get().unwrap(), 2);

        let before = r.post_dec();
        assert_eq!(*before.try_get().unwrap(), 2);
        assert_eq!(*r.try_get().unwrap(), 3);
    }

    #[test]
    fn offsets_move_against_the_base() {
        let data = [0, 1, 2, 3, 4, 5, 6];
        let r = reverse(SliceCursor::at_position(&data, 5));

        assert_eq!((r + 2isize).base().position(), 3);
        assert_eq!((r - 2isize).base().position(), 7);
        assert_eq!((3isize + r).base().position(), 2);
        assert_eq!(r + 3isize, 3isize + r);

        let mut m = r;
        m += 4isize;
        assert_eq!(m.base().position(), 1);
        m -= 1isize;
        assert_eq!(m.base().position(), 2);
        assert_eq!(m.offset_by(-2).base().position(), 4);
    }

    #[test]
    fn equality_follows_the_base() {
        let data = [1, 2, 3, 4];
        for i in 0..=data.len() {
            for j in 0..=data.len() {
                let a = SliceCursor::at_position(&data, i);
                let b = SliceCursor::at_position(&data, j);
                assert_eq!(reverse(a) == reverse(b), a == b);
                assert_eq!(reverse(a) != reverse(b), a != b);
            }
        }
    }

    #[test]
    fn ordering_is_inverted() {
        let data = [1, 2, 3, 4];
        for i in 0..=data.len() {
            for j in 0..=data.len() {
                let a = SliceCursor::at_position(&data, i);
                let b = SliceCursor::at_position(&data, j);
                let (ra, rb) = (reverse(a), reverse(b));

                assert_eq!(ra < rb, a > b);
                assert_eq!(ra <= rb, a >= b);
                assert_eq!(ra > rb, a < b);
                assert_eq!(ra >= rb, a <= b);
                assert_eq!(ra.partial_cmp(&rb), b.partial_cmp(&a));
            }
        }

        let first = data.as_ptr();
        let last = first.wrapping_add(4);
        assert!(reverse(last) < reverse(first));
        assert_eq!(reverse(last).cmp(&reverse(first)), core::cmp::Ordering::Less);
    }

    #[test]
    fn distance_is_inverted() {
        let data = [0u8; 6];
        for i in 0..=data.len() {
            for j in 0..=data.len() {
                let a = SliceCursor::at_position(&data, i);
                let b = SliceCursor::at_position(&data, j);
                assert_eq!(reverse(b) - reverse(a), a.diff(&b));
                assert_eq!(algo::distance(&reverse(b), &reverse(a)), b.diff(&a));
            }
        }
    }

    #[test]
    fn raw_pointer_views() {
        let mut data = [1, 2, 3, 4];
        let first = data.as_mut_ptr();
        let last = first.wrapping_add(4);

        let mut r = reverse(last);
        while r != reverse(first) {
            unsafe { *r.get() *= 10 };
            r.inc();
        }
        assert_eq!(data, [10, 20, 30, 40]);

        let shared: ReverseCursor<*const i32> = reverse(last).into();
        assert_eq!(unsafe { *shared.get() }, 40);
        assert_eq!(shared.as_ptr(), last.cast_const().wrapping_sub(1));
        assert_eq!(reverse(first) - reverse(last), 4);
    }

    #[test]
    fn exclusive_views_convert_and_compare() {
        let mut data = [3, 1, 2];
        let (first, last) = SliceCursorMut::bounds(&mut data);
        let rfirst = reverse(last);
        let rlast = reverse(first);

        let shared = ReverseCursor::<SliceCursor<'_, i32>>::from_reverse(rfirst);
        assert!(shared == rfirst);
        assert!(rfirst == shared);
        assert!(shared < rlast);
        assert!(rlast > shared);
        assert_eq!(shared - rlast, -3);
        assert_eq!(rlast - shared, 3);
        assert_eq!(shared.try_get(), Ok(&2));
    }

    #[test]
    fn searching_a_reversed_view() {
        let descending = [9, 7, 7, 4, 2, 1];
        let rfirst = reverse(SliceCursor::end(&descending));
        let rlast = reverse(SliceCursor::begin(&descending));

        // Viewed backwards the slice is ascending, so a lower bound works.
        let bound = algo::partition_point(rfirst, &rlast, |&x| x < 7).unwrap();
        assert_eq!(bound.try_get(), Ok(&7));
        assert_eq!(algo::distance(&rfirst, &bound), 3);
        assert_eq!(bound.base().position(), 3);

        let found = algo::find_if(rfirst, &rlast, |&x| x > 5).unwrap();
        assert_eq!(found.try_get(), Ok(&7));
        assert_eq!(found.base().position(), 3);

        let missing = algo::find_if(rfirst, &rlast, |&x| x > 100).unwrap();
        assert_eq!(missing, rlast);
    }

    #[test]
    fn bidirectional_underlying_cursor() {
        let items = ['x', 'y', 'z'];
        let first = Walker { items: &items, pos: 0 };
        let last = Walker { items: &items, pos: 3 };

        assert_eq!(algo::category_of::<ReverseCursor<Walker<'_>>>(), CategoryKind::Bidirectional);

        let mut seen = ['\0'; 3];
        for (slot, cursor) in seen.iter_mut().zip(reversed(first.clone(), last.clone())) {
            *slot = unsafe { *cursor.get() };
        }
        assert_eq!(seen, ['z', 'y', 'x']);

        let rfirst = reverse(last);
        let rlast = reverse(first);
        assert_eq!(algo::distance(&rfirst, &rlast), 3);
        assert_eq!(algo::next(&rfirst, 2).base().pos, 1);
        assert_eq!(algo::prev(&rlast, 1).base().pos, 1);
        assert_eq!(algo::prev(&rfirst, -3), rlast);
        assert_eq!(rfirst.as_ptr(), items.as_ptr().wrapping_add(2));

        let mut back = reversed(rlast.base(), rfirst.base());
        assert_eq!(back.next_back().map(|c| c.base().pos), Some(1));
    }

    #[test]
    fn checked_access_reports_the_boundary() {
        let data = [1, 2];
        let rend = reverse(SliceCursor::begin(&data));

        assert_eq!(
            rend.try_get(),
            Err(CursorError::OutOfBounds { position: -1, len: 2 })
        );
        assert_eq!(
            reverse(SliceCursor::end(&data)).try_at(2),
            Err(CursorError::OutOfBounds { position: -1, len: 2 })
        );
    }

    #[test]
    fn extreme_offsets_are_rejected() {
        let data = [1, 2, 3];
        let rbegin = reverse(SliceCursor::end(&data));

        assert_eq!(
            rbegin.try_at(isize::MIN),
            Err(CursorError::OutOfBounds {
                position: 3 + isize::MAX as i128,
                len: 3
            })
        );
        assert!(rbegin.try_at(isize::MAX).is_err());
        assert_eq!(rbegin.try_at(2), Ok(&1));
    }

    #[test]
    #[should_panic(expected = "does not address an element")]
    fn indexing_at_the_minimum_offset_panics() {
        let data = [1, 2, 3];
        let _ = reverse(SliceCursor::end(&data))[isize::MIN];
    }

    #[test]
    fn hashes_like_its_base() {
        extern crate std;
        use core::hash::BuildHasher;
        use std::hash::RandomState;

        let data = [1, 2, 3];
        let state = RandomState::new();
        let end = data.as_ptr().wrapping_add(3);

        assert_eq!(state.hash_one(reverse(end)), state.hash_one(end));
        assert_ne!(
            state.hash_one(reverse(end)),
            state.hash_one(reverse(end).offset_by(1))
        );
    }

    #[test]
    #[should_panic(expected = "leaves a sequence")]
    fn dereferencing_the_reversed_end_panics() {
        let data = [1, 2];
        let rend = reverse(SliceCursor::begin(&data));
        let _ = unsafe { rend.get() };
    }

    #[test]
    #[should_panic(expected = "does not address an element")]
    fn indexing_out_of_range_panics() {
        let data = [1, 2];
        let rbegin = reverse(SliceCursor::end(&data));
        let _ = rbegin[2isize];
    }

    #[test]
    fn default_adaptor() {
        let r = ReverseCursor::<SliceCursor<'_, u8>>::default();
        assert!(r.base().is_end());
        assert_eq!(r.base().position(), 0);
    }
}
