use crate::category::{BidirectionalCategory, Category, ForwardCategory, RandomAccessCategory};
use crate::distance::Distance;
use crate::error::CursorError;

// -----------------------------------------------------------------------------
// Descriptor set

/// The descriptor set of a cursor type.
///
/// A cursor describes itself through five associated types: the element
/// type, a signed distance type, the result of dereferencing, the
/// addressing type and a traversal capability tag. A type that implements
/// this trait is resolved as-is; raw pointers are resolved by the impls in
/// this crate.
///
/// Resolving a type that is not a cursor fails to compile:
///
/// ```compile_fail
/// fn resolve<C: cr_traits::Cursor>() {}
///
/// resolve::<String>();
/// ```
///
/// The descriptors can be read through the aliases [`ValueOf`],
/// [`DistanceOf`], [`ReferenceOf`], [`PointerOf`] and [`CategoryOf`]:
///
/// ```
/// use cr_traits::{CategoryOf, Category, CategoryKind, DistanceOf, ValueOf};
///
/// let _: ValueOf<*const u8> = 7u8;
/// let _: DistanceOf<*mut u8> = -1isize;
/// assert_eq!(<CategoryOf<*const u8> as Category>::KIND, CategoryKind::RandomAccess);
/// ```
pub trait Cursor: Clone {
    /// The element type.
    type Value;

    /// The signed type measuring the distance between two cursors.
    type Distance: Distance;

    /// The result of dereferencing the cursor.
    type Reference<'a>
    where
        Self: 'a;

    /// The addressing type of the element the cursor refers to.
    type Pointer;

    /// The traversal capability tag.
    type Category: Category;
}

/// The element type of `C`.
pub type ValueOf<C> = <C as Cursor>::Value;

/// The distance type of `C`.
pub type DistanceOf<C> = <C as Cursor>::Distance;

/// The dereference result of `C` for the lifetime `'a`.
pub type ReferenceOf<'a, C> = <C as Cursor>::Reference<'a>;

/// The addressing type of `C`.
pub type PointerOf<C> = <C as Cursor>::Pointer;

/// The capability tag of `C`.
pub type CategoryOf<C> = <C as Cursor>::Category;

// -----------------------------------------------------------------------------
// Capabilities

/// A multi-pass cursor that steps forward.
///
/// The default [`advance_n`](Self::advance_n) and
/// [`distance_to`](Self::distance_to) walk one step at a time. Random-access
/// cursors override them with constant-time versions.
pub trait ForwardCursor: Cursor<Category: ForwardCategory> + PartialEq {
    /// Moves the cursor one element forward.
    fn advance(&mut self);

    /// Dereferences the cursor.
    ///
    /// # Safety
    ///
    /// The cursor must address a live element of its sequence, and the
    /// sequence must stay valid (and, for exclusive references, unaliased)
    /// for `'a`. Bounded cursors may panic instead.
    unsafe fn get<'a>(&self) -> Self::Reference<'a>
    where
        Self: 'a;

    /// Returns the address of the element the cursor refers to, without
    /// reading it.
    fn as_ptr(&self) -> Self::Pointer;

    /// Moves the cursor `n` elements forward.
    ///
    /// # Panics
    ///
    /// The default implementation panics if `n` is negative.
    #[track_caller]
    fn advance_n(&mut self, n: Self::Distance) {
        assert!(
            n >= <Self::Distance as Distance>::ZERO,
            "cannot move a {:?} cursor by the negative offset {n}",
            <Self::Category as Category>::KIND,
        );
        let mut n = n;
        while n > <Self::Distance as Distance>::ZERO {
            self.advance();
            n -= <Self::Distance as Distance>::ONE;
        }
    }

    /// Returns the number of steps from `self` to `last`.
    ///
    /// `last` must be reachable from `self`; the default implementation
    /// does not terminate otherwise.
    fn distance_to(&self, last: &Self) -> Self::Distance {
        let mut cursor = self.clone();
        let mut n = <Self::Distance as Distance>::ZERO;
        while cursor != *last {
            cursor.advance();
            n += <Self::Distance as Distance>::ONE;
        }
        n
    }
}

/// A cursor that steps in both directions.
pub trait BidirectionalCursor: ForwardCursor<Category: BidirectionalCategory> {
    /// Moves the cursor one element backward.
    fn retreat(&mut self);

    /// Moves the cursor `n` elements backward. A negative `n` moves forward.
    fn retreat_n(&mut self, n: Self::Distance) {
        if n < <Self::Distance as Distance>::ZERO {
            self.advance_n(-n);
            return;
        }
        let mut n = n;
        while n > <Self::Distance as Distance>::ZERO {
            self.retreat();
            n -= <Self::Distance as Distance>::ONE;
        }
    }
}

/// Signed distance between two cursors, `self - rhs`.
///
/// `Rhs` may differ from `Self` when two cursor types address the same
/// sequences, such as a shared and an exclusive cursor over one slice.
pub trait CursorDiff<Rhs = Self>: Cursor {
    /// Returns `self - rhs` in elements.
    fn diff(&self, rhs: &Rhs) -> Self::Distance;
}

/// A cursor with constant-time offsets, indexing and distances.
pub trait RandomAccessCursor:
    BidirectionalCursor<Category: RandomAccessCategory> + CursorDiff + PartialOrd
{
    /// Moves the cursor by `n` elements; a negative `n` moves backward.
    fn advance_by(&mut self, n: Self::Distance);

    /// Moves the cursor by `-n` elements.
    #[inline]
    fn retreat_by(&mut self, n: Self::Distance) {
        self.advance_by(-n);
    }

    /// Dereferences the element `n` positions away from the cursor.
    ///
    /// # Safety
    ///
    /// Same contract as [`ForwardCursor::get`] for the cursor
    /// `self.offset_by(n)`.
    unsafe fn at<'a>(&self, n: Self::Distance) -> Self::Reference<'a>
    where
        Self: 'a;

    /// Returns a copy of the cursor moved by `n` elements.
    #[inline]
    #[must_use]
    fn offset_by(&self, n: Self::Distance) -> Self {
        let mut cursor = self.clone();
        cursor.advance_by(n);
        cursor
    }
}

/// A cursor that knows the bounds of its sequence.
///
/// Checked access never reads outside the sequence; it reports the
/// violation as a [`CursorError`] instead.
pub trait CheckedCursor: ForwardCursor {
    /// Returns the element the cursor refers to.
    #[inline]
    fn try_get(&self) -> Result<&Self::Value, CursorError> {
        self.try_at(<Self::Distance as Distance>::ZERO)
    }

    /// Returns the element `n` positions away from the cursor.
    fn try_at(&self, n: Self::Distance) -> Result<&Self::Value, CursorError>;
}

// -----------------------------------------------------------------------------
// Conversion

/// Conversion between cursor types over the same sequence.
///
/// Every cursor converts to itself, and `*mut T` converts to `*const T`.
/// Cursor crates add their own exclusive-to-shared conversions.
pub trait CursorFrom<Src>: Sized {
    /// Converts `src` into a cursor at the same position.
    fn cursor_from(src: Src) -> Self;
}

impl<C: Cursor> CursorFrom<C> for C {
    #[inline(always)]
    fn cursor_from(src: C) -> Self {
        src
    }
}

impl<T> CursorFrom<*mut T> for *const T {
    #[inline(always)]
    fn cursor_from(src: *mut T) -> Self {
        src.cast_const()
    }
}
