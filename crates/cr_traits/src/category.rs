use core::fmt::Debug;
use core::hash::Hash;

// -----------------------------------------------------------------------------
// CategoryKind

/// Runtime view of a traversal capability tag.
///
/// Every [`Category`] maps to exactly one kind through [`Category::KIND`],
/// so generic code can inspect the capability of a cursor type without
/// holding a value of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    /// Single pass, write only.
    Output,
    /// Single pass, read only.
    Input,
    /// Multi pass, moves forward one step at a time.
    Forward,
    /// Multi pass, moves one step at a time in both directions.
    Bidirectional,
    /// Multi pass, moves by arbitrary offsets in constant time.
    RandomAccess,
}

impl CategoryKind {
    /// Returns `true` if cursors of this kind can step backwards.
    ///
    /// ```
    /// use cr_traits::CategoryKind;
    ///
    /// assert!(CategoryKind::RandomAccess.is_bidirectional());
    /// assert!(!CategoryKind::Forward.is_bidirectional());
    /// ```
    #[inline]
    pub const fn is_bidirectional(self) -> bool {
        matches!(self, Self::Bidirectional | Self::RandomAccess)
    }

    /// Returns `true` if cursors of this kind support offsets, indexing
    /// and distances in constant time.
    #[inline]
    pub const fn is_random_access(self) -> bool {
        matches!(self, Self::RandomAccess)
    }
}

// -----------------------------------------------------------------------------
// Category traits

mod sealed {
    pub trait Sealed {}
}

/// A traversal capability tag.
///
/// The set of tags is closed: [`OutputTag`], [`InputTag`], [`ForwardTag`],
/// [`BidirectionalTag`] and [`RandomAccessTag`]. The refinement chain is
/// expressed through the marker traits [`InputCategory`],
/// [`ForwardCategory`], [`BidirectionalCategory`] and
/// [`RandomAccessCategory`], so a bound such as
/// `C::Category: BidirectionalCategory` accepts random-access tags too.
pub trait Category: sealed::Sealed + Copy + Default + Debug + Eq + Hash + 'static {
    /// The runtime kind of this tag.
    const KIND: CategoryKind;
}

/// Tags of cursors that can be read from.
pub trait InputCategory: Category {}

/// Tags of multi-pass cursors that can step forward.
pub trait ForwardCategory: InputCategory {}

/// Tags of cursors that can also step backwards.
pub trait BidirectionalCategory: ForwardCategory {}

/// Tags of cursors that also move by arbitrary offsets.
pub trait RandomAccessCategory: BidirectionalCategory {}

macro_rules! define_tag {
    ($(#[$meta:meta])* $Tag:ident => $Kind:ident $(: $($Marker:ident),+)?) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $Tag;

        impl sealed::Sealed for $Tag {}

        impl Category for $Tag {
            const KIND: CategoryKind = CategoryKind::$Kind;
        }

        $($(impl $Marker for $Tag {})+)?
    };
}

define_tag! {
    /// Tag of write-only, single-pass cursors.
    OutputTag => Output
}

define_tag! {
    /// Tag of read-only, single-pass cursors.
    InputTag => Input: InputCategory
}

define_tag! {
    /// Tag of multi-pass cursors that only step forward.
    ForwardTag => Forward: InputCategory, ForwardCategory
}

define_tag! {
    /// Tag of cursors that step in both directions.
    BidirectionalTag => Bidirectional: InputCategory, ForwardCategory, BidirectionalCategory
}

define_tag! {
    /// Tag of cursors with constant-time offsets, indexing and distances.
    ///
    /// Raw pointers resolve to this tag.
    RandomAccessTag => RandomAccess:
        InputCategory, ForwardCategory, BidirectionalCategory, RandomAccessCategory
}

// -----------------------------------------------------------------------------
// Tests
