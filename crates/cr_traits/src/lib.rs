//! Cursor descriptors and capabilities.
//!
//! A cursor is a value that refers to a position in a sequence and can be
//! moved along it. This crate resolves the five descriptors of a cursor
//! type at compile time and defines what a cursor can do.
//!
//! **Descriptors**
//!
//! [`Cursor`] carries the element type, the signed distance type, the
//! dereference result, the addressing type and the capability tag. Raw
//! pointers `*const T` and `*mut T` are random-access cursors out of the
//! box; any other type describes itself by implementing the trait.
//!
//! **Capabilities**
//!
//! [`ForwardCursor`], [`BidirectionalCursor`] and [`RandomAccessCursor`]
//! form the movement hierarchy. Each level requires a matching tag from the
//! closed set in this crate, so a cursor cannot claim a capability its tag
//! denies. [`CheckedCursor`] adds bounds-checked reads.
//!
//! **Ranges and algorithms**
//!
//! [`CursorRange`] iterates the positions of `[first, last)` and [`algo`]
//! provides movement and searching functions that work unchanged over
//! forward and reversed views.
#![expect(unsafe_code, reason = "Raw pointers are cursors, and reading through a cursor is unsafe.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod category;
mod cursor;
mod distance;
mod error;
mod range;
mod raw;

pub mod algo;

// -----------------------------------------------------------------------------
// Top-level exports

pub use category::{BidirectionalTag, ForwardTag, InputTag, OutputTag, RandomAccessTag};
pub use category::{
    BidirectionalCategory, Category, CategoryKind, ForwardCategory, InputCategory,
    RandomAccessCategory,
};
pub use cursor::{BidirectionalCursor, CheckedCursor, CursorDiff, ForwardCursor, RandomAccessCursor};
pub use cursor::{CategoryOf, DistanceOf, PointerOf, ReferenceOf, ValueOf};
pub use cursor::{Cursor, CursorFrom};
pub use distance::Distance;
pub use error::CursorError;
pub use range::CursorRange;
