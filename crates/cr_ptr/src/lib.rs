//! Bounds-checked cursors over borrowed slices.
//!
//! Raw pointers are the zero-cost cursors: moving them is free and reading
//! through them is `unsafe`. The cursors of this crate keep the slice
//! length next to the position instead, so leaving the slice panics with a
//! descriptive message rather than reading stray memory.
//!
//! **SliceCursor**
//!
//! [`SliceCursor<'a, T>`] walks a `&'a [T]`. Reads are safe through
//! [`element`](SliceCursor::element) and the
//! [`CheckedCursor`](cr_traits::CheckedCursor) methods.
//!
//! **SliceCursorMut**
//!
//! [`SliceCursorMut<'a, T>`] walks a `&'a mut [T]`. It is `Copy`, so reading
//! through it stays `unsafe`: the caller keeps the returned `&mut T`
//! unaliased. It compares with, measures against and converts into
//! [`SliceCursor`]s of the same slice.
//!
//! Both are random-access cursors with `isize` distances.
#![expect(unsafe_code, reason = "Exclusive slice cursors hold raw pointers.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod bounds;
mod slice;
mod slice_mut;

// -----------------------------------------------------------------------------
// Top-level exports

pub use slice::SliceCursor;
pub use slice_mut::SliceCursorMut;
