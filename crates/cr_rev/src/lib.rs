//! A cursor adaptor that walks a sequence backwards.
//!
//! [`ReverseCursor<U>`] wraps a bidirectional or random-access cursor and
//! inverts every movement. It stores the cursor one position *after* the
//! element it refers to, so the end boundary of a sequence becomes the
//! first reversed element and the first element becomes the reversed end
//! boundary.
//!
//! **Descriptors**
//!
//! The adaptor takes the element, distance, reference, pointer and
//! capability types of its base unchanged. A reversed view is therefore
//! accepted by every algorithm the base is accepted by, including those
//! of [`cr_traits::algo`].
//!
//! **Operators**
//!
//! `==`, `<` and `-` between two adaptors take independent base types, so
//! a view over [`SliceCursorMut`](cr_ptr::SliceCursorMut) compares with a
//! view over [`SliceCursor`](cr_ptr::SliceCursor) of the same slice.
//! Ordering and distances are mirrored: `reverse(a) < reverse(b)` exactly
//! when `a > b`.
//!
//! ```
//! use cr_ptr::SliceCursor;
//! use cr_rev::{reverse, reversed};
//! use cr_traits::{CheckedCursor, algo};
//!
//! let ascending = [1, 3, 5, 7];
//! let first = SliceCursor::begin(&ascending);
//! let last = SliceCursor::end(&ascending);
//!
//! // The last element below 4, searched from the back.
//! let hit = algo::find_if(reverse(last), &reverse(first), |&x| x < 4).unwrap();
//! assert_eq!(hit.try_get(), Ok(&3));
//! assert_eq!(hit.base().position(), 2);
//!
//! assert_eq!(reversed(first, last).count(), 4);
//! ```
#![expect(unsafe_code, reason = "Dereferencing a cursor is unsafe and the adaptor forwards it.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod adapter;
mod ops;

// -----------------------------------------------------------------------------
// Top-level exports

pub use adapter::{ReverseCursor, reverse, reversed};
