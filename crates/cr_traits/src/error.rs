use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Error returned by bounds-checked cursor operations.
///
/// Positions and offsets are widened to `i128` so the same error serves
/// every distance type, including the one-before-start position a reversed
/// cursor may ask for.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CursorError {
    #[error("cursor position {position} does not address an element of a sequence of length {len}")]
    OutOfBounds { position: i128, len: usize },

    #[error("offset {offset} from position {position} leaves a sequence of length {len}")]
    OffsetOutOfRange {
        position: usize,
        offset: i128,
        len: usize,
    },

    #[error("cursors belong to different sequences")]
    ForeignCursor,
}
