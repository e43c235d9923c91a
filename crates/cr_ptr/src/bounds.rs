use cr_traits::{CursorError, Distance};

/// Index of the element `offset` positions away from `position`.
#[inline]
pub(crate) fn element_index(position: usize, offset: isize, len: usize) -> Result<usize, CursorError> {
    match position.checked_add_signed(offset) {
        Some(index) if index < len => Ok(index),
        _ => {
            let err = CursorError::OutOfBounds {
                position: position as i128 + offset.to_i128(),
                len,
            };
            log::debug!("slice cursor read rejected: {err}");
            Err(err)
        }
    }
}

/// Position reached by moving `offset` elements from `position`.
///
/// The end boundary `len` is a valid position.
#[inline]
pub(crate) fn moved_position(position: usize, offset: isize, len: usize) -> Result<usize, CursorError> {
    match position.checked_add_signed(offset) {
        Some(moved) if moved <= len => Ok(moved),
        _ => {
            let err = CursorError::OffsetOutOfRange {
                position,
                offset: offset.to_i128(),
                len,
            };
            log::debug!("slice cursor move rejected: {err}");
            Err(err)
        }
    }
}

/// Checks that `position` is a position of a sequence of length `len`,
/// the end boundary included.
#[inline]
pub(crate) fn checked_position(position: usize, len: usize) -> Result<usize, CursorError> {
    if position <= len {
        return Ok(position);
    }
    let err = CursorError::OffsetOutOfRange {
        position: 0,
        offset: position as i128,
        len,
    };
    log::debug!("slice cursor placement rejected: {err}");
    Err(err)
}

/// Distance `lhs - rhs` between two positions of one sequence.
#[inline]
pub(crate) fn position_diff(same_sequence: bool, lhs: usize, rhs: usize) -> Result<isize, CursorError> {
    if !same_sequence {
        log::warn!("distance requested between cursors of different slices");
        return Err(CursorError::ForeignCursor);
    }
    Ok((lhs as isize).wrapping_sub(rhs as isize))
}

/// Turns a rejected operation into a panic at the caller.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(err: CursorError) -> ! {
    panic!("{err}")
}
