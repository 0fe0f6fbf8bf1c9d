//! Errors reported by the checked (`try_*`) view operations.
//!
//! The plain operations treat a violated precondition as a programmer error
//! and panic. The checked variants return one of these instead, for callers
//! whose input comes from somewhere they do not control.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Indexing past the end of a view.
    #[error("index {index} out of bounds for view of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Dropping more elements than the view holds.
    #[error("cannot drop {count} element(s) from view of length {len}")]
    DropPastEnd { count: usize, len: usize },

    /// A `slice(offset, count)` whose end lies past the view.
    #[error("slice of {count} element(s) at offset {offset} exceeds view of length {len}")]
    SliceOutOfBounds {
        offset: usize,
        count: usize,
        len: usize,
    },

    /// `front`/`back` on an empty view.
    #[error("view is empty")]
    Empty,

    /// The bytes of a string view are not UTF-8.
    #[error("view is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

impl From<core::str::Utf8Error> for ViewError {
    fn from(err: core::str::Utf8Error) -> Self {
        ViewError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

impl From<alloc::string::FromUtf8Error> for ViewError {
    fn from(err: alloc::string::FromUtf8Error) -> Self {
        err.utf8_error().into()
    }
}

pub(crate) fn check_drop(count: usize, len: usize) -> Result<(), ViewError> {
    if count > len {
        return Err(ViewError::DropPastEnd { count, len });
    }
    Ok(())
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<(), ViewError> {
    if index >= len {
        return Err(ViewError::IndexOutOfBounds { index, len });
    }
    Ok(())
}

pub(crate) fn check_slice(offset: usize, count: usize, len: usize) -> Result<(), ViewError> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(ViewError::SliceOutOfBounds { offset, count, len }),
    }
}
