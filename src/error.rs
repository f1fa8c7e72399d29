// Copyright 2022 Redglyph
//
// Formatting errors

use std::fmt;

/// Error returned by the formatting functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmtError {
    /// The destination buffer is shorter than the formatted value. Nothing has been written.
    BufferTooSmall {
        /// exact length of the formatted value
        needed: usize,
        /// length of the destination buffer
        capacity: usize,
    },
    /// The floating-point value is NaN or infinite.
    NonFinite,
}

impl FmtError {
    /// Checks that `buf` can hold `needed` bytes.
    pub(crate) fn check_capacity(buf: &[u8], needed: usize) -> Result<(), FmtError> {
        if buf.len() < needed {
            Err(FmtError::BufferTooSmall { needed, capacity: buf.len() })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for FmtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FmtError::BufferTooSmall { needed, capacity } => {
                write!(f, "buffer too small: {needed} bytes needed, capacity is {capacity}")
            }
            FmtError::NonFinite => write!(f, "cannot format a non-finite value"),
        }
    }
}

impl std::error::Error for FmtError {}
