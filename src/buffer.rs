// Copyright 2022 Redglyph
//
// Owned stack buffer returning formatted values as strings

use std::str;
use crate::error::FmtError;
use crate::fixed::float_format;
use crate::int::private::Sealed;
use crate::int::{DecimalFormat, MAX_INT_LEN};

/// Stack buffer that formats numbers and returns them as `&str`, without any allocation.
///
/// ```
/// use fixfmt::NumBuffer;
///
/// let mut buffer = NumBuffer::new();
/// assert_eq!(buffer.format(-128_i8), "-128");
/// assert_eq!(buffer.format(u64::MAX), "18446744073709551615");
/// assert_eq!(buffer.format_fixed(0.125, 2), Ok("0.12"));
/// ```
pub struct NumBuffer {
    bytes: [u8; BUFFER_LEN],
}

const BUFFER_LEN: usize = 512;

impl NumBuffer {
    /// Size of the buffer, which limits the length of fixed-point renderings
    pub const CAPACITY: usize = BUFFER_LEN;

    pub fn new() -> Self {
        NumBuffer { bytes: [0; BUFFER_LEN] }
    }

    /// Formats an integer in decimal.
    pub fn format<T: DecimalFormat>(&mut self, value: T) -> &str {
        let start = value.write_scratch(&mut self.bytes[..MAX_INT_LEN]);
        // SAFETY: DecimalFormat is sealed, and all its implementations write ASCII digits and
        // '-' from `start`
        unsafe { str::from_utf8_unchecked(&self.bytes[start..MAX_INT_LEN]) }
    }

    /// Formats a floating-point value with `precision` fractional digits. Fails if the result
    /// doesn't fit in [NumBuffer::CAPACITY] bytes or if the value isn't finite.
    pub fn format_fixed(&mut self, value: f64, precision: usize) -> Result<&str, FmtError> {
        let len = float_format(&mut self.bytes, value, precision)?;
        // SAFETY: float_format only writes ASCII digits, '-' and '.'
        Ok(unsafe { str::from_utf8_unchecked(&self.bytes[..len]) })
    }
}

impl Default for NumBuffer {
    fn default() -> Self {
        NumBuffer::new()
    }
}
