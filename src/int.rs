// Copyright 2022 Redglyph
//
// Decimal formatting of 64-bit integers

use crate::error::FmtError;
use crate::maths::{decimal_length, write_digits_backwards};

/// Maximum length of a formatted 64-bit integer: "-9223372036854775808" and
/// "18446744073709551615" both take 20 bytes.
pub const MAX_INT_LEN: usize = 20;

/// Writes `magnitude` at the end of `scratch`, preceded by '-' if `negative`.
///
/// Returns the position of the first byte.
pub(crate) fn write_int_scratch(scratch: &mut [u8], magnitude: u64, negative: bool) -> usize {
    let end = scratch.len();
    debug_assert!(end >= MAX_INT_LEN);
    let mut start = write_digits_backwards(scratch, end, magnitude);
    if negative {
        start -= 1;
        scratch[start] = b'-';
    }
    start
}

fn copy_scratch(buf: &mut [u8], magnitude: u64, negative: bool) -> Result<usize, FmtError> {
    let mut scratch = [0_u8; MAX_INT_LEN];
    let start = write_int_scratch(&mut scratch, magnitude, negative);
    let len = MAX_INT_LEN - start;
    FmtError::check_capacity(buf, len)?;
    buf[..len].copy_from_slice(&scratch[start..]);
    Ok(len)
}

/// Returns the number of bytes needed to write `value` in decimal.
///
/// ```
/// use fixfmt::int_size;
///
/// assert_eq!(int_size(0), 1);
/// assert_eq!(int_size(-42), 3);
/// assert_eq!(int_size(i64::MIN), 20);
/// ```
pub fn int_size(value: i64) -> usize {
    usize::from(value < 0) + decimal_length(value.unsigned_abs())
}

/// Writes `value` in decimal at the beginning of `buf`, and returns the number of bytes written,
/// equal to [`int_size(value)`](int_size).
///
/// Fails with [`FmtError::BufferTooSmall`] if `buf` is shorter than that, in which case `buf`
/// is left untouched. A buffer of [`MAX_INT_LEN`] bytes is always large enough.
///
/// ```
/// use fixfmt::int_format;
///
/// let mut buf = [0_u8; 20];
/// let len = int_format(&mut buf, -42).unwrap();
/// assert_eq!(&buf[..len], b"-42");
/// ```
pub fn int_format(buf: &mut [u8], value: i64) -> Result<usize, FmtError> {
    copy_scratch(buf, value.unsigned_abs(), value < 0)
}

/// Returns the number of bytes needed to write `value` in decimal.
pub fn uint_size(value: u64) -> usize {
    decimal_length(value)
}

/// Writes `value` in decimal at the beginning of `buf`, and returns the number of bytes written,
/// equal to [`uint_size(value)`](uint_size).
///
/// Fails with [`FmtError::BufferTooSmall`] if `buf` is shorter than that, in which case `buf`
/// is left untouched.
pub fn uint_format(buf: &mut [u8], value: u64) -> Result<usize, FmtError> {
    copy_scratch(buf, value, false)
}

// ---------------------------------------------------------------------------------------------

/// Integer types that can be formatted in decimal.
///
/// Signed types go through [int_size] and [int_format], unsigned ones through [uint_size] and
/// [uint_format].
///
/// This trait is sealed and only implemented for the primitive integer types:
///
/// ```compile_fail
/// use fixfmt::{DecimalFormat, FmtError};
///
/// #[derive(Clone, Copy)]
/// struct Celsius(i32);
///
/// impl DecimalFormat for Celsius {
///     fn decimal_size(self) -> usize {
///         self.0.decimal_size()
///     }
///
///     fn format_decimal(self, buf: &mut [u8]) -> Result<usize, FmtError> {
///         self.0.format_decimal(buf)
///     }
/// }
/// ```
pub trait DecimalFormat: private::Sealed + Copy {
    /// Number of bytes needed to write the value
    fn decimal_size(self) -> usize;

    /// Writes the value at the beginning of `buf` and returns the number of bytes written.
    fn format_decimal(self, buf: &mut [u8]) -> Result<usize, FmtError>;
}

pub(crate) mod private {
    pub trait Sealed {
        /// Writes the value at the end of `scratch`, which holds at least
        /// [MAX_INT_LEN](super::MAX_INT_LEN) bytes, and returns the position of the first byte.
        ///
        /// Only ASCII digits and '-' are written.
        fn write_scratch(self, scratch: &mut [u8]) -> usize;
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => { $(
        impl DecimalFormat for $t {
            fn decimal_size(self) -> usize {
                int_size(self as i64)
            }

            fn format_decimal(self, buf: &mut [u8]) -> Result<usize, FmtError> {
                int_format(buf, self as i64)
            }
        }

        impl private::Sealed for $t {
            fn write_scratch(self, scratch: &mut [u8]) -> usize {
                write_int_scratch(scratch, (self as i64).unsigned_abs(), self < 0)
            }
        }
    )* };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => { $(
        impl DecimalFormat for $t {
            fn decimal_size(self) -> usize {
                uint_size(self as u64)
            }

            fn format_decimal(self, buf: &mut [u8]) -> Result<usize, FmtError> {
                uint_format(buf, self as u64)
            }
        }

        impl private::Sealed for $t {
            fn write_scratch(self, scratch: &mut [u8]) -> usize {
                write_int_scratch(scratch, self as u64, false)
            }
        }
    )* };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);
