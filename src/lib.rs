// Copyright 2022 Redglyph
//
// Allocation-free decimal formatting of 64-bit integers, and fixed-point formatting of
// IEEE-754 double-precision floating-point values.
//
// Each value type has a pair of functions: one computes the exact length of the rendering,
// the other writes it at the beginning of a caller-supplied buffer and returns the number of
// bytes written. Both always agree, and the output is identical to the standard library's
// `to_string()` for integers and `format!("{value:.precision$}")` for floating-point values.

//! Allocation-free decimal formatting of `i64`, `u64`, and fixed-point formatting of `f64`.
//!
//! ```
//! use fixfmt::*;
//!
//! let mut buf = [0_u8; 32];
//!
//! let len = int_format(&mut buf, i64::MIN).unwrap();
//! assert_eq!(len, int_size(i64::MIN));
//! assert_eq!(&buf[..len], b"-9223372036854775808");
//!
//! let len = uint_format(&mut buf, 42).unwrap();
//! assert_eq!(&buf[..len], b"42");
//!
//! let size = float_size(9.9996, 3).unwrap();
//! let len = float_format(&mut buf[..size], 9.9996, 3).unwrap();
//! assert_eq!(&buf[..len], b"10.000");
//!
//! assert_eq!(int_format(&mut buf[..2], -100), Err(FmtError::BufferTooSmall { needed: 4, capacity: 2 }));
//! ```

mod bignum;
mod buffer;
mod double;
mod error;
mod fixed;
mod int;
mod maths;
#[cfg(test)]
mod test_values;

pub use buffer::NumBuffer;
pub use error::FmtError;
pub use fixed::{float_format, float_size};
pub use int::{int_format, int_size, uint_format, uint_size, DecimalFormat, MAX_INT_LEN};
