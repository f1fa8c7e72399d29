// Copyright 2022 Redglyph
//
// Fixed-point rendering of double-precision values.
//
// A finite double is exactly `m` * 2^`e`. When `e` < 0, it has exactly -`e` fractional decimal
// digits, so rendering it with `p` >= -`e` places only appends zeros. For `s` = min(`p`, -`e`),
//
//     value * 10^s = m * 5^s / 2^(-e - s)
//
// which is computed on a stack big integer; the bits shifted out decide the rounding.

use crate::bignum::{Big, Chunks};
use crate::double::{Decoded, Double, Encoding, MAX_FRACTION_BITS};
use crate::error::FmtError;

/// Double-precision value rounded to a number of fractional digits: `digits` * 10^-`scale`,
/// rendered with `precision` fractional digits.
#[derive(Debug)]
pub(crate) struct FixedDecimal {
    negative: bool,
    /// rounded value scaled by 10^`scale`
    digits: Chunks,
    /// number of decimal digits of `digits`, 0 if it is zero
    num_digits: usize,
    /// fractional digits held in `digits`, the `precision` - `scale` remaining ones are zeros
    scale: usize,
    precision: usize,
}

impl FixedDecimal {
    pub fn new(value: f64, precision: usize) -> Result<Self, FmtError> {
        let double = Double::from(value);
        let (digits, scale) = match double.encoding() {
            Encoding::NonFinite => return Err(FmtError::NonFinite),
            Encoding::Zero => (Big::zero(), 0),
            Encoding::Digits => Self::round(double.decode(), precision),
        };
        let digits = digits.into_chunks();
        let num_digits = digits.decimal_length();
        Ok(FixedDecimal { negative: double.is_negative(), digits, num_digits, scale, precision })
    }

    /// Scales `value` by 10^`s` and rounds it to an integer, half to even, with
    /// `s` = min(`precision`, number of fractional digits of `value`).
    ///
    /// Returns the rounded integer and `s`.
    fn round(value: Decoded, precision: usize) -> (Big, usize) {
        let mut big = Big::from_u64(value.significand);
        if value.exponent >= 0 {
            big.shl(value.exponent as usize);
            return (big, 0);
        }
        let frac_bits = value.exponent.unsigned_abs() as usize;
        debug_assert!(frac_bits <= MAX_FRACTION_BITS);
        let scale = precision.min(frac_bits);
        big.mul_pow5(scale);
        let dropped = frac_bits - scale;
        if dropped > 0 {
            let half = big.bit(dropped - 1);
            let sticky = big.any_bit_below(dropped - 1);
            big.shr(dropped);
            if half && (sticky || big.is_odd()) {
                big.add_small(1);
            }
        }
        (big, scale)
    }

    /// Number of digits before the decimal point, including the carry of the rounding
    fn int_length(&self) -> usize {
        self.num_digits.saturating_sub(self.scale).max(1)
    }

    /// Exact length of the rendering
    pub fn len(&self) -> usize {
        let frac_length = if self.precision > 0 { 1 + self.precision } else { 0 };
        usize::from(self.negative) + self.int_length() + frac_length
    }

    /// Writes `[-]int[.frac]` at the beginning of `buf`, and returns the number of bytes written.
    pub fn write(self, buf: &mut [u8]) -> Result<usize, FmtError> {
        let len = self.len();
        FmtError::check_capacity(buf, len)?;
        let mut writer = BackWriter::new(&mut buf[..len], self.precision);
        for _ in self.scale..self.precision {
            writer.push_digit(b'0');
        }
        self.digits.for_each_digit_rev(|d| writer.push_digit(d));
        // leading zeros of a value below 1
        for _ in self.num_digits..=self.scale {
            writer.push_digit(b'0');
        }
        if self.negative {
            writer.push(b'-');
        }
        debug_assert_eq!(writer.pos, 0, "length mismatch");
        Ok(len)
    }
}

/// Writes the rendering from right to left, inserting the decimal point after
/// the fractional digits.
struct BackWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    frac_left: usize,
    point: bool,
}

impl<'a> BackWriter<'a> {
    fn new(buf: &'a mut [u8], precision: usize) -> Self {
        let pos = buf.len();
        BackWriter { buf, pos, frac_left: precision, point: precision > 0 }
    }

    fn push(&mut self, byte: u8) {
        self.pos -= 1;
        self.buf[self.pos] = byte;
    }

    fn push_digit(&mut self, digit: u8) {
        if self.frac_left == 0 && self.point {
            self.push(b'.');
            self.point = false;
        }
        self.push(digit);
        self.frac_left = self.frac_left.saturating_sub(1);
    }
}

/// Returns the exact length of `value` rendered with `precision` fractional digits.
///
/// The length accounts for the sign, the carry of the rounding into the integer part, and the
/// decimal point, which is omitted when `precision` is 0.
///
/// ```
/// use fixfmt::float_size;
///
/// assert_eq!(float_size(3.14159, 2), Ok(4));
/// assert_eq!(float_size(9.9996, 3), Ok(6));   // "10.000"
/// assert_eq!(float_size(-0.0, 1), Ok(4));     // "-0.0"
/// ```
pub fn float_size(value: f64, precision: usize) -> Result<usize, FmtError> {
    Ok(FixedDecimal::new(value, precision)?.len())
}

/// Writes `value` in fixed-point notation with exactly `precision` fractional digits at the
/// beginning of `buf`, and returns the number of bytes written, equal to
/// [`float_size(value, precision)`](float_size).
///
/// The digits are those of the exact binary value rounded half to even, which is what
/// `format!("{value:.precision$}")` produces. The sign follows the sign bit, so `-0.0` and
/// negative values rounded to zero are written with a leading `-`.
///
/// Fails with [`FmtError::BufferTooSmall`] if `buf` is too short, and with
/// [`FmtError::NonFinite`] for NaN and infinite values.
///
/// ```
/// use fixfmt::float_format;
///
/// let mut buf = [0_u8; 32];
/// let len = float_format(&mut buf, 3.14159, 2).unwrap();
/// assert_eq!(&buf[..len], b"3.14");
/// let len = float_format(&mut buf, 9.9996, 3).unwrap();
/// assert_eq!(&buf[..len], b"10.000");
/// let len = float_format(&mut buf, 2.5, 0).unwrap();
/// assert_eq!(&buf[..len], b"2");
/// ```
pub fn float_format(buf: &mut [u8], value: f64, precision: usize) -> Result<usize, FmtError> {
    FixedDecimal::new(value, precision)?.write(buf)
}
