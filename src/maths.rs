// Copyright 2022 Redglyph
//
// Integer helpers: decimal lengths and digit generation

use ilog::IntLog;

/// ASCII digit pairs, "00" to "99"
const DIGITS100: &[u8; 200] = b"\
    00010203040506070809\
    10111213141516171819\
    20212223242526272829\
    30313233343536373839\
    40414243444546474849\
    50515253545556575859\
    60616263646566676869\
    70717273747576777879\
    80818283848586878889\
    90919293949596979899";

/// Number of decimal digits of `value`, with 1 for 0.
pub(crate) fn decimal_length(value: u64) -> usize {
    match <u64 as IntLog>::checked_log10(value) {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// Converts `value` into 2 decimal ASCII digits at `buf[offset..offset + 2]`.
///
/// * `value`: integer, 0 <= value <= 99
fn write_2digits(buf: &mut [u8], offset: usize, value: usize) {
    debug_assert!(value <= 99);
    buf[offset..offset + 2].copy_from_slice(&DIGITS100[2 * value..2 * value + 2]);
}

/// Writes the decimal digits of `value` so that the last one lands at `end - 1`.
///
/// Returns the position of the first (most significant) digit.
pub(crate) fn write_digits_backwards(buf: &mut [u8], mut end: usize, mut value: u64) -> usize {
    while value >= 100 {
        let r = (value % 100) as usize;
        value /= 100;
        end -= 2;
        write_2digits(buf, end, r);
    }
    if value >= 10 {
        end -= 2;
        write_2digits(buf, end, value as usize);
    } else {
        end -= 1;
        buf[end] = b'0' + value as u8;
    }
    end
}

/// Writes exactly `width` decimal digits of `value` into `buf[..width]`, with leading zeros.
///
/// * `value`: integer, value < 10^width
pub(crate) fn write_padded_digits(buf: &mut [u8], width: usize, mut value: u32) {
    let mut end = width;
    while end >= 2 {
        end -= 2;
        write_2digits(buf, end, (value % 100) as usize);
        value /= 100;
    }
    if end == 1 {
        buf[0] = b'0' + (value % 10) as u8;
        value /= 10;
    }
    debug_assert_eq!(value, 0);
}
