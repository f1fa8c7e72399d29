// Copyright 2022 Redglyph
//
// Integration tests: tests that all the functionalities are accessible and work as expected.

#![cfg(test)]

use fixfmt::*;

#[test]
fn size_then_format() {
    let mut buf = [0_u8; 64];

    let size = int_size(-1234567);
    let len = int_format(&mut buf[..size], -1234567).unwrap();
    assert_eq!((size, &buf[..len]), (8, &b"-1234567"[..]));

    let size = uint_size(1234567);
    let len = uint_format(&mut buf[..size], 1234567).unwrap();
    assert_eq!((size, &buf[..len]), (7, &b"1234567"[..]));

    let size = float_size(-1234.5678, 3).unwrap();
    let len = float_format(&mut buf[..size], -1234.5678, 3).unwrap();
    assert_eq!((size, &buf[..len]), (9, &b"-1234.568"[..]));
}

#[test]
fn generic_integers() {
    fn render<T: DecimalFormat>(value: T) -> String {
        let mut buf = vec![0_u8; value.decimal_size()];
        let len = value.format_decimal(&mut buf).unwrap();
        assert_eq!(len, buf.len());
        String::from_utf8(buf).unwrap()
    }

    assert_eq!(render(-5_i8), "-5");
    assert_eq!(render(300_u16), "300");
    assert_eq!(render(-70000_i32), "-70000");
    assert_eq!(render(i64::MIN), i64::MIN.to_string());
    assert_eq!(render(u64::MAX), u64::MAX.to_string());
    assert_eq!(render(usize::MAX), usize::MAX.to_string());
}

#[test]
fn buffer_str() {
    let values = [
        (0.5,       1,  "0.5"),
        (1.5,       0,  "2"),
        (1500.0,    2,  "1500.00"),
        (-0.03125,  4,  "-0.0312"),
        (-0.03125,  5,  "-0.03125"),
    ];
    let mut buffer = NumBuffer::new();
    for (value, precision, exp_string) in values {
        let string: &str = buffer.format_fixed(value, precision).unwrap();
        assert_eq!(string, exp_string);
    }
    assert_eq!(buffer.format(-42), "-42");
    assert_eq!(NumBuffer::default().format(42_u8), "42");
}

#[test]
fn errors() {
    let mut buf = [0_u8; 4];
    let error = int_format(&mut buf, 123456).unwrap_err();
    assert_eq!(error, FmtError::BufferTooSmall { needed: 6, capacity: 4 });
    assert_eq!(error.to_string(), "buffer too small: 6 bytes needed, capacity is 4");

    let error = float_format(&mut buf, f64::INFINITY, 1).unwrap_err();
    assert_eq!(error, FmtError::NonFinite);
    assert_eq!(error.to_string(), "cannot format a non-finite value");

    let boxed: Box<dyn std::error::Error> = Box::new(error);
    assert!(boxed.source().is_none());
}

#[test]
fn threads() {
    let handles: Vec<_> = (0..4_i64)
        .map(|t| std::thread::spawn(move || {
            let mut buf = [0_u8; 32];
            for i in 0..10_000_i64 {
                let value = (i - 5_000) * 7919 + t;
                let len = int_format(&mut buf, value).unwrap();
                assert_eq!(&buf[..len], value.to_string().as_bytes());
                let f = value as f64 / 64.0;
                let len = float_format(&mut buf, f, 3).unwrap();
                assert_eq!(&buf[..len], format!("{f:.3}").as_bytes());
            }
        }))
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
