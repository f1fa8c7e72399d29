// ---------------------------------------------------------------------------------------------
// Test values

/// (value, expected string)
pub const INT_VALUES: &[(i64, &str)] = &[
    (0,                     "0"),
    (7,                     "7"),
    (-7,                    "-7"),
    (42,                    "42"),
    (-42,                   "-42"),
    (99,                    "99"),
    (100,                   "100"),
    (-100,                  "-100"),
    (1_000_000_007,         "1000000007"),
    (-4_294_967_296,        "-4294967296"),
    (999_999_999_999_999,   "999999999999999"),
    (i64::MAX,              "9223372036854775807"),
    (i64::MIN + 1,          "-9223372036854775807"),
    (i64::MIN,              "-9223372036854775808"),
];

/// (value, expected string)
pub const UINT_VALUES: &[(u64, &str)] = &[
    (0,                             "0"),
    (9,                             "9"),
    (10,                            "10"),
    (42,                            "42"),
    (4_294_967_295,                 "4294967295"),
    (10_000_000_000_000_000_000,    "10000000000000000000"),
    (u64::MAX,                      "18446744073709551615"),
];

/// (value, precision, expected string)
pub const FIXED_VALUES: &[(f64, usize, &str)] = &[
    // zeros
    (0.0,                   1,      "0.0"),
    (0.0,                   17,     "0.00000000000000000"),
    (0.0,                   0,      "0"),
    (-0.0,                  2,      "-0.00"),
    (-0.0,                  0,      "-0"),
    // plain values
    (3.14159,               2,      "3.14"),
    (0.0005,                4,      "0.0005"),
    (0.0005,                6,      "0.000500"),
    (123456789.987654321,   5,      "123456789.98765"),
    (1e15 + 0.3,            2,      "1000000000000000.25"),
    // carry into the integer part
    (9.9996,                3,      "10.000"),
    (99.999,                2,      "100.00"),
    (-9.5,                  0,      "-10"),
    (0.9999999999999999,    15,     "1.000000000000000"),
    (0.9999999999999999,    16,     "0.9999999999999999"),
    // ties and near-ties, decided on the exact binary value
    (9.9995,                3,      "9.999"),
    (99.995,                2,      "100.00"),
    (0.125,                 2,      "0.12"),
    (0.375,                 2,      "0.38"),
    (0.25,                  1,      "0.2"),
    (0.35,                  1,      "0.3"),
    (0.45,                  1,      "0.5"),
    (0.5,                   0,      "0"),
    (1.5,                   0,      "2"),
    (2.5,                   0,      "2"),
    (-2.5,                  0,      "-2"),
    // negative values rounded to zero keep their sign
    (-0.001,                2,      "-0.00"),
    (-0.005,                2,      "-0.01"),
    (1e-7,                  3,      "0.000"),
    (5e-324,                3,      "0.000"),
    // integers beyond 2^53 and 2^64
    (4503599627370496.0,    1,      "4503599627370496.0"),
    (9007199254740992.0,    1,      "9007199254740992.0"),
    (18446744073709551615.0, 1,     "18446744073709551616.0"),
    (1e21,                  2,      "1000000000000000000000.00"),
];
