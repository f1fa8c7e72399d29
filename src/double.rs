// Copyright 2022 Redglyph
//
// IEEE-754 double-precision decoding

// ---------------------------------------------------------------------------------------------
// IEEE-754 double precision:
//
// - bit 63: sign, 0 = positive, 1 = negative
// - bits 62-52: exponent (11 bits),
// - bits 51-00: fraction (52 bits) of 53-bit normalized significand (MSB "hidden" since always '1')
//
// finite value = -1 ^ sign * (1.fraction) * 2 ^ (e - 1023)

type BitsType = u64;

pub(crate) const SIGNIFICAND_SIZE: i32 = 53;
const MAX_EXPONENT: i32 = 1024;

pub(crate) const EXPONENT_BIAS: i32 = MAX_EXPONENT - 1 + (SIGNIFICAND_SIZE - 1);
pub(crate) const MAX_IEEE_EXPONENT: BitsType = (2 * MAX_EXPONENT - 1) as BitsType;
pub(crate) const HIDDEN_BIT: BitsType = (1 as BitsType) << (SIGNIFICAND_SIZE - 1);
pub(crate) const FRACTION_MASK: BitsType = HIDDEN_BIT - 1;
pub(crate) const EXPONENT_MASK: BitsType = MAX_IEEE_EXPONENT << (SIGNIFICAND_SIZE - 1);
pub(crate) const SIGN_MASK: BitsType = (1 as BitsType) << 63;

/// Largest number of fractional binary digits of a finite value (smallest subnormal is 2^-1074).
pub(crate) const MAX_FRACTION_BITS: usize = (EXPONENT_BIAS - 1) as usize;

#[derive(Debug, PartialEq)]
pub(crate) enum Encoding {
    NonFinite,  // +/- infinity or not a number
    Zero,       // +0 or -0
    Digits      // non-zero finite number
}

/// Finite, non-zero magnitude `significand` * 2^`exponent`, with an odd `significand`.
#[derive(Debug, PartialEq)]
pub(crate) struct Decoded {
    pub significand: u64,
    pub exponent: i32,
}

#[derive(Debug)]
/// IEEE-754 double-precision floating-point value
pub(crate) struct Double {
    bits: BitsType
}

impl Double {
    /// Fraction component (significand without its hidden MSB)
    pub fn physical_fraction(&self) -> BitsType {
        self.bits & FRACTION_MASK
    }

    /// Exponent component
    pub fn physical_exponent(&self) -> BitsType {
        (self.bits & EXPONENT_MASK) >> (SIGNIFICAND_SIZE - 1)
    }

    /// Encoding class (zero, finite or non-finite)
    pub fn encoding(&self) -> Encoding {
        if self.bits & !SIGN_MASK == 0 {
            Encoding::Zero
        } else if self.bits & EXPONENT_MASK != EXPONENT_MASK {
            Encoding::Digits
        } else {
            Encoding::NonFinite
        }
    }

    /// Whether the sign bit is set, including for -0.0
    pub fn is_negative(&self) -> bool {
        self.bits & SIGN_MASK != 0
    }

    /// Exact magnitude of a non-zero finite value, with trailing zero bits moved into the exponent.
    pub fn decode(&self) -> Decoded {
        debug_assert_eq!(self.encoding(), Encoding::Digits);
        let ieee_fraction = self.physical_fraction();
        let ieee_exponent = self.physical_exponent();
        let (c, q) = if ieee_exponent != 0 {
            (HIDDEN_BIT | ieee_fraction, ieee_exponent as i32 - EXPONENT_BIAS)
        } else {
            (ieee_fraction, 1 - EXPONENT_BIAS)
        };
        let tz = c.trailing_zeros();
        Decoded { significand: c >> tz, exponent: q + tz as i32 }
    }
}

impl From<f64> for Double {
    fn from(f: f64) -> Self {
        Double { bits: f.to_bits() }
    }
}
