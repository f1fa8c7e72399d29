// Copyright 2022 Redglyph
//
// Fixed-capacity unsigned big integer, kept on the stack.
//
// It only provides the few operations needed to render a double exactly: multiplication by
// small factors and powers of 5, binary shifts, bit tests and division by small divisors.

use crate::maths::{decimal_length, write_padded_digits};

type Limb = u32;
type DoubleLimb = u64;

const LIMB_BITS: usize = Limb::BITS as usize;

/// Number of limbs: the largest value is `(2^53 - 1) * 5^1074`, which takes 2547 bits.
const LIMBS: usize = 84;

/// 5^13, the largest power of 5 fitting in a limb
const POW5_13: Limb = 1_220_703_125;

/// 10^9, the largest power of 10 fitting in a limb
const POW10_9: Limb = 1_000_000_000;

/// Number of base 10^9 chunks: the largest value has 767 decimal digits.
const CHUNKS: usize = 86;

#[derive(Clone, Debug)]
pub(crate) struct Big {
    /// little-endian limbs, `limbs[size..]` are all zeros
    limbs: [Limb; LIMBS],
    /// number of significant limbs, 0 for zero
    size: usize,
}

impl Big {
    pub fn zero() -> Self {
        Big { limbs: [0; LIMBS], size: 0 }
    }

    pub fn from_u64(value: u64) -> Self {
        let mut big = Big::zero();
        big.limbs[0] = value as Limb;
        big.limbs[1] = (value >> LIMB_BITS) as Limb;
        big.size = 2;
        big.trim();
        big
    }

    fn trim(&mut self) {
        while self.size > 0 && self.limbs[self.size - 1] == 0 {
            self.size -= 1;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.size == 0
    }

    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 != 0
    }

    /// Value if it fits in 64 bits
    #[cfg(test)]
    pub fn to_u64(&self) -> Option<u64> {
        match self.size {
            0..=2 => Some(DoubleLimb::from(self.limbs[1]) << LIMB_BITS | DoubleLimb::from(self.limbs[0])),
            _ => None
        }
    }

    /// Whether bit `index` is set
    pub fn bit(&self, index: usize) -> bool {
        let limb = index / LIMB_BITS;
        limb < self.size && (self.limbs[limb] >> (index % LIMB_BITS)) & 1 != 0
    }

    /// Whether any of the bits below `index` is set
    pub fn any_bit_below(&self, index: usize) -> bool {
        let limb = (index / LIMB_BITS).min(self.size);
        if self.limbs[..limb].iter().any(|&l| l != 0) {
            return true;
        }
        let bits = index % LIMB_BITS;
        limb < self.size && bits > 0 && self.limbs[limb] & ((1 << bits) - 1) != 0
    }

    pub fn add_small(&mut self, value: Limb) -> &mut Self {
        let mut carry = value;
        for limb in &mut self.limbs[..self.size] {
            let (sum, overflow) = limb.overflowing_add(carry);
            *limb = sum;
            carry = Limb::from(overflow);
            if carry == 0 {
                break;
            }
        }
        if carry != 0 {
            debug_assert!(self.size < LIMBS, "big integer overflow");
            self.limbs[self.size] = carry;
            self.size += 1;
        }
        self
    }

    pub fn mul_small(&mut self, factor: Limb) -> &mut Self {
        let mut carry: DoubleLimb = 0;
        for limb in &mut self.limbs[..self.size] {
            let v = DoubleLimb::from(*limb) * DoubleLimb::from(factor) + carry;
            *limb = v as Limb;
            carry = v >> LIMB_BITS;
        }
        if carry != 0 {
            debug_assert!(self.size < LIMBS, "big integer overflow");
            self.limbs[self.size] = carry as Limb;
            self.size += 1;
        }
        self.trim();
        self
    }

    /// Multiplies by 5^`e`
    pub fn mul_pow5(&mut self, mut e: usize) -> &mut Self {
        while e >= 13 {
            self.mul_small(POW5_13);
            e -= 13;
        }
        if e > 0 {
            self.mul_small(5_u32.pow(e as u32));
        }
        self
    }

    /// Multiplies by 2^`bits`
    pub fn shl(&mut self, bits: usize) -> &mut Self {
        if self.is_zero() {
            return self;
        }
        let digits = bits / LIMB_BITS;
        let shift = bits % LIMB_BITS;
        if shift == 0 {
            debug_assert!(self.size + digits <= LIMBS, "big integer overflow");
            for i in (0..self.size).rev() {
                self.limbs[i + digits] = self.limbs[i];
            }
            self.size += digits;
        } else {
            debug_assert!(self.size + digits < LIMBS, "big integer overflow");
            self.limbs[self.size + digits] = 0;
            for i in (0..self.size).rev() {
                let limb = self.limbs[i];
                self.limbs[i + digits + 1] |= limb >> (LIMB_BITS - shift);
                self.limbs[i + digits] = limb << shift;
            }
            self.size += digits + 1;
        }
        for limb in &mut self.limbs[..digits] {
            *limb = 0;
        }
        self.trim();
        self
    }

    /// Divides by 2^`bits`, discarding the remainder
    pub fn shr(&mut self, bits: usize) -> &mut Self {
        let digits = bits / LIMB_BITS;
        let shift = bits % LIMB_BITS;
        if digits >= self.size {
            *self = Big::zero();
            return self;
        }
        let new_size = self.size - digits;
        for i in 0..new_size {
            let mut limb = self.limbs[i + digits] >> shift;
            if shift > 0 && i + digits + 1 < self.size {
                limb |= self.limbs[i + digits + 1] << (LIMB_BITS - shift);
            }
            self.limbs[i] = limb;
        }
        for limb in &mut self.limbs[new_size..self.size] {
            *limb = 0;
        }
        self.size = new_size;
        self.trim();
        self
    }

    /// Divides by `divisor` and returns the remainder
    pub fn div_rem_small(&mut self, divisor: Limb) -> Limb {
        debug_assert!(divisor != 0);
        let divisor = DoubleLimb::from(divisor);
        let mut rem: DoubleLimb = 0;
        for limb in self.limbs[..self.size].iter_mut().rev() {
            let v = (rem << LIMB_BITS) | DoubleLimb::from(*limb);
            *limb = (v / divisor) as Limb;
            rem = v % divisor;
        }
        self.trim();
        rem as Limb
    }

    /// Converts to base 10^9, which consumes the value.
    pub fn into_chunks(mut self) -> Chunks {
        let mut chunks = Chunks { chunks: [0; CHUNKS], size: 0 };
        while !self.is_zero() {
            debug_assert!(chunks.size < CHUNKS, "too many decimal digits");
            chunks.chunks[chunks.size] = self.div_rem_small(POW10_9);
            chunks.size += 1;
        }
        chunks
    }
}

/// Decimal digits of a [Big] in base 10^9, from the least significant chunk.
#[derive(Clone, Debug)]
pub(crate) struct Chunks {
    /// `chunks[size - 1]` is not zero
    chunks: [Limb; CHUNKS],
    size: usize,
}

impl Chunks {
    /// Number of decimal digits, 0 for zero
    pub fn decimal_length(&self) -> usize {
        match self.chunks[..self.size].split_last() {
            Some((&top, low)) => low.len() * 9 + decimal_length(u64::from(top)),
            None => 0,
        }
    }

    /// Calls `f` with each ASCII decimal digit, from the least significant one. Zero yields none.
    pub fn for_each_digit_rev<F: FnMut(u8)>(&self, mut f: F) {
        let Some((&top, low)) = self.chunks[..self.size].split_last() else {
            return;
        };
        let mut digits = [0_u8; 9];
        for &chunk in low {
            write_padded_digits(&mut digits, 9, chunk);
            digits.iter().rev().for_each(|&d| f(d));
        }
        let mut v = top;
        while v > 0 {
            f(b'0' + (v % 10) as u8);
            v /= 10;
        }
    }
}
