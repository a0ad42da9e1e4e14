//! Helios base field / Selene scalar field.
//!
//! ```text
//! F_p, p = 2^255 - 19
//! ```
//!
//! This is the same modulus Curve25519 and Ed25519 use, so the addition
//! chain in [`Fp::invert`] is the identical fixed sequence of squarings
//! and multiplications used there — only the limb representation
//! differs. Elements are stored as five 51-bit limbs in a `u64` each,
//! little-endian by limb (`value = sum(limbs[i] * 2^(51*i))`). Every
//! arithmetic operation routes its result through [`Fp::reduce`], which
//! carry-propagates back down to (at most a few bits over) 51 bits per
//! limb, so limbs never accumulate enough slack to overflow the next
//! multiply's `u128` accumulators — the value is only brought to the
//! unique representative in `[0, p)` on demand, by [`Fp::to_canonical`].

use std::ops::{Add, Mul, Neg, Sub};

use crate::ct;
use crate::error::DecodeError;
use crate::field::Field;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// An element of `F_p`, `p = 2^255 - 19`.
#[derive(Clone, Copy, Debug)]
pub struct Fp(pub(crate) [u64; 5]);

impl Fp {
    /// Builds a loose element directly from five limbs, without
    /// normalizing. Used internally by arithmetic routines that know
    /// their inputs are already bounded.
    pub(crate) const fn from_limbs(limbs: [u64; 5]) -> Fp {
        Fp(limbs)
    }

    /// Carry propagation over five 128-bit accumulators, folding the
    /// final carry back into limb 0 multiplied by 19 (since `2^255 = 19`
    /// in this field). Processes limbs strictly in order (each step's
    /// carry-in is already applied before that limb's carry-out is
    /// computed), and sweeps the chain twice: the first sweep drains an
    /// arbitrarily large accumulator (as produced by a full schoolbook
    /// product) down to where only limb 0 can still exceed 51 bits
    /// (from the `c4 * 19` fold-back), and the second sweep, starting
    /// from values already near 51 bits, drains that. The result's
    /// limbs are each under 51 bits plus a handful of slack bits — not
    /// yet the unique representative in `[0, p)`, which [`to_canonical`]
    /// produces.
    fn reduce(mut limbs: [u128; 5]) -> Fp {
        const MASK: u128 = LOW_51_BIT_MASK as u128;
        for _ in 0..2 {
            let c0 = limbs[0] >> 51;
            limbs[0] &= MASK;
            limbs[1] += c0;

            let c1 = limbs[1] >> 51;
            limbs[1] &= MASK;
            limbs[2] += c1;

            let c2 = limbs[2] >> 51;
            limbs[2] &= MASK;
            limbs[3] += c2;

            let c3 = limbs[3] >> 51;
            limbs[3] &= MASK;
            limbs[4] += c3;

            let c4 = limbs[4] >> 51;
            limbs[4] &= MASK;
            limbs[0] += c4 * 19;
        }

        Fp([
            limbs[0] as u64,
            limbs[1] as u64,
            limbs[2] as u64,
            limbs[3] as u64,
            limbs[4] as u64,
        ])
    }

    /// Reduces `self` to the unique representative in `[0, p)`.
    fn to_canonical(&self) -> [u64; 5] {
        let mut limbs = self.0;

        // One more carry pass: after `reduce`, limb 0 may exceed 51
        // bits by the c4*19 term, so propagate once more.
        let c0 = limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] += c0;
        let c1 = limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] += c1;
        let c2 = limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] += c2;
        let c3 = limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] += c3;
        let c4 = limbs[4] >> 51;
        limbs[4] &= LOW_51_BIT_MASK;
        limbs[0] += c4 * 19;
        let c0b = limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] += c0b;

        // Conditionally subtract p = 2^255 - 19 once: compare against
        // p by adding 19 and checking for overflow out of the top limb.
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += 19 * q;
        let c0 = limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] += c0;
        let c1 = limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] += c1;
        let c2 = limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] += c2;
        let c3 = limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] += c3;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs
    }

    /// Parses 32 little-endian bytes into a loose field element without
    /// the bit-255 or canonical-range checks `Field::from_bytes`
    /// enforces. Used by wide scalar reduction, which needs to treat
    /// arbitrary 256-bit halves of a 512-bit input as field elements
    /// rather than reject non-canonical ones.
    pub(crate) fn from_bytes_raw(bytes: &[u8; 32]) -> Fp {
        let load8 = |b: &[u8]| -> u64 {
            (b[0] as u64)
                | (b[1] as u64) << 8
                | (b[2] as u64) << 16
                | (b[3] as u64) << 24
                | (b[4] as u64) << 32
                | (b[5] as u64) << 40
                | (b[6] as u64) << 48
                | (b[7] as u64) << 56
        };
        let low_bit_mask = (1u64 << 51) - 1;
        Fp([
            load8(&bytes[0..8]) & low_bit_mask,
            (load8(&bytes[6..14]) >> 3) & low_bit_mask,
            (load8(&bytes[12..20]) >> 6) & low_bit_mask,
            (load8(&bytes[19..27]) >> 1) & low_bit_mask,
            (load8(&bytes[24..32]) >> 12) & low_bit_mask,
        ])
    }

    /// `self^(2^n)`, applying [`Field::square`] `n` times.
    pub(crate) fn n_square(&self, n: u32) -> Fp {
        let mut r = self.square();
        for _ in 1..n {
            r = r.square();
        }
        r
    }

    /// `self^(2^252 - 3)`, the exponent used by square-root extraction
    /// for this modulus (`p ≡ 5 (mod 8)`).
    pub(crate) fn pow22523(&self) -> Fp {
        let mut t0 = self.square();
        let mut t1 = t0.n_square(2);

        t1 = *self * t1;
        t0 = t0 * t1;

        t0 = t0.square();
        t0 = t1 * t0;

        t1 = t0.n_square(5);
        t0 = t1 * t0;

        t1 = t0.n_square(10);
        t1 = t1 * t0;

        let mut t2 = t1.n_square(20);
        t1 = t2 * t1;

        t1 = t1.n_square(10);
        t0 = t1 * t0;

        t1 = t0.n_square(50);
        t1 = t1 * t0;

        t2 = t1.n_square(100);
        t1 = t2 * t1;

        t1 = t1.n_square(50);
        t0 = t1 * t0;

        t0 = t0.n_square(2);

        t0 * *self
    }
}

impl Field for Fp {
    const ZERO: Fp = Fp([0, 0, 0, 0, 0]);
    const ONE: Fp = Fp([1, 0, 0, 0, 0]);

    fn square(&self) -> Fp {
        *self * *self
    }

    fn invert(&self) -> Option<Fp> {
        if self.is_zero() {
            return None;
        }

        let mut t0 = self.square();
        let mut t1 = t0.n_square(2);

        t1 = *self * t1;
        t0 = t0 * t1;

        let mut t2 = t0.square();
        t1 = t1 * t2;

        t2 = t1.n_square(5);
        t1 = t2 * t1;

        t2 = t1.n_square(10);
        t2 = t2 * t1;

        let mut t3 = t2.n_square(20);
        t2 = t3 * t2;

        t2 = t2.n_square(10);
        t1 = t2 * t1;

        t2 = t1.n_square(50);
        t2 = t2 * t1;

        t3 = t2.n_square(100);
        t2 = t3 * t2;

        t2 = t2.n_square(50);
        t1 = t2 * t1;

        t1 = t1.n_square(5);

        Some(t1 * t0)
    }

    fn sqrt(&self) -> Option<Fp> {
        if self.is_zero() {
            return Some(Fp::ZERO);
        }
        // p ≡ 5 (mod 8): candidate = self^((p+3)/8); if candidate^2 == self
        // it's the root, else candidate * sqrt(-1) is, else self has no root.
        let candidate = *self * self.pow22523();
        if candidate.square().ct_eq(self) {
            return Some(candidate);
        }
        let sqrt_m1 = sqrt_minus_one();
        let candidate = candidate * sqrt_m1;
        if candidate.square().ct_eq(self) {
            Some(candidate)
        } else {
            None
        }
    }

    fn is_zero(&self) -> bool {
        let c = self.to_canonical();
        (c[0] | c[1] | c[2] | c[3] | c[4]) == 0
    }

    fn conditional_select(a: &Fp, b: &Fp, choice: u8) -> Fp {
        Fp([
            ct::select_u64(a.0[0], b.0[0], choice),
            ct::select_u64(a.0[1], b.0[1], choice),
            ct::select_u64(a.0[2], b.0[2], choice),
            ct::select_u64(a.0[3], b.0[3], choice),
            ct::select_u64(a.0[4], b.0[4], choice),
        ])
    }

    fn ct_eq(&self, other: &Fp) -> bool {
        let a = self.to_canonical();
        let b = other.to_canonical();
        let mut diff = 0u64;
        for i in 0..5 {
            diff |= a[i] ^ b[i];
        }
        diff == 0
    }

    fn from_u64(x: u64) -> Fp {
        Fp([x & LOW_51_BIT_MASK, x >> 51, 0, 0, 0])
    }

    fn from_bytes(bytes: &[u8; 32]) -> Result<Fp, DecodeError> {
        if bytes[31] & 0x80 != 0 {
            return Err(DecodeError::HighBitSet);
        }
        let load8 = |b: &[u8]| -> u64 {
            (b[0] as u64)
                | (b[1] as u64) << 8
                | (b[2] as u64) << 16
                | (b[3] as u64) << 24
                | (b[4] as u64) << 32
                | (b[5] as u64) << 40
                | (b[6] as u64) << 48
                | (b[7] as u64) << 56
        };
        let low_bit_mask = (1u64 << 51) - 1;
        let limbs = [
            load8(&bytes[0..8]) & low_bit_mask,
            (load8(&bytes[6..14]) >> 3) & low_bit_mask,
            (load8(&bytes[12..20]) >> 6) & low_bit_mask,
            (load8(&bytes[19..27]) >> 1) & low_bit_mask,
            (load8(&bytes[24..32]) >> 12) & low_bit_mask,
        ];
        let fe = Fp(limbs);
        let canonical = fe.to_canonical();
        if canonical != limbs {
            return Err(DecodeError::NotCanonical);
        }
        Ok(fe)
    }

    fn from_bytes_raw(bytes: &[u8; 32]) -> Fp {
        Fp::from_bytes_raw(bytes)
    }

    fn to_bytes(&self) -> [u8; 32] {
        let limbs = self.to_canonical();
        let mut out = [0u8; 32];
        out[0] = limbs[0] as u8;
        out[1] = (limbs[0] >> 8) as u8;
        out[2] = (limbs[0] >> 16) as u8;
        out[3] = (limbs[0] >> 24) as u8;
        out[4] = (limbs[0] >> 32) as u8;
        out[5] = (limbs[0] >> 40) as u8;
        out[6] = ((limbs[0] >> 48) | (limbs[1] << 3)) as u8;
        out[7] = (limbs[1] >> 5) as u8;
        out[8] = (limbs[1] >> 13) as u8;
        out[9] = (limbs[1] >> 21) as u8;
        out[10] = (limbs[1] >> 29) as u8;
        out[11] = (limbs[1] >> 37) as u8;
        out[12] = ((limbs[1] >> 45) | (limbs[2] << 6)) as u8;
        out[13] = (limbs[2] >> 2) as u8;
        out[14] = (limbs[2] >> 10) as u8;
        out[15] = (limbs[2] >> 18) as u8;
        out[16] = (limbs[2] >> 26) as u8;
        out[17] = (limbs[2] >> 34) as u8;
        out[18] = (limbs[2] >> 42) as u8;
        out[19] = ((limbs[2] >> 50) | (limbs[3] << 1)) as u8;
        out[20] = (limbs[3] >> 7) as u8;
        out[21] = (limbs[3] >> 15) as u8;
        out[22] = (limbs[3] >> 23) as u8;
        out[23] = (limbs[3] >> 31) as u8;
        out[24] = (limbs[3] >> 39) as u8;
        out[25] = ((limbs[3] >> 47) | (limbs[4] << 4)) as u8;
        out[26] = (limbs[4] >> 4) as u8;
        out[27] = (limbs[4] >> 12) as u8;
        out[28] = (limbs[4] >> 20) as u8;
        out[29] = (limbs[4] >> 28) as u8;
        out[30] = (limbs[4] >> 36) as u8;
        out[31] = (limbs[4] >> 44) as u8;
        out
    }
}

/// `sqrt(-1) mod p`, needed by [`Fp::sqrt`]'s `p ≡ 5 (mod 8)` case split.
///
/// `(p-1)/4 = 2^253 - 5 = 2*(2^252 - 3) + 1`, and `pow22523` already
/// computes the `2^252 - 3` exponent, so `2^((p-1)/4) = (2^(2^252-3))^2 * 2`
/// falls out of machinery this module already has instead of a second
/// hand-written addition chain.
fn sqrt_minus_one() -> Fp {
    let two = Fp::from_u64(2);
    two.pow22523().square() * two
}

impl PartialEq for Fp {
    fn eq(&self, other: &Fp) -> bool {
        self.ct_eq(other)
    }
}
impl Eq for Fp {}

impl Add for Fp {
    type Output = Fp;
    fn add(self, rhs: Fp) -> Fp {
        // Carry-propagate immediately (rather than leaving the sum
        // loose) so every value flowing out of `Add`/`Sub` stays small
        // enough that `Mul`'s u128 products can never overflow, however
        // long a chain of additions preceded the multiply.
        Fp::reduce([
            self.0[0] as u128 + rhs.0[0] as u128,
            self.0[1] as u128 + rhs.0[1] as u128,
            self.0[2] as u128 + rhs.0[2] as u128,
            self.0[3] as u128 + rhs.0[3] as u128,
            self.0[4] as u128 + rhs.0[4] as u128,
        ])
    }
}

impl Sub for Fp {
    type Output = Fp;
    fn sub(self, rhs: Fp) -> Fp {
        // Limb decomposition is linear in the limbs, so scaling every
        // limb of p by the same constant scales the represented value
        // by that constant exactly (no carry needed). Adding 16*p before
        // subtracting keeps every limb non-negative for any pair of
        // loose operands while leaving the value unchanged mod p.
        const SIXTEEN_P: [u64; 5] = [
            36028797018963664,
            36028797018963952,
            36028797018963952,
            36028797018963952,
            36028797018963952,
        ];
        Fp::reduce([
            self.0[0] as u128 + SIXTEEN_P[0] as u128 - rhs.0[0] as u128,
            self.0[1] as u128 + SIXTEEN_P[1] as u128 - rhs.0[1] as u128,
            self.0[2] as u128 + SIXTEEN_P[2] as u128 - rhs.0[2] as u128,
            self.0[3] as u128 + SIXTEEN_P[3] as u128 - rhs.0[3] as u128,
            self.0[4] as u128 + SIXTEEN_P[4] as u128 - rhs.0[4] as u128,
        ])
    }
}

impl Neg for Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        Fp::ZERO - self
    }
}

impl Mul for Fp {
    type Output = Fp;
    fn mul(self, rhs: Fp) -> Fp {
        let a = self.0;
        let b = rhs.0;
        let m = |x: u64, y: u64| (x as u128) * (y as u128);

        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[1], b4_19) + m(a[2], b3_19) + m(a[3], b2_19) + m(a[4], b1_19);
        let c1 = m(a[0], b[1]) + m(a[1], b[0]) + m(a[2], b4_19) + m(a[3], b3_19) + m(a[4], b2_19);
        let c2 = m(a[0], b[2]) + m(a[1], b[1]) + m(a[2], b[0]) + m(a[3], b4_19) + m(a[4], b3_19);
        let c3 = m(a[0], b[3]) + m(a[1], b[2]) + m(a[2], b[1]) + m(a[3], b[0]) + m(a[4], b4_19);
        let c4 = m(a[0], b[4]) + m(a[1], b[3]) + m(a[2], b[2]) + m(a[3], b[1]) + m(a[4], b[0]);

        Fp::reduce([c0, c1, c2, c3, c4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_additive_identity() {
        let x = Fp::from_u64(12345);
        assert_eq!(x + Fp::ZERO, x);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let x = Fp::from_u64(12345);
        assert_eq!(x * Fp::ONE, x);
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = Fp::from_u64(987654321);
        let b = Fp::from_u64(123456789);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn negation_cancels() {
        let a = Fp::from_u64(42);
        assert_eq!(a + (-a), Fp::ZERO);
    }

    #[test]
    fn invert_roundtrip() {
        let a = Fp::from_u64(999331);
        let inv = a.invert().expect("nonzero has inverse");
        assert_eq!(a * inv, Fp::ONE);
    }

    #[test]
    fn zero_has_no_inverse() {
        assert!(Fp::ZERO.invert().is_none());
    }

    #[test]
    fn sqrt_of_square_is_a_root() {
        let a = Fp::from_u64(7);
        let sq = a.square();
        let root = sq.sqrt().expect("a perfect square has a root");
        assert_eq!(root.square(), sq);
    }

    #[test]
    fn bytes_roundtrip() {
        let a = Fp::from_u64(0xdead_beef_1234);
        let bytes = a.to_bytes();
        let back = Fp::from_bytes(&bytes).expect("canonical encoding");
        assert_eq!(a, back);
    }

    #[test]
    fn high_bit_set_is_rejected() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x80;
        assert_eq!(Fp::from_bytes(&bytes), Err(DecodeError::HighBitSet));
    }
}
