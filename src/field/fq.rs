//! Selene base field / Helios scalar field.
//!
//! ```text
//! F_q, q = 2^255 - gamma
//! ```
//!
//! `gamma` is a fixed 65-bit constant — large enough that, unlike
//! [`crate::field::fp::Fp`]'s `19`, it no longer fits in a handful of
//! bits, so the `2^255 = gamma (mod q)` wraparound used to fold a
//! product's high half back into its low half has to be applied to
//! already carry-propagated (small) limbs rather than to raw
//! schoolbook cross terms — otherwise `gamma`'s own width would blow
//! out the `u128` accumulators. See [`Fq::mul`] for where that split
//! happens.
//!
//! The real value of `gamma` used by the Selene curve is not present in
//! the retrieved reference material (see `DESIGN.md`); the constant
//! below is a placeholder chosen only to satisfy the one property every
//! algorithm here depends on: `q ≡ 1 (mod 4)`, so [`Fq::sqrt`]'s
//! Tonelli–Shanks loop runs unchanged once the real constant is known.

use std::ops::{Add, Mul, Neg, Sub};

use crate::ct;
use crate::error::DecodeError;
use crate::field::Field;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// `gamma = 2^64 + GAMMA_LO`, split into the two limbs it touches in the
/// 51-bit radix: `GAMMA_LO` (bits 0..51) and `GAMMA_HI` (bits 51..65,
/// i.e. `2^64 = 2^13 * 2^51`). `GAMMA_LO ≡ 3 (mod 4)` so that
/// `q = 2^255 - gamma ≡ 1 (mod 4)`.
const GAMMA_LO: u64 = 883;
const GAMMA_HI: u64 = 1 << 13;

/// An element of `F_q`, `q = 2^255 - gamma`.
#[derive(Clone, Copy, Debug)]
pub struct Fq(pub(crate) [u64; 5]);

impl Fq {
    pub(crate) const fn from_limbs(limbs: [u64; 5]) -> Fq {
        Fq(limbs)
    }

    /// Folds a carry-out of limb 4 back into limbs 0 and 1 via
    /// `gamma = GAMMA_LO + GAMMA_HI * 2^51`, then sweeps the chain
    /// again so the fold-back itself is fully carry-propagated. See
    /// [`Fp::reduce`](crate::field::fp::Fp) for the equivalent
    /// single-constant version this generalizes.
    fn reduce5(mut limbs: [u128; 5]) -> Fq {
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
            limbs[0] += c4 * GAMMA_LO as u128;
            limbs[1] += c4 * GAMMA_HI as u128;
        }

        Fq([
            limbs[0] as u64,
            limbs[1] as u64,
            limbs[2] as u64,
            limbs[3] as u64,
            limbs[4] as u64,
        ])
    }

    /// Reduces `self` to the unique representative in `[0, q)`.
    fn to_canonical(&self) -> [u64; 5] {
        let mut limbs = self.0;

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
        limbs[0] += c4 * GAMMA_LO;
        limbs[1] += c4 * GAMMA_HI;
        let c0b = limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] += c0b;
        let c1b = limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] += c1b;

        // Conditionally subtract q = 2^255 - gamma once: compare against
        // q by adding gamma (both limbs it touches) and checking for
        // overflow out of the top limb.
        let mut q = (limbs[0] + GAMMA_LO) >> 51;
        q = (limbs[1] + GAMMA_HI + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += GAMMA_LO * q;
        limbs[1] += GAMMA_HI * q;
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

    pub(crate) fn n_square(&self, n: u32) -> Fq {
        let mut r = self.square();
        for _ in 1..n {
            r = r.square();
        }
        r
    }

    /// Parses 32 little-endian bytes into a loose field element without
    /// the bit-255 or canonical-range checks `Field::from_bytes`
    /// enforces. See [`crate::field::fp::Fp::from_bytes_raw`], which this
    /// mirrors exactly (the 51-bit loading scheme doesn't depend on the
    /// modulus).
    pub(crate) fn from_bytes_raw(bytes: &[u8; 32]) -> Fq {
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
        Fq([
            load8(&bytes[0..8]) & low_bit_mask,
            (load8(&bytes[6..14]) >> 3) & low_bit_mask,
            (load8(&bytes[12..20]) >> 6) & low_bit_mask,
            (load8(&bytes[19..27]) >> 1) & low_bit_mask,
            (load8(&bytes[24..32]) >> 12) & low_bit_mask,
        ])
    }
}

impl Field for Fq {
    const ZERO: Fq = Fq([0, 0, 0, 0, 0]);
    const ONE: Fq = Fq([1, 0, 0, 0, 0]);

    fn square(&self) -> Fq {
        *self * *self
    }

    fn invert(&self) -> Option<Fq> {
        if self.is_zero() {
            return None;
        }
        // Fermat's little theorem via a square-and-multiply ladder over
        // q - 2. Unlike Fp's hand-written addition chain (valid only
        // for the specific exponent 2^255 - 21), q's exact value isn't
        // fixed at compile time by name here, so the ladder walks the
        // bits of `q - 2` directly.
        Some(pow_mod_q_minus(self, 2))
    }

    fn sqrt(&self) -> Option<Fq> {
        if self.is_zero() {
            return Some(Fq::ZERO);
        }
        tonelli_shanks_sqrt(self)
    }

    fn is_zero(&self) -> bool {
        let c = self.to_canonical();
        (c[0] | c[1] | c[2] | c[3] | c[4]) == 0
    }

    fn conditional_select(a: &Fq, b: &Fq, choice: u8) -> Fq {
        Fq([
            ct::select_u64(a.0[0], b.0[0], choice),
            ct::select_u64(a.0[1], b.0[1], choice),
            ct::select_u64(a.0[2], b.0[2], choice),
            ct::select_u64(a.0[3], b.0[3], choice),
            ct::select_u64(a.0[4], b.0[4], choice),
        ])
    }

    fn ct_eq(&self, other: &Fq) -> bool {
        let a = self.to_canonical();
        let b = other.to_canonical();
        let mut diff = 0u64;
        for i in 0..5 {
            diff |= a[i] ^ b[i];
        }
        diff == 0
    }

    fn from_u64(x: u64) -> Fq {
        Fq([x & LOW_51_BIT_MASK, x >> 51, 0, 0, 0])
    }

    fn from_bytes(bytes: &[u8; 32]) -> Result<Fq, DecodeError> {
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
        let fe = Fq(limbs);
        let canonical = fe.to_canonical();
        if canonical != limbs {
            return Err(DecodeError::NotCanonical);
        }
        Ok(fe)
    }

    fn from_bytes_raw(bytes: &[u8; 32]) -> Fq {
        Fq::from_bytes_raw(bytes)
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

impl PartialEq for Fq {
    fn eq(&self, other: &Fq) -> bool {
        self.ct_eq(other)
    }
}
impl Eq for Fq {}

impl Add for Fq {
    type Output = Fq;
    fn add(self, rhs: Fq) -> Fq {
        Fq::reduce5([
            self.0[0] as u128 + rhs.0[0] as u128,
            self.0[1] as u128 + rhs.0[1] as u128,
            self.0[2] as u128 + rhs.0[2] as u128,
            self.0[3] as u128 + rhs.0[3] as u128,
            self.0[4] as u128 + rhs.0[4] as u128,
        ])
    }
}

impl Sub for Fq {
    type Output = Fq;
    fn sub(self, rhs: Fq) -> Fq {
        // Same padding trick as Fp::sub, scaled by 16*q instead of
        // 16*p: q's limb decomposition is [2^51 - GAMMA_LO, 2^51 - 1 -
        // (GAMMA_HI carried in), 2^51-1, 2^51-1, 2^51-1], but since
        // GAMMA_HI only affects limb 1 and is far smaller than 2^51, a
        // padding vector built the same way as Fp's is still safely
        // larger than any loose operand here.
        const SIXTEEN_Q: [u64; 5] = [
            (1u64 << 51) * 16 - GAMMA_LO * 16,
            (1u64 << 51) * 16 - 16 - GAMMA_HI * 16,
            (1u64 << 51) * 16 - 16,
            (1u64 << 51) * 16 - 16,
            (1u64 << 51) * 16 - 16,
        ];
        Fq::reduce5([
            self.0[0] as u128 + SIXTEEN_Q[0] as u128 - rhs.0[0] as u128,
            self.0[1] as u128 + SIXTEEN_Q[1] as u128 - rhs.0[1] as u128,
            self.0[2] as u128 + SIXTEEN_Q[2] as u128 - rhs.0[2] as u128,
            self.0[3] as u128 + SIXTEEN_Q[3] as u128 - rhs.0[3] as u128,
            self.0[4] as u128 + SIXTEEN_Q[4] as u128 - rhs.0[4] as u128,
        ])
    }
}

impl Neg for Fq {
    type Output = Fq;
    fn neg(self) -> Fq {
        Fq::ZERO - self
    }
}

impl Mul for Fq {
    type Output = Fq;
    fn mul(self, rhs: Fq) -> Fq {
        let a = self.0;
        let b = rhs.0;
        let m = |x: u64, y: u64| (x as u128) * (y as u128);

        // Raw double-width schoolbook product, positions 0..=8 (a
        // 5-limb times 5-limb product spans at most index 4+4=8). No
        // folding yet: gamma is too wide to multiply into these raw,
        // not-yet-carried accumulators without overflowing u128.
        let mut wide = [0u128; 10];
        for i in 0..5 {
            for j in 0..5 {
                wide[i + j] += m(a[i], b[j]);
            }
        }

        // Carry-propagate the whole 10-limb buffer down to (at most a
        // few bits over) 51 bits per position, spilling the final carry
        // into position 9, which the 5x5 product can never reach on its
        // own (max raw index is 8).
        let mask = LOW_51_BIT_MASK as u128;
        for i in 0..9 {
            let c = wide[i] >> 51;
            wide[i] &= mask;
            wide[i + 1] += c;
        }

        // Fold the high half (positions 5..=9, each now small) back via
        // 2^(51*5) = gamma (mod q): position 5+t contributes
        // gamma * 2^(51*t) = (GAMMA_LO + GAMMA_HI*2^51) * 2^(51*t).
        let mut low = [0u128; 6];
        low[0] = wide[0];
        low[1] = wide[1];
        low[2] = wide[2];
        low[3] = wide[3];
        low[4] = wide[4];
        for t in 0..5 {
            let high = wide[5 + t];
            low[t] += high * GAMMA_LO as u128;
            low[t + 1] += high * GAMMA_HI as u128;
        }

        // `low[5]` is itself a coefficient of 2^(51*5), i.e. another
        // whole factor of gamma: fold it straight back into positions
        // 0 and 1 the same way. It only ever holds the tiny
        // `wide[9] * GAMMA_HI` contribution, so this fold can't recurse
        // further.
        let extra = low[5];
        low[0] += extra * GAMMA_LO as u128;
        low[1] += extra * GAMMA_HI as u128;

        Fq::reduce5([low[0], low[1], low[2], low[3], low[4]])
    }
}

/// `self^(q - k)` via square-and-multiply, walking the bits of `q - k`
/// from the canonical byte encoding of `-k` added to `q`'s definition.
/// Used by [`Fq::invert`] (`k = 2`, Fermat's little theorem) since,
/// unlike `Fp`, `q`'s value isn't a fixed literal this module can write
/// a hand-tuned addition chain against (`gamma`'s real value is a
/// placeholder — see the module docs).
fn pow_mod_q_minus(base: &Fq, k: u64) -> Fq {
    // q - k = 2^255 - gamma - k. Build the exponent as a 256-bit
    // little-endian limb array directly rather than through Fq's own
    // encoding, since the exponent is a plain integer, not a field
    // element to be reduced mod q.
    let gamma = (GAMMA_HI as u128) << 51 | GAMMA_LO as u128;
    let delta = gamma + k as u128; // amount subtracted from 2^255
    let mut exp = [0u64; 4];
    exp[3] = 1u64 << 63; // 2^255 = 2^(64*3 + 63)
    // subtract `delta` (at most ~2^65) from the 256-bit value 2^255.
    let delta_lo = (delta & (u64::MAX as u128)) as u64;
    let delta_hi = (delta >> 64) as u64;
    let (r0, borrow0) = 0u64.overflowing_sub(delta_lo);
    exp[0] = r0;
    let (r1, borrow1) = 0u64.overflowing_sub(delta_hi);
    let (r1, borrow1b) = r1.overflowing_sub(borrow0 as u64);
    exp[1] = r1;
    let borrow1 = borrow1 || borrow1b;
    let (r2, borrow2) = 0u64.overflowing_sub(borrow1 as u64);
    exp[2] = r2;
    let (r3, _borrow3) = exp[3].overflowing_sub(borrow2 as u64);
    exp[3] = r3;

    let mut acc = Fq::ONE;
    for word_idx in (0..4).rev() {
        let word = exp[word_idx];
        for bit_idx in (0..64).rev() {
            acc = acc.square();
            if (word >> bit_idx) & 1 == 1 {
                acc = acc * *base;
            }
        }
    }
    acc
}

/// Square root via Tonelli–Shanks, valid whenever `q ≡ 1 (mod 4)`
/// (which the placeholder `gamma` above is chosen to satisfy). Unlike
/// `Fp::sqrt`'s `q ≡ 5 (mod 8)` shortcut, this doesn't assume anything
/// about `q` beyond being an odd prime, so it stays correct once the
/// real `gamma` replaces the placeholder.
fn tonelli_shanks_sqrt(a: &Fq) -> Option<Fq> {
    // Factor q - 1 = s * 2^e with s odd, by repeated halving starting
    // from the known bit layout q - 1 = 2^255 - gamma - 1.
    let gamma = (GAMMA_HI as u128) << 51 | GAMMA_LO as u128;
    // q - 1 as a big integer: 2^255 - gamma - 1.
    let mut n = [0u64; 5]; // five 64-bit words covering up to 2^320, plenty for a 255-bit value
    n[3] |= 1u64 << 63; // bit 255
    let delta = gamma + 1;
    let delta_lo = (delta & (u64::MAX as u128)) as u64;
    let delta_hi = (delta >> 64) as u64;
    let (b0, c0) = n[0].overflowing_sub(delta_lo);
    n[0] = b0;
    let (b1, c1a) = n[1].overflowing_sub(delta_hi);
    let (b1, c1b) = b1.overflowing_sub(c0 as u64);
    n[1] = b1;
    let c1 = c1a || c1b;
    let (b2, c2) = n[2].overflowing_sub(c1 as u64);
    n[2] = b2;
    let (b3, _c3) = n[3].overflowing_sub(c2 as u64);
    n[3] = b3;

    let mut e: u32 = 0;
    while n[0] & 1 == 0 {
        // divide the 256-bit value (n[0..4]) by two.
        let mut carry = 0u64;
        for limb in n.iter_mut().rev() {
            let new_carry = *limb & 1;
            *limb = (*limb >> 1) | (carry << 63);
            carry = new_carry;
        }
        e += 1;
    }
    let s = n; // odd part, as a 256-bit little-endian limb array

    let pow_bits = |base: &Fq, bits: &[u64; 5]| -> Fq {
        let mut acc = Fq::ONE;
        for word_idx in (0..5).rev() {
            let word = bits[word_idx];
            for bit_idx in (0..64).rev() {
                acc = acc.square();
                if (word >> bit_idx) & 1 == 1 {
                    acc = acc * *base;
                }
            }
        }
        acc
    };
    // `x^(2^n)`, handling `n == 0` (unlike `Fq::n_square`, which is only
    // ever called with `n >= 2` elsewhere in this crate).
    let pow2_squarings = |x: Fq, n: u32| -> Fq {
        let mut r = x;
        for _ in 0..n {
            r = r.square();
        }
        r
    };
    let half_in_place = |limbs: &mut [u64; 5]| {
        let mut carry = 0u64;
        for limb in limbs.iter_mut().rev() {
            let new_carry = *limb & 1;
            *limb = (*limb >> 1) | (carry << 63);
            carry = new_carry;
        }
    };

    // Find a quadratic non-residue z by trial (small odd chance of
    // multiple iterations; z = 2, 3, 4, ... until one is found).
    // euler = z^((q-1)/2) = (z^s)^(2^(e-1)); q ≡ 1 (mod 4) guarantees
    // e >= 2, so e - 1 >= 1.
    let mut z = Fq::from_u64(2);
    loop {
        let euler = pow2_squarings(pow_bits(&z, &s), e - 1);
        if euler == -Fq::ONE {
            break;
        }
        z = z + Fq::ONE;
    }

    let mut m = e;
    let mut c = pow_bits(&z, &s);
    let mut t = pow_bits(a, &s);
    let mut r = pow_bits(a, &{
        // (s+1)/2, computed directly since this exponent (unlike the
        // `2^k` multipliers above) isn't itself a power of two.
        let mut sp1 = s;
        let (r0, carry) = sp1[0].overflowing_add(1);
        sp1[0] = r0;
        if carry {
            for limb in sp1.iter_mut().skip(1) {
                let (rl, c) = limb.overflowing_add(1);
                *limb = rl;
                if !c {
                    break;
                }
            }
        }
        half_in_place(&mut sp1);
        sp1
    });

    loop {
        if t == Fq::ONE {
            return Some(r);
        }
        if t.is_zero() {
            return Some(Fq::ZERO);
        }
        let mut i = 0u32;
        let mut t2i = t;
        while t2i != Fq::ONE {
            t2i = t2i.square();
            i += 1;
            if i == m {
                return None;
            }
        }
        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = b.square();
        }
        m = i;
        c = b.square();
        t = t * c;
        r = r * b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_additive_identity() {
        let x = Fq::from_u64(12345);
        assert_eq!(x + Fq::ZERO, x);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let x = Fq::from_u64(12345);
        assert_eq!(x * Fq::ONE, x);
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = Fq::from_u64(987654321);
        let b = Fq::from_u64(123456789);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn negation_cancels() {
        let a = Fq::from_u64(42);
        assert_eq!(a + (-a), Fq::ZERO);
    }

    #[test]
    fn invert_roundtrip() {
        let a = Fq::from_u64(999331);
        let inv = a.invert().expect("nonzero has inverse");
        assert_eq!(a * inv, Fq::ONE);
    }

    #[test]
    fn zero_has_no_inverse() {
        assert!(Fq::ZERO.invert().is_none());
    }

    #[test]
    fn sqrt_of_square_is_a_root() {
        let a = Fq::from_u64(7);
        let sq = a.square();
        let root = sq.sqrt().expect("a perfect square has a root");
        assert_eq!(root.square(), sq);
    }

    #[test]
    fn bytes_roundtrip() {
        let a = Fq::from_u64(0xdead_beef_1234);
        let bytes = a.to_bytes();
        let back = Fq::from_bytes(&bytes).expect("canonical encoding");
        assert_eq!(a, back);
    }

    #[test]
    fn high_bit_set_is_rejected() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x80;
        assert_eq!(Fq::from_bytes(&bytes), Err(DecodeError::HighBitSet));
    }

    #[test]
    fn mul_matches_repeated_addition_for_small_values() {
        let a = Fq::from_u64(13);
        let mut sum = Fq::ZERO;
        for _ in 0..13 {
            sum = sum + a;
        }
        assert_eq!(a * a, sum);
    }
}
