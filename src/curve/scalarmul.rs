//! Scalar multiplication: constant-time fixed-window ladder
//! ([`scalar_mul_ct`]), variable-time sliding-window wNAF
//! ([`scalar_mul_vartime`]), and fixed-base table multiplication
//! ([`scalar_mul_fixed`]) — spec §4.5. Generic over [`Field`] so both
//! curves share one implementation, the same way
//! [`crate::curve::mod`]'s group law does.
//!
//! The wNAF recoding here is the generalization of the teacher's
//! `signatures/ed25519/scalar.rs::slide` (window <= 6, digits in
//! `[-15, 15]`) to an arbitrary odd window width, and
//! `ge.rs::ge_double_scalarmult_vartime`'s precomputed-odd-multiples
//! table shape generalizes to the [`crate::msm`] Straus backend built on
//! top of this module.

use crate::curve::Affine;
use crate::curve::Jacobian;
use crate::field::Field;

const CT_WINDOW: u32 = 4;

/// Constant-time fixed-window ladder (spec §4.5.1), window width 4.
/// Precomputes `{0*P, 1*P, ..., 15*P}`, then processes the scalar's 64
/// nibbles MSB to LSB: 4 doublings, then a constant-time linear scan
/// over the table selecting the entry for the current nibble (every
/// entry is touched and combined via [`Field::conditional_select`]
/// regardless of the nibble's value) added with [`Jacobian::ct_add`]
/// (itself branch-free over the identity/equal/opposite cases). Neither
/// the doublings, the table scan, nor the add depend on the scalar's
/// value or on whether an intermediate state is the identity — the
/// ladder runs for the same 64 iterations and touches the same 16
/// table slots regardless of `scalar_bytes`.
pub fn scalar_mul_ct<F: Field>(scalar_bytes: &[u8; 32], point: &Jacobian<F>) -> Jacobian<F> {
    let table = ct_table(point);
    let mut acc = Jacobian::identity();
    for byte_idx in (0..32).rev() {
        let byte = scalar_bytes[byte_idx];
        for nibble in [byte >> 4, byte & 0x0f] {
            for _ in 0..CT_WINDOW {
                acc = acc.dbl();
            }
            let selected = select_from_table(&table, nibble);
            acc = acc.ct_add(&selected);
        }
    }
    acc
}

/// `{0*P, 1*P, ..., 15*P}` in Jacobian coordinates, used by the ladder's
/// constant-time table scan.
fn ct_table<F: Field>(point: &Jacobian<F>) -> [Jacobian<F>; 16] {
    let mut table = [Jacobian::identity(); 16];
    table[1] = *point;
    for i in 2..16 {
        table[i] = table[i - 1].ct_add(point);
    }
    table
}

/// Constant-time select of `table[index]`: every entry is touched via
/// [`Field::conditional_select`] and only the matching one survives, so
/// the memory-access pattern doesn't depend on `index`.
fn select_from_table<F: Field>(table: &[Jacobian<F>; 16], index: u8) -> Jacobian<F> {
    let mut result = table[0];
    for (i, entry) in table.iter().enumerate() {
        let choice = crate::ct::equal_u32(i as u32, index as u32);
        result = Jacobian::conditional_select(&result, entry, choice);
    }
    result
}

/// Fixed-base scalar multiplication (spec §4.5.3): same constant-time
/// 4-bit-window ladder as [`scalar_mul_ct`], but consuming a
/// precomputed affine table (e.g. from
/// [`crate::curve::tables::fixed_base_precompute`] or the cached
/// generator tables) instead of building one from a fresh `Jacobian`.
///
/// `table` holds `{1*P, ..., 16*P}` (`table[i] = (i+1)*P`, the
/// convention [`crate::curve::tables::fixed_base_precompute`] produces),
/// while the ladder's digit scan needs `{0*P, ..., 15*P}` so that a
/// zero nibble selects the identity. Re-index here rather than changing
/// the precompute's convention: `jac_table[0] = identity`,
/// `jac_table[d] = table[d - 1]` for `d in 1..16`.
pub fn scalar_mul_fixed<F: Field>(scalar_bytes: &[u8; 32], table: &[Affine<F>; 16]) -> Jacobian<F> {
    let mut jac_table = [Jacobian::identity(); 16];
    for i in 1..16 {
        jac_table[i] = Jacobian::from_affine(table[i - 1]);
    }
    let mut acc = Jacobian::identity();
    for byte_idx in (0..32).rev() {
        let byte = scalar_bytes[byte_idx];
        for nibble in [byte >> 4, byte & 0x0f] {
            for _ in 0..CT_WINDOW {
                acc = acc.dbl();
            }
            let selected = select_from_table(&jac_table, nibble);
            acc = acc.ct_add(&selected);
        }
    }
    acc
}

/// Window used by the variable-time wNAF path (spec §4.5.2 default).
const VARTIME_WINDOW: usize = 5;

/// Signed non-adjacent-form recoding with window `w`: digits are in
/// `{0, +-1, +-3, ..., +-(2^(w-1)-1)}`, and at least one zero separates
/// any two non-zero digits. Returns one signed digit per bit position
/// (LSB first), matching the teacher's `Scalar::slide`'s per-bit-index
/// layout but generalized from its fixed window <= 6 to an explicit `w`.
pub(crate) fn wnaf(scalar_bytes: &[u8; 32], w: usize) -> Vec<i32> {
    let bit = |bits: &[u8; 32], i: i32| -> i32 {
        if i < 0 || i >= 256 {
            0
        } else {
            ((bits[(i / 8) as usize] >> (i % 8)) & 1) as i32
        }
    };
    let mut digits = vec![0i32; 256];
    // Work on a local copy we can "subtract" the recoded digit from, so
    // a non-zero digit's high bits are reflected back into the stream
    // exactly once.
    let mut bits: Vec<i32> = (0..256).map(|i| bit(scalar_bytes, i)).collect();
    let window_max = 1i32 << w;
    let half = window_max / 2;
    let mut i = 0usize;
    while i < 256 {
        if bits[i] != 0 {
            // Collect up to `w` bits starting at `i` into a little-endian
            // value `d`.
            let mut d = 0i32;
            for j in 0..w {
                if i + j < bits.len() {
                    d |= bits[i + j] << j;
                }
            }
            if d >= half {
                d -= window_max;
            }
            // Clear the consumed bits and propagate the borrow/carry
            // introduced by recentering `d` into [-half, half).
            let mut carry = -d;
            let mut k = i;
            while carry != 0 && k < bits.len() {
                carry += bits[k];
                bits[k] = carry & 1;
                carry >>= 1;
                k += 1;
            }
            digits[i] = d;
            i += w;
        } else {
            i += 1;
        }
    }
    digits
}

/// Variable-time sliding-window wNAF scalar multiplication (spec
/// §4.5.2). Branches on the scalar and the accumulator's state; only
/// for publicly-known scalars (MSM, verification — never secret keys or
/// blindings).
pub fn scalar_mul_vartime<F: Field>(scalar_bytes: &[u8; 32], point: &Jacobian<F>) -> Jacobian<F> {
    if point.is_identity() {
        return Jacobian::identity();
    }
    let digits = wnaf(scalar_bytes, VARTIME_WINDOW);
    let odd_table = odd_multiples_vartime(point, 1 << (VARTIME_WINDOW - 2));

    let mut acc = Jacobian::identity();
    for digit in digits.iter().rev() {
        acc = acc.dbl();
        if *digit > 0 {
            acc = acc + odd_table[(*digit as usize) / 2];
        } else if *digit < 0 {
            acc = acc + odd_table[((-*digit) as usize) / 2].neg();
        }
    }
    acc
}

/// `{1*P, 3*P, 5*P, ..., (2*count-1)*P}`, the odd-multiples table shared
/// by the wNAF scalar-mul and Straus MSM backends. Variable-time (plain
/// `Add`, not [`Jacobian::ct_add`]) since every caller here already
/// operates on public scalars.
pub(crate) fn odd_multiples_vartime<F: Field>(point: &Jacobian<F>, count: usize) -> Vec<Jacobian<F>> {
    let dbl = point.dbl();
    let mut table = Vec::with_capacity(count);
    table.push(*point);
    for i in 1..count {
        table.push(table[i - 1] + dbl);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fp::Fp;

    const B: Fp = Fp::from_limbs([7, 0, 0, 0, 0]);

    fn generator() -> Jacobian<Fp> {
        let mut x = Fp::from_u64(1);
        loop {
            let t = crate::curve::rhs(x, B);
            if let Some(y) = t.sqrt() {
                return Jacobian::from_affine(crate::curve::Affine { x, y });
            }
            x = x + Fp::ONE;
        }
    }

    fn scalar_bytes(v: u64) -> [u8; 32] {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&v.to_le_bytes());
        b
    }

    #[test]
    fn ct_and_vartime_agree_for_small_scalars() {
        let g = generator();
        for s in [0u64, 1, 2, 3, 7, 13, 255, 65535] {
            let ct = scalar_mul_ct(&scalar_bytes(s), &g);
            let vt = scalar_mul_vartime(&scalar_bytes(s), &g);
            assert_eq!(ct, vt, "mismatch for scalar {s}");
        }
    }

    #[test]
    fn scalar_mul_ct_of_zero_is_identity() {
        let g = generator();
        assert!(scalar_mul_ct(&scalar_bytes(0), &g).is_identity());
    }

    #[test]
    fn scalar_mul_of_one_is_point() {
        let g = generator();
        assert_eq!(scalar_mul_ct(&scalar_bytes(1), &g), g);
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let g = generator();
        let mut expected = Jacobian::identity();
        for _ in 0..9 {
            expected = expected + g;
        }
        assert_eq!(scalar_mul_vartime(&scalar_bytes(9), &g), expected);
    }

    #[test]
    fn fixed_base_matches_ct_ladder() {
        let g = generator();
        let table = crate::curve::tables::fixed_base_precompute(g);
        for s in [1u64, 2, 5, 16, 200] {
            let via_fixed = scalar_mul_fixed(&scalar_bytes(s), &table);
            let via_ct = scalar_mul_ct(&scalar_bytes(s), &g);
            assert_eq!(via_fixed, via_ct, "mismatch for scalar {s}");
        }
    }

    #[test]
    fn associativity_of_scalar_mul() {
        let g = generator();
        let three_times_seven = scalar_mul_vartime(&scalar_bytes(21), &g);
        let seven_g = scalar_mul_vartime(&scalar_bytes(7), &g);
        let three_of_seven_g = scalar_mul_vartime(&scalar_bytes(3), &seven_g);
        assert_eq!(three_times_seven, three_of_seven_g);
    }
}
