//! Straus's algorithm (spec §4.6, 2 <= n <= 32): interleave all n
//! per-point wNAFs and share one running doubling across every point,
//! generalizing the teacher's `ge.rs::ge_double_scalarmult_vartime`
//! (which interleaves exactly two wNAFs — one against an arbitrary point,
//! one against the fixed basepoint table) from n = 2 to arbitrary n.

use crate::curve::scalarmul::{odd_multiples_vartime, wnaf};
use crate::curve::Jacobian;
use crate::field::Field;

/// Window width for Straus's per-point odd-multiples tables. Matches
/// [`crate::curve::scalarmul`]'s single-scalar vartime window: the same
/// table shape, just built once per point instead of once overall.
const STRAUS_WINDOW: usize = 5;

pub fn msm_straus<F: Field>(scalars: &[[u8; 32]], points: &[Jacobian<F>]) -> Jacobian<F> {
    let n = points.len();
    let digits: Vec<Vec<i32>> = scalars
        .iter()
        .map(|s| wnaf(s, STRAUS_WINDOW))
        .collect();
    let tables: Vec<Vec<Jacobian<F>>> = points
        .iter()
        .map(|p| odd_multiples_vartime(p, 1 << (STRAUS_WINDOW - 2)))
        .collect();

    let mut acc = Jacobian::identity();
    for bit in (0..256).rev() {
        acc = acc.dbl();
        for i in 0..n {
            let digit = digits[i][bit];
            if digit > 0 {
                acc = acc + tables[i][(digit as usize) / 2];
            } else if digit < 0 {
                acc = acc + tables[i][((-digit) as usize) / 2].neg();
            }
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::rhs;
    use crate::field::fp::Fp;

    const B: Fp = Fp::from_limbs([7, 0, 0, 0, 0]);

    fn generator() -> Jacobian<Fp> {
        let mut x = Fp::from_u64(1);
        loop {
            let t = rhs(x, B);
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
    fn straus_matches_repeated_scalar_mul() {
        let g = generator();
        let h = g.dbl() + g;
        let k = h.dbl();
        let scalars = [scalar_bytes(3), scalar_bytes(11), scalar_bytes(200)];
        let points = [g, h, k];
        let via_straus = msm_straus(&scalars, &points);

        let mut expected = Jacobian::identity();
        for (s, p) in scalars.iter().zip(points.iter()) {
            expected = expected + crate::curve::scalarmul::scalar_mul_vartime(s, p);
        }
        assert_eq!(via_straus, expected);
    }

    #[test]
    fn straus_of_two_zero_scalars_is_identity() {
        let g = generator();
        let h = g.dbl();
        let scalars = [scalar_bytes(0), scalar_bytes(0)];
        let points = [g, h];
        assert!(msm_straus(&scalars, &points).is_identity());
    }
}
