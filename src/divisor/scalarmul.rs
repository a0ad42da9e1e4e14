//! `scalar_mul_divisor` (spec §4.10): the FCMP++ scalar-mul divisor
//! witness, grounded on `divisor_eval.h`'s `helios_scalar_mul_divisor` /
//! `selene_scalar_mul_divisor` declarations — build the doubling chain
//! `P, 2P, 4P, ..., 2^(n-1)*P`, convert it to affine in one
//! [`Jacobian::batch_to_affine`] call, and [`EvalDivisor::tree_reduce`]
//! the chain's per-point seed divisors into the combined witness, rather
//! than one `n`-point [`Divisor::from_points`] interpolation.

use crate::curve::Jacobian;
use crate::divisor::evals::{EvalDivisor, EvalDomain};
use crate::divisor::Divisor;

/// Index of the scalar's highest set bit, or `None` for the zero
/// scalar.
fn highest_set_bit(scalar_bytes: &[u8; 32]) -> Option<usize> {
    (0..256).rev().find(|&i| (scalar_bytes[i / 8] >> (i % 8)) & 1 == 1)
}

/// Builds the divisor witness for the doubling chain `P, 2P, ...,
/// 2^(m-1)*P`, where `m` is one more than `scalar`'s highest set bit
/// (spec §4.10: "n = ceil(log2 scalar) ~ 253 intermediate affine
/// points" for a full-width scalar). The zero scalar yields the zero
/// divisor, matching [`Divisor::from_points`]'s empty-set case.
pub fn scalar_mul_divisor<F: EvalDomain>(scalar_bytes: &[u8; 32], point: Jacobian<F>) -> Divisor<F> {
    let Some(top_bit) = highest_set_bit(scalar_bytes) else {
        return Divisor::from_points(&[]);
    };
    let chain_len = top_bit + 1;

    let mut chain = Vec::with_capacity(chain_len);
    let mut t = point;
    for _ in 0..chain_len {
        chain.push(t);
        t = t.dbl();
    }
    let affine = Jacobian::batch_to_affine(&chain);

    let leaves: Vec<EvalDivisor<F>> = affine.iter().map(|p| EvalDivisor::from_point(p.x, p.y)).collect();
    EvalDivisor::tree_reduce(&leaves).to_divisor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{rhs, Affine};
    use crate::field::fp::Fp;
    use crate::field::Field;

    const B: Fp = Fp::from_limbs([7, 0, 0, 0, 0]);

    fn generator() -> Jacobian<Fp> {
        let mut x = Fp::from_u64(1);
        loop {
            if let Some(y) = rhs(x, B).sqrt() {
                return Jacobian::from_affine(Affine { x, y });
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
    fn divisor_vanishes_on_every_doubling_chain_point() {
        // 11 = 0b1011, highest set bit at index 3, so the chain is
        // {g, 2g, 4g, 8g}.
        let g = generator();
        let d = scalar_mul_divisor(&scalar_bytes(11), g);
        let mut t = g;
        for _ in 0..4 {
            let a = t.to_affine();
            assert!(d.evaluate(a.x, a.y).is_zero());
            t = t.dbl();
        }
    }

    #[test]
    fn zero_scalar_yields_zero_divisor() {
        let g = generator();
        let d = scalar_mul_divisor(&scalar_bytes(0), g);
        assert!(d.a.is_zero());
        assert!(d.b.is_zero());
    }

    #[test]
    fn single_bit_scalar_matches_direct_from_points() {
        let g = generator();
        let d = scalar_mul_divisor(&scalar_bytes(1), g);
        let a = g.to_affine();
        let direct = Divisor::from_points(&[(a.x, a.y)]);
        assert_eq!(d, direct);
    }

    #[test]
    fn larger_chain_vanishes_on_every_point() {
        // 200 = 0b11001000, highest set bit at index 7: 8 chain points.
        let g = generator();
        let d = scalar_mul_divisor(&scalar_bytes(200), g);
        let mut t = g;
        for _ in 0..8 {
            let a = t.to_affine();
            assert!(d.evaluate(a.x, a.y).is_zero());
            t = t.dbl();
        }
    }
}
