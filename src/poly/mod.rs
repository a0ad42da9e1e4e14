//! Polynomial arithmetic over `F_p`/`F_q` (spec §4.8-4.9): coefficient
//! vectors low-degree first, schoolbook/Karatsuba/ECFFT multiplication
//! selected by operand size, long division, and Lagrange interpolation.
//! No teacher equivalent exists (Ed25519 signing has no polynomial
//! layer); generic over [`ecfft::EcfftField`] the same way [`crate::curve`]
//! is generic over [`Field`], so both curves' fields share one
//! implementation.

pub mod ecfft;

use crate::field::Field;
use ecfft::EcfftField;

/// Below this length (both operands), multiply by schoolbook (spec §4.8).
const K_SCHOOLBOOK: usize = 32;
/// At or above this length (both operands), attempt ECFFT if a context is
/// initialized for the field (spec §4.8/§4.9); otherwise Karatsuba.
const K_ECFFT: usize = 1024;

/// A polynomial over `F`: coefficients low-degree first. The invariant
/// `coeffs.last() != ZERO` unless `coeffs == [ZERO]` (the zero
/// polynomial) is re-established by every constructor and operation
/// (spec §3.3's trailing-zero-trimming contract).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<F: EcfftField> {
    pub(crate) coeffs: Vec<F>,
}

fn trim<F: EcfftField>(mut coeffs: Vec<F>) -> Vec<F> {
    if coeffs.is_empty() {
        return vec![F::ZERO];
    }
    while coeffs.len() > 1 && coeffs.last().unwrap().is_zero() {
        coeffs.pop();
    }
    coeffs
}

impl<F: EcfftField> Polynomial<F> {
    pub fn zero() -> Polynomial<F> {
        Polynomial {
            coeffs: vec![F::ZERO],
        }
    }

    pub fn from_coefficients(coeffs: Vec<F>) -> Polynomial<F> {
        Polynomial {
            coeffs: trim(coeffs),
        }
    }

    /// `prod (x - roots[i])` (spec §4.8).
    pub fn from_roots(roots: &[F]) -> Polynomial<F> {
        let mut result = Polynomial::from_coefficients(vec![F::ONE]);
        for r in roots {
            let linear = Polynomial::from_coefficients(vec![-*r, F::ONE]);
            result = result.mul(&linear);
        }
        result
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// `len - 1`; the zero polynomial has degree 0 (length 1), matching
    /// spec §3.3's length convention.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coeffs
    }

    /// Horner evaluation (spec §4.8).
    pub fn eval(&self, x: F) -> F {
        let mut acc = F::ZERO;
        for c in self.coeffs.iter().rev() {
            acc = acc * x + *c;
        }
        acc
    }

    pub fn scale(&self, c: F) -> Polynomial<F> {
        Polynomial::from_coefficients(self.coeffs.iter().map(|v| *v * c).collect())
    }

    pub fn neg(&self) -> Polynomial<F> {
        Polynomial::from_coefficients(self.coeffs.iter().map(|v| -*v).collect())
    }

    pub fn add(&self, other: &Polynomial<F>) -> Polynomial<F> {
        let n = self.coeffs.len().max(other.coeffs.len());
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let a = self.coeffs.get(i).copied().unwrap_or(F::ZERO);
            let b = other.coeffs.get(i).copied().unwrap_or(F::ZERO);
            out.push(a + b);
        }
        Polynomial::from_coefficients(out)
    }

    pub fn sub(&self, other: &Polynomial<F>) -> Polynomial<F> {
        self.add(&other.neg())
    }

    /// Multiplication strategy (spec §4.8): schoolbook below
    /// [`K_SCHOOLBOOK`] or on mismatched operand lengths, Karatsuba
    /// between [`K_SCHOOLBOOK`] and [`K_ECFFT`], ECFFT at or above
    /// [`K_ECFFT`] when a context is initialized for `F` (falling
    /// through to Karatsuba otherwise).
    pub fn mul(&self, other: &Polynomial<F>) -> Polynomial<F> {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        if n != m || n < K_SCHOOLBOOK {
            return mul_schoolbook(&self.coeffs, &other.coeffs);
        }
        if n >= K_ECFFT {
            if let Some(product) = ecfft::try_multiply(self, other) {
                return product;
            }
        }
        Polynomial::from_coefficients(mul_karatsuba(&self.coeffs, &other.coeffs))
    }

    /// Synthetic (linear) division by `(x - root)` (spec §4.8's
    /// interpolate step): the quotient only, since [`Polynomial::interpolate`]
    /// only ever divides the vanishing polynomial by one of its own
    /// roots, where the remainder is always zero.
    fn synthetic_divide_linear(&self, root: F) -> Polynomial<F> {
        let n = self.coeffs.len();
        if n <= 1 {
            return Polynomial::zero();
        }
        let mut quotient = vec![F::ZERO; n - 1];
        quotient[n - 2] = self.coeffs[n - 1];
        for idx in (1..n - 1).rev() {
            quotient[idx - 1] = self.coeffs[idx] + quotient[idx] * root;
        }
        Polynomial::from_coefficients(quotient)
    }

    /// Long division with remainder (spec §4.8): `self = quotient *
    /// divisor + remainder`, `deg(remainder) < deg(divisor)`. Dividing by
    /// the zero polynomial is a caller contract violation (spec §9):
    /// `debug_assert!`s in debug builds, and in release returns an empty
    /// quotient with `self` as the remainder (DESIGN.md's Open Question
    /// decision).
    pub fn divmod(&self, divisor: &Polynomial<F>) -> (Polynomial<F>, Polynomial<F>) {
        debug_assert!(
            !divisor.is_zero(),
            "divmod by the zero polynomial is a caller contract violation"
        );
        if divisor.is_zero() {
            return (Polynomial::zero(), self.clone());
        }
        let n = self.degree();
        let m = divisor.degree();
        if self.is_zero() || n < m {
            return (Polynomial::zero(), self.clone());
        }
        let lead_inv = divisor.coeffs[m]
            .invert()
            .expect("divisor's leading coefficient is non-zero by precondition");
        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![F::ZERO; n - m + 1];
        for i in (0..=n - m).rev() {
            let coeff = remainder[m + i] * lead_inv;
            quotient[i] = coeff;
            if !coeff.is_zero() {
                for (j, dc) in divisor.coeffs.iter().enumerate() {
                    remainder[i + j] = remainder[i + j] - coeff * *dc;
                }
            }
        }
        let remainder = Polynomial::from_coefficients(remainder[..m].to_vec());
        (Polynomial::from_coefficients(quotient), remainder)
    }

    /// Lagrange interpolation through `n` distinct-x points (spec §4.8):
    /// builds the vanishing polynomial `v(x) = prod (x - x_i)`, divides it
    /// by each `(x - x_i)` via synthetic division to get `L_i`, batch-
    /// inverts the barycentric weights `w_i = prod_{j!=i} (x_i - x_j)` in
    /// one shot, and accumulates `Sigma (y_i / w_i) * L_i`.
    pub fn interpolate(points: &[(F, F)]) -> Polynomial<F> {
        let n = points.len();
        if n == 0 {
            return Polynomial::zero();
        }
        let xs: Vec<F> = points.iter().map(|p| p.0).collect();
        let vanishing = Polynomial::from_roots(&xs);

        let mut weights = Vec::with_capacity(n);
        for i in 0..n {
            let mut w = F::ONE;
            for j in 0..n {
                if j != i {
                    w = w * (xs[i] - xs[j]);
                }
            }
            weights.push(w);
        }
        let inv_weights = batch_invert(&weights);

        let mut acc = Polynomial::zero();
        for i in 0..n {
            let l_i = vanishing.synthetic_divide_linear(xs[i]);
            let coeff = points[i].1 * inv_weights[i];
            acc = acc.add(&l_i.scale(coeff));
        }
        acc
    }
}

/// `O(n*m)` schoolbook multiplication (spec §4.8): produces exact length
/// `deg(a) + deg(b) + 1` regardless of trailing zeros in the inputs.
fn mul_schoolbook<F: EcfftField>(a: &[F], b: &[F]) -> Polynomial<F> {
    let mut out = vec![F::ZERO; a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            out[i + j] = out[i + j] + *ai * *bj;
        }
    }
    Polynomial::from_coefficients(out)
}

fn coeff_at<F: EcfftField>(a: &[F], i: usize) -> F {
    if i < a.len() {
        a[i]
    } else {
        F::ZERO
    }
}

fn add_slices<F: EcfftField>(a: &[F], b: &[F]) -> Vec<F> {
    let n = a.len().max(b.len());
    (0..n).map(|i| coeff_at(a, i) + coeff_at(b, i)).collect()
}

fn sub_slices<F: EcfftField>(a: &[F], b: &[F]) -> Vec<F> {
    let n = a.len().max(b.len());
    (0..n).map(|i| coeff_at(a, i) - coeff_at(b, i)).collect()
}

/// Karatsuba recursion (spec §4.8): splits each operand at `n/2`
/// (conceptually; no zero-padding is allocated, the high half is simply
/// shorter when an operand is odd-length or the two operands differ in
/// length), computes three half-size products, and recombines.
fn mul_karatsuba<F: EcfftField>(a: &[F], b: &[F]) -> Vec<F> {
    let n = a.len().max(b.len());
    if n < K_SCHOOLBOOK {
        return mul_schoolbook(a, b).coeffs;
    }
    let half = (n + 1) / 2;
    let a_lo = &a[..a.len().min(half)];
    let a_hi = if a.len() > half { &a[half..] } else { &[] };
    let b_lo = &b[..b.len().min(half)];
    let b_hi = if b.len() > half { &b[half..] } else { &[] };

    let lo = mul_karatsuba(a_lo, b_lo);
    let hi = mul_karatsuba(a_hi, b_hi);
    let a_sum = add_slices(a_lo, a_hi);
    let b_sum = add_slices(b_lo, b_hi);
    let mid_full = mul_karatsuba(&a_sum, &b_sum);
    let mid = sub_slices(&sub_slices(&mid_full, &lo), &hi);

    let out_len = a.len() + b.len() - 1;
    let mut out = vec![F::ZERO; out_len];
    for (i, v) in lo.iter().enumerate() {
        out[i] = out[i] + *v;
    }
    for (i, v) in mid.iter().enumerate() {
        if half + i < out_len {
            out[half + i] = out[half + i] + *v;
        }
    }
    for (i, v) in hi.iter().enumerate() {
        if 2 * half + i < out_len {
            out[2 * half + i] = out[2 * half + i] + *v;
        }
    }
    out
}

/// Montgomery's batch-inversion trick (same shape as
/// [`crate::curve::Jacobian::batch_to_affine`]): one inversion shared
/// across all of `values` instead of `n` separate ones.
pub(crate) fn batch_invert<F: Field>(values: &[F]) -> Vec<F> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }
    let mut prefix = vec![F::ONE; n];
    let mut acc = F::ONE;
    for (i, v) in values.iter().enumerate() {
        prefix[i] = acc;
        acc = acc * *v;
    }
    let mut acc_inv = acc
        .invert()
        .expect("interpolate requires distinct x_i, so every barycentric weight is non-zero");
    let mut out = vec![F::ZERO; n];
    for i in (0..n).rev() {
        out[i] = acc_inv * prefix[i];
        acc_inv = acc_inv * values[i];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fp::Fp;

    fn p(vals: &[u64]) -> Polynomial<Fp> {
        Polynomial::from_coefficients(vals.iter().map(|v| Fp::from_u64(*v)).collect())
    }

    #[test]
    fn zero_polynomial_has_length_one() {
        let z = Polynomial::<Fp>::from_coefficients(vec![Fp::ZERO, Fp::ZERO, Fp::ZERO]);
        assert_eq!(z.coefficients().len(), 1);
        assert!(z.is_zero());
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        let poly = p(&[1, 2, 0, 0]);
        assert_eq!(poly.degree(), 1);
    }

    #[test]
    fn eval_matches_direct_computation() {
        // 1 + 2x + 3x^2 at x=5 -> 1 + 10 + 75 = 86
        let poly = p(&[1, 2, 3]);
        assert_eq!(poly.eval(Fp::from_u64(5)), Fp::from_u64(86));
    }

    #[test]
    fn add_and_sub_are_inverses() {
        let a = p(&[1, 2, 3]);
        let b = p(&[4, 5]);
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn mul_matches_eval_homomorphism() {
        let a = p(&[1, 2, 3]);
        let b = p(&[4, 5, 6, 7]);
        let product = a.mul(&b);
        let x = Fp::from_u64(11);
        assert_eq!(product.eval(x), a.eval(x) * b.eval(x));
        assert_eq!(product.degree(), a.degree() + b.degree());
    }

    #[test]
    fn karatsuba_matches_schoolbook_on_larger_operands() {
        let a_coeffs: Vec<Fp> = (0..40u64).map(Fp::from_u64).collect();
        let b_coeffs: Vec<Fp> = (0..40u64).map(|v| Fp::from_u64(v + 1)).collect();
        let a = Polynomial::from_coefficients(a_coeffs.clone());
        let b = Polynomial::from_coefficients(b_coeffs.clone());
        let via_karatsuba = a.mul(&b);
        let via_schoolbook = mul_schoolbook(&a_coeffs, &b_coeffs);
        assert_eq!(via_karatsuba, via_schoolbook);
    }

    #[test]
    fn karatsuba_handles_mismatched_lengths() {
        let a_coeffs: Vec<Fp> = (1..=50u64).map(Fp::from_u64).collect();
        let b_coeffs: Vec<Fp> = (1..=33u64).map(Fp::from_u64).collect();
        let a = Polynomial::from_coefficients(a_coeffs);
        let b = Polynomial::from_coefficients(b_coeffs);
        let product = a.mul(&b);
        let x = Fp::from_u64(9);
        assert_eq!(product.eval(x), a.eval(x) * b.eval(x));
        assert_eq!(product.degree(), a.degree() + b.degree());
    }

    #[test]
    fn divmod_reconstructs_dividend() {
        let a = p(&[6, 11, 6, 1]); // (x+1)(x+2)(x+3)
        let b = p(&[1, 1]); // x+1
        let (q, r) = a.divmod(&b);
        assert!(r.is_zero());
        assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn divmod_with_nonzero_remainder() {
        let a = p(&[7, 2, 3]); // 3x^2 + 2x + 7
        let b = p(&[1, 1]); // x + 1
        let (q, r) = a.divmod(&b);
        assert!(r.degree() < b.degree() || r.is_zero());
        assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn from_roots_vanishes_at_each_root() {
        let roots = [Fp::from_u64(2), Fp::from_u64(5), Fp::from_u64(9)];
        let poly = Polynomial::from_roots(&roots);
        for r in roots {
            assert!(poly.eval(r).is_zero());
        }
        assert_eq!(poly.degree(), roots.len());
    }

    #[test]
    fn interpolate_passes_through_points() {
        let points = [
            (Fp::from_u64(1), Fp::from_u64(2)),
            (Fp::from_u64(2), Fp::from_u64(5)),
            (Fp::from_u64(3), Fp::from_u64(10)),
            (Fp::from_u64(4), Fp::from_u64(17)),
        ];
        let poly = Polynomial::interpolate(&points);
        for (x, y) in points {
            assert_eq!(poly.eval(x), y);
        }
    }

    #[test]
    fn synthetic_divide_linear_matches_divmod() {
        let a = p(&[1, 2, 3, 4]);
        let root = Fp::from_u64(7);
        let divisor = Polynomial::from_coefficients(vec![-root, Fp::ONE]);
        let (q, _) = a.divmod(&divisor);
        assert_eq!(a.synthetic_divide_linear(root), q);
    }
}
