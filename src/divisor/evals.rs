//! Large-`n` evaluation-domain representation of divisors (spec §4.10),
//! grounded on `examples/original_source/ec-divisors/include/divisor_eval.h`'s
//! `fp_evals`/`fq_evals` and `helios_eval_divisor`/`selene_eval_divisor`
//! structures. That header's matching `.cpp` (`divisor_eval.h`'s sibling
//! under `ec-divisors/src/divisor.cpp`) was only partially retrievable —
//! its direct-construction half matches `Divisor::from_points` exactly,
//! but the `_merge`'s degree-reducing algebraic shortcut (the one that
//! lets two sub-divisors combine in less than a full re-interpolation,
//! using the partial point-sums as a correction term) isn't present in
//! the retrieved corpus in enough detail to reproduce safely. [`EvalDivisor::merge`]
//! here is therefore defined to return the exact same divisor a full
//! `Divisor::from_points` over the combined point set would (each
//! `EvalDivisor` keeps its point set around for this purpose) rather than
//! attempting that unverified shortcut — the same "keep the interface
//! contract, simplify what the corpus doesn't cover" call this crate
//! already made for [`crate::poly::ecfft`]'s coset.
//!
//! The header's `limbs[j][EVAL_DOMAIN_SIZE]` structure-of-arrays layout
//! is a SIMD-lane detail of the original C; the natural Rust shape for
//! "a polynomial's values at a fixed set of domain points" is an array of
//! field elements, so that's what [`Evals`] stores.

use std::sync::OnceLock;

use crate::curve::{Affine, Jacobian};
use crate::divisor::Divisor;
use crate::field::fp::Fp;
use crate::field::fq::Fq;
use crate::field::Field;
use crate::poly::ecfft::EcfftField;
use crate::poly::Polynomial;

/// Fixed domain size (`EVAL_DOMAIN_SIZE` in the header): large enough to
/// uniquely represent any divisor arising from a 256-bit scalar's
/// doubling chain (at most 256 points, so `a`/`b` have degree < 256).
pub const DOMAIN_SIZE: usize = 256;

/// Domain points start far away from the small integers (`1, 2, 3, ...`)
/// this crate's own tests use as curve-point x-coordinates, so a test's
/// synthetic curve points never accidentally collide with a domain
/// sample (which would make [`Evals::div_linear`] divide by zero).
const DOMAIN_OFFSET: u64 = 1 << 32;

static FP_EVAL_DOMAIN: OnceLock<[Fp; DOMAIN_SIZE]> = OnceLock::new();
static FQ_EVAL_DOMAIN: OnceLock<[Fq; DOMAIN_SIZE]> = OnceLock::new();

/// Fields the fixed evaluation domain is available for. Built lazily on
/// first use (unlike [`crate::poly::ecfft`]'s domain, nothing gates this
/// one behind an explicit `init`) since it costs only `DOMAIN_SIZE` field
/// elements and every divisor operation needs it.
pub trait EvalDomain: EcfftField {
    fn eval_domain() -> &'static [Self; DOMAIN_SIZE];
}

impl EvalDomain for Fp {
    fn eval_domain() -> &'static [Fp; DOMAIN_SIZE] {
        FP_EVAL_DOMAIN.get_or_init(|| std::array::from_fn(|i| Fp::from_u64(DOMAIN_OFFSET + i as u64)))
    }
}

impl EvalDomain for Fq {
    fn eval_domain() -> &'static [Fq; DOMAIN_SIZE] {
        FQ_EVAL_DOMAIN.get_or_init(|| std::array::from_fn(|i| Fq::from_u64(DOMAIN_OFFSET + i as u64)))
    }
}

/// A polynomial of degree `< DOMAIN_SIZE`, represented by its values at
/// the fixed domain points rather than by its coefficients (spec
/// §4.10's "evaluation-domain representation").
#[derive(Clone, Debug)]
pub struct Evals<F: EvalDomain> {
    pub(crate) samples: [F; DOMAIN_SIZE],
    pub(crate) degree: usize,
}

impl<F: EvalDomain> Evals<F> {
    /// The constant polynomial `c` (`fp_evals_from_constant` /
    /// `fq_evals_from_constant`).
    pub fn from_constant(c: F) -> Evals<F> {
        Evals {
            samples: [c; DOMAIN_SIZE],
            degree: 0,
        }
    }

    /// `f(x) = x - c` (`fp_evals_from_linear` / `fq_evals_from_linear`).
    pub fn from_linear(c: F) -> Evals<F> {
        let domain = F::eval_domain();
        Evals {
            samples: std::array::from_fn(|i| domain[i] - c),
            degree: 1,
        }
    }

    /// Pointwise product of the two sample arrays. The resulting
    /// logical degree is the sum of the operands' degrees; callers that
    /// exceed [`DOMAIN_SIZE`] get a degenerate (truncated) result, same
    /// as evaluating any too-high-degree polynomial at too few points.
    pub fn mul(&self, other: &Evals<F>) -> Evals<F> {
        debug_assert!(
            self.degree + other.degree < DOMAIN_SIZE,
            "Evals::mul result degree exceeds the fixed domain"
        );
        Evals {
            samples: std::array::from_fn(|i| self.samples[i] * other.samples[i]),
            degree: self.degree + other.degree,
        }
    }

    pub fn add(&self, other: &Evals<F>) -> Evals<F> {
        Evals {
            samples: std::array::from_fn(|i| self.samples[i] + other.samples[i]),
            degree: self.degree.max(other.degree),
        }
    }

    pub fn sub(&self, other: &Evals<F>) -> Evals<F> {
        Evals {
            samples: std::array::from_fn(|i| self.samples[i] - other.samples[i]),
            degree: self.degree.max(other.degree),
        }
    }

    /// `f / (x - c)` evaluated pointwise (`fp_evals_div_linear` /
    /// `fq_evals_div_linear`), via one batch inversion of `x_i - c`
    /// shared across every domain sample. Only valid when `f` actually
    /// vanishes at `c`, or when `c` is off the domain entirely — same
    /// contract as dividing a polynomial by a root that isn't one.
    pub fn div_linear(&self, c: F) -> Evals<F> {
        let domain = F::eval_domain();
        let diffs: Vec<F> = domain.iter().map(|x| *x - c).collect();
        let inv = crate::poly::batch_invert(&diffs);
        Evals {
            samples: std::array::from_fn(|i| self.samples[i] * inv[i]),
            degree: self.degree.saturating_sub(1),
        }
    }

    /// Interpolates back to coefficient form (`fp_evals_to_poly` /
    /// `fq_evals_to_poly`), using only as many domain samples as the
    /// tracked degree requires.
    pub fn to_poly(&self) -> Polynomial<F> {
        let domain = F::eval_domain();
        let n = (self.degree + 1).min(DOMAIN_SIZE);
        let points: Vec<(F, F)> = domain[..n]
            .iter()
            .zip(self.samples[..n].iter())
            .map(|(x, y)| (*x, *y))
            .collect();
        Polynomial::interpolate(&points)
    }

    pub(crate) fn from_polynomial(poly: &Polynomial<F>) -> Evals<F> {
        debug_assert!(poly.degree() < DOMAIN_SIZE, "polynomial too large for the fixed eval domain");
        let domain = F::eval_domain();
        Evals {
            samples: std::array::from_fn(|i| poly.eval(domain[i])),
            degree: poly.degree(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.degree == 0 && self.samples.iter().all(|s| s.is_zero())
    }
}

/// A divisor carried in evaluation-domain form, plus the affine point
/// set it was built from (kept so [`EvalDivisor::merge`] can recompute
/// exactly — see the module doc).
#[derive(Clone, Debug)]
pub struct EvalDivisor<F: EvalDomain> {
    pub(crate) a: Evals<F>,
    pub(crate) b: Evals<F>,
    pub(crate) points: Vec<(F, F)>,
}

impl<F: EvalDomain> EvalDivisor<F> {
    /// Seeds a degree-0 divisor for a single point `(x, y)`
    /// (`helios_eval_divisor_from_point` / `selene_eval_divisor_from_point`):
    /// `a = y^2`, `b = y`, so `a(x) - y*b(x) = y^2 - y*y = 0` at the point
    /// itself. [`EvalDivisor::tree_reduce`] starts from one of these per
    /// doubling-chain point.
    pub fn from_point(x: F, y: F) -> EvalDivisor<F> {
        EvalDivisor {
            a: Evals::from_constant(y.square()),
            b: Evals::from_constant(y),
            points: vec![(x, y)],
        }
    }

    /// Pointwise product of the `a` and `b` eval-arrays
    /// (`helios_eval_divisor_mul`'s literal "multiply both arrays
    /// pointwise" operation). This is a building block, not itself the
    /// combined-point-set divisor — see [`EvalDivisor::merge`] for that.
    pub fn mul(&self, other: &EvalDivisor<F>) -> EvalDivisor<F> {
        EvalDivisor {
            a: self.a.mul(&other.a),
            b: self.b.mul(&other.b),
            points: self.points.iter().chain(other.points.iter()).copied().collect(),
        }
    }

    /// The affine points this divisor was built from, summed via the
    /// curve group law (used to derive `sum1`/`sum2`/`sum_total` for
    /// [`EvalDivisor::merge`] without needing them passed in separately).
    pub fn sum_of_points(&self) -> Jacobian<F> {
        self.points.iter().fold(Jacobian::identity(), |acc, (x, y)| {
            acc + Jacobian::from_affine(Affine { x: *x, y: *y })
        })
    }

    /// Combines `self` (vanishing on point set `S1`, summing to `sum1`)
    /// and `other` (`S2`, `sum2`) into the divisor for `S1 union S2`.
    /// `sum_total` is checked (debug-only) against `sum1 + sum2`; per the
    /// module doc this recomputes the interpolation over the combined
    /// point set rather than using the header's unretrieved algebraic
    /// shortcut, so the three sums aren't load-bearing for correctness
    /// here, only for the consistency check.
    pub fn merge(
        &self,
        other: &EvalDivisor<F>,
        sum1: Jacobian<F>,
        sum2: Jacobian<F>,
        sum_total: Jacobian<F>,
    ) -> EvalDivisor<F> {
        debug_assert_eq!(sum1 + sum2, sum_total, "merge: sum1 + sum2 != sum_total");
        let points: Vec<(F, F)> = self.points.iter().chain(other.points.iter()).copied().collect();
        let divisor = Divisor::from_points(&points);
        EvalDivisor {
            a: Evals::from_polynomial(&divisor.a),
            b: Evals::from_polynomial(&divisor.b),
            points,
        }
    }

    /// Converts back to the coefficient-form [`Divisor`]
    /// (`helios_eval_divisor_to_divisor` / `selene_eval_divisor_to_divisor`).
    pub fn to_divisor(&self) -> Divisor<F> {
        Divisor {
            a: self.a.to_poly(),
            b: self.b.to_poly(),
        }
    }

    /// Balanced pairwise merge of `divisors` down to a single combined
    /// divisor (`helios_eval_divisor_tree_reduce` /
    /// `selene_eval_divisor_tree_reduce`). An odd entry at the end of a
    /// level carries forward unmerged to the next level.
    pub fn tree_reduce(divisors: &[EvalDivisor<F>]) -> EvalDivisor<F> {
        assert!(!divisors.is_empty(), "tree_reduce requires at least one divisor");
        let mut level: Vec<EvalDivisor<F>> = divisors.to_vec();
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut iter = level.into_iter();
            while let Some(d1) = iter.next() {
                match iter.next() {
                    Some(d2) => {
                        let sum1 = d1.sum_of_points();
                        let sum2 = d2.sum_of_points();
                        let sum_total = sum1 + sum2;
                        next.push(d1.merge(&d2, sum1, sum2, sum_total));
                    }
                    None => next.push(d1),
                }
            }
            level = next;
        }
        level.into_iter().next().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::rhs;
    use crate::field::fp::Fp;

    const B: Fp = Fp::from_limbs([7, 0, 0, 0, 0]);

    fn points(n: usize) -> Vec<(Fp, Fp)> {
        let mut out = Vec::with_capacity(n);
        let mut x = Fp::from_u64(1);
        while out.len() < n {
            if let Some(y) = rhs(x, B).sqrt() {
                out.push((x, y));
            }
            x = x + Fp::ONE;
        }
        out
    }

    #[test]
    fn from_point_round_trips_through_to_divisor() {
        let (x, y) = points(1)[0];
        let ed = EvalDivisor::from_point(x, y);
        let d = ed.to_divisor();
        assert!(d.evaluate(x, y).is_zero());
    }

    #[test]
    fn tree_reduce_of_single_leaf_is_that_leaf() {
        let (x, y) = points(1)[0];
        let ed = EvalDivisor::from_point(x, y);
        let reduced = EvalDivisor::tree_reduce(&[ed]);
        assert!(reduced.to_divisor().evaluate(x, y).is_zero());
    }

    #[test]
    fn tree_reduce_matches_direct_from_points() {
        let pts = points(5);
        let leaves: Vec<EvalDivisor<Fp>> = pts.iter().map(|(x, y)| EvalDivisor::from_point(*x, *y)).collect();
        let reduced = EvalDivisor::tree_reduce(&leaves).to_divisor();
        let direct = Divisor::from_points(&pts);
        assert_eq!(reduced, direct);
    }

    #[test]
    fn evals_from_linear_matches_polynomial_eval() {
        let c = Fp::from_u64(123);
        let lin = Evals::<Fp>::from_linear(c);
        let domain = Fp::eval_domain();
        assert_eq!(lin.samples[3], domain[3] - c);
    }

    #[test]
    fn div_linear_undoes_a_multiply_by_the_same_linear_factor() {
        let c = Fp::from_u64(55);
        let lin = Evals::<Fp>::from_linear(c);
        let other = Evals::<Fp>::from_constant(Fp::from_u64(9));
        let product = lin.mul(&other);
        let back = product.div_linear(c);
        for i in 0..DOMAIN_SIZE {
            assert_eq!(back.samples[i], other.samples[i]);
        }
    }

    #[test]
    fn evals_to_poly_matches_polynomial_interpolate() {
        let pts = points(4);
        let direct = Polynomial::interpolate(&pts.iter().map(|(x, y)| (*x, *y)).collect::<Vec<_>>());
        let evals = Evals::from_polynomial(&direct);
        let back = evals.to_poly();
        assert_eq!(back, direct);
    }
}
