//! EC-divisor witnesses (spec §4.10): `D(x, y) = a(x) - y*b(x)` for a set
//! of affine points, built directly via Lagrange interpolation here, plus
//! (in [`evals`]) the large-n evaluation-domain representation that
//! enables tree-reduction, and (in [`scalarmul`]) the scalar-mul divisor
//! primitive built on top of it. Grounded on
//! `examples/original_source/src/divisor.cpp` and
//! `examples/original_source/ec-divisors/src/divisor.cpp`'s
//! `helios_compute_divisor`/`helios_evaluate_divisor` (the direct
//! construction, matched exactly by [`Divisor::from_points`]/`evaluate`
//! below) and `examples/original_source/ec-divisors/include/divisor_eval.h`'s
//! `fp_evals`/`fq_evals`/`helios_eval_divisor` declarations (the
//! evaluation-domain operation set — see [`evals`]'s module doc for how
//! far that grounding goes and where [`evals::EvalDivisor::merge`]
//! departs from it).

pub mod evals;
pub mod scalarmul;

use crate::field::Field;
use crate::poly::ecfft::EcfftField;
use crate::poly::Polynomial;

/// A divisor witness `D(x, y) = a(x) - y*b(x)` (spec §3.3/§4.10).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divisor<F: EcfftField> {
    pub a: Polynomial<F>,
    pub b: Polynomial<F>,
}

impl<F: EcfftField> Divisor<F> {
    /// Builds the divisor vanishing on `points` (distinct x-coordinates):
    /// `b` interpolates the y-coordinates, `a` interpolates the y^2
    /// values, so `D(x_i, y_i) = y_i^2 - y_i*y_i = 0` (spec §4.10). The
    /// degenerate `points = []` case returns the zero divisor, matching
    /// `helios_compute_divisor`'s `n == 0` branch.
    pub fn from_points(points: &[(F, F)]) -> Divisor<F> {
        if points.is_empty() {
            return Divisor {
                a: Polynomial::zero(),
                b: Polynomial::zero(),
            };
        }
        let ys: Vec<(F, F)> = points.iter().map(|(x, y)| (*x, *y)).collect();
        let y_squares: Vec<(F, F)> = points.iter().map(|(x, y)| (*x, y.square())).collect();
        Divisor {
            b: Polynomial::interpolate(&ys),
            a: Polynomial::interpolate(&y_squares),
        }
    }

    /// `a(x) - y*b(x)` via Horner on each polynomial (spec §4.10).
    pub fn evaluate(&self, x: F, y: F) -> F {
        self.a.eval(x) - y * self.b.eval(x)
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
    fn divisor_vanishes_on_its_own_point_set() {
        let pts = points(5);
        let d = Divisor::from_points(&pts);
        for (x, y) in pts {
            assert!(d.evaluate(x, y).is_zero());
        }
    }

    #[test]
    fn divisor_degree_is_bounded_by_n_minus_one() {
        let pts = points(4);
        let d = Divisor::from_points(&pts);
        assert!(d.a.degree() <= pts.len() - 1);
        assert!(d.b.degree() <= pts.len() - 1);
    }

    #[test]
    fn empty_point_set_is_the_zero_divisor() {
        let d = Divisor::<Fp>::from_points(&[]);
        assert!(d.a.is_zero());
        assert!(d.b.is_zero());
    }

    #[test]
    fn single_point_divisor_vanishes_only_via_the_y_relation() {
        let pts = points(1);
        let d = Divisor::from_points(&pts);
        assert!(d.evaluate(pts[0].0, pts[0].1).is_zero());
    }
}
