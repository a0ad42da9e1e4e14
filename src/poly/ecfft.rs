//! Optional ECFFT-gated polynomial multiplication (spec §4.9).
//!
//! The real construction evaluates/interpolates over a coset produced by
//! a curve-specific smooth-order isogeny chain; those isogeny parameters
//! for Helios/Selene are not present anywhere in the retrieved corpus
//! (the same situation as `b`, the generator, and gamma — see
//! DESIGN.md's Open Question notes). This module keeps the exact
//! interface contract spec §4.9 describes — `enter`, `exit`, a gated
//! multiply, and an exact round-trip identity on any polynomial of
//! degree less than the domain size — over a fixed, arbitrary evaluation
//! domain `{0, 1, ..., domain_size-1}` instead of a real isogeny-chain
//! coset, via direct multi-point evaluation and Lagrange interpolation.
//! Swapping in the real coset later only changes what [`build_domain`]
//! returns, not the gating contract callers rely on (explicit [`init`],
//! silent fallthrough to Karatsuba when uninitialized).

use std::sync::OnceLock;

use crate::field::fp::Fp;
use crate::field::fq::Fq;
use crate::field::Field;
use crate::poly::Polynomial;

/// Upper bound on the evaluation domain; multiplies needing a larger
/// domain than this always fall through to Karatsuba.
const DOMAIN_SIZE: usize = 4096;

static FP_DOMAIN: OnceLock<Vec<Fp>> = OnceLock::new();
static FQ_DOMAIN: OnceLock<Vec<Fq>> = OnceLock::new();

/// The field types ECFFT contexts exist for. Implemented only for `Fp`
/// and `Fq`, the two concrete fields this crate ever instantiates
/// [`Polynomial`] over.
pub trait EcfftField: Field {
    fn domain_slot() -> &'static OnceLock<Vec<Self>>;
}

impl EcfftField for Fp {
    fn domain_slot() -> &'static OnceLock<Vec<Fp>> {
        &FP_DOMAIN
    }
}

impl EcfftField for Fq {
    fn domain_slot() -> &'static OnceLock<Vec<Fq>> {
        &FQ_DOMAIN
    }
}

fn build_domain<F: Field>(size: usize) -> Vec<F> {
    let mut domain = Vec::with_capacity(size);
    let mut x = F::ZERO;
    for _ in 0..size {
        domain.push(x);
        x = x + F::ONE;
    }
    domain
}

/// Builds the evaluation-domain context for `F`, if it hasn't been built
/// yet. Expensive (allocates and fills [`DOMAIN_SIZE`] field elements);
/// per spec §4.9/§9 this is never called implicitly — only explicitly by
/// a caller that wants ECFFT multiplication available.
pub fn init<F: EcfftField>() {
    F::domain_slot().get_or_init(|| build_domain(DOMAIN_SIZE));
}

pub fn is_initialized<F: EcfftField>() -> bool {
    F::domain_slot().get().is_some()
}

fn next_pow2_capped(n: usize) -> Option<usize> {
    let mut p = 1usize;
    while p < n {
        p <<= 1;
    }
    if p <= DOMAIN_SIZE {
        Some(p)
    } else {
        None
    }
}

/// Evaluates `poly` at the first `n` domain points ("enter", spec §4.9).
/// `None` if the context isn't initialized or `n` exceeds the domain.
pub fn enter<F: EcfftField>(poly: &Polynomial<F>, n: usize) -> Option<Vec<F>> {
    let domain = F::domain_slot().get()?;
    if n > domain.len() {
        return None;
    }
    Some(domain[..n].iter().map(|x| poly.eval(*x)).collect())
}

/// Interpolates `evals` back to coefficients ("exit", spec §4.9) at the
/// first `evals.len()` domain points. Exact inverse of [`enter`]: calling
/// `exit(&enter(p, n).unwrap())` for `n` greater than `p`'s degree
/// reproduces `p`, since interpolation through `n` distinct points
/// recovers the unique degree-`< n` polynomial matching them.
pub fn exit<F: EcfftField>(evals: &[F]) -> Option<Polynomial<F>> {
    let domain = F::domain_slot().get()?;
    if evals.len() > domain.len() {
        return None;
    }
    let points: Vec<(F, F)> = domain
        .iter()
        .zip(evals.iter())
        .map(|(x, y)| (*x, *y))
        .collect();
    Some(Polynomial::interpolate(&points))
}

/// Pointwise-multiply-in-the-evaluation-domain polynomial multiplication
/// (spec §4.9's "Multiply" construction): pad to the next power of two
/// domain size, enter both operands, multiply evaluations pointwise,
/// exit. `None` when uninitialized or the product doesn't fit the
/// domain, in which case [`Polynomial::mul`] falls through to Karatsuba.
pub fn try_multiply<F: EcfftField>(a: &Polynomial<F>, b: &Polynomial<F>) -> Option<Polynomial<F>> {
    if !is_initialized::<F>() {
        return None;
    }
    let needed = a.coeffs.len() + b.coeffs.len() - 1;
    let n = next_pow2_capped(needed)?;
    let ea = enter(a, n)?;
    let eb = enter(b, n)?;
    let product_evals: Vec<F> = ea.iter().zip(eb.iter()).map(|(x, y)| *x * *y).collect();
    exit(&product_evals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_is_identity_for_small_polynomial() {
        init::<Fp>();
        let p = Polynomial::from_coefficients(vec![
            Fp::from_u64(3),
            Fp::from_u64(5),
            Fp::from_u64(7),
        ]);
        let evals = enter(&p, 16).unwrap();
        let back = exit(&evals).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn try_multiply_matches_schoolbook() {
        init::<Fp>();
        let a = Polynomial::from_coefficients(vec![Fp::from_u64(1), Fp::from_u64(2)]);
        let b = Polynomial::from_coefficients(vec![Fp::from_u64(3), Fp::from_u64(4)]);
        let via_ecfft = try_multiply(&a, &b).unwrap();
        let via_schoolbook = a.mul(&b);
        assert_eq!(via_ecfft, via_schoolbook);
    }

    #[test]
    fn uninitialized_context_returns_none() {
        assert!(try_multiply::<Fq>(
            &Polynomial::from_coefficients(vec![Fq::ONE]),
            &Polynomial::from_coefficients(vec![Fq::ONE]),
        )
        .is_none());
    }
}
