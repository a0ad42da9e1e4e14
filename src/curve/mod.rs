//! Generic short-Weierstrass group law, `y^2 = x^3 - 3x + b`.
//!
//! Fixing `a = -3` lets the doubling and addition formulas below be
//! written once, generically over [`Field`], and shared by both curves of
//! the cycle: [`helios`] and [`selene`] each supply only the
//! curve-specific constant `b` (plus the SSWU non-residue `Z`) through
//! [`CurveConstants`], and bind the generic [`Jacobian`]/[`Affine`] types
//! to `Fp`/`Fq` respectively. This mirrors the teacher's
//! `signatures/ed25519/group.rs`, which likewise keeps one set of
//! coordinate-conversion/addition routines and layers a curve-specific
//! constant (`D`, `D2`, `SQRTM1`) on top — except here the curve constant
//! is a function parameter or trait constant instead of a global, since
//! two distinct curves share this module.

pub mod helios;
pub mod scalarmul;
pub mod selene;
pub mod sswu;
pub mod tables;

use std::ops::{Add, Neg, Sub};

use crate::error::DecodeError;
use crate::field::Field;

/// A point in Jacobian projective coordinates: `(x, y) = (X/Z^2, Y/Z^3)`.
/// The identity is the unique class with `Z = 0` (§3.2); `X`/`Y` are left
/// arbitrary in that case (this crate always uses `(1, 1, 0)`, see
/// [`Jacobian::identity`]).
#[derive(Clone, Copy, Debug)]
pub struct Jacobian<F: Field> {
    pub(crate) x: F,
    pub(crate) y: F,
    pub(crate) z: F,
}

/// An affine point `(x, y)`. Cannot represent the identity; callers that
/// need to carry "maybe identity" alongside an affine point use
/// [`Jacobian`] or their own `Option`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine<F: Field> {
    pub(crate) x: F,
    pub(crate) y: F,
}

/// The per-curve constants the generic group-law/serialization/SSWU code
/// needs beyond the field arithmetic itself.
pub trait CurveConstants {
    type F: Field;
    /// `b` in `y^2 = x^3 - 3x + b`.
    const B: Self::F;
    /// The SSWU non-residue `Z` (spec §4.7): `7` for Helios, `-4` for
    /// Selene. A method rather than an associated `const` only because
    /// Selene's `-4` needs `Neg`, which isn't available in const
    /// context for a generic `F: Field`; the value itself is as fixed
    /// as `B`.
    fn sswu_z() -> Self::F;
}

impl<F: Field> Jacobian<F> {
    /// The group identity, `O`.
    pub fn identity() -> Jacobian<F> {
        Jacobian {
            x: F::ONE,
            y: F::ONE,
            z: F::ZERO,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn from_affine(p: Affine<F>) -> Jacobian<F> {
        Jacobian {
            x: p.x,
            y: p.y,
            z: F::ONE,
        }
    }

    /// `2*P`. Complete: doubling the identity yields the identity.
    pub fn dbl(&self) -> Jacobian<F> {
        if self.is_identity() {
            return Jacobian::identity();
        }
        // dbl-2007-bl (a = -3), https://www.hyperelliptic.org/EFD — delta/gamma/beta/alpha naming kept for auditability against that source.
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x * gamma;
        let x_minus_delta = self.x - delta;
        let x_plus_delta = self.x + delta;
        let alpha = (x_minus_delta * x_plus_delta).double() + (x_minus_delta * x_plus_delta);

        let x3 = alpha.square() - beta.double().double().double();
        let z3 = (self.y + self.z).square() - gamma - delta;
        let beta4 = beta.double().double();
        let y3 = alpha * (beta4 - x3) - gamma.square().double().double().double();

        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// `P + Q` via the unchecked addition formula (add-2007-bl). Private:
    /// the result is garbage (not an error — it simply isn't `P + Q`)
    /// when `P == Q`, `P == -Q`, or either input is the identity. Spec
    /// §4.4/§9 calls this the "incomplete formula"; every public entry
    /// point routes through [`Jacobian::add`] (the `Add` impl below)
    /// instead, which checks those cases first.
    fn add_incomplete(&self, other: &Jacobian<F>) -> Jacobian<F> {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * other.z * z2z2;
        let s2 = other.y * self.z * z1z1;
        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;
        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + other.z).square() - z1z1 - z2z2) * h;
        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// `P + Q` where `Q` is affine (`Z_Q = 1`); same incompleteness as
    /// [`Jacobian::add_incomplete`].
    pub(crate) fn madd_incomplete(&self, other: &Affine<F>) -> Jacobian<F> {
        let z1z1 = self.z.square();
        let u2 = other.x * z1z1;
        let s2 = other.y * self.z * z1z1;
        let h = u2 - self.x;
        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let r = (s2 - self.y).double();
        let v = self.x * i;
        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (self.y * j).double();
        let z3 = (self.z + h).square() - z1z1 - hh;
        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn neg(&self) -> Jacobian<F> {
        Jacobian {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// One inversion plus a few multiplies. Undefined (panics) on the
    /// identity, per spec §4.4.
    pub fn to_affine(&self) -> Affine<F> {
        let zinv = self.z.invert().expect("to_affine called on the identity");
        let zinv2 = zinv.square();
        let zinv3 = zinv2 * zinv;
        Affine {
            x: self.x * zinv2,
            y: self.y * zinv3,
        }
    }

    /// Montgomery's batch-inversion trick: one inversion shared across all
    /// `n` points instead of `n` separate ones, at the cost of `3*(n-1)`
    /// extra multiplies. Identity inputs are substituted with a sentinel
    /// `1` before the running product so they never poison the shared
    /// inverse, and their output slot is patched to `(0, 0)` afterward
    /// (spec §4.4, §9 "batch inversion treatment of zero").
    pub fn batch_to_affine(points: &[Jacobian<F>]) -> Vec<Affine<F>> {
        let n = points.len();
        if n == 0 {
            return Vec::new();
        }
        let mut prefix = vec![F::ONE; n];
        let mut acc = F::ONE;
        for (i, p) in points.iter().enumerate() {
            prefix[i] = acc;
            let z = if p.is_identity() { F::ONE } else { p.z };
            acc = acc * z;
        }
        let mut acc_inv = acc.invert().expect("at least one non-identity z, or acc stays 1");
        let mut out = vec![
            Affine {
                x: F::ZERO,
                y: F::ZERO,
            };
            n
        ];
        for i in (0..n).rev() {
            let p = &points[i];
            if p.is_identity() {
                out[i] = Affine {
                    x: F::ZERO,
                    y: F::ZERO,
                };
                continue;
            }
            let zinv = acc_inv * prefix[i];
            acc_inv = acc_inv * p.z;
            let zinv2 = zinv.square();
            let zinv3 = zinv2 * zinv;
            out[i] = Affine {
                x: p.x * zinv2,
                y: p.y * zinv3,
            };
        }
        out
    }

    /// Whether `self` and `other` are the same group element, independent
    /// of their `Z`-coordinates: `X1*Z2^2 == X2*Z1^2` and `Y1*Z2^3 ==
    /// Y2*Z1^3`. Both sides are identity-safe: the comparison is only
    /// meaningful when used on non-identity points, which is how the
    /// complete wrappers below use it.
    fn same_point(&self, other: &Jacobian<F>) -> bool {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let same_x = (self.x * z2z2).ct_eq(&(other.x * z1z1));
        let same_y = (self.y * other.z * z2z2).ct_eq(&(other.y * self.z * z1z1));
        // `&`, not `&&`: both comparisons are evaluated unconditionally so
        // this stays safe to use from the constant-time path (`ct_add`),
        // which cannot let whether `same_x` held leak through whether
        // `same_y` was even computed.
        same_x & same_y
    }

    /// Whether `self == -other`.
    fn is_negation(&self, other: &Jacobian<F>) -> bool {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let same_x = (self.x * z2z2).ct_eq(&(other.x * z1z1));
        let neg_y = (self.y * other.z * z2z2).ct_eq(&-(other.y * self.z * z1z1));
        same_x & neg_y
    }

    /// Constant-time complete addition used by [`scalarmul`]'s ladder:
    /// every one of the incomplete formula's excluded cases (either input
    /// identity, equal points, opposite points) is handled by a
    /// [`Field::conditional_select`] rather than a branch, so the
    /// instruction trace doesn't reveal which case occurred.
    pub(crate) fn ct_add(&self, other: &Jacobian<F>) -> Jacobian<F> {
        let sum = self.add_incomplete(other);
        let dbl = self.dbl();
        let same = self.same_point(other) as u8;
        let negated = self.is_negation(other) as u8;
        let self_identity = self.is_identity() as u8;
        let other_identity = other.is_identity() as u8;

        let mut result = Jacobian::conditional_select(&sum, &dbl, same);
        result = Jacobian::conditional_select(&result, &Jacobian::identity(), negated);
        result = Jacobian::conditional_select(&result, other, self_identity);
        result = Jacobian::conditional_select(&result, self, other_identity);
        result
    }

    pub(crate) fn conditional_select(a: &Jacobian<F>, b: &Jacobian<F>, choice: u8) -> Jacobian<F> {
        Jacobian {
            x: F::conditional_select(&a.x, &b.x, choice),
            y: F::conditional_select(&a.y, &b.y, choice),
            z: F::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<F: Field> Add for Jacobian<F> {
    type Output = Jacobian<F>;
    /// The public, total addition: checks identity/equal/opposite first,
    /// then falls through to [`Jacobian::add_incomplete`] (spec §4.4,
    /// §9 "Incomplete group law"). Variable-time; only used on public
    /// (non-secret) accumulation, same as every other branching path in
    /// this layer.
    fn add(self, rhs: Jacobian<F>) -> Jacobian<F> {
        if self.is_identity() {
            return rhs;
        }
        if rhs.is_identity() {
            return self;
        }
        if self.same_point(&rhs) {
            return self.dbl();
        }
        if self.is_negation(&rhs) {
            return Jacobian::identity();
        }
        self.add_incomplete(&rhs)
    }
}

impl<F: Field> Sub for Jacobian<F> {
    type Output = Jacobian<F>;
    fn sub(self, rhs: Jacobian<F>) -> Jacobian<F> {
        self + rhs.neg()
    }
}

impl<F: Field> Neg for Jacobian<F> {
    type Output = Jacobian<F>;
    fn neg(self) -> Jacobian<F> {
        Jacobian::neg(&self)
    }
}

impl<F: Field> PartialEq for Jacobian<F> {
    fn eq(&self, other: &Jacobian<F>) -> bool {
        let a_id = self.is_identity();
        let b_id = other.is_identity();
        if a_id || b_id {
            return a_id && b_id;
        }
        self.same_point(other)
    }
}
impl<F: Field> Eq for Jacobian<F> {}

/// `x^3 - 3x + b`, the right-hand side of the curve equation.
pub(crate) fn rhs<F: Field>(x: F, b: F) -> F {
    let three_x = x.double() + x;
    x.square() * x - three_x + b
}

pub fn is_on_curve<F: Field>(p: Affine<F>, b: F) -> bool {
    p.y.square().ct_eq(&rhs(p.x, b))
}

/// Compressed serialization (spec §4.4/§6.2): the x-coordinate in
/// little-endian with bit 255 holding y's parity (the low bit of its
/// canonical encoding). The identity has no compressed form and encodes
/// as 32 zero bytes.
pub fn to_bytes<F: Field>(p: &Jacobian<F>) -> [u8; 32] {
    if p.is_identity() {
        return [0u8; 32];
    }
    let a = p.to_affine();
    let mut bytes = a.x.to_bytes();
    let parity = a.y.to_bytes()[0] & 1;
    bytes[31] |= parity << 7;
    bytes
}

/// Decompresses a 32-byte encoding. Rejects the all-zero encoding (the
/// identity has no compressed form — spec §4.4 step 1/§9 open question),
/// a non-canonical x, and an x for which `x^3 - 3x + b` is not a
/// quadratic residue.
pub fn from_bytes<F: Field>(bytes: &[u8; 32], b: F) -> Result<Jacobian<F>, DecodeError> {
    if bytes == &[0u8; 32] {
        return Err(DecodeError::IdentityEncoding);
    }
    let parity = (bytes[31] >> 7) & 1;
    let mut x_bytes = *bytes;
    x_bytes[31] &= 0x7f;
    let x = F::from_bytes(&x_bytes)?;
    let t = rhs(x, b);
    let y = t.sqrt().ok_or(DecodeError::NotOnCurve)?;
    let y_parity = y.to_bytes()[0] & 1;
    let y = if y_parity == parity { y } else { -y };
    Ok(Jacobian::from_affine(Affine { x, y }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fp::Fp;

    // y^2 = x^3 - 3x + 7, a small test curve over Fp good enough to
    // exercise the generic group law without depending on the real
    // Helios/Selene constants (see DESIGN.md's open-question note).
    const B: Fp = Fp::from_limbs([7, 0, 0, 0, 0]);

    fn find_point() -> Affine<Fp> {
        let mut x = Fp::from_u64(1);
        loop {
            let t = rhs(x, B);
            if let Some(y) = t.sqrt() {
                return Affine { x, y };
            }
            x = x + Fp::ONE;
        }
    }

    #[test]
    fn double_matches_add_to_self() {
        let g = Jacobian::from_affine(find_point());
        assert_eq!(g.dbl(), g + g);
    }

    #[test]
    fn add_identity_is_noop() {
        let g = Jacobian::from_affine(find_point());
        assert_eq!(g + Jacobian::identity(), g);
        assert_eq!(Jacobian::identity() + g, g);
    }

    #[test]
    fn add_negation_is_identity() {
        let g = Jacobian::from_affine(find_point());
        assert_eq!(g + g.neg(), Jacobian::identity());
    }

    #[test]
    fn addition_is_associative() {
        let g = Jacobian::from_affine(find_point());
        let g2 = g.dbl();
        let g3 = g2 + g;
        let g4 = g2.dbl();
        assert_eq!((g + g2) + g, g + (g2 + g));
        assert_eq!(g3 + g, g4);
    }

    #[test]
    fn to_affine_matches_source_coordinates() {
        let a = find_point();
        let j = Jacobian::from_affine(a);
        assert_eq!(j.to_affine(), a);
    }

    #[test]
    fn batch_to_affine_matches_individual_conversion() {
        let a = find_point();
        let g = Jacobian::from_affine(a);
        let points = vec![g, g.dbl(), g.dbl() + g, Jacobian::identity()];
        let batch = Jacobian::batch_to_affine(&points);
        assert_eq!(batch[0], points[0].to_affine());
        assert_eq!(batch[1], points[1].to_affine());
        assert_eq!(batch[2], points[2].to_affine());
        assert_eq!(
            batch[3],
            Affine {
                x: Fp::ZERO,
                y: Fp::ZERO
            }
        );
    }

    #[test]
    fn compressed_roundtrip() {
        let g = Jacobian::from_affine(find_point());
        let bytes = to_bytes(&g);
        let back = from_bytes(&bytes, B).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn identity_compresses_to_zero_and_rejects_on_decode() {
        assert_eq!(to_bytes(&Jacobian::<Fp>::identity()), [0u8; 32]);
        assert_eq!(
            from_bytes::<Fp>(&[0u8; 32], B),
            Err(DecodeError::IdentityEncoding)
        );
    }

    #[test]
    fn flipped_parity_decodes_to_negation() {
        let g = Jacobian::from_affine(find_point());
        let mut bytes = to_bytes(&g);
        bytes[31] ^= 0x80;
        let flipped = from_bytes(&bytes, B).unwrap();
        assert_eq!(flipped, g.neg());
    }

    #[test]
    fn ct_add_matches_operator_add_on_all_cases() {
        let g = Jacobian::from_affine(find_point());
        let h = g.dbl() + g;
        assert_eq!(g.ct_add(&h), g + h);
        assert_eq!(g.ct_add(&g), g + g);
        assert_eq!(g.ct_add(&g.neg()), g + g.neg());
        assert_eq!(g.ct_add(&Jacobian::identity()), g);
        assert_eq!(Jacobian::identity().ct_add(&g), g);
    }
}
