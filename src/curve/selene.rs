//! The Selene curve: `y^2 = x^3 - 3x + b` over `F_q`, group order `p`.

use std::ops::{Add, Neg, Sub};

use crate::curve::scalarmul;
use crate::curve::{self, Affine, CurveConstants, Jacobian};
use crate::error::DecodeError;
use crate::field::fq::Fq;
use crate::field::Field;
use crate::scalar::selene::SeleneScalar;

/// Curve-specific constants for Selene. `B` and the generator are
/// placeholders, same as Helios's (see `DESIGN.md`); `SSWU_Z = -4` is
/// given directly by spec §4.7.
pub struct SeleneParams;

impl CurveConstants for SeleneParams {
    type F = Fq;
    const B: Fq = Fq::from_limbs([11, 0, 0, 0, 0]);
    fn sswu_z() -> Fq {
        -Fq::from_u64(4)
    }
}

/// A Selene point in Jacobian coordinates.
#[derive(Clone, Copy, Debug)]
pub struct SelenePoint(pub(crate) Jacobian<Fq>);

impl SelenePoint {
    pub fn identity() -> SelenePoint {
        SelenePoint(Jacobian::identity())
    }

    pub fn generator() -> SelenePoint {
        crate::curve::tables::selene_generator_point()
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    pub fn from_affine(x: Fq, y: Fq) -> SelenePoint {
        SelenePoint(Jacobian::from_affine(Affine { x, y }))
    }

    pub fn to_affine(&self) -> (Fq, Fq) {
        let a = self.0.to_affine();
        (a.x, a.y)
    }

    pub fn is_on_curve(x: Fq, y: Fq) -> bool {
        curve::is_on_curve(Affine { x, y }, SeleneParams::B)
    }

    pub fn dbl(&self) -> SelenePoint {
        SelenePoint(self.0.dbl())
    }

    pub fn neg(&self) -> SelenePoint {
        SelenePoint(self.0.neg())
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        curve::to_bytes(&self.0)
    }

    pub fn from_bytes(bytes: &[u8; 32]) -> Result<SelenePoint, DecodeError> {
        curve::from_bytes(bytes, SeleneParams::B).map(SelenePoint)
    }

    pub fn scalar_mul(&self, scalar: &SeleneScalar) -> SelenePoint {
        SelenePoint(scalarmul::scalar_mul_ct(&scalar.to_bytes(), &self.0))
    }

    pub fn scalar_mul_vartime(&self, scalar: &SeleneScalar) -> SelenePoint {
        SelenePoint(scalarmul::scalar_mul_vartime(&scalar.to_bytes(), &self.0))
    }

    pub fn fixed_precompute(&self) -> [Affine<Fq>; 16] {
        crate::curve::tables::fixed_base_precompute(self.0)
    }

    pub fn scalar_mul_fixed(scalar: &SeleneScalar, table: &[Affine<Fq>; 16]) -> SelenePoint {
        SelenePoint(scalarmul::scalar_mul_fixed(&scalar.to_bytes(), table))
    }

    /// Variable-time multi-scalar multiplication (spec §4.6).
    pub fn msm(scalars: &[SeleneScalar], points: &[SelenePoint]) -> SelenePoint {
        let scalar_bytes: Vec<[u8; 32]> = scalars.iter().map(|s| s.to_bytes()).collect();
        let jacobians: Vec<Jacobian<Fq>> = points.iter().map(|p| p.0).collect();
        SelenePoint(crate::msm::msm(&scalar_bytes, &jacobians))
    }

    /// Fixed-base multi-scalar multiplication (spec §4.6).
    pub fn msm_fixed(scalars: &[SeleneScalar], tables: &[[Affine<Fq>; 16]]) -> SelenePoint {
        let scalar_bytes: Vec<[u8; 32]> = scalars.iter().map(|s| s.to_bytes()).collect();
        SelenePoint(crate::msm::msm_fixed(&scalar_bytes, tables))
    }

    /// Pedersen commitment (spec §4.6): `r*h + Sigma values[i]*generators[i]`.
    pub fn pedersen(
        r: &SeleneScalar,
        h: &SelenePoint,
        values: &[SeleneScalar],
        generators: &[SelenePoint],
    ) -> SelenePoint {
        let value_bytes: Vec<[u8; 32]> = values.iter().map(|v| v.to_bytes()).collect();
        let generator_jacobians: Vec<Jacobian<Fq>> = generators.iter().map(|g| g.0).collect();
        SelenePoint(crate::msm::pedersen::pedersen(
            &r.to_bytes(),
            &h.0,
            &value_bytes,
            &generator_jacobians,
        ))
    }
}

impl Add for SelenePoint {
    type Output = SelenePoint;
    fn add(self, rhs: SelenePoint) -> SelenePoint {
        SelenePoint(self.0 + rhs.0)
    }
}

impl Sub for SelenePoint {
    type Output = SelenePoint;
    fn sub(self, rhs: SelenePoint) -> SelenePoint {
        SelenePoint(self.0 - rhs.0)
    }
}

impl Neg for SelenePoint {
    type Output = SelenePoint;
    fn neg(self) -> SelenePoint {
        SelenePoint(-self.0)
    }
}

impl PartialEq for SelenePoint {
    fn eq(&self, other: &SelenePoint) -> bool {
        self.0 == other.0
    }
}
impl Eq for SelenePoint {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_on_curve() {
        let (x, y) = SelenePoint::generator().to_affine();
        assert!(SelenePoint::is_on_curve(x, y));
    }

    #[test]
    fn scalar_mul_paths_agree() {
        let g = SelenePoint::generator();
        let s = SeleneScalar::from_u64(13);
        let ct = g.scalar_mul(&s);
        let vt = g.scalar_mul_vartime(&s);
        assert_eq!(ct, vt);
        let table = g.fixed_precompute();
        let fixed = SelenePoint::scalar_mul_fixed(&s, &table);
        assert_eq!(ct, fixed);
    }

    #[test]
    fn compressed_roundtrip() {
        let g = SelenePoint::generator().dbl();
        let bytes = g.to_bytes();
        assert_eq!(SelenePoint::from_bytes(&bytes).unwrap(), g);
    }

    #[test]
    fn msm_matches_scalarmul_path_consistency() {
        let g = SelenePoint::generator();
        let s = SeleneScalar::from_u64(13);
        let via_scalar_mul = g.scalar_mul(&s);
        let via_msm = SelenePoint::msm(&[s], &[g]);
        let via_pedersen = SelenePoint::pedersen(&s, &g, &[], &[]);
        assert_eq!(via_scalar_mul, via_msm);
        assert_eq!(via_scalar_mul, via_pedersen);
    }
}
