//! The Helios curve: `y^2 = x^3 - 3x + b` over `F_p`, group order `q`.

use std::ops::{Add, Neg, Sub};

use crate::curve::scalarmul;
use crate::curve::{self, Affine, CurveConstants, Jacobian};
use crate::error::DecodeError;
use crate::field::fp::Fp;
use crate::field::Field;
use crate::scalar::helios::HeliosScalar;

/// Curve-specific constants for Helios. `B` and the generator (in
/// `curve::tables`) are placeholders — see `DESIGN.md`'s Open Question
/// notes; `SSWU_Z = 7` is given directly by spec §4.7.
pub struct HeliosParams;

impl CurveConstants for HeliosParams {
    type F = Fp;
    const B: Fp = Fp::from_limbs([7, 0, 0, 0, 0]);
    fn sswu_z() -> Fp {
        Fp::from_u64(7)
    }
}

/// A Helios point in Jacobian coordinates.
#[derive(Clone, Copy, Debug)]
pub struct HeliosPoint(pub(crate) Jacobian<Fp>);

impl HeliosPoint {
    pub fn identity() -> HeliosPoint {
        HeliosPoint(Jacobian::identity())
    }

    pub fn generator() -> HeliosPoint {
        crate::curve::tables::helios_generator_point()
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    pub fn from_affine(x: Fp, y: Fp) -> HeliosPoint {
        HeliosPoint(Jacobian::from_affine(Affine { x, y }))
    }

    pub fn to_affine(&self) -> (Fp, Fp) {
        let a = self.0.to_affine();
        (a.x, a.y)
    }

    pub fn is_on_curve(x: Fp, y: Fp) -> bool {
        curve::is_on_curve(Affine { x, y }, HeliosParams::B)
    }

    pub fn dbl(&self) -> HeliosPoint {
        HeliosPoint(self.0.dbl())
    }

    pub fn neg(&self) -> HeliosPoint {
        HeliosPoint(self.0.neg())
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        curve::to_bytes(&self.0)
    }

    pub fn from_bytes(bytes: &[u8; 32]) -> Result<HeliosPoint, DecodeError> {
        curve::from_bytes(bytes, HeliosParams::B).map(HeliosPoint)
    }

    /// Constant-time fixed-window scalar multiplication (spec §4.5.1).
    pub fn scalar_mul(&self, scalar: &HeliosScalar) -> HeliosPoint {
        HeliosPoint(scalarmul::scalar_mul_ct(&scalar.to_bytes(), &self.0))
    }

    /// Variable-time sliding-window wNAF scalar multiplication (spec
    /// §4.5.2). Only for publicly known scalars.
    pub fn scalar_mul_vartime(&self, scalar: &HeliosScalar) -> HeliosPoint {
        HeliosPoint(scalarmul::scalar_mul_vartime(&scalar.to_bytes(), &self.0))
    }

    /// Fixed-base precomputation table (spec §4.5.3).
    pub fn fixed_precompute(&self) -> [Affine<Fp>; 16] {
        crate::curve::tables::fixed_base_precompute(self.0)
    }

    /// Fixed-base scalar multiplication using a precomputed table.
    pub fn scalar_mul_fixed(scalar: &HeliosScalar, table: &[Affine<Fp>; 16]) -> HeliosPoint {
        HeliosPoint(scalarmul::scalar_mul_fixed(&scalar.to_bytes(), table))
    }

    /// Variable-time multi-scalar multiplication (spec §4.6): backend
    /// chosen by `n` (identity, single-scalar delegate, Straus, or
    /// Pippenger). For publicly known scalars only.
    pub fn msm(scalars: &[HeliosScalar], points: &[HeliosPoint]) -> HeliosPoint {
        let scalar_bytes: Vec<[u8; 32]> = scalars.iter().map(|s| s.to_bytes()).collect();
        let jacobians: Vec<Jacobian<Fp>> = points.iter().map(|p| p.0).collect();
        HeliosPoint(crate::msm::msm(&scalar_bytes, &jacobians))
    }

    /// Fixed-base multi-scalar multiplication (spec §4.6): `n = 1` falls
    /// through to [`HeliosPoint::scalar_mul_fixed`].
    pub fn msm_fixed(scalars: &[HeliosScalar], tables: &[[Affine<Fp>; 16]]) -> HeliosPoint {
        let scalar_bytes: Vec<[u8; 32]> = scalars.iter().map(|s| s.to_bytes()).collect();
        HeliosPoint(crate::msm::msm_fixed(&scalar_bytes, tables))
    }

    /// Pedersen commitment (spec §4.6): `r*h + Sigma values[i]*generators[i]`.
    pub fn pedersen(
        r: &HeliosScalar,
        h: &HeliosPoint,
        values: &[HeliosScalar],
        generators: &[HeliosPoint],
    ) -> HeliosPoint {
        let value_bytes: Vec<[u8; 32]> = values.iter().map(|v| v.to_bytes()).collect();
        let generator_jacobians: Vec<Jacobian<Fp>> = generators.iter().map(|g| g.0).collect();
        HeliosPoint(crate::msm::pedersen::pedersen(
            &r.to_bytes(),
            &h.0,
            &value_bytes,
            &generator_jacobians,
        ))
    }
}

impl Add for HeliosPoint {
    type Output = HeliosPoint;
    fn add(self, rhs: HeliosPoint) -> HeliosPoint {
        HeliosPoint(self.0 + rhs.0)
    }
}

impl Sub for HeliosPoint {
    type Output = HeliosPoint;
    fn sub(self, rhs: HeliosPoint) -> HeliosPoint {
        HeliosPoint(self.0 - rhs.0)
    }
}

impl Neg for HeliosPoint {
    type Output = HeliosPoint;
    fn neg(self) -> HeliosPoint {
        HeliosPoint(-self.0)
    }
}

impl PartialEq for HeliosPoint {
    fn eq(&self, other: &HeliosPoint) -> bool {
        self.0 == other.0
    }
}
impl Eq for HeliosPoint {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_on_curve() {
        let (x, y) = HeliosPoint::generator().to_affine();
        assert!(HeliosPoint::is_on_curve(x, y));
    }

    #[test]
    fn scalar_mul_paths_agree() {
        let g = HeliosPoint::generator();
        let s = HeliosScalar::from_u64(13);
        let ct = g.scalar_mul(&s);
        let vt = g.scalar_mul_vartime(&s);
        assert_eq!(ct, vt);
        let table = g.fixed_precompute();
        let fixed = HeliosPoint::scalar_mul_fixed(&s, &table);
        assert_eq!(ct, fixed);
    }

    #[test]
    fn scalar_mul_zero_is_identity() {
        let g = HeliosPoint::generator();
        let s = HeliosScalar::ZERO;
        assert!(g.scalar_mul(&s).is_identity());
        assert!(g.scalar_mul_vartime(&s).is_identity());
    }

    #[test]
    fn scalar_mul_one_is_identity_point() {
        let g = HeliosPoint::generator();
        let s = HeliosScalar::ONE;
        assert_eq!(g.scalar_mul(&s), g);
    }

    #[test]
    fn compressed_roundtrip() {
        let g = HeliosPoint::generator().dbl();
        let bytes = g.to_bytes();
        assert_eq!(HeliosPoint::from_bytes(&bytes).unwrap(), g);
    }

    #[test]
    fn msm_matches_scalarmul_path_consistency() {
        // Spec §8.3's all-paths cross-check, at the typed HeliosPoint
        // level: scalar_mul == scalar_mul_vartime == msm([s],[P]) ==
        // pedersen(s, P, {}, {}).
        let g = HeliosPoint::generator();
        let s = HeliosScalar::from_u64(13);
        let via_scalar_mul = g.scalar_mul(&s);
        let via_msm = HeliosPoint::msm(&[s], &[g]);
        let via_pedersen = HeliosPoint::pedersen(&s, &g, &[], &[]);
        assert_eq!(via_scalar_mul, via_msm);
        assert_eq!(via_scalar_mul, via_pedersen);
    }
}
