//! `SeleneScalar`: an element of `F_p`, the Selene curve's scalar field.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::DecodeError;
use crate::field::fp::Fp;
use crate::field::Field;
use crate::scalar;

/// An element of `F_p`, used as the scalar type for [`crate::curve::selene::SelenePoint`]
/// scalar multiplication (Selene's group order is `p`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeleneScalar(pub(crate) Fp);

impl SeleneScalar {
    pub const ZERO: SeleneScalar = SeleneScalar(Fp::ZERO);
    pub const ONE: SeleneScalar = SeleneScalar(Fp::ONE);

    /// Decodes a canonical 32-byte little-endian scalar. Rejects bit 255
    /// set and any value `>= p`, same contract as [`Field::from_bytes`].
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<SeleneScalar, DecodeError> {
        Fp::from_bytes(bytes).map(SeleneScalar)
    }

    /// Canonical 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Reduces a 64-byte little-endian integer modulo `p`.
    pub fn reduce_wide(bytes: &[u8; 64]) -> SeleneScalar {
        SeleneScalar(scalar::reduce_wide::<Fp>(bytes))
    }

    /// `self * rhs + addend`.
    pub fn muladd(&self, rhs: &SeleneScalar, addend: &SeleneScalar) -> SeleneScalar {
        SeleneScalar(scalar::muladd(&self.0, &rhs.0, &addend.0))
    }

    /// Multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> Option<SeleneScalar> {
        self.0.invert().map(SeleneScalar)
    }

    pub fn square(&self) -> SeleneScalar {
        SeleneScalar(self.0.square())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn from_u64(x: u64) -> SeleneScalar {
        SeleneScalar(Fp::from_u64(x))
    }

    /// The Wei25519 bridge (spec §4.3): accepts 32 bytes encoding a
    /// canonical `F_p` element — e.g. the x-coordinate of a Wei25519
    /// (short-Weierstrass Curve25519) point — and returns it as a
    /// `SeleneScalar`. `SeleneScalar` already *is* an `F_p` element, so
    /// this is exactly [`SeleneScalar::from_bytes`] under the name the
    /// external ecosystem expects at this adapter boundary.
    pub fn from_wei25519_x(bytes: &[u8; 32]) -> Result<SeleneScalar, DecodeError> {
        SeleneScalar::from_bytes(bytes)
    }
}

impl Add for SeleneScalar {
    type Output = SeleneScalar;
    fn add(self, rhs: SeleneScalar) -> SeleneScalar {
        SeleneScalar(self.0 + rhs.0)
    }
}

impl Sub for SeleneScalar {
    type Output = SeleneScalar;
    fn sub(self, rhs: SeleneScalar) -> SeleneScalar {
        SeleneScalar(self.0 - rhs.0)
    }
}

impl Neg for SeleneScalar {
    type Output = SeleneScalar;
    fn neg(self) -> SeleneScalar {
        SeleneScalar(-self.0)
    }
}

impl Mul for SeleneScalar {
    type Output = SeleneScalar;
    fn mul(self, rhs: SeleneScalar) -> SeleneScalar {
        SeleneScalar(self.0 * rhs.0)
    }
}

/// Free-function alias matching the name spec §4.3 gives this adapter.
pub fn selene_scalar_from_wei25519_x(bytes: &[u8; 32]) -> Result<SeleneScalar, DecodeError> {
    SeleneScalar::from_wei25519_x(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_wide_of_zero_is_zero() {
        assert_eq!(SeleneScalar::reduce_wide(&[0u8; 64]), SeleneScalar::ZERO);
    }

    #[test]
    fn muladd_matches_mul_then_add() {
        let a = SeleneScalar::from_u64(7);
        let b = SeleneScalar::from_u64(11);
        let c = SeleneScalar::from_u64(13);
        assert_eq!(a.muladd(&b, &c), a * b + c);
    }

    #[test]
    fn wei25519_bridge_rejects_high_bit() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x80;
        assert!(SeleneScalar::from_wei25519_x(&bytes).is_err());
    }

    #[test]
    fn wei25519_bridge_accepts_canonical_value() {
        let bytes = SeleneScalar::from_u64(42).to_bytes();
        assert_eq!(
            SeleneScalar::from_wei25519_x(&bytes).unwrap(),
            SeleneScalar::from_u64(42)
        );
    }
}
