//! `HeliosScalar`: an element of `F_q`, the Helios curve's scalar field.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::DecodeError;
use crate::field::fq::Fq;
use crate::field::Field;
use crate::scalar;

/// An element of `F_q`, used as the scalar type for [`crate::curve::helios::HeliosPoint`]
/// scalar multiplication (Helios's group order is `q`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeliosScalar(pub(crate) Fq);

impl HeliosScalar {
    pub const ZERO: HeliosScalar = HeliosScalar(Fq::ZERO);
    pub const ONE: HeliosScalar = HeliosScalar(Fq::ONE);

    /// Decodes a canonical 32-byte little-endian scalar. Rejects bit 255
    /// set and any value `>= q`, same contract as [`Field::from_bytes`].
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<HeliosScalar, DecodeError> {
        Fq::from_bytes(bytes).map(HeliosScalar)
    }

    /// Canonical 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Reduces a 64-byte little-endian integer modulo `q`. The only way
    /// this crate produces a scalar from more than 32 bytes of caller
    /// input (e.g. a wide hash output); the library does not hash.
    pub fn reduce_wide(bytes: &[u8; 64]) -> HeliosScalar {
        HeliosScalar(scalar::reduce_wide::<Fq>(bytes))
    }

    /// `self * rhs + addend`.
    pub fn muladd(&self, rhs: &HeliosScalar, addend: &HeliosScalar) -> HeliosScalar {
        HeliosScalar(scalar::muladd(&self.0, &rhs.0, &addend.0))
    }

    /// Multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> Option<HeliosScalar> {
        self.0.invert().map(HeliosScalar)
    }

    pub fn square(&self) -> HeliosScalar {
        HeliosScalar(self.0.square())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn from_u64(x: u64) -> HeliosScalar {
        HeliosScalar(Fq::from_u64(x))
    }
}

impl Add for HeliosScalar {
    type Output = HeliosScalar;
    fn add(self, rhs: HeliosScalar) -> HeliosScalar {
        HeliosScalar(self.0 + rhs.0)
    }
}

impl Sub for HeliosScalar {
    type Output = HeliosScalar;
    fn sub(self, rhs: HeliosScalar) -> HeliosScalar {
        HeliosScalar(self.0 - rhs.0)
    }
}

impl Neg for HeliosScalar {
    type Output = HeliosScalar;
    fn neg(self) -> HeliosScalar {
        HeliosScalar(-self.0)
    }
}

impl Mul for HeliosScalar {
    type Output = HeliosScalar;
    fn mul(self, rhs: HeliosScalar) -> HeliosScalar {
        HeliosScalar(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_wide_of_zero_is_zero() {
        assert_eq!(HeliosScalar::reduce_wide(&[0u8; 64]), HeliosScalar::ZERO);
    }

    #[test]
    fn reduce_wide_of_small_value_matches_from_bytes() {
        let mut wide = [0u8; 64];
        wide[0] = 42;
        let mut narrow = [0u8; 32];
        narrow[0] = 42;
        assert_eq!(
            HeliosScalar::reduce_wide(&wide),
            HeliosScalar::from_bytes(&narrow).unwrap()
        );
    }

    #[test]
    fn muladd_matches_mul_then_add() {
        let a = HeliosScalar::from_u64(7);
        let b = HeliosScalar::from_u64(11);
        let c = HeliosScalar::from_u64(13);
        assert_eq!(a.muladd(&b, &c), a * b + c);
    }

    #[test]
    fn invert_roundtrip() {
        let a = HeliosScalar::from_u64(999331);
        let inv = a.invert().unwrap();
        assert_eq!(a * inv, HeliosScalar::ONE);
    }
}
