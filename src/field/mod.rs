//! The `Field` trait shared by [`fp::Fp`] and [`fq::Fq`].
//!
//! Everything above layer 1 (scalars, curves, MSM, polynomials, divisors)
//! is written once, generically over this trait, instead of being
//! duplicated per curve. The trait only exposes what those upper layers
//! actually need: the field is otherwise a black box of five 51-bit limbs
//! to them.

pub mod fp;
pub mod fq;

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::DecodeError;

/// A prime field element supporting the operations the rest of this
/// crate needs: the field ring operations, inversion, square root, and
/// canonical byte (de)serialization.
pub trait Field:
    Sized
    + Copy
    + Clone
    + Debug
    + PartialEq
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;

    /// `self * self`. Separate from `Mul` because squaring can skip the
    /// cross-term doubling a general multiply needs.
    fn square(&self) -> Self;

    /// `self + self`.
    fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse, or `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// A square root of `self`, or `None` if `self` is not a quadratic
    /// residue. When a root exists its negation is also a root; callers
    /// that need a canonical choice (e.g. "even" or "lexicographically
    /// smallest") normalize the result themselves.
    fn sqrt(&self) -> Option<Self>;

    /// Constant-time equality to [`Self::ZERO`].
    fn is_zero(&self) -> bool;

    /// Constant-time select: returns `a` if `choice == 0`, `b` if
    /// `choice == 1`. `choice` must be exactly 0 or 1.
    fn conditional_select(a: &Self, b: &Self, choice: u8) -> Self;

    /// Constant-time equality between two field elements.
    fn ct_eq(&self, other: &Self) -> bool;

    /// Maps a small integer into the field.
    fn from_u64(x: u64) -> Self;

    /// Decodes a canonical little-endian 32-byte encoding. Rejects
    /// encodings with the top bit set or that are not the unique
    /// representative in `[0, modulus)`.
    fn from_bytes(bytes: &[u8; 32]) -> Result<Self, DecodeError>;

    /// Encodes `self` as the canonical little-endian representative in
    /// `[0, modulus)`.
    fn to_bytes(&self) -> [u8; 32];

    /// Loads 32 little-endian bytes as a field element without the
    /// canonical-range or bit-255 checks [`Field::from_bytes`] enforces
    /// — any 256-bit pattern is a valid (possibly non-canonical) loose
    /// representative. Used where the input is arbitrary hash/transcript
    /// output rather than an externally-asserted field element: SSWU's
    /// `u` (spec §4.7) and wide scalar reduction's 32-byte halves.
    fn from_bytes_raw(bytes: &[u8; 32]) -> Self;
}
