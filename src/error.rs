//! Decode-rejection error type.
//!
//! Every fallible operation in this crate reports failure as a plain value:
//! field/scalar inversion and square root return `Option`, and any routine
//! that parses external bytes (field elements, scalars, compressed points)
//! returns `Result<T, DecodeError>`. There are no exceptions, no panics on
//! malformed input, and nothing here is retried internally — a rejected
//! decode is handed straight back to the caller.

use std::fmt;

/// Why a 32-byte input was rejected by a `from_bytes` routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Bit 255 of the input was set; field elements and scalars must have
    /// their top bit clear.
    HighBitSet,
    /// The decoded integer is greater than or equal to the field/scalar
    /// modulus. `from_bytes` never silently reduces.
    NotCanonical,
    /// The all-zero 32-byte encoding was presented to a compressed-point
    /// decoder. The identity has no compressed encoding, so this is
    /// indistinguishable from "not on curve" by contract.
    IdentityEncoding,
    /// The recovered x-coordinate does not lie on the curve: `x^3 - 3x + b`
    /// is not a quadratic residue in the base field.
    NotOnCurve,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DecodeError::HighBitSet => "bit 255 of the encoding is set",
            DecodeError::NotCanonical => "decoded value is not canonically reduced",
            DecodeError::IdentityEncoding => "all-zero encoding has no compressed point decode",
            DecodeError::NotOnCurve => "x-coordinate does not lie on the curve",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for DecodeError {}

/// Result alias used by every `from_bytes` routine in this crate.
pub type DecodeResult<T> = Result<T, DecodeError>;
