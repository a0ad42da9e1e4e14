//! The two scalar fields of the Helios/Selene cycle.
//!
//! [`helios::HeliosScalar`] is an element of `F_q` (Helios's group order);
//! [`selene::SeleneScalar`] is an element of `F_p` (Selene's group order).
//! Because the cycle is built so that each curve's scalar field equals the
//! other curve's base field, both scalar types are thin wrappers around the
//! [`crate::field::fq::Fq`] / [`crate::field::fp::Fp`] already implemented
//! in layer 1 — there is no separate scalar-field limb representation to
//! maintain, and `from_bytes`/`to_bytes`/`add`/`mul`/`invert` all delegate
//! straight through to the underlying [`crate::field::Field`] impl, which
//! already enforces exactly the canonical-range and bit-255 contract this
//! layer needs.
//!
//! What this layer adds on top of `Field` is the scalar-specific surface
//! from spec §4.3: wide reduction from a caller-supplied 64-byte hash
//! output ([`reduce_wide`]), and the fused multiply-add `muladd` used by
//! the divisor/polynomial layers above.

pub mod helios;
pub mod selene;

use crate::field::Field;

/// Reduces a 512-bit little-endian integer modulo a field's modulus via
/// direct double-and-add Horner evaluation from the most significant bit
/// down: `acc = 0; acc = 2*acc + bit` for each bit, MSB to LSB. This is a
/// single, non-branching, full-width reduction of the entire 64-byte input
/// rather than the two-step "reduce each 256-bit half independently, then
/// combine" shortcut the spec warns distorts the output distribution —
/// every bit of the 512-bit value is folded into the modulus through the
/// same accumulator. Every step's branch on the current bit is replaced by
/// [`Field::conditional_select`], so the trace is identical regardless of
/// the (possibly secret) input.
pub(crate) fn reduce_wide<F: Field>(bytes: &[u8; 64]) -> F {
    let mut acc = F::ZERO;
    for byte in bytes.iter().rev() {
        for bit_idx in (0..8).rev() {
            let bit = (byte >> bit_idx) & 1;
            let doubled = acc.double();
            let with_bit = doubled + F::ONE;
            acc = F::conditional_select(&doubled, &with_bit, bit);
        }
    }
    acc
}

/// `a * b + c`, computed via the underlying field's own multiply and add.
/// `Fp`/`Fq` multiplication already carry-propagates after every step (see
/// `field/fp.rs`'s module docs), so chaining `mul` then `add` here carries
/// no additional overflow risk — there's no separate wide-accumulator
/// trick to hand-write the way the teacher's `Scalar::from_mul_sum` does
/// for its fixed radix-2^21 representation.
pub(crate) fn muladd<F: Field>(a: &F, b: &F, c: &F) -> F {
    (*a * *b) + *c
}
