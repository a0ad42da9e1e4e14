//! Helios/Selene elliptic-curve cycle arithmetic for FCMP++.
//!
//! This crate implements the two short-Weierstrass curves
//!
//! ```text
//! Helios: y^2 = x^3 - 3x + b  over F_p,  p = 2^255 - 19,  group order q
//! Selene: y^2 = x^3 - 3x + b  over F_q,  q = 2^255 - gamma, group order p
//! ```
//!
//! forming a mutual 2-cycle: each curve's scalar field is the other's base
//! field. The crate is a stack of pure-function layers with no back-edges:
//!
//! ```text
//! divisor witness        (divisor)
//! polynomial arithmetic  (poly)
//! multi-scalar mul       (msm)
//! scalar multiplication  (curve::scalarmul)
//! serialization + SSWU   (curve::sswu, curve::mod::{to_bytes,from_bytes})
//! group law              (curve)
//! scalar fields           (scalar)
//! base fields             (field)
//! ```
//!
//! # Design goals
//!
//! - No heap allocation in the field/curve/scalar-mul/MSM layers.
//! - Explicit, auditable arithmetic: every reduction and carry step is
//!   written out rather than hidden behind generic bignum code.
//! - No randomness and no hashing inside the core: scalars come from
//!   caller-supplied bytes via wide reduction of a 64-byte value (see
//!   [`scalar`]'s module docs) or canonical 32-byte decoding. Hash-to-field/
//!   hash-to-curve callers own the hash.
//! - Safe for concurrent use from any number of threads: every public
//!   function is pure given its inputs and the tables published by
//!   [`init::init`].
//!
//! # Module overview
//!
//! - [`field`] — F_p and F_q limb arithmetic (layer 1).
//! - [`scalar`] — the two scalar fields, wide reduction, muladd (layer 2).
//! - [`curve`] — Jacobian/affine group law, compression, SSWU (layers 3-4).
//! - [`curve::scalarmul`] — constant-time and variable-time scalar
//!   multiplication, fixed-base tables (layer 5).
//! - [`msm`] — Straus, Pippenger, fixed-base MSM, Pedersen commitments
//!   (layer 6).
//! - [`poly`] — polynomial arithmetic over F_p/F_q, optional ECFFT (layer 7).
//! - [`divisor`] — EC-divisor witnesses, including the large-n
//!   evaluation-domain representation (layer 8).
//! - [`error`] — the decode/invert/divmod result types used throughout.
//! - [`init`] — the one-time, idempotent backend/table initialization entry
//!   point.

mod ct;

pub mod curve;
pub mod divisor;
pub mod error;
pub mod field;
pub mod init;
pub mod msm;
pub mod poly;
pub mod scalar;

pub use curve::helios::HeliosPoint;
pub use curve::selene::SelenePoint;
pub use error::DecodeError;
pub use field::fp::Fp;
pub use field::fq::Fq;
pub use scalar::helios::HeliosScalar;
pub use scalar::selene::SeleneScalar;
