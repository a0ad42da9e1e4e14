//! Process-wide generator window tables (spec §3.5, §5 "Shared-resource
//! policy"): `{1*G, 2*G, ..., 16*G}` for each curve, built once and reused
//! by every fixed-base scalar multiplication. Built lazily behind a
//! [`OnceLock`] so any thread calling a fixed-base routine before
//! [`crate::init::init`] still observes a fully published table (the
//! `Once` in `init.rs` wraps this module's [`build`] purely so a caller
//! who wants the cost paid at a predictable point can force it early).

use std::sync::OnceLock;

use crate::curve::helios::{HeliosParams, HeliosPoint};
use crate::curve::selene::{SeleneParams, SelenePoint};
use crate::curve::{rhs, Affine, CurveConstants, Jacobian};
use crate::field::fp::Fp;
use crate::field::fq::Fq;
use crate::field::Field;

static HELIOS_TABLE: OnceLock<[Affine<Fp>; 16]> = OnceLock::new();
static SELENE_TABLE: OnceLock<[Affine<Fq>; 16]> = OnceLock::new();

/// Builds both curves' tables if they haven't been built yet. Idempotent.
pub fn build() {
    helios_table();
    selene_table();
}

/// The smallest-x point on the curve: not the real Helios/Selene
/// generator (not present anywhere in the retrieved corpus — see
/// DESIGN.md), but a fixed, deterministic, self-consistent base point
/// every algorithm in this crate can be exercised against.
fn find_generator<F: Field>(b: F) -> Affine<F> {
    let mut x = F::ONE;
    loop {
        let t = rhs(x, b);
        if let Some(y) = t.sqrt() {
            // canonicalize on the even root, matching the "callers
            // canonicalize" note in spec §4.1.
            let y = if y.to_bytes()[0] & 1 == 0 { y } else { -y };
            return Affine { x, y };
        }
        x = x + F::ONE;
    }
}

fn build_window<F: Field>(b: F) -> [Affine<F>; 16] {
    let g = find_generator(b);
    let mut jacobian = [Jacobian::from_affine(g); 16];
    for i in 1..16 {
        jacobian[i] = jacobian[i - 1] + Jacobian::from_affine(g);
    }
    let affine = Jacobian::batch_to_affine(&jacobian);
    let mut out = [g; 16];
    out.copy_from_slice(&affine);
    out
}

fn helios_table() -> &'static [Affine<Fp>; 16] {
    HELIOS_TABLE.get_or_init(|| build_window(HeliosParams::B))
}

fn selene_table() -> &'static [Affine<Fq>; 16] {
    SELENE_TABLE.get_or_init(|| build_window(SeleneParams::B))
}

pub(crate) fn helios_generator() -> Affine<Fp> {
    helios_table()[0]
}

pub(crate) fn selene_generator() -> Affine<Fq> {
    selene_table()[0]
}

/// `{1*P, ..., 16*P}` for an arbitrary base `P`, used by
/// `scalarmult_fixed_precompute` (spec §4.5.3) — unlike the generator
/// tables above, this is computed fresh per call, not cached.
pub fn fixed_base_precompute<F: Field>(p: Jacobian<F>) -> [Affine<F>; 16] {
    let mut jacobian = [p; 16];
    for i in 1..16 {
        jacobian[i] = jacobian[i - 1] + p;
    }
    let affine = Jacobian::batch_to_affine(&jacobian);
    let mut out = [affine[0]; 16];
    out.copy_from_slice(&affine);
    out
}

pub fn helios_generator_point() -> HeliosPoint {
    HeliosPoint(Jacobian::from_affine(helios_generator()))
}

pub fn selene_generator_point() -> SelenePoint {
    SelenePoint(Jacobian::from_affine(selene_generator()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helios_table_entry_zero_is_generator() {
        let table = helios_table();
        assert_eq!(table[0], helios_generator());
    }

    #[test]
    fn helios_table_is_consecutive_multiples() {
        let table = helios_table();
        let g = Jacobian::from_affine(table[0]);
        let mut acc = g;
        for entry in table.iter().skip(1) {
            acc = acc + g;
            assert_eq!(Jacobian::from_affine(*entry), acc);
        }
    }
}
