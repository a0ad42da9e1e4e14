//! Simplified Shallue–van de Woestijne–Ulas (SSWU) map-to-curve (spec
//! §4.7), specialized to `A = -3` the way every curve in this crate is.
//! No teacher equivalent exists (Ed25519 hashes to curve via Elligator2,
//! a Montgomery/Edwards-specific map); this follows the direct
//! (isogeny-free) SSWU construction, valid here because both curves have
//! non-zero `b` and non-zero `A`.

use crate::curve::{rhs, Affine, CurveConstants, Jacobian};
use crate::field::Field;

/// `x` if `x != 0`, else `0` — the "inverse of zero is zero" convention
/// SSWU's formula relies on to stay branch-free on the exceptional input.
fn inv0<F: Field>(x: F) -> F {
    x.invert().unwrap_or(F::ZERO)
}

/// The sign convention used to pick between `y` and `-y`: the low bit of
/// the canonical encoding, same convention [`crate::curve::to_bytes`]
/// uses for point-compression parity.
fn sign<F: Field>(x: F) -> u8 {
    x.to_bytes()[0] & 1
}

/// Maps one field element to a point on the curve. Deterministic; never
/// returns an exceptional (identity) result for well-formed input, since
/// every step has a defined fallback (`inv0`, the `e1`/`e2` selects).
pub fn map_to_curve<C: CurveConstants>(u: C::F) -> Affine<C::F> {
    let z = C::sswu_z();
    let b = C::B;
    let three_inv = (C::F::ONE + C::F::ONE + C::F::ONE)
        .invert()
        .expect("3 is invertible in a field of this size");
    let c1 = b * three_inv; // c1 = -b/A = -b/(-3) = b/3

    let tv1 = z * u.square();
    let tv2 = tv1.square();
    let sum = tv1 + tv2;
    let mut x1 = inv0(sum);
    let e1 = sum.is_zero();
    x1 = x1 + C::F::ONE;
    let neg_z_inv = -inv0(z);
    x1 = C::F::conditional_select(&x1, &neg_z_inv, e1 as u8);
    x1 = x1 * c1;

    let gx1 = rhs(x1, b);
    let x2 = tv1 * x1;
    let tv1_cubed = tv1 * tv2;
    let gx2 = gx1 * tv1_cubed;

    // Exactly one of gx1, gx2 is a quadratic residue (the SSWU
    // correctness property); pick whichever is and its root.
    let (x, y) = match gx1.sqrt() {
        Some(y1) => (x1, y1),
        None => {
            let y2 = gx2
                .sqrt()
                .expect("SSWU guarantees gx2 is a QR when gx1 isn't");
            (x2, y2)
        }
    };

    let y = if sign(u) == sign(y) { y } else { -y };
    Affine { x, y }
}

/// `map_to_curve(u0) + map_to_curve(u1)`, the standard two-field-element
/// hash-to-curve construction (spec §4.7), via the complete `Add` that
/// wraps the incomplete Jacobian addition.
pub fn map_to_curve2<C: CurveConstants>(u0: C::F, u1: C::F) -> Jacobian<C::F> {
    let p0 = Jacobian::from_affine(map_to_curve::<C>(u0));
    let p1 = Jacobian::from_affine(map_to_curve::<C>(u1));
    p0 + p1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::helios::HeliosParams;
    use crate::curve::is_on_curve;
    use crate::field::fp::Fp;

    #[test]
    fn map_to_curve_lands_on_curve() {
        for v in [1u64, 2, 3, 42, 9999] {
            let u = Fp::from_u64(v);
            let p = map_to_curve::<HeliosParams>(u);
            assert!(is_on_curve(p, HeliosParams::B), "failed for u = {v}");
        }
    }

    #[test]
    fn map_to_curve_is_deterministic() {
        let u = Fp::from_u64(777);
        assert_eq!(
            map_to_curve::<HeliosParams>(u),
            map_to_curve::<HeliosParams>(u)
        );
    }

    #[test]
    fn map_to_curve2_is_on_curve() {
        let u0 = Fp::from_u64(5);
        let u1 = Fp::from_u64(6);
        let p = map_to_curve2::<HeliosParams>(u0, u1);
        let affine = p.to_affine();
        assert!(is_on_curve(affine, HeliosParams::B));
    }
}
