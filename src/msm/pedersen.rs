//! Pedersen commitment (spec §4.6): `r*H + Sigma values[i]*generators[i]`,
//! a named wrapper around [`crate::msm::msm`] over the combined
//! `(n+1)`-length array (`H` first, then the value generators). Hiding
//! and additively homomorphic in both the blinding and the values, same
//! as every Pedersen commitment in the teacher's domain (Monero-style
//! amount/blinding commitments), just generalized here to n values.

use crate::curve::Jacobian;
use crate::field::Field;

pub fn pedersen<F: Field>(
    r: &[u8; 32],
    h: &Jacobian<F>,
    values: &[[u8; 32]],
    generators: &[Jacobian<F>],
) -> Jacobian<F> {
    assert_eq!(
        values.len(),
        generators.len(),
        "pedersen: values and generators must have the same length"
    );
    let mut scalars = Vec::with_capacity(values.len() + 1);
    scalars.push(*r);
    scalars.extend_from_slice(values);
    let mut points = Vec::with_capacity(generators.len() + 1);
    points.push(*h);
    points.extend_from_slice(generators);
    crate::msm::msm(&scalars, &points)
}
