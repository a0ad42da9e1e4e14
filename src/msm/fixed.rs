//! Fixed-base MSM (spec §4.6): thin re-export of
//! [`crate::msm::msm_fixed`] kept in its own module so the backend split
//! mirrors [`crate::msm::straus`]/[`crate::msm::pippenger`] — there's only
//! one fixed-base strategy (per-point 16-entry table, same ladder as
//! [`crate::curve::scalarmul::scalar_mul_fixed`]), so there's nothing
//! else to choose between.

pub use crate::msm::msm_fixed;
