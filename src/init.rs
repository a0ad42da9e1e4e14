//! One-time, idempotent initialization.
//!
//! Every public scalar-multiplication and MSM routine reads precomputed
//! generator window tables ([`crate::curve::tables`]). Those tables are
//! built lazily the first time they're needed, guarded by a [`Once`] so
//! concurrent callers from any number of threads observe either "not yet
//! built" or "fully built" and never a half-built table. Calling
//! [`init`] explicitly is optional: it exists so a caller who cares about
//! paying the table-construction cost at a predictable point (startup,
//! rather than on the first signature) can do so.

use std::sync::Once;

use crate::curve::tables;

static INIT: Once = Once::new();

/// Builds the generator window tables if they have not been built yet.
/// Safe to call from any thread, any number of times; only the first
/// call does any work, and every caller that returns has the guarantee
/// that the tables are fully built before it returns.
pub fn init() {
    INIT.call_once(|| {
        tables::build();
    });
}

/// With the `autotune` feature enabled, benchmarks the available
/// scalar-multiplication and MSM backends and nothing else: this crate
/// implements only the portable backend described in the spec, so there
/// is nothing to select between yet. `autotune` still calls [`init`] so
/// that the one-time table construction has already happened before a
/// caller starts timing anything.
#[cfg(feature = "autotune")]
pub fn autotune() {
    init();
}
