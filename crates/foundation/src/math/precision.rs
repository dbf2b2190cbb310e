//! Precision policies.
//!
//! Chart and map geometry is computed in `f64`. This module provides:
//! - A deterministic float ordering (`stable_total_cmp_f64`) for nearest-marker ties.
//! - A tolerance comparison (`approx_eq_f64`) for checking geometric sums.

use core::cmp::Ordering;

/// Default absolute tolerance for pixel-space comparisons.
pub const PIXEL_EPSILON: f64 = 1e-9;

/// Canonicalize a floating-point value for deterministic ordering.
///
/// Rules:
/// - `-0.0` becomes `0.0`
/// - all NaNs become a single canonical NaN
pub fn canonical_f64(v: f64) -> f64 {
    if v == 0.0 {
        // Handles +0.0 and -0.0.
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

/// Deterministic total ordering for floats.
///
/// Prefer this any time you sort floats or use them in ordered keys.
pub fn stable_total_cmp_f64(a: f64, b: f64) -> Ordering {
    canonical_f64(a).total_cmp(&canonical_f64(b))
}

/// Absolute-or-relative tolerance comparison.
pub fn approx_eq_f64(a: f64, b: f64, eps: f64) -> bool {
    let diff = (a - b).abs();
    diff <= eps || diff <= eps * a.abs().max(b.abs())
}
