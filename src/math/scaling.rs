//! Span normalization of overlay columns.
//!
//! ## Purpose
//!
//! This module rescales every overlay column independently into [0, 1]
//! before scoring, so that features with large raw magnitude cannot dominate
//! the squared-difference aggregation purely through scale.
//!
//! ## Design notes
//!
//! * **Span-Based**: Zero-based min-max: `v' = (v - min) / (max - min)`.
//! * **Missing-Aware**: Min and max are taken over finite cells only; NaN
//!   cells stay NaN and are resolved later by the skip-missing policy.
//! * **Degenerate Span**: A constant column (span zero) maps every finite
//!   cell to 0, which in turn yields an exact score of 0 for that feature.
//!
//! ## Invariants
//!
//! * After normalization every finite cell lies in [0, 1].
//! * Rescaling a column by a positive constant leaves its normalized form
//!   unchanged.
//!
//! ## Non-goals
//!
//! * This module does not decide which columns are scored (column roles live
//!   in `primitives::table`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Span Normalization
// ============================================================================

/// Rescale a column in place to [0, 1] over its finite span.
///
/// All-missing columns are left untouched; constant columns collapse to 0.
pub fn span_normalize<T: Float>(values: &mut [T]) {
    let mut min = T::infinity();
    let mut max = T::neg_infinity();
    for &v in values.iter() {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }

    // No finite cells: nothing to rescale.
    if !min.is_finite() || !max.is_finite() {
        return;
    }

    let span = max - min;
    if span <= T::zero() {
        for v in values.iter_mut() {
            if v.is_finite() {
                *v = T::zero();
            }
        }
        return;
    }

    for v in values.iter_mut() {
        if v.is_finite() {
            *v = (*v - min) / span;
        }
    }
}
