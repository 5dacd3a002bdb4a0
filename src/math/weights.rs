//! Gaussian distance-decay weighting.
//!
//! ## Purpose
//!
//! This module converts a neighborhood's planar distance vector into a
//! weight vector: close neighbors in the projection plane receive weights
//! near 1, distant neighbors decay toward 0. Decay is governed by the local
//! distance spread, so tightly clustered neighborhoods produce sharper
//! weighting than diffuse ones.
//!
//! ## Design notes
//!
//! * **Formula**: `w = exp(-(d / σ)² / 2)` with σ the population standard
//!   deviation of the distance vector itself.
//! * **Degenerate Spread**: σ = 0 (all neighbors equidistant, e.g. k = 1)
//!   makes the normalization undefined; the transform reports
//!   [`ScoreError::DegenerateDistanceSpread`] and the caller falls back to
//!   uniform weights rather than aborting the ranking.
//!
//! ## Invariants
//!
//! * Weights lie in (0, 1]; a zero distance maps to weight 1.
//!
//! ## Non-goals
//!
//! * This module does not choose the fallback policy; the engine owns the
//!   recovery.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::population_std;
use crate::primitives::errors::ScoreError;

// ============================================================================
// Weight Transform
// ============================================================================

/// Fill `out` with Gaussian decay weights for the given distance vector.
///
/// Fails with [`ScoreError::DegenerateDistanceSpread`] when the distances
/// have zero (or non-finite) spread; the caller is expected to recover with
/// [`uniform_weights`].
pub fn gaussian_weights<T: Float>(
    distances: &[T],
    out: &mut Vec<T>,
) -> Result<(), ScoreError> {
    out.clear();

    let sigma = population_std(distances);
    if !sigma.is_finite() || sigma <= T::zero() {
        return Err(ScoreError::DegenerateDistanceSpread);
    }

    let half = T::from(0.5).unwrap();
    for &d in distances {
        let z = d / sigma;
        out.push((-(z * z) * half).exp());
    }
    Ok(())
}

/// Fill `out` with `k` uniform weights of 1.
///
/// The degenerate-spread fallback: with no usable spread, every neighbor
/// counts equally and the cell reduces to an unweighted mean squared
/// difference.
pub fn uniform_weights<T: Float>(k: usize, out: &mut Vec<T>) {
    out.clear();
    out.resize(k, T::one());
}
