//! Euclidean distance computation.
//!
//! ## Purpose
//!
//! This module provides the distance functions used by the spatial index
//! (full-dimensional) and the weighting stage (planar, over the two
//! projection columns only).
//!
//! ## Design notes
//!
//! * **Squared First**: The index compares squared distances and takes a
//!   single square root when results are handed back.
//! * **Fixed Metric**: Neighborhoods are always Euclidean; there is no
//!   metric parameter.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is zero if and only if points are identical.
//!
//! ## Non-goals
//!
//! * This module does not handle distance-to-weight transforms (see
//!   `math::weights`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Distance Functions
// ============================================================================

/// Squared Euclidean distance between two nD points.
#[inline]
pub fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| {
            let diff = ai - bi;
            diff * diff
        })
        .fold(T::zero(), |acc, x| acc + x)
}

/// Euclidean distance between two nD points: √(Σ(aᵢ - bᵢ)²)
#[inline]
pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    squared_euclidean(a, b).sqrt()
}

/// Euclidean distance between two points in the (x, y) projection plane.
#[inline]
pub fn planar<T: Float>(ax: T, ay: T, bx: T, by: T) -> T {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}
