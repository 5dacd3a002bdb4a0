//! Mean and spread estimation for neighborhood distance vectors.
//!
//! ## Purpose
//!
//! This module provides the two summary statistics the weighting stage
//! needs: the arithmetic mean and the population standard deviation of a
//! neighborhood's distance vector.
//!
//! ## Design notes
//!
//! * **Population σ**: Spread is the population standard deviation (divide
//!   by n, not n − 1); a neighborhood is the whole population of interest.
//! * **Empty Inputs**: Both statistics are zero for empty slices, so the
//!   degenerate-spread guard upstream fires instead of a panic.
//!
//! ## Invariants
//!
//! * `population_std >= 0` for any input.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite values (NaN/Inf); distance
//!   vectors are finite by construction.

// External dependencies
use num_traits::Float;

// ============================================================================
// Statistics
// ============================================================================

/// Arithmetic mean of a slice. Zero for an empty slice.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap()
}

/// Population standard deviation of a slice. Zero for an empty slice.
///
/// # Formula
///
/// ```text
/// σ = sqrt( Σ(vᵢ - mean)² / n )
/// ```
#[inline]
pub fn population_std<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let m = mean(values);
    let sum_sq = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    (sum_sq / T::from(values.len()).unwrap()).sqrt()
}
