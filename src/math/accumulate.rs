//! Specialized accumulators for the per-cell scoring loop.
//!
//! ## Purpose
//!
//! This module provides optimized scalar and SIMD accumulation for the hot
//! inner loop of scoring: the weighted mean squared difference between a
//! point's overlay value and its neighbors' values.
//!
//! ## Design notes
//!
//! * **Bridge Trait**: [`FloatAccum`] dispatches generic `Float` code to a
//!   per-type implementation: `f64` uses a `f64x2` SIMD kernel with a scalar
//!   tail, `f32` uses the scalar kernel.
//! * **Two Paths**: The trait path assumes every gathered value is finite and
//!   is used for columns without missing cells. Columns with missing cells go
//!   through the scalar skip-missing path, which excludes NaN neighbors from
//!   the mean and reports an empty cell as `None`.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// Bridge Trait
// ============================================================================

/// Float types with an optimized cell accumulator.
///
/// Implemented for `f32` (scalar) and `f64` (SIMD); this is the numeric
/// bound required by the scoring API.
pub trait FloatAccum: Float + 'static {
    /// Mean over neighbors of `w · (center − value)²`.
    ///
    /// Assumes all gathered values and weights are finite. Returns zero for
    /// an empty neighborhood.
    fn weighted_sq_diff_mean(
        center: Self,
        values: &[Self],
        indices: &[usize],
        weights: &[Self],
    ) -> Self;
}

impl FloatAccum for f32 {
    #[inline]
    fn weighted_sq_diff_mean(
        center: Self,
        values: &[Self],
        indices: &[usize],
        weights: &[Self],
    ) -> Self {
        weighted_sq_diff_mean_scalar(center, values, indices, weights)
    }
}

impl FloatAccum for f64 {
    #[inline]
    fn weighted_sq_diff_mean(
        center: Self,
        values: &[Self],
        indices: &[usize],
        weights: &[Self],
    ) -> Self {
        weighted_sq_diff_mean_simd(center, values, indices, weights)
    }
}

// ============================================================================
// Scalar Kernels
// ============================================================================

/// Scalar accumulation of the weighted mean squared difference.
pub fn weighted_sq_diff_mean_scalar<T: Float>(
    center: T,
    values: &[T],
    indices: &[usize],
    weights: &[T],
) -> T {
    let n = indices.len();
    if n == 0 {
        return T::zero();
    }

    let mut acc = T::zero();
    for (i, &idx) in indices.iter().enumerate() {
        let d = center - values[idx];
        acc = acc + weights[i] * d * d;
    }
    acc / T::from(n).unwrap()
}

/// Scalar accumulation excluding missing (non-finite) neighbor values.
///
/// Returns `None` when the center value is missing or no neighbor value is
/// finite; such cells are excluded from the feature aggregation entirely.
pub fn weighted_sq_diff_mean_skip_missing<T: Float>(
    center: T,
    values: &[T],
    indices: &[usize],
    weights: &[T],
) -> Option<T> {
    if !center.is_finite() {
        return None;
    }

    let mut acc = T::zero();
    let mut count = 0usize;
    for (i, &idx) in indices.iter().enumerate() {
        let v = values[idx];
        if v.is_finite() {
            let d = center - v;
            acc = acc + weights[i] * d * d;
            count += 1;
        }
    }

    if count == 0 {
        None
    } else {
        Some(acc / T::from(count).unwrap())
    }
}

// ============================================================================
// SIMD Kernel
// ============================================================================

/// SIMD accumulation of the weighted mean squared difference for `f64`.
pub fn weighted_sq_diff_mean_simd(
    center: f64,
    values: &[f64],
    indices: &[usize],
    weights: &[f64],
) -> f64 {
    let n = indices.len();
    if n == 0 {
        return 0.0;
    }

    let c = f64x2::splat(center);
    let mut s = f64x2::splat(0.0);
    let mut i = 0;

    // Process 2 elements at a time (f64x2), gathering by neighbor index.
    while i + 2 <= n {
        let v = f64x2::new([values[indices[i]], values[indices[i + 1]]]);
        let w = f64x2::new([weights[i], weights[i + 1]]);
        let d = c - v;
        s += w * d * d;
        i += 2;
    }

    let mut acc = s.reduce_add();

    // Tail
    for k in i..n {
        let d = center - values[indices[k]];
        acc += weights[k] * d * d;
    }

    acc / n as f64
}
