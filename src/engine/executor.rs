//! Execution engine for projection scoring.
//!
//! ## Purpose
//!
//! This module orchestrates one scoring pass: overlay normalization, row
//! subsampling, spatial index construction, per-point neighborhood
//! weighting, cell accumulation into the score matrix, and the per-feature
//! reduction that yields the final ranking.
//!
//! ## Design notes
//!
//! * **Leaf-First Pipeline**: Every numerical step lives in the math layer;
//!   the executor only sequences them and owns the scratch buffers.
//! * **Buffer Recycling**: The neighbor heap, neighborhood, planar-distance
//!   and weight buffers are allocated once and reused across the per-point
//!   loop.
//! * **Local Recovery**: A degenerate (zero-spread) distance vector downgrades
//!   that neighborhood to uniform weights; it never aborts the ranking.
//! * **Skip-Missing**: Missing overlay cells are excluded from cell means and
//!   excluded cells from feature means. A feature with no scoreable cells
//!   scores NaN. This is the crate's single NaN policy; no reduction default
//!   is inherited from a numerics backend.
//!
//! ## Key concepts
//!
//! * **ScoreMatrix**: Dense feature × point grid of local weighted mean
//!   squared differences, reduced to one mean per feature. Scoped to one
//!   invocation.
//!
//! ## Invariants
//!
//! * Inputs are already validated (see `engine::validator`).
//! * Cell and feature means are non-negative whenever they are finite.
//! * The per-point loop carries no shared mutable state between points; it
//!   is the natural seam for parallelism or cooperative cancellation should
//!   an embedder need one.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs or resolve column names.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BinaryHeap;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BinaryHeap;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::report::{FeatureScore, ScoreReport};
use crate::engine::sampler::{subsample_indices, DEFAULT_SAMPLE_CAP, DEFAULT_SEED};
use crate::math::accumulate::{weighted_sq_diff_mean_skip_missing, FloatAccum};
use crate::math::distance;
use crate::math::neighborhood::{neighborhood_size, KdTree, NeighborPolicy, Neighborhood};
use crate::math::scaling::span_normalize;
use crate::math::weights::{gaussian_weights, uniform_weights};
use crate::primitives::errors::ScoreError;
use crate::primitives::table::{OverlayTable, ReferenceTable};

// ============================================================================
// Configuration
// ============================================================================

/// Resolved scoring configuration, produced by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Subsampling cap; inputs with more rows are sampled down.
    pub sample_cap: usize,
    /// Seed for the subsampling draw.
    pub seed: u64,
    /// Self-match policy for neighborhood queries.
    pub neighbor_policy: NeighborPolicy,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            sample_cap: DEFAULT_SAMPLE_CAP,
            seed: DEFAULT_SEED,
            neighbor_policy: NeighborPolicy::default(),
        }
    }
}

// ============================================================================
// Score Matrix
// ============================================================================

/// Dense feature × point grid of per-cell scores.
///
/// Cells start as NaN, meaning "excluded"; the feature reduction averages
/// only the cells that were actually set.
#[derive(Debug, Clone)]
pub struct ScoreMatrix<T> {
    values: Vec<T>,
    n_points: usize,
}

impl<T: Float> ScoreMatrix<T> {
    /// Create a matrix with every cell excluded.
    pub fn new(n_features: usize, n_points: usize) -> Self {
        Self {
            values: vec![T::nan(); n_features * n_points],
            n_points,
        }
    }

    /// Set one cell.
    #[inline]
    pub fn set(&mut self, feature: usize, point: usize, value: T) {
        self.values[feature * self.n_points + point] = value;
    }

    /// Mean of a feature's included cells; NaN when every cell is excluded.
    pub fn feature_mean(&self, feature: usize) -> T {
        let row = &self.values[feature * self.n_points..(feature + 1) * self.n_points];
        let mut sum = T::zero();
        let mut count = 0usize;
        for &cell in row {
            if cell.is_finite() {
                sum = sum + cell;
                count += 1;
            }
        }
        if count == 0 {
            T::nan()
        } else {
            sum / T::from(count).unwrap()
        }
    }
}

// ============================================================================
// Working Columns
// ============================================================================

/// A normalized, row-aligned copy of one continuous overlay column.
struct WorkingColumn<T> {
    name: String,
    values: Vec<T>,
    has_missing: bool,
}

// ============================================================================
// Execution
// ============================================================================

/// Run one scoring pass over validated inputs.
///
/// `x_col`/`y_col` are resolved reference column positions. Returns one
/// entry per continuous overlay column, in original column order.
pub fn run<T: FloatAccum>(
    reference: &ReferenceTable<T>,
    x_col: usize,
    y_col: usize,
    overlay: &OverlayTable<T>,
    config: &ExecutionConfig,
) -> Result<ScoreReport<T>, ScoreError> {
    let n_total = reference.n_rows();
    let dims = reference.n_cols();

    // 1. Normalize every continuous overlay column over all rows.
    let mut working: Vec<WorkingColumn<T>> = Vec::new();
    for col in overlay.columns() {
        if !col.is_continuous() {
            continue;
        }
        let mut values = col.values().to_vec();
        span_normalize(&mut values);
        working.push(WorkingColumn {
            name: col.name().into(),
            values,
            has_missing: false,
        });
    }

    // 2. Subsample rows above the cap; overlay columns follow the same rows.
    let sample = subsample_indices(n_total, config.sample_cap, config.seed);
    let gathered;
    let matrix: &[T] = match &sample {
        Some(rows) => {
            for wc in working.iter_mut() {
                wc.values = rows.iter().map(|&i| wc.values[i]).collect();
            }
            gathered = reference.gather_rows(rows);
            &gathered
        }
        None => reference.values(),
    };
    for wc in working.iter_mut() {
        wc.has_missing = wc.values.iter().any(|v| !v.is_finite());
    }

    let n = matrix.len() / dims;

    // 3. Index over the full reference coordinate space.
    let tree = KdTree::build(matrix, dims)?;

    let k = neighborhood_size(n);
    let k_eff = match config.neighbor_policy {
        NeighborPolicy::ExcludeSelf => k.min(n.saturating_sub(1)),
        NeighborPolicy::IncludeSelf => k.min(n),
    };

    // Scratch state, recycled across the per-point loop.
    let mut heap: BinaryHeap<_> = BinaryHeap::with_capacity(k_eff);
    let mut nbh = Neighborhood::with_capacity(k_eff);
    let mut planar_d: Vec<T> = Vec::with_capacity(k_eff);
    let mut weights_buf: Vec<T> = Vec::with_capacity(k_eff);

    let mut cells = ScoreMatrix::new(working.len(), n);

    for i in 0..n {
        let row = &matrix[i * dims..(i + 1) * dims];

        if k_eff > 0 {
            // 4. Neighborhood query over all dimensions.
            let exclude = match config.neighbor_policy {
                NeighborPolicy::ExcludeSelf => Some(i),
                NeighborPolicy::IncludeSelf => None,
            };
            tree.find_k_nearest(row, k_eff, exclude, &mut heap, &mut nbh);

            // 5. Planar distances in the projection plane, then weights.
            planar_d.clear();
            let (xi, yi) = (row[x_col], row[y_col]);
            for &j in &nbh.indices {
                let xj = matrix[j * dims + x_col];
                let yj = matrix[j * dims + y_col];
                planar_d.push(distance::planar(xi, yi, xj, yj));
            }
            if gaussian_weights(&planar_d, &mut weights_buf).is_err() {
                // Zero distance spread: fall back to uniform weights.
                uniform_weights(nbh.len(), &mut weights_buf);
            }
        }

        // 6. One cell per feature.
        for (f, wc) in working.iter().enumerate() {
            let center = wc.values[i];
            if k_eff == 0 {
                // No neighbors (n == 1 under ExcludeSelf): no observable
                // local variation.
                if center.is_finite() {
                    cells.set(f, i, T::zero());
                }
                continue;
            }
            if wc.has_missing {
                if let Some(cell) = weighted_sq_diff_mean_skip_missing(
                    center,
                    &wc.values,
                    &nbh.indices,
                    &weights_buf,
                ) {
                    cells.set(f, i, cell);
                }
            } else {
                let cell =
                    T::weighted_sq_diff_mean(center, &wc.values, &nbh.indices, &weights_buf);
                cells.set(f, i, cell);
            }
        }
    }

    // 7. Reduce per feature and assemble in original column order.
    let scores = working
        .iter()
        .enumerate()
        .map(|(f, wc)| FeatureScore {
            name: wc.name.clone(),
            score: cells.feature_mean(f),
        })
        .collect();
    Ok(ScoreReport::new(scores))
}
