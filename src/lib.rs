//! # projscore — Projection Relevance Scoring for Rust
//!
//! Given a set of points laid out in a low-dimensional projection (for
//! example a 2D t-SNE or MDS embedding) and a separate table of overlay
//! features describing the same points, this crate ranks the overlay
//! features by how smoothly each one varies across the local neighborhood
//! structure induced by the projection.
//!
//! ## What does the score mean?
//!
//! For every point, the scorer finds its k nearest neighbors in the full
//! reference coordinate space, weights them by their closeness in the
//! (x, y) projection plane with a Gaussian decay, and averages the weighted
//! squared differences of the feature's (span-normalized) values across the
//! neighborhood. The feature score is the mean of these local values over
//! all points:
//!
//! - **Low score**: the feature is nearly constant within projection-local
//!   neighborhoods, so the visible cluster structure correlates with it.
//! - **High score**: the feature jumps between neighboring points; the
//!   projection does not explain it.
//!
//! The intended use is exploratory data analysis: given a scatterplot of
//! entities (countries, samples, cells), ask which auxiliary variables best
//! explain the clustering you can see.
//!
//! ## Quick Start
//!
//! ```rust
//! use projscore::prelude::*;
//!
//! // Four points in two tight pairs; the overlay feature is constant
//! // within each pair, so it tracks the projection closely.
//! let reference = ReferenceTable::new(
//!     vec!["x".to_string(), "y".to_string()],
//!     vec![0.0, 0.0, 0.0, 1.0, 10.0, 10.0, 10.0, 11.0],
//! )?;
//! let overlay = OverlayTable::new(vec![
//!     OverlayColumn::continuous("wealth", vec![1.0, 1.0, 5.0, 5.0]),
//!     OverlayColumn::continuous("noise", vec![0.0, 1.0, 0.0, 1.0]),
//! ])?;
//!
//! let report = score_projections(&reference, "x", "y", &overlay)?;
//!
//! // One entry per continuous overlay column, in column order.
//! assert_eq!(report.len(), 2);
//! for entry in report.scores() {
//!     println!("{}: {:.4}", entry.name, entry.score);
//! }
//!
//! // The ranked view puts the smoothest (best-explained) feature first.
//! assert_eq!(report.ranked()[0].name, "wealth");
//! # Result::<(), ScoreError>::Ok(())
//! ```
//!
//! ### Configured Use
//!
//! ```rust
//! use projscore::prelude::*;
//! # let reference = ReferenceTable::new(
//! #     vec!["x".to_string(), "y".to_string()],
//! #     vec![0.0, 0.0, 0.0, 1.0, 10.0, 10.0, 10.0, 11.0],
//! # )?;
//! # let overlay = OverlayTable::new(vec![
//! #     OverlayColumn::continuous("wealth", vec![1.0, 1.0, 5.0, 5.0]),
//! # ])?;
//!
//! let scorer = Scorer::new()
//!     .sample_cap(500)                                // Subsample above 500 rows
//!     .seed(42)                                       // Reproducible sampling
//!     .neighbor_policy(NeighborPolicy::IncludeSelf)   // Retain self-matches
//!     .build()?;
//!
//! let report = scorer.score(&reference, "x", "y", &overlay)?;
//! println!("{}", report);
//! # Result::<(), ScoreError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter           | Default       | Description                                        |
//! |---------------------|---------------|----------------------------------------------------|
//! | **sample_cap**      | 1000          | Row cap; larger inputs are subsampled once per call |
//! | **seed**            | fixed constant| Seed for the subsampling draw                      |
//! | **neighbor_policy** | `ExcludeSelf` | Whether a point may be its own nearest neighbor    |
//!
//! The neighborhood size is not a parameter: k = round(√n) with a floor of
//! 1, tying neighborhood size to dataset size.
//!
//! ## Behavior Notes
//!
//! * **Normalization**: every overlay column is independently rescaled to
//!   [0, 1] over its finite span before scoring, so feature magnitude does
//!   not influence the ranking.
//! * **Missing values**: overlay cells may be NaN and are skipped (see
//!   [`ProjectionScorer::score`](prelude::ProjectionScorer::score) for the
//!   exact policy). Reference coordinates must be finite.
//! * **Determinism**: identical inputs and configuration produce identical
//!   output, including the subsampling draw.
//! * **Errors**: malformed inputs fail with a typed
//!   [`ScoreError`](prelude::ScoreError); no partial ranking is returned.
//!
//! ## References
//!
//! - Cleveland, W. S. & Devlin, S. J. (1988). "Locally Weighted Regression:
//!   An Approach to Regression Analysis by Local Fitting" (local weighted
//!   neighborhoods)
//! - Leban, G. et al. (2006). "VizRank: Data Visualization Guided by Machine
//!   Learning" (ranking features against projections)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and error types.
//
// Contains the crate error enum and the reference/overlay table types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains distance functions, summary statistics, span normalization,
// Gaussian distance-decay weighting, cell accumulators, and the k-d tree.
mod math;

// Layer 3: Engine - orchestration and execution control.
//
// Contains input validation, seeded subsampling, the scoring pipeline, and
// result assembly.
mod engine;

// High-level fluent API for projection scoring.
//
// Provides the `ScorerBuilder` for configuring and running scoring passes.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard projscore prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use projscore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        score_projections, ColumnKind, FeatureScore, FloatAccum, NeighborPolicy, OverlayColumn,
        OverlayTable, ProjectionScorer, ReferenceTable, ScoreError, ScoreReport,
        ScorerBuilder as Scorer,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and errors.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
