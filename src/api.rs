//! High-level API for projection scoring.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a scorer, the scorer itself, and a one-call
//! convenience function with default configuration.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called;
//!   data is validated at the start of every `.score()` call.
//! * **Type-Safe**: Scoring is generic over [`FloatAccum`] floats (`f32`,
//!   `f64`).
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `ScorerBuilder::new()` → chained setters →
//!   `.build()` → `ProjectionScorer::score(...)`.
//! * **Duplicate Tracking**: Setting the same parameter twice is an error
//!   surfaced at build time.

// Internal dependencies
use crate::engine::executor::{self, ExecutionConfig};
use crate::engine::sampler::{DEFAULT_SAMPLE_CAP, DEFAULT_SEED};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::report::{FeatureScore, ScoreReport};
pub use crate::math::accumulate::FloatAccum;
pub use crate::math::neighborhood::NeighborPolicy;
pub use crate::primitives::errors::ScoreError;
pub use crate::primitives::table::{ColumnKind, OverlayColumn, OverlayTable, ReferenceTable};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`ProjectionScorer`].
#[derive(Debug, Clone, Default)]
pub struct ScorerBuilder {
    /// Subsampling cap (default: 1000 rows).
    pub sample_cap: Option<usize>,

    /// Subsampling seed (default: a fixed documented constant, so results
    /// are reproducible without configuration).
    pub seed: Option<u64>,

    /// Self-match policy for neighborhood queries (default: `ExcludeSelf`).
    pub neighbor_policy: Option<NeighborPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ScorerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subsampling cap. Inputs with more rows than this are sampled
    /// down (without replacement) before scoring. Must be at least 1.
    pub fn sample_cap(mut self, cap: usize) -> Self {
        if self.sample_cap.is_some() {
            self.duplicate_param = Some("sample_cap");
        }
        self.sample_cap = Some(cap);
        self
    }

    /// Set the subsampling seed. The same seed always draws the same sample.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the self-match policy for neighborhood queries.
    pub fn neighbor_policy(mut self, policy: NeighborPolicy) -> Self {
        if self.neighbor_policy.is_some() {
            self.duplicate_param = Some("neighbor_policy");
        }
        self.neighbor_policy = Some(policy);
        self
    }

    /// Validate the configuration and build the scorer.
    pub fn build(self) -> Result<ProjectionScorer, ScoreError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let sample_cap = self.sample_cap.unwrap_or(DEFAULT_SAMPLE_CAP);
        Validator::validate_sample_cap(sample_cap)?;

        Ok(ProjectionScorer {
            config: ExecutionConfig {
                sample_cap,
                seed: self.seed.unwrap_or(DEFAULT_SEED),
                neighbor_policy: self.neighbor_policy.unwrap_or_default(),
            },
        })
    }
}

// ============================================================================
// Scorer
// ============================================================================

/// A configured projection scorer.
#[derive(Debug, Clone)]
pub struct ProjectionScorer {
    config: ExecutionConfig,
}

impl ProjectionScorer {
    /// Score every continuous overlay feature against the projection.
    ///
    /// `x_column` and `y_column` name the two reference columns spanning the
    /// projection plane. Returns one entry per continuous overlay column, in
    /// the overlay's original column order; lower scores mean the feature is
    /// smoother over the projection.
    ///
    /// # Missing values
    ///
    /// Overlay cells may be NaN. Missing cells are skipped: they leave the
    /// cell means they would have entered, and cells without any usable
    /// value are excluded from the feature mean. A feature with no usable
    /// cells at all scores NaN, the only NaN this method can return.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-input [`ScoreError`] on empty tables, row-count
    /// mismatch, missing projection columns, or non-finite reference
    /// coordinates.
    pub fn score<T: FloatAccum>(
        &self,
        reference: &ReferenceTable<T>,
        x_column: &str,
        y_column: &str,
        overlay: &OverlayTable<T>,
    ) -> Result<ScoreReport<T>, ScoreError> {
        Validator::validate_tables(reference, overlay)?;
        let (x_col, y_col) =
            Validator::validate_projection_columns(reference, x_column, y_column)?;
        executor::run(reference, x_col, y_col, overlay, &self.config)
    }
}

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Score a projection with the default configuration.
///
/// Equivalent to `ScorerBuilder::new().build()?.score(...)`; see
/// [`ProjectionScorer::score`] for semantics.
pub fn score_projections<T: FloatAccum>(
    reference: &ReferenceTable<T>,
    x_column: &str,
    y_column: &str,
    overlay: &OverlayTable<T>,
) -> Result<ScoreReport<T>, ScoreError> {
    ScorerBuilder::new()
        .build()?
        .score(reference, x_column, y_column, overlay)
}
