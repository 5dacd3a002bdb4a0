#![cfg(feature = "dev")]
//! Tests for the score matrix and execution configuration.

use approx::assert_relative_eq;

use projscore::internals::engine::executor::{ExecutionConfig, ScoreMatrix};
use projscore::internals::engine::sampler::{DEFAULT_SAMPLE_CAP, DEFAULT_SEED};
use projscore::internals::math::neighborhood::NeighborPolicy;

// ============================================================================
// Score Matrix
// ============================================================================

/// Cells start excluded; a fully excluded feature reduces to NaN.
#[test]
fn test_score_matrix_starts_excluded() {
    let matrix = ScoreMatrix::<f64>::new(2, 3);
    assert!(matrix.feature_mean(0).is_nan());
    assert!(matrix.feature_mean(1).is_nan());
}

/// The feature mean averages only the cells that were set.
#[test]
fn test_score_matrix_means_included_cells_only() {
    let mut matrix = ScoreMatrix::<f64>::new(1, 4);
    matrix.set(0, 0, 1.0);
    matrix.set(0, 2, 3.0);
    // Points 1 and 3 stay excluded.
    assert_relative_eq!(matrix.feature_mean(0), 2.0);
}

/// Features reduce independently.
#[test]
fn test_score_matrix_features_are_independent() {
    let mut matrix = ScoreMatrix::<f64>::new(2, 2);
    matrix.set(0, 0, 4.0);
    matrix.set(0, 1, 6.0);
    matrix.set(1, 0, 0.5);

    assert_relative_eq!(matrix.feature_mean(0), 5.0);
    assert_relative_eq!(matrix.feature_mean(1), 0.5);
}

// ============================================================================
// Configuration Defaults
// ============================================================================

#[test]
fn test_execution_config_defaults() {
    let config = ExecutionConfig::default();
    assert_eq!(config.sample_cap, DEFAULT_SAMPLE_CAP);
    assert_eq!(config.seed, DEFAULT_SEED);
    assert_eq!(config.neighbor_policy, NeighborPolicy::ExcludeSelf);
}
