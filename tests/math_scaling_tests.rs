#![cfg(feature = "dev")]
//! Tests for span (min-max) normalization of overlay columns.

use approx::assert_relative_eq;

use projscore::internals::math::scaling::span_normalize;

// ============================================================================
// Basic Normalization
// ============================================================================

/// [0, 5, 10] spans 10, so the normalized column is [0, 0.5, 1].
#[test]
fn test_span_normalize_basic() {
    let mut values = vec![0.0, 5.0, 10.0];
    span_normalize(&mut values);
    assert_relative_eq!(values[0], 0.0);
    assert_relative_eq!(values[1], 0.5);
    assert_relative_eq!(values[2], 1.0);
}

/// Negative values shift to a zero-based range.
#[test]
fn test_span_normalize_negative_values() {
    // Min = -10, span = 20
    let mut values = vec![-10.0, 0.0, 10.0];
    span_normalize(&mut values);
    assert_relative_eq!(values[0], 0.0);
    assert_relative_eq!(values[1], 0.5);
    assert_relative_eq!(values[2], 1.0);
}

/// Normalized values always land in [0, 1].
#[test]
fn test_span_normalize_bounds() {
    let mut values = vec![3.7, -2.2, 8.1, 0.0, 5.5];
    span_normalize(&mut values);
    for &v in &values {
        assert!((0.0..=1.0).contains(&v));
    }
}

// ============================================================================
// Degenerate Columns
// ============================================================================

/// A constant column has zero span and collapses to 0.
#[test]
fn test_span_normalize_constant_column() {
    let mut values = vec![7.0, 7.0, 7.0];
    span_normalize(&mut values);
    assert_eq!(values, vec![0.0, 0.0, 0.0]);
}

/// A single value is a constant column.
#[test]
fn test_span_normalize_single_value() {
    let mut values = vec![42.0];
    span_normalize(&mut values);
    assert_eq!(values, vec![0.0]);
}

/// An all-missing column is left untouched.
#[test]
fn test_span_normalize_all_missing() {
    let mut values = vec![f64::NAN, f64::NAN];
    span_normalize(&mut values);
    assert!(values.iter().all(|v| v.is_nan()));
}

/// Missing cells stay missing; the span is taken over finite cells only.
#[test]
fn test_span_normalize_skips_missing_cells() {
    let mut values = vec![f64::NAN, 2.0, 4.0];
    span_normalize(&mut values);
    assert!(values[0].is_nan());
    assert_relative_eq!(values[1], 0.0);
    assert_relative_eq!(values[2], 1.0);
}

// ============================================================================
// Invariance
// ============================================================================

/// Positive rescaling is removed by span normalization.
#[test]
fn test_span_normalize_scale_invariance() {
    let mut a = vec![1.0, 2.0, 3.0, 5.0];
    let mut b: Vec<f64> = a.iter().map(|v| v * 1000.0).collect();
    span_normalize(&mut a);
    span_normalize(&mut b);
    for (&x, &y) in a.iter().zip(b.iter()) {
        assert_relative_eq!(x, y, max_relative = 1e-12);
    }
}
