#![cfg(feature = "dev")]
//! Tests for fail-fast input and parameter validation.

use projscore::internals::engine::validator::Validator;
use projscore::internals::primitives::errors::ScoreError;
use projscore::internals::primitives::table::{OverlayColumn, OverlayTable, ReferenceTable};

fn reference_2x2() -> ReferenceTable<f64> {
    ReferenceTable::new(
        vec!["x".to_string(), "y".to_string()],
        vec![0.0, 0.0, 1.0, 1.0],
    )
    .unwrap()
}

fn overlay_2() -> OverlayTable<f64> {
    OverlayTable::new(vec![OverlayColumn::continuous("f", vec![1.0, 2.0])]).unwrap()
}

// ============================================================================
// Table Validation
// ============================================================================

#[test]
fn test_valid_tables_pass() {
    assert!(Validator::validate_tables(&reference_2x2(), &overlay_2()).is_ok());
}

#[test]
fn test_empty_reference_fails() {
    let reference =
        ReferenceTable::<f64>::new(vec!["x".to_string(), "y".to_string()], vec![]).unwrap();
    let err = Validator::validate_tables(&reference, &overlay_2()).unwrap_err();
    assert_eq!(err, ScoreError::EmptyInput);
}

#[test]
fn test_overlay_without_columns_fails() {
    let overlay = OverlayTable::<f64>::new(vec![]).unwrap();
    let err = Validator::validate_tables(&reference_2x2(), &overlay).unwrap_err();
    assert_eq!(err, ScoreError::EmptyInput);
}

#[test]
fn test_row_mismatch_fails() {
    let overlay =
        OverlayTable::new(vec![OverlayColumn::continuous("f", vec![1.0, 2.0, 3.0])]).unwrap();
    let err = Validator::validate_tables(&reference_2x2(), &overlay).unwrap_err();
    assert_eq!(
        err,
        ScoreError::MismatchedInputs {
            reference_rows: 2,
            overlay_rows: 3,
        }
    );
}

/// Non-finite reference coordinates are reported with their position.
#[test]
fn test_non_finite_reference_fails() {
    let reference = ReferenceTable::new(
        vec!["x".to_string(), "y".to_string()],
        vec![0.0, 0.0, 1.0, f64::INFINITY],
    )
    .unwrap();
    let err = Validator::validate_tables(&reference, &overlay_2()).unwrap_err();
    match err {
        ScoreError::InvalidNumericValue(msg) => {
            assert!(msg.contains("reference[1][1]"), "message was: {}", msg);
        }
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

/// Overlay NaNs are missing values, not validation errors.
#[test]
fn test_overlay_nan_is_allowed() {
    let overlay =
        OverlayTable::new(vec![OverlayColumn::continuous("f", vec![f64::NAN, 2.0])]).unwrap();
    assert!(Validator::validate_tables(&reference_2x2(), &overlay).is_ok());
}

// ============================================================================
// Column Resolution
// ============================================================================

#[test]
fn test_projection_columns_resolve() {
    let (x, y) =
        Validator::validate_projection_columns(&reference_2x2(), "x", "y").unwrap();
    assert_eq!((x, y), (0, 1));
}

#[test]
fn test_missing_x_column_fails() {
    let err = Validator::validate_projection_columns(&reference_2x2(), "missing", "y")
        .unwrap_err();
    assert_eq!(err, ScoreError::MissingColumn("missing".to_string()));
}

#[test]
fn test_missing_y_column_fails() {
    let err = Validator::validate_projection_columns(&reference_2x2(), "x", "missing")
        .unwrap_err();
    assert_eq!(err, ScoreError::MissingColumn("missing".to_string()));
}

// ============================================================================
// Parameter Validation
// ============================================================================

#[test]
fn test_sample_cap_bounds() {
    assert!(Validator::validate_sample_cap(1).is_ok());
    assert!(Validator::validate_sample_cap(1000).is_ok());
    assert_eq!(
        Validator::validate_sample_cap(0).unwrap_err(),
        ScoreError::InvalidSampleCap(0)
    );
}

#[test]
fn test_duplicate_parameter_detection() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("seed")).unwrap_err(),
        ScoreError::DuplicateParameter { parameter: "seed" }
    );
}
