#![cfg(feature = "dev")]

use projscore::internals::primitives::errors::ScoreError;

#[test]
fn test_score_error_display() {
    // EmptyInput
    let err = ScoreError::EmptyInput;
    assert_eq!(format!("{}", err), "Input tables are empty");

    // MismatchedInputs
    let err = ScoreError::MismatchedInputs {
        reference_rows: 10,
        overlay_rows: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Row mismatch: reference has 10 rows, overlay has 5"
    );

    // MissingColumn
    let err = ScoreError::MissingColumn("tsne_x".to_string());
    assert_eq!(format!("{}", err), "Missing projection column: 'tsne_x'");

    // InvalidNumericValue
    let err = ScoreError::InvalidNumericValue("reference[0][1]=NaN".to_string());
    assert_eq!(
        format!("{}", err),
        "Invalid numeric value: reference[0][1]=NaN"
    );

    // InvalidShape
    let err = ScoreError::InvalidShape {
        values_len: 5,
        n_cols: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid table shape: 5 values cannot fill rows of 2 columns"
    );

    // RaggedColumns
    let err = ScoreError::RaggedColumns {
        column: "gdp".to_string(),
        got: 3,
        expected: 4,
    };
    assert_eq!(format!("{}", err), "Column 'gdp' has 3 rows, expected 4");

    // InvalidSampleCap
    let err = ScoreError::InvalidSampleCap(0);
    assert_eq!(
        format!("{}", err),
        "Invalid sample_cap: 0 (must be at least 1)"
    );

    // DuplicateParameter
    let err = ScoreError::DuplicateParameter { parameter: "seed" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'seed' was set multiple times. Each parameter can only be configured once."
    );

    // DegenerateDistanceSpread
    let err = ScoreError::DegenerateDistanceSpread;
    assert_eq!(
        format!("{}", err),
        "Degenerate neighborhood: zero distance spread"
    );
}

#[test]
fn test_score_error_properties() {
    let err1 = ScoreError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, ScoreError::DegenerateDistanceSpread);
}

#[cfg(feature = "std")]
#[test]
fn test_score_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<ScoreError>();
}
