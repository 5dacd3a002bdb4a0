//! Input validation for scoring configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied before any scoring
//! work starts: table emptiness, row alignment, projection column lookup,
//! reference finiteness, and configuration bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the O(n·d)
//!   finiteness scan runs last.
//! * **Overlay NaNs Allowed**: Missing overlay cells are legal and resolved
//!   by the skip-missing policy; only reference coordinates must be finite.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair inputs.
//! * This module does not perform the scoring itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ScoreError;
use crate::primitives::table::{OverlayTable, ReferenceTable};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for scoring inputs and configuration.
///
/// All methods return `Result<_, ScoreError>` and fail fast on the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the reference/overlay pair for scoring.
    pub fn validate_tables<T: Float>(
        reference: &ReferenceTable<T>,
        overlay: &OverlayTable<T>,
    ) -> Result<(), ScoreError> {
        // Check 1: Non-empty tables
        if reference.n_rows() == 0 || overlay.n_rows() == 0 || overlay.n_cols() == 0 {
            return Err(ScoreError::EmptyInput);
        }

        // Check 2: Row alignment
        if reference.n_rows() != overlay.n_rows() {
            return Err(ScoreError::MismatchedInputs {
                reference_rows: reference.n_rows(),
                overlay_rows: overlay.n_rows(),
            });
        }

        // Check 3: All reference coordinates finite
        let d = reference.n_cols();
        for (i, &val) in reference.values().iter().enumerate() {
            if !val.is_finite() {
                return Err(ScoreError::InvalidNumericValue(format!(
                    "reference[{}][{}]={}",
                    i / d,
                    i % d,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Resolve the projection columns, failing if either is absent.
    pub fn validate_projection_columns<T: Copy>(
        reference: &ReferenceTable<T>,
        x_column: &str,
        y_column: &str,
    ) -> Result<(usize, usize), ScoreError> {
        let x = reference
            .column_index(x_column)
            .ok_or_else(|| ScoreError::MissingColumn(x_column.into()))?;
        let y = reference
            .column_index(y_column)
            .ok_or_else(|| ScoreError::MissingColumn(y_column.into()))?;
        Ok((x, y))
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the subsampling cap.
    pub fn validate_sample_cap(cap: usize) -> Result<(), ScoreError> {
        if cap == 0 {
            return Err(ScoreError::InvalidSampleCap(cap));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ScoreError> {
        if let Some(parameter) = duplicate_param {
            return Err(ScoreError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
