//! Error types for projection scoring.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate. Variants split into two classes: malformed
//! inputs, which are propagated to the caller immediately, and degenerate
//! numerical configurations, which the engine recovers from locally.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Input errors abort scoring; no partial ranking is returned.
//! * **Recoverable Degeneracy**: `DegenerateDistanceSpread` is raised by the
//!   weight transform and caught by the executor, which substitutes uniform
//!   weights. It never escapes the public API.
//! * **no_std**: Formatting uses `core::fmt`; `std::error::Error` is
//!   implemented only with the `std` feature.
//!
//! ## Invariants
//!
//! * Every variant carries enough context to identify the offending input.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors that can occur while building tables or scoring a projection.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// Reference or overlay table has no rows (or the overlay has no columns).
    EmptyInput,

    /// Reference and overlay row counts disagree.
    MismatchedInputs {
        /// Number of rows in the reference table.
        reference_rows: usize,
        /// Number of rows in the overlay table.
        overlay_rows: usize,
    },

    /// A requested projection column does not exist in the reference table.
    MissingColumn(String),

    /// A non-finite value (NaN or infinity) was found where one is not allowed.
    InvalidNumericValue(String),

    /// Flattened table data cannot be divided into rows of the declared width.
    InvalidShape {
        /// Length of the flattened value buffer.
        values_len: usize,
        /// Declared number of columns.
        n_cols: usize,
    },

    /// Overlay columns have differing lengths.
    RaggedColumns {
        /// Name of the offending column.
        column: String,
        /// Its length.
        got: usize,
        /// Length of the first column.
        expected: usize,
    },

    /// Subsampling cap below the minimum of 1.
    InvalidSampleCap(usize),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },

    /// A neighborhood's distance vector has zero spread, so Gaussian
    /// weighting is undefined. Recovered internally with uniform weights.
    DegenerateDistanceSpread,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::EmptyInput => write!(f, "Input tables are empty"),
            ScoreError::MismatchedInputs {
                reference_rows,
                overlay_rows,
            } => write!(
                f,
                "Row mismatch: reference has {} rows, overlay has {}",
                reference_rows, overlay_rows
            ),
            ScoreError::MissingColumn(name) => {
                write!(f, "Missing projection column: '{}'", name)
            }
            ScoreError::InvalidNumericValue(msg) => {
                write!(f, "Invalid numeric value: {}", msg)
            }
            ScoreError::InvalidShape { values_len, n_cols } => write!(
                f,
                "Invalid table shape: {} values cannot fill rows of {} columns",
                values_len, n_cols
            ),
            ScoreError::RaggedColumns {
                column,
                got,
                expected,
            } => write!(
                f,
                "Column '{}' has {} rows, expected {}",
                column, got, expected
            ),
            ScoreError::InvalidSampleCap(cap) => {
                write!(f, "Invalid sample_cap: {} (must be at least 1)", cap)
            }
            ScoreError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. \
                 Each parameter can only be configured once.",
                parameter
            ),
            ScoreError::DegenerateDistanceSpread => {
                write!(f, "Degenerate neighborhood: zero distance spread")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScoreError {}
