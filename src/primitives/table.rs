//! Tabular input types for projection scoring.
//!
//! ## Purpose
//!
//! This module defines the two rectangular inputs the scorer consumes: a
//! reference table of numeric coordinates (including the two projection
//! columns) and an overlay table of named feature columns to be ranked.
//!
//! ## Design notes
//!
//! * **Flat Storage**: The reference table stores one flattened row-major
//!   buffer, the layout the spatial index consumes directly.
//! * **Column Storage**: Overlay columns are stored contiguously per column,
//!   the layout the per-feature scoring loop consumes directly.
//! * **Roles**: Only columns marked `Continuous` are scored; `Categorical`
//!   columns ride along untouched.
//! * **Missing Values**: Overlay cells may be NaN (missing). Reference cells
//!   may not; that is enforced at scoring time, not construction time.
//!
//! ## Key concepts
//!
//! * **Row Alignment**: Row `i` of the reference table describes the same
//!   entity as row `i` of the overlay table. Row order is the alignment key.
//!
//! ## Invariants
//!
//! * `values.len() == n_rows * n_cols` for the reference table.
//! * All overlay columns have identical length.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness or emptiness (see
//!   `engine::validator`).
//! * This module does not load data from files or remote stores.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::primitives::errors::ScoreError;

// ============================================================================
// Reference Table
// ============================================================================

/// A rectangular table of numeric coordinates, one row per point.
///
/// All columns participate in neighbor search; the two projection columns
/// (x, y) are additionally used for distance weighting.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable<T> {
    names: Vec<String>,
    values: Vec<T>,
}

impl<T: Copy> ReferenceTable<T> {
    /// Create a reference table from column names and flattened row-major
    /// values.
    ///
    /// Fails with [`ScoreError::InvalidShape`] if there are no columns or the
    /// value buffer cannot be divided into whole rows.
    pub fn new(names: Vec<String>, values: Vec<T>) -> Result<Self, ScoreError> {
        if names.is_empty() || values.len() % names.len() != 0 {
            return Err(ScoreError::InvalidShape {
                values_len: values.len(),
                n_cols: names.len(),
            });
        }
        Ok(Self { names, values })
    }

    /// Number of rows (points).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.values.len() / self.names.len()
    }

    /// Number of columns (dimensions).
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    /// Column names, in declaration order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// One row as a coordinate slice.
    #[inline]
    pub fn row(&self, index: usize) -> &[T] {
        let d = self.names.len();
        &self.values[index * d..(index + 1) * d]
    }

    /// The flattened row-major value buffer.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Copy the given rows into a new flattened buffer, in the given order.
    pub fn gather_rows(&self, indices: &[usize]) -> Vec<T> {
        let d = self.names.len();
        let mut out = Vec::with_capacity(indices.len() * d);
        for &i in indices {
            out.extend_from_slice(self.row(i));
        }
        out
    }
}

// ============================================================================
// Overlay Table
// ============================================================================

/// Role of an overlay column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Continuous numeric feature; scored.
    Continuous,
    /// Non-continuous column (labels, codes); skipped entirely.
    Categorical,
}

/// A single named overlay column.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayColumn<T> {
    name: String,
    kind: ColumnKind,
    values: Vec<T>,
}

impl<T> OverlayColumn<T> {
    /// Create a continuous column. NaN values mark missing cells.
    pub fn continuous(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Continuous,
            values,
        }
    }

    /// Create a categorical column; it is carried but never scored.
    pub fn categorical(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Categorical,
            values,
        }
    }

    /// Column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column role.
    #[inline]
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Whether this column participates in scoring.
    #[inline]
    pub fn is_continuous(&self) -> bool {
        self.kind == ColumnKind::Continuous
    }

    /// Column values, aligned with reference rows.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

/// An ordered collection of overlay columns sharing one row count.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTable<T> {
    columns: Vec<OverlayColumn<T>>,
}

impl<T> OverlayTable<T> {
    /// Create an overlay table from columns.
    ///
    /// Fails with [`ScoreError::RaggedColumns`] if column lengths differ.
    pub fn new(columns: Vec<OverlayColumn<T>>) -> Result<Self, ScoreError> {
        if let Some(first) = columns.first() {
            let expected = first.values.len();
            for col in &columns[1..] {
                if col.values.len() != expected {
                    return Err(ScoreError::RaggedColumns {
                        column: col.name.clone(),
                        got: col.values.len(),
                        expected,
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    /// Number of rows (zero for a table with no columns).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Number of columns of any kind.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// All columns, in original order.
    #[inline]
    pub fn columns(&self) -> &[OverlayColumn<T>] {
        &self.columns
    }
}
