//! Result assembly and presentation.
//!
//! ## Purpose
//!
//! This module defines the scoring output: one `(feature, score)` entry per
//! continuous overlay column, in the overlay's original column order, with a
//! ranked view and a formatted table for quick inspection.
//!
//! ## Design notes
//!
//! * **Original Order**: The canonical sequence preserves overlay column
//!   order; sorting is an explicit, separate view (`ranked`).
//! * **Lower Is Smoother**: Ranking sorts ascending, so the feature that
//!   varies least within projection-local neighborhoods comes first. NaN
//!   scores (all-missing features) sort last.
//!
//! ## Non-goals
//!
//! * This module does not compute scores (see `engine::executor`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::cmp::Ordering::{self, Equal};
use core::fmt;

use num_traits::Float;

// ============================================================================
// Result Types
// ============================================================================

/// One scored overlay feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScore<T> {
    /// Overlay column name.
    pub name: String,
    /// Mean weighted local variance; lower means smoother over the
    /// projection.
    pub score: T,
}

/// The full ranking returned by a scoring call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport<T> {
    scores: Vec<FeatureScore<T>>,
}

impl<T: Float> ScoreReport<T> {
    /// Assemble a report from per-feature scores in overlay column order.
    pub fn new(scores: Vec<FeatureScore<T>>) -> Self {
        Self { scores }
    }

    /// Scores in the overlay's original column order.
    #[inline]
    pub fn scores(&self) -> &[FeatureScore<T>] {
        &self.scores
    }

    /// Number of scored features.
    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if no features were scored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores sorted ascending (smoothest feature first), NaN last.
    pub fn ranked(&self) -> Vec<FeatureScore<T>> {
        let mut out = self.scores.clone();
        out.sort_by(|a, b| rank_order(a.score, b.score));
        out
    }

    /// Consume the report, yielding the original-order entries.
    pub fn into_vec(self) -> Vec<FeatureScore<T>> {
        self.scores
    }
}

impl<T> IntoIterator for ScoreReport<T> {
    type Item = FeatureScore<T>;
    type IntoIter = <Vec<FeatureScore<T>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.into_iter()
    }
}

/// Ascending score order with NaN sorted last.
fn rank_order<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Equal),
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for ScoreReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Features scored: {}", self.scores.len())?;
        writeln!(f)?;
        writeln!(f, "Projection relevance (lower = smoother):")?;
        writeln!(f, "  {:<24} {:>12}", "Feature", "Score")?;
        writeln!(f, "  {:-<37}", "")?;
        for entry in self.ranked() {
            writeln!(f, "  {:<24} {:>12.6}", entry.name, entry.score)?;
        }
        Ok(())
    }
}
