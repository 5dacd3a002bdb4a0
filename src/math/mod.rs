//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout scoring:
//! - Euclidean distances (full-dimensional and planar)
//! - Summary statistics for distance vectors
//! - Span normalization of overlay columns
//! - Gaussian distance-decay weighting
//! - Specialized cell accumulators (scalar and SIMD)
//! - K-nearest-neighbor search
//!
//! These are reusable building blocks with no orchestration logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Euclidean distance functions.
pub mod distance;

/// Mean and population standard deviation.
pub mod stats;

/// Span (min-max) normalization.
pub mod scaling;

/// Gaussian distance-decay weights and the uniform fallback.
pub mod weights;

/// Scalar and SIMD accumulators for the cell loop.
pub mod accumulate;

/// K-d tree nearest-neighbor search.
pub mod neighborhood;
