//! K-nearest-neighbor search over the reference coordinate space.
//!
//! ## Purpose
//!
//! This module implements the spatial index behind neighborhood queries: a
//! static k-d tree over all reference dimensions, answering "k nearest
//! neighbors of point i" under Euclidean distance.
//!
//! ## Design notes
//!
//! * **Static Construction**: The tree is built once per scoring pass and
//!   queried with its own build set.
//! * **Median Ordering**: Construction partitions an index permutation with
//!   `select_nth_unstable_by` on the depth axis; each subtree is a
//!   contiguous range of that permutation with its root at the midpoint.
//! * **Bounded Max-Heap**: Queries keep the k best candidates in a
//!   `BinaryHeap` of [`NodeDistance`], comparing squared distances and
//!   taking square roots only when results are handed back.
//! * **Self-Exclusion Seam**: The query accepts an optional excluded index so
//!   the self-match policy is enforced at the index level instead of by
//!   post-filtering.
//!
//! ## Key concepts
//!
//! * **Pruning**: A subtree is skipped when the squared distance to its
//!   splitting plane already exceeds the current k-th best distance.
//! * **Neighborhood Size**: k is tied to the dataset size as round(√n) with
//!   a floor of 1, so neighborhoods shrink relative to n as n grows.
//!
//! ## Invariants
//!
//! * Queries return exact nearest neighbors (no approximation).
//! * Results are sorted ascending by distance, ties broken by point index,
//!   so identical inputs produce identical output.
//!
//! ## Non-goals
//!
//! * This module does not support insertion or deletion after build.
//! * This module does not compute weights (see `math::weights`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BinaryHeap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BinaryHeap;

// External dependencies
use core::cmp::Ordering::{self, Equal};
use num_traits::Float;

// Internal dependencies
use crate::math::distance::squared_euclidean;
use crate::primitives::errors::ScoreError;

// ============================================================================
// Neighborhood Sizing
// ============================================================================

/// Neighborhood size for a dataset of `n` points: round(√n), floor 1.
#[inline]
pub fn neighborhood_size(n: usize) -> usize {
    let k = (n as f64).sqrt().round() as usize;
    k.max(1)
}

/// Policy for a point matching itself during a self-query.
///
/// Querying the index with its own build set makes every point its own
/// zero-distance nearest neighbor. The default drops that match, since it
/// contributes a zero difference at maximal weight and only dilutes every
/// score uniformly; `IncludeSelf` keeps it for callers who want the naive
/// self-query behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborPolicy {
    /// Drop the self-match; k is clamped to n − 1. The default.
    #[default]
    ExcludeSelf,
    /// Retain the self-match: each point counts as its own nearest neighbor.
    IncludeSelf,
}

// ============================================================================
// Helper Types
// ============================================================================

/// Heap entry for k-nearest search: point index and squared distance.
///
/// Orders by distance, ties by index, so the heap's worst element is
/// canonical and searches are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct NodeDistance<T>(pub usize, pub T);

impl<T: PartialEq> PartialEq for NodeDistance<T> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1 && self.0 == other.0
    }
}
impl<T: PartialEq> Eq for NodeDistance<T> {}

impl<T: PartialOrd> PartialOrd for NodeDistance<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> Ord for NodeDistance<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1
            .partial_cmp(&other.1)
            .unwrap_or(Equal)
            .then_with(|| self.0.cmp(&other.0))
    }
}

/// Result container for a k-nearest-neighbor query.
#[derive(Debug, Clone)]
pub struct Neighborhood<T> {
    /// Indices of the nearest neighbors, ascending by distance.
    pub indices: Vec<usize>,
    /// Distances to each neighbor (aligned with `indices`).
    pub distances: Vec<T>,
}

impl<T: Float> Neighborhood<T> {
    /// Create an empty neighborhood.
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
            distances: Vec::new(),
        }
    }

    /// Pre-allocate buffers for a neighborhood of size k.
    pub fn with_capacity(k: usize) -> Self {
        Self {
            indices: Vec::with_capacity(k),
            distances: Vec::with_capacity(k),
        }
    }

    /// Number of neighbors currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if no neighbors are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<T: Float> Default for Neighborhood<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// K-D Tree
// ============================================================================

/// Static k-d tree over flattened nD points.
#[derive(Debug, Clone)]
pub struct KdTree<T> {
    /// Owned copy of the flattened row-major coordinates.
    points: Vec<T>,
    /// Median-ordered permutation of point indices; each subtree is a
    /// contiguous range with its root at the range midpoint.
    order: Vec<usize>,
    /// Dimensionality of the data.
    dims: usize,
}

impl<T: Float> KdTree<T> {
    // ------------------------------------------------------------------------
    // Public API
    // ------------------------------------------------------------------------

    /// Build a k-d tree from a flattened row-major coordinate buffer.
    ///
    /// Fails with [`ScoreError::EmptyInput`] on zero rows,
    /// [`ScoreError::InvalidShape`] when the buffer does not divide into
    /// whole rows, and [`ScoreError::InvalidNumericValue`] on non-finite
    /// coordinates.
    pub fn build(points: &[T], dims: usize) -> Result<Self, ScoreError> {
        if dims == 0 || points.len() % dims != 0 {
            return Err(ScoreError::InvalidShape {
                values_len: points.len(),
                n_cols: dims,
            });
        }
        let n = points.len() / dims;
        if n == 0 {
            return Err(ScoreError::EmptyInput);
        }
        for (i, &val) in points.iter().enumerate() {
            if !val.is_finite() {
                return Err(ScoreError::InvalidNumericValue(format!(
                    "reference[{}][{}]={}",
                    i / dims,
                    i % dims,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        let mut order: Vec<usize> = (0..n).collect();
        Self::build_recursive(points, dims, &mut order, 0);

        Ok(Self {
            points: points.to_vec(),
            order,
            dims,
        })
    }

    /// Number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the tree indexes no points. Unreachable after a successful
    /// build, but kept for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Find the `k` nearest neighbors of `query`, reusing the caller's heap
    /// and neighborhood buffers.
    ///
    /// `exclude` drops one point index from consideration (the self-match
    /// seam). Results are sorted ascending by distance, ties by index.
    pub fn find_k_nearest(
        &self,
        query: &[T],
        k: usize,
        exclude: Option<usize>,
        heap: &mut BinaryHeap<NodeDistance<T>>,
        out: &mut Neighborhood<T>,
    ) {
        out.indices.clear();
        out.distances.clear();
        if k == 0 || self.order.is_empty() {
            return;
        }

        heap.clear();
        self.search_range(0, self.order.len(), 0, query, k, exclude, heap);

        // Drain the heap, sort ascending, and hand back true distances.
        let mut results: Vec<NodeDistance<T>> = heap.drain().collect();
        results.sort_unstable();
        for NodeDistance(idx, d2) in results {
            out.indices.push(idx);
            out.distances.push(d2.sqrt());
        }
    }

    // ------------------------------------------------------------------------
    // Private Helpers & Algorithms
    // ------------------------------------------------------------------------

    /// Coordinates of one indexed point.
    #[inline]
    fn point(&self, idx: usize) -> &[T] {
        &self.points[idx * self.dims..(idx + 1) * self.dims]
    }

    /// Recursively median-order a permutation range.
    fn build_recursive(points: &[T], dims: usize, order: &mut [usize], depth: usize) {
        if order.len() <= 1 {
            return;
        }

        let axis = depth % dims;
        let mid = order.len() / 2;
        order.select_nth_unstable_by(mid, |&a, &b| {
            points[a * dims + axis]
                .partial_cmp(&points[b * dims + axis])
                .unwrap_or(Equal)
        });

        let (left, rest) = order.split_at_mut(mid);
        Self::build_recursive(points, dims, left, depth + 1);
        Self::build_recursive(points, dims, &mut rest[1..], depth + 1);
    }

    /// Recursive range search with splitting-plane pruning.
    #[allow(clippy::too_many_arguments)]
    fn search_range(
        &self,
        lo: usize,
        hi: usize,
        depth: usize,
        query: &[T],
        k: usize,
        exclude: Option<usize>,
        heap: &mut BinaryHeap<NodeDistance<T>>,
    ) {
        if lo >= hi {
            return;
        }

        let mid = lo + (hi - lo) / 2;
        let idx = self.order[mid];
        let point = self.point(idx);

        // 1. Offer the node itself.
        if exclude != Some(idx) {
            let d2 = squared_euclidean(query, point);
            let candidate = NodeDistance(idx, d2);
            if heap.len() < k {
                heap.push(candidate);
            } else if let Some(mut worst) = heap.peek_mut() {
                if candidate < *worst {
                    *worst = candidate;
                }
            }
        }

        // 2. Recurse into the near side first.
        let axis = depth % self.dims;
        let diff = query[axis] - point[axis];
        let (near, far) = if diff <= T::zero() {
            ((lo, mid), (mid + 1, hi))
        } else {
            ((mid + 1, hi), (lo, mid))
        };
        self.search_range(near.0, near.1, depth + 1, query, k, exclude, heap);

        // 3. Prune the far side unless it can still contain a closer point.
        let plane_d2 = diff * diff;
        let must_visit = heap.len() < k
            || heap.peek().map_or(true, |worst| plane_d2 < worst.1);
        if must_visit {
            self.search_range(far.0, far.1, depth + 1, query, k, exclude, heap);
        }
    }
}
