//! Seeded row subsampling for large inputs.
//!
//! ## Purpose
//!
//! This module bounds neighbor-search cost on large inputs: when the point
//! count exceeds a fixed cap, a uniform random sample of cap rows (without
//! replacement) replaces the reference set, and the overlay is aligned to
//! the same rows.
//!
//! ## Design notes
//!
//! * **Explicit Seed**: Randomness flows from a caller-supplied seed through
//!   a small deterministic LCG. There is no global RNG state; the same seed
//!   always draws the same sample. When the caller supplies no seed the
//!   fixed [`DEFAULT_SEED`] is used, so results are reproducible by default.
//! * **Partial Fisher–Yates**: Only the first `cap` swaps of a full shuffle
//!   are performed.
//! * **Order Preserved**: Sampled indices are re-sorted ascending so row
//!   order remains the alignment key between reference and overlay.
//!
//! ## Invariants
//!
//! * A sample contains exactly `cap` distinct indices, each < n.
//! * `n <= cap` draws no sample at all.
//!
//! ## Non-goals
//!
//! * This module does not gather table rows (the executor owns that).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Defaults
// ============================================================================

/// Default subsampling cap: inputs larger than this are sampled down.
pub const DEFAULT_SAMPLE_CAP: usize = 1000;

/// Default sampling seed when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal deterministic PRNG for no-std sampling.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
pub struct SampleRng {
    state: u64,
}

impl SampleRng {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 32 random bits.
    pub fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

// ============================================================================
// Subsampling
// ============================================================================

/// Draw `cap` distinct row indices from `0..n`, or `None` when no sampling
/// is needed (`n <= cap`).
///
/// The sample is uniform without replacement (partial Fisher–Yates) and is
/// returned sorted ascending.
pub fn subsample_indices(n: usize, cap: usize, seed: u64) -> Option<Vec<usize>> {
    if n <= cap {
        return None;
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = SampleRng::new(seed);
    for i in 0..cap {
        let j = i + (rng.next_u32() as usize) % (n - i);
        indices.swap(i, j);
    }

    indices.truncate(cap);
    indices.sort_unstable();
    Some(indices)
}
