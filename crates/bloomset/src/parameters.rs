//! Optimal filter sizing
//!
//! Standard Bloom filter sizing: `m = -n * ln(p) / ln(2)^2` bits and
//! `k = (m / n) * ln(2)` hash rounds. Both results are truncated toward zero
//! rather than rounded, and the bit count is then padded up to a whole byte,
//! so a given `(n, p)` request always produces one exact geometry.

use std::f64::consts::LN_2;

use serde::{Deserialize, Serialize};

use crate::config::BloomConfig;
use crate::error::FilterError;

/// -1 / ln(2)^2, folding both logarithms of the optimal bit-count formula
/// into a single multiplier.
const INV_LN2_SQUARED: f64 = -2.0813689810056077;

/// Geometry derived from a sizing request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Backing storage size in bytes.
    pub size_bytes: usize,
    /// Number of derived hash rounds per operation.
    pub hash_count: usize,
    /// False positive rate projected for this geometry at the requested
    /// item count.
    pub expected_fpr: f64,
}

impl FilterParams {
    /// Geometry for an already-validated configuration.
    pub fn for_config(config: &BloomConfig) -> Self {
        let n = config.expected_items as f64;
        let ideal_bits = n * config.target_fpr.ln() * INV_LN2_SQUARED;

        // Truncate toward zero, then round up to the next whole byte unless
        // the bit count is already byte-aligned.
        let sz = ideal_bits as usize;
        let size_bytes = if sz % 8 != 0 { sz / 8 + 1 } else { sz / 8 };
        // A sub-bit ideal size (one item at a very lax target rate) still
        // gets a byte so probes have a non-empty index space.
        let size_bytes = size_bytes.max(1);

        let hash_count = (ideal_bits * LN_2 / n) as usize;

        Self {
            size_bytes,
            hash_count,
            expected_fpr: projected_fpr(size_bytes * 8, config.expected_items, hash_count),
        }
    }
}

/// Compute filter geometry for `expected_items` insertions at `target_fpr`.
///
/// # Errors
///
/// [`FilterError::InvalidItemCount`] if `expected_items` is zero,
/// [`FilterError::InvalidProbability`] unless `0.0 < target_fpr < 1.0`.
pub fn optimal_params(
    expected_items: usize,
    target_fpr: f64,
) -> Result<FilterParams, FilterError> {
    let config = BloomConfig::new(expected_items, target_fpr)?;
    Ok(FilterParams::for_config(&config))
}

/// False positive rate projected for a filter of `size_bits` bits holding
/// `items` elements probed with `hash_count` rounds: `(1 - e^(-kn/m))^k`.
pub fn projected_fpr(size_bits: usize, items: usize, hash_count: usize) -> f64 {
    if size_bits == 0 {
        return 1.0;
    }
    let exponent = -(hash_count as f64) * (items as f64) / (size_bits as f64);
    (1.0 - exponent.exp()).powi(hash_count as i32)
}
