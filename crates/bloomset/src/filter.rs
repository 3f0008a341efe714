//! Core Bloom filter
//!
//! INVARIANTS:
//! - No false negatives: once an element is inserted, every later probe for
//!   it returns true.
//! - Bits only ever flip 0 -> 1; the array never grows, shrinks, or clears.

use bitvec::prelude::*;
use tracing::debug;

use crate::config::BloomConfig;
use crate::error::FilterError;
use crate::hash::bit_positions;
use crate::parameters::FilterParams;

/// Probabilistic membership filter over opaque byte strings.
///
/// A Bloom filter answers "has this element possibly been inserted?" in a
/// fixed amount of memory. A `false` answer is always correct; a `true`
/// answer is wrong with a probability close to the configured target rate.
/// Useful for cheaply rejecting lookups that would otherwise hit a slower
/// exact store.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array; byte-backed, so the index space is always whole bytes.
    bits: BitVec<u8, Lsb0>,
    /// Number of derived hash rounds per operation (k).
    hash_count: usize,
}

impl BloomFilter {
    /// Create a filter sized for `expected_items` insertions at a target
    /// false positive probability of `target_fpr`.
    ///
    /// For targets above 0.5 the optimal round count truncates to zero. Such
    /// a filter is valid but degenerate: insertions set no bits and every
    /// probe reports a (vacuous) match. Callers that care can inspect
    /// [`hash_count`](Self::hash_count) after construction.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidItemCount`] if `expected_items` is zero,
    /// [`FilterError::InvalidProbability`] unless `0.0 < target_fpr < 1.0`.
    pub fn new(expected_items: usize, target_fpr: f64) -> Result<Self, FilterError> {
        Self::with_config(&BloomConfig {
            expected_items,
            target_fpr,
        })
    }

    /// Create a filter from a prepared configuration.
    pub fn with_config(config: &BloomConfig) -> Result<Self, FilterError> {
        config.validate()?;
        let params = FilterParams::for_config(config);

        debug!(
            items = config.expected_items,
            bytes = params.size_bytes,
            hash_rounds = params.hash_count,
            expected_fpr = params.expected_fpr,
            "sized bloom filter"
        );

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; params.size_bytes * 8],
            hash_count: params.hash_count,
        })
    }

    /// Insert an element.
    ///
    /// Sets the bit at each of the `hash_count` derived positions. Inserting
    /// the same element again is observably a no-op, and the empty slice is
    /// a valid element.
    pub fn insert(&mut self, element: &[u8]) {
        for pos in bit_positions(element, self.hash_count, self.bits.len()) {
            self.bits.set(pos, true);
        }
    }

    /// Probe for membership.
    ///
    /// Returns `false` as soon as one derived position holds an unset bit,
    /// without computing the remaining hash rounds; returns `true` only if
    /// every position is set. `false` means the element was definitely never
    /// inserted.
    pub fn contains(&self, element: &[u8]) -> bool {
        bit_positions(element, self.hash_count, self.bits.len()).all(|pos| self.bits[pos])
    }

    /// Backing storage size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    /// Filter size in bits.
    pub fn size_bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of derived hash rounds per operation.
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits currently set, in `[0, 1]`.
    pub fn saturation(&self) -> f64 {
        self.bits_set() as f64 / self.bits.len() as f64
    }
}
