//! Derived hash chain
//!
//! A single 32-bit FNV-1-style base hash stands in for `k` independent hash
//! functions by chaining: round 0 hashes the caller's bytes, and every later
//! round hashes the previous round's value as a fixed-width little-endian
//! byte string. Chaining trades some statistical independence between rounds
//! for needing only one hash implementation.

/// Multiplier for the 32-bit FNV-1-style base hash.
pub const FNV_PRIME: u32 = 0x811c_9dc5;

/// 32-bit FNV-1-style hash: starting from zero, multiply the accumulator by
/// [`FNV_PRIME`] and XOR in each input byte.
///
/// The empty slice hashes to 0.
pub fn fnv1_32(data: &[u8]) -> u32 {
    let mut hash = 0u32;
    for &byte in data {
        hash = hash.wrapping_mul(FNV_PRIME) ^ u32::from(byte);
    }
    hash
}

/// Unbounded iterator over the derived hash chain for one element.
///
/// Round i (i >= 1) is `fnv1_32` of round i-1's value encoded as 4
/// little-endian bytes. The byte order is pinned so the chain is identical on
/// every platform.
#[derive(Clone, Debug)]
pub struct HashChain<'a> {
    element: &'a [u8],
    prev: Option<u32>,
}

impl<'a> HashChain<'a> {
    /// Start a chain over `element`.
    pub fn new(element: &'a [u8]) -> Self {
        Self {
            element,
            prev: None,
        }
    }
}

impl Iterator for HashChain<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let hash = match self.prev {
            None => fnv1_32(self.element),
            Some(prev) => fnv1_32(&prev.to_le_bytes()),
        };
        self.prev = Some(hash);
        Some(hash)
    }
}

/// Map the first `hash_count` chain values onto bit indices in
/// `[0, size_bits)`.
///
/// The iterator is lazy, so a membership probe that stops early never
/// computes the remaining hash rounds.
pub(crate) fn bit_positions(
    element: &[u8],
    hash_count: usize,
    size_bits: usize,
) -> impl Iterator<Item = usize> + '_ {
    HashChain::new(element)
        .take(hash_count)
        .map(move |hash| (hash as usize) % size_bits)
}
