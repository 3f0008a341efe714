//! # bloomset
//!
//! Probabilistic set-membership filtering (Bloom filters) over opaque byte
//! strings.
//!
//! A Bloom filter answers "has this element possibly been inserted?" with no
//! false negatives and a tunable false positive rate, in a fixed-size bit
//! array. The intended use is shielding an expensive exact lookup (disk,
//! network) behind a cheap in-memory rejection test.
//!
//! ## Layout
//!
//! - [`config`]: validated sizing requests (`BloomConfig`, builder).
//! - [`parameters`]: the optimal-size math with truncating arithmetic.
//! - [`hash`]: the 32-bit FNV-1-style base hash and the derived hash chain
//!   that simulates `k` hash functions.
//! - [`filter`]: the `BloomFilter` itself.
//! - [`error`]: construction errors.
//!
//! ## Usage
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! let mut filter = BloomFilter::new(10_000, 0.01)?;
//!
//! filter.insert(b"alpha");
//! filter.insert(b"beta");
//!
//! assert!(filter.contains(b"alpha"));
//! assert!(filter.contains(b"beta"));
//! assert!(!filter.contains(b"gamma"));
//! # Ok::<(), bloomset::FilterError>(())
//! ```
//!
//! ## Guarantees
//!
//! - An inserted element is found by every later probe (bits are only ever
//!   set, never cleared; there is no deletion and no resizing).
//! - Probes are pure and deterministic.
//! - A miss can short-circuit after a single unset bit; hash rounds that are
//!   not needed are not computed.
//!
//! Mutation takes `&mut self`, so concurrent insertion requires external
//! synchronization by construction; concurrent read-only probes are safe.

pub mod config;
pub mod error;
pub mod filter;
pub mod hash;
pub mod parameters;

// Re-exports for convenience
pub use config::{BloomConfig, BloomConfigBuilder};
pub use error::FilterError;
pub use filter::BloomFilter;
pub use hash::{HashChain, FNV_PRIME};
pub use parameters::{optimal_params, projected_fpr, FilterParams};
