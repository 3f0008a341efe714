//! Sizing configuration and validation
//!
//! # Example
//!
//! ```
//! use bloomset::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .expected_items(10_000)
//!     .target_fpr(0.02)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.expected_items, 10_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// A sizing request for a filter.
///
/// `expected_items` is the number of insertions the filter is provisioned
/// for; `target_fpr` is the false positive probability the geometry aims at
/// once that many items are present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Number of items the filter is expected to hold.
    pub expected_items: usize,
    /// Target false positive probability, strictly between 0 and 1.
    pub target_fpr: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            expected_items: 1_048_576,
            target_fpr: 0.01,
        }
    }
}

impl BloomConfig {
    /// Create a configuration, rejecting out-of-range values.
    pub fn new(expected_items: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let config = Self {
            expected_items,
            target_fpr,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the sizing request is meaningful.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.expected_items == 0 {
            return Err(FilterError::InvalidItemCount {
                n: self.expected_items,
            });
        }
        if self.target_fpr <= 0.0 || self.target_fpr >= 1.0 {
            return Err(FilterError::InvalidProbability { p: self.target_fpr });
        }
        Ok(())
    }
}

/// Fluent builder for [`BloomConfig`].
///
/// Unset fields fall back to [`BloomConfig::default`]; `build` validates the
/// assembled request.
#[derive(Default)]
pub struct BloomConfigBuilder {
    expected_items: Option<usize>,
    target_fpr: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create a new builder with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of items the filter is expected to hold.
    pub fn expected_items(mut self, items: usize) -> Self {
        self.expected_items = Some(items);
        self
    }

    /// Set the target false positive probability.
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the configuration, validating all fields.
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let defaults = BloomConfig::default();

        let config = BloomConfig {
            expected_items: self.expected_items.unwrap_or(defaults.expected_items),
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
        };

        config.validate()?;
        Ok(config)
    }
}
