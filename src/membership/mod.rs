//! Membership testing data structures
//!
//! This module provides a Bloom filter for testing set membership. It
//! trades a small probability of false positives for significant space
//! savings compared to an exact set representation.
//!
//! # Example
//!
//! ```
//! use murmurbloom::membership::BloomFilter;
//!
//! let mut bloom = BloomFilter::new(100, 0.001).unwrap();
//! bloom.insert("apples").unwrap();
//! assert!(bloom.might_contain("apples").unwrap());
//! assert!(!bloom.might_contain("kiwis").unwrap());
//! ```

mod bloom;
mod config;
mod grid;

pub use bloom::BloomFilter;
pub use config::{BloomConfig, BIT_PADDING, MAX_BIT_ARRAY_SIZE};
pub use grid::BitGrid;

use crate::math;
use crate::traits::ConfigError;
use core::f64::consts::LN_2;

/// Compute the optimal bit array size for `n` items at false positive rate `p`
///
/// `m = ceil(-n * ln(p) / ln(2)^2)`, without padding or ceiling checks.
pub fn optimal_bit_count(expected_elements: u64, false_positive_rate: f64) -> Result<u64, ConfigError> {
    if expected_elements == 0 {
        return Err(ConfigError::ZeroExpectedElements);
    }
    if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
        return Err(ConfigError::InvalidFalsePositiveRate(false_positive_rate));
    }

    let bits = -(expected_elements as f64) * math::ln(false_positive_rate) / (LN_2 * LN_2);
    // Float to int casts saturate, so absurd inputs land above the ceiling
    Ok(math::ceil(bits) as u64)
}

/// Compute the optimal number of hash functions: `k = ceil((m / n) * ln(2))`
///
/// Never returns less than 1.
pub fn optimal_hash_count(bit_count: u64, expected_elements: u64) -> u32 {
    if bit_count == 0 || expected_elements == 0 {
        return 1;
    }
    let k = math::ceil(bit_count as f64 / expected_elements as f64 * LN_2);
    (k as u32).max(1)
}

/// Theoretical false positive rate after `inserted` items
///
/// `(1 - e^(-k * n / m))^k`
pub fn expected_false_positive_rate(bit_count: u64, hash_count: u32, inserted: u64) -> f64 {
    if bit_count == 0 {
        return 1.0;
    }
    let k = hash_count as f64;
    let exponent = -k * inserted as f64 / bit_count as f64;
    math::powi(1.0 - math::exp(exponent), hash_count as i32)
}
