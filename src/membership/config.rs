//! Validated Bloom filter parameters

use super::{optimal_bit_count, optimal_hash_count};
use crate::traits::ConfigError;
use core::fmt;

/// Hard ceiling on the bit array: 8 GiBit, i.e. 1 GiB of storage
pub const MAX_BIT_ARRAY_SIZE: u64 = 8_589_934_592;

/// Fixed number of bits added on top of the optimal size
pub const BIT_PADDING: u64 = 16;

/// Immutable filter parameters
///
/// Built once from the expected element count `n` and the target false
/// positive rate `p`; the bit count `m`, hash count `k` and byte count are
/// derived at construction and never change.
///
/// # Example
///
/// ```
/// use murmurbloom::membership::BloomConfig;
///
/// let config = BloomConfig::new(100, 0.001).unwrap();
/// assert_eq!(config.bit_count(), 1454);
/// assert_eq!(config.hash_count(), 11);
/// assert_eq!(config.byte_count(), 182);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BloomConfig {
    expected_elements: u64,
    false_positive_rate: f64,
    bit_count: u64,
    hash_count: u32,
    byte_count: usize,
}

impl BloomConfig {
    /// Validate `n` and `p` and derive the filter geometry
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroExpectedElements`] if `n == 0`
    /// - [`ConfigError::InvalidFalsePositiveRate`] if `p` is not in (0, 1)
    /// - [`ConfigError::CapacityExceeded`] if `m` exceeds [`MAX_BIT_ARRAY_SIZE`]
    pub fn new(expected_elements: u64, false_positive_rate: f64) -> Result<Self, ConfigError> {
        let bit_count = optimal_bit_count(expected_elements, false_positive_rate)?
            .saturating_add(BIT_PADDING)
            .max(expected_elements);

        let byte_count = match usize::try_from(bit_count.div_ceil(8)) {
            Ok(bytes) if bit_count <= MAX_BIT_ARRAY_SIZE => bytes,
            _ => {
                tracing::warn!(
                    bits = bit_count,
                    max_mib = MAX_BIT_ARRAY_SIZE / (8 * 1024 * 1024),
                    "bloom filter size exceeds maximum limit"
                );
                return Err(ConfigError::CapacityExceeded {
                    bits: bit_count,
                    max_bits: MAX_BIT_ARRAY_SIZE,
                });
            }
        };

        Ok(Self {
            expected_elements,
            false_positive_rate,
            bit_count,
            hash_count: optimal_hash_count(bit_count, expected_elements),
            byte_count,
        })
    }

    /// Expected number of elements (n)
    #[inline]
    pub fn expected_elements(&self) -> u64 {
        self.expected_elements
    }

    /// Target false positive rate (p)
    #[inline]
    pub fn false_positive_rate(&self) -> f64 {
        self.false_positive_rate
    }

    /// Number of addressable bits (m)
    #[inline]
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Number of derived hashes per key (k)
    #[inline]
    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }

    /// Storage size in bytes, `ceil(m / 8)`
    #[inline]
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }
}

impl fmt::Display for BloomConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Standard Bloom filter (Murmur3 x64-128)")?;
        writeln!(
            f,
            "  Bit Array Size (m): {} bits ({} bytes)",
            self.bit_count, self.byte_count
        )?;
        writeln!(f, "  Elements       (n): {}", self.expected_elements)?;
        writeln!(f, "  Hash Functions (k): {}", self.hash_count)?;
        write!(
            f,
            "  FP Rate        (p): {} ({:.1}%)",
            self.false_positive_rate,
            self.false_positive_rate * 100.0
        )
    }
}
