//! Core traits and error types
//!
//! Filters implement [`MembershipFilter`]. Construction failures are reported
//! as [`ConfigError`]; a derived index landing outside the bit array is
//! reported as [`BoundsError`].

use core::fmt;

/// Error raised while validating filter parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Expected element count was zero
    ZeroExpectedElements,
    /// False positive rate outside the open interval (0, 1)
    InvalidFalsePositiveRate(f64),
    /// Derived bit array would exceed the hard size ceiling
    CapacityExceeded {
        bits: u64,
        max_bits: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroExpectedElements => {
                write!(f, "expected element count must be positive")
            }
            ConfigError::InvalidFalsePositiveRate(p) => {
                write!(f, "false positive rate must be in (0, 1), got {}", p)
            }
            ConfigError::CapacityExceeded { bits, max_bits } => write!(
                f,
                "bit array of {} bits exceeds the limit of {} bits ({:.2} MiB)",
                bits,
                max_bits,
                *max_bits as f64 / (8.0 * 1024.0 * 1024.0)
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// A derived position fell outside the allocated bit array
///
/// Only a defect in the hash engine or the index arithmetic can produce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// Bit index not in `0..bit_count`
    BitIndex { index: i64, bit_count: u64 },
    /// Byte index not in `0..byte_count`
    ByteIndex { index: u64, byte_count: usize },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::BitIndex { index, bit_count } => {
                write!(f, "invalid bit index {} for {} bits", index, bit_count)
            }
            BoundsError::ByteIndex { index, byte_count } => {
                write!(f, "byte index {} out of bounds for {} bytes", index, byte_count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoundsError {}

/// Probabilistic set membership
///
/// Implementors never produce false negatives: once `insert(item)` has
/// returned `Ok`, `might_contain(item)` returns `Ok(true)` for the rest of
/// the filter's lifetime. Items cannot be removed.
pub trait MembershipFilter {
    /// The type of item this filter accepts
    type Item: ?Sized;

    /// Add an item to the filter
    fn insert(&mut self, item: &Self::Item) -> Result<(), BoundsError>;

    /// Test if item might be in set
    ///
    /// - `true` means item might be present (possible false positive)
    /// - `false` means item is definitely not present
    fn might_contain(&self, item: &Self::Item) -> Result<bool, BoundsError>;

    /// Number of inserts that set at least one new bit
    fn count(&self) -> u64;

    /// Memory usage of the bit storage in bytes
    fn size_bytes(&self) -> usize;

    /// Check if nothing has been inserted yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
