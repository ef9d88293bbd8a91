//! Bloom filter for probabilistic set membership
//!
//! A Bloom filter is a space-efficient probabilistic data structure that tests
//! whether an element is a member of a set. False positives are possible, but
//! false negatives are not.
//!
//! Bits are stored one per position in a byte array: position `i` lives in
//! byte `i >> 3` under mask `1 << (i & 7)`. Positions are derived from one
//! Murmur3 digest per key, see [`crate::hashing::DerivedHashes`].
//!
//! The filter is not synchronized. Concurrent writers must wrap it in a lock
//! (or shard across several filters) themselves.

use super::{expected_false_positive_rate, BitGrid, BloomConfig};
use crate::hashing::DerivedHashes;
use crate::math;
use crate::traits::{BoundsError, ConfigError, MembershipFilter};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Bloom filter for set membership testing
///
/// # Example
///
/// ```
/// use murmurbloom::membership::BloomFilter;
///
/// // Create filter for ~1000 items with 1% false positive rate
/// let mut bloom = BloomFilter::new(1000, 0.01).unwrap();
///
/// bloom.insert("apple").unwrap();
/// bloom.insert("banana").unwrap();
///
/// assert!(bloom.might_contain("apple").unwrap());   // true - definitely inserted
/// assert!(bloom.might_contain("banana").unwrap());  // true - definitely inserted
/// assert_eq!(bloom.current_count(), 2);
/// ```
///
/// # False Positive Rate
///
/// The actual false positive rate depends on the number of items inserted.
/// If you insert more items than the expected capacity, the false positive
/// rate will increase.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Fixed geometry
    config: BloomConfig,
    /// Bit array, `ceil(m / 8)` bytes
    bits: Vec<u8>,
    /// Inserts that set at least one new bit
    inserted: u64,
}

impl BloomFilter {
    /// Create a new Bloom filter with expected capacity and false positive rate
    ///
    /// # Arguments
    ///
    /// * `expected_elements` - Expected number of items to insert
    /// * `false_positive_rate` - Desired false positive rate (e.g., 0.01 for 1%)
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `expected_elements` is 0, the rate is not
    /// in (0, 1), or the derived bit array exceeds
    /// [`MAX_BIT_ARRAY_SIZE`](super::MAX_BIT_ARRAY_SIZE).
    pub fn new(expected_elements: u64, false_positive_rate: f64) -> Result<Self, ConfigError> {
        BloomConfig::new(expected_elements, false_positive_rate).map(Self::from_config)
    }

    /// Create a Bloom filter from validated parameters
    pub fn from_config(config: BloomConfig) -> Self {
        tracing::debug!(
            bits = config.bit_count(),
            bytes = config.byte_count(),
            hashes = config.hash_count(),
            expected = config.expected_elements(),
            fp_rate = config.false_positive_rate(),
            "created bloom filter"
        );

        Self {
            bits: vec![0u8; config.byte_count()],
            config,
            inserted: 0,
        }
    }

    /// Insert a text key
    ///
    /// Every bit position derived from `key` is set. The count only grows if
    /// at least one of those bits was previously clear, so repeated inserts
    /// of the same key are not counted twice. The empty key derives no
    /// positions and leaves the filter untouched.
    #[inline]
    pub fn insert(&mut self, key: &str) -> Result<(), BoundsError> {
        self.insert_bytes(key.as_bytes())
    }

    /// Insert a key given as raw bytes
    ///
    /// All positions are located before any bit is written, so a
    /// [`BoundsError`] leaves the filter unchanged.
    pub fn insert_bytes(&mut self, key: &[u8]) -> Result<(), BoundsError> {
        let positions = self.positions(key);
        for hash in positions.clone() {
            self.locate(hash)?;
        }

        let mut newly_set = false;
        for hash in positions {
            let (byte, mask) = self.locate(hash)?;
            let slot = &mut self.bits[byte];
            if *slot & mask == 0 {
                *slot |= mask;
                newly_set = true;
            }
        }

        if newly_set {
            self.inserted += 1;
        } else {
            tracing::trace!(len = key.len(), "insert set no new bits");
        }
        Ok(())
    }

    /// Check if a text key might be in the filter
    ///
    /// Returns `Ok(true)` if the key might be in the set (possibly a false
    /// positive), or `Ok(false)` if it is definitely not. Stops at the
    /// first clear bit.
    #[inline]
    pub fn might_contain(&self, key: &str) -> Result<bool, BoundsError> {
        self.might_contain_bytes(key.as_bytes())
    }

    /// Check if a key given as raw bytes might be in the filter
    pub fn might_contain_bytes(&self, key: &[u8]) -> Result<bool, BoundsError> {
        for hash in self.positions(key) {
            let (byte, mask) = self.locate(hash)?;
            if self.bits[byte] & mask == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Parameters the filter was built with
    #[inline]
    pub fn config(&self) -> &BloomConfig {
        &self.config
    }

    /// Expected number of elements (n)
    #[inline]
    pub fn allocated_capacity(&self) -> u64 {
        self.config.expected_elements()
    }

    /// Number of inserts that set at least one new bit
    ///
    /// Approximates the number of distinct keys inserted.
    #[inline]
    pub fn current_count(&self) -> u64 {
        self.inserted
    }

    /// Get the number of hash functions (k)
    #[inline]
    pub fn hash_count(&self) -> u32 {
        self.config.hash_count()
    }

    /// Get the number of bits in the filter (m)
    #[inline]
    pub fn bit_array_size(&self) -> u64 {
        self.config.bit_count()
    }

    /// Target false positive rate (p)
    #[inline]
    pub fn false_positive_rate(&self) -> f64 {
        self.config.false_positive_rate()
    }

    /// Read-only view of the raw bit array
    #[inline]
    pub fn raw_bits(&self) -> &[u8] {
        &self.bits
    }

    /// Renderable grid of the bit array for inspection
    pub fn grid(&self) -> BitGrid<'_> {
        BitGrid::new(&self.bits, self.inserted, self.config.expected_elements())
    }

    /// Get the number of bits set to 1
    pub fn bits_set(&self) -> u64 {
        self.bits.iter().map(|b| b.count_ones() as u64).sum()
    }

    /// Fraction of bits set, in [0, 1]
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.config.bit_count() as f64
    }

    /// Estimate the current false positive rate
    ///
    /// This is based on the actual fill ratio of the filter.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        math::powi(self.fill_ratio(), self.config.hash_count() as i32)
    }

    /// Theoretical false positive rate at the current count
    pub fn expected_false_positive_rate(&self) -> f64 {
        expected_false_positive_rate(self.config.bit_count(), self.config.hash_count(), self.inserted)
    }

    /// Estimate the number of items in the filter
    ///
    /// Uses the fill ratio to estimate cardinality.
    pub fn estimated_count(&self) -> f64 {
        let bits_set = self.bits_set() as f64;
        let m = self.config.bit_count() as f64;
        let k = self.config.hash_count() as f64;

        if bits_set >= m {
            return f64::INFINITY;
        }

        // n ≈ -m/k * ln(1 - X/m) where X is bits set
        -(m / k) * math::ln(1.0 - bits_set / m)
    }

    /// Size of the bit storage in bytes
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.bits.len()
    }

    /// Check if no insert has set a bit yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    #[inline]
    fn positions(&self, key: &[u8]) -> DerivedHashes {
        DerivedHashes::from_bytes(key, self.config.hash_count() as usize)
    }

    /// Map a derived hash to its byte offset and bit mask
    fn locate(&self, hash: i64) -> Result<(usize, u8), BoundsError> {
        let bit_count = self.config.bit_count();
        let index = match math::non_negative_mod(hash, bit_count) {
            Some(index) if index < bit_count => index,
            _ => {
                return Err(report(BoundsError::BitIndex {
                    index: hash,
                    bit_count,
                }))
            }
        };

        let byte = (index >> 3) as usize;
        if byte >= self.bits.len() {
            return Err(report(BoundsError::ByteIndex {
                index: index >> 3,
                byte_count: self.bits.len(),
            }));
        }

        Ok((byte, 1u8 << (index & 7)))
    }
}

#[cold]
fn report(err: BoundsError) -> BoundsError {
    tracing::error!(error = %err, "bloom filter index out of bounds");
    err
}

impl MembershipFilter for BloomFilter {
    type Item = str;

    fn insert(&mut self, item: &Self::Item) -> Result<(), BoundsError> {
        BloomFilter::insert(self, item)
    }

    fn might_contain(&self, item: &Self::Item) -> Result<bool, BoundsError> {
        BloomFilter::might_contain(self, item)
    }

    fn count(&self) -> u64 {
        self.inserted
    }

    fn size_bytes(&self) -> usize {
        self.bits.len()
    }
}
