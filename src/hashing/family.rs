//! Derived hash family
//!
//! A single Murmur3 digest seeds any number of independent-looking values
//! (Kirsch-Mitzenmacher double hashing). Value `i` is
//! `fmix64(h1 + i) ^ fmix64(h2 + i * HASH_MULTIPLIER)`, computed with
//! wrapping arithmetic and reinterpreted as `i64`.

use super::murmur3::{fmix64, hash128, HashPair};
use core::iter::FusedIterator;

/// Odd multiplier decorrelating the `h2` arm from the `h1` arm
pub const HASH_MULTIPLIER: u64 = 0xBF58_476D_1CE4_E5B9;

/// Seed used when hashing keys for the derived family
pub const FAMILY_SEED: u32 = 0;

/// Lazily generated family of derived hash values
///
/// Yields exactly `count` values for a non-empty key and none for an empty
/// one. No allocation happens; the key is hashed once up front.
///
/// # Example
///
/// ```
/// use murmurbloom::hashing::derive_hashes;
///
/// let hashes: Vec<i64> = derive_hashes("apples", 4).collect();
/// assert_eq!(hashes.len(), 4);
/// assert_eq!(derive_hashes("", 4).len(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct DerivedHashes {
    pair: HashPair,
    next: u64,
    count: u64,
}

impl DerivedHashes {
    /// Derive `count` values from the bytes of a key
    ///
    /// Empty input short-circuits to an empty family without hashing.
    pub fn from_bytes(bytes: &[u8], count: usize) -> Self {
        if bytes.is_empty() {
            return Self::empty();
        }
        Self::from_pair(hash128(bytes, FAMILY_SEED), count)
    }

    /// Derive `count` values from an already computed digest
    pub fn from_pair(pair: HashPair, count: usize) -> Self {
        Self {
            pair,
            next: 0,
            count: count as u64,
        }
    }

    fn empty() -> Self {
        Self::from_pair(HashPair::default(), 0)
    }

    /// The digest the family is derived from
    pub fn seed_pair(&self) -> HashPair {
        self.pair
    }
}

impl Iterator for DerivedHashes {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        if self.next >= self.count {
            return None;
        }
        let value = derived_value(self.pair, self.next);
        self.next += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DerivedHashes {}

impl FusedIterator for DerivedHashes {}

/// Compute member `i` of the family seeded by `pair`
#[inline]
pub fn derived_value(pair: HashPair, i: u64) -> i64 {
    let a = fmix64(pair.h1.wrapping_add(i));
    let b = fmix64(pair.h2.wrapping_add(i.wrapping_mul(HASH_MULTIPLIER)));
    (a ^ b) as i64
}

/// Derive `count` hash values for a text key
///
/// The key is hashed through its UTF-8 bytes with seed 0.
#[inline]
pub fn derive_hashes(key: &str, count: usize) -> DerivedHashes {
    DerivedHashes::from_bytes(key.as_bytes(), count)
}

/// Fill a caller-supplied buffer with derived values
///
/// The buffer length selects `k`. Returns the number of values written:
/// `out.len()` for a non-empty key, 0 for an empty key (the buffer is left
/// untouched in that case).
///
/// # Example
///
/// ```
/// use murmurbloom::hashing::fill_hashes;
///
/// let mut buf = [0i64; 7];
/// assert_eq!(fill_hashes("kiwis", &mut buf), 7);
/// assert_eq!(fill_hashes("", &mut buf), 0);
/// ```
pub fn fill_hashes(key: &str, out: &mut [i64]) -> usize {
    let family = derive_hashes(key, out.len());
    let mut written = 0;
    for (slot, value) in out.iter_mut().zip(family) {
        *slot = value;
        written += 1;
    }
    written
}
