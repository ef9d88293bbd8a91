//! MurmurHash3 x64-128
//!
//! Austin Appleby's 128-bit variant tuned for 64-bit platforms. Input is
//! consumed in 16-byte blocks as two little-endian words; the 0-15 byte
//! tail is packed into the same two words and mixed once more before the
//! length is folded in and both halves are finalized with [`fmix64`].

use core::fmt;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// A 128-bit digest split into its two 64-bit halves
///
/// # Example
///
/// ```
/// use murmurbloom::hashing::hash128;
///
/// let pair = hash128(b"GooneyGooGoo", 0);
/// assert_eq!(pair.to_hex(), "c0250dde63f19e35e1da5e574c1f3f12");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashPair {
    /// Low half of the digest
    pub h1: u64,
    /// High half of the digest
    pub h2: u64,
}

impl HashPair {
    /// Create a pair from its halves
    pub const fn new(h1: u64, h2: u64) -> Self {
        Self { h1, h2 }
    }

    /// Fold the digest into a single word (`h1 ^ h2`)
    #[inline]
    pub fn folded(&self) -> u64 {
        self.h1 ^ self.h2
    }

    /// Render as 32 lowercase hex digits, `h1` first
    pub fn to_hex(&self) -> String {
        format!("{:x}", self)
    }
}

impl From<(u64, u64)> for HashPair {
    fn from((h1, h2): (u64, u64)) -> Self {
        Self { h1, h2 }
    }
}

impl From<HashPair> for (u64, u64) {
    fn from(pair: HashPair) -> Self {
        (pair.h1, pair.h2)
    }
}

impl fmt::LowerHex for HashPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.h1, self.h2)
    }
}

impl fmt::UpperHex for HashPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}{:016X}", self.h1, self.h2)
    }
}

impl fmt::Display for HashPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

/// Compute the Murmur3 x64-128 digest of `data`
///
/// Pure and total: the same `(data, seed)` always gives the same pair, and
/// empty input is hashed from the seed and a zero length alone.
///
/// # Example
///
/// ```
/// use murmurbloom::hashing::hash128;
///
/// let a = hash128(b"hello", 0);
/// let b = hash128(b"hello", 42);
/// assert_ne!(a, b);
/// assert_eq!(a, hash128(b"hello", 0));
/// ```
pub fn hash128(data: &[u8], seed: u32) -> HashPair {
    let mut h1 = seed as u64;
    let mut h2 = seed as u64;

    let mut blocks = data.chunks_exact(16);
    for block in &mut blocks {
        let k1 = read_u64_le(&block[..8]);
        let k2 = read_u64_le(&block[8..]);

        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(27);
        h1 = h1.wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        h2 ^= mix_k2(k2);
        h2 = h2.rotate_left(31);
        h2 = h2.wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    // Tail bytes 8..15 feed the h2 lane before bytes 0..7 feed h1.
    let tail = blocks.remainder();
    if tail.len() > 8 {
        h2 ^= mix_k2(pack_le(&tail[8..]));
    }
    if !tail.is_empty() {
        h1 ^= mix_k1(pack_le(&tail[..tail.len().min(8)]));
    }

    let len = data.len() as u64;
    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    HashPair { h1, h2 }
}

/// Hash the UTF-8 bytes of a text key
#[inline]
pub fn hash_str(key: &str, seed: u32) -> HashPair {
    hash128(key.as_bytes(), seed)
}

/// Murmur3 64-bit finalizer
///
/// Forces every input bit to affect every output bit.
#[inline]
pub fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

#[inline]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

#[inline]
fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Pack up to 8 bytes little-endian, missing high bytes left zero
#[inline]
fn pack_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        assert_eq!(
            hash128(b"GooneyGooGoo", 0).to_hex(),
            "c0250dde63f19e35e1da5e574c1f3f12"
        );
        assert_eq!(
            hash128(b"GooneyGooGoo", 42).to_hex(),
            "9668550ca6f44c4873ef1cf36e5dc3f2"
        );
        assert_eq!(
            hash128(b"The quick brown fox jumps over the lazy dog", 0),
            HashPair::new(0xe34bbc7bbc071b6c, 0x7a433ca9c49a9347)
        );
        assert_eq!(
            hash128(b"hello", 0),
            HashPair::new(0xcbd8a7b341bd9b02, 0x5b1e906a48ae1d19)
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(hash128(b"", 0), HashPair::new(0, 0));
        assert_eq!(
            hash128(b"", 1),
            HashPair::new(0x4610abe56eff5cb5, 0x51622daa78f83583)
        );
    }

    #[test]
    fn test_every_tail_length() {
        // Each tail length takes a different packing path; all must be distinct
        let data: Vec<u8> = (0u8..48).collect();
        let mut seen = std::collections::HashSet::new();
        for len in 0..=data.len() {
            assert!(seen.insert(hash128(&data[..len], 7)), "collision at len {}", len);
        }
    }

    #[test]
    fn test_tail_byte_sensitivity() {
        // Flipping a byte in either tail lane must change the digest
        let base = *b"0123456789abcde";
        let reference = hash128(&base, 0);
        for i in 0..base.len() {
            let mut flipped = base;
            flipped[i] ^= 0x01;
            assert_ne!(hash128(&flipped, 0), reference, "byte {} ignored", i);
        }
    }

    #[test]
    fn test_hash_str_matches_bytes() {
        assert_eq!(hash_str("GooneyGooGoo", 42), hash128(b"GooneyGooGoo", 42));
        assert_eq!(hash_str("héllo", 0), hash128("héllo".as_bytes(), 0));
    }

    #[test]
    fn test_hex_formats() {
        let pair = HashPair::new(0xab, 0x1);
        assert_eq!(pair.to_hex(), "00000000000000ab0000000000000001");
        assert_eq!(format!("{}", pair), pair.to_hex());
        assert_eq!(format!("{:X}", pair), "00000000000000AB0000000000000001");
    }

    #[test]
    fn test_folded_and_conversions() {
        let pair: HashPair = (0xf0, 0x0f).into();
        assert_eq!(pair.folded(), 0xff);
        let (h1, h2): (u64, u64) = pair.into();
        assert_eq!((h1, h2), (0xf0, 0x0f));
    }

    #[test]
    fn test_fmix64_fixed_points() {
        assert_eq!(fmix64(0), 0);
        assert_ne!(fmix64(1), 1);
        assert_ne!(fmix64(1), fmix64(2));
    }
}
