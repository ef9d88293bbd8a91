//! Single-word 64-bit hashers
//!
//! Alternatives to folding a Murmur3 digest when one `u64` is enough:
//! xxHash64 (via `xxhash-rust`) and FNV-1a.

use xxhash_rust::xxh64::xxh64 as xxh64_impl;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// xxHash64 of `data` under `seed`
///
/// # Example
///
/// ```
/// use murmurbloom::hashing::xxh64;
///
/// assert_eq!(xxh64(b"abc", 0), 0x44bc2cf5ad770999);
/// ```
#[inline]
pub fn xxh64(data: &[u8], seed: u64) -> u64 {
    xxh64_impl(data, seed)
}

/// FNV-1a 64-bit hash of `data`
///
/// Byte-at-a-time, so only worth it for short keys. Empty input hashes to
/// the offset basis.
#[inline]
pub fn fnv1a64(data: &[u8]) -> u64 {
    fnv1a64_with_seed(data, 0)
}

/// FNV-1a with `seed` XORed into the offset basis
#[inline]
pub fn fnv1a64_with_seed(data: &[u8], seed: u64) -> u64 {
    let mut hash = FNV_OFFSET_BASIS ^ seed;

    for &byte in data {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xxh64_reference_vectors() {
        assert_eq!(xxh64(b"", 0), 0xef46db3751d8e999);
        assert_eq!(xxh64(b"a", 0), 0xd24ec4f1a98c6e5b);
        assert_eq!(xxh64(b"abc", 0), 0x44bc2cf5ad770999);
        assert_eq!(
            xxh64(b"The quick brown fox jumps over the lazy dog", 0),
            0x0b242d361fda71bc
        );
    }

    #[test]
    fn test_xxh64_seed() {
        assert_eq!(xxh64(b"GooneyGooGoo", 0), 0x3c7b20446b034063);
        assert_eq!(xxh64(b"GooneyGooGoo", 42), 0xcfa1960750e3c238);
    }

    #[test]
    fn test_fnv1a64_reference_vectors() {
        assert_eq!(fnv1a64(b""), 0xcbf29ce484222325);
        assert_eq!(fnv1a64(b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a64(b"GooneyGooGoo"), 0x17423286ef49ef02);
    }

    #[test]
    fn test_fnv1a64_seed_changes_hash() {
        assert_eq!(fnv1a64_with_seed(b"abc", 0), fnv1a64(b"abc"));
        assert_ne!(fnv1a64_with_seed(b"abc", 0x517cc1b727220a95), fnv1a64(b"abc"));
    }
}
