//! Hash engine
//!
//! A Murmur3 x64-128 implementation and the derived hash family built on
//! top of it. One 128-bit digest per key is enough to produce any number of
//! bit positions for a Bloom filter. xxHash64 and FNV-1a are available for
//! callers that only need a single 64-bit word.
//!
//! Not collision resistant: do not use where an adversary picks the input.
//!
//! # Example
//!
//! ```
//! use murmurbloom::hashing::{derive_hashes, hash128};
//!
//! let pair = hash128(b"GooneyGooGoo", 42);
//! assert_eq!(pair.to_hex(), "9668550ca6f44c4873ef1cf36e5dc3f2");
//!
//! let positions: Vec<i64> = derive_hashes("GooneyGooGoo", 8).collect();
//! assert_eq!(positions.len(), 8);
//! ```

mod family;
mod hash64;
mod murmur3;

pub use family::{
    derive_hashes, derived_value, fill_hashes, DerivedHashes, FAMILY_SEED, HASH_MULTIPLIER,
};
pub use hash64::{fnv1a64, fnv1a64_with_seed, xxh64};
pub use murmur3::{fmix64, hash128, hash_str, HashPair};
