//! # murmurbloom
//!
//! A Bloom filter backed by Murmur3 x64-128.
//!
//! One 128-bit digest per key seeds a whole family of derived hashes, so
//! inserting or querying a key costs a single pass over its bytes plus `k`
//! cheap mixes, independent of key length.
//!
//! ## Features
//!
//! - **Hashing**: Murmur3 x64-128 with seeds, plus a derived hash family
//! - **Membership**: Bloom filter sized from expected elements and target
//!   false positive rate, with no false negatives
//! - **Diagnostics**: fill ratio, estimated count and rate, text grid view
//!
//! ## Quick Start
//!
//! ```rust
//! use murmurbloom::prelude::*;
//!
//! let mut filter = BloomFilter::new(100, 0.001)?;
//! filter.insert("apples")?;
//!
//! assert!(filter.might_contain("apples")?);
//! assert!(!filter.might_contain("kiwis")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Hashing directly
//!
//! ```rust
//! use murmurbloom::hashing::{derive_hashes, hash128};
//!
//! let digest = hash128(b"GooneyGooGoo", 0);
//! assert_eq!(digest.to_hex(), "c0250dde63f19e35e1da5e574c1f3f12");
//!
//! let family: Vec<i64> = derive_hashes("GooneyGooGoo", 5).collect();
//! assert_eq!(family.len(), 5);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `membership` (default): Bloom filter
//! - `serde`: `Serialize` for digests and filter configuration
//! - `full`: Enable everything
//!
//! ## Thread safety
//!
//! Filters are plain owned data. Mutation needs `&mut`, so sharing one
//! between writers requires an external lock such as `Mutex<BloomFilter>`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod hashing;
pub mod math;
pub mod traits;

#[cfg(feature = "membership")]
#[cfg_attr(docsrs, doc(cfg(feature = "membership")))]
pub mod membership;

pub mod prelude {
    pub use crate::hashing::{derive_hashes, fill_hashes, hash128, DerivedHashes, HashPair};
    pub use crate::traits::*;

    #[cfg(feature = "membership")]
    pub use crate::membership::{BloomConfig, BloomFilter};
}

pub use hashing::{hash128, HashPair};
pub use traits::{BoundsError, ConfigError, MembershipFilter};

#[cfg(feature = "membership")]
pub use membership::{BloomConfig, BloomFilter};
