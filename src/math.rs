//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.
//! Also hosts the integer helpers shared by the hash engine and the filter.

#[cfg(feature = "std")]
#[inline]
pub fn ln(x: f64) -> f64 {
    x.ln()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn ln(x: f64) -> f64 {
    libm::log(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    x.powi(n)
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    libm::pow(x, n as f64)
}

#[cfg(feature = "std")]
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}

/// Residue of `value` modulo `modulus`, always in `0..modulus`
///
/// Derived hashes are signed, so a plain `%` would yield negative residues
/// for half of them. Returns `None` when `modulus` is zero or does not fit
/// in an `i64`.
#[inline]
pub fn non_negative_mod(value: i64, modulus: u64) -> Option<u64> {
    let modulus = i64::try_from(modulus).ok().filter(|&m| m > 0)?;
    Some(value.rem_euclid(modulus) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_mod() {
        assert_eq!(non_negative_mod(7, 5), Some(2));
        assert_eq!(non_negative_mod(-7, 5), Some(3));
        assert_eq!(non_negative_mod(-5, 5), Some(0));
        assert_eq!(non_negative_mod(i64::MIN, 1454), Some(i64::MIN.rem_euclid(1454) as u64));
        assert!(non_negative_mod(i64::MIN, 1454).unwrap() < 1454);
    }

    #[test]
    fn test_non_negative_mod_rejects_bad_modulus() {
        assert_eq!(non_negative_mod(1, 0), None);
        assert_eq!(non_negative_mod(1, u64::MAX), None);
    }
}
