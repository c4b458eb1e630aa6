//! Stateless, seeded pseudo-random floats.
//!
//! Used only to vary cosmetic orbit orientation reproducibly. Nothing here is
//! suitable where unpredictability matters.

/// Key hashed in place of an empty one.
pub const EMPTY_KEY_FALLBACK: &str = "default";

/// 32-bit rolling hash (`h = h * 31 + unit`, wrapping) over the UTF-16 code units
/// of `key` followed by the decimal digits of `index`.
pub fn rolling_hash(key: &str, index: u32) -> i32 {
    let key = if key.is_empty() { EMPTY_KEY_FALLBACK } else { key };
    let digits = index.to_string();
    key.encode_utf16()
        .chain(digits.encode_utf16())
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
}

/// Deterministic float in `[0, 1)` derived from a string key and an index.
///
/// Pure: the same arguments produce the same value in any process, on any
/// thread, any number of times.
pub fn seeded_random(key: &str, index: u32) -> f64 {
    let hash = rolling_hash(key, index);
    f64::from(hash).sin().abs() % 1.0
}
