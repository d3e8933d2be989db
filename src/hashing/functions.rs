//! Deterministic hash functions
//!
//! Every function maps `(key, size)` into `[0, size)`.
//!
//! # Panics
//!
//! Every function panics if `size` is 0. Callers pass an already validated
//! table capacity.

/// Golden ratio minus one, the multiplication method constant
pub const GOLDEN_FRACTION: f64 = 0.6180339887;

/// Division method: `key mod size`
pub fn division(key: i64, size: usize) -> usize {
    debug_assert!(size > 0, "hash size must be non-zero");
    key.rem_euclid(size as i64) as usize
}

/// Mid-square method
///
/// Squares the key, keeps the middle `max(digits / 2, 2)` decimal digits of
/// the square and reduces them mod `size`.
pub fn mid_square(key: i64, size: usize) -> usize {
    debug_assert!(size > 0, "hash size must be non-zero");
    let square = (key.unsigned_abs() as u128) * (key.unsigned_abs() as u128);
    let digits = decimal_digits(square);

    let middle = (digits / 2).max(2);
    let dropped = digits.saturating_sub(middle) / 2;

    let shifted = square / 10u128.pow(dropped);
    let window = shifted % 10u128.pow(middle);

    (window % size as u128) as usize
}

/// Folding method: sum of 3-digit groups, mod `size`
pub fn folding(key: i64, size: usize) -> usize {
    debug_assert!(size > 0, "hash size must be non-zero");
    let mut rest = key.unsigned_abs();
    let mut sum: u64 = 0;

    while rest > 0 {
        sum += rest % 1000;
        rest /= 1000;
    }

    (sum % size as u64) as usize
}

/// Multiplication method: `floor(size * frac(key * A))`
pub fn multiplication(key: i64, size: usize) -> usize {
    debug_assert!(size > 0, "hash size must be non-zero");
    let product = key as f64 * GOLDEN_FRACTION;
    let fraction = product - product.floor();

    ((fraction * size as f64) as usize).min(size - 1)
}

fn decimal_digits(mut value: u128) -> u32 {
    let mut digits = 0;
    while value > 0 {
        digits += 1;
        value /= 10;
    }
    digits
}
