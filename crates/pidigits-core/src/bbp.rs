//! Bailey–Borwein–Plouffe digit extraction.
//!
//! The n-th hex digit of π (after the point) is the leading digit of the
//! fractional part of `16^n · π`, which the BBP identity expresses as
//! `4·S(1,n) − 2·S(4,n) − S(5,n) − S(6,n)` with
//! `S(m,n) = Σ_k 16^(n−k) / (8k + m)`.
//!
//! All arithmetic is `f64`. One sum yields [`DIGITS_PER_SUM`] digits by
//! repeatedly multiplying the fractional part by 16.

use crate::constants::{DIGITS_PER_SUM, EPSILON};

/// Compute `16^p mod m` by binary exponentiation.
///
/// Products are taken in `u128` so any `u64` modulus is safe.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hex_exponent_modulo(p: u64, m: u64) -> u64 {
    if m <= 1 {
        return 0;
    }
    let modulus = u128::from(m);
    let mut base = 16 % modulus;
    let mut exp = p;
    let mut result: u128 = 1;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }

    // result < m, so it fits back into u64
    result as u64
}

/// Fractional part, always in `[0, 1)` for finite input.
#[inline]
fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Returns the sum of `16^(n − k) / (8k + m)` for k from 0 upward.
///
/// Terms with a non-negative exponent go through [`hex_exponent_modulo`]
/// and only their fractional contribution is kept. The negative-exponent
/// tail stops at the first term below [`EPSILON`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn series_sum(m: u64, n: u64) -> f64 {
    let mut sum = 0.0f64;

    for k in 0..n {
        let d = 8 * k + m;
        let term = hex_exponent_modulo(n - k, d) as f64 / d as f64;
        sum = fract(sum + term);
    }

    let mut k = n;
    let mut scale = 1.0f64;
    loop {
        let term = scale / (8 * k + m) as f64;
        if term < EPSILON {
            break;
        }
        sum += term;
        scale /= 16.0;
        k += 1;
    }

    sum
}

/// Fractional part of `16^n · π`, i.e. the hex expansion starting at digit `n`.
#[must_use]
pub fn pi_fraction(n: u64) -> f64 {
    fract(4.0 * series_sum(1, n) - 2.0 * series_sum(4, n) - series_sum(5, n) - series_sum(6, n))
}

/// Extract `count` hex digits of π starting at offset `start`.
///
/// `on_digit` runs once after every digit is produced, which lets callers
/// publish progress at single-digit granularity.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn extract_digits(start: u64, count: usize, mut on_digit: impl FnMut()) -> Vec<u8> {
    let mut digits = Vec::with_capacity(count);
    let mut offset = start;
    let mut x = 0.0f64;

    for i in 0..count as u64 {
        if i % DIGITS_PER_SUM == 0 {
            x = pi_fraction(offset);
            offset += DIGITS_PER_SUM;
        }

        x = 16.0 * fract(x);
        // Rounding can push a fraction of 0.999.. up to exactly 16.0
        digits.push((x as u8).min(15));
        on_digit();
    }

    digits
}

/// Extract `count` hex digits of π starting at `start`, without progress callbacks.
#[must_use]
pub fn hex_digits(start: u64, count: usize) -> Vec<u8> {
    extract_digits(start, count, || {})
}
