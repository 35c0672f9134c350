// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Closed-Form Divisor Arithmetic
//!
//! Exact helpers used by the range summer. The sum of the multiples of `n`
//! within `[min, max]` is an arithmetic series over the multiple indices
//! `min_i..=max_i`, scaled by `n`:
//!
//! - `max_i = floor(max / n)`, the largest index with `n * max_i <= max`.
//! - `min_i = floor((min - 1) / n) + 1`, the smallest index with `n * min_i >= min`.
//!
//! When `min_i > max_i` there is no multiple of `n` in range and the sum is zero.

use super::numeric::DivisorNumeric;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(a, 0) == a` and `gcd(0, 0) == 0`.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::num::arithmetic::gcd;
/// assert_eq!(gcd(&12u64, &18u64), 6);
/// assert_eq!(gcd(&7u64, &7u64), 7);
/// ```
pub fn gcd<T>(a: &T, b: &T) -> T
where
    T: DivisorNumeric,
{
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a.rem_ref(&b);
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, `a * b / gcd(a, b)`.
///
/// Returns zero if either operand is zero.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::num::arithmetic::lcm;
/// use num_bigint::BigUint;
///
/// let a = BigUint::from(4u32);
/// let b = BigUint::from(6u32);
/// assert_eq!(lcm(&a, &b), BigUint::from(12u32));
/// assert_eq!(lcm(&a, &a), a);
/// ```
pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    if a.is_zero() || b.is_zero() {
        return BigUint::zero();
    }
    (a / gcd(a, b)) * b
}

/// Computes `n * (min_i + (min_i + 1) + ... + max_i)`.
///
/// Returns zero when `min_i > max_i`.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::num::arithmetic::arithmetic_sum;
/// use num_bigint::BigUint;
///
/// // 3 * (1 + 2 + 3 + 4 + 5 + 6)
/// let s = arithmetic_sum(&BigUint::from(3u32), &BigUint::from(1u32), &BigUint::from(6u32));
/// assert_eq!(s, BigUint::from(63u32));
/// ```
pub fn arithmetic_sum(n: &BigUint, min_i: &BigUint, max_i: &BigUint) -> BigUint {
    if min_i > max_i {
        return BigUint::zero();
    }
    // One of (min_i + max_i) and (max_i - min_i + 1) is even, so the halving is exact.
    let terms = (max_i - min_i) + BigUint::one();
    let series = ((min_i + max_i) * terms) >> 1u32;
    n * series
}

/// Sum of all multiples of `n` that lie in `[minimum, maximum]`.
///
/// A `minimum` of zero behaves like one, since zero adds nothing to a sum.
///
/// # Panics
///
/// In debug builds, panics if `n` is zero.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::num::arithmetic::multiples_sum;
/// use num_bigint::BigUint;
///
/// let n = BigUint::from(5u32);
/// // 5 + 10 + 15 + 20
/// assert_eq!(multiples_sum(&n, &BigUint::from(1u32), &BigUint::from(20u32)), BigUint::from(50u32));
/// // 10 + 15
/// assert_eq!(multiples_sum(&n, &BigUint::from(6u32), &BigUint::from(19u32)), BigUint::from(25u32));
/// ```
pub fn multiples_sum(n: &BigUint, minimum: &BigUint, maximum: &BigUint) -> BigUint {
    debug_assert!(!n.is_zero(), "called `multiples_sum` with a zero divisor");

    let lower = if minimum.is_zero() {
        BigUint::one()
    } else {
        minimum.clone()
    };
    let min_i = (lower - BigUint::one()) / n + BigUint::one();
    let max_i = maximum / n;
    arithmetic_sum(n, &min_i, &max_i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn brute_multiples_sum(n: u64, minimum: u64, maximum: u64) -> u64 {
        (minimum..=maximum).filter(|k| k % n == 0).sum()
    }

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(&12u64, &18u64), 6);
        assert_eq!(gcd(&18u64, &12u64), 6);
        assert_eq!(gcd(&17u64, &5u64), 1);
        assert_eq!(gcd(&9u64, &0u64), 9);
        assert_eq!(gcd(&0u64, &9u64), 9);
        assert_eq!(gcd(&0u64, &0u64), 0);
    }

    #[test]
    fn test_gcd_biguint_matches_primitive() {
        for a in 1u64..40 {
            for b in 1u64..40 {
                assert_eq!(gcd(&big(a), &big(b)), big(gcd(&a, &b)));
            }
        }
    }

    #[test]
    fn test_lcm_basic() {
        assert_eq!(lcm(&big(3), &big(5)), big(15));
        assert_eq!(lcm(&big(4), &big(6)), big(12));
        assert_eq!(lcm(&big(6), &big(6)), big(6));
        assert_eq!(lcm(&big(1), &big(9)), big(9));
        assert_eq!(lcm(&big(0), &big(9)), big(0));
    }

    #[test]
    fn test_lcm_exceeds_u64() {
        let a = big(u64::MAX);
        let b = big(u64::MAX - 1);
        // Consecutive integers are coprime.
        assert_eq!(lcm(&a, &b), &a * &b);
    }

    #[test]
    fn test_arithmetic_sum_empty_when_reversed() {
        assert_eq!(arithmetic_sum(&big(3), &big(5), &big(4)), big(0));
    }

    #[test]
    fn test_arithmetic_sum_single_term() {
        assert_eq!(arithmetic_sum(&big(7), &big(4), &big(4)), big(28));
    }

    #[test]
    fn test_arithmetic_sum_from_zero() {
        // 2 * (0 + 1 + 2 + 3)
        assert_eq!(arithmetic_sum(&big(2), &big(0), &big(3)), big(12));
    }

    #[test]
    fn test_multiples_sum_seed_values() {
        assert_eq!(multiples_sum(&big(3), &big(1), &big(20)), big(63));
        assert_eq!(multiples_sum(&big(5), &big(1), &big(20)), big(50));
        assert_eq!(multiples_sum(&big(15), &big(1), &big(20)), big(15));
        assert_eq!(multiples_sum(&big(3), &big(18), &big(20)), big(18));
        assert_eq!(multiples_sum(&big(5), &big(18), &big(20)), big(20));
    }

    #[test]
    fn test_multiples_sum_no_multiple_in_range() {
        assert_eq!(multiples_sum(&big(7), &big(8), &big(13)), big(0));
        assert_eq!(multiples_sum(&big(50), &big(1), &big(20)), big(0));
    }

    #[test]
    fn test_multiples_sum_zero_minimum_equals_one() {
        for n in 1u64..12 {
            assert_eq!(
                multiples_sum(&big(n), &big(0), &big(50)),
                multiples_sum(&big(n), &big(1), &big(50))
            );
        }
    }

    #[test]
    fn test_multiples_sum_matches_brute_force() {
        for n in 1u64..=12 {
            for minimum in 1u64..=30 {
                for maximum in minimum..=45 {
                    assert_eq!(
                        multiples_sum(&big(n), &big(minimum), &big(maximum)),
                        big(brute_multiples_sum(n, minimum, maximum)),
                        "n={n}, minimum={minimum}, maximum={maximum}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_multiples_sum_huge_range() {
        // Sum of 1..=10^30 is 10^30 * (10^30 + 1) / 2.
        let max = BigUint::from(10u32).pow(30);
        let expected = (&max * (&max + BigUint::one())) >> 1u32;
        assert_eq!(multiples_sum(&big(1), &big(1), &max), expected);
    }
}
