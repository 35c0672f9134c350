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

//! # Divisor Reduction
//!
//! Every multiple of a divisor `d` is also a multiple of any divisor of `d`,
//! so a divisor that is an exact multiple of another member of the set adds
//! nothing to the union of their multiples. `reduce` removes all such entries
//! and returns the survivors in ascending order.
//!
//! Each incoming divisor `n` is handled in two separate steps against the
//! working list:
//!
//! 1. Redundancy: if an entry `m <= n` divides `n` (this includes `m == n`),
//!    `n` is discarded and the list is left untouched.
//! 2. Supersession: every entry `m > n` that `n` divides is removed, then `n`
//!    is inserted at its sorted position.
//!
//! The resulting set does not depend on the order in which divisors arrive.

use crate::{error::PreconditionError, num::numeric::DivisorNumeric};

/// Reduces `divisors` to the minimal equivalent set, sorted ascending.
///
/// Duplicates in the input collapse to a single entry. All inputs must be
/// non-zero; zero is rejected by callers before it reaches the core.
///
/// # Errors
///
/// Returns `PreconditionError::EmptyDivisorSet` if `divisors` is empty.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::divisor::reduce;
/// assert_eq!(reduce([3u64, 5, 6]).unwrap(), vec![3, 5]);
/// assert_eq!(reduce([6u64, 5, 3]).unwrap(), vec![3, 5]);
/// assert_eq!(reduce([12u64, 4, 8, 2]).unwrap(), vec![2]);
/// assert!(reduce(Vec::<u64>::new()).is_err());
/// ```
pub fn reduce<T, I>(divisors: I) -> Result<Vec<T>, PreconditionError>
where
    T: DivisorNumeric,
    I: IntoIterator<Item = T>,
{
    let mut reduced: Vec<T> = Vec::new();
    for divisor in divisors {
        insert_divisor(&mut reduced, divisor);
    }

    if reduced.is_empty() {
        return Err(PreconditionError::EmptyDivisorSet);
    }

    debug_assert!(
        is_reduced(&reduced),
        "`reduce` produced a list that is not sorted or not minimal"
    );
    tracing::debug!(divisors = reduced.len(), "reduced divisor set");
    Ok(reduced)
}

/// Returns `true` if `divisors` is strictly ascending and no element divides
/// another.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::divisor::is_reduced;
/// assert!(is_reduced(&[3u64, 5, 7]));
/// assert!(!is_reduced(&[3u64, 6]));
/// assert!(!is_reduced(&[5u64, 3]));
/// ```
pub fn is_reduced<T>(divisors: &[T]) -> bool
where
    T: DivisorNumeric,
{
    divisors.windows(2).all(|w| w[0] < w[1])
        && divisors.iter().enumerate().all(|(i, m)| {
            divisors[i + 1..].iter().all(|n| !m.divides(n))
        })
}

#[inline]
fn is_redundant<T>(reduced: &[T], candidate: &T) -> bool
where
    T: DivisorNumeric,
{
    reduced
        .iter()
        .take_while(|m| *m <= candidate)
        .any(|m| m.divides(candidate))
}

fn insert_divisor<T>(reduced: &mut Vec<T>, candidate: T)
where
    T: DivisorNumeric,
{
    debug_assert!(
        !candidate.is_zero(),
        "called `reduce` with a zero divisor"
    );

    if is_redundant(reduced, &candidate) {
        return;
    }

    reduced.retain(|m| !(*m > candidate && candidate.divides(m)));
    let at = reduced.partition_point(|m| *m < candidate);
    reduced.insert(at, candidate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_reduce_empty_is_error() {
        assert_eq!(
            reduce(Vec::<u64>::new()),
            Err(PreconditionError::EmptyDivisorSet)
        );
    }

    #[test]
    fn test_reduce_single() {
        assert_eq!(reduce([7u64]).unwrap(), vec![7]);
    }

    #[test]
    fn test_reduce_drops_later_multiple() {
        assert_eq!(reduce([3u64, 5, 6]).unwrap(), vec![3, 5]);
    }

    #[test]
    fn test_reduce_drops_earlier_multiple() {
        assert_eq!(reduce([6u64, 3, 5]).unwrap(), vec![3, 5]);
        assert_eq!(reduce([5u64, 6, 3]).unwrap(), vec![3, 5]);
    }

    #[test]
    fn test_reduce_new_divisor_supersedes_several() {
        assert_eq!(reduce([8u64, 12, 9, 2]).unwrap(), vec![2, 9]);
    }

    #[test]
    fn test_reduce_duplicates_collapse() {
        assert_eq!(reduce([4u64, 4, 4]).unwrap(), vec![4]);
    }

    #[test]
    fn test_reduce_one_absorbs_everything() {
        assert_eq!(reduce([10u64, 1, 7, 3]).unwrap(), vec![1]);
    }

    #[test]
    fn test_reduce_keeps_sorted_order() {
        assert_eq!(reduce([11u64, 7, 5, 13, 2]).unwrap(), vec![2, 5, 7, 11, 13]);
    }

    #[test]
    fn test_reduce_chain() {
        assert_eq!(reduce([16u64, 8, 4, 2]).unwrap(), vec![2]);
        assert_eq!(reduce([2u64, 4, 8, 16]).unwrap(), vec![2]);
    }

    #[test]
    fn test_reduce_biguint() {
        let input = [15u32, 10, 4, 6].map(BigUint::from);
        let expected: Vec<BigUint> = [4u32, 6, 10, 15].map(BigUint::from).to_vec();
        assert_eq!(reduce(input).unwrap(), expected);
    }

    #[test]
    fn test_reduce_order_independent() {
        let base = [6u64, 10, 15, 4, 9, 25, 30, 2];
        let expected = reduce(base).unwrap();
        let mut rotated = base;
        for _ in 0..base.len() {
            rotated.rotate_left(1);
            assert_eq!(reduce(rotated).unwrap(), expected);
        }
        let mut reversed = base;
        reversed.reverse();
        assert_eq!(reduce(reversed).unwrap(), expected);
    }

    #[test]
    fn test_is_reduced() {
        assert!(is_reduced::<u64>(&[]));
        assert!(is_reduced(&[1u64]));
        assert!(is_reduced(&[4u64, 6, 9]));
        assert!(!is_reduced(&[2u64, 9, 4]));
        assert!(!is_reduced(&[3u64, 3]));
    }
}
