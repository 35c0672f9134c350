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

//! # Inclusion-Exclusion Range Summer
//!
//! Sums every integer in `[min, max]` divisible by at least one divisor of a
//! reduced list. The union of the multiple-sets is expanded by
//! inclusion-exclusion: the multiples of each divisor are added, the
//! multiples of the LCM of every pair are subtracted, those of every triple
//! are added back, and so on with alternating signs.
//!
//! Stopping after the pairwise correction is not enough in general. With
//! divisors `{2, 3, 5}` and `max = 30`, the number 30 is added three times and
//! subtracted three times, so it would be dropped from the sum.
//!
//! The expansion is built incrementally. It is kept as a map from LCM to a
//! signed coefficient, and each new divisor `d` adds the term `(d, +1)` plus
//! `(lcm(l, d), -c)` for every existing term `(l, c)`. Terms sharing an LCM
//! merge. Terms whose coefficient cancels to zero are dropped, because every
//! extension of them cancels as well. Terms whose LCM exceeds `max` are pruned,
//! because neither they nor any extension have a multiple in range. The number
//! of live terms is therefore bounded by the number of distinct LCMs below
//! `max`, never by the size of the range.
//!
//! ## Cost
//!
//! That bound is exponential in the number of divisors `d`. When the divisors
//! are pairwise coprime and their product does not exceed `max`, every
//! non-empty subset has its own LCM and the expansion holds `2^d - 1` terms,
//! so both time and memory grow as `O(2^d)`. Around thirty such divisors are
//! out of reach. Divisors that share factors, or a `max` that prunes the
//! larger LCMs, keep the expansion far smaller; two divisors always need at
//! most three terms.

use crate::{
    error::PreconditionError,
    num::arithmetic::{lcm, multiples_sum},
    range::SumRange,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use std::collections::BTreeMap;

/// A single inclusion-exclusion term: `coefficient * MultiplesSum(lcm)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    lcm: BigUint,
    coefficient: BigInt,
}

impl Term {
    /// The least common multiple shared by the subsets folded into this term.
    #[inline]
    pub fn lcm(&self) -> &BigUint {
        &self.lcm
    }

    /// The signed multiplicity of this term in the expansion.
    #[inline]
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }
}

/// The inclusion-exclusion expansion of a divisor list, restricted to LCMs
/// that do not exceed a maximum.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::summer::Expansion;
/// use num_bigint::{BigInt, BigUint};
///
/// let divisors = [3u32, 5].map(BigUint::from);
/// let expansion = Expansion::build(&divisors, &BigUint::from(20u32));
/// let terms: Vec<_> = expansion
///     .terms()
///     .map(|t| (t.lcm().clone(), t.coefficient().clone()))
///     .collect();
/// assert_eq!(
///     terms,
///     vec![
///         (BigUint::from(3u32), BigInt::from(1)),
///         (BigUint::from(5u32), BigInt::from(1)),
///         (BigUint::from(15u32), BigInt::from(-1)),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    terms: BTreeMap<BigUint, BigInt>,
}

impl Expansion {
    /// Builds the expansion of `divisors`, pruning every LCM above `maximum`.
    pub fn build(divisors: &[BigUint], maximum: &BigUint) -> Self {
        let mut terms: BTreeMap<BigUint, BigInt> = BTreeMap::new();

        for divisor in divisors {
            debug_assert!(
                !divisor.is_zero(),
                "called `Expansion::build` with a zero divisor"
            );
            if divisor > maximum {
                continue;
            }

            let mut updates: Vec<(BigUint, BigInt)> = Vec::with_capacity(terms.len() + 1);
            updates.push((divisor.clone(), BigInt::one()));
            for (l, c) in &terms {
                let m = lcm(l, divisor);
                if &m <= maximum {
                    updates.push((m, -c));
                }
            }

            for (l, c) in updates {
                *terms.entry(l).or_insert_with(BigInt::zero) += c;
            }
            terms.retain(|_, c| !c.is_zero());
        }

        Self { terms }
    }

    /// Returns the number of live terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if no divisor has a multiple below the maximum.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms in ascending LCM order.
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.terms.iter().map(|(l, c)| Term {
            lcm: l.clone(),
            coefficient: c.clone(),
        })
    }

    /// Evaluates the expansion over `[minimum, maximum]`.
    pub fn evaluate(&self, minimum: &BigUint, maximum: &BigUint) -> BigUint {
        let mut total = BigInt::zero();
        for (l, c) in &self.terms {
            let part = multiples_sum(l, minimum, maximum);
            total += BigInt::from(part) * c;
        }

        let (sign, magnitude) = total.into_parts();
        debug_assert!(
            sign != Sign::Minus,
            "inclusion-exclusion produced a negative sum"
        );
        magnitude
    }
}

/// Sums every integer in `[minimum, maximum]` divisible by at least one of
/// `reduced`.
///
/// `reduced` is expected to come from [`crate::divisor::reduce`]; an
/// unreduced list still yields the correct sum, only with more work.
///
/// # Errors
///
/// - `PreconditionError::EmptyDivisorSet` if `reduced` is empty.
/// - `PreconditionError::EmptyRange` if `minimum >= maximum`.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::summer::sum;
/// use num_bigint::BigUint;
///
/// let divisors = [3u32, 5].map(BigUint::from);
/// let total = sum(&divisors, &BigUint::from(1u32), &BigUint::from(20u32)).unwrap();
/// assert_eq!(total, BigUint::from(98u32));
/// ```
pub fn sum(
    reduced: &[BigUint],
    minimum: &BigUint,
    maximum: &BigUint,
) -> Result<BigUint, PreconditionError> {
    if reduced.is_empty() {
        return Err(PreconditionError::EmptyDivisorSet);
    }
    let range = SumRange::try_new(minimum.clone(), maximum.clone())?;
    sum_in_range(reduced, &range)
}

/// Like [`sum`], with the bounds taken from an already validated range.
///
/// # Errors
///
/// Returns `PreconditionError::EmptyDivisorSet` if `reduced` is empty.
pub fn sum_in_range(reduced: &[BigUint], range: &SumRange) -> Result<BigUint, PreconditionError> {
    if reduced.is_empty() {
        return Err(PreconditionError::EmptyDivisorSet);
    }

    let expansion = Expansion::build(reduced, range.maximum());
    let total = expansion.evaluate(range.minimum(), range.maximum());
    tracing::debug!(
        divisors = reduced.len(),
        terms = expansion.len(),
        %range,
        "computed divisor sum"
    );
    Ok(total)
}
