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

//! # Sum Aggregate
//!
//! `Sum` owns the mutable state of one summation session: the divisor set and
//! the bounds. Each aggregate is constructed explicitly by its caller and
//! shares nothing with any other instance.
//!
//! The reduced divisor list is never cached. `compute_sum` derives it from the
//! current divisor set every time, so mutations between calls are always
//! observed.
//!
//! `Sum` performs no internal locking; callers running on several threads
//! must serialize mutation and computation themselves.

use crate::{divisor::reduce, error::PreconditionError, range::SumRange, summer::sum_in_range};
use num_bigint::BigUint;
use num_traits::One;
use std::collections::BTreeSet;

/// Divisor set and bounds for a summation, plus the operations that mutate
/// and evaluate them.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::sum::Sum;
/// use num_bigint::BigUint;
///
/// let mut sum = Sum::new().with_maximum(20u64);
/// let added = sum.add([3u64, 5, 6]);
/// assert_eq!(added.len(), 3);
/// assert_eq!(sum.compute_sum().unwrap(), BigUint::from(98u32));
///
/// sum.set_minimum(18u64);
/// assert_eq!(sum.compute_sum().unwrap(), BigUint::from(38u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sum {
    divisors: BTreeSet<BigUint>,
    minimum: BigUint,
    maximum: Option<BigUint>,
}

impl Default for Sum {
    fn default() -> Self {
        Self {
            divisors: BTreeSet::new(),
            minimum: BigUint::one(),
            maximum: None,
        }
    }
}

impl Sum {
    /// Creates an empty aggregate with minimum 1 and no maximum.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive upper bound.
    #[inline]
    pub fn with_maximum(mut self, maximum: impl Into<BigUint>) -> Self {
        self.set_maximum(maximum);
        self
    }

    /// Sets the inclusive lower bound.
    #[inline]
    pub fn with_minimum(mut self, minimum: impl Into<BigUint>) -> Self {
        self.set_minimum(minimum);
        self
    }

    /// Adds divisors, returning the ones that were not already present.
    ///
    /// Divisors must be positive. Zero is stored like any other value, but a
    /// set containing it makes [`Sum::compute_sum`] panic; validate input
    /// before it reaches this call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use factorsum_core::sum::Sum;
    /// use num_bigint::BigUint;
    ///
    /// let mut sum = Sum::new();
    /// sum.add([3u64, 5]);
    /// let added = sum.add([3u64, 5, 6]);
    /// assert_eq!(added.into_iter().collect::<Vec<_>>(), vec![BigUint::from(6u32)]);
    /// ```
    pub fn add<I, D>(&mut self, divisors: I) -> BTreeSet<BigUint>
    where
        I: IntoIterator<Item = D>,
        D: Into<BigUint>,
    {
        let mut added = BTreeSet::new();
        for divisor in divisors {
            let divisor = divisor.into();
            if self.divisors.insert(divisor.clone()) {
                added.insert(divisor);
            }
        }
        tracing::debug!(added = added.len(), total = self.divisors.len(), "added divisors");
        added
    }

    /// Removes divisors, returning the ones that were actually present.
    pub fn remove<I, D>(&mut self, divisors: I) -> BTreeSet<BigUint>
    where
        I: IntoIterator<Item = D>,
        D: Into<BigUint>,
    {
        let mut removed = BTreeSet::new();
        for divisor in divisors {
            let divisor = divisor.into();
            if self.divisors.remove(&divisor) {
                removed.insert(divisor);
            }
        }
        tracing::debug!(removed = removed.len(), total = self.divisors.len(), "removed divisors");
        removed
    }

    /// Removes every divisor. Bounds are left untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.divisors.clear();
    }

    /// Sets the inclusive upper bound.
    #[inline]
    pub fn set_maximum(&mut self, maximum: impl Into<BigUint>) {
        self.maximum = Some(maximum.into());
    }

    /// Sets the inclusive lower bound. Zero is accepted and behaves like one.
    #[inline]
    pub fn set_minimum(&mut self, minimum: impl Into<BigUint>) {
        self.minimum = minimum.into();
    }

    /// Returns the current divisor set in ascending order.
    #[inline]
    pub fn divisors(&self) -> &BTreeSet<BigUint> {
        &self.divisors
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn minimum(&self) -> &BigUint {
        &self.minimum
    }

    /// Returns the inclusive upper bound, if one has been set.
    #[inline]
    pub fn maximum(&self) -> Option<&BigUint> {
        self.maximum.as_ref()
    }

    /// Returns `true` if at least one divisor is set.
    #[inline]
    pub fn has_divisors(&self) -> bool {
        !self.divisors.is_empty()
    }

    /// Derives the reduced divisor list from the current divisor set.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError::EmptyDivisorSet` if no divisor is set.
    pub fn reduced_divisors(&self) -> Result<Vec<BigUint>, PreconditionError> {
        reduce(self.divisors.iter().cloned())
    }

    /// Computes the sum of every integer within the bounds divisible by at
    /// least one divisor.
    ///
    /// # Errors
    ///
    /// - `PreconditionError::EmptyDivisorSet` if no divisor is set.
    /// - `PreconditionError::MissingMaximum` if no maximum is set.
    /// - `PreconditionError::EmptyRange` if `minimum >= maximum`.
    ///
    /// # Panics
    ///
    /// Panics if the divisor set contains zero.
    pub fn compute_sum(&self) -> Result<BigUint, PreconditionError> {
        let reduced = self.reduced_divisors()?;
        let maximum = self
            .maximum
            .clone()
            .ok_or(PreconditionError::MissingMaximum)?;
        let range = SumRange::try_new(self.minimum.clone(), maximum)?;
        sum_in_range(&reduced, &range)
    }
}
