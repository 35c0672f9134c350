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

use crate::error::PreconditionError;
use num_bigint::BigUint;

/// A closed interval `[minimum, maximum]` bounding a summation.
///
/// # Invariants
///
/// `minimum` must always be strictly less than `maximum`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SumRange {
    minimum: BigUint,
    maximum: BigUint,
}

impl SumRange {
    /// Creates a new `SumRange` if `minimum < maximum`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use factorsum_core::range::SumRange;
    /// assert!(SumRange::try_new(18u32, 20u32).is_ok());
    /// assert!(SumRange::try_new(20u32, 18u32).is_err());
    /// assert!(SumRange::try_new(20u32, 20u32).is_err());
    /// ```
    #[inline]
    pub fn try_new(
        minimum: impl Into<BigUint>,
        maximum: impl Into<BigUint>,
    ) -> Result<Self, PreconditionError> {
        let minimum = minimum.into();
        let maximum = maximum.into();
        if minimum < maximum {
            Ok(Self { minimum, maximum })
        } else {
            Err(PreconditionError::EmptyRange { minimum, maximum })
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn minimum(&self) -> &BigUint {
        &self.minimum
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn maximum(&self) -> &BigUint {
        &self.maximum
    }
}

impl std::fmt::Debug for SumRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SumRange[{}, {}]", self.minimum, self.maximum)
    }
}

impl std::fmt::Display for SumRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.minimum, self.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let r = SumRange::try_new(1u32, 20u32).unwrap();
        assert_eq!(r.minimum(), &BigUint::from(1u32));
        assert_eq!(r.maximum(), &BigUint::from(20u32));
    }

    #[test]
    fn test_try_new_reports_bounds() {
        let err = SumRange::try_new(20u32, 18u32).unwrap_err();
        assert_eq!(
            err,
            PreconditionError::EmptyRange {
                minimum: BigUint::from(20u32),
                maximum: BigUint::from(18u32),
            }
        );
        assert!(SumRange::try_new(5u32, 5u32).is_err());
    }

    #[test]
    fn test_zero_minimum_is_accepted() {
        let r = SumRange::try_new(0u32, 1u32).unwrap();
        assert_eq!(r.to_string(), "[0, 1]");
    }

    #[test]
    fn test_debug_names_the_type() {
        let r = SumRange::try_new(18u32, 20u32).unwrap();
        assert_eq!(format!("{r:?}"), "SumRange[18, 20]");
    }
}
