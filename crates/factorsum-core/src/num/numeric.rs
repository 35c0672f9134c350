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

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt::{Debug, Display};

/// A trait alias for unsigned integer types that can act as divisors.
///
/// Remainders are taken by reference so that arbitrary-precision types do not
/// need to be cloned on every divisibility check.
///
/// # Examples
///
/// ```rust
/// # use factorsum_core::num::numeric::DivisorNumeric;
/// use num_bigint::BigUint;
///
/// assert!(3u64.divides(&12));
/// assert!(!5u64.divides(&12));
/// assert!(BigUint::from(7u32).divides(&BigUint::from(49u32)));
/// ```
pub trait DivisorNumeric: Clone + Ord + Debug + Display + Zero + One {
    /// Returns `self % rhs` without consuming either operand.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem_ref(&self, rhs: &Self) -> Self;

    /// Returns `true` if `n` is an exact multiple of `self`.
    #[inline]
    fn divides(&self, n: &Self) -> bool {
        n.rem_ref(self).is_zero()
    }
}

macro_rules! divisor_numeric_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl DivisorNumeric for $t {
                #[inline(always)]
                fn rem_ref(&self, rhs: &Self) -> Self {
                    *self % *rhs
                }
            }
        )*
    };
}

divisor_numeric_impl!(u8, u16, u32, u64, u128, usize);

impl DivisorNumeric for BigUint {
    #[inline]
    fn rem_ref(&self, rhs: &Self) -> Self {
        self % rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divides_primitives() {
        assert!(1u8.divides(&255));
        assert!(6u32.divides(&36));
        assert!(!6u32.divides(&35));
        assert!(4usize.divides(&0));
    }

    #[test]
    fn test_divides_self() {
        assert!(17u64.divides(&17));
        assert!(BigUint::from(17u32).divides(&BigUint::from(17u32)));
    }

    #[test]
    fn test_rem_ref_biguint_large() {
        let big = BigUint::from(u128::MAX) * BigUint::from(3u32) + BigUint::from(2u32);
        assert_eq!(big.rem_ref(&BigUint::from(3u32)), BigUint::from(2u32));
    }
}
