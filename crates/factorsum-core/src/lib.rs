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

//! # Factor Sum Core
//!
//! Closed-form summation of every integer in a closed range `[min, max]` that
//! is divisible by at least one member of a divisor set. The work is
//! independent of the size of the range: it depends only on the number of
//! divisors and on how many of their least common multiples fit below `max`.
//!
//! ## Modules
//!
//! - `divisor`: Reduction of a divisor set to its minimal equivalent, sorted
//!   ascending, with every divisor that is a multiple of another removed.
//! - `summer`: Inclusion-exclusion over least common multiples of a reduced
//!   divisor list.
//! - `num`: Exact arithmetic helpers (`gcd`, `lcm`, arithmetic series and
//!   sums of multiples) and the `DivisorNumeric` trait the reducer is generic over.
//! - `range`: The validated closed interval `SumRange`.
//! - `sum`: The caller-owned `Sum` aggregate that ties everything together.
//! - `error`: `PreconditionError`, raised when the core is called with an
//!   empty divisor set or an empty range.
//!
//! ## Usage
//!
//! ```rust
//! use factorsum_core::sum::Sum;
//! use num_bigint::BigUint;
//!
//! let mut sum = Sum::new();
//! sum.add([3u64, 5]);
//! sum.set_maximum(20u64);
//! assert_eq!(sum.compute_sum().unwrap(), BigUint::from(98u32));
//! ```

pub mod divisor;
pub mod error;
pub mod num;
pub mod range;
pub mod sum;
pub mod summer;
