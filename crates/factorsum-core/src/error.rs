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

/// Raised when the core is invoked in violation of its contract.
///
/// These errors describe caller mistakes, not transient conditions. The core
/// never recovers from them or substitutes defaults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    /// The divisor set was empty.
    #[error("at least one divisor is required to compute a sum")]
    EmptyDivisorSet,
    /// The range contains no integer to sum because `minimum >= maximum`.
    #[error("the minimum ({minimum}) must be strictly less than the maximum ({maximum})")]
    EmptyRange {
        /// The requested inclusive lower bound.
        minimum: BigUint,
        /// The requested inclusive upper bound.
        maximum: BigUint,
    },
    /// A sum was requested before an upper bound was set.
    #[error("a maximum must be set before computing a sum")]
    MissingMaximum,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PreconditionError::EmptyDivisorSet.to_string(),
            "at least one divisor is required to compute a sum"
        );
        let e = PreconditionError::EmptyRange {
            minimum: BigUint::from(20u32),
            maximum: BigUint::from(18u32),
        };
        assert_eq!(
            e.to_string(),
            "the minimum (20) must be strictly less than the maximum (18)"
        );
    }
}
