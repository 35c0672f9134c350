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

//! Validation of user-supplied integers.
//!
//! Accepted syntax is an optional `+` sign followed by decimal digits, with
//! surrounding whitespace ignored (`" + 42 "` is 42). Anything else, including
//! negative numbers, is rejected with a `ValidationError`.

use num_bigint::BigUint;
use num_traits::Zero;

/// Raised at the boundary when user input cannot be used by the core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The token is not an unsigned decimal integer.
    #[error("'{0}' is not a non-negative integer")]
    NotAnInteger(String),
    /// The value is zero where a positive integer is required.
    #[error("value must be a positive integer")]
    NotPositive,
    /// No value was supplied.
    #[error("the following arguments are required: INT")]
    Missing,
    /// The maximum does not exceed the minimum.
    #[error("MAX ({maximum}) must be strictly greater than MIN ({minimum})")]
    RangeOrder {
        /// The requested lower bound.
        minimum: BigUint,
        /// The requested upper bound.
        maximum: BigUint,
    },
}

/// Parses a non-negative integer. Zero is allowed.
///
/// # Examples
///
/// ```rust
/// # use factorsum_cli::input::parse_natural;
/// use num_bigint::BigUint;
///
/// assert_eq!(parse_natural(" +18 ").unwrap(), BigUint::from(18u32));
/// assert_eq!(parse_natural("0").unwrap(), BigUint::from(0u32));
/// assert!(parse_natural("-3").is_err());
/// ```
pub fn parse_natural(raw: &str) -> Result<BigUint, ValidationError> {
    let trimmed = raw.trim();
    let digits = match trimmed.strip_prefix('+') {
        Some(rest) => rest.trim_start(),
        None => trimmed,
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotAnInteger(raw.trim().to_string()));
    }

    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| ValidationError::NotAnInteger(raw.trim().to_string()))
}

/// Parses a strictly positive integer.
///
/// # Examples
///
/// ```rust
/// # use factorsum_cli::input::{parse_positive, ValidationError};
/// assert!(parse_positive("5").is_ok());
/// assert_eq!(parse_positive("0"), Err(ValidationError::NotPositive));
/// ```
pub fn parse_positive(raw: &str) -> Result<BigUint, ValidationError> {
    let value = parse_natural(raw)?;
    if value.is_zero() {
        return Err(ValidationError::NotPositive);
    }
    Ok(value)
}

/// Parses a whitespace-separated list of positive integers.
///
/// # Errors
///
/// Returns `ValidationError::Missing` for blank input, otherwise the first
/// error encountered in the list.
pub fn parse_positive_list(raw: &str) -> Result<Vec<BigUint>, ValidationError> {
    let values = raw
        .split_whitespace()
        .map(parse_positive)
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(ValidationError::Missing);
    }
    Ok(values)
}
