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

//! Command-line arguments and the run they describe.

use crate::{
    input::{ValidationError, parse_natural, parse_positive},
    shell::Shell,
    template::OutputTemplate,
};
use clap::Parser;
use factorsum_core::{error::PreconditionError, sum::Sum};
use num_bigint::BigUint;
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
#[command(name = "factorsum", version)]
#[command(
    about = "Sums positive integers that are divisible by at least one number in a set of divisors",
    long_about = None
)]
pub struct Cli {
    /// Only numbers less than or equal to MAX are included in the sum
    #[arg(
        value_name = "MAX",
        value_parser = parse_positive,
        required_unless_present = "interactive"
    )]
    pub maximum: Option<BigUint>,

    /// Only numbers divisible by at least one DIVISOR are included in the sum
    #[arg(
        value_name = "DIVISOR",
        value_parser = parse_positive,
        num_args = 1..,
        required_unless_present = "interactive"
    )]
    pub divisors: Vec<BigUint>,

    /// Only numbers greater than or equal to MIN are included in the sum
    #[arg(short = 'm', long = "min", value_name = "MIN", value_parser = parse_natural, default_value = "1")]
    pub minimum: BigUint,

    /// Output template; %s is replaced with the sum (e.g. "Sum: %8s\n")
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<OutputTemplate>,

    /// Start the interactive shell after applying the other arguments
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Raised while carrying out a validated invocation.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}

/// A validated invocation: the aggregate to operate on and how to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub sum: Sum,
    pub template: OutputTemplate,
    pub interactive: bool,
}

impl Cli {
    /// Checks cross-argument constraints and builds the aggregate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RangeOrder` if `MAX <= MIN`.
    pub fn into_invocation(self) -> Result<Invocation, ValidationError> {
        if let Some(maximum) = &self.maximum {
            if maximum <= &self.minimum {
                return Err(ValidationError::RangeOrder {
                    minimum: self.minimum,
                    maximum: maximum.clone(),
                });
            }
        }

        let mut sum = Sum::new().with_minimum(self.minimum);
        sum.add(self.divisors);
        if let Some(maximum) = self.maximum {
            sum.set_maximum(maximum);
        }

        Ok(Invocation {
            sum,
            template: self.format.unwrap_or_default(),
            interactive: self.interactive,
        })
    }
}

impl Invocation {
    /// Prints the sum through the template, or hands the aggregate to the
    /// interactive shell.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Precondition` if the sum cannot be computed and
    /// `RunError::Io` if writing fails.
    pub fn execute<R, W>(self, input: R, mut output: W) -> Result<(), RunError>
    where
        R: BufRead,
        W: Write,
    {
        if self.interactive {
            tracing::debug!("starting interactive shell");
            Shell::new(self.sum, input, output).run()?;
            return Ok(());
        }

        let total = self.sum.compute_sum()?;
        output.write_all(self.template.render(&total).as_bytes())?;
        output.flush()?;
        Ok(())
    }
}
