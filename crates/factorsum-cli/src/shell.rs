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

//! # Interactive Shell
//!
//! A line-oriented command shell over a [`Sum`] aggregate. Each line is a
//! command name followed by optional arguments. The shell runs until `quit` or
//! end of input.
//!
//! The shell is generic over its input and output streams so that sessions can
//! be driven from memory in tests. Interrupts are handled outside the loop:
//! the binary installs a handler that calls [`interrupted`].

use crate::input::{ValidationError, parse_natural, parse_positive, parse_positive_list};
use factorsum_core::{error::PreconditionError, sum::Sum};
use num_bigint::BigUint;
use std::{
    collections::BTreeSet,
    io::{self, BufRead, Write},
};

const INTRO: &str = "Tool for summing factors.  Type help or ? to list commands.\n";
const PROMPT: &str = ">> ";

const COMMANDS: &[(&str, &str)] = &[
    ("add_divisors", "Add numbers to the list of divisors"),
    ("del_divisors", "Remove numbers from the list of divisors"),
    ("clear_divisors", "Clear the list of divisors"),
    ("max", "Set the upper limit; only numbers less than or equal to it are summed"),
    ("min", "Set the lower limit; only numbers greater than or equal to it are summed"),
    ("sum", "Compute the sum; needs a maximum and at least one divisor"),
    ("print_divisors", "List the current divisors"),
    ("print_limits", "Print the limits that have been set"),
    ("help", "List available commands"),
    ("quit", "Quit the interactive shell"),
];

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive session state: the aggregate plus the streams it talks over.
pub struct Shell<R, W> {
    sum: Sum,
    input: R,
    output: W,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a shell operating on `sum`.
    pub fn new(sum: Sum, input: R, output: W) -> Self {
        Self { sum, input, output }
    }

    /// Returns the aggregate, including every mutation made in the session.
    pub fn into_sum(self) -> Sum {
        self.sum
    }

    /// Reads and executes commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying streams.
    pub fn run(&mut self) -> io::Result<()> {
        self.output.write_all(INTRO.as_bytes())?;

        let mut line = String::new();
        loop {
            self.output.write_all(PROMPT.as_bytes())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // End of input behaves like `quit`, on a fresh line.
                writeln!(self.output)?;
                self.quit()?;
                break;
            }

            if self.execute(line.trim())? == Flow::Quit {
                break;
            }
        }
        self.output.flush()
    }

    fn execute(&mut self, line: &str) -> io::Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        tracing::debug!(command, arg, "shell command");

        match command {
            "add_divisors" => self.add_divisors(arg)?,
            "del_divisors" => self.del_divisors(arg)?,
            "clear_divisors" => self.clear_divisors(arg)?,
            "max" => self.set_limit(arg, Limit::Maximum)?,
            "min" => self.set_limit(arg, Limit::Minimum)?,
            "sum" => self.print_sum(arg)?,
            "print_divisors" => self.print_divisors(arg)?,
            "print_limits" => self.print_limits(arg)?,
            "help" | "?" => self.help()?,
            "quit" => {
                self.quit()?;
                return Ok(Flow::Quit);
            }
            _ => writeln!(self.output, "*** Unknown syntax: {line}")?,
        }
        Ok(Flow::Continue)
    }

    fn usage_error(&mut self, usage: &str, command: &str, error: &ValidationError) -> io::Result<()> {
        writeln!(self.output, "usage: {usage}")?;
        writeln!(self.output, "{command}: error: {error}")
    }

    fn add_divisors(&mut self, arg: &str) -> io::Result<()> {
        match parse_positive_list(arg) {
            Ok(divisors) => {
                let added = self.sum.add(divisors);
                match pretty_list(&added) {
                    Some(list) => writeln!(self.output, "{list} added to the list of divisors"),
                    None => writeln!(self.output, "No divisors added"),
                }
            }
            Err(e) => self.usage_error("add_divisors INT [INT ...]", "add_divisors", &e),
        }
    }

    fn del_divisors(&mut self, arg: &str) -> io::Result<()> {
        match parse_positive_list(arg) {
            Ok(divisors) => {
                let removed = self.sum.remove(divisors);
                match pretty_list(&removed) {
                    Some(list) => writeln!(self.output, "{list} removed from the list of divisors"),
                    None => writeln!(self.output, "No divisors removed"),
                }
            }
            Err(e) => self.usage_error("del_divisors INT [INT ...]", "del_divisors", &e),
        }
    }

    fn clear_divisors(&mut self, arg: &str) -> io::Result<()> {
        if !arg.is_empty() {
            return writeln!(self.output, "usage: clear_divisors");
        }
        self.sum.clear();
        writeln!(self.output, "The list of divisors has been cleared")
    }

    fn set_limit(&mut self, arg: &str, limit: Limit) -> io::Result<()> {
        let parsed = match limit {
            Limit::Maximum => parse_positive(arg),
            Limit::Minimum => parse_natural(arg),
        };
        let value = match parsed {
            Ok(value) => value,
            Err(e) => {
                let name = limit.name();
                return self.usage_error(&format!("{name} INT"), name, &e);
            }
        };

        let message = format!("The {} has been set to {value}", limit.label());
        match limit {
            Limit::Maximum => self.sum.set_maximum(value),
            Limit::Minimum => self.sum.set_minimum(value),
        }
        writeln!(self.output, "{message}")
    }

    fn print_sum(&mut self, arg: &str) -> io::Result<()> {
        if !arg.is_empty() {
            return writeln!(self.output, "usage: sum");
        }

        let message = match self.sum.compute_sum() {
            Ok(total) => total.to_string(),
            Err(PreconditionError::EmptyDivisorSet) if self.sum.maximum().is_none() => {
                "You must add at least one divisor and a maximum before computing the sum"
                    .to_string()
            }
            Err(PreconditionError::EmptyDivisorSet) => {
                "You must add a divisor before computing the sum".to_string()
            }
            Err(PreconditionError::MissingMaximum) => {
                "You must add a maximum before computing the sum".to_string()
            }
            Err(e @ PreconditionError::EmptyRange { .. }) => format!("Cannot compute the sum: {e}"),
        };
        writeln!(self.output, "{message}")
    }

    fn print_divisors(&mut self, arg: &str) -> io::Result<()> {
        if !arg.is_empty() {
            return writeln!(self.output, "usage: print_divisors");
        }
        if !self.sum.has_divisors() {
            return writeln!(self.output, "There are no divisors set");
        }
        let listed: Vec<String> = self.sum.divisors().iter().map(BigUint::to_string).collect();
        writeln!(self.output, "{}", listed.join(" "))
    }

    fn print_limits(&mut self, arg: &str) -> io::Result<()> {
        if !arg.is_empty() {
            return writeln!(self.output, "usage: print_limits");
        }
        match self.sum.maximum() {
            Some(maximum) => writeln!(self.output, "Maximum: {maximum}")?,
            None => writeln!(self.output, "Maximum not set")?,
        }
        writeln!(self.output, "Minimum: {}", self.sum.minimum())
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Commands:")?;
        for (name, description) in COMMANDS {
            writeln!(self.output, "  {name:<16}{description}")?;
        }
        Ok(())
    }

    fn quit(&mut self) -> io::Result<()> {
        writeln!(self.output, "Bye!")
    }
}

/// Abandons the line being typed after an interrupt and prompts again.
///
/// Meant for a signal handler running beside [`Shell::run`]; the session
/// itself carries on.
pub fn interrupted<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    output.write_all(PROMPT.as_bytes())?;
    output.flush()
}

#[derive(Debug, Clone, Copy)]
enum Limit {
    Maximum,
    Minimum,
}

impl Limit {
    fn name(self) -> &'static str {
        match self {
            Limit::Maximum => "max",
            Limit::Minimum => "min",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Limit::Maximum => "maximum",
            Limit::Minimum => "minimum",
        }
    }
}

/// Renders `{1, 2, 3}` as `1, 2 and 3`. Returns `None` for an empty set.
fn pretty_list(values: &BTreeSet<BigUint>) -> Option<String> {
    let mut items: Vec<String> = values.iter().map(BigUint::to_string).collect();
    let last = items.pop()?;
    if items.is_empty() {
        Some(last)
    } else {
        Some(format!("{} and {last}", items.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(sum: Sum, script: &str) -> (String, Sum) {
        let mut output = Vec::new();
        let mut shell = Shell::new(sum, Cursor::new(script.as_bytes()), &mut output);
        shell.run().unwrap();
        let sum = shell.into_sum();
        (String::from_utf8(output).unwrap(), sum)
    }

    fn replies(script: &str) -> Vec<String> {
        let (out, _) = session(Sum::new(), script);
        out.trim_start_matches(INTRO)
            .split(PROMPT)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_interrupt_prompts_again() {
        let mut out = Vec::new();
        interrupted(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n>> ");
    }

    #[test]
    fn test_pretty_list() {
        let set = |v: &[u64]| v.iter().copied().map(BigUint::from).collect::<BTreeSet<_>>();
        assert_eq!(pretty_list(&set(&[])), None);
        assert_eq!(pretty_list(&set(&[3])), Some("3".to_string()));
        assert_eq!(pretty_list(&set(&[3, 5])), Some("3 and 5".to_string()));
        assert_eq!(pretty_list(&set(&[5, 1, 3])), Some("1, 3 and 5".to_string()));
    }

    #[test]
    fn test_full_session() {
        let r = replies("add_divisors 3 5\nmax 20\nsum\nmin 18\nsum\nquit\n");
        assert_eq!(
            r,
            vec![
                "3 and 5 added to the list of divisors\n",
                "The maximum has been set to 20\n",
                "98\n",
                "The minimum has been set to 18\n",
                "38\n",
                "Bye!\n",
            ]
        );
    }

    #[test]
    fn test_end_of_input_quits() {
        let r = replies("max 10\n");
        assert_eq!(r, vec!["The maximum has been set to 10\n", "\nBye!\n"]);
    }

    #[test]
    fn test_sum_preconditions() {
        let r = replies("sum\nmax 20\nsum\nclear_divisors\nadd_divisors 3\nmin 25\nsum\nquit\n");
        assert_eq!(
            r,
            vec![
                "You must add at least one divisor and a maximum before computing the sum\n",
                "The maximum has been set to 20\n",
                "You must add a divisor before computing the sum\n",
                "The list of divisors has been cleared\n",
                "3 added to the list of divisors\n",
                "The minimum has been set to 25\n",
                "Cannot compute the sum: the minimum (25) must be strictly less than the maximum (20)\n",
                "Bye!\n",
            ]
        );
    }

    #[test]
    fn test_missing_maximum() {
        let r = replies("add_divisors 3\nsum\nquit\n");
        assert_eq!(r[1], "You must add a maximum before computing the sum\n");
    }

    #[test]
    fn test_add_and_remove_feedback() {
        let r = replies("add_divisors 3 5\nadd_divisors 5\ndel_divisors 5 7\ndel_divisors 7\nquit\n");
        assert_eq!(
            r,
            vec![
                "3 and 5 added to the list of divisors\n",
                "No divisors added\n",
                "5 removed from the list of divisors\n",
                "No divisors removed\n",
                "Bye!\n",
            ]
        );
    }

    #[test]
    fn test_usage_errors() {
        let r = replies("add_divisors\nadd_divisors 3 x\ndel_divisors 0\nmax 0\nmin -1\nsum now\nquit\n");
        assert_eq!(
            r,
            vec![
                "usage: add_divisors INT [INT ...]\nadd_divisors: error: the following arguments are required: INT\n",
                "usage: add_divisors INT [INT ...]\nadd_divisors: error: 'x' is not a non-negative integer\n",
                "usage: del_divisors INT [INT ...]\ndel_divisors: error: value must be a positive integer\n",
                "usage: max INT\nmax: error: value must be a positive integer\n",
                "usage: min INT\nmin: error: '-1' is not a non-negative integer\n",
                "usage: sum\n",
                "Bye!\n",
            ]
        );
    }

    #[test]
    fn test_print_commands() {
        let r = replies("print_divisors\nprint_limits\nadd_divisors 5 3\nmax 9\nprint_divisors\nprint_limits\nquit\n");
        assert_eq!(
            r,
            vec![
                "There are no divisors set\n",
                "Maximum not set\nMinimum: 1\n",
                "3 and 5 added to the list of divisors\n",
                "The maximum has been set to 9\n",
                "3 5\n",
                "Maximum: 9\nMinimum: 1\n",
                "Bye!\n",
            ]
        );
    }

    #[test]
    fn test_unknown_and_blank_lines() {
        let r = replies("frobnicate 3\n\n   \nquit\n");
        assert_eq!(r, vec!["*** Unknown syntax: frobnicate 3\n", "Bye!\n"]);
    }

    #[test]
    fn test_help_lists_commands() {
        let r = replies("?\nquit\n");
        for (name, _) in COMMANDS {
            assert!(r[0].contains(name), "help is missing {name}");
        }
    }

    #[test]
    fn test_session_keeps_initial_state() {
        let mut sum = Sum::new().with_maximum(20u64);
        sum.add([3u64]);
        let (out, sum) = session(sum, "add_divisors 5\nsum\nquit\n");
        assert!(out.contains("98\n"));
        assert_eq!(sum.divisors().len(), 2);
    }
}
