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

//! # Output Templates
//!
//! A small printf-like language for formatting the computed sum:
//!
//! - `%s` inserts the sum. A flag and a width may precede the conversion:
//!   `%8s` right-aligns in 8 columns, `%-8s` left-aligns, `%08s` pads with zeros.
//! - `%%` is a literal percent sign.
//! - `\a`, `\b`, `\f`, `\n`, `\r`, `\t` and `\v` are translated to the
//!   corresponding control characters; any other backslash is kept as is.
//!
//! Every other `%` directive, and any width above [`MAX_WIDTH`], is rejected
//! when the template is parsed, so rendering itself cannot fail.

use std::{fmt::Display, str::FromStr};

/// Raised when an output template cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A `%` directive other than `%s` (with optional flag and width) or `%%`.
    #[error("invalid format directive \"%{0}\"")]
    InvalidDirective(String),
}

/// The widest field a `%s` directive may request.
pub const MAX_WIDTH: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Right,
    Left,
    ZeroPadded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Value {
        alignment: Alignment,
        width: usize,
    },
}

/// A parsed output template.
///
/// # Examples
///
/// ```rust
/// # use factorsum_cli::template::OutputTemplate;
/// let t: OutputTemplate = "Sum: %6s (100%%)\\n".parse().unwrap();
/// assert_eq!(t.render(&98), "Sum:     98 (100%)\n");
///
/// let padded: OutputTemplate = "%05s".parse().unwrap();
/// assert_eq!(padded.render(&98), "00098");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    segments: Vec<Segment>,
}

impl Default for OutputTemplate {
    /// The sum on its own line.
    fn default() -> Self {
        Self {
            segments: vec![
                Segment::Value {
                    alignment: Alignment::Right,
                    width: 0,
                },
                Segment::Literal("\n".to_string()),
            ],
        }
    }
}

impl OutputTemplate {
    /// Renders the template with `value` substituted for every `%s`.
    pub fn render(&self, value: &impl Display) -> String {
        let value = value.to_string();
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value { alignment, width } => {
                    let width = *width;
                    let formatted = match alignment {
                        Alignment::Right => format!("{value:>width$}"),
                        Alignment::Left => format!("{value:<width$}"),
                        Alignment::ZeroPadded => format!("{value:0>width$}"),
                    };
                    out.push_str(&formatted);
                }
            }
        }
        out
    }
}

impl FromStr for OutputTemplate {
    type Err = FormatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.peek().copied().and_then(escape) {
                    Some(translated) => {
                        chars.next();
                        literal.push(translated);
                    }
                    None => literal.push('\\'),
                },
                '%' => {
                    if chars.peek() == Some(&'%') {
                        chars.next();
                        literal.push('%');
                        continue;
                    }

                    let mut directive = String::new();
                    for d in chars.by_ref() {
                        directive.push(d);
                        if d.is_ascii_alphabetic() {
                            break;
                        }
                    }

                    let segment = parse_directive(&directive)?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }
}

fn escape(c: char) -> Option<char> {
    match c {
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0c'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\x0b'),
        _ => None,
    }
}

/// Parses the text following a `%`, up to and including the conversion letter.
fn parse_directive(directive: &str) -> Result<Segment, FormatError> {
    let invalid = || FormatError::InvalidDirective(directive.to_string());

    let body = directive.strip_suffix('s').ok_or_else(invalid)?;
    let (flag, digits) = match body.chars().next() {
        Some('-') => (Some('-'), &body[1..]),
        Some('0') => (Some('0'), &body[1..]),
        _ => (None, body),
    };

    let width = if digits.is_empty() {
        0
    } else {
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        digits
            .parse::<usize>()
            .ok()
            .filter(|&w| w <= MAX_WIDTH)
            .ok_or_else(invalid)?
    };

    // A flag without a width has nothing to pad.
    let alignment = match (flag, width) {
        (Some('-'), w) if w > 0 => Alignment::Left,
        (Some('0'), w) if w > 0 => Alignment::ZeroPadded,
        _ => Alignment::Right,
    };

    Ok(Segment::Value { alignment, width })
}
