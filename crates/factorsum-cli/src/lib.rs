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

//! # Factor Sum CLI
//!
//! Command-line front end for `factorsum-core`. Validates user input at the
//! boundary, renders results through an output template, and offers an
//! interactive shell for building up a divisor set step by step.
//!
//! ## Modules
//!
//! - `args`: `clap` argument definitions and the validated `Invocation`.
//! - `input`: Parsing of user-supplied integers (`ValidationError`).
//! - `template`: printf-like output templates (`%s`, `%8s`, `%-8s`, `%08s`).
//! - `shell`: The interactive line-based command shell.
//! - `logging`: `tracing` subscriber setup.

pub mod args;
pub mod input;
pub mod logging;
pub mod shell;
pub mod template;
