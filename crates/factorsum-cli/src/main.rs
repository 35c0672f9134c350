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

use clap::{CommandFactory, Parser, error::ErrorKind};
use factorsum_cli::{args::Cli, logging, shell};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let invocation = match cli.into_invocation() {
        Ok(invocation) => invocation,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    if invocation.interactive {
        // Ctrl-C drops the current line instead of ending the session.
        ctrlc::set_handler(|| {
            if let Err(e) = shell::interrupted(&mut io::stdout()) {
                tracing::debug!(error = %e, "failed to report interrupt");
            }
        })?;
    }

    // Stdout stays unlocked so the interrupt handler can write to it.
    invocation.execute(io::stdin().lock(), io::stdout())?;
    Ok(())
}
