//! Read-parse-print loop.
//!
//! Feeds each input line through the lexer and parser and prints either the rendered
//! program or the collected errors. There is no evaluation step; the output is the
//! fully parenthesized syntax tree.

use std::io::{self, BufRead, Write};

use crate::{errors::errors::render_error, lexer::lexer::tokenize, parser::parser::parse};

pub const PROMPT: &str = ">> ";

/// Name shown in error reports for interactive input.
const REPL_NAME: &str = "repl";

/// What to print for a unit of source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The rendered program, or the errors
    #[default]
    Ast,
    /// The token stream, one token per line
    Tokens,
}

/// Processes one unit of source text.
///
/// # Returns
///
/// `true` when the source parsed without errors. Token dumps always succeed.
pub fn run_source<W: Write>(source: &str, name: &str, mode: Mode, output: &mut W) -> io::Result<bool> {
    if mode == Mode::Tokens {
        for token in tokenize(source) {
            writeln!(output, "{}", token.describe())?;
        }
        return Ok(true);
    }

    let (program, errors) = parse(source);

    if !errors.is_empty() {
        for error in &errors {
            write!(output, "{}", render_error(error, source, name))?;
        }
        return Ok(false);
    }

    if !program.is_empty() {
        writeln!(output, "{}", program)?;
    }

    Ok(true)
}

/// Runs the interactive loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, mode: Mode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };

        run_source(&line?, REPL_NAME, mode, output)?;
    }
}
