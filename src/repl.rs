//! Read-echo loop.
//!
//! Each line read from the input is handed to a fresh lexer (and, in [`ReplMode::Ast`], a fresh parser); nothing
//! carries over from one line to the next. The loop ends cleanly at end of input.
//!
//! The loop is generic over `BufRead`/`Write` so tests can drive it with in-memory buffers.

use std::fmt;
use std::io::{self, BufRead, Write};

use interp_syntax::lexer::Lexer;
use interp_syntax::parser::Parser;

use crate::diagnostics::{REPL_SOURCE_NAME, render_parse_errors};

/// Default prompt printed before each line.
pub const PROMPT: &str = ">> ";

/// What the REPL prints for each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReplMode {
    /// One token per line, `TAG("literal")`.
    #[default]
    Tokens,
    /// The parsed program followed by any diagnostics.
    Ast,
}

impl fmt::Display for ReplMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplMode::Tokens => write!(f, "tokens"),
            ReplMode::Ast => write!(f, "ast"),
        }
    }
}

/// Settings for one REPL session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub mode: ReplMode,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            mode: ReplMode::default(),
        }
    }
}

/// Run the loop until `input` is exhausted.
///
/// ## Errors
///
/// Returns the first I/O error from reading `input` or writing `output`.
pub fn start<R: BufRead, W: Write>(config: &ReplConfig, mut input: R, mut output: W) -> io::Result<()> {
    tracing::debug!(mode = %config.mode, "repl session started");
    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // Finish the prompt line so the shell prompt starts on its own line.
            writeln!(output)?;
            return Ok(());
        }

        let source = line.trim_end_matches(['\n', '\r']);
        match config.mode {
            ReplMode::Tokens => echo_tokens(source, &mut output)?,
            ReplMode::Ast => echo_program(source, &mut output)?,
        }
    }
}

fn echo_tokens<W: Write>(source: &str, output: &mut W) -> io::Result<()> {
    for token in Lexer::new(source) {
        writeln!(output, "{token}")?;
    }
    Ok(())
}

fn echo_program<W: Write>(source: &str, output: &mut W) -> io::Result<()> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    writeln!(output, "{program:#?}")?;

    let errors = parser.errors();
    if !errors.is_empty() {
        writeln!(output, "{}", render_parse_errors(errors, REPL_SOURCE_NAME, source))?;
    }
    Ok(())
}
