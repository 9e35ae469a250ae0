//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use interp_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};
use crate::diagnostics::render_parse_errors;
use crate::repl::{self, ReplConfig};

/// Maximum source file size (16 MiB)
///
/// Files larger than this are rejected before they are read into memory.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error, or not UTF-8)
/// - The file exceeds `MAX_SOURCE_SIZE` (16 MiB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let display = path.display();
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{display}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{display}' is too large ({} bytes, max {MAX_SOURCE_SIZE} bytes)",
            metadata.len(),
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{display}': {e}")))
}

/// Tokenize a file and print each token.
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let mut stdout = io::stdout().lock();
    write_tokens(&source, &mut stdout).map_err(|e| CliError::failure(format!("Error writing output: {e}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and display the AST.
///
/// The program is printed even when errors were recovered from; the errors are then rendered to stderr and the
/// command fails.
pub fn parse_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let parsed = parser::parse(&source);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{:#?}", parsed.program)
        .map_err(|e| CliError::failure(format!("Error writing output: {e}")))?;

    if parsed.errors.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    tracing::debug!(errors = parsed.errors.len(), file = %path.display(), "parse failed");
    let name = path.to_string_lossy();
    Err(CliError::failure(render_parse_errors(&parsed.errors, &name, &source)))
}

/// Start the REPL on stdin/stdout.
pub fn run_repl(config: &ReplConfig) -> CliResult<ExitCode> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    repl::start(config, stdin, stdout).map_err(|e| CliError::failure(format!("REPL I/O error: {e}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Write one `TAG("literal") start..end` line per token, ending with `EOF`.
pub fn write_tokens<W: Write>(source: &str, out: &mut W) -> io::Result<()> {
    for token in lexer::lex(source) {
        writeln!(out, "{token} {}..{}", token.span.start, token.span.end)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_source(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("interp_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_write_tokens() {
        let mut out = Vec::new();
        write_tokens("let x = 5;", &mut out).unwrap();
        insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r#"
        LET("let") 0..3
        IDENT("x") 4..5
        ASSIGN("=") 6..7
        INT("5") 8..9
        SEMICOLON(";") 9..10
        EOF("") 10..10
        "#);
    }

    #[test]
    fn test_read_source() {
        let path = temp_source("read.it", "let a = 1;\n");
        assert_eq!(read_source(&path).unwrap(), "let a = 1;\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("no/such/file.it")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("Cannot access file"), "{}", err.message);
    }

    #[test]
    fn test_read_source_rejects_non_utf8() {
        let path = std::env::temp_dir().join(format!("interp_{}_latin1.it", std::process::id()));
        fs::write(&path, [b'l', b'e', b't', 0xFF]).unwrap();
        let err = read_source(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.message.starts_with("Error reading file"), "{}", err.message);
    }

    #[test]
    fn test_parse_file_success() {
        let path = temp_source("ok.it", "let a = 1;\nlet b = a;\n");
        let result = parse_file(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_parse_file_reports_every_error() {
        let path = temp_source("bad.it", "let = 1;\nreturn 2;\n");
        let result = parse_file(&path);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("expected identifier, found '='"), "{}", err.message);
        assert!(err.message.contains("cannot start a statement with 'return'"), "{}", err.message);
    }

    #[test]
    fn test_lex_file_success() {
        let path = temp_source("lex.it", "fn(x) { x + 1 }");
        let result = lex_file(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }
}
