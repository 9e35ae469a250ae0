//! Source-attached diagnostics using miette.
//!
//! [`ParseError`] values only know their byte span. For display they are paired with the source text and the name
//! it came from (a file path, or `<repl>`), so miette can draw the offending line with an arrow under the token.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use interp_syntax::diagnostics::ParseError;

/// Name used for source typed into the REPL.
pub const REPL_SOURCE_NAME: &str = "<repl>";

/// A parse error bundled with the source it points into.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(interp::parse))]
pub struct SourceDiagnostic {
    /// Human-readable error message
    pub message: String,
    /// Source code for context
    #[source_code]
    pub src: NamedSource<String>,
    /// Location of the offending token
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the span (interpolated by miette derive macro)
    pub label: String,
    #[help]
    pub help: Option<String>,
}

impl SourceDiagnostic {
    /// Attach `source` (named `source_name`) to a parse error.
    pub fn from_parse_error(error: &ParseError, source_name: &str, source: &str) -> Self {
        let label = error
            .labels()
            .into_iter()
            .flatten()
            .find_map(|l| l.label().map(str::to_string))
            .unwrap_or_else(|| "here".to_string());

        Self {
            message: error.to_string(),
            src: NamedSource::new(source_name, source.to_string()),
            span: error.span().into(),
            label,
            help: error.help().map(|h| h.to_string()),
        }
    }
}

/// Render every error against its source, one report after another.
///
/// Uses whatever miette hook is installed (the binary installs the fancy handler).
pub fn render_parse_errors(errors: &[ParseError], source_name: &str, source: &str) -> String {
    errors
        .iter()
        .map(|err| {
            let diag = SourceDiagnostic::from_parse_error(err, source_name, source);
            format!("{:?}", miette::Report::new(diag))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
