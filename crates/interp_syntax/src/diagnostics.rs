//! Parse diagnostics.
//!
//! The parser never stops at the first problem: every malformed or unsupported statement is recorded as a
//! [`ParseError`] and parsing continues with the next token. Errors carry the [`Span`] of the offending token and
//! integrate with [`miette`] for rendering against the source.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::TokenKind;

/// A structured, non-fatal parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// The next token was not the one the current production requires.
    #[error("expected {expected}, found {got}")]
    #[diagnostic(code(interp::parse::unexpected_token))]
    UnexpectedToken {
        expected: TokenKind,
        got: TokenKind,
        #[label("unexpected token")]
        span: Span,
    },

    /// A statement begins with a token that has no statement production.
    #[error("cannot start a statement with {got}")]
    #[diagnostic(
        code(interp::parse::unsupported_statement),
        help("only `let` statements are parsed so far")
    )]
    UnsupportedStatement {
        got: TokenKind,
        #[label("statement starts here")]
        span: Span,
    },
}

impl ParseError {
    /// Creates an “expected X, found Y” error located at the found token.
    #[must_use]
    pub fn unexpected_token(expected: TokenKind, got: TokenKind, span: Span) -> Self {
        Self::UnexpectedToken { expected, got, span }
    }

    /// Creates an error for a statement-starting token with no production.
    #[must_use]
    pub fn unsupported_statement(got: TokenKind, span: Span) -> Self {
        Self::UnsupportedStatement { got, span }
    }

    /// The source location of the offending token.
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } | Self::UnsupportedStatement { span, .. } => *span,
        }
    }

    /// The token kind that was actually found.
    pub fn found(&self) -> TokenKind {
        match self {
            Self::UnexpectedToken { got, .. } | Self::UnsupportedStatement { got, .. } => *got,
        }
    }
}
