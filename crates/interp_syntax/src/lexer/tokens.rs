//! Token types for the lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for delimiters and separators
//!
//! ## Notes
//! - `TokenKind` is a plain `Copy` tag; the source text of every token lives in [`Token::literal`].
//! - ID-bearing tokens avoid stringly-typed checks in the parser.

use std::fmt;

use crate::ast::Span;
use interp_core::lang::keywords::{self, KeywordId};
use interp_core::lang::operators::{self, OperatorId};
use interp_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Int,

    // ========== Special ==========
    Illegal, // a byte no rule accepts
    Eof,     // end of input
}

impl TokenKind {
    /// Short upper-case tag used when echoing tokens (e.g. `LET`, `IDENT`, `NOT_EQ`).
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => match id {
                KeywordId::Function => "FUNCTION",
                KeywordId::Let => "LET",
                KeywordId::True => "TRUE",
                KeywordId::False => "FALSE",
                KeywordId::If => "IF",
                KeywordId::Else => "ELSE",
                KeywordId::Return => "RETURN",
            },
            TokenKind::Operator(id) => match id {
                OperatorId::Assign => "ASSIGN",
                OperatorId::Plus => "PLUS",
                OperatorId::Minus => "MINUS",
                OperatorId::Asterisk => "ASTERISK",
                OperatorId::Slash => "SLASH",
                OperatorId::Bang => "BANG",
                OperatorId::Lt => "LT",
                OperatorId::Gt => "GT",
                OperatorId::Eq => "EQ",
                OperatorId::NotEq => "NOT_EQ",
            },
            TokenKind::Punctuation(id) => match id {
                PunctuationId::Comma => "COMMA",
                PunctuationId::Semicolon => "SEMICOLON",
                PunctuationId::LParen => "LPAREN",
                PunctuationId::RParen => "RPAREN",
                PunctuationId::LBrace => "LBRACE",
                PunctuationId::RBrace => "RBRACE",
            },
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }
}

/// Human-facing description, as used in diagnostics (“expected '=', found integer literal”).
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Int => write!(f, "integer literal"),
            TokenKind::Illegal => write!(f, "illegal character"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its kind, source text and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Return `true` if this token has the given kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Renders as `TAG("literal")`, e.g. `LET("let")` or `EOF("")`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind.tag(), self.literal)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
