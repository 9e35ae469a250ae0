//! Lexer for the interp language
//!
//! Pulls one token at a time out of a byte buffer. Handles:
//! - Keywords and identifiers (ASCII letters and `_` only)
//! - Integer literals (decimal digits only: no sign, fraction or radix prefix)
//! - One- and two-byte operators (`==` and `!=` are the only two-byte ones)
//! - Delimiters and separators
//!
//! ## Notes
//! - Lexing never fails. A byte no rule accepts becomes an `Illegal` token carrying that byte, and scanning
//!   continues with the next byte.
//! - Once input is exhausted every call returns `Eof` with an empty literal.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use std::iter::FusedIterator;

use crate::ast::Span;
use interp_core::lang::operators::OperatorId;
use interp_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// `position` is the byte under the cursor (held in `ch`); `read_position` is one byte ahead and is the only
// lookahead the lexer ever uses. At end of input both sit at `input.len()` and `ch` is 0.
// ============================================================================

/// Lexer over one chunk of source text.
///
/// A lexer borrows its input and is driven through `&mut self`, so one instance has exactly one owner.
pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    read_position: usize,
    ch: u8,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a lexer over raw bytes. Bytes need not be valid UTF-8.
    pub fn from_bytes(input: &'a [u8]) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        if self.is_at_end() {
            return Token::new(TokenKind::Eof, String::new(), Span::new(start, start));
        }

        let kind = match self.ch {
            b'=' => self.operator_or_eq(OperatorId::Assign, OperatorId::Eq),
            b'!' => self.operator_or_eq(OperatorId::Bang, OperatorId::NotEq),
            b'+' => TokenKind::Operator(OperatorId::Plus),
            b'-' => TokenKind::Operator(OperatorId::Minus),
            b'*' => TokenKind::Operator(OperatorId::Asterisk),
            b'/' => TokenKind::Operator(OperatorId::Slash),
            b'<' => TokenKind::Operator(OperatorId::Lt),
            b'>' => TokenKind::Operator(OperatorId::Gt),
            b',' => TokenKind::Punctuation(PunctuationId::Comma),
            b';' => TokenKind::Punctuation(PunctuationId::Semicolon),
            b'(' => TokenKind::Punctuation(PunctuationId::LParen),
            b')' => TokenKind::Punctuation(PunctuationId::RParen),
            b'{' => TokenKind::Punctuation(PunctuationId::LBrace),
            b'}' => TokenKind::Punctuation(PunctuationId::RBrace),

            // Identifiers/keywords and numbers consume their own run and stop on the byte after it.
            c if is_ident_byte(c) => return self.scan_identifier(start),
            c if c.is_ascii_digit() => return self.scan_number(start),

            _ => TokenKind::Illegal,
        };

        self.read_char();
        self.token(kind, start)
    }

    // ========================================================================
    // Core byte handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn read_char(&mut self) {
        if self.read_position >= self.input.len() {
            self.ch = 0;
            self.position = self.input.len();
            self.read_position = self.input.len();
        } else {
            self.ch = self.input[self.read_position];
            self.position = self.read_position;
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> Option<u8> {
        self.input.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Build a token spanning `start..position`.
    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, self.literal(start), Span::new(start, self.position))
    }

    /// Source text of `start..position`, one `char` per byte.
    ///
    /// Every accepted token is ASCII, so this is the exact spelling; an `Illegal` non-ASCII byte maps to the
    /// Latin-1 character with the same value.
    fn literal(&self, start: usize) -> String {
        self.input[start..self.position].iter().map(|&b| char::from(b)).collect()
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    /// `simple` on its own, or `compound` when the next byte is `=` (which is then consumed).
    fn operator_or_eq(&mut self, simple: OperatorId, compound: OperatorId) -> TokenKind {
        if self.peek_char() == Some(b'=') {
            self.read_char();
            TokenKind::Operator(compound)
        } else {
            TokenKind::Operator(simple)
        }
    }

    // ========================================================================
    // Identifier and number scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) -> Token {
        while !self.is_at_end() && is_ident_byte(self.ch) {
            self.read_char();
        }

        let spelling = self.literal(start);
        let kind = match keyword_id(&spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        };
        Token::new(kind, spelling, Span::new(start, self.position))
    }

    fn scan_number(&mut self, start: usize) -> Token {
        while !self.is_at_end() && self.ch.is_ascii_digit() {
            self.read_char();
        }
        self.token(TokenKind::Int, start)
    }
}

/// Yields tokens in source order and stops before `Eof`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

// ============================================================================
// Helper functions
// ============================================================================

/// Letters and underscore (ASCII-only). Digits never continue an identifier.
fn is_ident_byte(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Lex a whole source string.
///
/// The returned vector always ends with exactly one `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::trace!(token_count = tokens.len(), "lexed source");
    tokens
}

// ============================================================================
// TESTS
// ============================================================================
