//! Parser for the interp language
//!
//! Pulls tokens from a [`Lexer`] through a two-token window (`cur` and `peek`) and builds a [`Program`] by
//! recursive descent. Malformed statements do not stop the parse: each one is recorded as a [`ParseError`] and the
//! parser moves on to the next token, so a later `let` is still parsed.
//!
//! ## Examples
//!
//! ```rust
//! use interp_syntax::{lexer::Lexer, parser::Parser};
//!
//! let mut parser = Parser::new(Lexer::new("let x = 5; let y 7;"));
//! let program = parser.parse_program();
//! assert_eq!(program.statements.len(), 1);
//! assert_eq!(parser.errors().len(), 1);
//! ```

use crate::ast::*;
pub use crate::diagnostics::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};
use interp_core::lang::keywords::KeywordId;
use interp_core::lang::operators::OperatorId;
use interp_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each production family in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
