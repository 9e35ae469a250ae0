//! Syntax frontend for the interp language: tokenizer, AST, parser, diagnostics.
//!
//! The crate is dependency-light and intended for reuse by the CLI, the REPL and a future evaluator.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not evaluate, resolve names or check types.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `interp_core::lang` registries.
//! - Tokenizing never fails; parsing always runs to the end of input and reports what it could not build.
//!
//! ## Examples
//! ```rust
//! use interp_syntax::{ast::Node, parser};
//!
//! let parsed = parser::parse("let answer = 42;");
//! assert!(parsed.errors.is_empty());
//! assert_eq!(parsed.program.statements.len(), 1);
//! assert_eq!(parsed.program.token_literal(), "let");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
