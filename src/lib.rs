#![forbid(unsafe_code)]
//! interp: front end for a small expression language
//!
//! This crate ties the syntax frontend together: a byte-oriented tokenizer, an AST, and a recovering parser that
//! currently understands `let` statements. On top of that it provides tooling: a REPL that echoes tokens or parsed
//! programs, and a CLI for dumping the tokens or AST of a file.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod diagnostics;
pub mod repl;
pub mod version;

pub use interp_core::lang;
pub use interp_syntax::{ast, lexer, parser};

pub use parser::{Parsed, parse};
pub use repl::{ReplConfig, ReplMode};
