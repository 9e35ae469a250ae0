//! Provide the canonical language vocabulary for the interp frontend.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that the lexer, parser
//! diagnostics and tooling share, so no part of the toolchain has to spell `"let"` or `"=="` by hand.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global mutable state, and no syntax-tree types.
//! - The lexer remains the source of truth for how spellings are recognised in source text.

pub mod lang;
