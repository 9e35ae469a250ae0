//! Language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the frontend. Callers work with **stable
//! IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - Every registry is a `const` table, so it is initialised before first use and never mutated.
//!
//! ## Examples
//! ```rust
//! use interp_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::as_str(KeywordId::Function), "fn");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
