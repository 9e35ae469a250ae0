//! Operator vocabulary.
//!
//! This module defines the canonical operator set and its spellings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//! - Precedence and fixity are deliberately absent: the parser has no expression grammar yet, and the registry does
//!   not pre-empt one.
//! - `=` and `!` are the only spellings that prefix a longer operator (`==`, `!=`).
//!
//! ## Examples
//! ```rust
//! use interp_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("!="), Some(OperatorId::NotEq));
//! assert_eq!(operators::as_str(OperatorId::Asterisk), "*");
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Assign,

    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Logical
    Bang,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Assign, "="),
    op(OperatorId::Plus, "+"),
    op(OperatorId::Minus, "-"),
    op(OperatorId::Asterisk, "*"),
    op(OperatorId::Slash, "/"),
    op(OperatorId::Bang, "!"),
    op(OperatorId::Lt, "<"),
    op(OperatorId::Gt, ">"),
    op(OperatorId::Eq, "=="),
    op(OperatorId::NotEq, "!="),
];

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    OperatorInfo { id, spelling }
}
