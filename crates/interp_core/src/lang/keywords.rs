//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and descriptions.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **exact and case-sensitive**: `"Let"` and `"LET"` are not keywords.
//! - There are no aliases; each keyword has exactly one spelling.
//!
//! ## Examples
//! ```rust
//! use interp_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("return"), Some(KeywordId::Return));
//! assert_eq!(keywords::from_str("Return"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Definitions / bindings
    Function,
    Let,

    // Literals
    True,
    False,

    // Control flow
    If,
    Else,
    Return,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Function, "fn", "Introduce a function literal."),
    info(KeywordId::Let, "let", "Bind a name to a value."),
    info(KeywordId::True, "true", "Boolean true."),
    info(KeywordId::False, "false", "Boolean false."),
    info(KeywordId::If, "if", "Conditional branch."),
    info(KeywordId::Else, "else", "Alternative branch of an `if`."),
    info(KeywordId::Return, "return", "Return a value from the enclosing function."),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling (e.g. `"fn"`).
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved spelling.
/// - `None` otherwise (the caller treats it as an identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, description: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        description,
    }
}
