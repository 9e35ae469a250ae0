//! Abstract syntax tree definitions.
//!
//! The tree is rooted at [`Program`]. Statements and expressions are closed enums so consumers (the parser, a
//! future evaluator, tests) match every variant exhaustively; new node kinds are added as new variants.
//!
//! Every node keeps the token it was built from, and exposes its literal through [`Node::token_literal`].

use std::ops::Range;

use crate::lexer::Token;

/// Source location span (byte offsets, end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Capability shared by every node: report the literal of its originating token and where it sits in the source.
pub trait Node {
    fn token_literal(&self) -> &str;

    fn span(&self) -> Span;
}

/// A program is the ordered sequence of statements parsed from one chunk of source.
///
/// Statement order is source order and is significant to any consumer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    /// The first statement's literal, or `""` for an empty program.
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", |stmt| stmt.token_literal())
    }

    fn span(&self) -> Span {
        match (self.statements.first(), self.statements.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => Span::default(),
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    /// Declared for the evaluator contract; the parser has no `return` production yet.
    Return(ReturnStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
        }
    }

    fn span(&self) -> Span {
        match self {
            Statement::Let(stmt) => stmt.span(),
            Statement::Return(stmt) => stmt.span(),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The `let` keyword token.
    pub token: Token,
    pub name: Identifier,
    /// Always `None` for now: the parser skips the value tokens up to `;` without building an expression.
    pub value: Option<Expression>,
    /// From `let` through the terminating `;`.
    pub span: Span,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn span(&self) -> Span {
        self.span
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `return` keyword token.
    pub token: Token,
    pub value: Option<Expression>,
    pub span: Span,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn span(&self) -> Span {
        self.span
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
        }
    }

    fn span(&self) -> Span {
        match self {
            Expression::Identifier(ident) => ident.span(),
        }
    }
}

/// A bare name. Doubles as the binding target of a `let`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Build an identifier node from its token; the name is the token's literal.
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn span(&self) -> Span {
        self.token.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;
    use interp_core::lang::keywords::KeywordId;

    fn ident(name: &str, start: usize) -> Identifier {
        Identifier::from_token(Token::new(
            TokenKind::Ident,
            name,
            Span::new(start, start + name.len()),
        ))
    }

    #[test]
    fn test_empty_program_token_literal() {
        let program = Program::default();
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.span(), Span::default());
    }

    #[test]
    fn test_program_token_literal_is_first_statement() {
        let ret = ReturnStatement {
            token: Token::new(TokenKind::Keyword(KeywordId::Return), "return", Span::new(0, 6)),
            value: Some(Expression::Identifier(ident("x", 7))),
            span: Span::new(0, 9),
        };
        let let_stmt = LetStatement {
            token: Token::new(TokenKind::Keyword(KeywordId::Let), "let", Span::new(10, 13)),
            name: ident("y", 14),
            value: None,
            span: Span::new(10, 20),
        };
        let program = Program {
            statements: vec![Statement::Return(ret), Statement::Let(let_stmt)],
        };

        assert_eq!(program.token_literal(), "return");
        assert_eq!(program.span(), Span::new(0, 20));
        assert_eq!(program.statements[1].token_literal(), "let");
    }

    #[test]
    fn test_identifier_takes_name_from_token() {
        let id = ident("foo_bar", 3);
        assert_eq!(id.value, "foo_bar");
        assert_eq!(id.token_literal(), "foo_bar");
        assert_eq!(Expression::Identifier(id).span(), Span::new(3, 10));
    }

    #[test]
    fn test_span_merge_and_len() {
        let merged = Span::new(4, 6).merge(Span::new(1, 3));
        assert_eq!(merged, Span::new(1, 6));
        assert_eq!(merged.len(), 5);
        assert!(Span::new(2, 2).is_empty());
        let source_span: miette::SourceSpan = merged.into();
        assert_eq!(source_span.offset(), 1);
        assert_eq!(source_span.len(), 5);
    }
}
