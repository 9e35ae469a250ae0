//! Property-based tests for the tokenizer and parser.
//!
//! These use proptest to check the invariants that must hold for *every* input, not just hand-picked ones:
//! totality over arbitrary bytes, end-of-input idempotence, span coverage, and one-error-per-statement recovery.

use interp_core::lang::keywords::KeywordId;
use interp_syntax::ast::{Node, Statement};
use interp_syntax::lexer::{self, Lexer, TokenKind};
use interp_syntax::parser;
use proptest::prelude::*;

// Strategy for generating identifiers that are not reserved words
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z_]{0,11}".prop_filter("Not a keyword", |s| {
        !matches!(
            s.as_str(),
            "fn" | "let" | "true" | "false" | "if" | "else" | "return"
        )
    })
}

// Strategy for the value part of a `let` (anything without a `;`)
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 +*/<>=!(),{}-]{1,20}"
}

// Strategy for a run of tokens that contains no `let` keyword
fn unsupported_prefix_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 +*/<>=!(),;{}@#-]{0,30}".prop_filter("No let keyword", |s| {
        !lexer::lex(s).iter().any(|t| t.kind == TokenKind::Keyword(KeywordId::Let))
    })
}

proptest! {
    /// Property: lexing arbitrary bytes terminates, consumes every byte, and ends in EOF.
    #[test]
    fn lexer_is_total_over_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut lexer = Lexer::from_bytes(&bytes);
        let mut last_end = 0;
        // Each call consumes at least one byte, so `len + 1` calls always reach EOF.
        for _ in 0..=bytes.len() {
            let token = lexer.next_token();
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end <= bytes.len());
            last_end = token.span.end;
            if token.kind == TokenKind::Eof {
                prop_assert_eq!(token.literal.as_str(), "");
                prop_assert_eq!(token.span.start, bytes.len());
                return Ok(());
            }
            prop_assert!(!token.span.is_empty());
        }
        prop_assert!(false, "lexer did not reach EOF");
    }

    /// Property: once EOF is returned, it is returned forever.
    #[test]
    fn eof_is_idempotent(source in "\\PC{0,40}", extra in 1usize..8) {
        let mut lexer = Lexer::new(&source);
        while lexer.next_token().kind != TokenKind::Eof {}
        for _ in 0..extra {
            let token = lexer.next_token();
            prop_assert_eq!(token.kind, TokenKind::Eof);
            prop_assert_eq!(token.literal, "");
        }
    }

    /// Property: every non-whitespace byte is covered by exactly one token.
    #[test]
    fn tokens_cover_all_non_whitespace(source in "[ -~\\t\\n\\r]{0,60}") {
        let tokens = lexer::lex(&source);
        let covered: usize = tokens.iter().map(|t| t.span.len()).sum();
        let non_ws = source.bytes().filter(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r')).count();
        prop_assert_eq!(covered, non_ws);
        for token in &tokens {
            prop_assert_eq!(&source[token.span.start..token.span.end], token.literal.as_str());
        }
    }

    /// Property: identifiers survive lexing unchanged.
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let tokens = lexer::lex(&ident);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Ident);
        prop_assert_eq!(&tokens[0].literal, &ident);
    }

    /// Property: a well-formed `let` always yields exactly one statement bound to the generated name.
    #[test]
    fn generated_let_statements_parse(name in ident_strategy(), value in value_strategy()) {
        let source = format!("let {name} = {value};");
        let parsed = parser::parse(&source);
        prop_assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        prop_assert_eq!(parsed.program.statements.len(), 1);
        match &parsed.program.statements[0] {
            Statement::Let(stmt) => {
                prop_assert_eq!(&stmt.name.value, &name);
                prop_assert!(stmt.value.is_none());
            }
            other => prop_assert!(false, "unexpected statement {:?}", other),
        }
        prop_assert_eq!(parsed.program.token_literal(), "let");
    }

    /// Property: statements come out in source order.
    #[test]
    fn statement_order_is_source_order(names in proptest::collection::vec(ident_strategy(), 0..8)) {
        let source: String = names.iter().map(|n| format!("let {n} = 1;\n")).collect();
        let parsed = parser::parse(&source);
        let parsed_names: Vec<&str> = parsed
            .program
            .statements
            .iter()
            .map(|stmt| match stmt {
                Statement::Let(l) => l.name.value.as_str(),
                Statement::Return(r) => r.token.literal.as_str(),
            })
            .collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed_names, expected);
    }

    /// Property: tokens without a production never hide a following `let`.
    #[test]
    fn unsupported_tokens_never_hide_a_let(prefix in unsupported_prefix_strategy(), name in ident_strategy()) {
        let source = format!("{prefix} let {name} = 1;");
        let parsed = parser::parse(&source);
        let names: Vec<&str> = parsed
            .program
            .statements
            .iter()
            .filter_map(|stmt| match stmt {
                Statement::Let(l) => Some(l.name.value.as_str()),
                Statement::Return(_) => None,
            })
            .collect();
        prop_assert_eq!(names, vec![name.as_str()]);
        prop_assert!(parsed.errors.len() <= 1 + prefix.matches(';').count(), "{:?}", parsed.errors);
    }

    /// Property: parsing never panics, and each error points inside the source.
    #[test]
    fn parser_is_total(source in "\\PC{0,80}") {
        let parsed = parser::parse(&source);
        for err in &parsed.errors {
            prop_assert!(err.span().end <= source.len());
        }
    }
}
