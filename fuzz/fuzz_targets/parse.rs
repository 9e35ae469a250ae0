#![no_main]

use interp::lexer::{Lexer, TokenKind};
use interp::parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The lexer accepts any bytes and must always reach EOF
    let mut lexer = Lexer::from_bytes(data);
    for _ in 0..=data.len() {
        if lexer.next_token().kind == TokenKind::Eof {
            break;
        }
    }
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);

    // The parser takes text; it must run to completion on anything
    if let Ok(s) = std::str::from_utf8(data) {
        let parsed = parser::parse(s);
        for err in &parsed.errors {
            assert!(err.span().end <= s.len());
        }
    }
});
