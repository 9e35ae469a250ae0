// Parser core type and the program loop.
//
// This file is `include!`'d into `crate::parser` so every production shares the parser's private helpers.

/// Parser state.
///
/// ## Notes
/// - The parser owns its lexer and sees exactly two tokens: `cur` (the token being examined) and `peek` (the one
///   after it). Nothing else is buffered.
/// - Errors accumulate in `errors`; a failed statement never aborts the rest of the parse.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser and prime its two-token window.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            cur,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parse statements until end of input.
    ///
    /// Statements appear in the returned [`Program`] in source order. A statement that fails to parse contributes
    /// nothing to the program; its error is available from [`Parser::errors`] afterwards.
    ///
    /// Every iteration advances exactly one token, whatever the outcome, so a `let` is never swallowed by the
    /// tokens before it. Tokens with no production are reported once per run: only the first one after a statement
    /// boundary (start of input, a `;`, or a completed statement) gets a [`ParseError::UnsupportedStatement`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        let mut at_boundary = true;

        while !self.cur_token_is(TokenKind::Eof) {
            if self.cur_token_is(TokenKind::Punctuation(PunctuationId::Semicolon)) {
                // An empty statement (a stray `;`) carries no meaning and is passed over.
                at_boundary = true;
            } else {
                match self.parse_statement() {
                    Ok(stmt) => {
                        statements.push(stmt);
                        at_boundary = true;
                    }
                    // Later tokens in an unparsed run are passed over silently.
                    Err(ParseError::UnsupportedStatement { .. }) if !at_boundary => {}
                    Err(e) => {
                        self.record(e);
                        at_boundary = false;
                    }
                }
            }
            self.next_token();
        }

        Program { statements }
    }

    /// Errors collected so far, in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consume the parser and take its errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}
