/// Statement parsing methods.
///
/// ## Notes
/// - `let` is the only statement with a production. Every other statement-starting token, `return` included, is
///   reported as unsupported.
/// - There is no expression grammar yet: the value of a `let` is skipped, and `LetStatement::value` stays `None`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.cur.kind {
            TokenKind::Keyword(KeywordId::Let) => self.let_stmt().map(Statement::Let),
            other => Err(ParseError::unsupported_statement(other, self.cur.span)),
        }
    }

    /// `let <ident> = <tokens...> ;`
    fn let_stmt(&mut self) -> Result<LetStatement, ParseError> {
        let token = self.cur.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::from_token(self.cur.clone());

        self.expect_peek(TokenKind::Operator(OperatorId::Assign))?;

        // TODO: parse the value as an expression once the expression grammar exists; until then the tokens up to
        // `;` are discarded.
        while !self.cur_token_is(TokenKind::Punctuation(PunctuationId::Semicolon)) {
            if self.cur_token_is(TokenKind::Eof) {
                return Err(ParseError::unexpected_token(
                    TokenKind::Punctuation(PunctuationId::Semicolon),
                    TokenKind::Eof,
                    self.cur.span,
                ));
            }
            self.next_token();
        }

        let span = token.span.merge(self.cur.span);
        tracing::trace!(name = %name.value, "parsed let statement");
        Ok(LetStatement {
            token,
            name,
            value: None,
            span,
        })
    }
}
