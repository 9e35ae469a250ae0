/// Token-window helpers and error recovery.
///
/// This chunk contains the low-level primitives used by every production:
/// - Shifting the window (`next_token`)
/// - Inspecting `cur` / `peek` (`cur_token_is`, `peek_token_is`)
/// - The only conditional advance (`expect_peek`)
/// - Error collection (`record`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Shift `peek` into `cur` and pull a fresh `peek` from the lexer.
    ///
    /// At end of input the lexer keeps returning `Eof`, so this is safe to call repeatedly.
    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur = std::mem::replace(&mut self.peek, next);
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance only if `peek` has the expected kind.
    ///
    /// ## Errors
    /// Leaves the window untouched and returns [`ParseError::UnexpectedToken`] located at `peek`.
    fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(kind, self.peek.kind, self.peek.span))
        }
    }

    /// Keep a statement error and move on; the program loop decides where parsing resumes.
    fn record(&mut self, error: ParseError) {
        tracing::debug!(error = %error, start = error.span().start, "recording parse error");
        self.errors.push(error);
    }
}
