/// Outcome of parsing one chunk of source: the (possibly partial) program plus every error found.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl Parsed {
    /// `true` when no errors were reported.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse into a `Result`, dropping the partial program when there were errors.
    ///
    /// ## Errors
    /// Returns every collected [`ParseError`] if at least one statement failed to parse.
    pub fn into_result(self) -> Result<Program, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Tokenize and parse a source string.
///
/// This is the main public entrypoint for parsing.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Parsed {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();
    tracing::debug!(
        statement_count = program.statements.len(),
        error_count = errors.len(),
        "parsed source"
    );
    Parsed { program, errors }
}
