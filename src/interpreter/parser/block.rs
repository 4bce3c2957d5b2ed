use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a statement sequence delimited by braces.
    ///
    /// Grammar: `block := "{" stmt-seq "}"`
    ///
    /// A block needs at least one statement, and every statement inside it
    /// is terminated by `;`.
    ///
    /// # Errors
    /// Returns a `ParseError` if either brace is missing or the body fails to
    /// parse.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::BraceOpen, "\"{\"")?;
        let body = self.parse_sequence()?;
        self.expect(TokenKind::BraceClose, "\"}\"")?;
        Ok(body)
    }
}
