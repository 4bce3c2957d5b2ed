use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor, the tightest-binding level of the grammar.
    ///
    /// Grammar:
    /// ```text
    ///     factor := integer | "true" | "false" | name
    ///             | "!" factor
    ///             | "(" expression ")"
    /// ```
    ///
    /// Negation is right-associative, so `!!x` parses as `!(!x)`. A
    /// parenthesised expression yields the inner expression itself.
    ///
    /// # Errors
    /// - `LiteralTooLarge` if an integer literal does not fit in `i64`.
    /// - `Expected` if the current token cannot start a factor, or a closing
    ///   parenthesis is missing.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current().kind {
            TokenKind::Int => {
                let token = self.advance()?;
                token.lexeme
                     .parse()
                     .map(Expr::int)
                     .map_err(|_| ParseError::LiteralTooLarge { literal: token.lexeme.clone(),
                                                                line:    token.line, })
            },
            TokenKind::Bool => {
                let token = self.advance()?;
                Ok(Expr::boolean(token.lexeme == "true"))
            },
            TokenKind::Name => Ok(Expr::Variable(self.advance()?.lexeme)),
            TokenKind::Not => {
                self.advance()?;
                let expr = self.parse_factor()?;
                Ok(Expr::not(expr))
            },
            TokenKind::ParenOpen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::ParenClose, "\")\"")?;
                Ok(expr)
            },
            _ => Err(self.expected("value or expression")),
        }
    }
}
