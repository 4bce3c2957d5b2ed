use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a non-empty sequence of `;`-terminated statements.
    ///
    /// Grammar: `stmt-seq := stmt ";" stmt-seq | stmt ";"`
    ///
    /// The sequence ends before a closing brace or the end of input. The
    /// statements are chained into a right-associated
    /// [`Statement::Sequence`]; a single statement is returned as is.
    ///
    /// # Errors
    /// Returns a `ParseError` if a statement fails to parse or is not
    /// followed by a semicolon.
    pub(in crate::interpreter::parser) fn parse_sequence(&mut self) -> ParseResult<Statement> {
        let mut statements = Vec::new();

        loop {
            statements.push(self.parse_statement()?);
            self.expect(TokenKind::Semicolon, "semicolon")?;

            if self.at(TokenKind::BraceClose) || self.at(TokenKind::EndOfInput) {
                break;
            }
        }

        Statement::sequence(statements).ok_or_else(|| self.expected("statement"))
    }

    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a declaration, `name := exp`.
    /// - an assignment, `name = exp`.
    /// - a loop, `while exp { ... }`.
    /// - a conditional, `if exp { ... } else { ... }`.
    /// - a print statement, `print exp`.
    ///
    /// The leading token decides which; a name is told apart as declaration
    /// or assignment by the token after it.
    ///
    /// # Errors
    /// Returns a `ParseError` if the current token cannot start a statement
    /// or the chosen construct is malformed.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current().kind {
            TokenKind::Name => {
                let name = self.advance()?.lexeme;

                if self.at(TokenKind::Declare) {
                    self.advance()?;
                    let value = self.parse_expression()?;
                    Ok(Statement::Declaration { name, value })
                } else if self.at(TokenKind::Assign) {
                    self.advance()?;
                    let value = self.parse_expression()?;
                    Ok(Statement::Assignment { name, value })
                } else {
                    Err(self.expected("declaration or assignment"))
                }
            },
            TokenKind::While => {
                self.advance()?;
                let condition = self.parse_expression()?;
                let body = self.parse_block()?;
                Ok(Statement::while_loop(condition, body))
            },
            TokenKind::If => self.parse_if(),
            TokenKind::Print => {
                self.advance()?;
                let expr = self.parse_expression()?;
                Ok(Statement::print(expr))
            },
            _ => Err(self.expected("name or keyword")),
        }
    }

    /// Parses an `if` statement. Both branches are mandatory.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition> { <stmt-seq> } else { <stmt-seq> }
    /// ```
    fn parse_if(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::If, "keyword \"if\"")?;
        let condition = self.parse_expression()?;
        let then_branch = self.parse_block()?;
        self.expect(TokenKind::Else, "keyword \"else\"")?;
        let else_branch = self.parse_block()?;

        Ok(Statement::if_then_else(condition, then_branch, else_branch))
    }
}
