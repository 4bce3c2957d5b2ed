use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser with one token of lookahead.
///
/// The parser pulls tokens from its [`Lexer`] one at a time and never looks
/// further ahead than the current token. The grammar, from lowest to highest
/// precedence:
///
/// ```text
/// stmt-seq ::= stmt ";" stmt-seq | stmt ";"
/// stmt     ::= name ":=" exp | name "=" exp
///            | "while" exp "{" stmt-seq "}"
///            | "if" exp "{" stmt-seq "}" "else" "{" stmt-seq "}"
///            | "print" exp
/// exp      ::= exp2 (("==" | "<") exp2)*
/// exp2     ::= term (("+" | "||") term)*
/// term     ::= factor (("*" | "&&") factor)*
/// factor   ::= integer | "true" | "false" | name | "!" factor | "(" exp ")"
/// ```
///
/// Parsing stops at the first error; there is no recovery.
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// Returns a lexical error if the very first token cannot be lexed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses a whole source unit.
    ///
    /// The unit must consist of a statement sequence followed by the end of
    /// input.
    ///
    /// # Errors
    /// Returns the first lexical or syntactic error encountered.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let program = self.parse_sequence()?;

        if self.current.kind != TokenKind::EndOfInput {
            return Err(self.expected("end of input"));
        }

        debug!(lines = self.lexer.line(), "parsed program");
        Ok(program)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, comparison, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := comparison`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_comparison()
    }

    /// The current lookahead token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns `true` if the lookahead token is of the given kind.
    pub(in crate::interpreter::parser) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Moves to the next token and returns the one that was current.
    ///
    /// # Errors
    /// Returns a lexical error if the next token cannot be lexed.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is of the given kind.
    ///
    /// # Errors
    /// Returns [`ParseError::Expected`] naming `what` if the current token is
    /// of any other kind.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind,
                                                 what: &str)
                                                 -> ParseResult<Token> {
        if self.at(kind) {
            self.advance()
        } else {
            Err(self.expected(what))
        }
    }

    /// Builds an error saying `what` was expected where the current token
    /// stands.
    pub(in crate::interpreter::parser) fn expected(&self, what: &str) -> ParseError {
        ParseError::Expected { expected: what.to_string(),
                               found:    self.current.lexeme.clone(),
                               line:     self.current.line, }
    }
}

/// Parses a whole source unit into a [`Program`].
///
/// # Errors
/// Returns the first lexical or syntactic error.
///
/// # Example
/// ```
/// use imp::{
///     ast::{Expr, Statement},
///     interpreter::parser::core::parse,
/// };
///
/// let program = parse("x := 1 + 2 * 3;").unwrap();
///
/// assert_eq!(program,
///            Statement::declare("x",
///                               Expr::plus(Expr::int(1), Expr::mult(Expr::int(2), Expr::int(3)))));
///
/// assert!(parse("x := 1").is_err()); // missing semicolon
/// ```
pub fn parse(source: &str) -> ParseResult<Program> {
    Parser::new(source)?.parse_program()
}
