use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use imp::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Not), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        TokenKind::Equal => Some(BinaryOperator::Equal),
        TokenKind::Less => Some(BinaryOperator::Less),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses comparison expressions.
    ///
    /// Handles `==` and `<`. Comparisons combine left to right, so
    /// `a == b < c` parses as `(a == b) < c`.
    ///
    /// The rule is: `comparison := additive (("==" | "<") additive)*`
    pub(in crate::interpreter::parser) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(Self::parse_additive,
                                    |op| matches!(op, BinaryOperator::Equal | BinaryOperator::Less))
    }

    /// Parses additive expressions.
    ///
    /// Handles left-associative binary operators: `+` and `||`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "||") multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(Self::parse_multiplicative,
                                    |op| matches!(op, BinaryOperator::Add | BinaryOperator::Or))
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*` and `&&`.
    ///
    /// The rule is: `multiplicative := factor (("*" | "&&") factor)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_left_associative(Self::parse_factor,
                                    |op| matches!(op, BinaryOperator::Mul | BinaryOperator::And))
    }

    /// Parses one precedence level: operands from `operand`, joined by any
    /// operator `accepts` allows, folded to the left.
    fn parse_left_associative(&mut self,
                              operand: fn(&mut Self) -> ParseResult<Expr>,
                              accepts: fn(BinaryOperator) -> bool)
                              -> ParseResult<Expr> {
        let mut left = operand(self)?;
        loop {
            if let Some(op) = token_to_binary_operator(self.current().kind)
               && accepts(op)
            {
                self.advance()?;
                let right = operand(self)?;
                left = Expr::binary(op, left, right);
                continue;
            }
            break;
        }
        Ok(left)
    }
}
