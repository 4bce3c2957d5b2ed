/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code: integers and booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Multiplication (`*`)
    Mul,
    /// Short-circuiting logical and (`&&`)
    And,
    /// Short-circuiting logical or (`||`)
    Or,
    /// Equal to (`==`)
    Equal,
    /// Less than (`<`)
    Less,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, And, Equal, Less, Mul, Or};
        let operator = match self {
            Add => "+",
            Mul => "*",
            And => "&&",
            Or => "||",
            Equal => "==",
            Less => "<",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Parenthesised sub-expressions have no node of their own; the parser
/// returns the inner expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal(LiteralValue),
    /// Reference to a variable by name.
    Variable(String),
    /// Logical negation (`!`).
    Not(Box<Self>),
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// An integer literal.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Literal(LiteralValue::Integer(value))
    }

    /// A boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(LiteralValue::Bool(value))
    }

    /// A variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Builds `left op right`.
    ///
    /// ## Example
    /// ```
    /// use imp::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::int(1), Expr::var("x"));
    ///
    /// assert_eq!(expr.to_string(), "(1+x)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// `left + right`
    #[must_use]
    pub fn plus(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Add, left, right)
    }

    /// `left * right`
    #[must_use]
    pub fn mult(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Mul, left, right)
    }

    /// `left && right`
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::And, left, right)
    }

    /// `left || right`
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Or, left, right)
    }

    /// `left == right`
    #[must_use]
    pub fn equal(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Equal, left, right)
    }

    /// `left < right`
    #[must_use]
    pub fn less(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Less, left, right)
    }

    /// `!expr`
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: Self) -> Self {
        Self::Not(Box::new(expr))
    }
}

/// Expressions print in a fully parenthesised form that parses back to the
/// same tree: every binary operation is wrapped in `(` `)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Not(expr) => write!(f, "!{expr}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left}{op}{right})"),
        }
    }
}

/// Represents a statement.
///
/// A whole source unit parses to a single statement; several statements are
/// chained with [`Statement::Sequence`], associated to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Two statements executed one after the other.
    Sequence {
        /// Executed first.
        first:  Box<Self>,
        /// Executed second. Longer chains nest here.
        second: Box<Self>,
    },
    /// A variable declaration using `:=`.
    Declaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
    },
    /// A variable assignment using `=`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// A `while` loop.
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// Executed in a fresh scope per iteration.
        body:      Box<Self>,
    },
    /// An `if`/`else` statement. Both branches are mandatory.
    IfThenElse {
        /// Selects the branch.
        condition:   Expr,
        /// Executed if the condition is true.
        then_branch: Box<Self>,
        /// Executed if the condition is false.
        else_branch: Box<Self>,
    },
    /// Prints the value of an expression.
    Print {
        /// The expression to print.
        expr: Expr,
    },
}

/// The root statement of a parsed source unit.
pub type Program = Statement;

impl Statement {
    /// Chains statements into a right-associated [`Statement::Sequence`].
    ///
    /// Returns `None` for an empty list and the statement itself for a list
    /// of one.
    ///
    /// ## Example
    /// ```
    /// use imp::ast::{Expr, Statement};
    ///
    /// let program = Statement::sequence(vec![Statement::print(Expr::int(1)),
    ///                                        Statement::print(Expr::int(2)),
    ///                                        Statement::print(Expr::int(3))]).unwrap();
    ///
    /// let Statement::Sequence { second, .. } = &program else { panic!() };
    /// assert!(matches!(**second, Statement::Sequence { .. }));
    /// ```
    #[must_use]
    pub fn sequence(statements: Vec<Self>) -> Option<Self> {
        statements.into_iter().rev().reduce(|second, first| Self::Sequence { first:  Box::new(first),
                                                                             second: Box::new(second), })
    }

    /// `name := value`
    pub fn declare(name: impl Into<String>, value: Expr) -> Self {
        Self::Declaration { name: name.into(),
                            value }
    }

    /// `name = value`
    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Self::Assignment { name: name.into(),
                           value }
    }

    /// `while condition { body }`
    #[must_use]
    pub fn while_loop(condition: Expr, body: Self) -> Self {
        Self::While { condition,
                      body: Box::new(body) }
    }

    /// `if condition { then_branch } else { else_branch }`
    #[must_use]
    pub fn if_then_else(condition: Expr, then_branch: Self, else_branch: Self) -> Self {
        Self::IfThenElse { condition,
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch) }
    }

    /// `print expr`
    #[must_use]
    pub const fn print(expr: Expr) -> Self {
        Self::Print { expr }
    }

    /// Pretty-prints a whole program as source text.
    ///
    /// Unlike the [`Display`](std::fmt::Display) form, the result always ends
    /// with the `;` the grammar requires, so it can be parsed again.
    ///
    /// ## Example
    /// ```
    /// use imp::ast::{Expr, Statement};
    ///
    /// let program = Statement::while_loop(Expr::less(Expr::var("n"), Expr::int(3)),
    ///                                     Statement::assign("n",
    ///                                                       Expr::plus(Expr::var("n"),
    ///                                                                  Expr::int(1))));
    ///
    /// assert_eq!(program.pretty(), "while (n<3) {\n\tn = (n+1);\n};");
    /// ```
    #[must_use]
    pub fn pretty(&self) -> String {
        terminated(self.to_string())
    }
}

/// Appends the statement terminator unless the text already ends with one.
fn terminated(mut text: String) -> String {
    if !text.ends_with(';') {
        text.push(';');
    }
    text
}

/// Indents every line of a block body by one tab and terminates it.
fn block(body: &Statement) -> String {
    terminated(format!("\t{}", body.to_string().replace('\n', "\n\t")))
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequence { first, second } => {
                write!(f, "{}", terminated(first.to_string()))?;

                let mut rest = second;
                while let Self::Sequence { first, second } = &**rest {
                    write!(f, "\n{}", terminated(first.to_string()))?;
                    rest = second;
                }
                write!(f, "\n{}", terminated(rest.to_string()))
            },
            Self::Declaration { name, value } => write!(f, "{name} := {value}"),
            Self::Assignment { name, value } => write!(f, "{name} = {value}"),
            Self::While { condition, body } => {
                write!(f, "while {condition} {{\n{}\n}}", block(body))
            },
            Self::IfThenElse { condition,
                               then_branch,
                               else_branch, } => write!(f,
                                                        "if {condition} {{\n{}\n}} else {{\n{}\n}}",
                                                        block(then_branch),
                                                        block(else_branch)),
            Self::Print { expr } => write!(f, "print {expr}"),
        }
    }
}

/// Takes long sequence chains apart one link at a time instead of
/// recursing down `second`.
impl Drop for Statement {
    fn drop(&mut self) {
        let Self::Sequence { second, .. } = self else {
            return;
        };

        let mut rest = std::mem::replace(&mut **second, Self::print(Expr::boolean(false)));
        while let Self::Sequence { second, .. } = &mut rest {
            let next = std::mem::replace(&mut **second, Self::print(Expr::boolean(false)));
            rest = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_of_one_is_the_statement() {
        let statement = Statement::print(Expr::int(42));
        assert_eq!(Statement::sequence(vec![statement.clone()]), Some(statement));
        assert_eq!(Statement::sequence(Vec::new()), None);
    }

    #[test]
    fn sequence_associates_right() {
        let a = Statement::declare("a", Expr::int(1));
        let b = Statement::declare("b", Expr::int(2));
        let c = Statement::declare("c", Expr::int(3));

        let expected =
            Statement::Sequence { first:  Box::new(a.clone()),
                                  second: Box::new(Statement::Sequence { first:  Box::new(b.clone()),
                                                                         second: Box::new(c.clone()), }), };

        assert_eq!(Statement::sequence(vec![a, b, c]), Some(expected));
    }

    #[test]
    fn expressions_print_fully_parenthesised() {
        let expr = Expr::equal(Expr::plus(Expr::int(1), Expr::mult(Expr::var("x"), Expr::int(-2))),
                               Expr::not(Expr::or(Expr::boolean(true), Expr::var("b"))));

        assert_eq!(expr.to_string(), "((1+(x*-2))==!(true||b))");
    }

    #[test]
    fn sequences_print_one_statement_per_line() {
        let program = Statement::sequence(vec![Statement::declare("x", Expr::int(1)),
                                               Statement::assign("x", Expr::int(2)),
                                               Statement::print(Expr::var("x"))]).unwrap();

        assert_eq!(program.pretty(), "x := 1;\nx = 2;\nprint x;");
    }

    #[test]
    fn long_sequences_print_and_drop_without_recursing() {
        let program =
            Statement::sequence((0..200_000).map(|i| Statement::print(Expr::int(i))).collect())
            .unwrap();

        let printed = program.pretty();
        assert!(printed.starts_with("print 0;\nprint 1;\n"));
        assert!(printed.ends_with("\nprint 199999;"));
        assert_eq!(printed.lines().count(), 200_000);

        drop(program);
    }

    #[test]
    fn nested_blocks_indent_their_bodies() {
        let inner = Statement::if_then_else(Expr::var("b"),
                                            Statement::print(Expr::int(1)),
                                            Statement::sequence(vec![Statement::print(Expr::int(2)),
                                                                     Statement::print(Expr::int(3))]).unwrap());
        let program = Statement::while_loop(Expr::var("b"), inner);

        assert_eq!(program.pretty(),
                   "while b {\n\tif b {\n\t\tprint 1;\n\t} else {\n\t\tprint 2;\n\t\tprint \
                    3;\n\t};\n};");
    }
}
