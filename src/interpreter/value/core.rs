use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// `Undefined` is what every failed operation produces: a type mismatch, an
/// unbound variable, or an operand that was itself `Undefined`. It lets the
/// evaluator carry on instead of aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// The result of a failed operation.
    Undefined,
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Bool(b) => Self::Boolean(b),
        }
    }
}

impl Value {
    /// Returns `true` if both values have the same runtime kind, regardless
    /// of their contents.
    ///
    /// # Example
    /// ```
    /// use imp::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(1).same_kind(&Value::Integer(2)));
    /// assert!(!Value::Integer(1).same_kind(&Value::Boolean(true)));
    /// assert!(Value::Undefined.same_kind(&Value::Undefined));
    /// ```
    #[must_use]
    pub const fn same_kind(&self, other: &Self) -> bool {
        matches!((self, other),
                 (Self::Integer(_), Self::Integer(_))
                 | (Self::Boolean(_), Self::Boolean(_))
                 | (Self::Undefined, Self::Undefined))
    }
}

/// Integers print in decimal, booleans as `true` or `false`, and the poison
/// value as `Undefined`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Undefined => write!(f, "Undefined"),
        }
    }
}
