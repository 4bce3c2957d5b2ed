use crate::{ast::BinaryOperator, interpreter::value::core::Value};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the recoverable failures the evaluator can run into.
///
/// These are recorded and reported, never propagated: the failing operation
/// yields [`Value::Undefined`] or does nothing, and execution continues.
pub enum RuntimeError {
    /// Tried to read a variable that is not bound in any scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to assign to a variable that is not bound in any scope.
    AssignmentToUnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to assign a value of a different kind than the existing binding.
    AssignmentKindMismatch {
        /// The name of the variable.
        name:     String,
        /// The value currently bound.
        current:  Value,
        /// The rejected value.
        rejected: Value,
    },
    /// A binary operator was applied to operands it is not defined for.
    TypeMismatch {
        /// The operator.
        op:    BinaryOperator,
        /// The left operand.
        left:  Value,
        /// The right operand.
        right: Value,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The construct that needed the boolean, e.g. `while`.
        construct: &'static str,
        /// The value found instead.
        found:     Value,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Runtime error: Unknown variable '{name}'."),
            Self::AssignmentToUnknownVariable { name } => {
                write!(f, "Runtime error: Cannot assign to undeclared variable '{name}'.")
            },
            Self::AssignmentKindMismatch { name,
                                           current,
                                           rejected, } => write!(f,
                                                                 "Runtime error: Cannot assign {rejected} to '{name}', which holds {current}."),
            Self::TypeMismatch { op, left, right } => {
                write!(f, "Runtime error: Cannot use {op} on {left} and {right}.")
            },
            Self::ExpectedBoolean { construct, found } => write!(f,
                                                                 "Runtime error: Expected boolean in {construct}, found {found}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
