use crate::interpreter::scope::ScopeStack;

/// The static type of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Integers.
    Int,
    /// Booleans.
    Bool,
    /// The result of any ill-typed expression. Propagates outward through
    /// every operator, the way `Undefined` does at runtime.
    IllTyped,
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "Int"),
            Self::Bool => write!(f, "Bool"),
            Self::IllTyped => write!(f, "IllTyped"),
        }
    }
}

/// Scoped mapping from variable names to their declared types.
pub type TypeEnv = ScopeStack<Type>;
