/// Core evaluation logic and context management.
///
/// Contains the evaluation context (the scoped value environment and the
/// runtime diagnostics collected so far) and statement and expression
/// evaluation.
pub mod core;

/// Binary operator evaluation logic.
///
/// Arithmetic, comparisons, and the short-circuiting logical operators.
pub mod binary;

/// The output capability used by `print`.
pub mod print;
