/// The static types and the type environment.
pub mod types;

/// Type inference for expressions and type checking for statements.
///
/// Runs before evaluation; a program that fails checking is never executed.
pub mod core;
