/// Parser state, token handling helpers, and the parsing entry points.
pub mod core;

/// Statement parsing.
///
/// Declarations, assignments, `while`, `if`/`else`, `print`, and the
/// semicolon-terminated sequences that chain them.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used as loop bodies and
/// branches.
pub mod block;

/// Binary operator parsing.
///
/// Implements the precedence levels for comparisons, additive operators
/// (`+`, `||`), and multiplicative operators (`*`, `&&`).
pub mod binary;

/// Factor parsing.
///
/// Literals, variables, negation, and parenthesised expressions.
pub mod unary;
