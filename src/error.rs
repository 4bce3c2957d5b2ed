/// Lexing and parsing errors.
///
/// Defines the errors that can occur while turning source text into a
/// [`Program`](crate::ast::Program): characters that start no token, required
/// constructs that are missing, and literals that do not fit an integer.
pub mod parse_error;
/// Static checking errors.
///
/// The checker itself only answers yes or no; this is the error the pipeline
/// reports when the answer is no.
pub mod check_error;
/// Runtime errors.
///
/// Contains the recoverable failures the evaluator records while it runs:
/// unknown variables, mismatched operands, non-boolean conditions, and
/// rejected assignments. None of them stop execution.
pub mod runtime_error;

pub use check_error::CheckError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
