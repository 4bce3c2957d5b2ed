#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A program was rejected by the static type checker.
///
/// Execution is never attempted for such a program.
pub struct CheckError;

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: Program is ill-typed.")
    }
}

impl std::error::Error for CheckError {}
