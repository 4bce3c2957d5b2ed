#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Parsing does not recover: the first error aborts the source unit.
pub enum ParseError {
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A required token or construct was missing or out of place.
    Expected {
        /// A description of what the grammar required at this point.
        expected: String,
        /// The lexeme actually found. Empty at the end of input.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character '{character}'.")
            },
            Self::Expected { expected, found, line } if found.is_empty() => {
                write!(f, "Error on line {line}: Expected {expected}, found end of input.")
            },
            Self::Expected { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, found \"{found}\".")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
