/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens, each one a
/// keyword, name, literal, operator, or delimiter tagged with its source
/// line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and line.
/// - Skips whitespace and `//` comments.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs the tree of
/// statements and expressions, honouring operator precedence and
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting the first error with its line.
pub mod parser;
/// Lexically scoped environments shared by the checker and the evaluator.
pub mod scope;
/// The checker module statically types programs before they run.
///
/// # Responsibilities
/// - Infers a type for every expression.
/// - Accepts or rejects whole programs, scoping declarations to blocks.
pub mod checker;
/// The value module defines the runtime data types for evaluation.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree, keeps variable state in nested scopes, and
/// emits printed lines. It never aborts: failed operations produce the
/// `Undefined` value and a recorded diagnostic.
///
/// # Responsibilities
/// - Evaluates expressions, short-circuiting `&&` and `||`.
/// - Executes statements, pushing a scope for every block it enters.
/// - Records recoverable runtime failures.
pub mod evaluator;
