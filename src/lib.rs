//! # imp
//!
//! imp is an interpreter for IMP, a tiny imperative language with integers,
//! booleans, scoped variables, `while` loops, `if`/`else`, and `print`.
//! Source text is lexed, parsed into a tree, statically type checked, and
//! then evaluated by walking the tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::CheckError,
    interpreter::{
        checker::core::check_program,
        evaluator::{core::Context, print::Output},
    },
};
pub use crate::interpreter::{lexer::tokenize, parser::core::parse};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree, together with constructors
/// for building trees by hand and a pretty-printer that turns them back
/// into source text.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Prints programs in a form the parser reads back to the same tree.
pub mod ast;
/// Provides unified error types for parsing, checking, and evaluation.
///
/// # Responsibilities
/// - Defines error types for every failure mode (lexer and parser, checker,
///   evaluator).
/// - Attaches line numbers to parse errors.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, type checking, and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, checker, evaluator, and
///   value representation.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Statically checks a program.
///
/// Returns `true` if the program is well-typed. A well-typed program never
/// produces a runtime type mismatch.
///
/// # Example
/// ```
/// use imp::{check, parse};
///
/// assert!(check(&parse("x := 42; print x + 1;").unwrap()));
/// assert!(!check(&parse("x := false || 42;").unwrap()));
/// ```
#[must_use]
pub fn check(program: &Program) -> bool {
    check_program(program)
}

/// Evaluates a program without checking it first.
///
/// Printed lines go to `output`. The returned context holds the final global
/// bindings and any recoverable runtime failures.
///
/// # Example
/// ```
/// use imp::{evaluate, interpreter::value::core::Value, parse};
///
/// let mut lines: Vec<String> = Vec::new();
/// let context = evaluate(&parse("x := true || 54; print x;").unwrap(), &mut lines);
///
/// assert_eq!(lines, ["true"]);
/// assert_eq!(context.lookup("x"), Value::Boolean(true));
/// ```
pub fn evaluate(program: &Program, output: &mut dyn Output) -> Context {
    let mut context = Context::new();
    context.eval_statement(program, output);
    context
}

/// Runs a source unit from start to finish.
///
/// The source is parsed, then checked, and only a well-typed program is
/// evaluated.
///
/// # Errors
/// Returns the [`ParseError`](error::ParseError) if the source does not
/// parse, or [`CheckError`] if the program is ill-typed. In both cases
/// nothing is printed.
///
/// # Examples
/// ```
/// use imp::{interpreter::value::core::Value, run};
///
/// let mut lines: Vec<String> = Vec::new();
/// let context = run("x := 42; y := 12; x = x + y; print x;", &mut lines).unwrap();
///
/// assert_eq!(lines, ["54"]);
/// assert_eq!(context.lookup("x"), Value::Integer(54));
///
/// // Ill-typed programs never run.
/// let mut lines: Vec<String> = Vec::new();
/// assert!(run("print 1; x := false || 42;", &mut lines).is_err());
/// assert!(lines.is_empty());
/// ```
pub fn run(source: &str, output: &mut dyn Output) -> Result<Context, Box<dyn std::error::Error>> {
    let program = parse(source)?;

    if !check(&program) {
        return Err(Box::new(CheckError));
    }

    Ok(evaluate(&program, output))
}
