use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, Program, Statement},
    interpreter::checker::types::{Type, TypeEnv},
};

/// Infers the type of an expression.
///
/// Rules:
/// - literals have their intrinsic type; variables the type of their
///   innermost declaration, or [`Type::IllTyped`] if undeclared.
/// - `+` and `*` need two `Int`s and give `Int`.
/// - `&&` and `||` need two `Bool`s and give `Bool`. Both operands are
///   checked even though evaluation short-circuits.
/// - `==` needs two operands of the same well-formed type and gives `Bool`.
/// - `<` needs two `Int`s and gives `Bool`.
/// - `!` needs a `Bool` and gives `Bool`.
///
/// Anything else is [`Type::IllTyped`].
///
/// # Example
/// ```
/// use imp::{
///     ast::Expr,
///     interpreter::checker::{
///         core::infer,
///         types::{Type, TypeEnv},
///     },
/// };
///
/// let env = TypeEnv::new();
///
/// assert_eq!(infer(&Expr::less(Expr::int(1), Expr::int(2)), &env), Type::Bool);
/// assert_eq!(infer(&Expr::or(Expr::boolean(true), Expr::int(54)), &env), Type::IllTyped);
/// ```
#[must_use]
pub fn infer(expr: &Expr, env: &TypeEnv) -> Type {
    match expr {
        Expr::Literal(LiteralValue::Integer(_)) => Type::Int,
        Expr::Literal(LiteralValue::Bool(_)) => Type::Bool,
        Expr::Variable(name) => env.lookup(name).copied().unwrap_or(Type::IllTyped),
        Expr::Not(expr) => match infer(expr, env) {
            Type::Bool => Type::Bool,
            _ => Type::IllTyped,
        },
        Expr::BinaryOp { left, op, right } => infer_binary(*op, infer(left, env), infer(right, env)),
    }
}

const fn infer_binary(op: BinaryOperator, left: Type, right: Type) -> Type {
    use BinaryOperator::{Add, And, Equal, Less, Mul, Or};

    match (op, left, right) {
        (Add | Mul, Type::Int, Type::Int) => Type::Int,
        (And | Or, Type::Bool, Type::Bool)
        | (Less, Type::Int, Type::Int)
        | (Equal, Type::Int, Type::Int)
        | (Equal, Type::Bool, Type::Bool) => Type::Bool,
        _ => Type::IllTyped,
    }
}

/// Checks a statement against the type environment.
///
/// Declarations add their inferred type to the innermost scope. Loop bodies
/// and both branches of a conditional are checked in their own scope, which
/// is popped afterwards, so nothing declared inside them is visible later.
/// Checking stops at the first ill-typed statement of a sequence.
///
/// Returns `false` for any ill-typed statement; never panics.
pub fn check(statement: &Statement, env: &mut TypeEnv) -> bool {
    let mut current = statement;
    while let Statement::Sequence { first, second } = current {
        if !check(first, env) {
            return false;
        }
        current = second;
    }
    check_one(current, env)
}

/// Checks one statement of a sequence.
///
/// Only the innermost failing statement or condition is logged.
fn check_one(statement: &Statement, env: &mut TypeEnv) -> bool {
    match statement {
        Statement::Sequence { .. } => check(statement, env),
        Statement::Declaration { name, value } => match infer(value, env) {
            Type::IllTyped => ill_typed(statement),
            ty => {
                env.declare(name, ty);
                true
            },
        },
        Statement::Assignment { name, value } => {
            let assigned = infer(value, env);
            env.lookup(name).is_some_and(|&declared| declared == assigned) || ill_typed(statement)
        },
        Statement::While { condition, body } => {
            check_condition(condition, env) && check_scoped(body, env)
        },
        Statement::IfThenElse { condition,
                                then_branch,
                                else_branch, } => {
            check_condition(condition, env)
            && check_scoped(then_branch, env)
            && check_scoped(else_branch, env)
        },
        Statement::Print { expr } => infer(expr, env) != Type::IllTyped || ill_typed(statement),
    }
}

fn ill_typed(statement: &Statement) -> bool {
    debug!(%statement, "ill-typed statement");
    false
}

/// A `while` or `if` condition must be a `Bool`.
fn check_condition(condition: &Expr, env: &TypeEnv) -> bool {
    let ty = infer(condition, env);
    if ty != Type::Bool {
        debug!(%condition, %ty, "ill-typed condition");
    }
    ty == Type::Bool
}

/// Checks `body` inside a freshly pushed scope.
fn check_scoped(body: &Statement, env: &mut TypeEnv) -> bool {
    env.push_scope();
    let well_typed = check(body, env);
    env.pop_scope();
    well_typed
}

/// Checks a whole program in a fresh type environment.
///
/// # Example
/// ```
/// use imp::{interpreter::checker::core::check_program, parse};
///
/// assert!(check_program(&parse("x := 42; x = 54;").unwrap()));
/// assert!(!check_program(&parse("x := 42; x = true;").unwrap()));
/// ```
#[must_use]
pub fn check_program(program: &Program) -> bool {
    let well_typed = check(program, &mut TypeEnv::new());
    debug!(well_typed, "checked program");
    well_typed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::core::parse;

    fn checks(source: &str) -> bool {
        check_program(&parse(source).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}")))
    }

    #[test]
    fn sequences() {
        assert!(checks("print 42; print 54;"));
        assert!(!checks("x := 42 < true; print 54 < false;"));
        assert!(!checks("print 42; print 54 < false;"));
    }

    #[test]
    fn declarations_and_assignments() {
        assert!(checks("x := 42; x = 54;"));
        assert!(!checks("x := 42; x = true;"));
        assert!(!checks("x = 42;"));
        assert!(checks("x := 42; x := true; x = false;"));
        assert!(!checks("x := 42 + true;"));
    }

    #[test]
    fn loops_and_conditionals() {
        assert!(checks("while true {print 42;};"));
        assert!(!checks("while 42 {print 42;};"));
        assert!(checks("if false {print 42;} else {print 54;};"));
        assert!(!checks("if true {print 42 < true;} else {print 54;};"));
        assert!(!checks("if true {print 42;} else {print 54 < true;};"));
        assert!(!checks("if 42 {print 42;} else {print 54;};"));
    }

    #[test]
    fn block_declarations_do_not_leak() {
        assert!(!checks("if true {y := 1;} else {y := 2;}; print y;"));
        assert!(!checks("while false {y := 1;}; y = 2;"));
        assert!(checks("y := true; if true {y := 1; y = 2;} else {y = false;}; y = true;"));
    }

    #[test]
    fn outer_bindings_are_visible_in_blocks() {
        assert!(checks("n := 1; x := 0; while n < 11 {x = x + n; n = n + 1;};"));
    }

    #[test]
    fn expressions() {
        assert!(checks("x := true == false;"));
        assert!(checks("x := 42 == 42;"));
        assert!(!checks("x := true == 54;"));
        assert!(checks("x := 42 < 54;"));
        assert!(!checks("x := 42 < true;"));
        assert!(!checks("x := true < false;"));
        assert!(checks("x := 42 + 54;"));
        assert!(!checks("x := 42 + false;"));
        assert!(checks("x := 6 * 9;"));
        assert!(!checks("x := 6 * false;"));
        assert!(checks("x := (42+54);"));
        assert!(!checks("x := (42+false);"));
        assert!(checks("x := !true;"));
        assert!(!checks("x := !42;"));
        assert!(checks("x := true; y := !x;"));
        assert!(!checks("x := 54; y := !x;"));
        assert!(!checks("print y;"));
    }

    #[test]
    fn boolean_operators_type_both_operands() {
        assert!(checks("x := false || true;"));
        assert!(!checks("x := false || 42;"));
        assert!(checks("x := true || false;"));
        assert!(!checks("x := true || 54;"));
        assert!(checks("x := true && true;"));
        assert!(!checks("x := true && 42;"));
        assert!(checks("x := false && true;"));
        assert!(!checks("x := false && 54;"));
    }

    #[test]
    fn ill_typed_equality_does_not_compare_equal() {
        let env = TypeEnv::new();
        let expr = Expr::equal(Expr::var("a"), Expr::var("b"));

        assert_eq!(infer(&expr, &env), Type::IllTyped);
    }

    #[test]
    fn long_programs_check_without_recursing() {
        let source = "x := 0;\n".to_string() + &"x = x + 1;\n".repeat(100_000);

        assert!(checks(&source));
        assert!(!checks(&(source + "x = true;")));
    }

    #[test]
    fn only_the_failing_statement_is_logged() {
        use std::{
            io::Write,
            sync::{Arc, Mutex},
        };

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG)
                                                  .with_ansi(false)
                                                  .with_writer(move || writer.clone())
                                                  .finish();

        let program =
            parse("while true { if true { print 1 < true; } else { print 1; }; };").unwrap();
        tracing::subscriber::with_default(subscriber, || assert!(!check_program(&program)));

        let logs = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("ill-typed statement").count(), 1);
        assert!(logs.contains("print (1<true)"));
        assert!(!logs.contains("while"));
    }

    #[test]
    fn check_restores_scope_depth() {
        let mut env = TypeEnv::new();
        let program = parse("if true {x := 1;} else {print 42 < true;};").unwrap();

        assert!(!check(&program, &mut env));
        assert_eq!(env.depth(), 1);
    }
}
