use tracing::{debug, warn};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::print::Output,
        scope::{AssignError, ScopeStack},
        value::core::Value,
    },
};

/// Scoped mapping from variable names to their current values.
pub type ValueEnv = ScopeStack<Value>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the stack of variable scopes and
/// every recoverable failure met so far.
///
/// ## Usage
///
/// A `Context` is created once per program run and threaded mutably through
/// the whole walk, so scope changes and variable updates made by one
/// statement are seen by the statements after it.
#[derive(Debug, Default)]
pub struct Context {
    /// The variable scopes. Holds only the global scope between statements
    /// at the top level.
    pub scopes:      ValueEnv,
    /// Recoverable failures, in the order they happened.
    pub diagnostics: Vec<RuntimeError>,
}

impl Context {
    /// Creates a new evaluation context with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the innermost binding of `name`, or [`Value::Undefined`] if
    /// there is none.
    ///
    /// Unlike evaluating a variable expression, this records no diagnostic.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Value {
        self.scopes.lookup(name).copied().unwrap_or(Value::Undefined)
    }

    /// Records a recoverable failure and carries on.
    pub(in crate::interpreter::evaluator) fn report(&mut self, error: RuntimeError) {
        warn!(%error, "recoverable runtime failure");
        self.diagnostics.push(error);
    }

    /// Evaluates an expression.
    ///
    /// Never fails: unbound variables and operators applied to the wrong
    /// kinds of value give [`Value::Undefined`] and record a diagnostic.
    ///
    /// # Example
    /// ```
    /// use imp::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// context.scopes.declare("x", Value::Integer(10));
    ///
    /// let sum = Expr::plus(Expr::var("x"), Expr::int(5));
    /// assert_eq!(context.eval(&sum), Value::Integer(15));
    ///
    /// assert_eq!(context.eval(&Expr::var("missing")), Value::Undefined);
    /// assert_eq!(context.diagnostics.len(), 1);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::Literal(value) => Value::from(*value),
            Expr::Variable(name) => {
                if let Some(value) = self.scopes.lookup(name) {
                    return *value;
                }
                self.report(RuntimeError::UnknownVariable { name: name.clone() });
                Value::Undefined
            },
            Expr::Not(expr) => match self.eval(expr) {
                Value::Boolean(b) => Value::Boolean(!b),
                Value::Undefined => Value::Undefined,
                found => {
                    self.report(RuntimeError::ExpectedBoolean { construct: "!", found });
                    Value::Undefined
                },
            },
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
        }
    }

    /// Executes a statement, or each statement of a sequence in order.
    ///
    /// - Declarations bind in the innermost scope, shadowing outer bindings.
    /// - Assignments overwrite the innermost existing binding, and only with
    ///   a value of the same kind. Otherwise nothing changes.
    /// - `while` and `if` evaluate their condition in the enclosing scope and
    ///   run each loop iteration or selected branch in a fresh scope.
    /// - A condition that is not a boolean stops the construct without
    ///   running a body.
    /// - `print` emits the value's text to `output`.
    ///
    /// Failures are recorded in [`Context::diagnostics`]; execution always
    /// continues with the next statement.
    pub fn eval_statement(&mut self, statement: &Statement, output: &mut dyn Output) {
        let mut current = statement;
        while let Statement::Sequence { first, second } = current {
            self.eval_statement(first, output);
            current = second;
        }
        self.execute(current, output);
    }

    /// Executes one statement of a sequence.
    fn execute(&mut self, statement: &Statement, output: &mut dyn Output) {
        match statement {
            Statement::Sequence { .. } => self.eval_statement(statement, output),
            Statement::Declaration { name, value } => {
                let value = self.eval(value);
                self.scopes.declare(name, value);
            },
            Statement::Assignment { name, value } => {
                let value = self.eval(value);
                self.assign(name, value);
            },
            Statement::While { condition, body } => loop {
                match self.eval(condition) {
                    Value::Boolean(true) => self.eval_scoped(body, output),
                    Value::Boolean(false) => break,
                    found => {
                        self.report(RuntimeError::ExpectedBoolean { construct: "while",
                                                                    found });
                        break;
                    },
                }
            },
            Statement::IfThenElse { condition,
                                    then_branch,
                                    else_branch, } => match self.eval(condition) {
                Value::Boolean(true) => self.eval_scoped(then_branch, output),
                Value::Boolean(false) => self.eval_scoped(else_branch, output),
                found => self.report(RuntimeError::ExpectedBoolean { construct: "if", found }),
            },
            Statement::Print { expr } => {
                let line = self.eval(expr).to_string();
                debug!(%line, "print");
                output.emit(&line);
            },
        }
    }

    /// Executes `body` inside a freshly pushed scope.
    fn eval_scoped(&mut self, body: &Statement, output: &mut dyn Output) {
        self.scopes.push_scope();
        self.eval_statement(body, output);
        self.scopes.pop_scope();
    }

    /// Overwrites the innermost binding of `name` if `value` has its kind.
    fn assign(&mut self, name: &str, value: Value) {
        match self.scopes.assign_if(name, value, Value::same_kind) {
            Ok(()) => {},
            Err(AssignError::Unbound(_)) => {
                self.report(RuntimeError::AssignmentToUnknownVariable { name: name.to_string() });
            },
            Err(AssignError::Rejected(rejected)) => {
                let current = self.lookup(name);
                self.report(RuntimeError::AssignmentKindMismatch { name: name.to_string(),
                                                                   current,
                                                                   rejected });
            },
        }
    }
}
