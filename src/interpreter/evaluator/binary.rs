use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a binary operation from its operand expressions.
    ///
    /// `&&` and `||` short-circuit: when the left operand alone decides the
    /// result, the right operand is never evaluated and so records nothing.
    /// Every other operator evaluates both operands, left first.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            left: &Expr,
                                                            op: BinaryOperator,
                                                            right: &Expr)
                                                            -> Value {
        let left = self.eval(left);

        match (op, left) {
            (BinaryOperator::And, Value::Boolean(false)) => return Value::Boolean(false),
            (BinaryOperator::Or, Value::Boolean(true)) => return Value::Boolean(true),
            _ => {},
        }

        let right = self.eval(right);
        self.eval_binary(op, left, right)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// - `+` and `*` need two integers and wrap on overflow.
    /// - `&&` and `||` need two booleans.
    /// - `==` needs two integers or two booleans.
    /// - `<` needs two integers.
    ///
    /// Anything else gives [`Value::Undefined`]. A
    /// [`RuntimeError::TypeMismatch`] is recorded only when neither operand
    /// was already `Undefined`, so one failure is reported once no matter how
    /// far its poison spreads.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The result of the operation.
    ///
    /// # Example
    /// ```
    /// use imp::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    ///
    /// let sum = context.eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4));
    /// assert_eq!(sum, Value::Integer(7));
    ///
    /// let bad = context.eval_binary(BinaryOperator::Less, Value::Integer(3), Value::Boolean(true));
    /// assert_eq!(bad, Value::Undefined);
    /// assert_eq!(context.diagnostics.len(), 1);
    /// ```
    pub fn eval_binary(&mut self, op: BinaryOperator, left: Value, right: Value) -> Value {
        use BinaryOperator::{Add, And, Equal, Less, Mul, Or};
        use Value::{Boolean, Integer, Undefined};

        match (op, left, right) {
            (_, Undefined, _) | (_, _, Undefined) => Undefined,
            (Add, Integer(a), Integer(b)) => Integer(a.wrapping_add(b)),
            (Mul, Integer(a), Integer(b)) => Integer(a.wrapping_mul(b)),
            (And, Boolean(a), Boolean(b)) => Boolean(a && b),
            (Or, Boolean(a), Boolean(b)) => Boolean(a || b),
            (Equal, Integer(a), Integer(b)) => Boolean(a == b),
            (Equal, Boolean(a), Boolean(b)) => Boolean(a == b),
            (Less, Integer(a), Integer(b)) => Boolean(a < b),
            _ => {
                self.report(RuntimeError::TypeMismatch { op, left, right });
                Undefined
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::core::Value::{Boolean, Integer, Undefined};

    #[test]
    fn arithmetic_wraps() {
        let mut context = Context::new();

        assert_eq!(context.eval_binary(BinaryOperator::Add, Integer(i64::MAX), Integer(1)),
                   Integer(i64::MIN));
        assert_eq!(context.eval_binary(BinaryOperator::Mul, Integer(-6), Integer(9)),
                   Integer(-54));
        assert!(context.diagnostics.is_empty());
    }

    #[test]
    fn equality_needs_matching_kinds() {
        let mut context = Context::new();

        assert_eq!(context.eval_binary(BinaryOperator::Equal, Integer(1), Integer(1)),
                   Boolean(true));
        assert_eq!(context.eval_binary(BinaryOperator::Equal, Boolean(true), Boolean(false)),
                   Boolean(false));
        assert_eq!(context.eval_binary(BinaryOperator::Equal, Integer(1), Boolean(true)),
                   Undefined);
        assert_eq!(context.diagnostics,
                   [RuntimeError::TypeMismatch { op:    BinaryOperator::Equal,
                                                 left:  Integer(1),
                                                 right: Boolean(true), }]);
    }

    #[test]
    fn undefined_operands_propagate_silently() {
        let mut context = Context::new();

        assert_eq!(context.eval_binary(BinaryOperator::Add, Undefined, Integer(1)), Undefined);
        assert_eq!(context.eval_binary(BinaryOperator::Equal, Undefined, Undefined),
                   Undefined);
        assert_eq!(context.eval_binary(BinaryOperator::Or, Boolean(false), Undefined),
                   Undefined);
        assert!(context.diagnostics.is_empty());
    }

    #[test]
    fn decided_logic_skips_the_right_operand() {
        let mut context = Context::new();

        let and = Expr::and(Expr::boolean(false), Expr::var("unbound"));
        let or = Expr::or(Expr::boolean(true), Expr::var("unbound"));

        assert_eq!(context.eval(&and), Boolean(false));
        assert_eq!(context.eval(&or), Boolean(true));
        assert!(context.diagnostics.is_empty());
    }

    #[test]
    fn undecided_logic_evaluates_the_right_operand() {
        let mut context = Context::new();

        let and = Expr::and(Expr::boolean(true), Expr::var("unbound"));

        assert_eq!(context.eval(&and), Undefined);
        assert_eq!(context.diagnostics,
                   [RuntimeError::UnknownVariable { name: "unbound".to_string() }]);
    }

    #[test]
    fn non_boolean_left_operand_is_a_mismatch() {
        let mut context = Context::new();

        let or = Expr::or(Expr::int(1), Expr::boolean(true));

        assert_eq!(context.eval(&or), Undefined);
        assert_eq!(context.diagnostics.len(), 1);
    }
}
