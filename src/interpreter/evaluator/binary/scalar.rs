use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division by zero is checked explicitly: a right-hand operand equal to
    /// `0` (or `-0`) is an error, never an infinity. Exponentiation is handed
    /// to [`Context::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the raw result, which may still be
    /// non-finite.
    ///
    /// # Example
    /// ```
    /// use pemdas::{ast::BinaryOperator, config::Config, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new(&Config::default());
    ///
    /// assert_eq!(context.eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0), Ok(3.0));
    /// assert!(context.eval_scalar_op(BinaryOperator::Div, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_scalar_op(&self, op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { dividend: self.format(left) });
                }
                Ok(left / right)
            },
            Pow => self.eval_pow(left, right),
        }
    }
}
