use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary operation between two numbers.
    ///
    /// This function routes the operation to [`Context::eval_scalar_op`] and
    /// then rejects any result that is not finite, so overflow such as
    /// `10 ^ 400` or a NaN never reaches the caller as a value.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use pemdas::{
    ///     ast::BinaryOperator,
    ///     config::Config,
    ///     error::ErrorKind,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let context = Context::new(&Config::default());
    ///
    /// assert_eq!(context.eval_binary(BinaryOperator::Add, 3.0, 4.0), Ok(7.0));
    ///
    /// let err = context.eval_binary(BinaryOperator::Pow, 10.0, 400.0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NumericDomainError);
    /// ```
    pub fn eval_binary(&self, op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        let result = self.eval_scalar_op(op, left, right)?;

        if result.is_finite() {
            Ok(result)
        } else {
            log::debug!("{left} {op} {right} produced {result}");
            Err(EvalError::NumericDomainError { expression: format!("{} {op} {}",
                                                                    self.format(left),
                                                                    self.format(right)) })
        }
    }
}
