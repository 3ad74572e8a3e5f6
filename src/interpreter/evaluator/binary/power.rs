use crate::{
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// `0 ^ 0` has no agreed value and is rejected. Every other pair is
    /// computed with `powf`; a negative base with a fractional exponent yields
    /// NaN, which [`Context::eval_binary`] reports as a domain error.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Example
    /// ```
    /// use pemdas::{config::Config, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new(&Config::default());
    ///
    /// assert_eq!(context.eval_pow(2.0, 10.0), Ok(1024.0));
    /// assert_eq!(context.eval_pow(-2.0, 3.0), Ok(-8.0));
    /// assert!(context.eval_pow(0.0, 0.0).is_err());
    /// ```
    pub fn eval_pow(&self, base: f64, exponent: f64) -> EvalResult<f64> {
        if base == 0.0 && exponent == 0.0 {
            return Err(EvalError::NumericDomainError { expression: format!("{} ^ {}",
                                                                           self.format(base),
                                                                           self.format(exponent)) });
        }
        Ok(base.powf(exponent))
    }
}
