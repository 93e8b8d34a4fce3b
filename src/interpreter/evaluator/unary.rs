use crate::{ast::UnaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a unary operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `Plus`: returns the operand unchanged.
    /// - `Minus`: arithmetic negation. Negating `0.0` gives `-0.0` and NaN
    ///   stays NaN.
    ///
    /// # Example
    /// ```
    /// use exprtree::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Plus, 7.0), 7.0);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Minus, 8.0), -8.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Minus => -value,
        }
    }
}
