use crate::{
    ast::BinaryOperator,
    error::Diagnostic,
    interpreter::{evaluator::core::Context, report::Reporter},
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division by zero is checked explicitly: when `right` is exactly zero
    /// (either sign) a [`Diagnostic::DivisionByZero`] is reported and the
    /// result is positive infinity, whatever `left` was. The operator must be
    /// one of `Add`, `Sub`, `Mul` or `Div`; `Pow` is handled by
    /// [`Context::eval_pow`].
    ///
    /// # Example
    /// ```
    /// use exprtree::{
    ///     ast::BinaryOperator,
    ///     error::Diagnostic,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut diagnostics = Vec::new();
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0, &mut diagnostics);
    /// assert_eq!(result, 3.0);
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, -1.0, 0.0, &mut diagnostics);
    /// assert_eq!(result, f64::INFINITY);
    /// assert_eq!(diagnostics, vec![Diagnostic::DivisionByZero]);
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_scalar_op<R: Reporter + ?Sized>(op: BinaryOperator,
                                                left: f64,
                                                right: f64,
                                                reporter: &mut R)
                                                -> f64 {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    let diagnostic = Diagnostic::DivisionByZero;
                    let value = diagnostic.substitute();
                    reporter.report(diagnostic);
                    value
                } else {
                    left / right
                }
            },
            _ => unreachable!(),
        }
    }
}
