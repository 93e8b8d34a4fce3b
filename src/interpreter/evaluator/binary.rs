/// Scalar arithmetic: addition, subtraction, multiplication and the guarded
/// division.
pub mod scalar;

/// Exponentiation.
pub mod power;

use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, report::Reporter},
};

impl Context {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// Arithmetic operators are routed to [`Context::eval_scalar_op`], `Pow`
    /// to [`Context::eval_pow`]. Only division can raise a diagnostic.
    ///
    /// # Example
    /// ```
    /// use exprtree::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let mut diagnostics = Vec::new();
    /// let result = Context::eval_binary(BinaryOperator::Pow, 2.0, 3.0, &mut diagnostics);
    /// assert_eq!(result, 8.0);
    /// assert!(diagnostics.is_empty());
    /// ```
    pub fn eval_binary<R: Reporter + ?Sized>(op: BinaryOperator,
                                             left: f64,
                                             right: f64,
                                             reporter: &mut R)
                                             -> f64 {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, reporter),
            Pow => Self::eval_pow(left, right),
        }
    }
}
