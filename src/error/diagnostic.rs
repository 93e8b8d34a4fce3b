use thiserror::Error;

/// A recoverable condition raised while evaluating an expression tree.
///
/// Diagnostics never abort evaluation. The evaluator substitutes a sentinel
/// value for the offending subexpression, hands the diagnostic to a
/// [`Reporter`](crate::interpreter::report::Reporter) and carries on with the
/// rest of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// An identifier had no binding in the context. Evaluates to `0.0`.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The right operand of a division evaluated to exactly zero. Evaluates
    /// to positive infinity.
    #[error("Division by zero.")]
    DivisionByZero,
}

impl Diagnostic {
    /// The sentinel value evaluation yields in place of the failed
    /// subexpression.
    ///
    /// # Example
    /// ```
    /// use exprtree::error::Diagnostic;
    ///
    /// assert_eq!(Diagnostic::DivisionByZero.substitute(), f64::INFINITY);
    /// ```
    #[must_use]
    pub const fn substitute(&self) -> f64 {
        match self {
            Self::UndefinedVariable { .. } => 0.0,
            Self::DivisionByZero => f64::INFINITY,
        }
    }
}
