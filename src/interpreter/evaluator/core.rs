use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::Diagnostic,
    interpreter::report::{Reporter, TracingReporter},
};

/// Stores the variable bindings consulted during evaluation.
///
/// `Context` is a flat name-to-value map. It is created empty, bindings are
/// inserted or overwritten with [`Context::set_variable`] and dropped all at
/// once with [`Context::clear_variables`]; there is no way to remove a single
/// binding.
///
/// ## Usage
///
/// A `Context` is owned by the caller and lent to evaluation by shared
/// reference. Evaluation never writes to it, so one context can back any
/// number of evaluations, and independent contexts give fully isolated
/// evaluations. `Context` holds no interior mutability; sharing one between
/// threads that also mutate it requires the caller to wrap it in a lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    variables: HashMap<String, f64>,
}

impl Context {
    /// Creates a new context with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        tracing::trace!(%name, value, "set variable");
        self.variables.insert(name, value);
    }

    /// Looks up the value bound to `name`.
    ///
    /// A miss is reported as `None`; substituting a value for it is the
    /// evaluator's business, not the context's.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Removes every binding.
    pub fn clear_variables(&mut self) {
        tracing::trace!(count = self.variables.len(), "clear variables");
        self.variables.clear();
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; children are always evaluated
    /// left before right. Recoverable conditions never stop evaluation: an
    /// undefined variable yields `0.0` and a division by zero yields
    /// positive infinity, and in both cases a [`Diagnostic`] is handed to
    /// `reporter`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `reporter`: Sink receiving the diagnostics raised along the way.
    ///
    /// # Example
    /// ```
    /// use exprtree::{ast::Expr, error::Diagnostic, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    /// let mut diagnostics = Vec::new();
    ///
    /// let expr = Expr::divide(Expr::constant(8.0), Expr::constant(0.0));
    /// assert_eq!(context.eval(&expr, &mut diagnostics), f64::INFINITY);
    /// assert_eq!(diagnostics, vec![Diagnostic::DivisionByZero]);
    /// ```
    pub fn eval<R: Reporter + ?Sized>(&self, expr: &Expr, reporter: &mut R) -> f64 {
        match expr {
            Expr::Constant { value } => *value,
            Expr::Identifier { name } => self.eval_identifier(name, reporter),
            Expr::UnaryOp { op, operand } => {
                let value = self.eval(operand, reporter);
                Self::eval_unary(*op, value)
            },
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval(left, reporter);
                let right = self.eval(right, reporter);
                Self::eval_binary(*op, left, right, reporter)
            },
        }
    }

    fn eval_identifier<R: Reporter + ?Sized>(&self, name: &str, reporter: &mut R) -> f64 {
        self.get_variable(name).unwrap_or_else(|| {
                                   let diagnostic =
                                       Diagnostic::UndefinedVariable { name: name.to_string() };
                                   let value = diagnostic.substitute();
                                   reporter.report(diagnostic);
                                   value
                               })
    }
}

impl Expr {
    /// Evaluates the tree against `context`.
    ///
    /// Diagnostics are written as `tracing` warnings; use
    /// [`Expr::evaluate_with`] to capture them instead.
    #[must_use]
    pub fn evaluate(&self, context: &Context) -> f64 {
        self.evaluate_with(context, &mut TracingReporter)
    }

    /// Evaluates the tree against `context`, handing every diagnostic to
    /// `reporter`.
    pub fn evaluate_with<R: Reporter + ?Sized>(&self, context: &Context, reporter: &mut R) -> f64 {
        context.eval(self, reporter)
    }
}
