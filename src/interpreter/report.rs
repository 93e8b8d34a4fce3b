use crate::error::Diagnostic;

/// Tracing target used for every diagnostic emitted by [`TracingReporter`].
pub const DIAGNOSTIC_TARGET: &str = "exprtree::eval";

/// A sink for diagnostics raised during evaluation.
///
/// The evaluator never returns an error. Whenever it substitutes a sentinel
/// value it hands the matching [`Diagnostic`] to a `Reporter`, in the order
/// the conditions were encountered (left subtree before right subtree).
///
/// `Vec<Diagnostic>` implements this trait, which makes collecting the stream
/// straightforward:
///
/// ```
/// use exprtree::{
///     ast::Expr,
///     error::Diagnostic,
///     interpreter::evaluator::core::Context,
/// };
///
/// let context = Context::new();
/// let mut diagnostics = Vec::new();
///
/// let value = Expr::identifier("y").evaluate_with(&context, &mut diagnostics);
/// assert_eq!(value, 0.0);
/// assert_eq!(diagnostics,
///            vec![Diagnostic::UndefinedVariable { name: "y".to_string() }]);
/// ```
pub trait Reporter {
    /// Receives one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Writes each diagnostic as a `WARN` level `tracing` event.
///
/// This is the reporter used by [`Expr::evaluate`](crate::ast::Expr::evaluate).
/// With a subscriber writing to stderr installed (as the binary does), the
/// diagnostics show up on the error stream as human-readable text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(target: DIAGNOSTIC_TARGET, "Error: {diagnostic}");
    }
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
