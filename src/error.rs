/// Recoverable evaluation conditions.
///
/// Defines the conditions the evaluator reports instead of failing: undefined
/// variables and division by zero. Each condition knows the sentinel value
/// that replaces the failed subexpression, so a caller inspecting the
/// diagnostic stream can tell exactly where a fallback happened.
pub mod diagnostic;

pub use diagnostic::Diagnostic;
