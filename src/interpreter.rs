/// The evaluator module computes the value of expression trees.
///
/// The evaluator walks a tree, resolves identifiers through the variable
/// context and applies the arithmetic operators. It is the core execution
/// engine of the crate.
///
/// # Responsibilities
/// - Owns the variable context consulted by identifier nodes.
/// - Evaluates every node variant, children left before right.
/// - Substitutes sentinel values for undefined variables and division by
///   zero, and reports them.
pub mod evaluator;
/// The report module defines where evaluation diagnostics go.
///
/// Evaluation never fails. Conditions that would otherwise be errors are
/// handed to a `Reporter`, which either logs them through `tracing` or
/// collects them for the caller to inspect.
pub mod report;
