//! # exprtree
//!
//! exprtree is an in-memory arithmetic expression tree written in Rust.
//! Trees are built by direct construction from constants, named variables and
//! unary and binary operators, and evaluated to `f64` against a variable
//! context.
//!
//! Evaluation is fault tolerant: an undefined variable evaluates to `0.0` and
//! a division by zero to positive infinity. Both conditions are reported as
//! diagnostics, never as errors, and the rest of the tree is still evaluated.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{ast::Expr, interpreter::evaluator::core::Context};

/// Defines the structure of expression trees.
///
/// This module declares the `Expr` enum, its operators and the `Kind` tag
/// that identifies each variant. Trees are assembled with the constructors
/// defined here and taken apart again with the structural accessors.
///
/// # Responsibilities
/// - Defines every node variant and its payload.
/// - Moves children into their parent on construction.
/// - Exposes variant introspection through `Expr::kind`.
pub mod ast;
/// Provides the recoverable conditions raised during evaluation.
///
/// This module defines the diagnostics evaluation reports instead of failing,
/// together with the sentinel value each one substitutes.
///
/// # Responsibilities
/// - Defines the `Diagnostic` enum for undefined variables and division by
///   zero.
/// - Supplies human-readable messages for the diagnostic stream.
pub mod error;
/// Evaluates expression trees.
///
/// This module ties together the variable context, the evaluator and the
/// diagnostic reporting to compute the value of a tree.
///
/// # Responsibilities
/// - Stores variable bindings in a caller-owned `Context`.
/// - Evaluates every node variant with the fault-tolerant numeric policy.
/// - Routes diagnostics to a `Reporter`.
pub mod interpreter;
/// Canned self-test exercising every node variant.
///
/// Used by the `--run-tests` flag of the command-line tool.
pub mod selftest;

/// Evaluates `expr` against `context`, logging any diagnostics.
///
/// Shorthand for [`Expr::evaluate`].
///
/// # Examples
/// ```
/// use exprtree::{ast::Expr, evaluate, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
/// context.set_variable("Num1", 3.0);
/// context.set_variable("Num2", 7.0);
///
/// // -Num1 + 2 * (4 - Num2)
/// let expr = Expr::add(Expr::unary_minus(Expr::identifier("Num1")),
///                      Expr::multiply(Expr::constant(2.0),
///                                     Expr::subtract(Expr::constant(4.0),
///                                                    Expr::identifier("Num2"))));
/// assert_eq!(evaluate(&expr, &context), -9.0);
///
/// // Unknown variables evaluate to zero instead of failing.
/// context.clear_variables();
/// assert_eq!(evaluate(&expr, &context), 2.0 * 4.0);
/// ```
#[must_use]
pub fn evaluate(expr: &Expr, context: &Context) -> f64 {
    tracing::debug!(kind = %expr.kind(), "evaluating expression");
    expr.evaluate(context)
}
