use std::io::{self, Write};

use crate::{ast::Expr, interpreter::evaluator::core::Context};

/// Outcome of a self-test run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    /// Number of checks that produced the expected value.
    pub passed: usize,
    /// Names of the checks that did not.
    pub failed: Vec<String>,
}

impl SelfTestReport {
    /// Returns `true` if every check passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub(crate) struct Check {
    name:      &'static str,
    variables: &'static [(&'static str, f64)],
    expected:  f64,
    build:     fn() -> Expr,
}

const CHECKS: &[Check] = &[
    Check { name:      "constant",
            variables: &[],
            expected:  5.0,
            build:     || Expr::constant(5.0), },
    Check { name:      "identifier",
            variables: &[("x", 10.0)],
            expected:  10.0,
            build:     || Expr::identifier("x"), },
    Check { name:      "unary plus",
            variables: &[],
            expected:  7.0,
            build:     || Expr::unary_plus(Expr::constant(7.0)), },
    Check { name:      "unary minus",
            variables: &[],
            expected:  -8.0,
            build:     || Expr::unary_minus(Expr::constant(8.0)), },
    Check { name:      "add",
            variables: &[],
            expected:  7.0,
            build:     || Expr::add(Expr::constant(3.0), Expr::constant(4.0)), },
    Check { name:      "subtract",
            variables: &[],
            expected:  4.0,
            build:     || Expr::subtract(Expr::constant(9.0), Expr::constant(5.0)), },
    Check { name:      "multiply",
            variables: &[],
            expected:  12.0,
            build:     || Expr::multiply(Expr::constant(2.0), Expr::constant(6.0)), },
    Check { name:      "divide",
            variables: &[],
            expected:  4.0,
            build:     || Expr::divide(Expr::constant(8.0), Expr::constant(2.0)), },
    Check { name:      "power",
            variables: &[],
            expected:  8.0,
            build:     || Expr::power(Expr::constant(2.0), Expr::constant(3.0)), },
    Check { name:      "undefined identifier",
            variables: &[],
            expected:  0.0,
            build:     || Expr::identifier("y"), },
    Check { name:      "nested with variables",
            variables: &[("Num1", 3.0), ("Num2", 7.0)],
            expected:  -9.0,
            build:     || {
                Expr::add(Expr::unary_minus(Expr::identifier("Num1")),
                          Expr::multiply(Expr::constant(2.0),
                                         Expr::subtract(Expr::constant(4.0),
                                                        Expr::identifier("Num2"))))
            }, },
    Check { name:      "quotient of power",
            variables: &[("a", 3.0), ("b", 1.0), ("c", 5.0), ("d", 2.0)],
            expected:  0.125,
            build:     || {
                Expr::divide(Expr::multiply(Expr::constant(2.0),
                                            Expr::add(Expr::identifier("a"),
                                                      Expr::identifier("b"))),
                             Expr::power(Expr::subtract(Expr::identifier("c"),
                                                        Expr::constant(1.0)),
                                         Expr::add(Expr::identifier("d"),
                                                   Expr::constant(1.0))))
            }, },
];

/// Runs the canned self-test, writing one line per check to `out`.
///
/// Every check builds its tree from scratch and evaluates it against a fresh
/// [`Context`] holding only that check's bindings.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// let report = exprtree::selftest::run(&mut out).unwrap();
/// assert!(report.is_success());
/// assert!(String::from_utf8(out).unwrap().contains("Test: power ... Passed."));
/// ```
pub fn run<W: Write>(out: &mut W) -> io::Result<SelfTestReport> {
    run_checks(CHECKS, out)
}

#[allow(clippy::float_cmp)]
pub(crate) fn run_checks<W: Write>(checks: &[Check], out: &mut W) -> io::Result<SelfTestReport> {
    let mut report = SelfTestReport::default();

    for check in checks {
        let mut context = Context::new();
        for (name, value) in check.variables {
            context.set_variable(*name, *value);
        }

        let actual = (check.build)().evaluate(&context);
        if actual == check.expected {
            writeln!(out, "Test: {} ... Passed.", check.name)?;
            report.passed += 1;
        } else {
            writeln!(out,
                     "Test: {} ... Failed (expected: {} but got {}).",
                     check.name, check.expected, actual)?;
            report.failed.push(check.name.to_string());
        }
    }

    tracing::debug!(passed = report.passed, failed = report.failed.len(), "self-test finished");
    Ok(report)
}
