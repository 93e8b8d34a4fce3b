use std::{
    io,
    sync::{Arc, Mutex},
};

use exprtree::{ast::Expr, interpreter::evaluator::core::Context};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn captured<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt().with_writer(capture.clone())
                                              .with_max_level(tracing::Level::WARN)
                                              .with_ansi(false)
                                              .without_time()
                                              .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    (value, capture.contents())
}

#[test]
fn undefined_variable_is_logged_as_warning() {
    let context = Context::new();
    let (value, output) = captured(|| Expr::identifier("y").evaluate(&context));

    assert_eq!(value, 0.0);
    assert!(output.contains("WARN"), "output: {output}");
    assert!(output.contains("Undefined variable 'y'."), "output: {output}");
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn division_by_zero_is_logged_as_warning() {
    let context = Context::new();
    let expr = Expr::divide(Expr::constant(8.0), Expr::constant(0.0));
    let (value, output) = captured(|| expr.evaluate(&context));

    assert_eq!(value, f64::INFINITY);
    assert!(output.contains("WARN"), "output: {output}");
    assert!(output.contains("Division by zero."), "output: {output}");
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn both_diagnostics_are_logged_in_order() {
    let context = Context::new();
    let expr = Expr::divide(Expr::identifier("y"), Expr::constant(0.0));
    let (value, output) = captured(|| exprtree::evaluate(&expr, &context));

    assert_eq!(value, f64::INFINITY);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2, "output: {output}");
    assert!(lines[0].contains("Undefined variable 'y'."));
    assert!(lines[1].contains("Division by zero."));
}

#[test]
fn clean_evaluation_logs_nothing() {
    let mut context = Context::new();
    context.set_variable("x", 2.0);
    let expr = Expr::divide(Expr::constant(8.0), Expr::identifier("x"));
    let (value, output) = captured(|| expr.evaluate(&context));

    assert_eq!(value, 4.0);
    assert!(output.is_empty(), "output: {output}");
}
