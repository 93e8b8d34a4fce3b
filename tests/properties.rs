use exprtree::{ast::Expr, error::Diagnostic, interpreter::evaluator::core::Context};
use proptest::prelude::*;

fn eval(expr: &Expr, context: &Context) -> (f64, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let value = expr.evaluate_with(context, &mut diagnostics);
    (value, diagnostics)
}

fn same(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
}

// Random trees over constants and a fixed set of bound and unbound names.
fn tree() -> impl Strategy<Value = Expr> {
    let names = prop::sample::select(vec!["a", "b", "missing"]);
    let leaf = prop_oneof![(-1.0e6..1.0e6).prop_map(Expr::constant),
                           names.prop_map(Expr::identifier)];

    leaf.prop_recursive(5, 48, 2, |inner| {
            prop_oneof![inner.clone().prop_map(Expr::unary_plus),
                        inner.clone().prop_map(Expr::unary_minus),
                        (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::add(l, r)),
                        (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::subtract(l, r)),
                        (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::multiply(l, r)),
                        (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::divide(l, r)),
                        (inner.clone(), inner).prop_map(|(l, r)| Expr::power(l, r))]
        })
}

fn context() -> Context {
    let mut context = Context::new();
    context.set_variable("a", 2.5);
    context.set_variable("b", -0.5);
    context
}

proptest! {
    #[test]
    fn constant_evaluates_to_itself(x in any::<f64>()) {
        let (value, diagnostics) = eval(&Expr::constant(x), &Context::new());
        prop_assert!(same(value, x));
        prop_assert!(diagnostics.is_empty());
    }

    #[test]
    fn identifier_after_set_and_clear(n in name(), v in any::<f64>()) {
        let mut context = Context::new();
        context.set_variable(n.clone(), v);
        let (value, diagnostics) = eval(&Expr::identifier(n.clone()), &context);
        prop_assert!(same(value, v));
        prop_assert!(diagnostics.is_empty());

        context.clear_variables();
        let (value, diagnostics) = eval(&Expr::identifier(n.clone()), &context);
        prop_assert_eq!(value, 0.0);
        prop_assert_eq!(diagnostics, vec![Diagnostic::UndefinedVariable { name: n }]);
    }

    #[test]
    fn unary_operators(a in tree()) {
        let context = context();
        let base = eval(&a, &context).0;

        prop_assert!(same(eval(&Expr::unary_plus(a.clone()), &context).0, base));
        prop_assert!(same(eval(&Expr::unary_minus(a), &context).0, -base));
    }

    #[test]
    fn binary_operators(a in tree(), b in tree()) {
        let context = context();
        let x = eval(&a, &context).0;
        let y = eval(&b, &context).0;

        prop_assert!(same(eval(&Expr::add(a.clone(), b.clone()), &context).0, x + y));
        prop_assert!(same(eval(&Expr::subtract(a.clone(), b.clone()), &context).0, x - y));
        prop_assert!(same(eval(&Expr::multiply(a.clone(), b.clone()), &context).0, x * y));
        prop_assert!(same(eval(&Expr::power(a.clone(), b.clone()), &context).0, x.powf(y)));

        let expected = if y == 0.0 { f64::INFINITY } else { x / y };
        prop_assert!(same(eval(&Expr::divide(a, b), &context).0, expected));
    }

    #[test]
    fn binary_diagnostics_concatenate(a in tree(), b in tree()) {
        let context = context();
        let (_, mut expected) = eval(&a, &context);
        let (y, right) = eval(&b, &context);
        expected.extend(right);

        let (_, diagnostics) = eval(&Expr::add(a.clone(), b.clone()), &context);
        prop_assert_eq!(&diagnostics, &expected);

        if y == 0.0 {
            expected.push(Diagnostic::DivisionByZero);
        }
        let (_, diagnostics) = eval(&Expr::divide(a, b), &context);
        prop_assert_eq!(diagnostics, expected);
    }

    #[test]
    fn evaluation_is_pure(a in tree()) {
        let context = context();
        let (first, first_diagnostics) = eval(&a, &context);
        let (second, second_diagnostics) = eval(&a, &context);
        prop_assert!(same(first, second));
        prop_assert_eq!(first_diagnostics, second_diagnostics);
    }
}
