use crate::interpreter::evaluator::core::Context;

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Follows IEEE-754 `pow` exactly as `f64::powf` does: fractional and
    /// negative exponents are allowed, `x ^ 0` is `1` for every `x` (NaN
    /// included), a negative base with a fractional exponent gives NaN and
    /// `0 ^ -1` gives positive infinity without any diagnostic.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_pow(2.0, 10.0), 1024.0);
    /// assert_eq!(Context::eval_pow(0.0, 0.0), 1.0);
    /// assert_eq!(Context::eval_pow(4.0, -0.5), 0.5);
    /// assert!(Context::eval_pow(-8.0, 1.0 / 3.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_pow(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}
