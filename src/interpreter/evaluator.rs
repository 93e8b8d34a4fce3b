/// Core evaluation logic and context management.
///
/// Contains the variable context, the evaluation entry points and the
/// dispatch over expression variants.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements identity and arithmetic negation.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators, including the division-by-zero policy
/// and exponentiation.
pub mod binary;
