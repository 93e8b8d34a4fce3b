use std::fmt;

/// An expression tree node.
///
/// `Expr` is a closed sum over every node variant the evaluator understands:
/// numeric constants, named variables resolved through a
/// [`Context`](crate::interpreter::evaluator::core::Context), and unary and
/// binary arithmetic operators. Every operator node owns its children
/// exclusively, so a tree is always finite and acyclic and is released as a
/// unit when its root is dropped.
///
/// Trees are built by direct construction. The associated constructors take
/// their children by value, moving them into the new parent.
///
/// # Example
/// ```
/// use exprtree::{ast::Expr, interpreter::evaluator::core::Context};
///
/// let mut context = Context::new();
/// context.set_variable("x", 4.0);
///
/// // -(x) + 2 * 3
/// let expr = Expr::add(Expr::unary_minus(Expr::identifier("x")),
///                      Expr::multiply(Expr::constant(2.0), Expr::constant(3.0)));
/// assert_eq!(expr.evaluate(&context), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A fixed numeric value.
    Constant {
        /// The stored value.
        value: f64,
    },
    /// A reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
    },
    /// A unary operation (`+a` or `-a`).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Supported unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity, `+a`.
    Plus,
    /// Arithmetic negation, `-a`.
    Minus,
}

/// Supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition, `a + b`.
    Add,
    /// Subtraction, `a - b`.
    Sub,
    /// Multiplication, `a * b`.
    Mul,
    /// Division, `a / b`.
    Div,
    /// Exponentiation, `a ^ b`.
    Pow,
}

/// Identifies the concrete variant of a node.
///
/// Only leaf-specific tags exist; there is no generic "unary" or "binary"
/// tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// See [`Expr::Constant`].
    Constant,
    /// See [`Expr::Identifier`].
    Identifier,
    /// [`Expr::UnaryOp`] with [`UnaryOperator::Plus`].
    UnaryPlus,
    /// [`Expr::UnaryOp`] with [`UnaryOperator::Minus`].
    UnaryMinus,
    /// [`Expr::BinaryOp`] with [`BinaryOperator::Add`].
    Add,
    /// [`Expr::BinaryOp`] with [`BinaryOperator::Sub`].
    Subtract,
    /// [`Expr::BinaryOp`] with [`BinaryOperator::Mul`].
    Multiply,
    /// [`Expr::BinaryOp`] with [`BinaryOperator::Div`].
    Divide,
    /// [`Expr::BinaryOp`] with [`BinaryOperator::Pow`].
    Power,
}

impl Expr {
    /// Creates a constant node.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant { value }
    }

    /// Creates an identifier node referring to the variable `name`.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    /// Creates a unary operator node that takes ownership of `operand`.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Creates a binary operator node that takes ownership of both children.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// `+operand`
    #[must_use]
    pub fn unary_plus(operand: Self) -> Self {
        Self::unary(UnaryOperator::Plus, operand)
    }

    /// `-operand`
    #[must_use]
    pub fn unary_minus(operand: Self) -> Self {
        Self::unary(UnaryOperator::Minus, operand)
    }

    /// `left + right`
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Add, left, right)
    }

    /// `left - right`
    #[must_use]
    pub fn subtract(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Sub, left, right)
    }

    /// `left * right`
    #[must_use]
    pub fn multiply(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Mul, left, right)
    }

    /// `left / right`
    #[must_use]
    pub fn divide(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Div, left, right)
    }

    /// `left ^ right`
    #[must_use]
    pub fn power(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Pow, left, right)
    }

    /// Returns the variant tag of this node.
    ///
    /// # Example
    /// ```
    /// use exprtree::ast::{Expr, Kind};
    ///
    /// let expr = Expr::divide(Expr::constant(1.0), Expr::identifier("n"));
    /// assert_eq!(expr.kind(), Kind::Divide);
    /// assert_eq!(expr.right().unwrap().kind(), Kind::Identifier);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Constant { .. } => Kind::Constant,
            Self::Identifier { .. } => Kind::Identifier,
            Self::UnaryOp { op, .. } => match op {
                UnaryOperator::Plus => Kind::UnaryPlus,
                UnaryOperator::Minus => Kind::UnaryMinus,
            },
            Self::BinaryOp { op, .. } => match op {
                BinaryOperator::Add => Kind::Add,
                BinaryOperator::Sub => Kind::Subtract,
                BinaryOperator::Mul => Kind::Multiply,
                BinaryOperator::Div => Kind::Divide,
                BinaryOperator::Pow => Kind::Power,
            },
        }
    }

    /// The stored value of a constant node, `None` for every other variant.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Constant { value } => Some(*value),
            _ => None,
        }
    }

    /// The variable name of an identifier node.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// The operand of a unary node.
    #[must_use]
    pub fn operand(&self) -> Option<&Self> {
        match self {
            Self::UnaryOp { operand, .. } => Some(operand),
            _ => None,
        }
    }

    /// The left child of a binary node.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::BinaryOp { left, .. } => Some(left),
            _ => None,
        }
    }

    /// The right child of a binary node.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::BinaryOp { right, .. } => Some(right),
            _ => None,
        }
    }

    /// Consumes the node and hands ownership of its children back to the
    /// caller, in left-to-right order. Leaves yield an empty vector.
    ///
    /// # Example
    /// ```
    /// use exprtree::ast::{Expr, Kind};
    ///
    /// let expr = Expr::subtract(Expr::constant(4.0), Expr::identifier("b"));
    /// let children = expr.into_children();
    /// assert_eq!(children.len(), 2);
    /// assert_eq!(children[1].kind(), Kind::Identifier);
    /// ```
    #[must_use]
    pub fn into_children(self) -> Vec<Self> {
        match self {
            Self::Constant { .. } | Self::Identifier { .. } => Vec::new(),
            Self::UnaryOp { operand, .. } => vec![*operand],
            Self::BinaryOp { left, right, .. } => vec![*left, *right],
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constant => "Constant",
            Self::Identifier => "Identifier",
            Self::UnaryPlus => "UnaryPlus",
            Self::UnaryMinus => "UnaryMinus",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Power => "Power",
        };
        write!(f, "{name}")
    }
}
