use std::convert::From;
use std::fmt::Display;


/// Abstract syntax tree of an arithmetic expression.
///
/// Built by [`crate::Parser`] and folded to a single `f64` by [`Expr::evaluate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal(f64),
    /// A prefix `+` or `-` applied to an operand.
    UnaryOperator {
        /// The operator.
        op: UnaryOperator,
        /// The operand it applies to.
        operand: Box<Expr>
    },
    /// An infix operator between two operands.
    BinaryOperator {
        /// The operator.
        op: BinaryOperator,
        /// Left-hand operand.
        left: Box<Expr>,
        /// Right-hand operand.
        right: Box<Expr>
    }
}

impl Expr {
    /// Evaluates the tree with floating point semantics.
    ///
    /// Division is true division and `%` is the floating remainder, so the result
    /// keeps the sign of the dividend. Division by zero follows IEEE 754 and
    /// yields an infinity or NaN.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::Expr;
    ///
    /// let expr = Expr::add(2.0, Expr::mul(3.0, 4.0));
    /// assert_eq!(expr.evaluate(), 14.0);
    /// ```
    pub fn evaluate(&self) -> f64 {
        match self {
            Expr::Literal(value) => *value,

            Expr::UnaryOperator { op, operand } => op.op(operand.evaluate()),

            Expr::BinaryOperator { op, left, right } => op.op(left.evaluate(), right.evaluate())
        }
    }

    fn unary_op<T: Into<Expr>>(op: UnaryOperator, operand: T) -> Self {
        Self::UnaryOperator { op, operand: Box::new(operand.into()) }
    }

    /// Builds `+operand`.
    pub fn pos<T: Into<Expr>>(operand: T) -> Self {
        Self::unary_op(UnaryOperator::Plus, operand)
    }

    /// Builds `-operand`.
    pub fn neg<T: Into<Expr>>(operand: T) -> Self {
        Self::unary_op(UnaryOperator::Minus, operand)
    }

    fn binary_op<L: Into<Expr>, R: Into<Expr>>(op: BinaryOperator, left: L, right: R) -> Self {
        Self::BinaryOperator { op, left: Box::new(left.into()), right: Box::new(right.into()) }
    }

    /// Builds `left + right`.
    pub fn add<L: Into<Expr>, R: Into<Expr>>(left: L, right: R) -> Self {
        Self::binary_op(BinaryOperator::Add, left, right)
    }

    /// Builds `left - right`.
    pub fn sub<L: Into<Expr>, R: Into<Expr>>(left: L, right: R) -> Self {
        Self::binary_op(BinaryOperator::Subtract, left, right)
    }

    /// Builds `left * right`.
    pub fn mul<L: Into<Expr>, R: Into<Expr>>(left: L, right: R) -> Self {
        Self::binary_op(BinaryOperator::Multiply, left, right)
    }

    /// Builds `left / right`.
    pub fn div<L: Into<Expr>, R: Into<Expr>>(left: L, right: R) -> Self {
        Self::binary_op(BinaryOperator::Divide, left, right)
    }

    /// Builds `left % right`.
    pub fn rem<L: Into<Expr>, R: Into<Expr>>(left: L, right: R) -> Self {
        Self::binary_op(BinaryOperator::Modulo, left, right)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

impl From<u32> for Expr {
    fn from(value: u32) -> Self {
        Self::Literal(value.into())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(v) => write!(f, "{v}"),
            Expr::UnaryOperator { op, operand } => write!(f, "{op}{operand}"),
            Expr::BinaryOperator { op, left, right } =>
                write!(f, "({left} {op} {right})")
        }
    }
}


/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
}

impl UnaryOperator {
    /// Applies the operator to `value`.
    pub fn op(&self, value: f64) -> f64 {
        use UnaryOperator as Op;
        match self {
            Op::Plus => value,
            Op::Minus => -value
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Minus => write!(f, "-")
        }
    }
}


/// Infix operators. `*`, `/` and `%` bind tighter than `+` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, true division.
    Divide,
    /// `%`, floating remainder with the sign of the dividend.
    Modulo,
}

impl BinaryOperator {
    /// Applies the operator to `left` and `right`.
    pub fn op(&self, left: f64, right: f64) -> f64 {
        use BinaryOperator as Op;
        match self {
            Op::Add => left + right,
            Op::Subtract => left - right,
            Op::Multiply => left * right,
            Op::Divide => left / right,
            Op::Modulo => left % right
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::Modulo => write!(f, "%")
        }
    }
}
