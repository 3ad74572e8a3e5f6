/// Binary arithmetic operators, in the order a student learns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Binding strength of the operator. Higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use pemdas::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Only `^` groups from the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// The character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Whether `child`, written on `side` of `self`, must be parenthesized to
    /// keep its meaning.
    ///
    /// A child binding more loosely always needs parentheses. A child of equal
    /// precedence needs them on the side the operator does not associate
    /// towards: the right side of `-` or the left side of `^`.
    #[must_use]
    pub const fn needs_parens(self, child: Self, side: Side) -> bool {
        if child.precedence() != self.precedence() {
            return child.precedence() < self.precedence();
        }
        match side {
            Side::Left => self.is_right_associative(),
            Side::Right => !self.is_right_associative(),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which operand of a binary operator a sub-expression sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Leading `-`.
    Neg,
}

/// An abstract syntax tree node for an arithmetic expression.
///
/// The parser builds the tree bottom-up and every node owns its children, so
/// the tree never shares nodes and cannot contain cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// A numeric literal.
    Literal {
        /// The literal's value.
        value: f64,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A prefix operation.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// A parenthesized sub-expression as the user wrote it.
    Group {
        /// The expression between the parentheses.
        inner: Box<Self>,
    },
}

impl AstNode {
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::Unary { op:      UnaryOperator::Neg,
                      operand: Box::new(operand), }
    }

    #[must_use]
    pub fn group(inner: Self) -> Self {
        Self::Group { inner: Box::new(inner) }
    }

    /// Number of nodes on the longest path from this node to a leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Number of binary operators in the tree, which is also the number of
    /// steps a successful evaluation records.
    ///
    /// # Example
    /// ```
    /// use pemdas::ast::{AstNode, BinaryOperator};
    ///
    /// let tree = AstNode::binary(BinaryOperator::Add,
    ///                            AstNode::literal(1.0),
    ///                            AstNode::negate(AstNode::literal(2.0)));
    /// assert_eq!(tree.binary_operator_count(), 1);
    /// ```
    #[must_use]
    pub fn binary_operator_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if matches!(node, Self::BinaryOp { .. }) {
                count += 1;
            }
            pending.extend(node.children());
        }
        count
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        let (first, second) = match self {
            Self::Literal { .. } => (None, None),
            Self::BinaryOp { left, right, .. } => (Some(&**left), Some(&**right)),
            Self::Unary { operand: inner, .. } | Self::Group { inner } => (Some(&**inner), None),
        };
        first.into_iter().chain(second)
    }

    /// Moves the children out, leaving literals in their place.
    fn take_children(&mut self, into: &mut Vec<Self>) {
        match self {
            Self::Literal { .. } => {},
            Self::BinaryOp { left, right, .. } => {
                into.push(std::mem::replace(&mut **left, Self::literal(0.0)));
                into.push(std::mem::replace(&mut **right, Self::literal(0.0)));
            },
            Self::Unary { operand: inner, .. } | Self::Group { inner } => {
                into.push(std::mem::replace(&mut **inner, Self::literal(0.0)));
            },
        }
    }
}

/// Parsed operator chains are left-deep and as long as the input allows, so
/// the tree is torn down with an explicit stack.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

/// Prints the tree fully parenthesized.
///
/// The output uses only the syntax the lexer accepts, so any tree with finite
/// literals prints to a string that parses back to an equivalent tree.
///
/// ```
/// use pemdas::ast::{AstNode, BinaryOperator};
///
/// let tree = AstNode::binary(BinaryOperator::Mul,
///                            AstNode::literal(2.5),
///                            AstNode::negate(AstNode::literal(4.0)));
/// assert_eq!(tree.to_string(), "(2.5 * (-4))");
/// ```
impl std::fmt::Display for AstNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } if value.is_sign_negative() => write!(f, "(-{})", -value),
            Self::Literal { value } => write!(f, "{value}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Unary { operand, .. } => write!(f, "(-{operand})"),
            Self::Group { inner } => write!(f, "({inner})"),
        }
    }
}
