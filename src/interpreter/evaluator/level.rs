use crate::{
    ast::{AstNode, BinaryOperator, Side, UnaryOperator},
    error::EvalError,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// One elementary reduction: `left op right = result`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    pub left:   f64,
    pub op:     BinaryOperator,
    pub right:  f64,
    pub result: f64,
}

impl Reduction {
    /// Describes the reduction, e.g. `2 ^ 3 = 8`.
    #[must_use]
    pub fn describe(&self, context: &Context) -> String {
        format!("{} {} {} = {}",
                render_number(context, self.left, self.op == BinaryOperator::Pow),
                self.op,
                render_number(context, self.right, false),
                context.format(self.result))
    }
}

/// Outcome of one reduction pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pass {
    /// One operation was performed and the tree shrank by one operator.
    Reduced(Reduction),
    /// Nothing is left to reduce.
    Done(f64),
}

/// An operand of a level.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    /// A negation whose operand is not yet a number.
    Negated(Box<Self>),
    /// A deeper level: a written or precedence-implied parenthesized group.
    Nested(Level),
}

/// The operators sharing one parenthesis depth, in reading order.
///
/// `operands` always holds exactly one element more than `operators`, and
/// `operators[i]` sits between `operands[i]` and `operands[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    operands:  Vec<Operand>,
    operators: Vec<BinaryOperator>,
}

impl Level {
    /// Flattens a tree into levels.
    ///
    /// A binary child stays on its parent's level unless its precedence
    /// requires parentheses there, so trees built without `Group` nodes are
    /// still reduced in the right order. Negations of numbers and groups that
    /// are already numbers are folded immediately.
    ///
    /// # Errors
    /// Returns `EvalError::NumericDomainError` for a non-finite literal.
    pub fn from_ast(node: &AstNode) -> EvalResult<Self> {
        let mut level = Self { operands:  Vec::new(),
                               operators: Vec::new(), };
        level.flatten(node)?;
        Ok(level)
    }

    fn flatten(&mut self, node: &AstNode) -> EvalResult<()> {
        // Walk the left spine of a same-tier chain without recursing; only
        // right operands and implicit groups recurse.
        let mut spine = Vec::new();
        let mut current = node;
        while let AstNode::BinaryOp { op, left, right } = current {
            spine.push((*op, &**right));
            if let AstNode::BinaryOp { op: child, .. } = &**left
               && op.needs_parens(*child, Side::Left)
            {
                self.operands.push(Operand::nested(Self::from_ast(left)?));
                break;
            }
            current = &**left;
        }
        if !matches!(current, AstNode::BinaryOp { .. }) {
            self.operands.push(Operand::from_ast(current)?);
        }

        for (op, right) in spine.into_iter().rev() {
            self.operators.push(op);
            self.push_side(op, right, Side::Right)?;
        }
        Ok(())
    }

    fn push_side(&mut self, parent: BinaryOperator, child: &AstNode, side: Side) -> EvalResult<()> {
        match child {
            AstNode::BinaryOp { op, .. } if parent.needs_parens(*op, side) => {
                self.operands.push(Operand::nested(Self::from_ast(child)?));
                Ok(())
            },
            _ => self.flatten(child),
        }
    }

    /// The value of a level that has been reduced to a single number.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self.operands.as_slice() {
            [Operand::Number(value)] if self.operators.is_empty() => Some(*value),
            _ => None,
        }
    }

    /// Performs the next reduction, or reports the final value.
    ///
    /// Operands are resolved left to right first, so any deeper level is
    /// finished before an operator of this level is applied.
    ///
    /// # Errors
    /// Propagates arithmetic errors from [`Context::eval_binary`].
    pub fn reduce_once(&mut self, context: &Context) -> EvalResult<Pass> {
        let mut values = Vec::with_capacity(self.operands.len());
        for operand in &mut self.operands {
            match operand.reduce_once(context)? {
                Pass::Done(value) => values.push(value),
                reduced @ Pass::Reduced(_) => return Ok(reduced),
            }
        }

        let Some(index) = self.next_operator() else {
            return Ok(Pass::Done(values[0]));
        };

        let op = self.operators[index];
        let (left, right) = (values[index], values[index + 1]);
        let result = context.eval_binary(op, left, right)?;

        self.operators.remove(index);
        self.operands.remove(index + 1);
        self.operands[index] = Operand::Number(result);

        Ok(Pass::Reduced(Reduction { left,
                                     op,
                                     right,
                                     result }))
    }

    /// Index of the operator to apply next on this level.
    ///
    /// The left-most `^` chain goes first, resolved from its right end; then
    /// the left-most `*` or `/`; then the left-most `+` or `-`.
    fn next_operator(&self) -> Option<usize> {
        use BinaryOperator::{Div, Mul, Pow};

        if let Some(start) = self.operators.iter().position(|op| *op == Pow) {
            let chain = self.operators[start..].iter()
                                               .take_while(|op| **op == Pow)
                                               .count();
            return Some(start + chain - 1);
        }

        self.operators
            .iter()
            .position(|op| matches!(op, Mul | Div))
            .or_else(|| (!self.operators.is_empty()).then_some(0))
    }

    /// Renders the level with single spaces around each operator.
    #[must_use]
    pub fn render(&self, context: &Context) -> String {
        let mut text = String::new();
        for (index, operand) in self.operands.iter().enumerate() {
            if let Some(op) = index.checked_sub(1).and_then(|i| self.operators.get(i)) {
                text.push(' ');
                text.push(op.symbol());
                text.push(' ');
            }
            let is_base = self.operators.get(index) == Some(&BinaryOperator::Pow);
            text.push_str(&operand.render(context, is_base));
        }
        text
    }
}

impl Operand {
    fn from_ast(node: &AstNode) -> EvalResult<Self> {
        match node {
            AstNode::Literal { value } if value.is_finite() => Ok(Self::Number(*value)),
            AstNode::Literal { value } => {
                Err(EvalError::NumericDomainError { expression: value.to_string() })
            },
            AstNode::Unary { op: UnaryOperator::Neg,
                             operand, } => Ok(Self::negated(Self::from_ast(operand)?)),
            AstNode::Group { inner } => Ok(Self::nested(Level::from_ast(inner)?)),
            AstNode::BinaryOp { .. } => Ok(Self::nested(Level::from_ast(node)?)),
        }
    }

    fn negated(operand: Self) -> Self {
        match operand {
            Self::Number(value) => Self::Number(-value),
            other => Self::Negated(Box::new(other)),
        }
    }

    fn nested(level: Level) -> Self {
        match level.as_scalar() {
            Some(value) => Self::Number(value),
            None => Self::Nested(level),
        }
    }

    fn reduce_once(&mut self, context: &Context) -> EvalResult<Pass> {
        let pass = match self {
            Self::Number(value) => return Ok(Pass::Done(*value)),
            Self::Negated(inner) => inner.reduce_once(context)?,
            Self::Nested(level) => level.reduce_once(context)?,
        };

        match (pass, self.settle()) {
            (Pass::Done(_), Some(value)) => Ok(Pass::Done(value)),
            (pass, _) => Ok(pass),
        }
    }

    /// Replaces the operand by a number once its contents are one.
    ///
    /// Runs right after every reduction inside the operand, so a group's
    /// parentheses vanish in the same step that produced its value.
    fn settle(&mut self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => return Some(*value),
            Self::Negated(inner) => match **inner {
                Self::Number(value) => -value,
                _ => return None,
            },
            Self::Nested(level) => level.as_scalar()?,
        };
        *self = Self::Number(value);
        Some(value)
    }

    fn render(&self, context: &Context, is_base: bool) -> String {
        match self {
            Self::Number(value) => render_number(context, *value, is_base),
            Self::Negated(inner) if is_base => format!("(-{})", inner.render(context, false)),
            Self::Negated(inner) => format!("-{}", inner.render(context, false)),
            Self::Nested(level) => format!("({})", level.render(context)),
        }
    }
}

/// A negative base of `^` is parenthesized so `(-2) ^ 2` is not read as
/// `-(2 ^ 2)`.
fn render_number(context: &Context, value: f64, is_base: bool) -> String {
    let text = context.format(value);
    if is_base && text.starts_with('-') {
        format!("({text})")
    } else {
        text
    }
}
