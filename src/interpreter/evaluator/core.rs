use serde::Serialize;

use crate::{
    ast::AstNode,
    config::Config,
    error::EvalError,
    interpreter::evaluator::level::{Level, Pass},
    util::format::format_number,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The outcome of a whole evaluation: a value with its trace, or the error
/// that stopped it.
pub type EvaluationResult = EvalResult<Evaluation>;

/// One elementary reduction, as a student would write it down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// The operation performed, e.g. `3 + 5 = 8`.
    pub description:       String,
    /// The whole remaining expression before the reduction.
    pub expression_before: String,
    /// The whole remaining expression after the reduction.
    pub expression_after:  String,
    /// 1-based position of the step in the trace.
    pub order:             usize,
}

/// A successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The final value.
    pub value: f64,
    /// Every reduction, in the order it was performed.
    pub steps: Vec<Step>,
}

impl Evaluation {
    /// Whether the trace is worth showing.
    ///
    /// A bare literal or a single operation explains itself; anything longer
    /// benefits from the step list.
    #[must_use]
    pub const fn has_walkthrough(&self) -> bool {
        self.steps.len() > 1
    }
}

/// Settings the evaluator consults while reducing.
///
/// The evaluator is stateless between calls; a `Context` only carries how
/// numbers are shown in steps and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Decimal places used when rendering numbers.
    pub decimal_places: usize,
}

impl Context {
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self { decimal_places: config.decimal_places }
    }

    /// Renders a number the way it appears in the trace.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format_number(value, self.decimal_places)
    }
}

/// Evaluates a syntax tree in PEMDAS teaching order.
///
/// The tree is flattened into one level per parenthesis depth and reduced one
/// operation per pass: the left-most unresolved group first (deepest inside
/// it first), then `^` (right-most of a chain first), then `*` `/` and
/// finally `+` `-`, each left to right. Every pass records one [`Step`].
/// Negation folds into its operand without a step.
///
/// # Errors
/// - `EvalError::DivisionByZero` if any divisor is exactly zero.
/// - `EvalError::NumericDomainError` for `0 ^ 0`, non-finite intermediate
///   results or non-finite literals.
///
/// No steps are returned on failure.
///
/// # Example
/// ```
/// use pemdas::{
///     ast::{AstNode, BinaryOperator},
///     config::Config,
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let tree = AstNode::binary(BinaryOperator::Mul,
///                            AstNode::group(AstNode::binary(BinaryOperator::Add,
///                                                           AstNode::literal(3.0),
///                                                           AstNode::literal(5.0))),
///                            AstNode::literal(2.0));
/// let evaluation = evaluate(&tree, &Config::default()).unwrap();
///
/// assert_eq!(evaluation.value, 16.0);
/// assert_eq!(evaluation.steps[0].description, "3 + 5 = 8");
/// assert_eq!(evaluation.steps[0].expression_after, "8 * 2");
/// ```
pub fn evaluate(ast: &AstNode, config: &Config) -> EvaluationResult {
    let context = Context::new(config);
    let mut remaining = Level::from_ast(ast)?;
    let mut steps: Vec<Step> = Vec::new();
    let mut before = remaining.render(&context);

    loop {
        match remaining.reduce_once(&context)? {
            Pass::Reduced(reduction) => {
                let after = remaining.render(&context);
                let step = Step { description:       reduction.describe(&context),
                                  expression_before: before,
                                  expression_after:  after.clone(),
                                  order:             steps.len() + 1, };
                log::trace!("step {}: {} ({})", step.order, step.description, step.expression_after);
                steps.push(step);
                before = after;
            },
            Pass::Done(value) => return Ok(Evaluation { value, steps }),
        }
    }
}
