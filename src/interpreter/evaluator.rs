/// Arithmetic for the five binary operators.
///
/// Applies one operator to two numbers and rejects division by zero and
/// results without a finite real value.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the reduction loop, the step record, the evaluation result and
/// the display context.
pub mod core;

/// The flattened form the evaluator reduces.
///
/// Splits a syntax tree into one level per parenthesis depth, picks the next
/// operation in PEMDAS order and renders the remaining expression.
pub mod level;
