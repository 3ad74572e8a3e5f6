//! # pemdas
//!
//! pemdas is a stepwise arithmetic expression evaluator written in Rust.
//! It parses infix expressions over decimal numbers, `+ - * / ^`, unary minus
//! and parentheses, computes the result under standard operator precedence,
//! and records every reduction in the order a student would perform it by
//! hand.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    interpreter::{
        evaluator::core::{EvaluationResult, evaluate},
        lexer::tokenize,
        parser::core::parse,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `AstNode` enum and the operator types that
/// represent an expression as a tree. The tree is built by the parser and
/// reduced by the evaluator.
///
/// # Responsibilities
/// - Defines literal, binary, unary and group nodes.
/// - Describes operator precedence and associativity.
/// - Prints trees fully parenthesized.
pub mod ast;
/// Limits and display settings.
///
/// This module defines [`config::Config`], the only knob set of the crate:
/// nesting depth, input length and the decimal places used in the trace.
pub mod config;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while turning an input
/// string into a result. Every error carries a human-readable message and,
/// where one exists, the character offset of the offending input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Folds every stage's error into one [`error::EvalError`].
/// - Classifies errors into a flat [`error::ErrorKind`].
pub mod error;
/// Orchestrates the stages of evaluation.
///
/// This module ties together lexing, parsing and stepwise evaluation. Each
/// stage is a pure function of its input; nothing is shared between calls.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The serializable shape of a result.
///
/// Converts an evaluation result into the success-or-failure document a
/// display layer consumes, and renders it as JSON.
pub mod report;
/// General utilities.
///
/// Helpers that are not specific to a single phase, such as number
/// formatting.
pub mod util;

/// Evaluates an expression with the default [`Config`].
///
/// # Errors
/// Returns an [`error::EvalError`] if lexing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use pemdas::run;
///
/// let evaluation = run("(3 + 5) * 2 ^ 3 - 10 / 2").unwrap();
/// assert_eq!(evaluation.value, 59.0);
///
/// let descriptions: Vec<_> = evaluation.steps.iter().map(|s| s.description.as_str()).collect();
/// assert_eq!(descriptions,
///            ["3 + 5 = 8", "2 ^ 3 = 8", "8 * 8 = 64", "10 / 2 = 5", "64 - 5 = 59"]);
///
/// // A bare literal needs no steps.
/// let evaluation = run("42").unwrap();
/// assert_eq!(evaluation.value, 42.0);
/// assert!(evaluation.steps.is_empty());
///
/// // Errors are values, not panics.
/// assert!(run("5 / (2 - 2)").is_err());
/// ```
pub fn run(input: &str) -> EvaluationResult {
    run_with(input, &Config::default())
}

/// Evaluates an expression with explicit limits and display settings.
///
/// Chains the lexer, the parser and the stepwise evaluator. The first stage
/// to fail ends the call; no partial result or partial trace is returned.
///
/// # Errors
/// Returns an [`error::EvalError`] if lexing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use pemdas::{config::Config, error::ErrorKind, run_with};
///
/// let config = Config::default().with_max_depth(2);
/// let err = run_with("(((1)))", &config).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TooDeep);
/// ```
pub fn run_with(input: &str, config: &Config) -> EvaluationResult {
    let tokens = tokenize(input, config)?;
    let tree = parse(&tokens, config)?;
    let result = evaluate(&tree, config);

    match &result {
        Ok(evaluation) => {
            log::debug!("evaluated {input:?} to {} in {} steps",
                        evaluation.value,
                        evaluation.steps.len());
        },
        Err(e) => log::debug!("evaluation of {input:?} failed: {e}"),
    }

    result
}
