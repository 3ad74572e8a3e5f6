/// Lexing errors.
///
/// Raised while turning the raw input into tokens: characters outside the
/// accepted alphabet, malformed numeric literals and oversized input.
pub mod lex_error;
/// Parsing errors.
///
/// Structural problems detected while building the syntax tree, such as
/// unbalanced parentheses, missing operands or excessive nesting.
pub mod parse_error;
/// Evaluation errors.
///
/// The single error surfaced by [`crate::run`]. It wraps lexing and parsing
/// failures and adds the semantic failures of the evaluator itself.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
pub use lex_error::LexError;
pub use parse_error::ParseError;
