/// Core parsing entry points.
///
/// Contains the top-level [`core::parse`] function, the lowest-precedence
/// expression rule and the nesting bookkeeping shared by every rule.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for `+ -`, `* /` and the
/// right-associative `^`.
pub mod binary;

/// Unary and atom parsing.
///
/// Handles prefix negation, numeric literals and parenthesized groups.
pub mod unary;

/// Parser utilities.
///
/// Checks that run over the whole token sequence before descent starts.
pub mod utils;
