use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Verifies that every `(` has a matching `)` and vice versa.
///
/// A `)` that closes nothing is reported at its own position. If the input
/// ends with parentheses still open, the innermost unclosed `(` is reported.
///
/// # Errors
/// Returns `ParseError::UnbalancedParens` on the first imbalance.
///
/// # Example
/// ```
/// use pemdas::{
///     error::ParseError,
///     interpreter::{lexer::Token, parser::utils::check_balance},
/// };
///
/// let tokens = [(Token::LParen, 0), (Token::LParen, 1)];
/// assert_eq!(check_balance(&tokens),
///            Err(ParseError::UnbalancedParens { position: 1 }));
/// ```
pub fn check_balance(tokens: &[(Token, usize)]) -> ParseResult<()> {
    let mut open = Vec::new();

    for (token, position) in tokens {
        match token {
            Token::LParen => open.push(*position),
            Token::RParen => {
                if open.pop().is_none() {
                    return Err(ParseError::UnbalancedParens { position: *position });
                }
            },
            _ => {},
        }
    }

    match open.pop() {
        Some(position) => Err(ParseError::UnbalancedParens { position }),
        None => Ok(()),
    }
}
