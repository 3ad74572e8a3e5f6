use std::iter::Peekable;

use crate::{
    ast::{AstNode, BinaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseContext, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expr := term (('+' | '-') term)*`
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `context`: Nesting bookkeeping.
///
/// # Returns
/// An `AstNode::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             context: &mut ParseContext)
                             -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, context)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, context)?;
            left = AstNode::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `term := factor (('*' | '/') factor)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   context: &mut ParseContext)
                                   -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_exponent(tokens, context)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_exponent(tokens, context)?;
            left = AstNode::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative through right recursion:
/// `a ^ b ^ c` parses as `a ^ (b ^ c)`. Every recursion counts towards the
/// nesting limit.
///
/// The rule is: `factor := unary ('^' factor)?`
///
/// # Errors
/// Returns `ParseError::TooDeep` for exponent chains longer than the limit,
/// and propagates operand errors.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>,
                             context: &mut ParseContext)
                             -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_unary(tokens, context)?;

    if let Some((Token::Caret, position)) = tokens.peek() {
        tokens.next();
        context.enter(*position)?;
        let exponent = parse_exponent(tokens, context)?;
        context.leave();
        return Ok(AstNode::binary(BinaryOperator::Pow, base, exponent));
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use pemdas::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Number(_) | Token::LParen | Token::RParen => None,
    }
}
