use std::iter::Peekable;

use crate::{
    ast::AstNode,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseContext, ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// A leading `-` negates the unary expression that follows it, so `--4` is
/// `-(-4)`. Negation binds tighter than `^`: `-2^2` is `(-2)^2`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | atom
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `context`: Nesting bookkeeping; each `-` counts as one level.
///
/// # Returns
/// An [`AstNode::Unary`] or an atom.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 context: &mut ParseContext)
                                 -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, position)) = tokens.peek() {
        tokens.next();
        context.enter(*position)?;
        let operand = parse_unary(tokens, context)?;
        context.leave();
        Ok(AstNode::negate(operand))
    } else {
        parse_atom(tokens, context)
    }
}

/// Parses an atom: a number or a parenthesized expression.
///
/// Grammar:
/// ```text
///     atom := NUMBER
///           | "(" expr ")"
/// ```
/// # Errors
/// Returns `ParseError::MissingOperand` when the input ends, or an operator
/// or `)` stands where an operand belongs (`1 +`, `*2`, `()`).
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>,
                                context: &mut ParseContext)
                                -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::MissingOperand { position: context.end_position() })?;

    match peeked {
        (Token::Number(value), _) => {
            tokens.next();
            Ok(AstNode::literal(*value))
        },
        (Token::LParen, _) => parse_grouping(tokens, context),
        (_, position) => Err(ParseError::MissingOperand { position: *position }),
    }
}

/// Parses a parenthesized expression into an [`AstNode::Group`].
///
/// # Errors
/// - `UnbalancedParens` if the input ends before the closing `)`.
/// - `MissingOperator` if an operand follows the inner expression, as in
///   `(1 2)`.
/// - `TooDeep` if the group exceeds the nesting limit.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         context: &mut ParseContext)
                         -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let open = tokens.next()
                     .map_or(context.end_position(), |(_, position)| *position);
    context.enter(open)?;
    let inner = parse_expression(tokens, context)?;
    context.leave();

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(AstNode::group(inner)),
        Some((_, position)) => Err(ParseError::MissingOperator { position: *position }),
        None => Err(ParseError::UnbalancedParens { position: open }),
    }
}
