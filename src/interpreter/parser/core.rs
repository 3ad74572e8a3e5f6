use std::iter::Peekable;

use crate::{
    ast::AstNode,
    config::Config,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, utils::check_balance},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Mutable bookkeeping threaded through the recursive descent.
///
/// Tracks how deeply the parser has recursed so adversarial input such as
/// `((((...))))` or `-----1` fails cleanly instead of exhausting the stack.
#[derive(Debug)]
pub struct ParseContext {
    depth:        usize,
    max_depth:    usize,
    end_position: usize,
}

impl ParseContext {
    /// Creates a context for a token sequence.
    ///
    /// `end_position` is reported when an operand is missing at the very end
    /// of the input; it is the offset of the last token, which in that case is
    /// the dangling operator.
    #[must_use]
    pub const fn new(max_depth: usize, end_position: usize) -> Self {
        Self { depth: 0,
               max_depth,
               end_position }
    }

    /// Enters one nesting level.
    ///
    /// # Errors
    /// Returns `ParseError::TooDeep` when the new depth exceeds the limit.
    pub fn enter(&mut self, position: usize) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::TooDeep { limit: self.max_depth,
                                             position });
        }
        Ok(())
    }

    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    #[must_use]
    pub const fn end_position(&self) -> usize {
        self.end_position
    }
}

/// Parses a token sequence into a syntax tree.
///
/// Parentheses are checked for balance before descent starts, so `((`
/// reports the unclosed parenthesis rather than a missing operand. Parsing is
/// all-or-nothing: no partial tree is ever returned.
///
/// # Errors
/// - `UnbalancedParens` for a stray `)` or an unclosed `(`.
/// - `MissingOperand` where an operand is required but absent.
/// - `MissingOperator` for adjacent operands such as `2 3` or `2(3)`.
/// - `TooDeep` when nesting exceeds `config.max_depth`.
///
/// # Example
/// ```
/// use pemdas::{
///     ast::{AstNode, BinaryOperator},
///     config::Config,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let config = Config::default();
/// let tokens = tokenize("2^3^2", &config).unwrap();
/// let tree = parse(&tokens, &config).unwrap();
///
/// assert_eq!(tree,
///            AstNode::binary(BinaryOperator::Pow,
///                            AstNode::literal(2.0),
///                            AstNode::binary(BinaryOperator::Pow,
///                                            AstNode::literal(3.0),
///                                            AstNode::literal(2.0))));
/// ```
pub fn parse(tokens: &[(Token, usize)], config: &Config) -> ParseResult<AstNode> {
    check_balance(tokens)?;

    let end_position = tokens.last().map_or(0, |(_, position)| *position);
    let mut context = ParseContext::new(config.max_depth, end_position);
    let mut iter = tokens.iter().peekable();

    let tree = parse_expression(&mut iter, &mut context)?;

    match iter.next() {
        None => {
            log::debug!("parsed tree of depth {}", tree.depth());
            Ok(tree)
        },
        Some((Token::RParen, position)) => {
            Err(ParseError::UnbalancedParens { position: *position })
        },
        Some((_, position)) => Err(ParseError::MissingOperator { position: *position }),
    }
}

/// Parses a full expression.
///
/// This is the entry point of the descent and starts at the lowest
/// precedence level.
///
/// Grammar: `expr := term (('+'|'-') term)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               context: &mut ParseContext)
                               -> ParseResult<AstNode>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, context)
}
