use logos::Logos;

use crate::{config::Config, error::LexError};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token of an arithmetic expression.
///
/// `-` is always lexed as [`Token::Minus`]; the parser decides whether it
/// negates an operand or subtracts two of them.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Why `logos` rejected a slice of the input.
///
/// Anything no token pattern matches is an invalid character; the number
/// callback reports malformed literals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[default]
    InvalidCharacter,
    MalformedNumber,
}

/// Parses a numeric literal from the current token slice.
///
/// The token pattern accepts any run of digits and dots, so `1.2.3` is one
/// malformed literal rather than a number followed by a stray dot.
///
/// # Returns
/// - `Ok(f64)`: The value of a literal shaped `digits` or `digits.digits`.
/// - `Err(LexErrorKind::MalformedNumber)`: For any other run of digits and
///   dots.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    let text = lex.slice();
    if !is_well_formed(text) {
        return Err(LexErrorKind::MalformedNumber);
    }
    text.parse().map_err(|_| LexErrorKind::MalformedNumber)
}

fn is_well_formed(text: &str) -> bool {
    let mut parts = text.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();

    !whole.is_empty() && parts.next().is_none() && fraction.is_none_or(|f| !f.is_empty())
}

/// Turns an expression into tokens paired with their character offsets.
///
/// Whitespace is skipped. The first character outside digits, `.`, the five
/// operators and parentheses stops lexing with an error pointing at it.
///
/// # Errors
/// - `LexError::InputTooLong` if the input has more characters than
///   `config.max_input_length`.
/// - `LexError::InvalidCharacter` for an unsupported character.
/// - `LexError::MalformedNumber` for literals such as `1.2.3`, `.5` or `5.`.
///
/// # Example
/// ```
/// use pemdas::{
///     config::Config,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("3*-2", &Config::default()).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(3.0), 0),
///                 (Token::Star, 1),
///                 (Token::Minus, 2),
///                 (Token::Number(2.0), 3)]);
///
/// let text: Vec<String> = tokens.iter().map(|(token, _)| token.to_string()).collect();
/// assert_eq!(text, ["3", "*", "-", "2"]);
/// ```
pub fn tokenize(input: &str, config: &Config) -> LexResult<Vec<(Token, usize)>> {
    let length = input.chars().count();
    if length > config.max_input_length {
        return Err(LexError::InputTooLong { length,
                                            limit: config.max_input_length });
    }

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);
    // Spans are byte offsets; errors report character offsets.
    let mut seen_bytes = 0;
    let mut seen_chars = 0;

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        seen_chars += input[seen_bytes..start].chars().count();
        seen_bytes = start;
        let position = seen_chars;

        match token {
            Ok(tok) => {
                log::trace!("token '{tok}' at {position}");
                tokens.push((tok, position));
            },
            Err(LexErrorKind::MalformedNumber) => {
                return Err(LexError::MalformedNumber { position,
                                                       text: lexer.slice().to_string() });
            },
            Err(LexErrorKind::InvalidCharacter) => {
                let character = input[start..].chars()
                                              .next()
                                              .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::InvalidCharacter { position, character });
            },
        }
    }

    log::debug!("lexed {length} characters into {} tokens", tokens.len());
    Ok(tokens)
}
