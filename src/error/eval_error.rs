use serde::Serialize;

use crate::error::{LexError, ParseError};

/// Flat classification of every failure [`crate::run`] can report.
///
/// This is the `errorKind` field of a serialized failure report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidCharacter,
    MalformedNumber,
    InputTooLong,
    UnbalancedParens,
    MissingOperand,
    MissingOperator,
    TooDeep,
    DivisionByZero,
    NumericDomainError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every error that can end a call to [`crate::run`].
pub enum EvalError {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid expression.
    Parse(ParseError),
    /// A division whose right-hand operand is exactly zero.
    DivisionByZero {
        /// The dividend, as displayed in the trace.
        dividend: String,
    },
    /// An operation produced infinity or NaN, or was `0 ^ 0`.
    NumericDomainError {
        /// The offending operation, as displayed in the trace.
        expression: String,
    },
}

impl EvalError {
    /// Returns the flat kind of this error.
    ///
    /// # Example
    /// ```
    /// use pemdas::{error::ErrorKind, run};
    ///
    /// let err = run("10 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(LexError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            Self::Lex(LexError::MalformedNumber { .. }) => ErrorKind::MalformedNumber,
            Self::Lex(LexError::InputTooLong { .. }) => ErrorKind::InputTooLong,
            Self::Parse(ParseError::UnbalancedParens { .. }) => ErrorKind::UnbalancedParens,
            Self::Parse(ParseError::MissingOperand { .. }) => ErrorKind::MissingOperand,
            Self::Parse(ParseError::MissingOperator { .. }) => ErrorKind::MissingOperator,
            Self::Parse(ParseError::TooDeep { .. }) => ErrorKind::TooDeep,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::NumericDomainError { .. } => ErrorKind::NumericDomainError,
        }
    }

    /// Character offset of the offending input, when one is known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => Some(e.position()),
            Self::DivisionByZero { .. } | Self::NumericDomainError { .. } => None,
        }
    }
}

impl From<LexError> for EvalError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::DivisionByZero { dividend } => {
                write!(f, "Division by zero: {dividend} / 0 is undefined.")
            },
            Self::NumericDomainError { expression } => write!(f,
                                                              "{expression} has no finite real result."),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::DivisionByZero { .. } | Self::NumericDomainError { .. } => None,
        }
    }
}
