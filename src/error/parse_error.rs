#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all structural errors found while parsing tokens.
pub enum ParseError {
    /// A `)` without a matching `(`, or a `(` that is never closed.
    UnbalancedParens {
        /// Character offset of the unmatched parenthesis.
        position: usize,
    },
    /// An operand was expected but an operator, `)` or the end of input was
    /// found instead.
    MissingOperand {
        /// Character offset where the operand should start.
        position: usize,
    },
    /// Two operands follow each other with no operator between them.
    MissingOperator {
        /// Character offset of the second operand.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    TooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Character offset of the token that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Character offset of the error.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnbalancedParens { position }
            | Self::MissingOperand { position }
            | Self::MissingOperator { position }
            | Self::TooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParens { position } => {
                write!(f, "Unbalanced parenthesis at position {position}.")
            },
            Self::MissingOperand { position } => {
                write!(f, "Missing operand at position {position}.")
            },
            Self::MissingOperator { position } => write!(f,
                                                         "Missing operator before position {position}. Implicit multiplication is not supported."),
            Self::TooDeep { limit, position } => write!(f,
                                                        "Expression nests deeper than {limit} levels at position {position}."),
        }
    }
}

impl std::error::Error for ParseError {}
