#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// A character outside digits, `.`, operators and parentheses.
    InvalidCharacter {
        /// Character offset of the offending character.
        position:  usize,
        /// The rejected character.
        character: char,
    },
    /// A run of digits and dots that is not `digits` or `digits.digits`.
    MalformedNumber {
        /// Character offset where the literal starts.
        position: usize,
        /// The literal as written.
        text:     String,
    },
    /// The input exceeds the configured length limit.
    InputTooLong {
        /// Length of the input in characters.
        length: usize,
        /// The configured maximum.
        limit:  usize,
    },
}

impl LexError {
    /// Character offset of the error, when it points at a single place.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidCharacter { position, .. } | Self::MalformedNumber { position, .. } => {
                Some(*position)
            },
            Self::InputTooLong { .. } => None,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { position, character } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
            Self::MalformedNumber { position, text } => {
                write!(f, "Malformed number '{text}' at position {position}.")
            },
            Self::InputTooLong { length, limit } => write!(f,
                                                           "Expression is {length} characters long, the limit is {limit}."),
        }
    }
}

impl std::error::Error for LexError {}
