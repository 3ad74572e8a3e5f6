/// Default nesting limit for parentheses, unary chains and exponent chains.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Default maximum number of characters accepted as input.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1024;
/// Default number of decimal places shown in step descriptions.
pub const DEFAULT_DECIMAL_PLACES: usize = 10;

/// Limits and display settings for a single evaluation.
///
/// A `Config` is plain data: it is read by the lexer, parser and evaluator but
/// never mutated by them, so one value can be shared between any number of
/// concurrent calls.
///
/// # Example
/// ```
/// use pemdas::config::Config;
///
/// let config = Config::default().with_max_depth(8).with_decimal_places(2);
/// assert_eq!(config.max_depth, 8);
/// assert_eq!(config.decimal_places, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest nesting the parser accepts before failing with `TooDeep`.
    pub max_depth:        usize,
    /// Longest input, in characters, the lexer accepts.
    pub max_input_length: usize,
    /// Decimal places used when numbers are rendered in the trace.
    pub decimal_places:   usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth:        DEFAULT_MAX_DEPTH,
               max_input_length: DEFAULT_MAX_INPUT_LENGTH,
               decimal_places:   DEFAULT_DECIMAL_PLACES, }
    }
}

impl Config {
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_max_input_length(mut self, max_input_length: usize) -> Self {
        self.max_input_length = max_input_length;
        self
    }

    #[must_use]
    pub const fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }
}
