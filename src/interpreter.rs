/// The evaluator module reduces syntax trees step by step.
///
/// The evaluator flattens the tree into one level per parenthesis depth and
/// performs one operation per pass in PEMDAS order, recording a step for
/// each. It is the core teaching engine of the crate.
///
/// # Responsibilities
/// - Chooses the next operation the way a student working by hand would.
/// - Renders the remaining expression before and after every step.
/// - Reports division by zero and results without a finite value.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens (numbers,
/// operators and parentheses) paired with their character offsets. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Rejects unsupported characters and malformed numbers immediately.
/// - Enforces the configured input length limit.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST honoring precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into `AstNode` trees by recursive descent.
/// - Validates parenthesis balance and operand adjacency, reporting errors
///   with positions.
/// - Bounds recursion depth against adversarial nesting.
pub mod parser;
