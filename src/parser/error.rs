/// Errors raised while tokenizing or parsing an arithmetic expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    /// Wraps another error with the character offset where parsing stopped.
    #[error("At position {0} - {1}")]
    AtPosition(usize, Box<ParserError>),

    /// A character that is not part of the arithmetic grammar.
    #[error("Invalid token: {0}")]
    Token(char),

    /// A numeric literal that does not parse, such as `1.2.3`.
    #[error("Invalid number: {0}")]
    Number(#[from] std::num::ParseFloatError),

    /// A word inside the expression; only numbers and operators are allowed.
    #[error("Invalid identifier: {0}")]
    Identifier(String),

    /// The expression is empty or only whitespace.
    #[error("Input string is empty")]
    Empty,

    /// An opening parenthesis without its closing match.
    #[error("Parenthesis was not closed")]
    UnclosedParenthesis,

    /// A token that cannot start an operand, such as a dangling operator.
    #[error("Unexpected prefix: {0}")]
    UnexpectedPrefix(String),

    /// A token that cannot follow an operand.
    #[error("Unexpected infix: {0}")]
    UnexpectedInfix(String),

    /// Tokens left over after a complete expression, as in `11 3`.
    #[error("Unexpected trailing input: {0}")]
    TrailingInput(String),

    /// Parentheses, prefix signs or chained operators nested past the given limit.
    #[error("Expression nests deeper than {0} levels")]
    TooDeep(usize),
}

impl ParserError {
    /// Returns the underlying error, skipping any [`ParserError::AtPosition`] wrapper.
    pub fn err(&self) -> &Self {
        match self {
            ParserError::AtPosition(_, err) => err.as_ref(),
            other => other
        }
    }

    /// Returns the position attached to this error, if any.
    pub fn pos(&self) -> Option<&usize> {
        match self {
            ParserError::AtPosition(position, _) => Some(position),
            _ => None
        }
    }

    /// Attaches a position to this error unless it already carries one.
    pub fn at_pos(self, position: usize) -> Self {
        match self {
            ParserError::AtPosition(_, _) => self,
            other => ParserError::AtPosition(position, Box::new(other))
        }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
