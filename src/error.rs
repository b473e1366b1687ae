use crate::{DirectiveError, ParserError};


/// Everything that can go wrong while handling one message.
///
/// Each error belongs to the message that caused it; the engine stays usable
/// for the next one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The bracketed directive is missing its dice spec or label, or uses zero.
    #[error("Malformed directive - {0}")]
    MalformedDirective(#[from] DirectiveError),

    /// The dice total combined with the modifier is not valid arithmetic.
    #[error("Invalid expression `{expression}` - {source}")]
    InvalidExpression {
        /// The expression handed to the evaluator.
        expression: String,
        /// Why it was rejected.
        source: ParserError
    },

    /// A count, size or result that does not fit the numeric range.
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),

    /// A directive asks for more dice or sides than the configuration allows.
    #[error("Too many {what}: {value}, the limit is {max}")]
    LimitExceeded {
        /// `"dice"` or `"sides"`.
        what: &'static str,
        /// Requested value.
        value: u32,
        /// Configured limit.
        max: u32
    },

    /// A configuration value that cannot be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
