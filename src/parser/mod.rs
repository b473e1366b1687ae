mod error;
mod lexer;
mod expr;
mod parse;

#[cfg(test)]
mod str_test_strategies;

pub use error::ParserError;
pub(crate) use lexer::{Lexer, Token};
pub use expr::{Expr, BinaryOperator, UnaryOperator};
pub use parse::{Parser, MAX_DEPTH, evaluate, parse_to_expr};
