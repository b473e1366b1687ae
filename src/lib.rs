//! Dice directives for chat bots.
//!
//! A message like `Swinging at the goblin [2d6+3 fire damage]` carries a
//! directive: the dice to roll, arithmetic to apply to their total, and a label.
//! [`RollBot`] finds it, rolls it and formats the reply:
//!
//! ```
//! use roll_bot::{Config, RollBot, Scripted};
//!
//! let bot = RollBot::with_source(Scripted::new([4, 5]), Config::default());
//! let reply = bot.reply("Swinging at the goblin [2d6+3 fire damage]", "Alice");
//!
//! assert_eq!(reply.as_deref(), Some("Alice → (4,5) +3 → \"fire damage\" → **12**"));
//! ```
//!
//! The arithmetic is handled by a small Pratt parser, also usable on its own
//! through [`evaluate`].

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]


#[cfg(test)]
mod roll_test_strategies;

mod config;
mod directive;
mod engine;
mod error;
mod parser;
mod roll;
mod source;

pub use config::{
    Config,
    ENV_FACE_BOUND, ENV_MAX_DICE, ENV_MAX_SIDES,
    DEFAULT_MAX_DICE, DEFAULT_MAX_SIDES
};
pub use directive::{Directive, DirectiveError};
pub use engine::{RollBot, RollResponse};
pub use error::Error;
pub use parser::{
    ParserError, Parser, MAX_DEPTH,
    Expr, UnaryOperator, BinaryOperator,
    evaluate, parse_to_expr
};
pub use roll::{FaceBound, Roll, RollBuilder, RollResult};
pub use source::{DiceSource, RngSource, Scripted};
