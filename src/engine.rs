use std::fmt::Display;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};
use crate::{evaluate, Config, DiceSource, Directive, Error, RngSource, Roll, RollResult};


/// The reply to one rolled directive.
///
/// [`Display`] renders the chat line:
///
/// ```text
/// Alice → (4,5) +3 → "fire damage" → **12**
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollResponse {
    /// Who rolled.
    pub actor: String,
    /// The dice spec that was rolled.
    pub roll: Roll,
    /// Each die's face, in roll order.
    pub rolls: RollResult,
    /// Modifier text as written, possibly empty.
    pub modifier: String,
    /// What the roll was for.
    pub label: String,
    /// Dice total with the modifier applied.
    pub total: f64
}

impl Display for RollResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → ({})", self.actor, self.rolls)?;

        if !self.modifier.is_empty() {
            write!(f, " {}", self.modifier)?;
        }

        write!(f, " → \"{}\" → **{}**", self.label, self.total)
    }
}


/// Turns chat messages into dice rolls.
///
/// One `RollBot` can serve every conversation at once: it holds no per-message
/// state, and its [`DiceSource`] sits behind a lock taken only while dice are drawn.
///
/// # Examples
/// ```
/// use roll_bot::{Config, RollBot, Scripted};
///
/// let bot = RollBot::with_source(Scripted::new([4, 5]), Config::default());
///
/// let reply = bot.reply("[2d6+3 fire damage]", "Alice").unwrap();
/// assert_eq!(reply, "Alice → (4,5) +3 → \"fire damage\" → **12**");
///
/// assert_eq!(bot.reply("Hello, no brackets here", "Alice"), None);
/// ```
#[derive(Debug)]
pub struct RollBot<S = RngSource> {
    source: Mutex<S>,
    config: Config
}

impl RollBot {
    /// Creates an engine backed by a generator seeded once from the operating system.
    pub fn new(config: Config) -> Self {
        Self::with_source(RngSource::from_os_rng(), config)
    }
}

impl Default for RollBot {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<S: DiceSource> RollBot<S> {
    /// Creates an engine that draws faces from `source`.
    pub fn with_source(source: S, config: Config) -> Self {
        Self { source: Mutex::new(source), config }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Finds the directive in `text`, rolls it and evaluates the modifier.
    ///
    /// Returns `Ok(None)` when `text` holds no `[...]` directive.
    ///
    /// # Errors
    /// - [`Error::MalformedDirective`] when the directive has no usable dice spec or label.
    /// - [`Error::LimitExceeded`] when it asks for more dice or sides than [`Config`] allows.
    /// - [`Error::InvalidExpression`] when the modifier is not valid arithmetic.
    /// - [`Error::NumericOverflow`] when numbers do not fit, or the result is not
    ///   finite (division by zero).
    ///
    /// # Examples
    /// ```
    /// use roll_bot::{Config, Error, RollBot, Scripted};
    ///
    /// let bot = RollBot::with_source(Scripted::new([3]), Config::default());
    ///
    /// let response = bot.parse_and_roll("[1d20 / 2 half speed]", "Bo").unwrap().unwrap();
    /// assert_eq!(response.total, 1.5);
    /// assert_eq!(response.to_string(), "Bo → (3) / 2 → \"half speed\" → **1.5**");
    ///
    /// let err = bot.parse_and_roll("[2d6 ]", "Bo").unwrap_err();
    /// assert!(matches!(err, Error::MalformedDirective(_)));
    /// ```
    pub fn parse_and_roll(&self, text: &str, actor: &str) -> Result<Option<RollResponse>, Error> {
        let Some(directive) = Directive::find(text)? else {
            trace!("message holds no directive");
            return Ok(None);
        };

        let roll = *directive.roll();
        self.check_limits(&roll)?;

        let rolls = roll.roll(&mut *self.source.lock(), self.config.face_bound);

        let expression = format!("{} {}", rolls.total(), directive.modifier());
        trace!(%expression, "evaluating roll expression");

        let total = evaluate(&expression)
            .map_err(|source| Error::InvalidExpression { expression: expression.clone(), source })?;

        if !total.is_finite() {
            return Err(Error::NumericOverflow(format!("`{expression}` evaluates to {total}")));
        }

        debug!(actor, %roll, %rolls, modifier = directive.modifier(), label = directive.label(), total, "rolled");

        Ok(Some(RollResponse {
            actor: actor.to_string(),
            roll,
            rolls,
            modifier: directive.modifier().to_string(),
            label: directive.label().to_string(),
            total
        }))
    }

    /// Like [`RollBot::parse_and_roll()`], rendered as the chat reply.
    ///
    /// Errors are logged at `warn` and swallowed: a malformed roll gets no reply.
    pub fn reply(&self, text: &str, actor: &str) -> Option<String> {
        match self.parse_and_roll(text, actor) {
            Ok(response) => response.map(|response| response.to_string()),
            Err(err) => {
                warn!(actor, error = %err, "ignoring roll directive");
                None
            }
        }
    }

    fn check_limits(&self, roll: &Roll) -> Result<(), Error> {
        if roll.count() > self.config.max_dice {
            return Err(Error::LimitExceeded { what: "dice", value: roll.count(), max: self.config.max_dice });
        }

        if roll.sides() > self.config.max_sides {
            return Err(Error::LimitExceeded { what: "sides", value: roll.sides(), max: self.config.max_sides });
        }

        Ok(())
    }
}
