//! Finding and splitting the bracketed dice directive in a chat message.
//!
//! A directive is the text between the first `[` and the first `]` after it:
//!
//! ```text
//! Swinging at the goblin [2d6+3 fire damage] !
//!                         ^^^ ^^ ^^^^^^^^^^^
//!                         |   |  label
//!                         |   modifier
//!                         dice spec
//! ```
//!
//! The dice spec is the first `<digit>d<digits>` run: exactly one digit of dice
//! count, so `12d6` rolls two dice. Everything after it up to
//! the first letter is the modifier; from that letter to the closing bracket is
//! the label.

use std::num::{IntErrorKind, ParseIntError};
use crate::{Error, Roll};


/// Ways a bracketed directive can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectiveError {
    /// No `<digit>d` run inside the brackets.
    #[error("No dice spec found, expected something like `2d6`")]
    MissingDiceSpec,

    /// A `d` with no side count after it, as in `2d+3`.
    #[error("Dice spec has no number of sides")]
    MissingSides,

    /// Zero dice or zero sides.
    #[error("Zero value is not accepted")]
    ZeroValue,

    /// Nothing alphabetic after the dice spec, so no label.
    #[error("Directive has no label")]
    MissingLabel,
}


/// A parsed dice directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    roll: Roll,
    modifier: String,
    label: String
}

impl Directive {
    /// Looks for a directive in `text` and parses it.
    ///
    /// Returns `Ok(None)` when the text has no `[...]` pair; that is an ordinary
    /// message, not an error.
    ///
    /// # Errors
    /// - [`Error::MalformedDirective`] when the brackets hold no dice spec, the
    ///   dice spec lacks sides or uses zero, or no label follows it.
    /// - [`Error::NumericOverflow`] when the sides do not fit in a `u32`, or the
    ///   product of count and sides does not.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::Directive;
    ///
    /// let directive = Directive::find("Swing! [2d6+3 fire damage]").unwrap().unwrap();
    /// assert_eq!(directive.roll().to_string(), "2d6");
    /// assert_eq!(directive.modifier(), "+3");
    /// assert_eq!(directive.label(), "fire damage");
    ///
    /// assert_eq!(Directive::find("Hello, no brackets here").unwrap(), None);
    /// ```
    pub fn find(text: &str) -> Result<Option<Self>, Error> {
        let Some(body) = bracketed(text) else {
            return Ok(None);
        };

        let mut scanner = Scanner::new(body);
        let (count, sides) = scanner.dice_spec()?;
        let modifier = scanner.modifier();
        let label = scanner.label()?;

        let roll = Roll::builder(parse_number(sides)?)
            .count(parse_number(count)?)
            .build()?;

        Ok(Some(Self {
            roll,
            modifier: modifier.trim().to_string(),
            label: label.trim_end().to_string()
        }))
    }

    /// The dice to roll.
    pub fn roll(&self) -> &Roll {
        &self.roll
    }

    /// Arithmetic applied to the dice total, such as `+3`. Empty means no change.
    pub fn modifier(&self) -> &str {
        &self.modifier
    }

    /// What the roll is for.
    pub fn label(&self) -> &str {
        &self.label
    }
}


/// Text strictly between the first `[` and the first `]` after it.
fn bracketed(text: &str) -> Option<&str> {
    let open = text.find('[')?;
    let body = &text[open + 1..];
    let close = body.find(']')?;

    Some(&body[..close])
}

fn parse_number(digits: &str) -> Result<u32, Error> {
    digits.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => Error::NumericOverflow(format!("{digits} does not fit in a u32")),
        _ => Error::MalformedDirective(DirectiveError::MissingSides)
    })
}


/// Walks a directive body left to right: dice spec, then modifier, then label.
///
/// Only ASCII digits and `d` are inspected byte-wise, so every slice boundary
/// lands on a char boundary.
#[derive(Debug)]
struct Scanner<'a> {
    body: &'a str,
    position: usize
}

impl<'a> Scanner<'a> {
    fn new(body: &'a str) -> Self {
        Self { body, position: 0 }
    }

    /// Finds the first `d` preceded by a digit and returns the count and sides text.
    ///
    /// The count is the single digit before the `d`.
    fn dice_spec(&mut self) -> Result<(&'a str, &'a str), DirectiveError> {
        let bytes = self.body.as_bytes();

        let d = (1..bytes.len())
            .find(|&i| bytes[i] == b'd' && bytes[i - 1].is_ascii_digit())
            .ok_or(DirectiveError::MissingDiceSpec)?;

        let end = bytes[d + 1..].iter()
            .position(|b| !b.is_ascii_digit())
            .map_or(bytes.len(), |i| d + 1 + i);

        if end == d + 1 {
            return Err(DirectiveError::MissingSides);
        }

        self.position = end;
        Ok((&self.body[d - 1..d], &self.body[d + 1..end]))
    }

    /// Consumes everything up to the first letter.
    fn modifier(&mut self) -> &'a str {
        let rest = &self.body[self.position..];
        let len = rest.char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map_or(rest.len(), |(i, _)| i);

        self.position += len;
        &rest[..len]
    }

    /// Consumes the rest of the body, which must start with a letter.
    fn label(&mut self) -> Result<&'a str, DirectiveError> {
        let rest = &self.body[self.position..];
        if rest.is_empty() {
            return Err(DirectiveError::MissingLabel);
        }

        self.position = self.body.len();
        Ok(rest)
    }
}


#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use super::*;
    use crate::roll_test_strategies::directive_strategy;

    fn malformed(text: &str) -> DirectiveError {
        match Directive::find(text) {
            Err(Error::MalformedDirective(err)) => err,
            other => panic!("expected a malformed directive for {text:?}, got {other:?}")
        }
    }

    proptest! {
        #[test]
        fn test_well_formed_directive(
            (text, count, sides, modifier, label) in directive_strategy(),
            prefix in "[a-zA-Z ,.!]{0,20}",
            suffix in "[a-zA-Z ,.!]{0,20}"
        ) {
            let message = format!("{prefix}{text}{suffix}");
            let directive = Directive::find(&message).unwrap().unwrap();

            prop_assert_eq!(directive.roll().count(), count);
            prop_assert_eq!(directive.roll().sides(), sides);
            prop_assert_eq!(directive.modifier(), modifier.as_str());
            prop_assert_eq!(directive.label(), label.as_str());
        }

        #[test]
        fn test_parsing_is_deterministic((text, ..) in directive_strategy()) {
            prop_assert_eq!(Directive::find(&text), Directive::find(&text));
        }

        #[test]
        fn test_no_brackets_no_directive(text in "[^\\[]*") {
            prop_assert_eq!(Directive::find(&text), Ok(None));
        }

        #[test]
        fn test_unicode_never_panics(text in "\\PC*") {
            let _ = Directive::find(&text);
            let _ = Directive::find(&format!("[{text}]"));
            let _ = Directive::find(&format!("[1d6{text}]"));
        }
    }

    #[test]
    fn test_reference_directive() {
        let directive = Directive::find("[2d6+3 fire damage]").unwrap().unwrap();

        assert_eq!(*directive.roll(), Roll::builder(6).count(2).build().unwrap());
        assert_eq!(directive.modifier(), "+3");
        assert_eq!(directive.label(), "fire damage");
    }

    #[test]
    fn test_empty_modifier() {
        let directive = Directive::find("[1d20 perception]").unwrap().unwrap();

        assert_eq!(directive.modifier(), "");
        assert_eq!(directive.label(), "perception");
    }

    #[test]
    fn test_label_keeps_inner_text() {
        let directive = Directive::find("[1d8 * 2 sneak attack (x2)  ] later [1d4 ignored]").unwrap().unwrap();

        assert_eq!(directive.modifier(), "* 2");
        assert_eq!(directive.label(), "sneak attack (x2)");
    }

    #[test]
    fn test_count_is_one_digit() {
        let directive = Directive::find("[12d6 fireball]").unwrap().unwrap();
        assert_eq!(directive.roll().to_string(), "2d6");
        assert_eq!(directive.label(), "fireball");

        let directive = Directive::find("[99999999999d6 many]").unwrap().unwrap();
        assert_eq!(directive.roll().count(), 9);

        assert_eq!(malformed("[10d6 x]"), DirectiveError::ZeroValue);
    }

    #[test]
    fn test_label_right_after_modifier() {
        let directive = Directive::find("[1d6+3fire]").unwrap().unwrap();

        assert_eq!(directive.modifier(), "+3");
        assert_eq!(directive.label(), "fire");
    }

    #[test]
    fn test_dice_spec_after_text() {
        let directive = Directive::find("[dex save 1d20+2 dodge]").unwrap().unwrap();

        assert_eq!(directive.roll().to_string(), "1d20");
        assert_eq!(directive.modifier(), "+2");
        assert_eq!(directive.label(), "dodge");
    }

    #[test]
    fn test_unicode_label() {
        let directive = Directive::find("[1d6 épée ⚔]").unwrap().unwrap();
        assert_eq!(directive.label(), "épée ⚔");
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(malformed("[2d6 ]"), DirectiveError::MissingLabel);
        assert_eq!(malformed("[2d6+3]"), DirectiveError::MissingLabel);
    }

    #[test]
    fn test_missing_dice_count() {
        assert_eq!(malformed("[d6+3 dmg]"), DirectiveError::MissingDiceSpec);
        assert_eq!(malformed("[]"), DirectiveError::MissingDiceSpec);
        assert_eq!(malformed("[roll for it]"), DirectiveError::MissingDiceSpec);
    }

    #[test]
    fn test_missing_sides() {
        assert_eq!(malformed("[2d+3 dmg]"), DirectiveError::MissingSides);
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(malformed("[0d6 nothing]"), DirectiveError::ZeroValue);
        assert_eq!(malformed("[2d0 nothing]"), DirectiveError::ZeroValue);
    }

    #[test]
    fn test_overflowing_numbers() {
        assert!(matches!(Directive::find("[2d99999999999 big]"), Err(Error::NumericOverflow(_))));
        assert!(matches!(Directive::find("[9d4294967295 big]"), Err(Error::NumericOverflow(_))));
    }

    #[test]
    fn test_unclosed_bracket_is_not_a_directive() {
        assert_eq!(Directive::find("[2d6+3 fire damage"), Ok(None));
        assert_eq!(Directive::find("2d6+3 fire damage]"), Ok(None));
        assert_eq!(Directive::find("]2d6 oops["), Ok(None));
    }
}
