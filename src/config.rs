//! Engine settings.

use std::str::FromStr;
use crate::{Error, FaceBound};

/// Environment variable holding the [`FaceBound`], `inclusive` or `exclusive`.
pub const ENV_FACE_BOUND: &str = "ROLLBOT_FACE_BOUND";

/// Environment variable holding the largest accepted dice count.
pub const ENV_MAX_DICE: &str = "ROLLBOT_MAX_DICE";

/// Environment variable holding the largest accepted number of sides.
pub const ENV_MAX_SIDES: &str = "ROLLBOT_MAX_SIDES";

/// Default cap on dice per directive.
pub const DEFAULT_MAX_DICE: u32 = 100;

/// Default cap on sides per die.
pub const DEFAULT_MAX_SIDES: u32 = 1000;


/// How the engine rolls and what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Which faces a die can land on.
    pub face_bound: FaceBound,
    /// Largest dice count a directive may ask for.
    pub max_dice: u32,
    /// Largest die size a directive may ask for.
    pub max_sides: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            face_bound: FaceBound::Inclusive,
            max_dice: DEFAULT_MAX_DICE,
            max_sides: DEFAULT_MAX_SIDES,
        }
    }
}

impl Config {
    /// Sets the face bound.
    pub fn with_face_bound(mut self, face_bound: FaceBound) -> Self {
        self.face_bound = face_bound;
        self
    }

    /// Sets the dice count limit.
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Sets the die size limit.
    pub fn with_max_sides(mut self, max_sides: u32) -> Self {
        self.max_sides = max_sides;
        self
    }

    /// Reads `ROLLBOT_FACE_BOUND`, `ROLLBOT_MAX_DICE` and `ROLLBOT_MAX_SIDES`.
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    /// [`Error::Config`] if a variable is set to something unparsable.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env()`], reading values through `lookup`.
    ///
    /// # Errors
    /// [`Error::Config`] if a value is set to something unparsable.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::{Config, FaceBound};
    ///
    /// let config = Config::from_vars(|key| match key {
    ///     "ROLLBOT_FACE_BOUND" => Some("exclusive".into()),
    ///     _ => None,
    /// }).unwrap();
    ///
    /// assert_eq!(config.face_bound, FaceBound::Exclusive);
    /// assert_eq!(config.max_dice, 100);
    /// ```
    pub fn from_vars<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_FACE_BOUND) {
            config.face_bound = value.parse()?;
        }

        if let Some(value) = lookup(ENV_MAX_DICE) {
            config.max_dice = parse_limit(ENV_MAX_DICE, &value)?;
        }

        if let Some(value) = lookup(ENV_MAX_SIDES) {
            config.max_sides = parse_limit(ENV_MAX_SIDES, &value)?;
        }

        Ok(config)
    }
}

fn parse_limit(key: &str, value: &str) -> Result<u32, Error> {
    match u32::from_str(value.trim()) {
        Ok(0) => Err(Error::Config(format!("{key} must be at least 1"))),
        Ok(limit) => Ok(limit),
        Err(err) => Err(Error::Config(format!("{key}={value:?}: {err}")))
    }
}


#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Config::from_vars(vars(&[])).unwrap(), Config::default());
    }

    #[test]
    fn test_all_vars() {
        let config = Config::from_vars(vars(&[
            (ENV_FACE_BOUND, "Exclusive"),
            (ENV_MAX_DICE, "20"),
            (ENV_MAX_SIDES, " 100 "),
        ])).unwrap();

        assert_eq!(config, Config::default()
            .with_face_bound(FaceBound::Exclusive)
            .with_max_dice(20)
            .with_max_sides(100));
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(Config::from_vars(vars(&[(ENV_FACE_BOUND, "open")])), Err(Error::Config(_))));
        assert!(matches!(Config::from_vars(vars(&[(ENV_MAX_DICE, "many")])), Err(Error::Config(_))));
        assert!(matches!(Config::from_vars(vars(&[(ENV_MAX_SIDES, "0")])), Err(Error::Config(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{ "face_bound": "exclusive" }"#).unwrap();

        assert_eq!(config.face_bound, FaceBound::Exclusive);
        assert_eq!(config.max_sides, DEFAULT_MAX_SIDES);
    }
}
