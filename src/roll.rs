use std::{fmt::Display, iter::FromIterator, ops::{Deref, RangeInclusive}, str::FromStr};
use crate::{DiceSource, DirectiveError, Error};


/// Which faces of a die can come up.
///
/// Legacy bots drew from `[1, sides)`, so a d20 never rolled 20.
/// [`FaceBound::Exclusive`] keeps that behaviour for groups used to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FaceBound {
    /// Every face from 1 to `sides` can be rolled.
    #[default]
    Inclusive,
    /// Faces from 1 to `sides - 1`. A one-sided die still rolls 1.
    Exclusive,
}

impl FaceBound {
    /// The range of faces a die with `sides` sides can roll under this bound.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::FaceBound;
    ///
    /// assert_eq!(FaceBound::Inclusive.faces(6), 1..=6);
    /// assert_eq!(FaceBound::Exclusive.faces(6), 1..=5);
    /// assert_eq!(FaceBound::Exclusive.faces(1), 1..=1);
    /// ```
    pub fn faces(self, sides: u32) -> RangeInclusive<u32> {
        match self {
            FaceBound::Inclusive => 1..=sides.max(1),
            FaceBound::Exclusive => 1..=sides.saturating_sub(1).max(1)
        }
    }
}

impl Display for FaceBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceBound::Inclusive => write!(f, "inclusive"),
            FaceBound::Exclusive => write!(f, "exclusive")
        }
    }
}

impl FromStr for FaceBound {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inclusive" => Ok(FaceBound::Inclusive),
            "exclusive" => Ok(FaceBound::Exclusive),
            other => Err(Error::Config(format!("unknown face bound `{other}`, expected `inclusive` or `exclusive`")))
        }
    }
}


/// A dice spec: `count` dice with `sides` sides each, summed.
///
/// Created with [`Roll::builder()`] or the [`crate::roll!`] macro. Both reject
/// zero counts and sizes, so a `Roll` always has `count >= 1` and `sides >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    sides: u32,
    count: u32
}

impl Roll {
    /// Creates a new [`RollBuilder`] for dice with `sides` sides.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::Roll;
    ///
    /// let roll = Roll::builder(20)  // a d20
    ///              .count(3)        // rolled three times
    ///              .build()
    ///              .unwrap();
    ///
    /// assert_eq!(format!("{}", roll), "3d20");
    /// ```
    pub fn builder(sides: u32) -> RollBuilder {
        RollBuilder::new(sides)
    }

    /// Number of dice.
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Sides per die.
    pub const fn sides(&self) -> u32 {
        self.sides
    }

    /// Faces each die can land on under `bound`.
    pub fn faces(&self, bound: FaceBound) -> RangeInclusive<u32> {
        bound.faces(self.sides)
    }

    /// Rolls every die once, drawing faces from `source`.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::{FaceBound, Roll, Scripted};
    ///
    /// let roll = Roll::builder(6).count(2).build().unwrap();
    /// let result = roll.roll(&mut Scripted::new([4, 5]), FaceBound::Inclusive);
    ///
    /// assert_eq!(*result, vec![4, 5]);
    /// assert_eq!(result.total(), 9);
    /// ```
    pub fn roll<S: DiceSource + ?Sized>(&self, source: &mut S, bound: FaceBound) -> RollResult {
        let faces = self.faces(bound);

        (0..self.count)
            .map(|_| source.face(faces.clone()))
            .collect()
    }

    /// Smallest possible sum, one per die.
    pub const fn min(&self) -> u32 {
        self.count
    }

    /// Largest possible sum under `bound`.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::{roll, FaceBound};
    ///
    /// let roll = roll!(20, 3).unwrap();
    /// assert_eq!(roll.max(FaceBound::Inclusive), 60);
    /// assert_eq!(roll.max(FaceBound::Exclusive), 57);
    /// ```
    pub fn max(&self, bound: FaceBound) -> u32 {
        // build() guarantees count * sides fits
        self.count * *self.faces(bound).end()
    }

    /// `(min, max)` under `bound`.
    pub fn possible_values(&self, bound: FaceBound) -> (u32, u32) {
        (self.min(), self.max(bound))
    }
}

impl Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}


/// A builder for [`Roll`].
///
/// Start with [`Roll::builder()`], set [`RollBuilder::count()`], then call
/// [`RollBuilder::build()`].
#[derive(Debug, Clone)]
pub struct RollBuilder {
    sides: u32,
    count: u32
}

impl RollBuilder {
    fn new(sides: u32) -> Self {
        Self { sides, count: 1 }
    }

    /// Sets the number of dice to roll. Defaults to 1.
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Validates the configuration and builds the [`Roll`].
    ///
    /// # Errors
    /// - [`Error::MalformedDirective`] with [`DirectiveError::ZeroValue`] if the
    ///   count or the number of sides is 0.
    /// - [`Error::NumericOverflow`] if `count * sides` does not fit in a `u32`.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::{DirectiveError, Error, Roll};
    ///
    /// assert!(Roll::builder(6).count(3).build().is_ok());
    ///
    /// let zero = Roll::builder(0).build();
    /// assert!(matches!(zero, Err(Error::MalformedDirective(DirectiveError::ZeroValue))));
    ///
    /// let huge = Roll::builder(u32::MAX).count(2).build();
    /// assert!(matches!(huge, Err(Error::NumericOverflow(_))));
    /// ```
    pub fn build(self) -> Result<Roll, Error> {
        if self.sides == 0 || self.count == 0 {
            return Err(DirectiveError::ZeroValue.into());
        }

        if self.count.checked_mul(self.sides).is_none() {
            return Err(Error::NumericOverflow(format!("{}d{} can exceed {}", self.count, self.sides, u32::MAX)));
        }

        Ok(Roll { sides: self.sides, count: self.count })
    }
}


/// Faces rolled for each die, in roll order.
///
/// Dereferences to `Vec<u32>`; [`Display`] joins the faces with commas.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollResult(Vec<u32>);

impl RollResult {
    /// Creates a `RollResult` from already rolled faces.
    pub fn new(faces: Vec<u32>) -> Self {
        Self(faces)
    }

    /// Sum of all faces.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::RollResult;
    ///
    /// let result = RollResult::new(vec![5, 1, 3]);
    /// assert_eq!(result.total(), 9);
    /// assert_eq!(result.to_string(), "5,1,3");
    /// ```
    pub fn total(&self) -> u64 {
        self.iter().map(|&face| u64::from(face)).sum()
    }
}

impl FromIterator<u32> for RollResult {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for RollResult {
    type Target = Vec<u32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.iter().map(u32::to_string).collect();
        write!(f, "{}", faces.join(","))
    }
}


/// A macro for creating [`Roll`] instances.
///
/// - `roll!(SIDES)`: a single die, e.g. `roll!(6)` for 1d6.
/// - `roll!(SIDES, COUNT)`: `COUNT` dice, e.g. `roll!(10, 3)` for 3d10.
///
/// Expands to `Result<Roll, Error>`, the result of [`RollBuilder::build()`].
///
/// # Examples
/// ```
/// use roll_bot::roll;
///
/// assert_eq!(roll!(6).unwrap().to_string(), "1d6");
/// assert_eq!(roll!(10, 3).unwrap().to_string(), "3d10");
/// assert!(roll!(10, 0).is_err());
/// ```
#[macro_export]
macro_rules! roll {
    ($sides:expr) => {
        $crate::Roll::builder($sides)
            .build()
    };

    ($sides:expr, $count:expr) => {
        $crate::Roll::builder($sides)
            .count($count)
            .build()
    };
}
