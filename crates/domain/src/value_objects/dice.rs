//! Dice specification value objects and parsing
//!
//! A [`DiceSpec`] describes one group of identical dice: how many sides each
//! die has, how many dice are rolled, and a flat modifier added to the total.
//! Supports notation like "1d20+5", "2d6-1", "d100", "0d6+3".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lowest face value of every die.
pub const MIN_FACE: i32 = 1;

/// Error when constructing a dice specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceSpecError {
    /// Sides missing or non-positive, or a negative dice count
    #[error("Invalid dice specification: {0}")]
    InvalidSpec(String),
    /// The maximal attainable sum does not fit the integer range
    #[error("The maximal possible value {maximum} overflows the valid range")]
    RangeOverflow { maximum: i64 },
}

/// Error when parsing dice notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The notation string is empty
    #[error("Empty dice notation")]
    Empty,
    /// Invalid format - expected NdS or NdS+M
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Parsed fine, but the values do not form a valid specification
    #[error(transparent)]
    Spec(#[from] DiceSpecError),
}

/// An immutable, validated dice specification like "2d6+3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDiceSpec")]
pub struct DiceSpec {
    sides: i32,
    count: i32,
    modifier: i32,
}

impl DiceSpec {
    /// Create a validated dice specification.
    ///
    /// Fails with [`DiceSpecError::InvalidSpec`] when `sides < 1` or
    /// `count < 0`, and with [`DiceSpecError::RangeOverflow`] when
    /// `count * sides + modifier` exceeds `i32::MAX`.
    pub fn new(sides: i32, count: i32, modifier: i32) -> Result<Self, DiceSpecError> {
        if sides < MIN_FACE {
            return Err(DiceSpecError::InvalidSpec(format!(
                "number of sides must be positive, got {}",
                sides
            )));
        }
        if count < 0 {
            return Err(DiceSpecError::InvalidSpec(format!(
                "cardinality of dice cannot be negative, got {}",
                count
            )));
        }

        let maximum = i64::from(count) * i64::from(sides) + i64::from(modifier);
        if maximum > i64::from(i32::MAX) {
            return Err(DiceSpecError::RangeOverflow { maximum });
        }

        Ok(Self {
            sides,
            count,
            modifier,
        })
    }

    /// Start a builder with no sides set, one die and no modifier.
    pub fn builder() -> DiceSpecBuilder {
        DiceSpecBuilder::default()
    }

    /// Parse dice notation like "1d20+5", "2d6-1", "d100"
    ///
    /// Supported formats:
    /// - "NdS" - Roll N dice with S sides
    /// - "NdS+M" - Roll N dice with S sides, add M
    /// - "NdS-M" - Roll N dice with S sides, subtract M
    /// - "dS" - Roll 1 die with S sides (shorthand)
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = input.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let count_str = &input[..d_pos];
        let count: i32 = if count_str.is_empty() {
            1
        } else {
            count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", count_str))
            })?
        };

        let after_d = &input[d_pos + 1..];
        let (sides_str, modifier) = if let Some(plus_pos) = after_d.find('+') {
            let mod_str = &after_d[plus_pos + 1..];
            let modifier: i32 = mod_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid modifier: '+{}'", mod_str))
            })?;
            (&after_d[..plus_pos], modifier)
        } else if let Some(minus_pos) = after_d.find('-') {
            if minus_pos == 0 {
                return Err(DiceParseError::InvalidFormat(format!(
                    "Invalid die size: '{}'",
                    after_d
                )));
            }
            // Parse with the sign attached so "-2147483648" is representable
            let mod_str = &after_d[minus_pos..];
            let modifier: i32 = mod_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid modifier: '{}'", mod_str))
            })?;
            (&after_d[..minus_pos], modifier)
        } else {
            (after_d, 0)
        };

        let sides: i32 = sides_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", sides_str))
        })?;

        Self::new(sides, count, modifier).map_err(DiceParseError::Spec)
    }

    pub fn sides(&self) -> i32 {
        self.sides
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Lowest attainable sum: every die shows one. Zero dice yield the modifier.
    pub fn minimum(&self) -> i32 {
        self.count * MIN_FACE + self.modifier
    }

    /// Highest attainable sum: every die shows its top face.
    pub fn maximum(&self) -> i32 {
        // Widened: count * sides alone may exceed i32 when the modifier is negative.
        // Construction guarantees the total fits.
        (i64::from(self.count) * i64::from(self.sides) + i64::from(self.modifier)) as i32
    }

    /// Whether rolling this spec is certain (no dice to roll).
    pub fn is_constant(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)?;
        }
        Ok(())
    }
}

impl FromStr for DiceSpec {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Unvalidated wire shape; deserialization goes through [`DiceSpec::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDiceSpec {
    sides: i32,
    count: i32,
    #[serde(default)]
    modifier: i32,
}

impl TryFrom<RawDiceSpec> for DiceSpec {
    type Error = DiceSpecError;

    fn try_from(raw: RawDiceSpec) -> Result<Self, Self::Error> {
        Self::new(raw.sides, raw.count, raw.modifier)
    }
}

/// Step-by-step construction of a [`DiceSpec`].
///
/// Sides must be set explicitly; the dice count defaults to one and the
/// modifier to zero.
#[derive(Debug, Clone)]
pub struct DiceSpecBuilder {
    sides: Option<i32>,
    count: i32,
    modifier: i32,
}

impl Default for DiceSpecBuilder {
    fn default() -> Self {
        Self {
            sides: None,
            count: 1,
            modifier: 0,
        }
    }
}

impl DiceSpecBuilder {
    pub fn sides(mut self, sides: i32) -> Self {
        self.sides = Some(sides);
        self
    }

    pub fn count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    pub fn modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn build(&self) -> Result<DiceSpec, DiceSpecError> {
        let sides = self.sides.ok_or_else(|| {
            DiceSpecError::InvalidSpec("number of sides must be defined".to_string())
        })?;
        DiceSpec::new(sides, self.count, self.modifier)
    }
}
