//! Value objects - Immutable objects defined by their attributes

mod comparison;
mod dice;
mod outcome;

pub use comparison::{ComparisonOperator, ComparisonPredicate};
pub use dice::{DiceParseError, DiceSpec, DiceSpecBuilder, DiceSpecError, MIN_FACE};
pub use outcome::{Distribution, DistributionError, OutcomeGroup};
