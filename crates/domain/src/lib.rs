//! Dicecalc domain: dice specifications, exact outcome distributions, and
//! probabilities over the combined sum of several dice groups.
//!
//! ```
//! use dicecalc_domain::{probability, ComparisonPredicate, DiceSpec};
//!
//! let d4 = DiceSpec::parse("1d4").unwrap();
//! let two_d3 = DiceSpec::parse("2d3").unwrap();
//! let p = probability(&ComparisonPredicate::eq(6), &[d4, two_d3]);
//! assert_eq!(p, 8.0 / 36.0);
//! ```

pub mod calculation;
pub mod error;
pub mod value_objects;

pub use error::DomainError;

pub use calculation::{
    combined_distribution, outcome_distribution, probability, roll, selection_count,
    DiceOutcomes, MixedRadixCounter,
};

pub use value_objects::{
    ComparisonOperator, ComparisonPredicate, DiceParseError, DiceSpec, DiceSpecBuilder,
    DiceSpecError, Distribution, DistributionError, OutcomeGroup, MIN_FACE,
};
