//! Use cases - Dice operations offered to consumers.
//!
//! Each use case wraps a pure domain calculation with its collaborators
//! (random source, settings) and structured logging.

pub mod probability;
pub mod roll;

pub use probability::CalculateProbability;
pub use roll::RollDice;
