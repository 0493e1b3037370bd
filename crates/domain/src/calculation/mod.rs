//! Exact dice calculations.
//!
//! Everything here is a pure function of its inputs:
//!
//! - `distribution` - full enumeration of one spec's outcomes, grouped by sum
//! - `probability` - convolution of several specs and predicate evaluation
//! - `sampler` - one simulated roll from an injected random source
//! - `mixed_radix` - the odometer counter both enumerations share
//!
//! Enumeration visits `sides^count` outcomes per spec. That cost is intrinsic
//! to exact counting and callers are expected to keep specs small.

mod distribution;
mod mixed_radix;
mod probability;
mod sampler;

pub use distribution::{outcome_distribution, DiceOutcomes};
pub use mixed_radix::MixedRadixCounter;
pub use probability::{combined_distribution, probability, selection_count};
pub use sampler::roll;
