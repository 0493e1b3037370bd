//! Simulated dice rolls.

use std::sync::Arc;

use dicecalc_domain::{DiceSpec, DomainError};

use crate::infrastructure::ports::RandomPort;

/// Roll dice use case.
///
/// Draws each die from the injected [`RandomPort`] and adds the modifier.
pub struct RollDice {
    random: Arc<dyn RandomPort>,
}

impl RollDice {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Roll `spec` once.
    ///
    /// The random source is consulted exactly `count` times with `sides` as
    /// the bound; zero dice return the modifier without consulting it.
    #[tracing::instrument(skip_all, fields(spec = %spec))]
    pub fn execute(&self, spec: &DiceSpec) -> i64 {
        let total = dicecalc_domain::roll(spec, |bound| self.random.next_below(bound));
        tracing::debug!(total, "Rolled dice");
        total
    }

    /// Parse `notation` (e.g. "2d6+3") and roll it once.
    pub fn execute_notation(&self, notation: &str) -> Result<i64, DomainError> {
        let spec = DiceSpec::parse(notation)?;
        Ok(self.execute(&spec))
    }
}
