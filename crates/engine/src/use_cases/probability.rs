//! Exact probabilities over combined dice sums.

use dicecalc_domain::{
    combined_distribution, selection_count, ComparisonPredicate, DiceOutcomes, DiceSpec,
    Distribution, DomainError,
};

/// Calculate probability use case.
///
/// Convolves the exact distributions of several dice specs and sums the
/// probability mass of the totals matching a predicate. Logs a warning
/// before calculations whose raw enumeration or group convolution exceeds
/// the configured size.
pub struct CalculateProbability {
    enumeration_warn_threshold: u64,
}

impl CalculateProbability {
    pub fn new(enumeration_warn_threshold: u64) -> Self {
        Self {
            enumeration_warn_threshold,
        }
    }

    /// Probability that the total of all `specs` satisfies `predicate`.
    ///
    /// Returns `0.0` when no specs are given.
    #[tracing::instrument(skip_all, fields(predicate = %predicate, specs = specs.len()))]
    pub fn execute(&self, predicate: &ComparisonPredicate, specs: &[DiceSpec]) -> f64 {
        if specs.is_empty() {
            tracing::debug!("No dice given, probability is zero");
            return 0.0;
        }

        self.warn_on_large_enumeration(specs);
        let probability = dicecalc_domain::probability(predicate, specs);
        tracing::debug!(probability, "Calculated probability");
        probability
    }

    /// Combined exact distribution of all `specs`.
    ///
    /// Returns `None` when the joint outcome space does not fit in `u64`.
    pub fn distribution(&self, specs: &[DiceSpec]) -> Option<Distribution> {
        self.warn_on_large_enumeration(specs);
        let distribution = combined_distribution(specs);
        match &distribution {
            Some(distribution) => tracing::debug!(
                groups = distribution.len(),
                total_outcomes = distribution.total_outcomes(),
                "Combined distribution"
            ),
            None => tracing::warn!(
                specs = specs.len(),
                "Combined outcome space exceeds u64, no exact distribution"
            ),
        }
        distribution
    }

    /// Parse each notation (e.g. "1d4", "2d3") and calculate the probability.
    pub fn execute_notation(
        &self,
        predicate: &ComparisonPredicate,
        notations: &[&str],
    ) -> Result<f64, DomainError> {
        let specs = notations
            .iter()
            .map(|notation| DiceSpec::parse(notation))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.execute(predicate, &specs))
    }

    /// Logs a warning for each oversized enumeration, returning whether any
    /// was found.
    fn warn_on_large_enumeration(&self, specs: &[DiceSpec]) -> bool {
        let threshold = self.enumeration_warn_threshold;
        let mut warned = false;
        for spec in specs {
            let outcomes = DiceOutcomes::new(spec).combinations();
            if outcomes.map_or(true, |n| n > threshold) {
                tracing::warn!(
                    spec = %spec,
                    outcomes = ?outcomes,
                    threshold,
                    "Exact distribution requires a very large enumeration"
                );
                warned = true;
            }
        }

        if specs.len() > 1 {
            let selections = selection_count(specs);
            if selections.map_or(true, |n| n > threshold) {
                tracing::warn!(
                    specs = specs.len(),
                    selections = ?selections,
                    threshold,
                    "Combining distributions requires a very large convolution"
                );
                warned = true;
            }
        }
        warned
    }
}
