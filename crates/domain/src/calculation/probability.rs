use crate::value_objects::{ComparisonPredicate, DiceSpec, Distribution, OutcomeGroup};

use super::{outcome_distribution, MixedRadixCounter};

/// Distribution of the total of all `specs` rolled together.
///
/// No specs give an empty distribution and a single spec its own. Several
/// specs are convolved group by group: every selection of one group per spec
/// contributes the sum of the selected sums, weighted by the product of their
/// occurrences, out of the product of their outcome totals. Equal sums are
/// then merged.
///
/// Returns `None` when the joint outcome space does not fit in `u64`.
pub fn combined_distribution(specs: &[DiceSpec]) -> Option<Distribution> {
    match specs {
        [] => Some(Distribution::default()),
        [spec] => Some(outcome_distribution(spec)),
        _ => {
            let distributions: Vec<Distribution> =
                specs.iter().map(outcome_distribution).collect();
            convolve(&distributions)
        }
    }
}

/// Number of group selections a convolution of `specs` walks, or `None` past
/// `u64`.
///
/// Each spec contributes one group per attainable sum.
pub fn selection_count(specs: &[DiceSpec]) -> Option<u64> {
    specs.iter().try_fold(1u64, |acc, spec| {
        let groups = i64::from(spec.maximum()) - i64::from(spec.minimum()) + 1;
        acc.checked_mul(u64::try_from(groups).ok()?)
    })
}

/// Calls `visit` once per selection of one group from each distribution.
fn for_each_selection<'a, F>(distributions: &'a [Distribution], mut visit: F)
where
    F: FnMut(&[&'a OutcomeGroup]),
{
    let radices = distributions.iter().map(Distribution::len).collect();
    let mut counter = MixedRadixCounter::new(radices);

    let mut selected = Vec::with_capacity(distributions.len());
    while let Some(indices) = counter.next_combination() {
        selected.clear();
        selected.extend(
            distributions
                .iter()
                .zip(indices)
                .map(|(distribution, &index)| &distribution.groups()[index]),
        );
        visit(&selected);
    }
}

fn convolve(distributions: &[Distribution]) -> Option<Distribution> {
    let total_outcomes = distributions
        .iter()
        .try_fold(1u64, |acc, distribution| {
            acc.checked_mul(distribution.total_outcomes())
        })?;

    // Each occurrence is at most its total, so neither product can exceed
    // total_outcomes.
    let mut entries = Vec::new();
    for_each_selection(distributions, |selected| {
        let sum = selected.iter().map(|group| group.sum).sum();
        let occurrences = selected.iter().map(|group| group.occurrences).product();
        entries.push(OutcomeGroup::new(sum, occurrences, total_outcomes));
    });

    Some(Distribution::from_entries(entries))
}

/// Probability mass of the matching totals, each selection weighted by the
/// product of its group probabilities.
fn weighted_probability(predicate: &ComparisonPredicate, distributions: &[Distribution]) -> f64 {
    let mut probability = 0.0;
    for_each_selection(distributions, |selected| {
        let sum: i64 = selected.iter().map(|group| group.sum).sum();
        if predicate.matches(sum) {
            probability += selected
                .iter()
                .map(|group| group.probability())
                .product::<f64>();
        }
    });
    probability
}

/// Probability that the combined total of `specs` satisfies `predicate`.
///
/// Zero specs have no outcomes and therefore probability `0.0`. Counts stay
/// exact while the joint outcome space fits in `u64`; past that, each
/// selection is weighted by floating-point group probabilities instead.
pub fn probability(predicate: &ComparisonPredicate, specs: &[DiceSpec]) -> f64 {
    match specs {
        [] => 0.0,
        [spec] => outcome_distribution(spec).probability(predicate),
        _ => {
            let distributions: Vec<Distribution> =
                specs.iter().map(outcome_distribution).collect();
            match convolve(&distributions) {
                Some(distribution) => distribution.probability(predicate),
                None => weighted_probability(predicate, &distributions),
            }
        }
    }
}
