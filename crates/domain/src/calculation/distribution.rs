use crate::value_objects::{DiceSpec, Distribution, OutcomeGroup, MIN_FACE};

use super::MixedRadixCounter;

/// Lazy enumeration of every raw outcome of rolling a [`DiceSpec`].
///
/// Yields the face total of each of the `sides^count` combinations exactly
/// once, before the modifier is applied. Finite and not restartable.
#[derive(Debug, Clone)]
pub struct DiceOutcomes {
    counter: MixedRadixCounter,
}

impl DiceOutcomes {
    pub fn new(spec: &DiceSpec) -> Self {
        // sides >= 1 and count >= 0 are guaranteed by construction
        let radices = vec![spec.sides() as usize; spec.count() as usize];
        Self {
            counter: MixedRadixCounter::new(radices),
        }
    }

    /// Total number of raw outcomes, or `None` past `u64`.
    pub fn combinations(&self) -> Option<u64> {
        self.counter.combinations()
    }
}

impl Iterator for DiceOutcomes {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.counter.next_combination().map(|faces| {
            faces
                .iter()
                .map(|&face| face as i64 + i64::from(MIN_FACE))
                .sum()
        })
    }
}

/// Exact distribution of one spec by full enumeration.
///
/// Groups are ordered by ascending sum and, for at least one die, cover every
/// integer in `[minimum, maximum]`. Zero dice give the single certain group
/// `{modifier, 1, 1}`.
pub fn outcome_distribution(spec: &DiceSpec) -> Distribution {
    let modifier = i64::from(spec.modifier());
    if spec.is_constant() {
        return Distribution::from_entries(vec![OutcomeGroup::new(modifier, 1, 1)]);
    }

    let outcomes = DiceOutcomes::new(spec);
    let capacity = outcomes
        .combinations()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    let mut raw_sums = Vec::with_capacity(capacity);
    raw_sums.extend(outcomes);
    raw_sums.sort_unstable();

    let total_outcomes = raw_sums.len() as u64;
    let mut groups: Vec<OutcomeGroup> = Vec::new();
    let mut run: Option<(i64, u64)> = None;
    for raw in raw_sums {
        run = match run {
            Some((value, count)) if value == raw => Some((value, count + 1)),
            Some((value, count)) => {
                groups.push(OutcomeGroup::new(value + modifier, count, total_outcomes));
                Some((raw, 1))
            }
            None => Some((raw, 1)),
        };
    }
    if let Some((value, count)) = run {
        groups.push(OutcomeGroup::new(value + modifier, count, total_outcomes));
    }

    Distribution::from_entries(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(sides: i32, count: i32, modifier: i32) -> DiceSpec {
        DiceSpec::new(sides, count, modifier).unwrap()
    }

    #[test]
    fn test_zero_dice_is_certain_modifier() {
        let distribution = outcome_distribution(&spec(6, 0, 0));
        assert_eq!(distribution.groups(), &[OutcomeGroup::new(0, 1, 1)]);

        let distribution = outcome_distribution(&spec(6, 0, -4));
        assert_eq!(distribution.groups(), &[OutcomeGroup::new(-4, 1, 1)]);
    }

    #[test]
    fn test_one_sided_dice_are_certain() {
        for count in [0, 1, 2, 5, 10] {
            let distribution = outcome_distribution(&spec(1, count, 0));
            assert_eq!(
                distribution.groups(),
                &[OutcomeGroup::new(i64::from(count), 1, 1)]
            );
        }
    }

    #[test]
    fn test_single_die_is_uniform() {
        for sides in [1, 6, 17, 100] {
            for modifier in [-17, 0, 1, 23] {
                let distribution = outcome_distribution(&spec(sides, 1, modifier));
                assert_eq!(distribution.len(), sides as usize);
                for (face, group) in (1..=sides).zip(distribution.groups()) {
                    assert_eq!(group.sum, i64::from(face + modifier));
                    assert_eq!(group.occurrences, 1);
                    assert_eq!(group.total_outcomes, sides as u64);
                }
            }
        }
    }

    #[test]
    fn test_two_d_six() {
        let distribution = outcome_distribution(&spec(6, 2, 0));
        let expected: Vec<OutcomeGroup> = (2..=12)
            .zip([1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1])
            .map(|(sum, occurrences)| OutcomeGroup::new(sum, occurrences, 36))
            .collect();
        assert_eq!(distribution.groups(), expected.as_slice());
    }

    #[test]
    fn test_three_d_four() {
        let distribution = outcome_distribution(&spec(4, 3, 0));
        let expected: Vec<OutcomeGroup> = (3..=12)
            .zip([1, 3, 6, 10, 12, 12, 10, 6, 3, 1])
            .map(|(sum, occurrences)| OutcomeGroup::new(sum, occurrences, 64))
            .collect();
        assert_eq!(distribution.groups(), expected.as_slice());
    }

    #[test]
    fn test_groups_partition_outcome_space_and_cover_range() {
        for count in [1, 2, 3, 4] {
            for sides in [1, 2, 5, 6] {
                for modifier in [-23, 0, 10] {
                    let spec = spec(sides, count, modifier);
                    let distribution = outcome_distribution(&spec);

                    let total = (sides as u64).pow(count as u32);
                    assert_eq!(distribution.total_outcomes(), total);
                    let occurrences: u64 =
                        distribution.groups().iter().map(|g| g.occurrences).sum();
                    assert_eq!(occurrences, total);
                    assert!(distribution.groups().iter().all(|g| g.total_outcomes == total));

                    let sums: Vec<i64> = distribution.groups().iter().map(|g| g.sum).collect();
                    let range: Vec<i64> =
                        (i64::from(spec.minimum())..=i64::from(spec.maximum())).collect();
                    assert_eq!(sums, range, "{}", spec);
                }
            }
        }
    }

    #[test]
    fn test_raw_sums_do_not_wrap_under_negative_modifier() {
        let spec = spec(i32::MAX, 1, i32::MIN);
        let mut outcomes = DiceOutcomes::new(&spec);
        assert_eq!(outcomes.combinations(), Some(i32::MAX as u64));
        assert_eq!(outcomes.next(), Some(1));
        assert_eq!(outcomes.next(), Some(2));
    }

    #[test]
    fn test_outcomes_are_not_restartable() {
        let mut outcomes = DiceOutcomes::new(&spec(2, 2, 0));
        let all: Vec<i64> = outcomes.by_ref().collect();
        assert_eq!(all, vec![2, 3, 3, 4]);
        assert_eq!(outcomes.next(), None);
    }
}
