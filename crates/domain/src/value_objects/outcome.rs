//! Outcome groups and the distributions built from them

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ComparisonPredicate;

/// All enumerated outcomes sharing one final sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeGroup {
    /// Final sum, modifier included
    pub sum: i64,
    /// Number of raw outcomes producing this sum
    pub occurrences: u64,
    /// Size of the whole outcome space the group was counted in
    pub total_outcomes: u64,
}

impl OutcomeGroup {
    pub fn new(sum: i64, occurrences: u64, total_outcomes: u64) -> Self {
        Self {
            sum,
            occurrences,
            total_outcomes,
        }
    }

    /// Share of the outcome space falling into this group.
    pub fn probability(&self) -> f64 {
        self.occurrences as f64 / self.total_outcomes as f64
    }
}

/// Why a list of groups does not form a [`Distribution`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistributionError {
    #[error("Sums must be distinct and ascending: {sum} follows {previous}")]
    Unordered { previous: i64, sum: i64 },
    #[error("Mixed outcome totals: {found} after {expected}")]
    MixedTotals { expected: u64, found: u64 },
    #[error("Group with sum {sum} has no occurrences")]
    EmptyGroup { sum: i64 },
    #[error("Occurrences do not add up to the {total_outcomes} total outcomes")]
    Incomplete { total_outcomes: u64 },
}

/// An exact distribution: groups with distinct sums, ordered ascending.
///
/// Every group carries the same `total_outcomes`, and the occurrences of
/// all groups add up to it. Deserialization rejects groups breaking this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDistribution")]
pub struct Distribution {
    groups: Vec<OutcomeGroup>,
}

impl Distribution {
    /// Merge an unordered list of outcome entries into a distribution.
    ///
    /// Entries are sorted by sum and runs of equal sums are collapsed by
    /// adding their occurrences. The total outcome count is carried over
    /// from the entries unchanged, so all entries must share it.
    pub(crate) fn from_entries(mut entries: Vec<OutcomeGroup>) -> Self {
        entries.sort_by_key(|entry| entry.sum);

        let mut groups: Vec<OutcomeGroup> = Vec::with_capacity(entries.len());
        for entry in entries {
            match groups.last_mut() {
                Some(current) if current.sum == entry.sum => {
                    current.occurrences += entry.occurrences;
                }
                _ => groups.push(entry),
            }
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[OutcomeGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<OutcomeGroup> {
        self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Size of the outcome space, or zero for an empty distribution.
    pub fn total_outcomes(&self) -> u64 {
        self.groups.first().map_or(0, |group| group.total_outcomes)
    }

    /// Probability mass of the groups whose sum satisfies `predicate`.
    pub fn probability(&self, predicate: &ComparisonPredicate) -> f64 {
        self.groups
            .iter()
            .filter(|group| predicate.matches(group.sum))
            .map(OutcomeGroup::probability)
            .sum()
    }
}

#[derive(Deserialize)]
struct RawDistribution {
    groups: Vec<OutcomeGroup>,
}

impl TryFrom<RawDistribution> for Distribution {
    type Error = DistributionError;

    fn try_from(raw: RawDistribution) -> Result<Self, Self::Error> {
        let Some(first) = raw.groups.first() else {
            return Ok(Self::default());
        };
        let total_outcomes = first.total_outcomes;

        let mut occurrences = 0u64;
        let mut previous: Option<i64> = None;
        for group in &raw.groups {
            if let Some(previous) = previous.filter(|&previous| previous >= group.sum) {
                return Err(DistributionError::Unordered {
                    previous,
                    sum: group.sum,
                });
            }
            if group.total_outcomes != total_outcomes {
                return Err(DistributionError::MixedTotals {
                    expected: total_outcomes,
                    found: group.total_outcomes,
                });
            }
            if group.occurrences == 0 {
                return Err(DistributionError::EmptyGroup { sum: group.sum });
            }
            occurrences = occurrences
                .checked_add(group.occurrences)
                .ok_or(DistributionError::Incomplete { total_outcomes })?;
            previous = Some(group.sum);
        }
        if occurrences != total_outcomes {
            return Err(DistributionError::Incomplete { total_outcomes });
        }

        Ok(Self { groups: raw.groups })
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a OutcomeGroup;
    type IntoIter = std::slice::Iter<'a, OutcomeGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
