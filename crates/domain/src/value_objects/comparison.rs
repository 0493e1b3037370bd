//! Comparison predicates over roll sums

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    Equal,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl ComparisonOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        }
    }
}

/// Selects which sums count toward a probability, e.g. "sum >= 7".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPredicate {
    pub threshold: i32,
    pub operator: ComparisonOperator,
}

impl ComparisonPredicate {
    pub fn new(threshold: i32, operator: ComparisonOperator) -> Self {
        Self {
            threshold,
            operator,
        }
    }

    pub fn eq(threshold: i32) -> Self {
        Self::new(threshold, ComparisonOperator::Equal)
    }

    pub fn lt(threshold: i32) -> Self {
        Self::new(threshold, ComparisonOperator::Less)
    }

    pub fn le(threshold: i32) -> Self {
        Self::new(threshold, ComparisonOperator::LessOrEqual)
    }

    pub fn gt(threshold: i32) -> Self {
        Self::new(threshold, ComparisonOperator::Greater)
    }

    pub fn ge(threshold: i32) -> Self {
        Self::new(threshold, ComparisonOperator::GreaterOrEqual)
    }

    /// Whether `sum` satisfies this predicate.
    pub fn matches(&self, sum: i64) -> bool {
        let threshold = i64::from(self.threshold);
        match self.operator {
            ComparisonOperator::Equal => sum == threshold,
            ComparisonOperator::Less => sum < threshold,
            ComparisonOperator::LessOrEqual => sum <= threshold,
            ComparisonOperator::Greater => sum > threshold,
            ComparisonOperator::GreaterOrEqual => sum >= threshold,
        }
    }
}

impl fmt::Display for ComparisonPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator.symbol(), self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_each_operator() {
        assert!(ComparisonPredicate::eq(5).matches(5));
        assert!(!ComparisonPredicate::eq(5).matches(4));

        assert!(ComparisonPredicate::lt(5).matches(4));
        assert!(!ComparisonPredicate::lt(5).matches(5));

        assert!(ComparisonPredicate::le(5).matches(5));
        assert!(!ComparisonPredicate::le(5).matches(6));

        assert!(ComparisonPredicate::gt(5).matches(6));
        assert!(!ComparisonPredicate::gt(5).matches(5));

        assert!(ComparisonPredicate::ge(5).matches(5));
        assert!(!ComparisonPredicate::ge(5).matches(4));
    }

    #[test]
    fn test_matches_sums_beyond_i32() {
        let beyond = i64::from(i32::MAX) + 1;
        assert!(ComparisonPredicate::gt(i32::MAX).matches(beyond));
        assert!(!ComparisonPredicate::le(i32::MAX).matches(beyond));
    }

    #[test]
    fn test_display() {
        assert_eq!(ComparisonPredicate::ge(7).to_string(), ">= 7");
        assert_eq!(ComparisonPredicate::eq(-2).to_string(), "== -2");
    }

    #[test]
    fn test_serialization_format() {
        let json = serde_json::to_string(&ComparisonPredicate::le(3)).unwrap();
        assert_eq!(json, r#"{"threshold":3,"operator":"less_or_equal"}"#);
    }
}
