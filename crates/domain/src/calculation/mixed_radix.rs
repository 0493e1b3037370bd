/// Odometer over digit vectors where each position has its own radix.
///
/// Position `i` ranges over `0..radices[i]`. The last position is the least
/// significant and turns fastest; on overflow it resets to zero and carries
/// into the position before it. Every combination is visited exactly once,
/// then the counter stays exhausted. With no positions there is exactly one
/// (empty) combination; any zero radix means there are none.
#[derive(Debug, Clone)]
pub struct MixedRadixCounter {
    radices: Vec<usize>,
    digits: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl MixedRadixCounter {
    pub fn new(radices: Vec<usize>) -> Self {
        let exhausted = radices.contains(&0);
        Self {
            digits: vec![0; radices.len()],
            radices,
            started: false,
            exhausted,
        }
    }

    /// Number of combinations, or `None` if it does not fit in `u64`.
    pub fn combinations(&self) -> Option<u64> {
        self.radices
            .iter()
            .try_fold(1u64, |acc, &radix| acc.checked_mul(radix as u64))
    }

    /// Step to the next combination and return it.
    ///
    /// The first call yields the all-zero combination.
    pub fn next_combination(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.increment() {
            self.exhausted = true;
            return None;
        }
        Some(&self.digits)
    }

    /// Returns false when the most significant position overflowed.
    fn increment(&mut self) -> bool {
        for (digit, &radix) in self.digits.iter_mut().zip(&self.radices).rev() {
            if *digit + 1 < radix {
                *digit += 1;
                return true;
            }
            *digit = 0;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_all(mut counter: MixedRadixCounter) -> Vec<Vec<usize>> {
        let mut seen = Vec::new();
        while let Some(digits) = counter.next_combination() {
            seen.push(digits.to_vec());
        }
        seen
    }

    #[test]
    fn test_visits_every_combination_in_odometer_order() {
        let seen = collect_all(MixedRadixCounter::new(vec![2, 3]));
        assert_eq!(
            seen,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn test_no_positions_yield_one_empty_combination() {
        let seen = collect_all(MixedRadixCounter::new(vec![]));
        assert_eq!(seen, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_zero_radix_yields_nothing() {
        assert!(collect_all(MixedRadixCounter::new(vec![3, 0, 2])).is_empty());
    }

    #[test]
    fn test_stays_exhausted() {
        let mut counter = MixedRadixCounter::new(vec![1]);
        assert!(counter.next_combination().is_some());
        assert!(counter.next_combination().is_none());
        assert!(counter.next_combination().is_none());
    }

    #[test]
    fn test_combinations() {
        assert_eq!(MixedRadixCounter::new(vec![4, 3, 3]).combinations(), Some(36));
        assert_eq!(MixedRadixCounter::new(vec![]).combinations(), Some(1));
        assert_eq!(
            MixedRadixCounter::new(vec![usize::MAX, usize::MAX, usize::MAX]).combinations(),
            None
        );
    }
}
