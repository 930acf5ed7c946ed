//! Train/test fold construction.
//!
//! Given an already-shuffled instance pool and K seeds, the pool is cut
//! into K contiguous folds of `pool_len / K` instances. Fold i is the
//! test set for trial i; the union of the other folds is its training
//! set. Remainder instances past `fold_size * K` belong to neither side,
//! keeping every fold — and therefore every trajectory — the same length.

use sim_core::{Result, SimError};
use types::LabeledInstance;

/// One trial's train/test split.
#[derive(Debug, Clone)]
pub struct FoldSplit {
    /// All instances outside the test fold.
    pub train: Vec<LabeledInstance>,
    /// The contiguous test fold.
    pub test: Vec<LabeledInstance>,
}

/// Cut a shuffled pool into `num_folds` equal-sized splits.
///
/// Errors with `NoSeeds` for zero folds and `EmptyFold` when the pool is
/// smaller than the fold count.
pub fn partition(pool: &[LabeledInstance], num_folds: usize) -> Result<Vec<FoldSplit>> {
    if num_folds == 0 {
        return Err(SimError::NoSeeds);
    }
    let fold_size = pool.len() / num_folds;
    if fold_size == 0 {
        return Err(SimError::EmptyFold {
            pool: pool.len(),
            folds: num_folds,
        });
    }

    let used = fold_size * num_folds;
    let splits = (0..num_folds)
        .map(|fold| {
            let start = fold * fold_size;
            let end = start + fold_size;
            let test = pool[start..end].to_vec();
            let train = pool[..used]
                .iter()
                .enumerate()
                .filter(|(index, _)| *index < start || *index >= end)
                .map(|(_, instance)| instance.clone())
                .collect();
            FoldSplit { train, test }
        })
        .collect();
    Ok(splits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use types::Label;

    fn pool(len: usize) -> Vec<LabeledInstance> {
        (0..len)
            .map(|index| {
                let label = if index % 2 == 0 { Label::Good } else { Label::Bad };
                LabeledInstance::new(vec![format!("f{index}")], label)
            })
            .collect()
    }

    #[test]
    fn test_hundred_instances_four_folds() {
        let pool = pool(100);
        let splits = partition(&pool, 4).unwrap();
        assert_eq!(splits.len(), 4);

        let mut seen: HashSet<&LabeledInstance> = HashSet::new();
        for split in &splits {
            assert_eq!(split.test.len(), 25);
            assert_eq!(split.train.len(), 75);
            for instance in &split.test {
                // Folds are pairwise disjoint.
                assert!(seen.insert(instance));
                // No test instance leaks into its own training set.
                assert!(!split.train.contains(instance));
            }
        }
        // The folds' union is the whole pool.
        assert_eq!(seen.len(), 100);
        assert_eq!(seen, pool.iter().collect());
    }

    #[test]
    fn test_remainder_excluded_from_both_sides() {
        // 10 instances, 3 folds: fold size 3, one leftover instance.
        let pool = pool(10);
        let splits = partition(&pool, 3).unwrap();
        let leftover = &pool[9];
        for split in &splits {
            assert_eq!(split.test.len(), 3);
            assert_eq!(split.train.len(), 6);
            assert!(!split.test.contains(leftover));
            assert!(!split.train.contains(leftover));
        }
    }

    #[test]
    fn test_folds_are_contiguous_and_ordered() {
        let pool = pool(8);
        let splits = partition(&pool, 2).unwrap();
        assert_eq!(splits[0].test, pool[0..4].to_vec());
        assert_eq!(splits[1].test, pool[4..8].to_vec());
        assert_eq!(splits[1].train, pool[0..4].to_vec());
    }

    #[test]
    fn test_zero_folds_rejected() {
        assert_eq!(partition(&pool(10), 0).unwrap_err(), SimError::NoSeeds);
    }

    #[test]
    fn test_pool_smaller_than_fold_count_rejected() {
        assert_eq!(
            partition(&pool(3), 4).unwrap_err(),
            SimError::EmptyFold { pool: 3, folds: 4 }
        );
    }
}
