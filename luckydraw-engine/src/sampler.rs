use std::collections::HashSet;

use rand::Rng;

use luckydraw_db::models::NumberRange;

use crate::error::{DrawError, Result};

/// Tirage de `count` valeurs distinctes dans un intervalle, par rejet.
#[derive(Debug, Clone, Copy)]
pub struct UniqueSampler {
    pub max_attempts: usize,
}

impl UniqueSampler {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Retourne `count` valeurs distinctes de `range` absentes de `exclude`,
    /// dans l'ordre où elles ont été tirées.
    pub fn sample<R: Rng>(
        &self,
        count: usize,
        range: NumberRange,
        exclude: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let excluded: HashSet<u8> = exclude.iter().copied().filter(|&n| range.contains(n)).collect();
        let available = range.size() - excluded.len();
        if count > available {
            return Err(DrawError::SamplingImpossible { requested: count, available });
        }

        let mut chosen = Vec::with_capacity(count);
        let mut seen = HashSet::with_capacity(count);
        let mut attempts = 0usize;

        while chosen.len() < count {
            if attempts >= self.max_attempts {
                return Err(DrawError::NotConverged { attempts });
            }
            attempts += 1;
            let n = rng.random_range(range.min..=range.max);
            if excluded.contains(&n) || !seen.insert(n) {
                continue;
            }
            chosen.push(n);
        }

        log::trace!("{count} valeurs tirées dans {range} en {attempts} essais");
        Ok(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const DOMAIN: NumberRange = NumberRange::new(1, 70);

    fn sampler() -> UniqueSampler {
        UniqueSampler::new(100_000)
    }

    #[test]
    fn test_sample_exact_count_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = sampler().sample(35, DOMAIN, &[], &mut rng).unwrap();
        assert_eq!(values.len(), 35);
        let set: HashSet<u8> = values.iter().copied().collect();
        assert_eq!(set.len(), 35);
        assert!(values.iter().all(|&v| DOMAIN.contains(v)));
    }

    #[test]
    fn test_sample_respects_exclusion() {
        let mut rng = StdRng::seed_from_u64(7);
        let exclude: Vec<u8> = (1..=60).collect();
        let values = sampler().sample(10, DOMAIN, &exclude, &mut rng).unwrap();
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, (61..=70).collect::<Vec<u8>>());
    }

    #[test]
    fn test_sample_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sampler().sample(0, DOMAIN, &[], &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_sample_impossible() {
        let mut rng = StdRng::seed_from_u64(1);
        let exclude: Vec<u8> = (1..=66).collect();
        let err = sampler().sample(5, DOMAIN, &exclude, &mut rng).unwrap_err();
        assert_eq!(err, DrawError::SamplingImpossible { requested: 5, available: 4 });
    }

    #[test]
    fn test_exclusion_outside_range_ignored() {
        let mut rng = StdRng::seed_from_u64(3);
        let bonus = NumberRange::new(1, 12);
        // 13..=70 ne réduit pas le domaine bonus
        let exclude: Vec<u8> = (13..=70).collect();
        let values = sampler().sample(12, bonus, &exclude, &mut rng).unwrap();
        assert_eq!(values.len(), 12);
    }

    #[test]
    fn test_duplicate_exclusions_counted_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = NumberRange::new(1, 5);
        let values = sampler().sample(4, range, &[2, 2, 2], &mut rng).unwrap();
        assert!(!values.contains(&2));
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn test_attempt_cap() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = UniqueSampler::new(3).sample(5, DOMAIN, &[], &mut rng).unwrap_err();
        assert_eq!(err, DrawError::NotConverged { attempts: 3 });
    }

    #[test]
    fn test_seed_determinism() {
        let a = sampler().sample(10, DOMAIN, &[], &mut StdRng::seed_from_u64(99)).unwrap();
        let b = sampler().sample(10, DOMAIN, &[], &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
