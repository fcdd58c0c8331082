use std::collections::HashSet;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::GaussianParams;
use crate::error::{DrawError, Result};

/// Choisit `count` indices distincts (base 1) dans `[1, upper]` selon une
/// loi normale arrondie à l'entier le plus proche. Les valeurs hors bornes
/// ou déjà retenues sont rejetées.
pub fn select_indices<R: Rng>(
    count: usize,
    upper: usize,
    params: GaussianParams,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if count > upper {
        return Err(DrawError::SamplingImpossible { requested: count, available: upper });
    }
    let normal = Normal::new(params.mean, params.deviation).map_err(|e| {
        DrawError::InvalidConfig(format!(
            "gaussienne (mean={}, deviation={}) : {}",
            params.mean, params.deviation, e
        ))
    })?;

    let mut indices = Vec::with_capacity(count);
    let mut seen = HashSet::with_capacity(count);
    let mut attempts = 0usize;

    while indices.len() < count {
        if attempts >= max_attempts {
            return Err(DrawError::NotConverged { attempts });
        }
        attempts += 1;
        let x = normal.sample(rng).round();
        if x < 1.0 || x > upper as f64 {
            continue;
        }
        let idx = x as usize;
        if seen.insert(idx) {
            indices.push(idx);
        }
    }

    log::trace!("{count} indices gaussiens en {attempts} essais");
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WEIGHTED: GaussianParams = GaussianParams { mean: 35.0, deviation: 20.0 };
    const CUSTOM: GaussianParams = GaussianParams { mean: 35.0, deviation: 10.0 };

    #[test]
    fn test_indices_distinct_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let idx = select_indices(5, 70, WEIGHTED, 100_000, &mut rng).unwrap();
            assert_eq!(idx.len(), 5);
            let set: HashSet<usize> = idx.iter().copied().collect();
            assert_eq!(set.len(), 5);
            assert!(idx.iter().all(|&i| (1..=70).contains(&i)));
        }
    }

    #[test]
    fn test_tighter_deviation_clusters_center() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut wide = 0.0;
        let mut tight = 0.0;
        let n = 2_000;
        for _ in 0..n {
            let w = select_indices(1, 70, WEIGHTED, 100_000, &mut rng).unwrap()[0] as f64;
            let t = select_indices(1, 70, CUSTOM, 100_000, &mut rng).unwrap()[0] as f64;
            wide += (w - 35.0).abs();
            tight += (t - 35.0).abs();
        }
        assert!(tight / n as f64 <= wide / n as f64,
            "écart moyen custom={} devrait être < pondéré={}", tight / n as f64, wide / n as f64);
    }

    #[test]
    fn test_full_selection_is_permutation() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut idx = select_indices(10, 10, GaussianParams { mean: 5.0, deviation: 3.0 }, 1_000_000, &mut rng).unwrap();
        idx.sort();
        assert_eq!(idx, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_count_above_upper() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = select_indices(6, 5, WEIGHTED, 100, &mut rng).unwrap_err();
        assert_eq!(err, DrawError::SamplingImpossible { requested: 6, available: 5 });
    }

    #[test]
    fn test_attempt_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = select_indices(5, 70, WEIGHTED, 4, &mut rng).unwrap_err();
        assert_eq!(err, DrawError::NotConverged { attempts: 4 });
    }

    #[test]
    fn test_invalid_deviation() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = GaussianParams { mean: 35.0, deviation: f64::NAN };
        assert!(matches!(select_indices(5, 70, params, 100, &mut rng), Err(DrawError::InvalidConfig(_))));
    }
}
