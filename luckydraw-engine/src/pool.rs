//! Construction du pool : une permutation du domaine principal dont les
//! premières positions sont occupées par la graine (numéros fréquents ou
//! numéros personnalisés), suivies de deux lots tirés sans remise.

use std::collections::HashSet;

use rand::Rng;

use luckydraw_db::models::NumberRange;

use crate::error::{DrawError, Result};
use crate::sampler::UniqueSampler;

/// Taille de chacun des deux lots aléatoires qui complètent la graine.
///
/// `moitié du domaine - ceil(seed_len / 2)`. Pour une graine de longueur
/// impaire, la somme `seed_len + 2 * lot` vaut `|domaine| - 1` et le pool
/// est alors rejeté par [`check_pool`]. Ce découpage est conservé tel quel :
/// la distribution des tirages en dépend.
pub fn first_batch_size(seed_len: usize, domain: NumberRange) -> usize {
    let half = domain.size() / 2;
    let claimed = if seed_len % 2 == 0 {
        seed_len / 2
    } else {
        (seed_len + 1) / 2
    };
    half.saturating_sub(claimed)
}

pub fn build_pool<R: Rng>(
    seed: &[u8],
    domain: NumberRange,
    sampler: &UniqueSampler,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let batch = first_batch_size(seed.len(), domain);

    let mut pool = Vec::with_capacity(domain.size());
    pool.extend_from_slice(seed);

    let batch_a = sampler.sample(batch, domain, &pool, rng)?;
    pool.extend(batch_a);

    let batch_b = sampler.sample(batch, domain, &pool, rng)?;
    pool.extend(batch_b);

    check_pool(&pool, domain)?;
    log::debug!("Pool construit : graine={} lots={}x2", seed.len(), batch);
    Ok(pool)
}

/// Le pool doit contenir chaque numéro du domaine exactement une fois.
pub fn check_pool(pool: &[u8], domain: NumberRange) -> Result<()> {
    let expected = domain.size();
    let distinct: HashSet<u8> = pool.iter().copied().filter(|&n| domain.contains(n)).collect();
    if pool.len() != expected || distinct.len() != expected {
        return Err(DrawError::PoolConstructionError {
            expected,
            actual: distinct.len(),
        });
    }
    Ok(())
}
