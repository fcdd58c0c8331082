use luckydraw_db::models::{NumberRange, NumberStats};

/// Fréquence et retard de chaque numéro. `draws[0]` = tirage le plus récent.
pub fn compute_stats(draws: &[Vec<u8>], domain: NumberRange) -> Vec<NumberStats> {
    let mut stats: Vec<NumberStats> = domain
        .iter()
        .map(|n| NumberStats {
            number: n,
            frequency: 0,
            gap: 0,
        })
        .collect();
    let mut seen = vec![false; stats.len()];

    for (i, numbers) in draws.iter().enumerate() {
        for &n in numbers {
            if !domain.contains(n) {
                continue;
            }
            let idx = (n - domain.min) as usize;
            stats[idx].frequency += 1;
            if !seen[idx] {
                seen[idx] = true;
                stats[idx].gap = i as u32;
            }
        }
    }

    for (stat, &was_seen) in stats.iter_mut().zip(&seen) {
        if !was_seen {
            stat.gap = draws.len() as u32;
        }
    }

    stats
}
