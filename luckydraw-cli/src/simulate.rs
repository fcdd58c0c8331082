use std::collections::BTreeMap;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use luckydraw_db::models::{DrawMode, DrawResult, NumberStats};
use luckydraw_engine::{DrawEngine, DrawError};

use crate::analysis::compute_stats;

pub struct SimulationSummary {
    pub mode: String,
    pub total: usize,
    pub succeeded: usize,
    pub main_count: usize,
    /// Nombre d'échecs par type d'erreur.
    pub failures: BTreeMap<&'static str, usize>,
    pub stats: Vec<NumberStats>,
    pub sample: Option<DrawResult>,
}

fn error_kind(e: &DrawError) -> &'static str {
    match e {
        DrawError::SamplingImpossible { .. } => "SamplingImpossible",
        DrawError::PoolConstructionError { .. } => "PoolConstructionError",
        DrawError::InvalidCustomSeed(_) => "InvalidCustomSeed",
        DrawError::NotConverged { .. } => "NotConverged",
        DrawError::InvalidConfig(_) => "InvalidConfig",
    }
}

/// Lance `total` tirages indépendants en parallèle. Le tirage `i` utilise
/// la graine `seed + i`, le résultat est donc reproductible.
pub fn run_simulation(
    engine: &DrawEngine,
    mode: &DrawMode,
    total: usize,
    seed: u64,
    show_progress: bool,
) -> Result<SimulationSummary> {
    let pb = if show_progress {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        )?
        .progress_chars("=> "),
    );

    let results: Vec<Result<DrawResult, DrawError>> = (0..total)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let result = engine.draw(mode, &mut rng);
            pb.inc(1);
            if let Err(e) = &result {
                log::warn!("Tirage {i} échoué : {e}");
            }
            result
        })
        .collect();

    pb.finish_and_clear();

    let mut failures = BTreeMap::new();
    let mut draws = Vec::with_capacity(total);
    for result in results {
        match result {
            Ok(r) => draws.push(r),
            Err(e) => *failures.entry(error_kind(&e)).or_insert(0) += 1,
        }
    }

    let mains: Vec<Vec<u8>> = draws.iter().map(|d| d.main.clone()).collect();
    let stats = compute_stats(&mains, engine.config().main_domain);

    Ok(SimulationSummary {
        mode: mode.label().to_string(),
        total,
        succeeded: draws.len(),
        main_count: engine.config().main_count,
        failures,
        stats,
        sample: draws.into_iter().next(),
    })
}
