//! End-to-end draw scenarios with the default configuration
//! (main 1-70, bonus 1-26, 5 numbers).

use rand::SeedableRng;
use rand::rngs::StdRng;

use luckydraw_db::models::{validate_draw, DrawMode, NumberRange};
use luckydraw_engine::config::EngineConfig;
use luckydraw_engine::frequent::FREQUENT_NUMBERS;
use luckydraw_engine::pool::first_batch_size;
use luckydraw_engine::{DrawEngine, DrawError};

#[test]
fn thousand_weighted_draws_all_valid() {
    let engine = DrawEngine::default();
    let mut rng = StdRng::seed_from_u64(20_240_101);
    let mut errors = 0;

    for _ in 0..1_000 {
        match engine.draw_weighted(&mut rng) {
            Ok(result) => {
                assert_eq!(result.main.len(), 5);
                assert!(result.main.windows(2).all(|w| w[0] < w[1]), "{:?}", result.main);
                assert!(result.main.iter().all(|n| (1..=70).contains(n)));
                assert!((1..=26).contains(&result.bonus));
            }
            Err(_) => errors += 1,
        }
    }

    assert_eq!(errors, 0);
}

#[test]
fn custom_seed_of_71_entries_rejected() {
    let engine = DrawEngine::default();
    let mut rng = StdRng::seed_from_u64(1);
    let seed: Vec<u8> = (0..71).map(|i| (i % 70) as u8 + 1).collect();

    let err = engine.draw_custom(&seed, &mut rng).unwrap_err();
    assert!(matches!(err, DrawError::InvalidCustomSeed(_)), "{err}");
}

#[test]
fn empty_custom_seed_uses_full_split() {
    assert_eq!(first_batch_size(0, NumberRange::new(1, 70)), 35);

    let engine = DrawEngine::default();
    let mut rng = StdRng::seed_from_u64(5);
    let pool = engine.pool_for(&DrawMode::Custom(vec![]), &mut rng).unwrap().unwrap();
    assert_eq!(pool.len(), 70);

    let result = engine.draw_custom(&[], &mut rng).unwrap();
    let c = engine.config();
    validate_draw(&result, c.main_domain, c.bonus_domain, c.main_count).unwrap();
}

#[test]
fn weighted_draws_are_independent() {
    let engine = DrawEngine::default();
    let mut rng = StdRng::seed_from_u64(99);
    let c = engine.config();

    let draws: Vec<_> = (0..20).map(|_| engine.draw_weighted(&mut rng).unwrap()).collect();
    for d in &draws {
        validate_draw(d, c.main_domain, c.bonus_domain, c.main_count).unwrap();
    }
    // 20 tirages identiques seraient le signe d'un état partagé
    assert!(draws.iter().any(|d| d != &draws[0]));
}

#[test]
fn weighted_pool_starts_with_frequent_numbers() {
    let engine = DrawEngine::default();
    let mut rng = StdRng::seed_from_u64(3);
    let pool = engine.pool_for(&DrawMode::Weighted, &mut rng).unwrap().unwrap();
    assert_eq!(&pool[..24], &FREQUENT_NUMBERS[..]);
}

#[test]
fn random_mode_is_uniform_over_domain() {
    let engine = DrawEngine::default();
    let mut rng = StdRng::seed_from_u64(17);
    let mut counts = [0u32; 71];
    for _ in 0..5_000 {
        for n in engine.draw_random(&mut rng).unwrap().main {
            counts[n as usize] += 1;
        }
    }
    // 25 000 numéros, ~357 par numéro
    assert!(counts[1..].iter().all(|&c| c > 200 && c < 550), "{:?}", &counts[1..]);
}

#[test]
fn concurrent_draws_share_engine() {
    let engine = std::sync::Arc::new(DrawEngine::new(EngineConfig::default()).unwrap());
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(t);
                (0..100).all(|_| engine.draw_weighted(&mut rng).is_ok())
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
