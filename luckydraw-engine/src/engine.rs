use rand::Rng;

use luckydraw_db::models::{DrawMode, DrawResult};

use crate::config::{EngineConfig, GaussianParams};
use crate::error::{DrawError, Result};
use crate::frequent::FREQUENT_NUMBERS;
use crate::gaussian::select_indices;
use crate::pool::build_pool;
use crate::sampler::UniqueSampler;

/// Moteur de tirage. Ne porte que sa configuration : chaque appel travaille
/// sur des données locales, le moteur peut donc être partagé entre threads.
#[derive(Debug, Clone)]
pub struct DrawEngine {
    config: EngineConfig,
    sampler: UniqueSampler,
}

impl Default for DrawEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        let sampler = UniqueSampler::new(config.max_attempts);
        Self { config, sampler }
    }
}

impl DrawEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let sampler = UniqueSampler::new(config.max_attempts);
        Ok(Self { config, sampler })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn draw<R: Rng>(&self, mode: &DrawMode, rng: &mut R) -> Result<DrawResult> {
        let mut main = match mode {
            DrawMode::Random => {
                self.sampler.sample(self.config.main_count, self.config.main_domain, &[], rng)?
            }
            DrawMode::Weighted => self.pool_draw(&FREQUENT_NUMBERS, self.config.weighted, rng)?,
            DrawMode::Custom(numbers) => {
                let seed = self.custom_seed(numbers)?;
                self.pool_draw(&seed, self.config.custom, rng)?
            }
        };
        main.sort_unstable();

        let bonus = self.sampler.sample(1, self.config.bonus_domain, &[], rng)?[0];

        Ok(DrawResult { main, bonus })
    }

    pub fn draw_random<R: Rng>(&self, rng: &mut R) -> Result<DrawResult> {
        self.draw(&DrawMode::Random, rng)
    }

    pub fn draw_weighted<R: Rng>(&self, rng: &mut R) -> Result<DrawResult> {
        self.draw(&DrawMode::Weighted, rng)
    }

    pub fn draw_custom<R: Rng>(&self, numbers: &[u8], rng: &mut R) -> Result<DrawResult> {
        self.draw(&DrawMode::Custom(numbers.to_vec()), rng)
    }

    /// Pool utilisé par le mode donné. `None` en mode aléatoire.
    pub fn pool_for<R: Rng>(&self, mode: &DrawMode, rng: &mut R) -> Result<Option<Vec<u8>>> {
        match mode {
            DrawMode::Random => Ok(None),
            DrawMode::Weighted => {
                build_pool(&FREQUENT_NUMBERS, self.config.main_domain, &self.sampler, rng).map(Some)
            }
            DrawMode::Custom(numbers) => {
                let seed = self.custom_seed(numbers)?;
                build_pool(&seed, self.config.main_domain, &self.sampler, rng).map(Some)
            }
        }
    }

    fn pool_draw<R: Rng>(&self, seed: &[u8], params: GaussianParams, rng: &mut R) -> Result<Vec<u8>> {
        let pool = build_pool(seed, self.config.main_domain, &self.sampler, rng)?;
        let indices = select_indices(
            self.config.main_count,
            pool.len(),
            params,
            self.config.max_attempts,
            rng,
        )?;
        Ok(indices.into_iter().map(|i| pool[i - 1]).collect())
    }

    /// Valide les numéros personnalisés et retire les doublons en gardant
    /// l'ordre de première apparition.
    fn custom_seed(&self, numbers: &[u8]) -> Result<Vec<u8>> {
        let domain = self.config.main_domain;
        if numbers.len() > domain.size() {
            return Err(DrawError::InvalidCustomSeed(format!(
                "{} numéros pour un domaine de {}",
                numbers.len(),
                domain.size()
            )));
        }
        if let Some(&n) = numbers.iter().find(|&&n| !domain.contains(n)) {
            return Err(DrawError::InvalidCustomSeed(format!("{} hors du domaine {}", n, domain)));
        }

        let mut seed = Vec::with_capacity(numbers.len());
        for &n in numbers {
            if !seed.contains(&n) {
                seed.push(n);
            }
        }
        Ok(seed)
    }
}
