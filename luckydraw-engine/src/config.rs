use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use luckydraw_db::models::NumberRange;

use crate::error::{DrawError, Result};

/// Paramètres de la gaussienne utilisée pour choisir les indices du pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianParams {
    pub mean: f64,
    pub deviation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub main_domain: NumberRange,
    pub bonus_domain: NumberRange,
    pub main_count: usize,
    pub weighted: GaussianParams,
    pub custom: GaussianParams,
    /// Nombre maximal d'essais par boucle de rejet.
    pub max_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            main_domain: NumberRange::new(1, 70),
            bonus_domain: NumberRange::new(1, 26),
            main_count: 5,
            weighted: GaussianParams { mean: 35.0, deviation: 20.0 },
            custom: GaussianParams { mean: 35.0, deviation: 10.0 },
            max_attempts: 100_000,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.main_domain.size() == 0 {
            return Err(DrawError::InvalidConfig(format!("domaine principal vide ({})", self.main_domain)));
        }
        if self.bonus_domain.size() == 0 {
            return Err(DrawError::InvalidConfig(format!("domaine bonus vide ({})", self.bonus_domain)));
        }
        if self.main_count == 0 || self.main_count > self.main_domain.size() {
            return Err(DrawError::InvalidConfig(format!(
                "main_count={} incompatible avec le domaine {}",
                self.main_count, self.main_domain
            )));
        }
        for (name, g) in [("weighted", &self.weighted), ("custom", &self.custom)] {
            if !g.mean.is_finite() || !g.deviation.is_finite() || g.deviation <= 0.0 {
                return Err(DrawError::InvalidConfig(format!(
                    "gaussienne {} invalide (mean={}, deviation={})",
                    name, g.mean, g.deviation
                )));
            }
        }
        if self.max_attempts == 0 {
            return Err(DrawError::InvalidConfig("max_attempts doit être > 0".to_string()));
        }
        Ok(())
    }
}

pub fn save_config(config: &EngineConfig, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)
        .with_context(|| format!("Impossible d'écrire {:?}", path))?;
    Ok(())
}

pub fn load_config(path: &Path) -> anyhow::Result<EngineConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {:?}", path))?;
    let config: EngineConfig = serde_json::from_str(&json)
        .with_context(|| format!("Configuration illisible {:?}", path))?;
    config.validate()?;
    Ok(config)
}
