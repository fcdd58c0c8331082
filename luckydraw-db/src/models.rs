use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Intervalle fermé `[min, max]` de numéros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: u8,
    pub max: u8,
}

impl NumberRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    pub fn contains(&self, n: u8) -> bool {
        n >= self.min && n <= self.max
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<u8> {
        self.min..=self.max
    }
}

impl std::fmt::Display for NumberRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Mode de tirage. `Custom` porte les numéros favoris de l'utilisateur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawMode {
    Random,
    Weighted,
    Custom(Vec<u8>),
}

impl DrawMode {
    pub fn label(&self) -> &'static str {
        match self {
            DrawMode::Random => "random",
            DrawMode::Weighted => "weighted",
            DrawMode::Custom(_) => "custom",
        }
    }
}

impl std::fmt::Display for DrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Résultat d'un tirage : numéros principaux triés + numéro bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub main: Vec<u8>,
    pub bonus: u8,
}

/// Tirage conservé dans l'historique local.
#[derive(Debug, Clone)]
pub struct DrawRecord {
    pub id: i64,
    pub created_at: String,
    pub mode: String,
    pub main: Vec<u8>,
    pub bonus: u8,
}

#[derive(Debug, Clone)]
pub struct NumberStats {
    pub number: u8,
    pub frequency: u32,
    pub gap: u32,
}

pub fn validate_draw(
    result: &DrawResult,
    main_domain: NumberRange,
    bonus_domain: NumberRange,
    main_count: usize,
) -> Result<()> {
    if result.main.len() != main_count {
        bail!(
            "{} numéros principaux attendus, {} reçus",
            main_count,
            result.main.len()
        );
    }
    for &n in &result.main {
        if !main_domain.contains(n) {
            bail!("Numéro {} hors limites ({})", n, main_domain);
        }
    }
    for w in result.main.windows(2) {
        if w[0] == w[1] {
            bail!("Numéro en double : {}", w[0]);
        }
        if w[0] > w[1] {
            bail!("Numéros non triés : {} avant {}", w[0], w[1]);
        }
    }
    if !bonus_domain.contains(result.bonus) {
        bail!("Bonus {} hors limites ({})", result.bonus, bonus_domain);
    }
    Ok(())
}

pub fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn parse_numbers(s: &str) -> Result<Vec<u8>> {
    s.split_whitespace()
        .map(|t| {
            t.parse::<u8>()
                .map_err(|e| anyhow::anyhow!("Numéro invalide '{}': {}", t, e))
        })
        .collect()
}
