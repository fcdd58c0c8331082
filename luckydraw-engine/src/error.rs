use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Plus de valeurs demandées que le domaine n'en offre après exclusions.
    SamplingImpossible { requested: usize, available: usize },
    /// Le pool construit ne couvre pas exactement le domaine.
    PoolConstructionError { expected: usize, actual: usize },
    InvalidCustomSeed(String),
    /// Boucle de rejet arrêtée après `attempts` essais.
    NotConverged { attempts: usize },
    InvalidConfig(String),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::SamplingImpossible { requested, available } => write!(
                f,
                "Tirage impossible : {} numéros demandés, {} disponibles",
                requested, available
            ),
            DrawError::PoolConstructionError { expected, actual } => write!(
                f,
                "Pool invalide : {} numéros distincts attendus, {} obtenus",
                expected, actual
            ),
            DrawError::InvalidCustomSeed(msg) => write!(f, "Numéros personnalisés invalides : {}", msg),
            DrawError::NotConverged { attempts } => {
                write!(f, "Échantillonnage non convergent après {} essais", attempts)
            }
            DrawError::InvalidConfig(msg) => write!(f, "Configuration invalide : {}", msg),
        }
    }
}

impl std::error::Error for DrawError {}

pub type Result<T> = std::result::Result<T, DrawError>;
