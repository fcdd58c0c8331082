mod analysis;
mod display;
mod simulate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::analysis::compute_stats;
use crate::display::{
    display_history, display_pool, display_results, display_simulation, display_stats,
};
use crate::simulate::run_simulation;
use luckydraw_db::db::{count_draws, db_path, fetch_last_draws, fetch_last_main_numbers, insert_draw, migrate, open_db};
use luckydraw_db::models::{validate_draw, DrawMode};
use luckydraw_engine::DrawEngine;
use luckydraw_engine::config::{load_config, save_config, EngineConfig};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ModeArg {
    Random,
    #[default]
    Weighted,
    Custom,
}

#[derive(Parser)]
#[command(name = "luckydraw", about = "Générateur de numéros porte-bonheur")]
struct Cli {
    /// Fichier de configuration JSON du moteur
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Générer un ou plusieurs tirages
    Draw {
        /// Mode de tirage
        #[arg(short, long, default_value = "weighted")]
        mode: ModeArg,

        /// Numéros favoris (mode custom)
        #[arg(short, long, num_args = 0..)]
        numbers: Vec<u8>,

        /// Nombre de tirages
        #[arg(long, default_value = "1")]
        count: usize,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,

        /// Enregistrer les tirages dans l'historique
        #[arg(long)]
        save: bool,
    },

    /// Afficher le pool utilisé par les modes weighted et custom
    Pool {
        /// Numéros favoris (graine du pool ; pool pondéré si absent)
        #[arg(short, long, num_args = 0..)]
        numbers: Option<Vec<u8>>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Lister les derniers tirages enregistrés
    History {
        #[arg(short, long, default_value = "10")]
        last: u32,
    },

    /// Fréquences et retards sur l'historique
    Stats {
        /// Fenêtre d'analyse (nombre de tirages)
        #[arg(short, long, default_value = "100")]
        window: u32,
    },

    /// Simuler un grand nombre de tirages en parallèle
    Simulate {
        #[arg(short, long, default_value = "weighted")]
        mode: ModeArg,

        #[arg(short, long, num_args = 0..)]
        numbers: Vec<u8>,

        #[arg(short, long, default_value = "1000")]
        draws: usize,

        #[arg(long)]
        seed: Option<u64>,

        /// Nombre de numéros affichés
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Écrire la configuration par défaut
    Config {
        #[arg(short, long, default_value = "luckydraw.json")]
        output: PathBuf,
    },

    /// Afficher le chemin de la base de données
    DbPath,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Draw { mode, numbers, count, seed, save } => {
            let engine = load_engine(cli.config.as_deref())?;
            cmd_draw(&engine, build_mode(mode, numbers)?, count, seed, save)
        }
        Command::Pool { numbers, seed } => {
            let engine = load_engine(cli.config.as_deref())?;
            cmd_pool(&engine, numbers, seed)
        }
        Command::History { last } => cmd_history(last),
        Command::Stats { window } => {
            let engine = load_engine(cli.config.as_deref())?;
            cmd_stats(&engine, window)
        }
        Command::Simulate { mode, numbers, draws, seed, top } => {
            let engine = load_engine(cli.config.as_deref())?;
            let seed = seed.unwrap_or_else(rand::random);
            let summary = run_simulation(&engine, &build_mode(mode, numbers)?, draws, seed, true)?;
            display_simulation(&summary, top);
            Ok(())
        }
        Command::Config { output } => {
            save_config(&EngineConfig::default(), &output)?;
            log::info!("Configuration écrite dans {}", output.display());
            println!("{}", output.display());
            Ok(())
        }
        Command::DbPath => {
            println!("{}", db_path().display());
            Ok(())
        }
    }
}

fn load_engine(path: Option<&Path>) -> Result<DrawEngine> {
    let config = match path {
        Some(p) => load_config(p)?,
        None => EngineConfig::default(),
    };
    Ok(DrawEngine::new(config)?)
}

fn build_mode(mode: ModeArg, numbers: Vec<u8>) -> Result<DrawMode> {
    match mode {
        ModeArg::Random if numbers.is_empty() => Ok(DrawMode::Random),
        ModeArg::Weighted if numbers.is_empty() => Ok(DrawMode::Weighted),
        ModeArg::Custom => Ok(DrawMode::Custom(numbers)),
        _ => bail!("--numbers n'est accepté qu'en mode custom"),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn open_history() -> Result<luckydraw_db::rusqlite::Connection> {
    let conn = open_db(&db_path())?;
    migrate(&conn)?;
    Ok(conn)
}

fn cmd_draw(engine: &DrawEngine, mode: DrawMode, count: usize, seed: Option<u64>, save: bool) -> Result<()> {
    let mut rng = make_rng(seed);
    let results = (0..count)
        .map(|_| engine.draw(&mode, &mut rng))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Tirage {} impossible", mode))?;

    display_results(&results, mode.label());

    if save {
        let conn = open_history()?;
        let c = engine.config();
        for result in &results {
            validate_draw(result, c.main_domain, c.bonus_domain, c.main_count)?;
            insert_draw(&conn, &mode, result)?;
        }
        println!("{} tirage(s) enregistré(s).", results.len());
    }
    Ok(())
}

fn cmd_pool(engine: &DrawEngine, numbers: Option<Vec<u8>>, seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);
    let mode = match numbers {
        Some(n) => DrawMode::Custom(n),
        None => DrawMode::Weighted,
    };
    let seed_len = match &mode {
        DrawMode::Custom(n) => n.iter().collect::<std::collections::HashSet<_>>().len(),
        _ => luckydraw_engine::frequent::FREQUENT_NUMBERS.len(),
    };
    let pool = engine
        .pool_for(&mode, &mut rng)?
        .context("Pas de pool en mode aléatoire")?;
    display_pool(&pool, seed_len);
    Ok(())
}

fn cmd_history(last: u32) -> Result<()> {
    let conn = open_history()?;
    if count_draws(&conn)? == 0 {
        println!("Historique vide. Lancez d'abord : luckydraw draw --save");
        return Ok(());
    }
    display_history(&fetch_last_draws(&conn, last)?);
    Ok(())
}

fn cmd_stats(engine: &DrawEngine, window: u32) -> Result<()> {
    let conn = open_history()?;
    let n = count_draws(&conn)?;
    if n == 0 {
        println!("Historique vide. Lancez d'abord : luckydraw draw --save");
        return Ok(());
    }
    let effective_window = window.min(n);
    let draws = fetch_last_main_numbers(&conn, effective_window)?;
    let stats = compute_stats(&draws, engine.config().main_domain);
    display_stats(&stats, effective_window);
    Ok(())
}
