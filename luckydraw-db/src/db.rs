use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

use crate::models::{format_numbers, parse_numbers, DrawMode, DrawRecord, DrawResult};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS draws (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at  TEXT NOT NULL,
    mode        TEXT NOT NULL,
    main        TEXT NOT NULL,
    bonus       INTEGER NOT NULL
);
";

pub fn db_path() -> std::path::PathBuf {
    let mut path = std::env::current_dir().unwrap_or_default();
    path.push("data");
    path.push("luckydraw.db");
    path
}

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer le répertoire {:?}", parent))?;
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Impossible d'ouvrir la base {:?}", path))?;
    Ok(conn)
}

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("Échec de la migration")?;
    Ok(())
}

/// Enregistre un tirage et retourne son identifiant.
pub fn insert_draw(conn: &Connection, mode: &DrawMode, result: &DrawResult) -> Result<i64> {
    let created_at = chrono::Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO draws (created_at, mode, main, bonus) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            created_at,
            mode.label(),
            format_numbers(&result.main),
            result.bonus,
        ],
    ).context("Échec de l'insertion")?;
    Ok(conn.last_insert_rowid())
}

pub fn count_draws(conn: &Connection) -> Result<u32> {
    let n: u32 = conn.query_row("SELECT COUNT(*) FROM draws", [], |row| row.get(0))?;
    Ok(n)
}

pub fn fetch_last_draws(conn: &Connection, limit: u32) -> Result<Vec<DrawRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, created_at, mode, main, bonus
         FROM draws ORDER BY id DESC LIMIT ?1"
    )?;
    let rows = stmt.query_map([limit], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, u8>(4)?,
        ))
    })?.collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, created_at, mode, main, bonus)| {
            let main = parse_numbers(&main)
                .with_context(|| format!("Tirage {} corrompu", id))?;
            Ok(DrawRecord { id, created_at, mode, main, bonus })
        })
        .collect()
}

/// Numéros principaux des derniers tirages, le plus récent en premier.
pub fn fetch_last_main_numbers(conn: &Connection, limit: u32) -> Result<Vec<Vec<u8>>> {
    Ok(fetch_last_draws(conn, limit)?
        .into_iter()
        .map(|r| r.main)
        .collect())
}
