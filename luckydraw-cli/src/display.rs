use comfy_table::{Table, ContentArrangement, presets::UTF8_FULL, Cell, Color};

use luckydraw_db::models::{format_numbers, DrawRecord, DrawResult, NumberStats};

use crate::simulate::SimulationSummary;

fn numbers_str(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn display_results(results: &[DrawResult], mode: &str) {
    println!("\n🎲 Tirage ({mode})\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Numéros", "Bonus"]);

    for (i, result) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(numbers_str(&result.main)),
            Cell::new(format!("{:2}", result.bonus)).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

pub fn display_pool(pool: &[u8], seed_len: usize) {
    println!("\nPool ({} numéros, graine = {} premiers)\n", pool.len(), seed_len);
    for (i, chunk) in pool.chunks(10).enumerate() {
        println!("  {:2}-{:2} : {}", i * 10 + 1, i * 10 + chunk.len(), numbers_str(chunk));
    }
}

pub fn display_history(records: &[DrawRecord]) {
    if records.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Date", "Mode", "Numéros", "Bonus"]);

    for record in records {
        table.add_row(vec![
            &record.id.to_string(),
            &record.created_at,
            &record.mode,
            &numbers_str(&record.main),
            &record.bonus.to_string(),
        ]);
    }

    println!("{table}");
}

pub fn display_stats(stats: &[NumberStats], window: u32) {
    println!("\n📊 Statistiques sur les {} derniers tirages\n", window);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence", "Retard"]);

    let mut sorted = stats.to_vec();
    sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.number.cmp(&b.number)));

    for stat in &sorted {
        table.add_row(vec![
            &format!("{:2}", stat.number),
            &stat.frequency.to_string(),
            &stat.gap.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_simulation(summary: &SimulationSummary, top: usize) {
    println!(
        "\nSimulation {} : {} tirages, {} réussis, {} échecs",
        summary.mode,
        summary.total,
        summary.succeeded,
        summary.total - summary.succeeded,
    );
    for (kind, count) in &summary.failures {
        println!("  {kind:<24} {count}");
    }

    if summary.succeeded == 0 {
        return;
    }

    let expected = summary.succeeded as f64 * summary.main_count as f64 / summary.stats.len() as f64;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Sorties", "Écart / uniforme"]);

    let mut sorted = summary.stats.clone();
    sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.number.cmp(&b.number)));

    for stat in sorted.iter().take(top) {
        let deviation = (stat.frequency as f64 - expected) / expected;
        let color = if deviation > 0.3 {
            Color::Green
        } else if deviation < -0.3 {
            Color::Red
        } else {
            Color::White
        };
        table.add_row(vec![
            Cell::new(format!("{:2}", stat.number)),
            Cell::new(stat.frequency),
            Cell::new(format!("{:+.1}%", deviation * 100.0)).fg(color),
        ]);
    }
    println!("{table}");
    if let Some(sample) = &summary.sample {
        println!("Exemple : {} + {}", format_numbers(&sample.main), sample.bonus);
    }
}
