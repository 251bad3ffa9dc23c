use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use phraseforge::api::{Harvest, SizedCandidates};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn extraction(word: &str, documents: usize, batches: &[SizedCandidates]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("N").add_attribute(Attribute::Bold),
        Cell::new("Candidates").fg(Color::Cyan),
        Cell::new("Distinct"),
    ]);

    for batch in batches {
        let mut distinct: Vec<String> = batch.candidates.iter().map(|c| c.text()).collect();
        distinct.sort_unstable();
        distinct.dedup();

        table.add_row(vec![
            Cell::new(batch.ngram_size).add_attribute(Attribute::Bold),
            Cell::new(batch.candidates.len()).fg(Color::Cyan),
            Cell::new(distinct.len()),
        ]);
    }
    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("\n🔎 '{}' across {} documents", word, documents);
    println!("{}", table);
}

pub fn candidates(batches: &[SizedCandidates], limit: usize) {
    for batch in batches {
        for c in batch.candidates.iter().take(limit) {
            println!("{}", c);
        }
    }
}

pub fn rankings(harvest: &Harvest, top: usize) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("N-gram").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Green),
    ]);

    for (i, entry) in harvest.rankings.iter().take(top).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.ngram).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3e}", entry.score)).fg(Color::Green),
        ]);
    }
    for i in [0, 2] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let extracted: Vec<String> = harvest
        .extracted
        .iter()
        .map(|(n, count)| format!("{}x {}-gram", count, n))
        .collect();

    println!(
        "\n=== 🏆 COMMON N-GRAMS: '{}' ({} documents; {}) ===",
        harvest.target,
        harvest.documents,
        extracted.join(", ")
    );
    println!("{}", table);
}
