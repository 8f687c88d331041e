use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use wordseal::catalog::{Orientation, PuzzleCatalog};
use wordseal::engine::{PuzzleEngine, SessionState};
use wordseal::score::{format_duration, ScoreRecord};

pub fn print_secret_phrase(phrase: &[Option<char>]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cells: Vec<Cell> = phrase
        .iter()
        .map(|c| match c {
            Some(ch) => Cell::new(ch)
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            None => Cell::new("?")
                .fg(Color::DarkGrey)
                .set_alignment(CellAlignment::Center),
        })
        .collect();
    table.add_row(cells);

    println!("\nSecret Phrase");
    println!("{}", table);
}

pub fn print_board(engine: &PuzzleEngine, state: &SessionState) {
    let catalog = engine.catalog();
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Id"),
        Cell::new("Dir"),
        Cell::new("Answer").add_attribute(Attribute::Bold),
        Cell::new("Clue"),
    ]);

    for orientation in [Orientation::Across, Orientation::Down] {
        for word in catalog.by_orientation(orientation) {
            let text = engine.word_text(state, &word.id).unwrap_or_default();
            // Mark the letter that feeds the secret phrase.
            let marked: String = text
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if i == word.secret_letter_index {
                        format!("[{}]", c)
                    } else {
                        format!(" {} ", c)
                    }
                })
                .collect();

            table.add_row(vec![
                Cell::new(word.display_order).set_alignment(CellAlignment::Right),
                Cell::new(&word.id),
                Cell::new(word.orientation),
                Cell::new(marked),
                Cell::new(&word.clue),
            ]);
        }
    }
    println!("{}", table);

    let (filled, total) = engine.progress(state);
    println!(
        "⏱  {}   ✏️  {}/{} letters   ❌ {} mistakes",
        format_duration(engine.elapsed_seconds(state)),
        filled,
        total,
        state.mistake_count()
    );
}

pub fn print_leaderboard(ranked: &[ScoreRecord], current: Option<&ScoreRecord>, chart_limit: usize) {
    if ranked.is_empty() {
        println!("\nNo records found yet.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Time").fg(Color::Green),
        Cell::new("Mistakes"),
        Cell::new("Date"),
        Cell::new("Chart"),
    ]);

    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let slowest = ranked
        .iter()
        .take(chart_limit)
        .map(|r| r.time_seconds)
        .max()
        .unwrap_or(0)
        .max(1);

    // Only the first matching row is "you".
    let mut you_marked = false;
    for (idx, r) in ranked.iter().enumerate() {
        let is_you = !you_marked && current.is_some_and(|c| c == r);
        you_marked |= is_you;

        let name = if is_you {
            format!("{} (YOU)", r.name)
        } else {
            r.name.clone()
        };

        let bar = if idx < chart_limit {
            let width = ((r.time_seconds as f64 / slowest as f64) * 20.0).ceil() as usize;
            "█".repeat(width.max(1))
        } else {
            String::new()
        };

        let rank = if idx == 0 {
            "🏆 #1".to_string()
        } else {
            format!("#{}", idx + 1)
        };

        let mut name_cell = Cell::new(name);
        if is_you {
            name_cell = name_cell.fg(Color::Yellow).add_attribute(Attribute::Bold);
        }

        table.add_row(vec![
            Cell::new(rank),
            name_cell,
            Cell::new(format_duration(r.time_seconds)).fg(Color::Green),
            Cell::new(r.mistakes),
            Cell::new(r.date.format("%Y-%m-%d")),
            Cell::new(bar).fg(Color::Cyan),
        ]);
    }

    println!("\n🏆 === LEADERBOARD === 🏆");
    println!("{}", table);
}

pub fn print_catalog_report(catalog: &PuzzleCatalog) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Id"),
        Cell::new("Display"),
        Cell::new("Dir"),
        Cell::new("Len"),
        Cell::new("Secret").fg(Color::Yellow),
        Cell::new("Slot"),
    ]);

    for word in catalog.ordered() {
        let secret = word.expected_answer[word.secret_letter_index];
        table.add_row(vec![
            Cell::new(word.display_order),
            Cell::new(&word.id),
            Cell::new(&word.display_name),
            Cell::new(word.orientation),
            Cell::new(word.len()),
            Cell::new(format!("{} @{}", secret, word.secret_letter_index)).fg(Color::Yellow),
            Cell::new(word.secret_phrase_position),
        ]);
    }

    println!("{}", table);
}
