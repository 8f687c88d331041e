use crate::reports;
use clap::Args;
use wordseal::catalog::{normalize_answer, PuzzleCatalog};

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Also print every answer in full.
    #[arg(long, default_value_t = false)]
    pub reveal: bool,
}

pub fn run(args: ValidateArgs, catalog: &PuzzleCatalog) {
    println!("\n🔎 === CATALOG AUDIT === 🔎");
    reports::print_catalog_report(catalog);

    let mut phrase = vec!['?'; catalog.secret_length()];
    for word in catalog.entries() {
        phrase[word.secret_phrase_position] = word.expected_answer[word.secret_letter_index];
    }
    let spelled: String = phrase.iter().collect();
    println!("Secret letters: {}", spelled);

    if !catalog.final_phrase().is_empty() {
        let expected: String = normalize_answer(catalog.final_phrase()).into_iter().collect();
        if expected == spelled {
            println!("✅ Spells the final phrase: {}", catalog.final_phrase());
        } else {
            println!(
                "⚠️  Secret letters do not spell the final phrase '{}'",
                catalog.final_phrase()
            );
        }
    }

    if args.reveal {
        for word in catalog.ordered() {
            println!("{:>3}. {:<14} {}", word.display_order, word.id, word.answer_string());
        }
    }

    println!(
        "✅ {} words, {} secret slots, all invariants hold.",
        catalog.len(),
        catalog.secret_length()
    );
}
