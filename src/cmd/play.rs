use crate::reports;
use clap::Args;
use std::io::{self, BufRead, Write};
use tracing::{error, warn};
use wordseal::catalog::PuzzleCatalog;
use wordseal::clock::Clock;
use wordseal::engine::{CellVerdict, PuzzleEngine, SessionState, SubmitOutcome};
use wordseal::error::{WordsealError, WsResult};
use wordseal::hint::{resolve_hint, CatalogHints, HintSource};
use wordseal::leaderboard::{DurableMedium, LeaderboardStore};
use wordseal::score::{format_duration, ScoreRecorder};

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[arg(short, long)]
    pub name: String,

    /// Disable catalog hints (always answer with the stock line).
    #[arg(long, default_value_t = false)]
    pub no_hints: bool,
}

const HELP: &str = "\
Commands (cells are numbered from 1):
  set <word> <cell> <letter>   write one letter
  clear <word> <cell>          empty one cell
  fill <word> <letters>        write a whole word from the first cell
  hint <word>                  ask for a hint
  board | secret               show the board or the secret phrase
  submit                       check all answers
  help | quit";

enum Step {
    Continue,
    Solved,
    Quit,
}

fn parse_cell_number(raw: &str) -> WsResult<usize> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(WordsealError::InvalidInput(format!(
            "'{}' is not a cell number",
            raw
        ))),
    }
}

fn verdict_mark(verdict: CellVerdict) -> &'static str {
    match verdict {
        CellVerdict::Correct => "✨",
        CellVerdict::Incorrect => "💥",
        CellVerdict::Cleared => "·",
    }
}

fn handle_line(
    line: &str,
    engine: &PuzzleEngine,
    state: &mut SessionState,
    hints: Option<&dyn HintSource>,
) -> WsResult<Step> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => {}
        ["help"] => println!("{}", HELP),
        ["quit"] | ["exit"] => return Ok(Step::Quit),
        ["board"] => reports::print_board(engine, state),
        ["secret"] => reports::print_secret_phrase(&engine.derive_secret_phrase(state)),
        ["set", word, cell, letter] => {
            let idx = parse_cell_number(cell)?;
            engine.set_cell(state, word, idx, letter)?;
            let verdict = engine.check_cell(word, idx, letter)?;
            println!("{} {}", verdict_mark(verdict), engine.word_text(state, word).unwrap_or_default());
        }
        ["clear", word, cell] => {
            let idx = parse_cell_number(cell)?;
            engine.set_cell(state, word, idx, "")?;
            println!("· {}", engine.word_text(state, word).unwrap_or_default());
        }
        ["fill", word, rest @ ..] if !rest.is_empty() => {
            let letters: String = rest.concat();
            engine.fill_word(state, word, &letters)?;
            println!("✏️  {}", engine.word_text(state, word).unwrap_or_default());
        }
        ["hint", word] => {
            let entry = engine.catalog().get(word).ok_or_else(|| {
                WordsealError::InvalidInput(format!("Unknown word '{}'", word))
            })?;
            println!("🪄 {}", resolve_hint(hints, entry));
        }
        ["submit"] => match engine.submit(state) {
            SubmitOutcome::Solved { elapsed_seconds }
            | SubmitOutcome::AlreadyCompleted { elapsed_seconds } => {
                println!("🎉 The seal is broken! Time: {}", format_duration(elapsed_seconds));
                return Ok(Step::Solved);
            }
            SubmitOutcome::Incorrect { mistakes } => {
                println!(
                    "🔒 The magical seal remains locked. Some answers are incorrect. (mistakes: {})",
                    mistakes
                );
            }
        },
        _ => println!("Unrecognized command. Type 'help'."),
    }
    Ok(Step::Continue)
}

pub fn run<M: DurableMedium>(
    args: PlayArgs,
    catalog: &PuzzleCatalog,
    clock: &dyn Clock,
    store: &LeaderboardStore<M>,
    chart_limit: usize,
) -> WsResult<()> {
    let engine = PuzzleEngine::new(catalog, clock);
    let mut state = engine.start(&args.name)?;

    let catalog_hints = CatalogHints::new(catalog);
    let hints: Option<&dyn HintSource> = if args.no_hints {
        None
    } else {
        Some(&catalog_hints)
    };

    println!("\n📜 Welcome, {}. Decipher the scrolls to reveal the hidden location.", state.player_name());
    println!("{}", HELP);
    reports::print_secret_phrase(&engine.derive_secret_phrase(&state));
    reports::print_board(&engine, &state);

    let stdin = io::stdin();
    let mut solved = false;
    for line in stdin.lock().lines() {
        let line = line?;
        match handle_line(line.trim(), &engine, &mut state, hints) {
            Ok(Step::Continue) => {}
            Ok(Step::Solved) => {
                solved = true;
                break;
            }
            Ok(Step::Quit) => break,
            Err(WordsealError::InvalidInput(msg)) => println!("⚠️  {}", msg),
            Err(e) => return Err(e),
        }
        io::stdout().flush()?;
    }

    if !solved {
        println!("👋 Leaving without completing the puzzle.");
        return Ok(());
    }

    reports::print_secret_phrase(&engine.derive_secret_phrase(&state));

    let record = ScoreRecorder::new(clock).record(&state)?;
    // A failed save must not hide the player's own result.
    if let Err(e) = store.insert(record.clone()) {
        error!("Failed to save score: {}", e);
        println!("⚠️  Your score could not be saved, but your result stands.");
    }

    let ranked = store.get_ranked();
    if ranked.is_empty() {
        warn!("Leaderboard is empty after completion");
    }
    println!(
        "⏱  {}  ❌ {} mistakes  📅 {}",
        format_duration(record.time_seconds),
        record.mistakes,
        record.date
    );
    reports::print_leaderboard(&ranked, Some(&record), chart_limit);
    Ok(())
}
