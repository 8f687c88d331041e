#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use wordseal::catalog::{Orientation, PuzzleCatalog, WordSpec};
use wordseal::score::ScoreRecord;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 14, 10, 0, 0).unwrap()
}

/// Builder for WordSpec to keep catalogs in tests short.
pub struct WordBuilder {
    word: WordSpec,
}

impl WordBuilder {
    pub fn new(id: &str, answer: &str) -> Self {
        Self {
            word: WordSpec {
                id: id.to_string(),
                display_name: answer.to_string(),
                answer: answer.to_string(),
                clue: format!("Clue for {}", id),
                hint: None,
                secret_index: 0,
                secret_position: 0,
                orientation: Orientation::Across,
                number: 1,
            },
        }
    }

    pub fn secret(mut self, index: usize, position: usize) -> Self {
        self.word.secret_index = index;
        self.word.secret_position = position;
        self
    }

    pub fn number(mut self, number: u32) -> Self {
        self.word.number = number;
        self
    }

    pub fn down(mut self) -> Self {
        self.word.orientation = Orientation::Down;
        self
    }

    pub fn hint(mut self, hint: &str) -> Self {
        self.word.hint = Some(hint.to_string());
        self
    }

    pub fn build(self) -> WordSpec {
        self.word
    }
}

/// `{CAT, secret index 1, slot 0}`, phrase length 1.
pub fn cat_catalog() -> PuzzleCatalog {
    PuzzleCatalog::new(vec![WordBuilder::new("cat", "CAT").secret(1, 0).build()], 1, "A").unwrap()
}

/// Two words feeding a two-slot phrase in reverse order.
pub fn pair_catalog() -> PuzzleCatalog {
    PuzzleCatalog::new(
        vec![
            WordBuilder::new("dog", "DOG").secret(2, 1).number(1).build(),
            WordBuilder::new("crowd", "CROWD CONTROL")
                .secret(0, 0)
                .number(2)
                .down()
                .build(),
        ],
        2,
        "CG",
    )
    .unwrap()
}

pub fn record(name: &str, time_seconds: u64, mistakes: u32) -> ScoreRecord {
    ScoreRecord {
        name: name.to_string(),
        time_seconds,
        date: NaiveDate::from_ymd_opt(2025, 11, 14).unwrap(),
        mistakes,
    }
}
