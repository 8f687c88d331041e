use crate::error::{WordsealError, WsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

pub const SECRET_LENGTH: usize = 17;
pub const FINAL_PHRASE: &str = "BANGALORE COMIC CON";

/// Grouping used by the board layout. Validation never looks at it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Orientation {
    Across,
    Down,
}

/// A word as written in a catalog document, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSpec {
    pub id: String,
    pub display_name: String,
    pub answer: String,
    pub clue: String,
    #[serde(default)]
    pub hint: Option<String>,
    pub secret_index: usize,
    pub secret_position: usize,
    pub orientation: Orientation,
    pub number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub id: String,
    pub display_name: String,
    /// Uppercase ASCII letters only; one cell per letter.
    pub expected_answer: Vec<char>,
    pub clue: String,
    pub hint: Option<String>,
    pub secret_letter_index: usize,
    pub secret_phrase_position: usize,
    pub orientation: Orientation,
    pub display_order: u32,
}

impl WordEntry {
    pub fn len(&self) -> usize {
        self.expected_answer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected_answer.is_empty()
    }

    pub fn answer_string(&self) -> String {
        self.expected_answer.iter().collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogDocument {
    secret_length: usize,
    #[serde(default)]
    final_phrase: String,
    words: Vec<WordSpec>,
}

#[derive(Debug, Clone)]
pub struct PuzzleCatalog {
    entries: Vec<WordEntry>,
    secret_length: usize,
    final_phrase: String,
}

/// Strips everything that is not an ASCII letter and uppercases the rest.
pub fn normalize_answer(raw: &str) -> Vec<char> {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl PuzzleCatalog {
    pub fn new(words: Vec<WordSpec>, secret_length: usize, final_phrase: &str) -> WsResult<Self> {
        let mut ids = HashSet::new();
        let mut slots = vec![false; secret_length];
        let mut entries = Vec::with_capacity(words.len());

        for w in words {
            if !ids.insert(w.id.clone()) {
                return Err(WordsealError::Catalog(format!("Duplicate word id '{}'", w.id)));
            }

            // Cells only hold A-Z, so an accented letter could never be typed.
            if let Some(c) = w.answer.chars().find(|c| c.is_alphabetic() && !c.is_ascii()) {
                return Err(WordsealError::Catalog(format!(
                    "Word '{}' contains non-ASCII letter '{}'",
                    w.id, c
                )));
            }

            let expected_answer = normalize_answer(&w.answer);
            if expected_answer.is_empty() {
                return Err(WordsealError::Catalog(format!(
                    "Word '{}' has no letters in its answer",
                    w.id
                )));
            }

            if w.secret_index >= expected_answer.len() {
                return Err(WordsealError::Catalog(format!(
                    "Word '{}': secret index {} is outside answer of length {}",
                    w.id,
                    w.secret_index,
                    expected_answer.len()
                )));
            }

            match slots.get_mut(w.secret_position) {
                Some(taken) if *taken => {
                    return Err(WordsealError::Catalog(format!(
                        "Word '{}': secret position {} is already used",
                        w.id, w.secret_position
                    )));
                }
                Some(taken) => *taken = true,
                None => {
                    return Err(WordsealError::Catalog(format!(
                        "Word '{}': secret position {} is outside phrase of length {}",
                        w.id, w.secret_position, secret_length
                    )));
                }
            }

            entries.push(WordEntry {
                id: w.id,
                display_name: w.display_name,
                expected_answer,
                clue: w.clue,
                hint: w.hint,
                secret_letter_index: w.secret_index,
                secret_phrase_position: w.secret_position,
                orientation: w.orientation,
                display_order: w.number,
            });
        }

        if let Some(missing) = slots.iter().position(|taken| !taken) {
            return Err(WordsealError::Catalog(format!(
                "Secret position {} is not fed by any word",
                missing
            )));
        }

        Ok(Self {
            entries,
            secret_length,
            final_phrase: final_phrase.to_string(),
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WsResult<Self> {
        let content = fs::read_to_string(path)?;
        let doc: CatalogDocument = serde_json::from_str(&content)?;
        Self::new(doc.words, doc.secret_length, &doc.final_phrase)
    }

    /// The shipped volunteer-teams puzzle.
    pub fn builtin() -> Self {
        let words = BUILTIN_WORDS
            .iter()
            .map(|&(id, display, clue, hint, secret_index, number, orientation)| WordSpec {
                id: id.to_string(),
                display_name: display.to_string(),
                answer: display.to_string(),
                clue: clue.to_string(),
                hint: Some(hint.to_string()),
                secret_index,
                // Positions follow the numbering: word N feeds slot N-1.
                secret_position: number as usize - 1,
                orientation,
                number,
            })
            .collect();

        Self::new(words, SECRET_LENGTH, FINAL_PHRASE).expect("builtin catalog is valid")
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn ordered(&self) -> Vec<&WordEntry> {
        let mut v: Vec<&WordEntry> = self.entries.iter().collect();
        v.sort_by_key(|e| e.display_order);
        v
    }

    pub fn by_orientation(&self, orientation: Orientation) -> Vec<&WordEntry> {
        self.ordered()
            .into_iter()
            .filter(|e| e.orientation == orientation)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn secret_length(&self) -> usize {
        self.secret_length
    }

    pub fn final_phrase(&self) -> &str {
        &self.final_phrase
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type BuiltinWord = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    usize,
    u32,
    Orientation,
);

// (id, display name, clue, hint, secret index, number, orientation)
const BUILTIN_WORDS: [BuiltinWord; SECRET_LENGTH] = [
    (
        "cosbuddies",
        "COSBUDDIES",
        "We represent the helping hand for all Cosplayers, helping with repairs and navigation.",
        "They are the medics for costumes in distress.",
        3,
        1,
        Orientation::Across,
    ),
    (
        "gaming",
        "GAMING",
        "Manages tournaments, free-play zones, and keeps the high scores rolling.",
        "Where digital warriors compete and play.",
        1,
        2,
        Orientation::Across,
    ),
    (
        "welcoming",
        "WELCOMING",
        "The first smile attendees see; responsible for badge distribution and crowd flow at entry.",
        "The first faces you see, granting passage to the realm.",
        7,
        3,
        Orientation::Across,
    ),
    (
        "stage",
        "STAGE",
        "Controls the main event flow, assisting hosts and ensuring schedule adherence.",
        "Timekeepers of the main spectacle.",
        3,
        4,
        Orientation::Across,
    ),
    (
        "damage",
        "DAMAGE",
        "Crisis management and rapid response for any on-ground issues.",
        "The rapid response team for sudden chaos.",
        1,
        5,
        Orientation::Across,
    ),
    (
        "social",
        "SOCIAL",
        "Captures the vibe for Instagram and Twitter live updates.",
        "Broadcasters of the moment to the digital world.",
        5,
        6,
        Orientation::Across,
    ),
    (
        "food",
        "FOOD",
        "Keeps the volunteers and staff fed and hydrated.",
        "They ensure the army marches on a full stomach.",
        1,
        7,
        Orientation::Across,
    ),
    (
        "research",
        "RESEARCH",
        "Collects data and feedback from attendees to improve future shows.",
        "Gatherers of opinions to shape the future.",
        0,
        8,
        Orientation::Across,
    ),
    (
        "media",
        "MEDIA",
        "Escorts press, photographers, and manages the media registration desk.",
        "Escorts for the press and photographers.",
        1,
        9,
        Orientation::Across,
    ),
    (
        "cci",
        "CCI",
        "Comic Con India Core Information desk and merchandise.",
        "The central hub for information and treasure.",
        0,
        10,
        Orientation::Down,
    ),
    (
        "cosplay",
        "COSPLAY",
        "Manages the contest registration, prejudging, and green room.",
        "Organizers of the masquerade and competition.",
        1,
        11,
        Orientation::Down,
    ),
    (
        "mechanic",
        "MECHANIC",
        "Handles on-ground logistics, setup repairs, and physical assets.",
        "The hands that build and fix the physical realm.",
        0,
        12,
        Orientation::Down,
    ),
    (
        "ticketing",
        "TICKETING",
        "Scans QR codes and validates entry passes.",
        "Scanners of the sacred QR codes.",
        1,
        13,
        Orientation::Down,
    ),
    (
        "client",
        "CLIENT",
        "Liaison for exhibitors and sponsor booths.",
        "The bridge between the show and the brands.",
        0,
        14,
        Orientation::Down,
    ),
    (
        "celebrity",
        "CELEBRITY",
        "Shadows special guests and manages autograph sessions.",
        "Guardians of the visiting stars.",
        0,
        15,
        Orientation::Down,
    ),
    (
        "crowdcontrol",
        "CROWD CONTROL",
        "Ensures safety and manages queues in high-traffic areas.",
        "Masters of the queue and safe passage.",
        2,
        16,
        Orientation::Down,
    ),
    (
        "operations",
        "OPERATIONS",
        "The backbone of the show, coordinating between all departments.",
        "The central nervous system of the entire event.",
        8,
        17,
        Orientation::Down,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_spells_final_phrase() {
        let catalog = PuzzleCatalog::builtin();
        let mut phrase = vec![' '; catalog.secret_length()];
        for e in catalog.entries() {
            phrase[e.secret_phrase_position] = e.expected_answer[e.secret_letter_index];
        }
        let letters: String = phrase.into_iter().collect();
        let expected: String = normalize_answer(catalog.final_phrase()).into_iter().collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn test_multi_word_answer_is_letters_only() {
        let catalog = PuzzleCatalog::builtin();
        let crowd = catalog.get("crowdcontrol").unwrap();
        assert_eq!(crowd.answer_string(), "CROWDCONTROL");
        assert_eq!(crowd.len(), 12);
        assert_eq!(crowd.display_name, "CROWD CONTROL");
    }

    #[test]
    fn test_orientation_parses_case_insensitive() {
        assert_eq!("down".parse::<Orientation>().unwrap(), Orientation::Down);
        assert_eq!(Orientation::Across.to_string(), "ACROSS");
    }
}
