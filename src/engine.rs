use crate::catalog::{PuzzleCatalog, WordEntry};
use crate::clock::Clock;
use crate::error::{WordsealError, WsResult};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Completed,
}

/// One play-through. Only `PuzzleEngine` mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    status: GameStatus,
    player_name: String,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    entries: BTreeMap<String, Vec<Option<char>>>,
    mistake_count: u32,
}

impl SessionState {
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn entries(&self) -> &BTreeMap<String, Vec<Option<char>>> {
        &self.entries
    }

    pub fn cells(&self, word_id: &str) -> Option<&[Option<char>]> {
        self.entries.get(word_id).map(|v| v.as_slice())
    }

    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Solved { elapsed_seconds: u64 },
    Incorrect { mistakes: u32 },
    AlreadyCompleted { elapsed_seconds: u64 },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, SubmitOutcome::Incorrect { .. })
    }
}

/// Per-keystroke feedback for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellVerdict {
    Correct,
    Incorrect,
    Cleared,
}

/// Whole seconds between two instants, rounded to nearest and never negative.
pub fn rounded_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    let millis = (to - from).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    ((millis as f64) / 1000.0).round() as u64
}

/// Stateless rules over a catalog. Every operation takes the session explicitly.
pub struct PuzzleEngine<'a> {
    catalog: &'a PuzzleCatalog,
    clock: &'a dyn Clock,
}

impl<'a> PuzzleEngine<'a> {
    pub fn new(catalog: &'a PuzzleCatalog, clock: &'a dyn Clock) -> Self {
        Self { catalog, clock }
    }

    pub fn catalog(&self) -> &PuzzleCatalog {
        self.catalog
    }

    pub fn start(&self, player_name: &str) -> WsResult<SessionState> {
        let name = player_name.trim();
        if name.is_empty() {
            return Err(WordsealError::InvalidInput(
                "Player name must not be empty".into(),
            ));
        }

        let entries = self
            .catalog
            .entries()
            .iter()
            .map(|w| (w.id.clone(), vec![None; w.len()]))
            .collect();

        let state = SessionState {
            status: GameStatus::Playing,
            player_name: name.to_string(),
            started_at: self.clock.now(),
            completed_at: None,
            entries,
            mistake_count: 0,
        };
        info!(player = %state.player_name, words = self.catalog.len(), "Session started");
        Ok(state)
    }

    fn lookup(&self, word_id: &str, cell_index: usize) -> WsResult<&'a WordEntry> {
        let word = self
            .catalog
            .get(word_id)
            .ok_or_else(|| WordsealError::InvalidInput(format!("Unknown word '{}'", word_id)))?;
        if cell_index >= word.len() {
            return Err(WordsealError::InvalidInput(format!(
                "Cell {} is out of bounds for '{}' ({} letters)",
                cell_index,
                word_id,
                word.len()
            )));
        }
        Ok(word)
    }

    /// Empty input clears the cell; otherwise exactly one letter.
    fn parse_cell(input: &str) -> WsResult<Option<char>> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_uppercase())),
            _ => Err(WordsealError::InvalidInput(format!(
                "'{}' is not a single A-Z letter",
                input
            ))),
        }
    }

    /// The only way answer content changes.
    pub fn set_cell(
        &self,
        state: &mut SessionState,
        word_id: &str,
        cell_index: usize,
        input: &str,
    ) -> WsResult<()> {
        if state.status != GameStatus::Playing {
            return Err(WordsealError::InvalidInput(
                "Session is already completed".into(),
            ));
        }
        self.lookup(word_id, cell_index)?;
        let value = Self::parse_cell(input)?;

        let cells = state.entries.get_mut(word_id).ok_or_else(|| {
            WordsealError::InvalidInput(format!("Session has no cells for '{}'", word_id))
        })?;
        let cell = cells.get_mut(cell_index).ok_or_else(|| {
            WordsealError::InvalidInput(format!("Session cells for '{}' are truncated", word_id))
        })?;
        *cell = value;

        debug!(word = word_id, index = cell_index, value = ?value, "Cell updated");
        Ok(())
    }

    /// Writes `letters` from the first cell onward. Stops at the first bad letter.
    pub fn fill_word(&self, state: &mut SessionState, word_id: &str, letters: &str) -> WsResult<()> {
        for (i, c) in letters.chars().enumerate() {
            let mut buf = [0u8; 4];
            self.set_cell(state, word_id, i, c.encode_utf8(&mut buf))?;
        }
        Ok(())
    }

    /// Whether `input` matches the expected letter at that cell. Does not touch the session.
    pub fn check_cell(&self, word_id: &str, cell_index: usize, input: &str) -> WsResult<CellVerdict> {
        let word = self.lookup(word_id, cell_index)?;
        Ok(match Self::parse_cell(input)? {
            None => CellVerdict::Cleared,
            Some(c) if c == word.expected_answer[cell_index] => CellVerdict::Correct,
            Some(_) => CellVerdict::Incorrect,
        })
    }

    /// Recomputed on every call from the current cells.
    pub fn derive_secret_phrase(&self, state: &SessionState) -> Vec<Option<char>> {
        let mut phrase = vec![None; self.catalog.secret_length()];
        for word in self.catalog.entries() {
            let letter = state
                .entries
                .get(&word.id)
                .and_then(|cells| cells.get(word.secret_letter_index))
                .copied()
                .flatten();
            if let Some(c) = letter {
                phrase[word.secret_phrase_position] = Some(c.to_ascii_uppercase());
            }
        }
        phrase
    }

    fn word_matches(word: &WordEntry, cells: Option<&Vec<Option<char>>>) -> bool {
        match cells {
            Some(cells) if cells.len() == word.len() => cells
                .iter()
                .zip(&word.expected_answer)
                .all(|(cell, expected)| cell.map(|c| c.to_ascii_uppercase()) == Some(*expected)),
            _ => false,
        }
    }

    /// All-or-nothing check of the whole board.
    pub fn submit(&self, state: &mut SessionState) -> SubmitOutcome {
        if let (GameStatus::Completed, Some(done)) = (state.status, state.completed_at) {
            return SubmitOutcome::AlreadyCompleted {
                elapsed_seconds: rounded_seconds(state.started_at, done),
            };
        }

        let solved = self
            .catalog
            .entries()
            .iter()
            .all(|w| Self::word_matches(w, state.entries.get(&w.id)));

        if !solved {
            state.mistake_count += 1;
            debug!(mistakes = state.mistake_count, "Submission rejected");
            return SubmitOutcome::Incorrect {
                mistakes: state.mistake_count,
            };
        }

        // Never let completion precede the start, even with a skewed clock.
        let now = self.clock.now().max(state.started_at);
        state.status = GameStatus::Completed;
        state.completed_at = Some(now);
        let elapsed_seconds = rounded_seconds(state.started_at, now);
        info!(
            player = %state.player_name,
            elapsed_seconds,
            mistakes = state.mistake_count,
            "Puzzle solved"
        );
        SubmitOutcome::Solved { elapsed_seconds }
    }

    /// Running timer; frozen once the session completes.
    pub fn elapsed_seconds(&self, state: &SessionState) -> u64 {
        let end = state.completed_at.unwrap_or_else(|| self.clock.now());
        let millis = (end - state.started_at).num_milliseconds().max(0);
        (millis / 1000) as u64
    }

    pub fn word_text(&self, state: &SessionState, word_id: &str) -> Option<String> {
        state
            .cells(word_id)
            .map(|cells| cells.iter().map(|c| c.unwrap_or('_')).collect())
    }

    /// (filled cells, total cells)
    pub fn progress(&self, state: &SessionState) -> (usize, usize) {
        state.entries.values().fold((0, 0), |(filled, total), cells| {
            (
                filled + cells.iter().filter(|c| c.is_some()).count(),
                total + cells.len(),
            )
        })
    }
}
