pub mod medium;

pub use self::medium::{DurableMedium, FileMedium, MemoryMedium};
use crate::error::{WordsealError, WsResult};
use crate::score::{format_duration, ScoreRecord};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{info, warn};

pub const DEFAULT_STORE_KEY: &str = "wordseal_leaderboard_v2";
pub const BLOB_VERSION: u32 = 2;

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct LeaderboardBlob {
    version: u32,
    records: Vec<ScoreRecord>,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    rank: usize,
    name: &'a str,
    time: String,
    time_seconds: u64,
    mistakes: u32,
    date: String,
}

/// Ranked, append-only collection of scores kept under a single key.
pub struct LeaderboardStore<M: DurableMedium> {
    medium: M,
    key: String,
}

impl<M: DurableMedium> LeaderboardStore<M> {
    pub fn new(medium: M) -> Self {
        Self::with_key(medium, DEFAULT_STORE_KEY)
    }

    pub fn with_key(medium: M, key: &str) -> Self {
        Self {
            medium,
            key: key.to_string(),
        }
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Parses a stored blob. Any shape mismatch means "no data".
    fn decode(&self, bytes: &[u8]) -> Vec<ScoreRecord> {
        let blob: LeaderboardBlob = match serde_json::from_slice(bytes) {
            Ok(b) => b,
            Err(e) => {
                warn!(key = %self.key, "Discarding unreadable leaderboard data: {}", e);
                return Vec::new();
            }
        };

        if blob.version != BLOB_VERSION {
            warn!(
                key = %self.key,
                found = blob.version,
                expected = BLOB_VERSION,
                "Discarding leaderboard data with unknown version"
            );
            return Vec::new();
        }

        if let Some(bad) = blob.records.iter().find(|r| r.name.trim().is_empty()) {
            warn!(key = %self.key, record = ?bad, "Discarding leaderboard data with invalid record");
            return Vec::new();
        }

        blob.records
    }

    /// Records in insertion order. Medium failures propagate; corruption does not.
    fn load(&self) -> WsResult<Vec<ScoreRecord>> {
        Ok(match self.medium.read_all(&self.key)? {
            Some(bytes) => self.decode(&bytes),
            None => Vec::new(),
        })
    }

    pub fn insert(&self, record: ScoreRecord) -> WsResult<()> {
        let mut records = self.load()?;
        info!(
            name = %record.name,
            time_seconds = record.time_seconds,
            mistakes = record.mistakes,
            "Saving score"
        );
        records.push(record);

        let blob = LeaderboardBlob {
            version: BLOB_VERSION,
            records,
        };
        let bytes = serde_json::to_vec(&blob)
            .map_err(|e| WordsealError::Persistence(format!("Failed to encode scores: {}", e)))?;
        self.medium.write_all(&self.key, &bytes)
    }

    /// Ascending by time; equal times keep insertion order.
    pub fn get_ranked(&self) -> Vec<ScoreRecord> {
        let mut records = self.load().unwrap_or_else(|e| {
            warn!(key = %self.key, "Leaderboard unavailable: {}", e);
            Vec::new()
        });
        records.sort_by_key(|r| r.time_seconds);
        records
    }

    pub fn top(&self, n: usize) -> Vec<ScoreRecord> {
        let mut ranked = self.get_ranked();
        ranked.truncate(n);
        ranked
    }

    /// 1-based rank of the first stored record equal to `record`.
    pub fn rank_of(&self, record: &ScoreRecord) -> Option<usize> {
        self.get_ranked()
            .iter()
            .position(|r| r == record)
            .map(|i| i + 1)
    }

    /// Writes the ranked board as CSV with a header row.
    pub fn export_csv<W: Write>(&self, writer: W) -> WsResult<usize> {
        let ranked = self.get_ranked();
        let mut wtr = csv::Writer::from_writer(writer);
        for (i, r) in ranked.iter().enumerate() {
            wtr.serialize(CsvRow {
                rank: i + 1,
                name: &r.name,
                time: format_duration(r.time_seconds),
                time_seconds: r.time_seconds,
                mistakes: r.mistakes,
                date: r.date.format("%Y-%m-%d").to_string(),
            })?;
        }
        wtr.flush()?;
        Ok(ranked.len())
    }
}
