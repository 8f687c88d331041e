use crate::clock::Clock;
use crate::engine::{rounded_seconds, GameStatus, SessionState};
use crate::error::{WordsealError, WsResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreRecord {
    pub name: String,
    pub time_seconds: u64,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub mistakes: u32,
}

pub struct ScoreRecorder<'a> {
    clock: &'a dyn Clock,
}

impl<'a> ScoreRecorder<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    pub fn record(&self, state: &SessionState) -> WsResult<ScoreRecord> {
        let completed_at = match (state.status(), state.completed_at()) {
            (GameStatus::Completed, Some(at)) => at,
            _ => {
                return Err(WordsealError::Precondition(
                    "Cannot record a score for an unfinished session".into(),
                ))
            }
        };

        Ok(ScoreRecord {
            name: state.player_name().to_string(),
            time_seconds: rounded_seconds(state.started_at(), completed_at),
            date: self.clock.now().date_naive(),
            mistakes: state.mistake_count(),
        })
    }
}

/// `M:SS`, as shown on the timer and the leaderboard.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ScoreRecord {
            name: "Asha".into(),
            time_seconds: 42,
            date: NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
            mistakes: 1,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Asha","timeSeconds":42,"date":"2025-11-02","mistakes":1}"#
        );
    }
}
