use crate::leaderboard::DEFAULT_STORE_KEY;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory holding the leaderboard blob.
    #[arg(global = true, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// JSON catalog to play instead of the builtin puzzle.
    #[arg(global = true, long)]
    pub catalog: Option<PathBuf>,

    #[arg(global = true, long, default_value = DEFAULT_STORE_KEY)]
    pub store_key: String,

    /// Rows shown in the leaderboard chart.
    #[arg(global = true, long, default_value_t = 15)]
    pub chart_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            catalog: None,
            store_key: DEFAULT_STORE_KEY.to_string(),
            chart_limit: 15,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config. Missing or broken files give the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to read config {:?}: {}. Using defaults.", path, e);
                return Self::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Failed to parse config {:?}: {}. Using defaults.", path, e);
            Self::default()
        })
    }

    /// Copies every field the user typed on the command line over the file values.
    pub fn merge_from_cli(&mut self, cli: &GameConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(data_dir, "data_dir");
        update_if_present!(catalog, "catalog");
        update_if_present!(store_key, "store_key");
        update_if_present!(chart_limit, "chart_limit");
    }
}
