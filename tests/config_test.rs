use clap::{CommandFactory, FromArgMatches, Parser};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use wordseal::config::GameConfig;
use wordseal::leaderboard::DEFAULT_STORE_KEY;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    game: GameConfig,
}

fn parse(args: &[&str]) -> (GameConfig, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.game, matches)
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(config.data_dir, PathBuf::from("data"));
    assert_eq!(config.catalog, None);
    assert_eq!(config.store_key, DEFAULT_STORE_KEY);
    assert_eq!(config.chart_limit, 15);

    let (parsed, _) = parse(&["test"]);
    assert_eq!(parsed.data_dir, config.data_dir);
    assert_eq!(parsed.chart_limit, config.chart_limit);
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"chart_limit": 5, "data_dir": "/tmp/board"}}"#).unwrap();
    let config = GameConfig::load_from_file(file.path());
    assert_eq!(config.chart_limit, 5);
    assert_eq!(config.data_dir, PathBuf::from("/tmp/board"));
    assert_eq!(config.store_key, DEFAULT_STORE_KEY);
}

#[test]
fn test_load_broken_file_gives_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "chart_limit = 5").unwrap();
    let config = GameConfig::load_from_file(file.path());
    assert_eq!(config.chart_limit, 15);

    let missing = GameConfig::load_from_file("/definitely/not/here.json");
    assert_eq!(missing.store_key, DEFAULT_STORE_KEY);
}

#[test]
fn test_cli_flags_override_file_values() {
    let mut file_config = GameConfig {
        chart_limit: 5,
        store_key: "from_file".into(),
        ..GameConfig::default()
    };

    let (cli, matches) = parse(&["test", "--chart-limit", "30"]);
    file_config.merge_from_cli(&cli, &matches);

    assert_eq!(file_config.chart_limit, 30);
    // Untyped flags leave the file value alone.
    assert_eq!(file_config.store_key, "from_file");
}
