use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};
use wordseal::catalog::PuzzleCatalog;
use wordseal::clock::SystemClock;
use wordseal::config::GameConfig;
use wordseal::error::WsResult;
use wordseal::leaderboard::{FileMedium, LeaderboardStore};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    game: GameConfig,

    /// JSON config file; explicit flags still win over it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Play(cmd::play::PlayArgs),
    Leaderboard(cmd::leaderboard::LeaderboardArgs),
    Validate(cmd::validate::ValidateArgs),
}

fn load_catalog(config: &GameConfig) -> WsResult<PuzzleCatalog> {
    match &config.catalog {
        Some(path) => {
            info!("📂 Loading catalog from {:?}", path);
            PuzzleCatalog::load_from_file(path)
        }
        None => Ok(PuzzleCatalog::builtin()),
    }
}

fn main() {
    // 1. Parse raw matches (to tell typed flags from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // 2. Resolve config: file as base, typed flags on top
    let config = match &cli.config {
        Some(path) => {
            info!("⚖️  Loading config from: {}", path);
            let mut file_config = GameConfig::load_from_file(path);
            file_config.merge_from_cli(&cli.game, &matches);
            file_config
        }
        None => cli.game.clone(),
    };

    // 3. Catalog
    let catalog = load_catalog(&config).unwrap_or_else(|e| {
        eprintln!("\n❌ FATAL ERROR LOADING CATALOG:");
        eprintln!("   {}", e);
        process::exit(1);
    });

    let store = LeaderboardStore::with_key(FileMedium::new(&config.data_dir), &config.store_key);
    let clock = SystemClock;

    // 4. Execute
    let result = match cli.command {
        Commands::Play(args) => cmd::play::run(args, &catalog, &clock, &store, config.chart_limit),
        Commands::Leaderboard(args) => cmd::leaderboard::run(args, &store, config.chart_limit),
        Commands::Validate(args) => {
            cmd::validate::run(args, &catalog);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
