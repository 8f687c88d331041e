use crate::reports;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use wordseal::error::WsResult;
use wordseal::leaderboard::{DurableMedium, LeaderboardStore};

#[derive(Args, Debug, Clone)]
pub struct LeaderboardArgs {
    /// Export the ranked board to this CSV file instead of printing it.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Only show the fastest N entries.
    #[arg(long)]
    pub top: Option<usize>,
}

pub fn run<M: DurableMedium>(
    args: LeaderboardArgs,
    store: &LeaderboardStore<M>,
    chart_limit: usize,
) -> WsResult<()> {
    if let Some(path) = args.csv {
        let file = File::create(&path)?;
        let rows = store.export_csv(file)?;
        println!("📤 Exported {} scores to {}", rows, path.display());
        return Ok(());
    }

    let ranked = match args.top {
        Some(n) => store.top(n),
        None => store.get_ranked(),
    };
    reports::print_leaderboard(&ranked, None, chart_limit);
    Ok(())
}
