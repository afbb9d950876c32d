//! Tic-tac-toe self-play demo.
//!
//! Solves the full game by default, which ends in the inevitable draw;
//! try --strategy sweep --search-depth 2 to watch a horizon-limited
//! player feel its way instead. --config loads a json policy file;
//! individual flags override it.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use treebot::games::tictactoe::TicTacToe;
use treebot::search::bot::Bot;
use treebot::search::config::{Config, Selection, Strategy};

#[derive(Parser, Debug)]
#[command(about = "tic-tac-toe self-play", version)]
struct Args {
    /// json policy file to start from
    #[arg(long)]
    config: Option<PathBuf>,
    /// expansion strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,
    /// selection policy
    #[arg(long, value_enum)]
    selection: Option<Selection>,
    /// keep unreachable vertices instead of collecting them
    #[arg(long)]
    keep_all: bool,
    /// vertex budget for bounded expansion (0 = unbounded)
    #[arg(long)]
    node_limit: Option<usize>,
    /// wall-clock budget in milliseconds for bounded expansion (0 = unbounded)
    #[arg(long)]
    time_limit_ms: Option<u64>,
    /// horizon for the forward sweep
    #[arg(long)]
    search_depth: Option<usize>,
    /// narrate tree sizes as well as moves
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => Config::default(),
        };
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(selection) = self.selection {
            config.selection = selection;
        }
        if self.keep_all {
            config.pruning = false;
        }
        if let Some(limit) = self.node_limit {
            config.node_limit = limit;
        }
        if let Some(limit) = self.time_limit_ms {
            config.time_limit_ms = limit;
        }
        if let Some(depth) = self.search_depth {
            config.search_depth = depth;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    treebot::logs(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let mut bot = Bot::<TicTacToe>::from_config(&args.config()?);
    bot.play()?;
    log::info!("final valuation: {}", bot.score());
    Ok(())
}
