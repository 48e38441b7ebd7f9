//! taskbook - Main Entry Point
//!
//! Parses command-line arguments, sets up logging and runs an interactive
//! session on stdin. The actual implementation is in the `taskbook` library.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use taskbook::{Config, Session};
use tracing_subscriber::EnvFilter;

/// taskbook - keep track of todos, deadlines and events from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file [default: data/tasks.txt]
    file: Option<PathBuf>,

    /// Enable git synchronization on save
    #[arg(long)]
    sync_git: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_overrides(args.file, args.sync_git);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new(&config)?;
    session.run(std::io::stdin().lock())?;
    Ok(())
}
