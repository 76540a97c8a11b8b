//! Todoey CLI
//!
//! Command-line interface for the Todoey to-do store

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use todoey_core::errors::{ExError, Result};
use todoey_core::logging_facility;
use todoey_engine::{EngineConfig, TodoService};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "todoey")]
#[command(about = "Todoey - categories and to-do items", long_about = None)]
struct Cli {
    /// Path to the store database
    #[arg(long, global = true, default_value = ".todoey/store.db")]
    db: PathBuf,

    /// Optional TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Category operations
    Category(commands::category::CategoryArgs),
    /// Item operations
    Item(commands::item::ItemArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        let err: ExError = e.into();
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    logging_facility::init(config.log_profile);

    let mut service = TodoService::open(&cli.db, config)?;

    let result = match cli.command {
        Commands::Category(args) => commands::category::execute(args, &mut service),
        Commands::Item(args) => commands::item::execute(args, &mut service),
    };

    // close even when the command failed; the command's error wins
    let closed = service.close();
    result.and(closed)
}
