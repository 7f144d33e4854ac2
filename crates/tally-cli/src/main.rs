mod cli;
mod commands;
mod config;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tally_core::{ScoreStore, TracingReporter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tally=info".parse()?)
                .add_directive("tally_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    // Load config
    let config = if args.config.exists() {
        match Config::load(&args.config) {
            Ok(c) => {
                info!("Loaded config from {:?}", args.config);
                c
            }
            Err(e) => {
                warn!("Failed to load config: {:#}, using defaults", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    let store_config = config.store_config(args.db.as_ref());

    // Initialization failures are fatal: nothing below works without storage
    let mut store = ScoreStore::open(&store_config, Arc::new(TracingReporter))?;

    let result = match args.command {
        Command::Add(add) => commands::add::run(&store, add),
        Command::Chart(chart) => commands::chart::run(&store, &chart),
        Command::Set(set) => commands::set::run(&store, &set),
        Command::Dump { format } => commands::dump::run(&store, format),
    };

    // Shutdown failures are reported by the store and do not change the exit status
    let _ = store.shutdown();
    result
}
