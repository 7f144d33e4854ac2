//! Dump command for printing the whole database.

use anyhow::Result;
use tally_core::ScoreStore;

use super::render;
use crate::cli::OutputFormat;

pub fn run(store: &ScoreStore, format: OutputFormat) -> Result<()> {
    let scores = store.all_scores()?;
    eprintln!("{} score(s) in {}", scores.len(), describe(store));
    print!("{}", render(&scores, format));
    Ok(())
}

fn describe(store: &ScoreStore) -> String {
    store
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<closed>".to_string())
}
