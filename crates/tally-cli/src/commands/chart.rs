//! Chart command for listing one chart's scores.

use anyhow::Result;
use clap::Args;
use tally_core::{ChartKey, ScoreStore};

use super::{SongArgs, render};
use crate::cli::OutputFormat;

#[derive(Debug, Clone, Args)]
pub struct ChartArgs {
    #[arg(long = "id", allow_hyphen_values = true)]
    pub chart_id: i32,
    #[command(flatten)]
    pub song: SongArgs,
    /// Difficulty name
    #[arg(long = "difficulty")]
    pub version: String,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ChartArgs {
    pub fn key(&self) -> ChartKey {
        ChartKey {
            chart_id: self.chart_id,
            title: self.song.title.clone(),
            artist: self.song.artist.clone(),
            creator: self.song.creator.clone(),
            version: self.version.clone(),
        }
    }
}

pub fn run(store: &ScoreStore, args: &ChartArgs) -> Result<()> {
    // A failed read has already been reported; show it as an empty listing
    let scores = store.chart_scores(&args.key()).unwrap_or_default();
    if scores.is_empty() && args.format == OutputFormat::Text {
        eprintln!("No scores for this chart");
        return Ok(());
    }
    print!("{}", render(&scores, args.format));
    Ok(())
}
