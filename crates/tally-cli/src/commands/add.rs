//! Add command for recording a finished play.

use anyhow::Result;
use clap::Args;
use tally_core::{ScoreRecord, ScoreStore};
use tracing::info;

use super::SongArgs;

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Play time in Unix seconds (defaults to now)
    #[arg(long)]
    pub timestamp: Option<i64>,
    #[arg(long = "id", allow_hyphen_values = true)]
    pub chart_id: i32,
    #[arg(long = "set-id", allow_hyphen_values = true)]
    pub chart_set_id: i32,
    #[command(flatten)]
    pub song: SongArgs,
    /// Difficulty name
    #[arg(long = "difficulty")]
    pub version: String,
    #[arg(long = "n300", default_value_t = 0)]
    pub count300: u32,
    #[arg(long = "n100", default_value_t = 0)]
    pub count100: u32,
    #[arg(long = "n50", default_value_t = 0)]
    pub count50: u32,
    #[arg(long = "geki", default_value_t = 0)]
    pub count_geki: u32,
    #[arg(long = "katu", default_value_t = 0)]
    pub count_katu: u32,
    #[arg(long = "miss", default_value_t = 0)]
    pub count_miss: u32,
    #[arg(long)]
    pub score: u64,
    #[arg(long, default_value_t = 0)]
    pub combo: u32,
    /// Full combo
    #[arg(long)]
    pub perfect: bool,
    /// Modifier bitmask
    #[arg(long, default_value_t = 0)]
    pub mods: u32,
}

impl AddArgs {
    pub fn into_record(self, now: i64) -> ScoreRecord {
        ScoreRecord {
            timestamp: self.timestamp.unwrap_or(now),
            chart_id: self.chart_id,
            chart_set_id: self.chart_set_id,
            title: self.song.title,
            artist: self.song.artist,
            creator: self.song.creator,
            version: self.version,
            count300: self.count300,
            count100: self.count100,
            count50: self.count50,
            count_geki: self.count_geki,
            count_katu: self.count_katu,
            count_miss: self.count_miss,
            score: self.score,
            combo: self.combo,
            perfect: self.perfect,
            mods: self.mods,
        }
    }
}

pub fn run(store: &ScoreStore, args: AddArgs) -> Result<()> {
    let record = args.into_record(chrono::Utc::now().timestamp());
    store.add_score(&record)?;
    info!("Recorded {} ({})", record, record.grade());
    Ok(())
}
