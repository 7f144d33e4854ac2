//! Set command for listing every version of a chart set.

use std::collections::HashMap;

use anyhow::Result;
use clap::Args;
use tally_core::{ChartSetKey, ScoreRecord, ScoreStore};

use super::{SongArgs, render};
use crate::cli::OutputFormat;

#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    #[arg(long = "set-id", allow_hyphen_values = true)]
    pub chart_set_id: i32,
    #[command(flatten)]
    pub song: SongArgs,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SetArgs {
    pub fn key(&self) -> ChartSetKey {
        ChartSetKey {
            chart_set_id: self.chart_set_id,
            title: self.song.title.clone(),
            artist: self.song.artist.clone(),
            creator: self.song.creator.clone(),
        }
    }
}

pub fn run(store: &ScoreStore, args: &SetArgs) -> Result<()> {
    let groups = store.chart_set_scores(&args.key()).unwrap_or_default();
    if groups.is_empty() {
        eprintln!("No scores for this chart set");
        return Ok(());
    }

    print!("{}", render_groups(&groups, args.format));
    Ok(())
}

/// Render version groups in version order.
///
/// Only text output gets a banner per version. TSV and JSON stay a single
/// machine-readable listing with the groups concatenated.
pub fn render_groups(
    groups: &HashMap<String, Vec<ScoreRecord>>,
    format: OutputFormat,
) -> String {
    let mut versions: Vec<&String> = groups.keys().collect();
    versions.sort();

    match format {
        OutputFormat::Text => versions
            .into_iter()
            .map(|version| {
                let scores = &groups[version];
                format!(
                    "[{}] {} score(s)\n{}",
                    version,
                    scores.len(),
                    render(scores, format)
                )
            })
            .collect(),
        OutputFormat::Tsv | OutputFormat::Json => {
            let records: Vec<ScoreRecord> = versions
                .into_iter()
                .flat_map(|version| groups[version].iter().cloned())
                .collect();
            render(&records, format)
        }
    }
}
