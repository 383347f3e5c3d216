use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply an edited standard ion table to the store
    Load(LoadArgs),
    /// Write the current standard ion table for editing
    Export(ExportArgs),
    /// Show every manual pick recorded for one result
    History(HistoryArgs),
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Tab-delimited file with STANDARD_ION_RESULT_ID, MANUAL_PICK and NOTE columns
    #[arg(short, long)]
    pub input: PathBuf,

    /// Recorded as the author of every override this load creates
    #[arg(short, long)]
    pub author: String,

    /// Run every row, report what would change, then roll back
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file (overwritten)
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Standard ion result id
    pub result_id: i64,
}
