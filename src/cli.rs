//! Command-line arguments for the `job-match` driver

use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "job-match")]
#[command(about = "Score and rank job postings for an applicant")]
pub struct Cli {
    /// JSON request file with `applicant` and `postings` (stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Annotate every posting instead of returning the recommended list
    #[arg(long)]
    pub all: bool,

    /// Evaluation instant (RFC 3339), defaults to now
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}
