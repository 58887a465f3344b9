use std::path::PathBuf;

use clap::Parser;
use dat_core::{MalformedLinePolicy, ParseOptions};
use dat_engine::{ReportOptions, DEFAULT_PREVIEW_CHARS};
use log::LevelFilter;

use super::logging::LogDestination;

/// Parse a dat post log and print its posts, or export them as JSON.
#[derive(Debug, Parser)]
#[command(name = "dat_app", version)]
pub struct Args {
    /// Path to the .dat file.
    pub path: PathBuf,

    /// Source encoding label (e.g. shift_jis, euc-jp, utf-8). Detected when omitted.
    #[arg(long)]
    pub encoding: Option<String>,

    /// Write thread.json into this directory instead of printing the report.
    #[arg(long, value_name = "OUT_DIR")]
    pub json: Option<PathBuf>,

    /// Log a warning for every line with fewer than four fields.
    #[arg(long)]
    pub warn_malformed: bool,

    /// Parse lines in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Number of body characters shown per post in the report.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_CHARS)]
    pub preview_chars: usize,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_options(&self) -> ParseOptions {
        let policy = if self.warn_malformed {
            MalformedLinePolicy::Warn
        } else {
            MalformedLinePolicy::Skip
        };
        ParseOptions::default()
            .with_policy(policy)
            .with_parallel(self.parallel)
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            preview_chars: self.preview_chars,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
