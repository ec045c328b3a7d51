// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{bail, Result};

use crate::config::options::ExtractOptions;
use crate::error::ExtractError;
use crate::lookup::Tables;
use crate::records::BattleRecord;
use crate::runner::{self, Progress};

/// Extract battle records from saved SplatNet 3 responses.
///
/// Reads `VsHistoryDetailQuery` documents and prints a JSON array of records
/// to stdout. Pass an anarchy or X battle overview to attach series data.
#[derive(Parser, Debug)]
#[command(name = "zipcaster", version)]
pub struct Args {
    /// Config file (default: $ZIPCASTER_CONFIG, then ./zipcaster.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Gear ability table replacing the bundled one
    #[arg(long)]
    pub gear_hashes: Option<PathBuf>,

    /// `*BattleHistoriesQuery` response for series metadata
    #[arg(short, long)]
    pub overview: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Skip battles that fail instead of stopping
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,

    /// Battle detail files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Flags override whatever the config file said.
    pub fn apply(&self, opts: &mut ExtractOptions) {
        if let Some(p) = &self.gear_hashes {
            opts.gear_hashes = Some(p.clone());
        }
        if self.pretty {
            opts.pretty = true;
        }
        if self.keep_going {
            opts.continue_on_error = true;
        }
        if let Some(level) = &self.log_level {
            opts.log_level = level.clone();
        }
    }
}

/// One stderr line per battle.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, path: &Path, record: &BattleRecord) {
        self.done += 1;
        eprintln!("[{}/{}] {} {} {}", self.done, self.total, path.display(), record.mode, record.result);
    }

    fn item_failed(&mut self, path: &Path, err: &ExtractError) {
        self.done += 1;
        eprintln!("[{}/{}] {} FAILED: {err}", self.done, self.total, path.display());
        if err.is_stale_lookup() {
            eprintln!("    lookup data is out of date; refresh --gear-hashes");
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let mut opts = ExtractOptions::load_resolved(args.config.as_deref())?;
    args.apply(&mut opts);
    crate::log::init(&opts.log_level, opts.log_file.as_deref())?;

    let tables = Tables::from_options(&opts)?;
    tracing::debug!(abilities = tables.gear_abilities.len(), "lookup tables loaded");

    let mut progress = CliProgress::default();
    let summary = runner::run(&args.files, args.overview.as_deref(), &tables, &opts, Some(&mut progress))?;

    let out = if opts.pretty {
        serde_json::to_string_pretty(&summary.records)?
    } else {
        serde_json::to_string(&summary.records)?
    };
    println!("{out}");

    if !summary.is_clean() {
        bail!("{} of {} battles failed", summary.failures.len(), args.files.len());
    }
    Ok(())
}
