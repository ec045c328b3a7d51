// src/runner.rs
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::assemble::assemble_battle_with;
use crate::config::options::ExtractOptions;
use crate::core::document::unwrap_data;
use crate::error::{ExtractError, Result};
use crate::lookup::Tables;
use crate::records::BattleRecord;
use crate::specs::overview::{extract_overview, SeriesIndex};

/// Optional progress sink for the CLI or an embedding app.
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn item_done(&mut self, _path: &Path, _record: &BattleRecord) {}
    fn item_failed(&mut self, _path: &Path, _err: &ExtractError) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// What a batch produced. `failures` is only ever non-empty with
/// `continue_on_error`.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub records: Vec<BattleRecord>,
    pub failures: Vec<(PathBuf, ExtractError)>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Read one saved response from disk.
pub fn read_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Assemble every battle file in `inputs`, attaching series metadata from
/// `overview` when given. Output order follows input order.
pub fn run(
    inputs: &[PathBuf],
    overview: Option<&Path>,
    tables: &Tables,
    options: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let index = match overview {
        Some(path) => {
            let doc = read_document(path)?;
            let index = extract_overview(unwrap_data(&doc))?;
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{}: series data for {} battles", path.display(), index.len()));
            }
            index
        }
        None => SeriesIndex::new(),
    };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(inputs.len());
    }

    let mut summary = RunSummary { records: Vec::with_capacity(inputs.len()), failures: Vec::new() };

    for path in inputs {
        let outcome = read_document(path).and_then(|doc| assemble_battle_with(&doc, tables, &index));
        match outcome {
            Ok(record) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(path, &record);
                }
                summary.records.push(record);
            }
            Err(err) if options.continue_on_error => {
                tracing::warn!(path = %path.display(), error = %err, stale_lookup = err.is_stale_lookup(), "battle skipped");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(path, &err);
                }
                summary.failures.push((path.clone(), err));
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "battle failed");
                return Err(err);
            }
        }
    }

    tracing::info!(records = summary.records.len(), failures = summary.failures.len(), "run finished");
    Ok(summary)
}
