//! Best-result persistence keyed by board size.
//!
//! The on-disk form is a single JSON object mapping each size to the best
//! known `{moves, time}` pair, e.g. `{"3": {"moves": 40, "time": 55.2}}`.
//! A result is better when it took fewer moves; elapsed time only breaks
//! ties between equal move counts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name used when the caller has no better location for the store.
pub const DEFAULT_RESULTS_FILE: &str = "best_results.json";

/// Errors from persisting the mapping. Load failures are not errors: a
/// missing or corrupt file degrades to an empty store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write results to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A finished game worth remembering: move count and elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestResult {
    pub moves: u32,
    /// Elapsed seconds, measured by the caller.
    pub time: f64,
}

impl BestResult {
    /// Whether this result replaces `current`: fewer moves always wins,
    /// equal moves fall back to the smaller time.
    fn beats(&self, current: &BestResult) -> bool {
        self.moves < current.moves || (self.moves == current.moves && self.time < current.time)
    }
}

/// Durable mapping from board size to the best recorded result.
#[derive(Debug)]
pub struct ResultStore {
    path: PathBuf,
    best: FxHashMap<u32, BestResult>,
}

impl ResultStore {
    /// Opens the store at `path`, reading any existing mapping.
    ///
    /// A missing file is a normal first run. An unreadable or corrupt file
    /// is logged and treated as empty, so a damaged results file can never
    /// block play.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(best) => best,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring corrupt results file");
                    FxHashMap::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "results file unreadable, starting empty");
                FxHashMap::default()
            }
        };
        Self { path, best }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best known result for a board size, if any. Never fails.
    pub fn best_for(&self, size: u32) -> Option<BestResult> {
        self.best.get(&size).copied()
    }

    /// Offers a finished game; keeps it iff it beats the stored best (the
    /// first result for a size always does).
    ///
    /// Returns whether the record was kept. A kept record is persisted
    /// immediately; if persistence fails the in-memory record still stands
    /// for the rest of the session and the error is returned for the caller
    /// to surface as a non-blocking warning.
    pub fn record_if_better(
        &mut self,
        size: u32,
        candidate: BestResult,
    ) -> Result<bool, StoreError> {
        let improves = match self.best.get(&size) {
            Some(current) => candidate.beats(current),
            None => true,
        };
        if !improves {
            return Ok(false);
        }
        self.best.insert(size, candidate);
        self.persist()?;
        Ok(true)
    }

    /// Rewrites the whole mapping: serialize, write a sibling temp file,
    /// then rename over the target so readers never see a partial file.
    fn persist(&self) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.best)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, encoded)
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Formats elapsed seconds the way the scoreboard shows them: whole
/// minutes, then zero-padded seconds with two decimals (`1:05.50`).
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let rest = seconds - (minutes as f64) * 60.0;
    format!("{minutes}:{rest:05.2}")
}
