//! JSON directory repository
//!
//! Stores one pretty-printed JSON document per aerodrome, named after its ICAO
//! code, under a single data directory. Writes go through a temporary file and
//! a rename so a crashed run never leaves a truncated aggregate behind. The
//! highest assigned id is found once when the store is opened and advanced
//! under the write lock; unreadable documents are skipped with a warning.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::repository::{AerodromeRepository, adopt_identity, stamp_for_save};
use crate::app::models::aggregate::AerodromeAggregate;
use crate::{Error, Result};

const AGGREGATE_EXTENSION: &str = "json";

/// Repository backed by a directory of JSON files
#[derive(Debug)]
pub struct JsonDirectoryRepository {
    root: PathBuf,

    /// Highest assigned id; serializes id assignment and writes across worker threads
    write_lock: Mutex<u64>,
}

impl JsonDirectoryRepository {
    /// Open a repository rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            Error::io(
                format!("Failed to create data directory {}", root.display()),
                e,
            )
        })?;

        let highest_id = scan_documents(&root)?
            .filter_map(|path| match read_aggregate(&path) {
                Ok(aggregate) => aggregate.id,
                Err(e) => {
                    warn!("Skipping unreadable aggregate document: {}", e);
                    None
                }
            })
            .max()
            .unwrap_or(0);
        debug!(
            "Opened aggregate store at {} (highest id {})",
            root.display(),
            highest_id
        );

        Ok(Self {
            root,
            write_lock: Mutex::new(highest_id),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document holding an ICAO code's aggregate
    pub fn path_for(&self, icao: &str) -> Result<PathBuf> {
        if icao.is_empty() || !icao.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::repository(format!(
                "'{}' cannot be used as an aggregate file name",
                icao
            )));
        }
        Ok(self.root.join(format!("{}.{}", icao, AGGREGATE_EXTENSION)))
    }

    /// Load every stored aggregate, sorted by ICAO code
    pub fn list(&self) -> Result<Vec<AerodromeAggregate>> {
        let mut aggregates = scan_documents(&self.root)?
            .map(|path| read_aggregate(&path))
            .collect::<Result<Vec<_>>>()?;
        aggregates.sort_by(|a, b| a.icao.cmp(&b.icao));
        Ok(aggregates)
    }
}

impl AerodromeRepository for JsonDirectoryRepository {
    fn find_by_icao(&self, icao: &str) -> Result<Option<AerodromeAggregate>> {
        let path = self.path_for(icao)?;
        if !path.exists() {
            return Ok(None);
        }
        read_aggregate(&path).map(Some)
    }

    fn save(&self, mut aggregate: AerodromeAggregate) -> Result<AerodromeAggregate> {
        let path = self.path_for(&aggregate.icao)?;
        let mut highest_id = self
            .write_lock
            .lock()
            .map_err(|_| Error::repository("aggregate store lock poisoned"))?;

        // Another item of the batch may have stored this ICAO since our lookup
        if aggregate.id.is_none() && path.exists() {
            match read_aggregate(&path) {
                Ok(stored) => adopt_identity(&mut aggregate, &stored),
                Err(e) => warn!("Replacing unreadable aggregate document: {}", e),
            }
        }
        let next_id = *highest_id + 1;
        stamp_for_save(&mut aggregate, || next_id);
        *highest_id = (*highest_id).max(aggregate.id.unwrap_or(0));

        let json = serde_json::to_string_pretty(&aggregate).map_err(|e| {
            Error::serialization(format!("Failed to serialize aggregate {}", aggregate.icao), e)
        })?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json)
            .map_err(|e| Error::io(format!("Failed to write {}", staging.display()), e))?;
        fs::rename(&staging, &path)
            .map_err(|e| Error::io(format!("Failed to replace {}", path.display()), e))?;

        debug!(
            "Saved aggregate {} (id {:?}) to {}",
            aggregate.icao,
            aggregate.id,
            path.display()
        );
        Ok(aggregate)
    }
}

/// Aggregate documents directly under `root`
fn scan_documents(root: &Path) -> Result<impl Iterator<Item = PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let path = entry?.into_path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == AGGREGATE_EXTENSION) {
            paths.push(path);
        }
    }
    Ok(paths.into_iter())
}

fn read_aggregate(path: &Path) -> Result<AerodromeAggregate> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::serialization(format!("Invalid aggregate in {}", path.display()), e))
}
