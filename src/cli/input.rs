//! Register entry discovery and loading
//!
//! Each input file holds one aerodrome entry. Its file stem, uppercased, is
//! the ICAO hint handed to the parser.

use crate::{Error, Result};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One register entry read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEntry {
    pub path: PathBuf,
    pub icao_hint: String,
    pub text: String,
}

/// Expand files and directories into an ordered, de-duplicated file list
///
/// Explicit files are always taken; directory contents are walked in file
/// name order and kept when their file name matches `pattern`.
pub fn discover_entry_files(paths: &[PathBuf], pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for path in paths {
        if path.is_file() {
            push_unique(&mut files, path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let candidate = entry.path();
                        if candidate.is_file()
                            && candidate
                                .file_name()
                                .and_then(|name| name.to_str())
                                .is_some_and(|name| matcher.matches(name))
                        {
                            push_unique(&mut files, candidate.to_path_buf());
                        }
                    }
                    Err(e) => {
                        warn!("Error walking directory {}: {}", path.display(), e);
                    }
                }
            }
        } else {
            return Err(Error::input_not_found(path.display().to_string()));
        }
    }

    debug!("Discovered {} register entry files", files.len());
    Ok(files)
}

fn push_unique(files: &mut Vec<PathBuf>, path: PathBuf) {
    if !files.contains(&path) {
        files.push(path);
    }
}

/// ICAO hint derived from a file name ("sbsp.txt" -> "SBSP")
pub fn icao_hint_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.trim().to_uppercase())
        .unwrap_or_default()
}

/// Read one entry; bytes that are not UTF-8 are replaced rather than rejected
pub fn read_entry(path: &Path) -> Result<RegisterEntry> {
    let bytes = fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read entry {}", path.display()), e))?;

    Ok(RegisterEntry {
        path: path.to_path_buf(),
        icao_hint: icao_hint_for(path),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Read all entries in order
pub fn read_entries(files: &[PathBuf]) -> Result<Vec<RegisterEntry>> {
    files.iter().map(|path| read_entry(path)).collect()
}
