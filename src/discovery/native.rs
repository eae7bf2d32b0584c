//! In-process discovery backend.
//!
//! Walks the tree with `walkdir`, keeps the first `limit` entries whose path
//! matches the extension pattern, reads their modification times in parallel
//! and renders each as the discovery line the shell backend would print. The
//! lines go through the shared parser, so both backends yield identical
//! records.
//!
//! Matching covers directories as well as files: Logic Pro projects are
//! bundle directories.

use std::{
    path::Path,
    sync::atomic::{AtomicBool, Ordering},
};

use chrono::{DateTime, Utc};
use log::debug;
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::{config::ScanOptions, error::ScanError, project::Project};

use super::{format_line, parse_line};

/// Walk `root` and build project records for matching entries.
///
/// # Errors
///
/// - [`ScanError::Walk`] if any part of the tree cannot be read (including a
///   missing root) or a match's metadata cannot be read
/// - [`ScanError::Pattern`] if the configured extensions are not a valid pattern
/// - [`ScanError::Cancelled`] if `cancel` is raised during the walk
pub fn discover(
    root: &Path,
    options: &ScanOptions,
    cancel: &AtomicBool,
) -> Result<Vec<Project>, ScanError> {
    debug!("Walking {} for {:?}", root.display(), options.extensions);

    let matches = collect_matches(root, options, cancel)?;

    let lines = matches
        .into_par_iter()
        .map(|entry| discovery_line(root, &entry))
        .collect::<Result<Vec<String>, ScanError>>()?;

    let projects: Vec<Project> = lines
        .iter()
        .filter_map(|line| parse_line(line, root))
        .collect();
    debug!("Walk produced {} projects", projects.len());

    Ok(projects)
}

/// Walk the tree in file-name order and keep the first `limit` matches.
fn collect_matches(
    root: &Path,
    options: &ScanOptions,
    cancel: &AtomicBool,
) -> Result<Vec<DirEntry>, ScanError> {
    let pattern = options.path_pattern()?;

    let mut walker = WalkDir::new(root).sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut matches = Vec::new();

    for entry in walker {
        if cancel.load(Ordering::Relaxed) {
            return Err(ScanError::Cancelled);
        }

        let entry = entry.map_err(|e| walk_error(root, &e))?;

        if matches.len() < options.limit && pattern.is_match(&entry.path().to_string_lossy()) {
            matches.push(entry);
            if matches.len() == options.limit {
                break;
            }
        }
    }

    Ok(matches)
}

/// Read an entry's modification time and render its discovery line.
fn discovery_line(root: &Path, entry: &DirEntry) -> Result<String, ScanError> {
    let metadata = entry.metadata().map_err(|e| walk_error(root, &e))?;
    let modified = metadata.modified().map_err(|e| ScanError::Walk {
        path: entry.path().to_path_buf(),
        message: e.to_string(),
    })?;

    let mtime: DateTime<Utc> = modified.into();
    Ok(format_line(entry.path(), mtime.timestamp()))
}

/// Convert a walk failure into a scan error naming the offending path.
fn walk_error(root: &Path, error: &walkdir::Error) -> ScanError {
    ScanError::Walk {
        path: error.path().unwrap_or(root).to_path_buf(),
        message: error
            .io_error()
            .map_or_else(|| error.to_string(), ToString::to_string),
    }
}
