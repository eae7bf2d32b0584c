//! Discovery backends and the line protocol they share.
//!
//! Every backend produces discovery lines of the form `{path},{mtime}` where
//! `mtime` is the modification time in seconds since the Unix epoch. Lines are
//! turned into [`Project`] records by [`parse_line`], so records are identical
//! whichever backend produced them.
//!
//! - [`command`] runs `find | head | xargs stat` in a shell
//! - [`native`] walks the tree in-process and renders the same lines

pub mod command;
pub mod native;

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use chrono::{DateTime, Utc};
use log::trace;

use crate::project::{Project, ProjectId};

/// Render a discovery line for a file and its modification time.
#[must_use]
pub fn format_line(file: &Path, mtime_secs: i64) -> String {
    format!("{},{mtime_secs}", file.display())
}

/// Parse every well-formed line of discovery output, in order.
///
/// Lines without a comma (blank lines, stray diagnostics) are dropped without
/// failing the scan.
#[must_use]
pub fn parse_output(output: &str, root: &Path) -> Vec<Project> {
    output
        .lines()
        .filter_map(|line| {
            let project = parse_line(line, root);
            if project.is_none() {
                trace!("Skipping malformed discovery line: {line:?}");
            }
            project
        })
        .collect()
}

/// Parse a single discovery line into a project record.
///
/// The timestamp is the text after the last comma, so paths that themselves
/// contain commas keep their full name. Returns `None` when the line has no
/// comma at all.
///
/// # Examples
///
/// ```
/// # use std::path::Path;
/// # use recent_logic_projects::discovery::parse_line;
/// let project = parse_line("/a/Song1.logicx,1700000000", Path::new("/a")).unwrap();
/// assert_eq!(project.name, "Song1.logicx");
/// assert_eq!(project.last_modified.timestamp(), 1_700_000_000);
/// ```
#[must_use]
pub fn parse_line(line: &str, root: &Path) -> Option<Project> {
    let (file, timestamp) = line.rsplit_once(',')?;

    Some(Project::new(
        display_name(file).to_string(),
        ProjectId::from_line(line),
        root.to_path_buf(),
        PathBuf::from(file),
        parse_timestamp(timestamp),
    ))
}

/// The final path segment of a discovered file path.
#[must_use]
pub fn display_name(file: &str) -> &str {
    file.rfind(|c: char| c == '/' || c == MAIN_SEPARATOR)
        .map_or(file, |idx| &file[idx + 1..])
}

/// Parse an epoch-seconds field, falling back to the Unix epoch.
///
/// Surrounding whitespace is ignored and fractional seconds are accepted.
/// Anything that is not a finite number, or lies outside the representable
/// range, yields `1970-01-01T00:00:00Z`.
#[must_use]
pub fn parse_timestamp(field: &str) -> DateTime<Utc> {
    let field = field.trim();

    let parsed = match field.parse::<i64>() {
        Ok(secs) => DateTime::from_timestamp(secs, 0),
        Err(_) => field
            .parse::<f64>()
            .ok()
            .filter(|secs| secs.is_finite())
            .and_then(seconds_to_datetime),
    };

    parsed.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Convert fractional seconds to a timestamp with millisecond precision.
#[allow(clippy::cast_possible_truncation)]
fn seconds_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    // float to int casts saturate, out-of-range values are rejected below
    DateTime::from_timestamp_millis((secs * 1000.0).trunc() as i64)
}
