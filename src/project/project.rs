//! Core project record types.
//!
//! This module defines the record produced for every project file found by a
//! scan, and the content-derived identifier used to key it in listings.

use std::{
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

/// Icon shown next to every project in listings.
pub const PROJECT_ICON: &str = "🎧";

/// Stable identifier of a discovered project.
///
/// The identifier is the lowercase hex MD5 digest of the raw discovery line
/// (`path,mtime`). Identical lines always produce identical identifiers; it is
/// only used as a rendering and selection key and uniqueness is not enforced.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Derive the identifier for a raw discovery line.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        Self(format!("{:x}", md5::compute(line.as_bytes())))
    }

    /// The identifier as a hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.0)
    }
}

/// A project file discovered by a scan.
///
/// Every record of a single scan shares the same `path`: the root directory
/// that was searched. The file itself is kept in `file`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Project {
    /// Display label: the final path segment of the discovered file
    pub name: String,

    /// Content hash of the discovery line this record was parsed from
    pub id: ProjectId,

    /// Root directory that was searched
    pub path: PathBuf,

    /// The discovered project file (or bundle directory) itself
    pub file: PathBuf,

    /// Modification time, or the Unix epoch when it could not be parsed
    pub last_modified: DateTime<Utc>,
}

impl Project {
    /// Create a new project record.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::path::PathBuf;
    /// # use chrono::DateTime;
    /// # use recent_logic_projects::project::{Project, ProjectId};
    /// let project = Project::new(
    ///     "Song.logicx".to_string(),
    ///     ProjectId::from_line("/a/Song.logicx,1700000000"),
    ///     PathBuf::from("/a"),
    ///     PathBuf::from("/a/Song.logicx"),
    ///     DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
    /// );
    /// ```
    #[must_use]
    pub const fn new(
        name: String,
        id: ProjectId,
        path: PathBuf,
        file: PathBuf,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            id,
            path,
            file,
            last_modified,
        }
    }

    /// The modification date rendered in the local timezone, as shown in listings.
    #[must_use]
    pub fn modified_label(&self) -> String {
        let local: DateTime<Local> = self.last_modified.with_timezone(&Local);
        local.format("%Y-%m-%d %H:%M").to_string()
    }
}

impl Display for Project {
    /// Format the project as a listing row: icon, name and modification date.
    ///
    /// - `🎧 Song.logicx (2023-11-14 22:13)`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{PROJECT_ICON} {} ({})",
            self.name,
            self.modified_label()
        )
    }
}
