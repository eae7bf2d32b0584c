//! # recent-logic-projects
//!
//! Find Logic Pro projects (`.logicx`) under a folder and list them with the
//! most recently modified first.
//!
//! The core is a single request/response call: [`scan`] (or
//! [`finder::Finder::scan`] for custom options) returns the ordered records or
//! one [`ScanError`]. Presentation, re-scanning when the folder changes and the
//! "Open Project" action are layered on top by [`session`], [`project`] and
//! [`opener`].
//!
//! ```no_run
//! let projects = recent_logic_projects::scan("~/Music/Logic")?;
//! for project in &projects {
//!     println!("{project}");
//! }
//! # Ok::<(), recent_logic_projects::ScanError>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod filtering;
pub mod finder;
pub mod opener;
pub mod output;
pub mod project;
pub mod session;

use std::path::Path;

pub use config::{ExecutionOptions, FilterOptions, OpenTarget, ScanOptions, SortOptions};
pub use error::{OpenError, ScanError};
pub use project::{Project, ProjectId};

/// Scan `path` with the default options.
///
/// A leading `~` is expanded to the home directory. The result is sorted by
/// modification time, most recent first.
///
/// # Errors
///
/// Returns a [`ScanError`] if discovery fails; no partial results are returned.
pub fn scan(path: &str) -> Result<Vec<Project>, ScanError> {
    let root = config::file::expand_tilde(Path::new(path));
    finder::Finder::new(ScanOptions::default()).scan(&root)
}
