//! The project finder: one scan of one root directory.
//!
//! A scan runs the configured discovery backend, turns its output into
//! [`Project`] records and orders them newest-first. Any failure of the
//! backend fails the whole scan; there are no partial results.

use std::{path::Path, sync::atomic::AtomicBool, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::{
    config::{DiscoveryBackend, ScanOptions},
    discovery::{command, native},
    error::ScanError,
    project::Project,
};

/// Runs scans with a fixed set of options.
#[derive(Debug, Clone)]
pub struct Finder {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// When `true`, suppresses the progress spinner (used by `--json` mode).
    quiet: bool,
}

impl Finder {
    /// Create a new finder with the specified options.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use recent_logic_projects::{config::ScanOptions, finder::Finder};
    /// let finder = Finder::new(ScanOptions::default()).with_quiet(true);
    /// ```
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self {
            scan_options,
            quiet: true,
        }
    }

    /// Enable or disable quiet mode.
    ///
    /// Finders are quiet by default; the CLI turns the spinner on for
    /// human-readable output.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Scan `root` for project files.
    ///
    /// Returns the records sorted by modification time, most recent first.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] if discovery fails in any way.
    pub fn scan(&self, root: &Path) -> Result<Vec<Project>, ScanError> {
        self.scan_cancellable(root, &AtomicBool::new(false))
    }

    /// Scan `root`, giving up with [`ScanError::Cancelled`] once `cancel` is raised.
    ///
    /// # Panics
    ///
    /// This method may panic if the progress bar template string is invalid,
    /// though this should not occur as the template is hardcoded and valid.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] if discovery fails or is cancelled.
    pub fn scan_cancellable(
        &self,
        root: &Path,
        cancel: &AtomicBool,
    ) -> Result<Vec<Project>, ScanError> {
        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message(format!("Scanning {}...", root.display()));
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };

        debug!(
            "Scanning {} with the {:?} backend",
            root.display(),
            self.scan_options.backend
        );

        let result = match self.scan_options.backend {
            DiscoveryBackend::Native => native::discover(root, &self.scan_options, cancel),
            DiscoveryBackend::Command => command::discover(root, &self.scan_options, cancel),
        };

        progress.finish_and_clear();

        let mut projects = result?;
        sort_newest_first(&mut projects);

        Ok(projects)
    }
}

/// Order projects by modification time, most recent first.
///
/// The sort is stable: projects with equal timestamps keep discovery order.
pub fn sort_newest_first(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
}
