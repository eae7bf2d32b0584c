//! Scanning configuration for project discovery.
//!
//! This module defines the options that control which files a scan looks for,
//! how many it keeps, and which discovery backend produces them.

use clap::ValueEnum;
use regex::Regex;

use crate::error::ScanError;

/// Extension searched for when none is configured (Logic Pro project bundles).
pub const DEFAULT_EXTENSION: &str = "logicx";

/// Maximum number of discovered files kept per scan.
pub const DEFAULT_LIMIT: usize = 200;

/// How discovery lines are produced.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum DiscoveryBackend {
    /// Walk the tree in-process and read metadata directly
    #[default]
    Native,

    /// Shell out to `find | head | xargs stat`
    Command,
}

/// Configuration for scanning behavior.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// File extensions (without the leading dot) that identify a project
    pub extensions: Vec<String>,

    /// Maximum number of matches kept, in discovery order
    pub limit: usize,

    /// Discovery backend to use
    pub backend: DiscoveryBackend,

    /// Number of threads for metadata reads (0 = default)
    pub threads: usize,

    /// Whether to log scan details
    pub verbose: bool,

    /// Maximum directory depth to search (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            limit: DEFAULT_LIMIT,
            backend: DiscoveryBackend::default(),
            threads: 0,
            verbose: false,
            max_depth: None,
        }
    }
}

impl ScanOptions {
    /// Regex matched against a full discovered path, e.g. `\.(logicx)$`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if the pattern fails to compile.
    pub fn path_pattern(&self) -> Result<Regex, ScanError> {
        let alternatives: Vec<String> = self.extensions.iter().map(|e| regex::escape(e)).collect();
        Ok(Regex::new(&format!(r"\.({})$", alternatives.join("|")))?)
    }

    /// Pattern in `find -regex` syntax, e.g. `.*\.\(logicx\)`.
    ///
    /// `find` anchors the expression to the whole path, so a leading `.*` is
    /// needed. Alternatives use the `\|` operator.
    #[must_use]
    pub fn find_pattern(&self) -> String {
        let alternatives: Vec<String> = self
            .extensions
            .iter()
            .map(|e| e.replace('.', r"\."))
            .collect();
        format!(r".*\.\({}\)", alternatives.join(r"\|"))
    }
}
