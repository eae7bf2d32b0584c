//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use recent_logic_projects::config::file::{FileConfig, expand_tilde};
use recent_logic_projects::config::{
    DEFAULT_EXTENSION, DEFAULT_LIMIT, DEFAULT_SEARCH_PATH, DiscoveryBackend, ExecutionOptions,
    FilterOptions, OpenTarget, ScanOptions, SortCriteria, SortOptions,
};

/// Command-line arguments for narrowing and ordering the list.
#[derive(Parser)]
struct FilteringArgs {
    /// Only list projects modified within the last \[DAYS\] days
    ///
    /// A value of 0 disables time-based filtering.
    #[arg(short = 'd', long)]
    within_days: Option<u32>,

    /// Sort projects by the given criterion
    ///
    /// Supported values: recent (newest first, the default) and name
    /// (alphabetical). Use --reverse to flip the order.
    #[arg(long, value_enum)]
    sort: Option<SortCriteria>,

    /// Reverse the sort order
    #[arg(long)]
    reverse: bool,
}

/// Command-line arguments for what happens after the list is shown.
#[derive(Parser)]
struct ExecutionArgs {
    /// Pick a project from an interactive list and open it
    #[arg(short = 'i', long)]
    interactive: bool,

    /// What "Open Project" opens: the searched folder (root) or the project itself (file)
    #[arg(long, value_enum)]
    open_target: Option<OpenTarget>,
}

/// Command-line arguments for controlling discovery.
#[derive(Parser)]
struct ScanningArgs {
    /// Project file extension to look for, without the dot
    ///
    /// Can be specified multiple times. Defaults to `logicx`.
    #[arg(short = 'e', long = "extension", action = clap::ArgAction::Append)]
    extensions: Vec<String>,

    /// Maximum number of files kept per scan
    #[arg(short = 'l', long)]
    limit: Option<usize>,

    /// How to discover files: an in-process walk (native) or `find | xargs stat` (command)
    #[arg(long, value_enum)]
    backend: Option<DiscoveryBackend>,

    /// The number of threads used to read file metadata
    ///
    /// A value of 0 uses the default number of threads (typically the number of CPU cores).
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Log scan details to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Maximum directory depth to search
    ///
    /// A value of 1 looks only at the immediate children of the folder.
    /// When not set, the search is unlimited.
    #[arg(long)]
    max_depth: Option<usize>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "recent-logic-projects")]
#[command(about = "List Logic Pro projects under a folder, most recently modified first")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Folder to search for projects
    ///
    /// Defaults to `~/Music/Logic` when neither this argument nor the config
    /// file names one.
    dir: Option<PathBuf>,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, spinner, emojis)
    /// is suppressed and a single JSON document is printed to stdout.
    /// Incompatible with `--interactive`.
    #[arg(long)]
    json: bool,

    /// Execution options
    #[command(flatten)]
    execution: ExecutionArgs,

    /// Filtering options
    #[command(flatten)]
    filtering: FilteringArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve the folder to search.
    ///
    /// Priority: CLI argument > config file `dir` > `~/Music/Logic`.
    /// Tilde expansion is applied to every source.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> PathBuf {
        let dir = self
            .dir
            .clone()
            .or_else(|| config.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEARCH_PATH));

        expand_tilde(&dir)
    }

    /// Extract execution options from CLI args and config file.
    ///
    /// For boolean flags, the CLI flag (if set to `true`) takes priority,
    /// then the config file value, then `false`.
    #[must_use]
    pub fn execution_options(&self, config: &FileConfig) -> ExecutionOptions {
        ExecutionOptions {
            interactive: self.execution.interactive
                || config.execution.interactive.unwrap_or(false),
            open_target: self
                .execution
                .open_target
                .or_else(|| {
                    config
                        .execution
                        .open_target
                        .as_ref()
                        .and_then(|s| OpenTarget::from_str(s, true).ok())
                })
                .unwrap_or_default(),
        }
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **extensions**: CLI (if any) > config > `["logicx"]`
    /// - **limit**, **threads**, **`max_depth`**, **backend**: CLI > config > default
    /// - **verbose**: CLI flag `||` config value `||` `false`
    ///
    /// Leading dots are stripped from extensions so `.logicx` and `logicx`
    /// mean the same thing.
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let extensions = if self.scanning.extensions.is_empty() {
            config
                .scanning
                .extensions
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| vec![DEFAULT_EXTENSION.to_string()])
        } else {
            self.scanning.extensions.clone()
        };

        ScanOptions {
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            limit: self
                .scanning
                .limit
                .or(config.scanning.limit)
                .unwrap_or(DEFAULT_LIMIT),
            backend: self
                .scanning
                .backend
                .or_else(|| {
                    config
                        .scanning
                        .backend
                        .as_ref()
                        .and_then(|s| DiscoveryBackend::from_str(s, true).ok())
                })
                .unwrap_or_default(),
            threads: self
                .scanning
                .threads
                .or(config.scanning.threads)
                .unwrap_or(0),
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            max_depth: self.scanning.max_depth.or(config.scanning.max_depth),
        }
    }

    /// Extract filtering options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > `0` (no filtering).
    #[must_use]
    pub fn filter_options(&self, config: &FileConfig) -> FilterOptions {
        FilterOptions {
            within_days: self
                .filtering
                .within_days
                .or(config.filtering.within_days)
                .unwrap_or(0),
        }
    }

    /// Extract sorting options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (most recent first).
    #[must_use]
    pub fn sort_options(&self, config: &FileConfig) -> SortOptions {
        SortOptions {
            criteria: self
                .filtering
                .sort
                .or_else(|| {
                    config
                        .filtering
                        .sort
                        .as_ref()
                        .and_then(|s| SortCriteria::from_str(s, true).ok())
                })
                .unwrap_or_default(),
            reverse: self.filtering.reverse || config.filtering.reverse.unwrap_or(false),
        }
    }
}
