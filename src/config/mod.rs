//! Configuration types for scanning, filtering and presentation.
//!
//! Option structs here are the resolved values the library works with. The
//! [`file`] module holds the on-disk TOML representation whose fields are all
//! optional so they can be layered under CLI arguments.

pub mod execution;
pub mod file;
pub mod filter;
pub mod scan;

pub use execution::{ExecutionOptions, OpenTarget};
pub use file::FileConfig;
pub use filter::{FilterOptions, SortCriteria, SortOptions};
pub use scan::{DEFAULT_EXTENSION, DEFAULT_LIMIT, DiscoveryBackend, ScanOptions};

/// Folder searched when neither the command line nor the config file names one.
pub const DEFAULT_SEARCH_PATH: &str = "~/Music/Logic";
