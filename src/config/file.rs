//! Configuration file support for persistent settings.
//!
//! This module loads configuration from a TOML file located at
//! `~/.config/recent-logic-projects/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! dir = "~/Music/Logic"
//!
//! [scanning]
//! extensions = ["logicx"]
//! limit = 200
//! backend = "native"
//! threads = 0
//! verbose = false
//! max_depth = 8
//!
//! [filtering]
//! within_days = 30
//! sort = "recent"
//! reverse = false
//!
//! [execution]
//! interactive = true
//! open_target = "root"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the directory holding the config file under the platform config dir.
const APP_DIR: &str = "recent-logic-projects";

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Default folder to search
    pub dir: Option<PathBuf>,

    /// Scanning options
    #[serde(default)]
    pub scanning: FileScanConfig,

    /// Filtering options
    #[serde(default)]
    pub filtering: FileFilterConfig,

    /// Execution options
    #[serde(default)]
    pub execution: FileExecutionConfig,
}

/// Scanning options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileScanConfig {
    /// Project file extensions, without the leading dot
    pub extensions: Option<Vec<String>>,

    /// Maximum number of matches kept per scan
    pub limit: Option<usize>,

    /// Discovery backend (`"native"` or `"command"`)
    pub backend: Option<String>,

    /// Number of threads for metadata reads
    pub threads: Option<usize>,

    /// Whether to log scan details
    pub verbose: Option<bool>,

    /// Maximum directory depth to search
    pub max_depth: Option<usize>,
}

/// Filtering options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileFilterConfig {
    /// Only show projects modified within this many days
    pub within_days: Option<u32>,

    /// Sort criterion (`"recent"`, `"name"`)
    pub sort: Option<String>,

    /// Whether to reverse the sort order
    pub reverse: Option<bool>,
}

/// Execution options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileExecutionConfig {
    /// Whether to use the interactive picker
    pub interactive: Option<bool>,

    /// What "Open Project" opens (`"root"` or `"file"`)
    pub open_target: Option<String>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use recent_logic_projects::config::file::expand_tilde;
/// let absolute = PathBuf::from("/absolute/path");
/// assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The file lives at `<config_dir>/recent-logic-projects/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory.
    /// Returns `None` if that directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or mistyped values
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.dir.is_none());
        assert!(config.scanning.extensions.is_none());
        assert!(config.scanning.limit.is_none());
        assert!(config.scanning.backend.is_none());
        assert!(config.scanning.threads.is_none());
        assert!(config.scanning.verbose.is_none());
        assert!(config.scanning.max_depth.is_none());
        assert!(config.filtering.within_days.is_none());
        assert!(config.filtering.sort.is_none());
        assert!(config.filtering.reverse.is_none());
        assert!(config.execution.interactive.is_none());
        assert!(config.execution.open_target.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
dir = "~/Music/Logic"

[scanning]
extensions = ["logicx", "band"]
limit = 50
backend = "command"
threads = 4
verbose = true
max_depth = 6

[filtering]
within_days = 14
sort = "name"
reverse = true

[execution]
interactive = true
open_target = "file"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.dir, Some(PathBuf::from("~/Music/Logic")));
        assert_eq!(
            config.scanning.extensions,
            Some(vec!["logicx".to_string(), "band".to_string()])
        );
        assert_eq!(config.scanning.limit, Some(50));
        assert_eq!(config.scanning.backend, Some("command".to_string()));
        assert_eq!(config.scanning.threads, Some(4));
        assert_eq!(config.scanning.verbose, Some(true));
        assert_eq!(config.scanning.max_depth, Some(6));
        assert_eq!(config.filtering.within_days, Some(14));
        assert_eq!(config.filtering.sort, Some("name".to_string()));
        assert_eq!(config.filtering.reverse, Some(true));
        assert_eq!(config.execution.interactive, Some(true));
        assert_eq!(config.execution.open_target, Some("file".to_string()));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r"
[scanning]
limit = 10
";

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert!(config.dir.is_none());
        assert_eq!(config.scanning.limit, Some(10));
        assert!(config.scanning.extensions.is_none());
        assert!(config.filtering.sort.is_none());
        assert!(config.execution.interactive.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.dir.is_none());
        assert!(config.scanning.limit.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[scanning]
limit = "lots"
"#;
        let result = toml::from_str::<FileConfig>(toml_content);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "dir = \"/srv/music\"\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();
        assert_eq!(config.dir, Some(PathBuf::from("/srv/music")));
    }

    #[test]
    fn test_load_from_malformed_file_mentions_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "dir = [").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = FileConfig::load_from(&tmp.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with(Path::new(APP_DIR).join("config.toml")));
        }
    }

    #[test]
    fn test_expand_tilde_with_home() {
        let expanded = expand_tilde(&PathBuf::from("~/Music/Logic"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("Music").join("Logic"));
        }
    }

    #[test]
    fn test_expand_tilde_bare() {
        let expanded = expand_tilde(&PathBuf::from("~"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home);
        }
    }

    #[test]
    fn test_expand_tilde_no_effect_on_non_tilde() {
        let relative = PathBuf::from("some/relative/path");
        assert_eq!(expand_tilde(&relative), relative);

        let absolute = PathBuf::from("/usr/local/music");
        assert_eq!(expand_tilde(&absolute), absolute);

        // `~user` is not the current user's home
        let other_user = PathBuf::from("~bob/Music");
        assert_eq!(expand_tilde(&other_user), other_user);
    }
}
