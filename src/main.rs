//! # recent-logic-projects
//!
//! A small CLI that lists the Logic Pro projects under a folder, most recently
//! modified first, and opens the one you pick.
//!
//! ## Features
//!
//! - Native tree walk or the classic `find | head | xargs stat` pipeline
//! - Newest-first listing with optional age filter and name sort
//! - Interactive picker with "Open Project" and "Change search path"
//! - JSON output for scripting
//! - Persistent configuration via `~/.config/recent-logic-projects/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # List projects under ~/Music/Logic
//! recent-logic-projects
//!
//! # Another folder, only the last two weeks
//! recent-logic-projects ~/Sessions --within-days 14
//!
//! # Pick one and open it
//! recent-logic-projects --interactive
//! ```

mod cli;

use std::{
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::{Result, bail};
use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use inquire::Text;
use log::{debug, warn};
use recent_logic_projects::{
    ExecutionOptions, FilterOptions, Project, ScanError, SortOptions,
    config::{FileConfig, file::expand_tilde},
    filtering::{filter_projects, sort_projects},
    finder::Finder,
    opener::open_project,
    output::JsonOutput,
    project::{PickerChoice, Projects},
    session::{ScanOutcome, ScanSession},
};

/// Entry point for the recent-logic-projects application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, resolves the layered configuration, then either prints
/// the list once or runs the interactive picker.
///
/// # Errors
///
/// Returns errors from thread-pool configuration, scanning, the interactive
/// prompts, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let dir = args.directory(&file_config);
    let execution_options = args.execution_options(&file_config);
    let scan_options = args.scan_options(&file_config);
    let filter_options = args.filter_options(&file_config);
    let sort_options = args.sort_options(&file_config);

    init_logging(scan_options.verbose);

    if json_mode && execution_options.interactive {
        bail!("--json and --interactive cannot be used together");
    }

    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    let finder = Finder::new(scan_options).with_quiet(json_mode);
    let view = ListView {
        filter: filter_options,
        sort: sort_options,
    };

    if execution_options.interactive {
        return run_interactive(finder, dir, &view, execution_options);
    }

    run_once(&finder, &dir, &view, json_mode)
}

/// Filter and sort settings applied to every result set before display.
struct ListView {
    filter: FilterOptions,
    sort: SortOptions,
}

impl ListView {
    fn apply(&self, projects: Vec<Project>) -> Projects {
        let mut projects = filter_projects(projects, &self.filter, Utc::now());
        sort_projects(&mut projects, &self.sort);
        projects.into()
    }
}

/// Scan once and print the list (or the JSON document).
fn run_once(finder: &Finder, dir: &Path, view: &ListView, json_mode: bool) -> Result<()> {
    let root = dir.display().to_string();

    let projects = match finder.scan(dir) {
        Ok(projects) => view.apply(projects),
        Err(err) => {
            if json_mode {
                let output = JsonOutput::from_error(&root, &err.to_string());
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                eprintln!("{}", "⚠️  Something went wrong".red().bold());
            }
            return Err(err.into());
        }
    };

    if json_mode {
        let output = JsonOutput::from_projects(&root, projects.as_slice());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("{}", format!("✨ No projects found in {root}").green());
        return Ok(());
    }

    println!(
        "\n{}",
        format!("🎹 Recent projects in {root} ({})", projects.len()).bold()
    );
    projects.print_listing();

    Ok(())
}

/// Run the picker loop until a project is opened or the user leaves.
///
/// Changing the search path starts a new scan; if it fails the previous list
/// stays on screen and the error is shown once.
fn run_interactive(
    finder: Finder,
    mut dir: PathBuf,
    view: &ListView,
    execution_options: ExecutionOptions,
) -> Result<()> {
    let session = ScanSession::new(finder);

    loop {
        let outcome = session.scan(&dir, notify_scan_error);
        match &outcome {
            ScanOutcome::Applied(count) => debug!("{count} projects in {}", dir.display()),
            ScanOutcome::Failed(_) => {
                if let Some(previous) = session.snapshot().path
                    && previous != dir
                {
                    println!(
                        "{}",
                        format!("Still showing {}", previous.display()).dimmed()
                    );
                }
            }
            ScanOutcome::Superseded => {}
        }

        let projects = view.apply(session.projects());
        if let Some(notice) = empty_list_notice(&outcome, &projects, &dir) {
            println!("{}", notice.green());
        }

        match projects.interactive_selection()? {
            PickerChoice::Open(project) => {
                match open_project(&project, execution_options.open_target) {
                    Ok(opened) => {
                        println!("{} {}", "📂 Opened".green(), opened.display());
                        return Ok(());
                    }
                    Err(err) => {
                        eprintln!("{}", "⚠️  Something went wrong".red().bold());
                        eprintln!("   {err}");
                    }
                }
            }
            PickerChoice::ChangePath => {
                if let Some(next) = prompt_search_path(&dir)? {
                    dir = next;
                }
            }
            PickerChoice::Quit => return Ok(()),
        }
    }
}

/// The "nothing found" line, shown only when a scan of `dir` succeeded.
///
/// After a failure the error notification already covers the empty list.
fn empty_list_notice(outcome: &ScanOutcome, shown: &Projects, dir: &Path) -> Option<String> {
    (matches!(outcome, ScanOutcome::Applied(_)) && shown.is_empty())
        .then(|| format!("✨ No projects found in {}", dir.display()))
}

/// Show the error notification for a failed scan.
fn notify_scan_error(err: &ScanError) {
    warn!("Scan failed: {err}");
    eprintln!("{}", "⚠️  Something went wrong".red().bold());
    eprintln!("   {err}");
}

/// Ask for a new folder, defaulting to the current one.
///
/// Returns `None` when the prompt is skipped or left empty.
fn prompt_search_path(current: &Path) -> Result<Option<PathBuf>> {
    let current = current.display().to_string();
    let answer = Text::new("Search path:")
        .with_default(&current)
        .prompt_skippable()?;

    Ok(answer
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(|s| expand_tilde(Path::new(&s))))
}

/// Set up `env_logger`; `RUST_LOG` overrides the level picked from `verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# recent-logic-projects configuration
# All values shown are their defaults. Uncomment and change as needed.

# Folder to search for projects
# dir = "~/Music/Logic"

[scanning]
# Project file extensions, without the dot
# extensions = ["logicx"]

# Maximum number of files kept per scan
# limit = 200

# Discovery backend: native (in-process walk) or command (find | xargs stat)
# backend = "native"

# Number of threads used to read file metadata (0 = all CPU cores)
# threads = 0

# Log scan details to stderr
# verbose = false

# Maximum directory depth to search (unset = unlimited)
# max_depth = 8

[filtering]
# Only list projects modified within the last N days (0 = no age filter)
# within_days = 0

# Sort output by: recent, name
# sort = "recent"

# Reverse the sort order
# reverse = false

[execution]
# Use the interactive picker
# interactive = false

# What "Open Project" opens: root (the searched folder) or file (the project)
# open_target = "root"
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let dir = config.dir.as_ref().map_or_else(
        || "\"~/Music/Logic\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );
    let extensions = match config.scanning.extensions.as_deref() {
        Some(v) if !v.is_empty() => {
            let items: Vec<String> = v.iter().map(|e| format!("\"{e}\"")).collect();
            format!("[{}]", items.join(", "))
        }
        _ => "[\"logicx\"]  (default)".to_string(),
    };

    format!(
        "\
dir           = {dir}

[scanning]
extensions    = {extensions}
limit         = {limit}
backend       = {backend}
threads       = {threads}
verbose       = {verbose}
max_depth     = {max_depth}

[filtering]
within_days   = {within_days}
sort          = {sort}
reverse       = {reverse}

[execution]
interactive   = {interactive}
open_target   = {open_target}",
        limit = show_usize(config.scanning.limit, "200"),
        backend = show_str(config.scanning.backend.as_deref(), "native"),
        threads = show_usize(config.scanning.threads, "0 (all cores)"),
        verbose = show_bool(config.scanning.verbose, false),
        max_depth = show_usize(config.scanning.max_depth, "(unlimited)"),
        within_days = config
            .filtering
            .within_days
            .map_or_else(|| "0  (default)".to_string(), |v| v.to_string()),
        sort = show_str(config.filtering.sort.as_deref(), "recent"),
        reverse = show_bool(config.filtering.reverse, false),
        interactive = show_bool(config.execution.interactive, false),
        open_target = show_str(config.execution.open_target.as_deref(), "root"),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
