//! Shell discovery backend.
//!
//! Runs `find -H <root> -regex <pattern> | head -n <limit> | xargs -I{} stat <fmt> "{}"`
//! through `sh -c` and parses its standard output. Any text on standard error
//! fails the whole scan, even when standard output holds valid lines.
//!
//! `-H` makes `find` follow the root when it is a symlink, as the native walk
//! does.

use std::{
    path::Path,
    process::{Command, ExitStatus},
    sync::atomic::{AtomicBool, Ordering},
};

use log::debug;

use crate::{config::ScanOptions, error::ScanError, project::Project};

use super::parse_output;

/// `stat` arguments printing `path,mtime-seconds`.
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
const STAT_ARGS: &str = r#"-f "%N,%m""#;

/// `stat` arguments printing `path,mtime-seconds`.
#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
)))]
const STAT_ARGS: &str = r#"-c "%n,%Y""#;

/// Build the shell pipeline for a scan of `root`.
///
/// `-maxdepth` goes before `-regex`; GNU `find` warns on stderr otherwise.
#[must_use]
pub fn build_command(root: &Path, options: &ScanOptions) -> String {
    let root = shell_escape::unix::escape(root.to_string_lossy());
    let pattern = shell_escape::unix::escape(options.find_pattern().into());
    let depth = options
        .max_depth
        .map_or_else(String::new, |d| format!(" -maxdepth {d}"));

    format!(
        "find -H {root}{depth} -regex {pattern} | head -n {limit} | xargs -I{{}} stat {STAT_ARGS} \"{{}}\"",
        limit = options.limit,
    )
}

/// Run the discovery pipeline and parse its output.
///
/// # Errors
///
/// - [`ScanError::Spawn`] if `sh` cannot be started
/// - [`ScanError::Stderr`] if the pipeline wrote anything to standard error
/// - [`ScanError::ExitStatus`] if it exited unsuccessfully without stderr output
/// - [`ScanError::Cancelled`] if `cancel` was raised while it ran
pub fn discover(
    root: &Path,
    options: &ScanOptions,
    cancel: &AtomicBool,
) -> Result<Vec<Project>, ScanError> {
    let command = build_command(root, options);
    debug!("Running discovery command: {command}");

    let output = Command::new("sh")
        .arg("-c")
        .arg(&command)
        .output()
        .map_err(ScanError::Spawn)?;

    if cancel.load(Ordering::Relaxed) {
        return Err(ScanError::Cancelled);
    }

    let projects = interpret_output(&output.stdout, &output.stderr, output.status, root)?;
    debug!("Discovery command produced {} projects", projects.len());

    Ok(projects)
}

/// Turn the pipeline's captured output into records.
///
/// Non-empty stderr wins over everything else: stdout is not looked at, even
/// when it holds well-formed lines.
///
/// # Errors
///
/// - [`ScanError::Stderr`] if `stderr` is not empty
/// - [`ScanError::ExitStatus`] if `status` is unsuccessful
pub fn interpret_output(
    stdout: &[u8],
    stderr: &[u8],
    status: ExitStatus,
    root: &Path,
) -> Result<Vec<Project>, ScanError> {
    if !stderr.is_empty() {
        return Err(ScanError::Stderr(
            String::from_utf8_lossy(stderr).into_owned(),
        ));
    }

    if !status.success() {
        return Err(ScanError::ExitStatus(status));
    }

    Ok(parse_output(&String::from_utf8_lossy(stdout), root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_shape() {
        let command = build_command(Path::new("/music/Logic"), &ScanOptions::default());

        assert!(command.starts_with("find -H /music/Logic -regex "));
        assert!(command.contains(r"'.*\.\(logicx\)'"));
        assert!(command.contains("| head -n 200 |"));
        assert!(command.contains("xargs -I{} stat "));
        assert!(command.ends_with("\"{}\""));
    }

    #[test]
    fn test_build_command_quotes_root() {
        let command = build_command(
            Path::new("/music/My Songs; rm -rf ~"),
            &ScanOptions::default(),
        );

        assert!(command.starts_with("find -H '/music/My Songs; rm -rf ~' -regex"));
    }

    #[test]
    fn test_build_command_uses_limit() {
        let opts = ScanOptions {
            limit: 7,
            ..ScanOptions::default()
        };
        let command = build_command(Path::new("/m"), &opts);

        assert!(command.contains("| head -n 7 |"));
    }

    #[test]
    fn test_build_command_max_depth_precedes_regex() {
        let opts = ScanOptions {
            max_depth: Some(2),
            ..ScanOptions::default()
        };
        let command = build_command(Path::new("/m"), &opts);

        assert!(command.starts_with("find -H /m -maxdepth 2 -regex "));
    }

    #[test]
    fn test_build_command_without_max_depth() {
        let command = build_command(Path::new("/m"), &ScanOptions::default());
        assert!(!command.contains("-maxdepth"));
    }

    #[cfg(unix)]
    #[test]
    fn test_interpret_output_stderr_discards_valid_stdout() {
        use std::os::unix::process::ExitStatusExt;

        let result = interpret_output(
            b"/m/Good.logicx,1700000000\n",
            b"xargs: unmatched single quote\n",
            ExitStatus::from_raw(0),
            Path::new("/m"),
        );

        match result {
            Err(ScanError::Stderr(text)) => assert!(text.contains("unmatched single quote")),
            other => panic!("expected stderr failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_interpret_output_failed_status_without_stderr() {
        use std::os::unix::process::ExitStatusExt;

        // raw wait status: exit code 1
        let result = interpret_output(
            b"/m/Good.logicx,1700000000\n",
            b"",
            ExitStatus::from_raw(1 << 8),
            Path::new("/m"),
        );

        assert!(matches!(result, Err(ScanError::ExitStatus(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_interpret_output_success_parses_stdout() {
        use std::os::unix::process::ExitStatusExt;

        let projects = interpret_output(
            b"/m/Good.logicx,1700000000\ngarbage\n",
            b"",
            ExitStatus::from_raw(0),
            Path::new("/m"),
        )
        .unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Good.logicx");
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_missing_root_reports_stderr() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");

        let result = discover(&missing, &ScanOptions::default(), &AtomicBool::new(false));

        match result {
            Err(ScanError::Stderr(text)) => assert!(text.contains("does-not-exist")),
            other => panic!("expected stderr failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_raised_cancel_flag() {
        let tmp = tempfile::TempDir::new().unwrap();

        let result = discover(tmp.path(), &ScanOptions::default(), &AtomicBool::new(true));

        assert!(matches!(result, Err(ScanError::Cancelled)));
    }
}
