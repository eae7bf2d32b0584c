//! The "Open Project" action.
//!
//! Hands a path to the platform's generic open facility: `open` on macOS,
//! `cmd /C start` on Windows and `xdg-open` elsewhere.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use log::debug;

use crate::{config::OpenTarget, error::OpenError, project::Project};

#[cfg(target_os = "macos")]
const OPEN_PROGRAM: &str = "open";

#[cfg(target_os = "windows")]
const OPEN_PROGRAM: &str = "cmd";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPEN_PROGRAM: &str = "xdg-open";

/// The path "Open Project" acts on for `project`.
///
/// [`OpenTarget::Root`] yields the scanned directory rather than the project
/// file.
#[must_use]
pub fn target_path(project: &Project, target: OpenTarget) -> &Path {
    match target {
        OpenTarget::Root => &project.path,
        OpenTarget::File => &project.file,
    }
}

/// Open `project` according to `target`.
///
/// # Errors
///
/// Returns an [`OpenError`] if the open command cannot be started or fails.
pub fn open_project(project: &Project, target: OpenTarget) -> Result<PathBuf, OpenError> {
    let path = target_path(project, target);
    open_path(path)?;
    Ok(path.to_path_buf())
}

/// Open `path` with the platform's default handler.
///
/// # Errors
///
/// Returns an [`OpenError`] if the open command cannot be started or exits
/// unsuccessfully.
pub fn open_path(path: &Path) -> Result<(), OpenError> {
    let mut command = open_command(path);
    debug!("Opening {} with {OPEN_PROGRAM}", path.display());

    let status = command.status().map_err(|source| OpenError::Spawn {
        program: OPEN_PROGRAM,
        source,
    })?;

    if !status.success() {
        return Err(OpenError::Status {
            program: OPEN_PROGRAM,
            path: path.to_path_buf(),
            status,
        });
    }

    Ok(())
}

fn open_command(path: &Path) -> Command {
    let mut command = Command::new(OPEN_PROGRAM);
    if cfg!(target_os = "windows") {
        command.args(["/C", "start", ""]);
    }
    command.arg(path);
    command
}
