//! Error types for scanning and opening projects.
//!
//! Every failure a scan can hit collapses into a single [`ScanError`]; callers
//! only distinguish "the scan failed" from "the scan succeeded" and show the
//! error message to the user.

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// A scan that produced no results.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The discovery command could not be started.
    #[error("Failed to run discovery command: {0}")]
    Spawn(#[source] io::Error),

    /// The discovery command wrote to standard error.
    ///
    /// The text is carried unchanged; stdout is ignored when this happens.
    #[error("{0}")]
    Stderr(String),

    /// The discovery command exited unsuccessfully without writing to stderr.
    #[error("Discovery command exited with {0}")]
    ExitStatus(ExitStatus),

    /// The native walk could not read part of the tree.
    #[error("Error reading {}: {message}", path.display())]
    Walk {
        /// Path that failed, or the root when the walker reported none
        path: PathBuf,
        /// Underlying error text
        message: String,
    },

    /// The configured extensions do not form a valid pattern.
    #[error("Invalid extension pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A newer scan started before this one finished.
    #[error("Scan was superseded by a newer request")]
    Cancelled,
}

/// Failure of the "Open Project" action.
#[derive(Error, Debug)]
pub enum OpenError {
    /// The platform open command could not be started.
    #[error("Failed to launch `{program}`: {source}")]
    Spawn {
        /// Program that was invoked
        program: &'static str,
        #[source]
        source: io::Error,
    },

    /// The platform open command reported failure.
    #[error("Failed to open {}: `{program}` exited with {status}", path.display())]
    Status {
        /// Program that was invoked
        program: &'static str,
        /// Path that was being opened
        path: PathBuf,
        /// Exit status of the program
        status: ExitStatus,
    },
}
