//! Project records and collections.
//!
//! ## Main Parts
//!
//! - [`Project`] - One discovered project file with its display data
//! - [`ProjectId`] - Content hash of the discovery line a record came from
//! - [`Projects`] - An ordered scan result with listing and picker operations

#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for project records
pub mod project;
pub mod projects;

pub use project::{PROJECT_ICON, Project, ProjectId};
pub use projects::{PickerChoice, Projects};
