//! Collection management and presentation for discovered projects.
//!
//! This module provides the `Projects` struct which wraps the ordered result
//! of a scan and knows how to print it as a listing or offer it in an
//! interactive picker with the "Open Project" action.

use std::fmt::{Display, Formatter};

use anyhow::Result;
use colored::Colorize;
use inquire::Select;

use super::{Project, project::PROJECT_ICON};

/// An ordered collection of discovered projects.
///
/// The order is the order produced by the scan (newest first unless the
/// caller re-sorted), and is preserved by every operation here.
#[derive(Debug, Default)]
pub struct Projects(Vec<Project>);

impl From<Vec<Project>> for Projects {
    fn from(projects: Vec<Project>) -> Self {
        Self(projects)
    }
}

/// What the user picked in the interactive list.
#[derive(Debug)]
pub enum PickerChoice {
    /// Run "Open Project" on this project
    Open(Project),

    /// Edit the search path and scan again
    ChangePath,

    /// Leave the picker
    Quit,
}

/// One row of the interactive list.
enum PickerItem<'a> {
    Project(&'a Project),
    ChangePath,
}

impl Display for PickerItem<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project(project) => write!(f, "{project}"),
            Self::ChangePath => f.write_str("🔍 Change search path..."),
        }
    }
}

impl Projects {
    /// Get the number of projects in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a slice of the underlying project collection.
    #[must_use]
    pub fn as_slice(&self) -> &[Project] {
        &self.0
    }

    /// Print the projects as a listing, one row per project.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   🎧 Song2.logicx                      2027-01-15 08:00
    ///   🎧 Song1.logicx                      2023-11-14 22:13
    /// ```
    pub fn print_listing(&self) {
        let width = self
            .0
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0);

        for project in &self.0 {
            let padding = width - project.name.chars().count();
            println!(
                "  {PROJECT_ICON} {}{}  {}",
                project.name.bold(),
                " ".repeat(padding),
                project.modified_label().dimmed()
            );
        }
    }

    /// Present the projects in an interactive list.
    ///
    /// Besides one row per project, the list offers a "Change search path"
    /// entry. Pressing Escape leaves the picker.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    /// - The terminal doesn't support interactive input
    /// - The user interrupts the dialog (Ctrl+C)
    pub fn interactive_selection(&self) -> Result<PickerChoice> {
        let mut items: Vec<PickerItem<'_>> = self.0.iter().map(PickerItem::Project).collect();
        items.push(PickerItem::ChangePath);

        let choice = Select::new("Open Project:", items)
            .with_page_size(15)
            .prompt_skippable()?;

        Ok(match choice {
            Some(PickerItem::Project(project)) => PickerChoice::Open(project.clone()),
            Some(PickerItem::ChangePath) => PickerChoice::ChangePath,
            None => PickerChoice::Quit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectId;
    use chrono::DateTime;
    use std::path::PathBuf;

    fn create_test_project(name: &str, secs: i64) -> Project {
        let line = format!("/music/{name},{secs}");
        Project::new(
            name.to_string(),
            ProjectId::from_line(&line),
            PathBuf::from("/music"),
            PathBuf::from(format!("/music/{name}")),
            DateTime::from_timestamp(secs, 0).unwrap(),
        )
    }

    #[test]
    fn test_projects_from_vec_preserves_order() {
        let projects: Projects = vec![
            create_test_project("B.logicx", 2),
            create_test_project("A.logicx", 1),
        ]
        .into();

        assert_eq!(projects.len(), 2);
        assert!(!projects.is_empty());
        assert_eq!(projects.as_slice()[0].name, "B.logicx");
        assert_eq!(projects.as_slice()[1].name, "A.logicx");
    }

    #[test]
    fn test_empty_projects() {
        let projects = Projects::default();
        assert!(projects.is_empty());
        assert_eq!(projects.len(), 0);
    }

    #[test]
    fn test_picker_item_display() {
        let project = create_test_project("Song.logicx", 0);
        assert_eq!(
            PickerItem::Project(&project).to_string(),
            project.to_string()
        );
        assert_eq!(
            PickerItem::ChangePath.to_string(),
            "🔍 Change search path..."
        );
    }
}
