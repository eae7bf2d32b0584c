//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, the result of a scan is printed to stdout
//! as a single JSON object instead of the human-readable listing.

use serde::Serialize;

use crate::project::Project;

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The directory that was searched.
    pub root: String,

    /// Projects in display order.
    pub projects: Vec<JsonProjectEntry>,

    /// Number of projects listed.
    pub total_projects: usize,

    /// Error message when the scan failed; `projects` is empty then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single project entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonProjectEntry {
    /// Content hash identifying the entry.
    pub id: String,

    /// File name of the project.
    pub name: String,

    /// The directory that was searched.
    pub path: String,

    /// The project file itself.
    pub file: String,

    /// Modification time in RFC 3339 form (UTC).
    pub last_modified: String,

    /// Modification time in seconds since the Unix epoch.
    pub last_modified_epoch: i64,
}

impl JsonOutput {
    /// Build the output for a successful scan.
    #[must_use]
    pub fn from_projects(root: &str, projects: &[Project]) -> Self {
        Self {
            root: root.to_string(),
            projects: projects.iter().map(JsonProjectEntry::from_project).collect(),
            total_projects: projects.len(),
            error: None,
        }
    }

    /// Build the output for a failed scan.
    #[must_use]
    pub fn from_error(root: &str, message: &str) -> Self {
        Self {
            root: root.to_string(),
            projects: Vec::new(),
            total_projects: 0,
            error: Some(message.to_string()),
        }
    }
}

impl JsonProjectEntry {
    /// Convert a `Project` into a `JsonProjectEntry`.
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            name: project.name.clone(),
            path: project.path.display().to_string(),
            file: project.file.display().to_string(),
            last_modified: project.last_modified.to_rfc3339(),
            last_modified_epoch: project.last_modified.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::parse_output;
    use std::path::Path;

    #[test]
    fn test_json_output_from_projects() {
        let projects = parse_output(
            "/a/Song2.logicx,1800000000\n/a/Song1.logicx,1700000000\n",
            Path::new("/a"),
        );

        let output = JsonOutput::from_projects("/a", &projects);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["root"], "/a");
        assert_eq!(json["total_projects"], 2);
        assert_eq!(json["projects"][0]["name"], "Song2.logicx");
        assert_eq!(json["projects"][0]["path"], "/a");
        assert_eq!(json["projects"][0]["file"], "/a/Song2.logicx");
        assert_eq!(json["projects"][0]["last_modified_epoch"], 1_800_000_000);
        assert_eq!(json["projects"][1]["last_modified"], "2023-11-14T22:13:20+00:00");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_json_output_from_error() {
        let output = JsonOutput::from_error("/a", "find: /a: No such file or directory");
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["total_projects"], 0);
        assert_eq!(json["projects"].as_array().unwrap().len(), 0);
        assert_eq!(json["error"], "find: /a: No such file or directory");
    }
}
