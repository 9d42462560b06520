//! Power-grid infrastructure projects (towers, substations).

use serde::{Deserialize, Serialize};

/// A project record as served by the backend. The status stays a string on
/// the wire; [`ProjectStatus::parse`] classifies it for counting and coloring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub status: String,
    /// "YYYY-MM-DD"
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub project_size_km: Option<f64>,
    #[serde(default)]
    pub tower_type: Option<String>,
    #[serde(default)]
    pub substation_type: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Project {
    pub fn status(&self) -> ProjectStatus {
        ProjectStatus::parse(&self.status)
    }

    /// Tower or substation type, whichever is set.
    pub fn kind(&self) -> Option<&str> {
        self.tower_type
            .as_deref()
            .or(self.substation_type.as_deref())
    }
}

/// Payload for create and update. The backend assigns `project_id` on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInput {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    pub status: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub project_size_km: Option<f64>,
    #[serde(default)]
    pub tower_type: Option<String>,
    #[serde(default)]
    pub substation_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Lifecycle stage. Unrecognized strings land in an explicit bucket instead
/// of being dropped or crashing the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Planned,
    InProgress,
    Completed,
    Unknown,
}

impl ProjectStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "PLANNED" => ProjectStatus::Planned,
            "IN PROGRESS" => ProjectStatus::InProgress,
            "COMPLETED" => ProjectStatus::Completed,
            _ => ProjectStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "PLANNED",
            ProjectStatus::InProgress => "IN PROGRESS",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Status distribution for the dashboard pie summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub in_progress: usize,
    pub completed: usize,
    pub planned: usize,
    pub unknown: usize,
}

impl StatusCounts {
    pub fn tally(projects: &[Project]) -> Self {
        let mut counts = StatusCounts::default();
        for project in projects {
            match project.status() {
                ProjectStatus::InProgress => counts.in_progress += 1,
                ProjectStatus::Completed => counts.completed += 1,
                ProjectStatus::Planned => counts.planned += 1,
                ProjectStatus::Unknown => counts.unknown += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.in_progress + self.completed + self.planned + self.unknown
    }

    /// True when at least one project fell into the unrecognized bucket.
    pub fn has_unknown(&self) -> bool {
        self.unknown > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, status: &str) -> Project {
        Project {
            project_id: id.to_string(),
            name: format!("Project {}", id),
            location: String::new(),
            state: None,
            city: None,
            status: status.to_string(),
            start_date: None,
            end_date: None,
            cost: None,
            project_size_km: None,
            tower_type: None,
            substation_type: None,
            created_by: None,
            created_at: None,
        }
    }

    #[test]
    fn known_statuses_classify() {
        assert_eq!(ProjectStatus::parse("PLANNED"), ProjectStatus::Planned);
        assert_eq!(
            ProjectStatus::parse("IN PROGRESS"),
            ProjectStatus::InProgress
        );
        assert_eq!(ProjectStatus::parse("COMPLETED"), ProjectStatus::Completed);
    }

    #[test]
    fn unknown_statuses_get_their_own_bucket() {
        assert_eq!(ProjectStatus::parse("ON HOLD"), ProjectStatus::Unknown);
        assert_eq!(ProjectStatus::parse(""), ProjectStatus::Unknown);
        // Matching is exact; casing differences are unknown, not coerced.
        assert_eq!(ProjectStatus::parse("planned"), ProjectStatus::Unknown);
    }

    #[test]
    fn tally_counts_every_project_once() {
        let projects = vec![
            project("P0001", "IN PROGRESS"),
            project("P0002", "PLANNED"),
            project("P0003", "IN PROGRESS"),
            project("P0004", "COMPLETED"),
            project("P0005", "CANCELLED"),
        ];
        let counts = StatusCounts::tally(&projects);
        assert_eq!(counts.in_progress, 2);
        assert_eq!(counts.planned, 1);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.unknown, 1);
        assert_eq!(counts.total(), projects.len());
        assert!(counts.has_unknown());
    }

    #[test]
    fn clean_tally_reports_no_unknowns() {
        let counts = StatusCounts::tally(&[project("P0001", "PLANNED")]);
        assert!(!counts.has_unknown());
    }

    #[test]
    fn missing_optional_fields_deserialize() {
        let project: Project = serde_json::from_str(
            r#"{"project_id": "P0009", "name": "Chennai Power Grid"}"#,
        )
        .unwrap();
        assert_eq!(project.status(), ProjectStatus::Unknown);
        assert!(project.cost.is_none());
    }
}
