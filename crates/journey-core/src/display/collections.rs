//! Collection wrapper types for displaying groups of projects.

use std::{fmt, ops::Index};

use super::datetime::DayOfWeek;
use crate::models::Project;

/// Newtype wrapper for displaying a list of projects compactly.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, Timestamp};
/// use journey_core::{display::Projects, models::Project};
///
/// let project = Project {
///     id: 1,
///     name: "Client Pitch".to_string(),
///     deadline: date(2025, 11, 10),
///     journey: None,
///     journey_generated_at: None,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
/// let output = Projects(vec![project]).to_string();
/// assert!(output.contains("Client Pitch"));
/// ```
pub struct Projects(pub Vec<Project>);

impl Projects {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of projects in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the projects.
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.0.iter()
    }
}

impl Index<usize> for Projects {
    type Output = Project;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Projects {
    type Item = Project;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Projects {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Projects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No projects found.");
        }

        for project in &self.0 {
            writeln!(f, "## {} (ID: {})", project.name, project.id)?;
            writeln!(f)?;
            writeln!(f, "- **Deadline**: {}", DayOfWeek(&project.deadline))?;
            match &project.journey {
                Some(journey) => {
                    writeln!(f, "- **Journey**: {}", journey.status)?;
                    if let Some(current) = journey.current_milestone() {
                        writeln!(
                            f,
                            "- **Current**: {} (due {})",
                            current.description, current.target_date
                        )?;
                    }
                }
                None => writeln!(f, "- **Journey**: not generated")?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
