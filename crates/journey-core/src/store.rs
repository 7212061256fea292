//! Record-store abstraction used by journey generation.
//!
//! The generator never opens a store itself; callers hand it anything that
//! implements [`ProjectStore`]. [`crate::Database`] is the SQLite
//! implementation.

use std::{convert::Infallible, fmt, str::FromStr};

use jiff::Timestamp;

use crate::{
    error::Result,
    models::{JourneyPlan, Project},
};

/// How a project is looked up: by numeric ID or by its unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRef {
    /// Lookup by primary key
    Id(u64),
    /// Lookup by unique name
    Name(String),
}

impl FromStr for ProjectRef {
    type Err = Infallible;

    /// Parses all-digit input as an ID and anything else as a name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<u64>() {
            Ok(id) => ProjectRef::Id(id),
            Err(_) => ProjectRef::Name(trimmed.to_string()),
        })
    }
}

impl Default for ProjectRef {
    fn default() -> Self {
        ProjectRef::Id(0)
    }
}

impl From<u64> for ProjectRef {
    fn from(id: u64) -> Self {
        ProjectRef::Id(id)
    }
}

impl From<&str> for ProjectRef {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(reference) => reference,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectRef::Id(id) => write!(f, "{id}"),
            ProjectRef::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Minimal contract between journey generation and persistent storage.
pub trait ProjectStore {
    /// Fetches exactly one project.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::ProjectNotFound` when nothing matches.
    fn fetch_project(&self, project: &ProjectRef) -> Result<Project>;

    /// Overwrites the stored journey of `project_id` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::PersistenceFailure` carrying the backend detail.
    fn persist_journey_plan(
        &mut self,
        project_id: u64,
        plan: &JourneyPlan,
        generated_at: Timestamp,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_parse_as_id() {
        assert_eq!(ProjectRef::from("42"), ProjectRef::Id(42));
        assert_eq!(ProjectRef::from(" 7 "), ProjectRef::Id(7));
    }

    #[test]
    fn test_other_input_parses_as_name() {
        assert_eq!(
            ProjectRef::from("Client Pitch"),
            ProjectRef::Name("Client Pitch".to_string())
        );
        assert_eq!(ProjectRef::from("-3"), ProjectRef::Name("-3".to_string()));
    }

    #[test]
    fn test_display_round_trips_identifier() {
        assert_eq!(ProjectRef::Id(3).to_string(), "3");
        assert_eq!(ProjectRef::Name("Q4 Review".to_string()).to_string(), "Q4 Review");
    }
}
