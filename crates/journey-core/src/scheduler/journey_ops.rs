//! Journey generation operations for the Scheduler.

use jiff::Timestamp;

use super::Scheduler;
use crate::{
    error::Result,
    generator::{self, DegenerateSpanPolicy, GenerateOptions, JourneyReport},
    params::GenerateJourney,
    schedule::today_utc,
};

impl Scheduler {
    /// Generates a journey for a project and stores it on the project.
    ///
    /// `today` defaults to the current UTC day. Plans over a deadline that is
    /// today or already passed are only stored when `allow_degenerate` is
    /// set; they are always returned.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::ProjectNotFound` if the project does not exist
    /// and `JourneyError::PersistenceFailure` if the write-back fails.
    pub async fn generate_journey(&self, params: &GenerateJourney) -> Result<JourneyReport> {
        let project = params.project.clone();
        let today = params.today.unwrap_or_else(|| today_utc(Timestamp::now()));
        let config = match &params.templates {
            Some(templates) => self.config.clone().with_templates(templates.clone()),
            None => self.config.clone(),
        };
        let options = GenerateOptions {
            degenerate: if params.allow_degenerate {
                DegenerateSpanPolicy::Persist
            } else {
                DegenerateSpanPolicy::Skip
            },
            dry_run: params.dry_run,
        };

        self.with_database(move |db| {
            generator::generate_journey(db, &project, today, &config, options)
        })
        .await
    }

    /// Computes a journey without storing it.
    pub async fn preview_journey(&self, params: &GenerateJourney) -> Result<JourneyReport> {
        let params = GenerateJourney {
            dry_run: true,
            ..params.clone()
        };
        self.generate_journey(&params).await
    }
}
