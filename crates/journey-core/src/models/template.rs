//! Milestone templates and generation configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{JourneyError, Result};

/// Fraction of the deadline window used for scheduling milestones.
pub const DEFAULT_USABLE_FRACTION: f64 = 0.85;

/// Projects with fewer days than this remaining are at risk.
pub const DEFAULT_AT_RISK_THRESHOLD_DAYS: i64 = 7;

/// A milestone label and the point of the usable span it is due at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MilestoneTemplate {
    /// Label copied verbatim onto the generated milestone
    pub description: String,

    /// Position within the usable span, in `(0, 1]`
    pub fraction: f64,
}

impl MilestoneTemplate {
    /// Creates a template from a description and a span fraction.
    pub fn new(description: impl Into<String>, fraction: f64) -> Self {
        Self {
            description: description.into(),
            fraction,
        }
    }

    /// Spreads descriptions evenly across the usable span.
    ///
    /// ```rust
    /// use journey_core::models::MilestoneTemplate;
    ///
    /// let templates = MilestoneTemplate::evenly_spaced(["Draft", "Review"]);
    /// assert_eq!(templates[0].fraction, 0.5);
    /// assert_eq!(templates[1].fraction, 1.0);
    /// ```
    pub fn evenly_spaced<I, S>(descriptions: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let descriptions: Vec<String> = descriptions.into_iter().map(Into::into).collect();
        let count = descriptions.len() as f64;
        descriptions
            .into_iter()
            .enumerate()
            .map(|(i, description)| Self::new(description, (i + 1) as f64 / count))
            .collect()
    }
}

/// Tunables for journey generation.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyConfig {
    /// Ordered milestone templates; each depends on the one before it
    pub templates: Vec<MilestoneTemplate>,

    /// Share of the deadline window available for milestones
    pub usable_fraction: f64,

    /// Days-remaining threshold below which the journey is at risk
    pub at_risk_threshold_days: i64,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            templates: MilestoneTemplate::evenly_spaced([
                "Complete Strategic Framework & Insights",
                "Finalize Creative Concepts & Visual Direction",
                "Rehearse Presentation & Final Refinements",
            ]),
            usable_fraction: DEFAULT_USABLE_FRACTION,
            at_risk_threshold_days: DEFAULT_AT_RISK_THRESHOLD_DAYS,
        }
    }
}

impl JourneyConfig {
    /// Replaces the templates, keeping the other settings.
    pub fn with_templates(mut self, templates: Vec<MilestoneTemplate>) -> Self {
        self.templates = templates;
        self
    }

    /// Checks that the templates describe a usable linear schedule.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::InvalidInput` when there are no templates, a
    /// description is blank or repeated, a fraction is outside `(0, 1]`, or
    /// fractions do not strictly increase.
    pub fn validate(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(JourneyError::invalid_input("templates")
                .with_reason("At least one milestone template is required"));
        }

        if !(self.usable_fraction > 0.0 && self.usable_fraction <= 1.0) {
            return Err(JourneyError::invalid_input("usable_fraction")
                .with_reason(format!("{} is outside (0, 1]", self.usable_fraction)));
        }

        let mut previous = 0.0;
        let mut seen = HashSet::new();
        for template in &self.templates {
            let description = template.description.trim();
            if description.is_empty() {
                return Err(JourneyError::invalid_input("templates.description")
                    .with_reason("Milestone descriptions must not be blank"));
            }
            // Dependencies name their predecessor by description
            if !seen.insert(description) {
                return Err(JourneyError::invalid_input("templates.description")
                    .with_reason(format!("Milestone description '{description}' is repeated")));
            }
            if !(template.fraction > 0.0 && template.fraction <= 1.0) {
                return Err(JourneyError::invalid_input("templates.fraction").with_reason(
                    format!(
                        "Fraction {} for '{}' is outside (0, 1]",
                        template.fraction, template.description
                    ),
                ));
            }
            if template.fraction <= previous {
                return Err(JourneyError::invalid_input("templates.fraction").with_reason(
                    format!(
                        "Fractions must strictly increase; '{}' has {} after {}",
                        template.description, template.fraction, previous
                    ),
                ));
            }
            previous = template.fraction;
        }

        Ok(())
    }
}
