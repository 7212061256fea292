//! Tests for the scheduler module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    models::{JourneyStatus, MilestoneTemplate},
    params::{CreateProject, DeleteProject, GenerateJourney, ProjectLookup, SetDeadline},
    store::ProjectRef,
};

/// Helper function to create a test scheduler
async fn create_test_scheduler() -> (TempDir, Scheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let scheduler = SchedulerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, scheduler)
}

async fn create_pitch(scheduler: &Scheduler) -> u64 {
    scheduler
        .create_project(&CreateProject {
            name: "Client Pitch".to_string(),
            deadline: date(2025, 11, 10),
        })
        .await
        .expect("Failed to create project")
        .id
}

#[tokio::test]
async fn test_generate_stores_journey_on_project() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let id = create_pitch(&scheduler).await;

    let report = scheduler
        .generate_journey(&GenerateJourney {
            project: ProjectRef::Id(id),
            today: Some(date(2025, 10, 27)),
            ..Default::default()
        })
        .await
        .expect("Failed to generate journey");
    assert!(report.is_persisted());

    let project = scheduler
        .get_project(&ProjectLookup {
            project: ProjectRef::Id(id),
        })
        .await
        .expect("Failed to get project");
    let journey = project.journey.expect("journey should be stored");
    assert_eq!(&journey, report.outcome.plan());
    assert_eq!(journey.status, JourneyStatus::OnTrack);
    assert_eq!(project.journey_generated_at, report.persisted_at);
}

#[tokio::test]
async fn test_preview_does_not_store() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let id = create_pitch(&scheduler).await;

    let report = scheduler
        .preview_journey(&GenerateJourney {
            project: ProjectRef::Name("Client Pitch".to_string()),
            today: Some(date(2025, 10, 27)),
            ..Default::default()
        })
        .await
        .expect("Failed to preview journey");
    assert!(!report.is_persisted());

    let project = scheduler
        .get_project(&ProjectLookup {
            project: ProjectRef::Id(id),
        })
        .await
        .expect("Failed to get project");
    assert!(project.journey.is_none());
}

#[tokio::test]
async fn test_generate_with_custom_templates() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let id = create_pitch(&scheduler).await;

    let report = scheduler
        .generate_journey(&GenerateJourney {
            project: ProjectRef::Id(id),
            today: Some(date(2025, 10, 1)),
            templates: Some(MilestoneTemplate::evenly_spaced([
                "Research", "Draft", "Polish", "Rehearse",
            ])),
            ..Default::default()
        })
        .await
        .expect("Failed to generate journey");

    let milestones = &report.outcome.plan().milestones;
    assert_eq!(milestones.len(), 4);
    assert_eq!(milestones[3].description, "Rehearse");
    assert_eq!(milestones[3].dependencies, vec!["Polish".to_string()]);
}

#[tokio::test]
async fn test_set_deadline_discards_journey() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let id = create_pitch(&scheduler).await;

    scheduler
        .generate_journey(&GenerateJourney {
            project: ProjectRef::Id(id),
            today: Some(date(2025, 10, 27)),
            ..Default::default()
        })
        .await
        .expect("Failed to generate journey");

    let change = scheduler
        .set_deadline(&SetDeadline {
            project: ProjectRef::Id(id),
            deadline: date(2025, 12, 15),
        })
        .await
        .expect("Failed to set deadline");
    assert_eq!(change.previous_deadline, date(2025, 11, 10));
    assert!(change.discarded_journey);
    assert_eq!(change.project.deadline, date(2025, 12, 15));
    assert!(change.project.journey.is_none());

    let again = scheduler
        .set_deadline(&SetDeadline {
            project: ProjectRef::Id(id),
            deadline: date(2025, 12, 19),
        })
        .await
        .expect("Failed to set deadline");
    assert_eq!(again.previous_deadline, date(2025, 12, 15));
    assert!(!again.discarded_journey);

    let stored = scheduler
        .get_project(&ProjectLookup {
            project: ProjectRef::Id(id),
        })
        .await
        .expect("Failed to get project");
    assert!(stored.journey.is_none());
    assert!(stored.journey_generated_at.is_none());
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let id = create_pitch(&scheduler).await;

    let err = scheduler
        .delete_project(&DeleteProject {
            project: ProjectRef::Id(id),
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("confirmation"));

    let deleted = scheduler
        .delete_project(&DeleteProject {
            project: ProjectRef::Id(id),
            confirmed: true,
        })
        .await
        .expect("Failed to delete project");
    assert_eq!(deleted.name, "Client Pitch");

    let projects = scheduler.list_projects().await.expect("Failed to list");
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_generate_for_unknown_project() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    let err = scheduler
        .generate_journey(&GenerateJourney {
            project: ProjectRef::Name("Ghost".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_invalid_config_rejected_at_build() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = SchedulerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_config(JourneyConfig::default().with_templates(Vec::new()))
        .build()
        .await;
    assert!(result.is_err());
}
