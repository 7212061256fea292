//! Behavioural tests for the full scheduling pipeline.

use jiff::{
    civil::{date, Date, Weekday},
    Span,
};

use super::*;
use crate::models::{
    JourneyOutcome, JourneyStatus, MilestoneStatus, MilestoneTemplate, ScheduleWarning, SpanIssue,
};

fn add_days(day: Date, days: i64) -> Date {
    day.checked_add(Span::new().days(days)).unwrap()
}

fn run(today: Date, deadline: Date) -> JourneyOutcome {
    plan_journey(today, deadline, &JourneyConfig::default()).expect("pipeline should succeed")
}

/// Every start weekday over a useful range of window lengths.
fn windows(min_days: i64, max_days: i64) -> impl Iterator<Item = (Date, Date)> {
    (0..7).flat_map(move |start| {
        let today = add_days(date(2025, 10, 27), start);
        (min_days..=max_days).map(move |days| (today, add_days(today, days)))
    })
}

#[test]
fn test_two_week_scenario() {
    let today = date(2025, 10, 27);
    let deadline = date(2025, 11, 10);
    let outcome = run(today, deadline);

    let JourneyOutcome::Generated(plan) = outcome else {
        panic!("expected a generated plan");
    };
    assert_eq!(plan.status, JourneyStatus::OnTrack);

    let dates: Vec<Date> = plan.milestones.iter().map(|m| m.target_date).collect();
    assert_eq!(
        dates,
        vec![date(2025, 10, 31), date(2025, 11, 4), date(2025, 11, 10)]
    );

    // The Saturday shift lands the last milestone on the deadline itself
    assert_eq!(
        plan.warnings,
        vec![ScheduleWarning::PastDeadline {
            description: "Rehearse Presentation & Final Refinements".to_string(),
            target_date: date(2025, 11, 10),
            deadline,
        }]
    );
}

#[test]
fn test_deadline_today_is_degenerate() {
    // 2025-10-29 is a Wednesday so no weekend shift applies
    let today = date(2025, 10, 29);
    let outcome = run(today, today);

    let JourneyOutcome::InvalidSpan { reason, plan } = outcome else {
        panic!("expected an invalid span");
    };
    assert_eq!(reason, SpanIssue::DeadlineToday);
    assert_eq!(plan.status, JourneyStatus::AtRisk);
    assert!(plan.milestones.iter().all(|m| m.target_date == today));
}

#[test]
fn test_past_deadline_reports_days_overdue() {
    let outcome = run(date(2025, 10, 29), date(2025, 10, 24));
    assert!(outcome.is_degenerate());
    assert!(matches!(
        outcome,
        JourneyOutcome::InvalidSpan {
            reason: SpanIssue::DeadlinePassed { days_overdue: 5 },
            ..
        }
    ));
    assert_eq!(outcome.plan().status, JourneyStatus::AtRisk);
}

#[test]
fn test_no_milestone_on_weekend() {
    for (today, deadline) in windows(0, 120) {
        let outcome = run(today, deadline);
        for milestone in &outcome.plan().milestones {
            assert!(
                !matches!(
                    milestone.target_date.weekday(),
                    Weekday::Saturday | Weekday::Sunday
                ),
                "{} -> {}: {} falls on a weekend",
                today,
                deadline,
                milestone.target_date
            );
        }
    }
}

#[test]
fn test_dates_strictly_increase() {
    for (today, deadline) in windows(13, 365) {
        let plan = run(today, deadline).into_plan();
        assert!(
            plan.milestones
                .windows(2)
                .all(|pair| pair[0].target_date < pair[1].target_date),
            "{} -> {} is not strictly increasing",
            today,
            deadline
        );
    }
}

#[test]
fn test_dates_within_window() {
    for (today, deadline) in windows(21, 365) {
        let plan = run(today, deadline).into_plan();
        for milestone in &plan.milestones {
            assert!(milestone.target_date > today);
            assert!(milestone.target_date < deadline);
        }
        assert!(plan.warnings.is_empty());
    }
}

#[test]
fn test_every_plan_is_flagged_or_within_bounds() {
    for (today, deadline) in windows(1, 60) {
        let plan = run(today, deadline).into_plan();
        let flagged_today = plan
            .warnings
            .iter()
            .filter(|w| matches!(w, ScheduleWarning::NotAfterToday { .. }))
            .count();
        let flagged_deadline = plan
            .warnings
            .iter()
            .filter(|w| matches!(w, ScheduleWarning::PastDeadline { .. }))
            .count();

        let on_or_before_today = plan
            .milestones
            .iter()
            .filter(|m| m.target_date <= today)
            .count();
        let past_deadline = plan
            .milestones
            .iter()
            .filter(|m| m.target_date >= deadline)
            .count();

        assert_eq!(on_or_before_today, flagged_today, "{today} -> {deadline}");
        assert_eq!(past_deadline, flagged_deadline, "{today} -> {deadline}");
    }
}

#[test]
fn test_one_day_window_flags_milestone_on_today() {
    // 2025-10-28 is a Tuesday
    let today = date(2025, 10, 28);
    let outcome = run(today, date(2025, 10, 29));
    assert!(!outcome.is_degenerate());

    let plan = outcome.plan();
    assert_eq!(plan.milestones[0].target_date, today);
    assert!(plan.warnings.contains(&ScheduleWarning::NotAfterToday {
        description: "Complete Strategic Framework & Insights".to_string(),
        target_date: today,
        today,
    }));
}

#[test]
fn test_status_threshold_boundary() {
    let today = date(2025, 10, 27);
    assert_eq!(
        run(today, add_days(today, 6)).plan().status,
        JourneyStatus::AtRisk
    );
    assert_eq!(
        run(today, add_days(today, 7)).plan().status,
        JourneyStatus::OnTrack
    );
}

#[test]
fn test_dependency_chain_is_simple_path() {
    let plan = run(date(2025, 10, 27), date(2026, 1, 15)).into_plan();
    assert_eq!(plan.milestones.len(), 3);
    assert!(plan.milestones[0].dependencies.is_empty());
    for pair in plan.milestones.windows(2) {
        assert_eq!(pair[1].dependencies, vec![pair[0].description.clone()]);
    }
    assert_eq!(plan.milestones[0].status, MilestoneStatus::InProgress);
    assert!(plan.milestones[1..]
        .iter()
        .all(|m| m.status == MilestoneStatus::Upcoming));
}

#[test]
fn test_same_inputs_same_output() {
    let first = run(date(2025, 10, 27), date(2025, 12, 19));
    let second = run(date(2025, 10, 27), date(2025, 12, 19));
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(first.plan()).unwrap(),
        serde_json::to_string(second.plan()).unwrap()
    );
}

#[test]
fn test_invalid_templates_are_rejected() {
    let config = JourneyConfig::default().with_templates(vec![
        MilestoneTemplate::new("Late", 0.8),
        MilestoneTemplate::new("Early", 0.4),
    ]);
    let err = plan_journey(date(2025, 10, 27), date(2025, 12, 1), &config).unwrap_err();
    assert!(err.to_string().contains("strictly increase"));

    let empty = JourneyConfig::default().with_templates(Vec::new());
    assert!(plan_journey(date(2025, 10, 27), date(2025, 12, 1), &empty).is_err());

    let blank = JourneyConfig::default().with_templates(vec![MilestoneTemplate::new("  ", 1.0)]);
    assert!(plan_journey(date(2025, 10, 27), date(2025, 12, 1), &blank).is_err());

    let overshoot =
        JourneyConfig::default().with_templates(vec![MilestoneTemplate::new("Beyond", 1.2)]);
    assert!(plan_journey(date(2025, 10, 27), date(2025, 12, 1), &overshoot).is_err());
}

#[test]
fn test_serialized_shape() {
    let plan = run(date(2025, 10, 27), date(2025, 11, 10)).into_plan();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["status"], "on_track");
    assert_eq!(json["milestones"][0]["status"], "in_progress");
    assert_eq!(json["milestones"][1]["status"], "upcoming");
    assert_eq!(json["milestones"][0]["target_date"], "2025-10-31");
    assert_eq!(json["warnings"][0]["kind"], "past_deadline");
}
