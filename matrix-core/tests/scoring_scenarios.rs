use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use matrix_core::{
    DeadlineProximity, ImpactScores, Quadrant, Settings, Task, TaskList, UrgencyScores, classify,
    derive_deadline_proximity, effective_urgency_scores, impact_total, score_task, urgency_total,
};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap()
}

fn scored(impact: [i32; 4], proximity: DeadlineProximity, late: i32, dep: i32) -> Task {
    Task::new("t", "scenario", now())
        .with_impact(ImpactScores::new(impact[0], impact[1], impact[2], impact[3]))
        .with_urgency(UrgencyScores::new(proximity, late, dep))
}

#[test]
fn due_tomorrow_contributes_full_proximity() {
    let t = scored([0; 4], DeadlineProximity::Derived, 0, 0).with_due_date(today() + Duration::days(1));
    assert_eq!(effective_urgency_scores(&t, today()).deadline_proximity, 3);
    assert_eq!(urgency_total(&t, today()), 3);
}

#[test]
fn max_impact_low_urgency_is_scheduled() {
    let t = scored([3, 3, 3, 3], DeadlineProximity::Manual(0), 1, 1);
    let s = score_task(&t, &Settings::default(), today());
    assert_eq!((s.impact_total, s.urgency_total), (12, 2));
    assert!(s.important && !s.urgent);
    assert_eq!(s.quadrant, Quadrant::Scheduled);
}

#[test]
fn low_impact_max_urgency_is_quick_win() {
    let t = scored([1, 1, 1, 1], DeadlineProximity::Manual(3), 3, 3);
    assert_eq!(impact_total(&t), 4);
    assert_eq!(urgency_total(&t, today()), 9);
    assert_eq!(score_task(&t, &Settings::default(), today()).quadrant, Quadrant::QuickWins);
}

#[test]
fn totals_equal_to_thresholds_are_do_now() {
    let t = scored([3, 2, 1, 1], DeadlineProximity::Manual(2), 2, 1);
    assert_eq!(impact_total(&t), 7);
    assert_eq!(urgency_total(&t, today()), 5);
    assert_eq!(score_task(&t, &Settings::default(), today()).quadrant, Quadrant::DoNow);
}

#[test]
fn manual_override_beats_derived_value() {
    let t = scored([0; 4], DeadlineProximity::Manual(1), 0, 0).with_due_date(today());
    assert_eq!(urgency_total(&t, today()), 1);

    let mut derived = t.clone();
    derived.urgency.deadline_proximity = DeadlineProximity::Derived;
    assert_eq!(urgency_total(&derived, today()), 3);
}

#[test]
fn changing_settings_reclassifies_on_next_read() {
    let t = scored([2, 2, 1, 1], DeadlineProximity::Manual(1), 1, 1);
    assert_eq!(score_task(&t, &Settings::default(), today()).quadrant, Quadrant::Drop);

    let loose = Settings::new(6, 3).unwrap();
    assert_eq!(score_task(&t, &loose, today()).quadrant, Quadrant::DoNow);
}

#[test]
fn corrupted_store_scores_still_compute() {
    let json = r#"[{
        "id": "legacy",
        "title": "Legacy record",
        "dueDate": "not a date",
        "impactScores": {"goalAlignment": 5, "consequenceCost": 5, "hardToDelegate": 5, "compoundingValue": 5},
        "urgencyScores": {"deadlineProximity": 9, "latePenalty": 1, "dependencyPressure": 1},
        "overrideDeadlineProximity": false,
        "status": "active",
        "createdAt": "2026-01-01T00:00:00Z",
        "updatedAt": "2026-01-01T00:00:00Z"
    }]"#;
    let list: TaskList = serde_json::from_str(json).unwrap();
    let t = &list.tasks()[0];
    assert_eq!(impact_total(t), 20);
    // Stored proximity ignored, malformed due date derives 0.
    assert_eq!(urgency_total(t, today()), 2);
}

proptest! {
    #[test]
    fn impact_total_is_exact_and_bounded(a in 0..=3i32, b in 0..=3i32, c in 0..=3i32, d in 0..=3i32) {
        let t = scored([a, b, c, d], DeadlineProximity::Derived, 0, 0);
        let total = impact_total(&t);
        prop_assert_eq!(total, a + b + c + d);
        prop_assert!((0..=12).contains(&total));
    }

    #[test]
    fn urgency_total_is_bounded(
        manual in proptest::option::of(0..=3i32),
        late in 0..=3i32,
        dep in 0..=3i32,
        due_offset in proptest::option::of(-60i64..60),
    ) {
        let proximity = manual.map_or(DeadlineProximity::Derived, DeadlineProximity::Manual);
        let mut t = scored([0; 4], proximity, late, dep);
        if let Some(off) = due_offset {
            t = t.with_due_date(today() + Duration::days(off));
        }
        let total = urgency_total(&t, today());
        prop_assert!((0..=9).contains(&total));
        prop_assert_eq!(total, urgency_total(&t, today()));
    }

    #[test]
    fn proximity_never_increases_as_due_date_recedes(gap in -30i64..60) {
        let near = derive_deadline_proximity(Some(today() + Duration::days(gap)), today());
        let far = derive_deadline_proximity(Some(today() + Duration::days(gap + 1)), today());
        prop_assert!(far <= near);
        prop_assert!((0..=3).contains(&near));
    }

    #[test]
    fn missing_due_date_is_always_zero(offset in -1000i64..1000) {
        let day = today() + Duration::days(offset);
        prop_assert_eq!(derive_deadline_proximity(None, day), 0);
    }

    #[test]
    fn classify_matches_decision_table(
        impact in 0..=12i32,
        urgency in 0..=9i32,
        it in 0..=12i32,
        ut in 0..=9i32,
    ) {
        let expected = match (impact >= it, urgency >= ut) {
            (true, true) => Quadrant::DoNow,
            (true, false) => Quadrant::Scheduled,
            (false, true) => Quadrant::QuickWins,
            (false, false) => Quadrant::Drop,
        };
        prop_assert_eq!(classify(impact, urgency, it, ut), expected);
        prop_assert_eq!(classify(impact, urgency, it, ut), classify(impact, urgency, it, ut));
    }
}
