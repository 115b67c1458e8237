//! Demonstration tasks for an empty board.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::dimensions::{DeadlineProximity, ImpactScores, UrgencyScores};
use crate::task::Task;

struct Sample {
    title: &'static str,
    notes: &'static str,
    due_in_days: Option<i64>,
    minutes: u32,
    impact: [i32; 4],
    late_penalty: i32,
    dependency_pressure: i32,
}

const SAMPLES: [Sample; 8] = [
    Sample {
        title: "Finalize quarterly roadmap",
        notes: "Align milestones with team leads and update leadership deck.",
        due_in_days: Some(1),
        minutes: 120,
        impact: [3, 3, 2, 2],
        late_penalty: 2,
        dependency_pressure: 2,
    },
    Sample {
        title: "Prep customer demo rehearsal",
        notes: "Run through the new analytics flow and capture feedback.",
        due_in_days: Some(3),
        minutes: 60,
        impact: [3, 2, 1, 1],
        late_penalty: 3,
        dependency_pressure: 1,
    },
    Sample {
        title: "Refine onboarding email copy",
        notes: "Shorten welcome series and add usage tips.",
        due_in_days: Some(10),
        minutes: 30,
        impact: [2, 1, 0, 2],
        late_penalty: 1,
        dependency_pressure: 0,
    },
    Sample {
        title: "Set Q2 leadership sync agenda",
        notes: "Draft agenda topics and send invites.",
        due_in_days: Some(6),
        minutes: 15,
        impact: [2, 2, 1, 1],
        late_penalty: 1,
        dependency_pressure: 1,
    },
    Sample {
        title: "Clear support inbox backlog",
        notes: "Handle quick triage responses for simple tickets.",
        due_in_days: Some(0),
        minutes: 30,
        impact: [1, 1, 1, 0],
        late_penalty: 2,
        dependency_pressure: 2,
    },
    Sample {
        title: "Approve expense reports",
        notes: "Sign off on finance queue for the week.",
        due_in_days: Some(2),
        minutes: 15,
        impact: [0, 1, 0, 0],
        late_penalty: 2,
        dependency_pressure: 1,
    },
    Sample {
        title: "Organize team brand assets",
        notes: "Move outdated files to archive and update structure.",
        due_in_days: Some(20),
        minutes: 60,
        impact: [1, 0, 0, 1],
        late_penalty: 0,
        dependency_pressure: 0,
    },
    Sample {
        title: "Review conference swag options",
        notes: "Collect quotes and decide if needed this quarter.",
        due_in_days: None,
        minutes: 30,
        impact: [1, 0, 0, 0],
        late_penalty: 0,
        dependency_pressure: 0,
    },
];

/// Sample tasks `sample-1`..`sample-8`, with due dates relative to `today`.
pub fn sample_tasks(today: NaiveDate, now: DateTime<Utc>) -> Vec<Task> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let [goal, consequence, delegate, compounding] = s.impact;
            let mut t = Task::new(format!("sample-{}", i + 1), s.title, now)
                .with_notes(s.notes)
                .with_minutes(s.minutes)
                .with_impact(ImpactScores::new(goal, consequence, delegate, compounding))
                .with_urgency(UrgencyScores::new(
                    DeadlineProximity::Derived,
                    s.late_penalty,
                    s.dependency_pressure,
                ));
            if let Some(days) = s.due_in_days {
                t = t.with_due_date(today + Duration::days(days));
            }
            t
        })
        .collect()
}
