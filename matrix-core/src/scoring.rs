//! Scoring and quadrant classification.
//!
//! Everything here is a pure function of its arguments. "Today" is always
//! passed in by the caller; nothing reads the system clock.
//!
//! Stored per-dimension scores are summed as-is. Range checks belong to the
//! entry boundary (see [`crate::validation`]) so that stale or hand-edited
//! records can still be scored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deadline::derive_deadline_proximity;
use crate::dimensions::{DeadlineProximity, EffectiveUrgency};
use crate::settings::Settings;
use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quadrant {
    DoNow,
    Scheduled,
    QuickWins,
    Drop,
}

impl Quadrant {
    /// Board display order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoNow,
        Quadrant::Scheduled,
        Quadrant::QuickWins,
        Quadrant::Drop,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Quadrant::DoNow => "DO_NOW",
            Quadrant::Scheduled => "SCHEDULED",
            Quadrant::QuickWins => "QUICK_WINS",
            Quadrant::Drop => "DROP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::DoNow => "Do Now",
            Quadrant::Scheduled => "Scheduled",
            Quadrant::QuickWins => "Quick Wins",
            Quadrant::Drop => "Drop",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Quadrant::DoNow => "High impact and time-sensitive priorities.",
            Quadrant::Scheduled => "Important work to plan intentionally.",
            Quadrant::QuickWins => "Fast wins to clear quickly.",
            Quadrant::Drop => "Low value items to remove or defer.",
        }
    }

    pub fn next_step(self) -> &'static str {
        match self {
            Quadrant::DoNow => "Start now. Define the first 5-minute action and do it.",
            Quadrant::Scheduled => "Schedule it. Pick a start date and protect a time block.",
            Quadrant::QuickWins => {
                "Keep it small. Finish in one short pass or delegate if possible."
            }
            Quadrant::Drop => "Drop it. Archive the task or move to Someday.",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Quadrant::DoNow => 0,
            Quadrant::Scheduled => 1,
            Quadrant::QuickWins => 2,
            Quadrant::Drop => 3,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Saturates instead of overflowing on corrupted stored scores.
fn saturating_sum(values: &[i32]) -> i32 {
    values.iter().fold(0i32, |acc, v| acc.saturating_add(*v))
}

/// Sum of the four impact scores.
pub fn impact_total(task: &Task) -> i32 {
    saturating_sum(&task.impact.values())
}

/// Urgency scores with deadline proximity resolved.
///
/// A manual proximity is used verbatim; otherwise it is derived from the due
/// date relative to `today`.
pub fn effective_urgency_scores(task: &Task, today: NaiveDate) -> EffectiveUrgency {
    let deadline_proximity = match task.urgency.deadline_proximity {
        DeadlineProximity::Manual(v) => v,
        DeadlineProximity::Derived => derive_deadline_proximity(task.due(), today),
    };

    EffectiveUrgency {
        deadline_proximity,
        late_penalty: task.urgency.late_penalty,
        dependency_pressure: task.urgency.dependency_pressure,
    }
}

/// Sum of the three effective urgency scores.
pub fn urgency_total(task: &Task, today: NaiveDate) -> i32 {
    saturating_sum(&effective_urgency_scores(task, today).values())
}

pub fn is_important(impact_total: i32, impact_threshold: i32) -> bool {
    impact_total >= impact_threshold
}

pub fn is_urgent(urgency_total: i32, urgency_threshold: i32) -> bool {
    urgency_total >= urgency_threshold
}

/// Map totals and thresholds to a quadrant. Both comparisons are inclusive.
pub fn classify(
    impact_total: i32,
    urgency_total: i32,
    impact_threshold: i32,
    urgency_threshold: i32,
) -> Quadrant {
    let important = is_important(impact_total, impact_threshold);
    let urgent = is_urgent(urgency_total, urgency_threshold);

    match (important, urgent) {
        (true, true) => Quadrant::DoNow,
        (true, false) => Quadrant::Scheduled,
        (false, true) => Quadrant::QuickWins,
        (false, false) => Quadrant::Drop,
    }
}

/// Everything a board needs to place and explain one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskScore {
    pub impact_total: i32,
    pub urgency_total: i32,
    pub urgency: EffectiveUrgency,
    pub important: bool,
    pub urgent: bool,
    pub quadrant: Quadrant,
}

pub fn score_task(task: &Task, settings: &Settings, today: NaiveDate) -> TaskScore {
    let impact = impact_total(task);
    let urgency = effective_urgency_scores(task, today);
    let urgency_sum = saturating_sum(&urgency.values());

    TaskScore {
        impact_total: impact,
        urgency_total: urgency_sum,
        urgency,
        important: is_important(impact, settings.impact_threshold),
        urgent: is_urgent(urgency_sum, settings.urgency_threshold),
        quadrant: classify(
            impact,
            urgency_sum,
            settings.impact_threshold,
            settings.urgency_threshold,
        ),
    }
}
