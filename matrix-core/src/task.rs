//! Task model for the priority matrix.
//!
//! The in-memory shape uses [`DeadlineProximity`] as a tagged choice. The
//! persisted shape keeps the flat `overrideDeadlineProximity` flag plus a
//! numeric `deadlineProximity`, so stored task lists stay readable by older
//! versions of the app. Conversion happens in the serde layer via [`TaskRecord`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::deadline::parse_due_date;
use crate::dimensions::{DeadlineProximity, ImpactScores, Score, UrgencyScores};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Active,
    /// Completed or dismissed. Kept in storage, hidden from every board.
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub notes: String,

    /// Raw due date as entered (`YYYY-MM-DD`). Kept verbatim so a malformed
    /// value survives a load/save cycle; scoring treats it as absent.
    pub due_date: Option<String>,

    pub estimated_minutes: Option<u32>,

    pub impact: ImpactScores,
    pub urgency: UrgencyScores,

    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            notes: String::new(),
            due_date: None,
            estimated_minutes: None,
            impact: ImpactScores::default(),
            urgency: UrgencyScores::default(),
            status: TaskStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due.format("%Y-%m-%d").to_string());
        self
    }

    pub fn with_raw_due_date(mut self, raw: impl Into<String>) -> Self {
        self.due_date = Some(raw.into());
        self
    }

    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    pub fn with_impact(mut self, impact: ImpactScores) -> Self {
        self.impact = impact;
        self
    }

    pub fn with_urgency(mut self, urgency: UrgencyScores) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn with_manual_deadline_proximity(mut self, value: Score) -> Self {
        self.urgency.deadline_proximity = DeadlineProximity::Manual(value);
        self
    }

    /// Parsed due date, or `None` when absent or malformed.
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_due_date)
    }

    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }

    /// Mark the task as done and hide it from boards.
    pub fn archive(&mut self, now: DateTime<Utc>) {
        self.status = TaskStatus::Archived;
        self.touch(now);
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// Persisted urgency scores: deadline proximity as a plain number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyRecord {
    pub deadline_proximity: Score,
    pub late_penalty: Score,
    pub dependency_pressure: Score,
}

/// On-disk task shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    pub impact_scores: ImpactScores,
    pub urgency_scores: UrgencyRecord,
    #[serde(default)]
    pub override_deadline_proximity: bool,
    #[serde(default)]
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TaskRecord> for Task {
    fn from(r: TaskRecord) -> Self {
        let deadline_proximity = if r.override_deadline_proximity {
            DeadlineProximity::Manual(r.urgency_scores.deadline_proximity)
        } else {
            DeadlineProximity::Derived
        };

        Task {
            id: r.id,
            title: r.title,
            notes: r.notes,
            // A cleared date field is stored as "".
            due_date: r.due_date.filter(|d| !d.trim().is_empty()),
            estimated_minutes: r.estimated_minutes,
            impact: r.impact_scores,
            urgency: UrgencyScores {
                deadline_proximity,
                late_penalty: r.urgency_scores.late_penalty,
                dependency_pressure: r.urgency_scores.dependency_pressure,
            },
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<Task> for TaskRecord {
    fn from(t: Task) -> Self {
        let (override_deadline_proximity, deadline_proximity) = match t.urgency.deadline_proximity
        {
            DeadlineProximity::Manual(v) => (true, v),
            // Placeholder; recomputed from the due date on every read.
            DeadlineProximity::Derived => (false, 0),
        };

        TaskRecord {
            id: t.id,
            title: t.title,
            notes: t.notes,
            due_date: t.due_date,
            estimated_minutes: t.estimated_minutes,
            impact_scores: t.impact,
            urgency_scores: UrgencyRecord {
                deadline_proximity,
                late_penalty: t.urgency.late_penalty,
                dependency_pressure: t.urgency.dependency_pressure,
            },
            override_deadline_proximity,
            status: t.status,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
