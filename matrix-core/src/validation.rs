//! Entry-boundary validation.
//!
//! The scoring engine accepts whatever is stored. Records coming from a user
//! go through [`TaskDraft`] first, which rejects empty titles and
//! out-of-range scores and reports every problem at once.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::dimensions::{
    DeadlineProximity, ImpactScores, Score, UrgencyScores, score_in_range,
};
use crate::task::{Task, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task title is required.")]
    EmptyTitle,
    #[error("Impact scores must be between 0 and 3.")]
    ImpactOutOfRange,
    #[error("Urgency scores must be between 0 and 3.")]
    UrgencyOutOfRange,
    #[error("Estimated minutes must be a positive number.")]
    NonPositiveEstimate,
}

/// Every validation failure for one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn contains(&self, err: &ValidationError) -> bool {
        self.0.contains(err)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        f.write_str(&msgs.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

/// User-entered task fields, before they become a [`Task`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub notes: String,
    pub due_date: Option<String>,
    pub estimated_minutes: Option<i64>,
    pub impact: ImpactScores,
    pub urgency: UrgencyScores,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Start a draft from an existing task, for editing.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            notes: task.notes.clone(),
            due_date: task.due_date.clone(),
            estimated_minutes: task.estimated_minutes.map(i64::from),
            impact: task.impact,
            urgency: task.urgency,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(ValidationError::EmptyTitle);
        }
        if self.impact.values().iter().any(|v| !score_in_range(*v)) {
            errors.push(ValidationError::ImpactOutOfRange);
        }
        if urgency_values(&self.urgency).iter().any(|v| !score_in_range(*v)) {
            errors.push(ValidationError::UrgencyOutOfRange);
        }
        if matches!(self.estimated_minutes, Some(m) if m <= 0 || m > i64::from(u32::MAX)) {
            errors.push(ValidationError::NonPositiveEstimate);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Validate and build a fresh active task.
    pub fn into_new_task(
        self,
        id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Task, ValidationErrors> {
        self.validate()?;

        let mut task = Task::new(id, self.title.trim(), now);
        task.notes = self.notes.trim().to_string();
        task.due_date = normalize_due(self.due_date);
        task.estimated_minutes = self.estimated_minutes.and_then(|m| u32::try_from(m).ok());
        task.impact = self.impact;
        task.urgency = self.urgency;
        task.status = TaskStatus::Active;
        Ok(task)
    }

    /// Validate and write the draft over an existing task.
    ///
    /// `id`, `created_at` and `status` are preserved; `updated_at` is bumped.
    pub fn apply_to(self, task: &mut Task, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        self.validate()?;

        task.title = self.title.trim().to_string();
        task.notes = self.notes.trim().to_string();
        task.due_date = normalize_due(self.due_date);
        task.estimated_minutes = self.estimated_minutes.and_then(|m| u32::try_from(m).ok());
        task.impact = self.impact;
        task.urgency = self.urgency;
        task.touch(now);
        Ok(())
    }
}

fn urgency_values(u: &UrgencyScores) -> Vec<Score> {
    let mut out = vec![u.late_penalty, u.dependency_pressure];
    if let DeadlineProximity::Manual(v) = u.deadline_proximity {
        out.push(v);
    }
    out
}

fn normalize_due(due: Option<String>) -> Option<String> {
    due.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}
