//! TaskList: the persisted collection of tasks and its mutations.
//!
//! Order matters: new tasks go to the front, and boards keep list order inside
//! each quadrant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::task::Task;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn active(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_active())
    }

    /// Replace the task with the same id in place, or insert it at the front.
    pub fn upsert(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            debug!(id = %task.id, "replacing task");
            *slot = task;
        } else {
            debug!(id = %task.id, "inserting task");
            self.tasks.insert(0, task);
        }
    }

    /// Archive ("complete") a task. Returns false when the id is unknown.
    pub fn archive(&mut self, id: &str, now: DateTime<Utc>) -> bool {
        match self.get_mut(id) {
            Some(t) => {
                t.archive(now);
                true
            }
            None => false,
        }
    }

    /// Delete a task permanently.
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Prepend every sample whose id is not already present.
    ///
    /// Returns how many were added.
    pub fn merge_samples(&mut self, samples: Vec<Task>) -> usize {
        let existing: HashSet<&str> = self.tasks.iter().map(|t| t.id.as_str()).collect();
        let fresh: Vec<Task> = samples
            .into_iter()
            .filter(|t| !existing.contains(t.id.as_str()))
            .collect();

        let added = fresh.len();
        if added > 0 {
            let rest = std::mem::take(&mut self.tasks);
            self.tasks = fresh.into_iter().chain(rest).collect();
        }
        added
    }
}
