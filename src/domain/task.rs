//! Task records - the schedulable units of study work.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::generate_task_id;

/// Whether a task belongs to the learning phase or the revision phase.
///
/// Fixed at creation based on which day the task falls on; never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Learn,
    Revision,
}

/// One schedulable unit of study work tied to a date, subject, and topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier ("task-{timestamp}-{hex}")
    pub id: String,

    /// The subject this task studies (generator-enforced reference)
    pub subject_id: String,

    /// Topic copied from the subject at generation time
    pub topic: String,

    /// Minutes of work, never below the minimum task threshold
    pub duration: u32,

    pub kind: TaskKind,

    pub completed: bool,
    pub skipped: bool,

    /// Calendar date the task is scheduled on
    pub date: NaiveDate,
}

impl Task {
    /// Create a fresh task.
    pub fn new(
        subject_id: impl Into<String>,
        topic: impl Into<String>,
        duration: u32,
        kind: TaskKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: generate_task_id(),
            subject_id: subject_id.into(),
            topic: topic.into(),
            duration,
            kind,
            completed: false,
            skipped: false,
            date,
        }
    }

    /// Neither completed nor skipped.
    pub fn is_open(&self) -> bool {
        !self.completed && !self.skipped
    }

    /// Clone this task's workload onto a new date with a fresh id.
    ///
    /// Used by the rescheduler when a skipped task's work moves forward.
    pub fn reschedule_to(&self, date: NaiveDate) -> Self {
        Self {
            id: generate_task_id(),
            subject_id: self.subject_id.clone(),
            topic: self.topic.clone(),
            duration: self.duration,
            kind: self.kind,
            completed: false,
            skipped: false,
            date,
        }
    }
}
