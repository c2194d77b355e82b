//! StudyPlan aggregate.
//!
//! A plan owns its subjects, the generated task list, and the progress
//! counters. It is persisted wholesale as one JSON document; every mutation
//! produces a new snapshot that the caller re-persists in full.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Subject, Task};
use crate::id::{generate_plan_id, now_ms};

/// The full aggregate for one study goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Unique identifier ("{timestamp}-{hex}")
    pub id: String,

    /// User-supplied display name
    pub name: String,

    pub subjects: Vec<Subject>,

    /// Append-only except for the completed/skipped flags on each task
    pub tasks: Vec<Task>,

    pub exam_date: NaiveDate,

    /// Daily study budget in minutes
    pub daily_minutes: u32,

    /// Count of consecutive calendar days with at least one completion
    pub streak: u32,

    /// Last date a task was completed on
    pub last_study_date: Option<NaiveDate>,

    pub total_completed: u32,

    pub created_at: i64,
    pub updated_at: i64,
}

impl StudyPlan {
    /// Assemble a plan from generated tasks.
    pub fn new(
        name: impl Into<String>,
        subjects: Vec<Subject>,
        tasks: Vec<Task>,
        exam_date: NaiveDate,
        daily_minutes: u32,
    ) -> Self {
        let now = now_ms();
        Self {
            id: generate_plan_id(),
            name: name.into(),
            subjects,
            tasks,
            exam_date,
            daily_minutes,
            streak: 0,
            last_study_date: None,
            total_completed: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Find a task by id.
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// All tasks scheduled on the given date.
    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.date == date).collect()
    }

    /// Distinct dates, ascending, among open tasks strictly after `today`.
    ///
    /// These are the candidate targets for rescheduling skipped work.
    pub fn open_future_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .tasks
            .iter()
            .filter(|t| t.is_open() && t.date > today)
            .map(|t| t.date)
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Fraction of tasks completed, in percent.
    pub fn progress_percent(&self) -> u32 {
        if self.tasks.is_empty() {
            return 0;
        }
        let done = self.tasks.iter().filter(|t| t.completed).count();
        (done * 100 / self.tasks.len()) as u32
    }

    /// Bump the updated timestamp after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = now_ms();
    }
}
