//! Task completion, skipping, and streak maintenance.
//!
//! Each operation returns a new plan snapshot; tasks are never deleted, only
//! flagged terminal. An unknown task id is a distinguishable error rather
//! than a silent no-op.

use chrono::{Duration, NaiveDate};

use crate::domain::StudyPlan;
use crate::error::{PlanrError, Result};

/// Skip a task and reschedule its workload.
///
/// The skipped task stays in the list flagged `skipped`. Its subject, topic,
/// and duration are cloned into one replacement task on the earliest strictly
/// future date that still has open work. When no such date exists (the skip
/// happened on the last scheduled day) the work is dropped; that is a
/// terminal edge case, not an error.
pub fn skip_task(plan: &StudyPlan, task_id: &str, today: NaiveDate) -> Result<StudyPlan> {
    let mut plan = plan.clone();
    let idx = plan
        .tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| PlanrError::TaskNotFound(task_id.to_string()))?;

    plan.tasks[idx].skipped = true;

    if let Some(target) = plan.open_future_dates(today).first().copied() {
        let replacement = plan.tasks[idx].reschedule_to(target);
        plan.tasks.push(replacement);
    }

    plan.touch();
    Ok(plan)
}

/// Mark a task completed and update the progress counters.
///
/// `total_completed` counts every completion; the streak counts distinct
/// consecutive study days, so a second completion on the same calendar day
/// leaves it unchanged.
pub fn complete_task(plan: &StudyPlan, task_id: &str, today: NaiveDate) -> Result<StudyPlan> {
    let mut plan = plan.clone();
    let idx = plan
        .tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| PlanrError::TaskNotFound(task_id.to_string()))?;

    plan.tasks[idx].completed = true;
    plan.total_completed += 1;

    if plan.last_study_date != Some(today) {
        plan.streak += 1;
        plan.last_study_date = Some(today);
    }

    plan.touch();
    Ok(plan)
}

/// Reset a stale streak.
///
/// Run when a plan is loaded: a streak survives only while the last study
/// day is today or yesterday.
pub fn refresh_streak(plan: &StudyPlan, today: NaiveDate) -> StudyPlan {
    let alive = matches!(
        plan.last_study_date,
        Some(d) if d == today || d == today - Duration::days(1)
    );
    if alive || plan.streak == 0 {
        return plan.clone();
    }

    let mut plan = plan.clone();
    plan.streak = 0;
    plan.touch();
    plan
}
