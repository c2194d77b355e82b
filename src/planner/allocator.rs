//! Task allocation.
//!
//! Turns subjects, an exam date, and a daily minute budget into the full
//! task list for a plan. Subject order is shuffled each day so no subject is
//! systematically favored; the random source is injectable so callers and
//! tests can seed it (the original behavior was unseeded).

use chrono::{Duration, Local, NaiveDate};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{StudyPlan, Subject, Task};
use crate::error::{PlanrError, Result};
use crate::planner::phase::Phase;

/// Minimum daily budget accepted for generation, in minutes.
pub const MIN_DAILY_MINUTES: u32 = 30;

/// Tasks shorter than this are never emitted.
pub const MIN_TASK_MINUTES: u32 = 15;

/// Generate the task list for a plan using an injected random source.
///
/// Returns an empty list when any precondition fails (exam date not in the
/// future, budget below the minimum, no subject with topics). Callers must
/// treat an empty result as a generation failure, never as a valid plan.
pub fn generate_tasks_with<R: Rng + ?Sized>(
    subjects: &[Subject],
    exam_date: NaiveDate,
    daily_minutes: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<Task> {
    let total_days = (exam_date - today).num_days();
    if total_days <= 0 || daily_minutes < MIN_DAILY_MINUTES {
        return Vec::new();
    }

    // Subjects with no topics and no syllabus never produce tasks.
    let schedulable: Vec<(&Subject, Vec<String>)> = subjects
        .iter()
        .map(|s| (s, s.effective_topics()))
        .filter(|(_, topics)| !topics.is_empty())
        .collect();
    if schedulable.is_empty() {
        return Vec::new();
    }

    log_weight_shares(&schedulable);

    let mut tasks = Vec::new();
    let mut order: Vec<usize> = (0..schedulable.len()).collect();

    for day in 0..total_days {
        let date = today + Duration::days(day);
        let kind = Phase::of_day(day, total_days).task_kind();

        order.shuffle(rng);
        let mut remaining = daily_minutes;

        for &idx in &order {
            if remaining == 0 {
                break;
            }
            let (subject, topics) = &schedulable[idx];
            let duration = subject.difficulty.base_minutes().min(remaining);
            if duration < MIN_TASK_MINUTES {
                continue;
            }
            // Round-robin on the day index, independent of shuffle order.
            let topic = &topics[day as usize % topics.len()];
            tasks.push(Task::new(&subject.id, topic, duration, kind, date));
            remaining -= duration;
        }
    }

    tasks
}

/// Generate tasks from today with a thread-local random source.
pub fn generate_tasks(subjects: &[Subject], exam_date: NaiveDate, daily_minutes: u32) -> Vec<Task> {
    let today = Local::now().date_naive();
    generate_tasks_with(subjects, exam_date, daily_minutes, today, &mut rand::rng())
}

/// Build a complete plan, rejecting invalid input with a distinguishable error.
///
/// A plan is only assembled when generation produced at least one task;
/// nothing partial ever reaches storage.
pub fn build_plan_with<R: Rng + ?Sized>(
    name: impl Into<String>,
    subjects: Vec<Subject>,
    exam_date: NaiveDate,
    daily_minutes: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Result<StudyPlan> {
    if exam_date <= today {
        return Err(PlanrError::InvalidInput(format!(
            "exam date {} must be after {}",
            exam_date, today
        )));
    }
    if daily_minutes < MIN_DAILY_MINUTES {
        return Err(PlanrError::InvalidInput(format!(
            "daily budget {} is below the minimum of {} minutes",
            daily_minutes, MIN_DAILY_MINUTES
        )));
    }
    if !subjects.iter().any(|s| !s.effective_topics().is_empty()) {
        return Err(PlanrError::InvalidInput(
            "no subject has topics or a syllabus attachment".to_string(),
        ));
    }

    let tasks = generate_tasks_with(&subjects, exam_date, daily_minutes, today, rng);
    if tasks.is_empty() {
        return Err(PlanrError::EmptyPlan(
            "no task fit within the daily budget".to_string(),
        ));
    }

    Ok(StudyPlan::new(name, subjects, tasks, exam_date, daily_minutes))
}

/// Build a plan from today with a thread-local random source.
pub fn build_plan(
    name: impl Into<String>,
    subjects: Vec<Subject>,
    exam_date: NaiveDate,
    daily_minutes: u32,
) -> Result<StudyPlan> {
    let today = Local::now().date_naive();
    build_plan_with(name, subjects, exam_date, daily_minutes, today, &mut rand::rng())
}

/// Log each subject's normalized weight share.
///
/// The weighted share biases nothing directly (selection is shuffle-driven
/// and durations are difficulty-fixed); it is surfaced for inspection only,
/// matching the original behavior where the figure was computed but never
/// enforced as a per-subject cap.
fn log_weight_shares(schedulable: &[(&Subject, Vec<String>)]) {
    let total: f64 = schedulable.iter().map(|(s, _)| s.weight()).sum();
    if total <= 0.0 {
        return;
    }
    for (subject, _) in schedulable {
        debug!(
            "subject '{}' weight share: {:.1}%",
            subject.name,
            subject.weight() / total * 100.0
        );
    }
}
