//! Plan lifecycle integration tests
//!
//! Exercises the full flow: generate a plan with a seeded random source,
//! persist it, reload it, and record progress against it.

use chrono::{Duration as ChronoDuration, NaiveDate};
use planr::domain::{Difficulty, Subject, TaskKind};
use planr::error::Result;
use planr::planner::{build_plan_with, complete_task, refresh_streak, skip_task};
use planr::storage::{DebouncedStore, JsonPlanStore, PlanStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_subjects() -> Vec<Subject> {
    vec![
        Subject::new(
            "Math",
            Difficulty::Hard,
            vec!["Algebra".to_string(), "Calculus".to_string(), "Probability".to_string()],
        ),
        Subject::new(
            "Physics",
            Difficulty::Medium,
            vec!["Mechanics".to_string(), "Optics".to_string()],
        ),
        Subject::new("History", Difficulty::Easy, vec![]).with_syllabus("history.pdf"),
    ]
}

/// Integration test: generated plan survives a storage round-trip
#[test]
fn test_generate_persist_reload() -> Result<()> {
    let temp = TempDir::new()?;
    let today = date(2026, 9, 1);
    let mut rng = StdRng::seed_from_u64(11);

    let plan = build_plan_with("Finals", sample_subjects(), date(2026, 9, 21), 120, today, &mut rng)?;

    {
        let store = JsonPlanStore::open(temp.path(), "alice")?;
        store.save(&plan)?;
    }

    let store = JsonPlanStore::open(temp.path(), "alice")?;
    let loaded = store.load(&plan.id)?.expect("plan should persist");
    assert_eq!(loaded.id, plan.id);
    assert_eq!(loaded.tasks.len(), plan.tasks.len());
    assert_eq!(loaded.subjects.len(), 3);

    Ok(())
}

/// Integration test: generated tasks honor phase split, budget, and floor
#[test]
fn test_generated_plan_invariants() -> Result<()> {
    let today = date(2026, 9, 1);
    let exam = date(2026, 10, 1);
    let mut rng = StdRng::seed_from_u64(3);

    let plan = build_plan_with("Finals", sample_subjects(), exam, 90, today, &mut rng)?;
    let total_days = (exam - today).num_days();
    let revision_start = today + ChronoDuration::days((total_days as f64 * 0.7).floor() as i64);

    for task in &plan.tasks {
        assert!(task.date >= today && task.date < exam);
        assert!(task.duration >= 15);
        let expected = if task.date >= revision_start {
            TaskKind::Revision
        } else {
            TaskKind::Learn
        };
        assert_eq!(task.kind, expected, "wrong phase on {}", task.date);
    }

    for day in 0..total_days {
        let d = today + ChronoDuration::days(day);
        let spent: u32 = plan.tasks.iter().filter(|t| t.date == d).map(|t| t.duration).sum();
        assert!(spent <= 90, "day {} spends {} minutes", d, spent);
        assert!(spent > 0, "day {} has no work", d);
    }

    Ok(())
}

/// Integration test: progress flow through a debounced store
#[test]
fn test_progress_through_debounced_store() -> Result<()> {
    let temp = TempDir::new()?;
    let today = date(2026, 9, 1);
    let mut rng = StdRng::seed_from_u64(5);

    let store = DebouncedStore::new(
        JsonPlanStore::open(temp.path(), "alice")?,
        Duration::from_secs(60),
    );

    let plan = build_plan_with("Finals", sample_subjects(), date(2026, 9, 11), 120, today, &mut rng)?;
    store.save(&plan)?;

    // Complete two tasks today, then skip one scheduled today.
    let today_ids: Vec<String> = plan.tasks_on(today).iter().map(|t| t.id.clone()).collect();
    assert!(today_ids.len() >= 3);

    let plan = complete_task(&plan, &today_ids[0], today)?;
    let plan = complete_task(&plan, &today_ids[1], today)?;
    let plan = skip_task(&plan, &today_ids[2], today)?;
    store.save(&plan)?;

    // Buffered snapshot is immediately visible.
    let loaded = store.load(&plan.id)?.expect("plan exists");
    assert_eq!(loaded.total_completed, 2);
    assert_eq!(loaded.streak, 1);
    assert_eq!(loaded.last_study_date, Some(today));

    let skipped = loaded.find_task(&today_ids[2]).expect("task exists");
    assert!(skipped.skipped);
    let replacement = loaded.tasks.last().expect("replacement appended");
    assert_eq!(replacement.date, today + ChronoDuration::days(1));
    assert_eq!(replacement.topic, skipped.topic);

    // Flush and verify it reached disk.
    store.flush()?;
    let direct = JsonPlanStore::open(temp.path(), "alice")?;
    let on_disk = direct.load(&plan.id)?.expect("plan flushed");
    assert_eq!(on_disk.total_completed, 2);

    Ok(())
}

/// Integration test: a streak gap resets on load-time refresh
#[test]
fn test_streak_reset_after_gap() -> Result<()> {
    let today = date(2026, 9, 1);
    let mut rng = StdRng::seed_from_u64(9);

    let plan = build_plan_with("Finals", sample_subjects(), date(2026, 9, 11), 120, today, &mut rng)?;
    let first_id = plan.tasks_on(today)[0].id.clone();
    let plan = complete_task(&plan, &first_id, today)?;
    assert_eq!(plan.streak, 1);

    // Next day or the day after: streak survives.
    assert_eq!(refresh_streak(&plan, today + ChronoDuration::days(1)).streak, 1);
    // Three days later: gap, streak resets.
    assert_eq!(refresh_streak(&plan, today + ChronoDuration::days(3)).streak, 0);

    Ok(())
}
