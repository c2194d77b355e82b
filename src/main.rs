use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use cli::subjects::load_subjects;
use config::Config;

use planr::domain::StudyPlan;
use planr::planner::{build_plan, complete_task, refresh_streak, skip_task};
use planr::storage::{DebouncedStore, JsonPlanStore, PlanStore};
use planr::PlanrError;

type Store = DebouncedStore<JsonPlanStore>;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("planr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("planr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn open_store(config: &Config) -> Result<Store> {
    let inner = JsonPlanStore::open(&config.storage.data_dir, &config.storage.scope)
        .context("Failed to open plan storage")?;
    Ok(DebouncedStore::new(
        inner,
        Duration::from_millis(config.storage.debounce_ms),
    ))
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let store = open_store(config)?;
    let today = Local::now().date_naive();

    match &cli.command {
        Commands::New {
            name,
            subjects,
            exam_date,
            daily_minutes,
        } => handle_new_command(name, subjects, *exam_date, *daily_minutes, config, &store),
        Commands::List => handle_list_command(&store),
        Commands::Show { id } => handle_show_command(id, today, &store),
        Commands::Today { id } => handle_today_command(id, today, &store),
        Commands::Complete { id, task_id } => handle_complete_command(id, task_id, today, &store),
        Commands::Skip { id, task_id } => handle_skip_command(id, task_id, today, &store),
        Commands::Delete { id } => handle_delete_command(id, &store),
    }
}

/// Load a plan, refreshing a stale streak and re-saving when it changed.
fn load_plan(store: &Store, id: &str, today: NaiveDate) -> Result<StudyPlan> {
    let plan = store
        .load(id)?
        .ok_or_else(|| PlanrError::PlanNotFound(id.to_string()))?;

    let refreshed = refresh_streak(&plan, today);
    if refreshed.streak != plan.streak {
        info!("streak for plan {} reset after gap", id);
        store.save(&refreshed)?;
    }
    Ok(refreshed)
}

fn handle_new_command(
    name: &str,
    subjects_path: &std::path::Path,
    exam_date: NaiveDate,
    daily_minutes: Option<u32>,
    config: &Config,
    store: &Store,
) -> Result<()> {
    let subjects = load_subjects(subjects_path)
        .context(format!("Failed to load subjects from {}", subjects_path.display()))?;
    let daily_minutes = daily_minutes.unwrap_or(config.planner.default_daily_minutes);

    let plan = build_plan(name, subjects, exam_date, daily_minutes)
        .context("Failed to generate study plan")?;

    store.save(&plan)?;
    store.flush()?;

    let days: std::collections::BTreeSet<NaiveDate> = plan.tasks.iter().map(|t| t.date).collect();
    println!("{} {}", "Created plan".green(), plan.id.bold());
    println!(
        "  {} tasks across {} days, exam on {}",
        plan.tasks.len(),
        days.len(),
        plan.exam_date
    );
    Ok(())
}

fn handle_list_command(store: &Store) -> Result<()> {
    let plans = store.load_all()?;
    if plans.is_empty() {
        println!("{}", "No plans yet".yellow());
        return Ok(());
    }

    for plan in plans {
        println!(
            "{}  {}  exam {}  {}% done  streak {}",
            plan.id.bold(),
            plan.name,
            plan.exam_date,
            plan.progress_percent(),
            plan.streak
        );
    }
    Ok(())
}

fn handle_show_command(id: &str, today: NaiveDate, store: &Store) -> Result<()> {
    let plan = load_plan(store, id, today)?;
    store.flush()?;

    let days_left = (plan.exam_date - today).num_days().max(0);
    println!("{} ({})", plan.name.bold(), plan.id);
    println!("  Exam: {} ({} days left)", plan.exam_date, days_left);
    println!(
        "  Budget: {} min/day    Streak: {}    Completed: {} ({}%)",
        plan.daily_minutes,
        plan.streak,
        plan.total_completed,
        plan.progress_percent()
    );

    println!("  Subjects:");
    for subject in &plan.subjects {
        let total = plan.tasks.iter().filter(|t| t.subject_id == subject.id).count();
        let done = plan
            .tasks
            .iter()
            .filter(|t| t.subject_id == subject.id && t.completed)
            .count();
        println!(
            "    {} ({:?}) - {}/{} tasks done",
            subject.name, subject.difficulty, done, total
        );
    }

    let mut upcoming: Vec<_> = plan
        .tasks
        .iter()
        .filter(|t| t.is_open() && t.date >= today)
        .collect();
    upcoming.sort_by_key(|t| t.date);
    if !upcoming.is_empty() {
        println!("  Upcoming:");
        for task in upcoming.iter().take(5) {
            println!(
                "    {}  {}  {} ({} min, {:?})",
                task.date,
                task.id,
                task.topic,
                task.duration,
                task.kind
            );
        }
    }
    Ok(())
}

fn handle_today_command(id: &str, today: NaiveDate, store: &Store) -> Result<()> {
    let plan = load_plan(store, id, today)?;
    store.flush()?;

    let tasks = plan.tasks_on(today);
    if tasks.is_empty() {
        println!("{}", "Nothing scheduled today".yellow());
        return Ok(());
    }

    println!("{} - {}", today.to_string().bold(), plan.name);
    for task in tasks {
        let marker = if task.completed {
            "done".green()
        } else if task.skipped {
            "skipped".yellow()
        } else {
            "open".cyan()
        };
        let name = plan
            .subjects
            .iter()
            .find(|s| s.id == task.subject_id)
            .map(|s| s.name.as_str())
            .unwrap_or("?");
        println!(
            "  [{}] {}  {}: {} ({} min, {:?})",
            marker, task.id, name, task.topic, task.duration, task.kind
        );
    }
    Ok(())
}

fn handle_complete_command(id: &str, task_id: &str, today: NaiveDate, store: &Store) -> Result<()> {
    let plan = load_plan(store, id, today)?;
    let updated = complete_task(&plan, task_id, today)?;
    store.save(&updated)?;
    store.flush()?;

    println!(
        "{} {} (streak {}, {} total)",
        "Completed".green(),
        task_id,
        updated.streak,
        updated.total_completed
    );
    Ok(())
}

fn handle_skip_command(id: &str, task_id: &str, today: NaiveDate, store: &Store) -> Result<()> {
    let plan = load_plan(store, id, today)?;
    let updated = skip_task(&plan, task_id, today)?;
    store.save(&updated)?;
    store.flush()?;

    match updated.tasks.last() {
        Some(replacement) if updated.tasks.len() > plan.tasks.len() => {
            println!(
                "{} {}, rescheduled to {}",
                "Skipped".yellow(),
                task_id,
                replacement.date
            );
        }
        _ => {
            println!(
                "{} {} (no future day open, work dropped)",
                "Skipped".yellow(),
                task_id
            );
        }
    }
    Ok(())
}

fn handle_delete_command(id: &str, store: &Store) -> Result<()> {
    store.delete(id)?;
    println!("{} {}", "Deleted plan".red(), id);
    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;

    run_application(&cli, &config)
}
