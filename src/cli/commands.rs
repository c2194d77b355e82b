//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - new: generate a plan from a subjects file
//! - list/show/today: inspect plans and the day's tasks
//! - complete/skip: record progress on a task
//! - delete: remove a plan

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Planr - an adaptive study-plan scheduler
#[derive(Parser, Debug)]
#[command(name = "planr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new study plan from a subjects file
    New {
        /// Plan name
        name: String,

        /// YAML file listing subjects, topics, and difficulties
        #[arg(short, long)]
        subjects: PathBuf,

        /// Exam date (YYYY-MM-DD, must be in the future)
        #[arg(short, long)]
        exam_date: NaiveDate,

        /// Daily study budget in minutes (defaults from config)
        #[arg(short, long)]
        daily_minutes: Option<u32>,
    },

    /// List all plans
    List,

    /// Show a plan's details and progress
    Show {
        /// Plan ID
        id: String,
    },

    /// Show today's tasks for a plan
    Today {
        /// Plan ID
        id: String,
    },

    /// Mark a task completed
    Complete {
        /// Plan ID
        id: String,

        /// Task ID to complete
        task_id: String,
    },

    /// Skip a task, moving its work to the next open day
    Skip {
        /// Plan ID
        id: String,

        /// Task ID to skip
        task_id: String,
    },

    /// Delete a plan
    Delete {
        /// Plan ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new_command() {
        let cli = Cli::parse_from([
            "planr",
            "new",
            "Finals",
            "--subjects",
            "subjects.yml",
            "--exam-date",
            "2026-12-01",
            "--daily-minutes",
            "90",
        ]);
        match cli.command {
            Commands::New {
                name,
                subjects,
                exam_date,
                daily_minutes,
            } => {
                assert_eq!(name, "Finals");
                assert_eq!(subjects, PathBuf::from("subjects.yml"));
                assert_eq!(exam_date, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
                assert_eq!(daily_minutes, Some(90));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_exam_date() {
        let result = Cli::try_parse_from([
            "planr",
            "new",
            "Finals",
            "--subjects",
            "subjects.yml",
            "--exam-date",
            "not-a-date",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_complete_command() {
        let cli = Cli::parse_from(["planr", "complete", "plan-1", "task-2"]);
        match cli.command {
            Commands::Complete { id, task_id } => {
                assert_eq!(id, "plan-1");
                assert_eq!(task_id, "task-2");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_flag_is_global() {
        let cli = Cli::parse_from(["planr", "list", "--verbose"]);
        assert!(cli.is_verbose());
    }
}
