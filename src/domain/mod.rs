//! Domain types for Planr
//!
//! Subjects describe what to study, Tasks are the schedulable units the
//! allocator emits, and a StudyPlan aggregates both with progress metadata.

pub mod plan;
pub mod subject;
pub mod task;

pub use plan::StudyPlan;
pub use subject::{Difficulty, Subject};
pub use task::{Task, TaskKind};
