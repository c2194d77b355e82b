//! Planr - an adaptive study-plan scheduler
//!
//! Planr partitions the days between now and an exam into per-day study
//! tasks, weighting subjects by topic count and difficulty, switching to a
//! revision phase over the final stretch, and rescheduling skipped work onto
//! the nearest future day that still has something open.

pub mod domain;
pub mod error;
pub mod id;
pub mod planner;
pub mod storage;

pub use error::{PlanrError, Result};
