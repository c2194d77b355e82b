//! Learning/revision phase classification.
//!
//! The final 30% of a plan's day range is the revision phase; every task
//! created on those days is typed revision. The classification is durable:
//! a task keeps the kind it was created with even if dates shift later.

use crate::domain::TaskKind;

/// Fraction of the timeframe spent learning before revision begins.
pub const REVISION_SPLIT: f64 = 0.7;

/// Which phase of the plan a day falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Learn,
    Revision,
}

impl Phase {
    /// Classify a day by its index within the plan's total day range.
    pub fn of_day(day_index: i64, total_days: i64) -> Self {
        if day_index >= revision_start_day(total_days) {
            Phase::Revision
        } else {
            Phase::Learn
        }
    }

    /// The task kind emitted for this phase.
    pub fn task_kind(&self) -> TaskKind {
        match self {
            Phase::Learn => TaskKind::Learn,
            Phase::Revision => TaskKind::Revision,
        }
    }
}

/// First day index of the revision phase: `floor(total_days * 0.7)`.
pub fn revision_start_day(total_days: i64) -> i64 {
    (total_days as f64 * REVISION_SPLIT).floor() as i64
}
