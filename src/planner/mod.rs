//! The scheduling core: allocation, phase classification, and rescheduling.
//!
//! Everything here is pure logic over in-memory data. Operations take a plan
//! by reference and return a new snapshot; persistence belongs to the caller.

pub mod allocator;
pub mod phase;
pub mod progress;

pub use allocator::{build_plan, build_plan_with, generate_tasks, generate_tasks_with};
pub use phase::Phase;
pub use progress::{complete_task, refresh_streak, skip_task};
