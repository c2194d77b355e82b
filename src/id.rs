//! ID generation utilities for Planr
//!
//! Provides functions for generating unique identifiers for plans, subjects, and tasks.

use rand::Rng;

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

/// Generate a unique plan ID
///
/// Format: `{timestamp_ms}-{random_hex}`
/// Example: `1738300800123-a1b2`
pub fn generate_plan_id() -> String {
    let timestamp = now_ms();
    let random: u16 = rand::rng().random();
    format!("{}-{:04x}", timestamp, random)
}

/// Generate a subject ID
///
/// Format: `sub-{timestamp_ms}-{random_hex}`
pub fn generate_subject_id() -> String {
    let timestamp = now_ms();
    let random: u16 = rand::rng().random();
    format!("sub-{}-{:04x}", timestamp, random)
}

/// Generate a task ID
///
/// Format: `task-{timestamp_ms}-{random_hex}`
pub fn generate_task_id() -> String {
    let timestamp = now_ms();
    let random: u16 = rand::rng().random();
    format!("task-{}-{:04x}", timestamp, random)
}
