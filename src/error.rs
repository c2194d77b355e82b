//! Error types for Planr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Planr
#[derive(Debug, Error)]
pub enum PlanrError {
    /// Plan not found in storage
    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    /// Task id does not exist in the plan
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Input rejected before generation (bad date, budget, subjects)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generation produced no tasks; the plan must not be persisted
    #[error("Plan generation produced no tasks: {0}")]
    EmptyPlan(String),

    /// Storage/persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error (subject files, config)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Planr operations
pub type Result<T> = std::result::Result<T, PlanrError>;
