//! Storage layer for Planr.
//!
//! The scheduling core never talks to a concrete storage technology; it
//! hands whole plan documents to a `PlanStore`. The JSON implementation
//! keeps one document per plan under a scope directory, and the debounced
//! wrapper coalesces rapid successive saves into one write.

mod debounce;
mod json;
mod traits;

pub use debounce::DebouncedStore;
pub use json::JsonPlanStore;
pub use traits::PlanStore;
