//! Plan store trait definition.

use crate::domain::StudyPlan;
use crate::error::Result;

/// Whole-document persistence for study plans.
///
/// Plans are opaque JSON blobs to the store: load by id, load everything in
/// scope, upsert the full document, delete by id. Multi-plan isolation comes
/// from the scope the store was opened with; the store performs no
/// authorization of its own.
pub trait PlanStore: Send + Sync {
    /// Load a plan by id.
    fn load(&self, id: &str) -> Result<Option<StudyPlan>>;

    /// Load every plan in this store's scope.
    fn load_all(&self) -> Result<Vec<StudyPlan>>;

    /// Upsert the entire plan document.
    fn save(&self, plan: &StudyPlan) -> Result<()>;

    /// Delete a plan by id. Deleting an absent plan is a no-op.
    fn delete(&self, id: &str) -> Result<()>;
}
