//! JSON file-backed plan store.
//!
//! One pretty-printed JSON document per plan, laid out as
//! `<base>/<scope>/<plan_id>.json`. Every save rewrites the whole document;
//! there are no partial updates.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::warn;

use super::traits::PlanStore;
use crate::domain::StudyPlan;
use crate::error::{PlanrError, Result};

/// File-per-plan JSON storage.
pub struct JsonPlanStore {
    dir: PathBuf,
}

impl JsonPlanStore {
    /// Open (creating if needed) the store for one scope.
    ///
    /// The scope is the caller-supplied identity under which plans are
    /// isolated, typically a user name.
    pub fn open(base: impl AsRef<Path>, scope: &str) -> Result<Self> {
        let dir = base.as_ref().join(scope);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn plan_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl PlanStore for JsonPlanStore {
    fn load(&self, id: &str) -> Result<Option<StudyPlan>> {
        let path = self.plan_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let reader = BufReader::new(File::open(&path)?);
        let plan = serde_json::from_reader(reader)?;
        Ok(Some(plan))
    }

    fn load_all(&self) -> Result<Vec<StudyPlan>> {
        let mut plans = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let reader = BufReader::new(File::open(&path)?);
            match serde_json::from_reader::<_, StudyPlan>(reader) {
                Ok(plan) => plans.push(plan),
                // One corrupt document must not hide the rest.
                Err(e) => warn!("skipping unreadable plan {}: {}", path.display(), e),
            }
        }
        plans.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(plans)
    }

    fn save(&self, plan: &StudyPlan) -> Result<()> {
        let json = serde_json::to_string_pretty(plan)?;
        fs::write(self.plan_path(&plan.id), json)
            .map_err(|e| PlanrError::Storage(format!("failed to write plan {}: {}", plan.id, e)))
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = self.plan_path(id);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, StudyPlan, Subject, Task, TaskKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_plan(name: &str) -> StudyPlan {
        let subject = Subject::new("Math", Difficulty::Medium, vec!["Algebra".to_string()]);
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let tasks = vec![Task::new(&subject.id, "Algebra", 35, TaskKind::Learn, date)];
        StudyPlan::new(name, vec![subject], tasks, date, 60)
    }

    fn open_store(temp: &TempDir) -> JsonPlanStore {
        JsonPlanStore::open(temp.path(), "alice").unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let plan = sample_plan("Finals");

        store.save(&plan).unwrap();
        let loaded = store.load(&plan.id).unwrap().unwrap();

        assert_eq!(loaded.id, plan.id);
        assert_eq!(loaded.name, "Finals");
        assert_eq!(loaded.tasks.len(), 1);
    }

    #[test]
    fn test_load_missing_returns_none() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        assert!(store.load("nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_save_is_upsert() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let mut plan = sample_plan("Finals");

        store.save(&plan).unwrap();
        plan.streak = 5;
        store.save(&plan).unwrap();

        let loaded = store.load(&plan.id).unwrap().unwrap();
        assert_eq!(loaded.streak, 5);
    }

    #[test]
    fn test_load_all_returns_scope_plans() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store.save(&sample_plan("One")).unwrap();
        store.save(&sample_plan("Two")).unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_scopes_are_isolated() {
        let temp = TempDir::new().unwrap();
        let alice = JsonPlanStore::open(temp.path(), "alice").unwrap();
        let bob = JsonPlanStore::open(temp.path(), "bob").unwrap();

        let plan = sample_plan("Finals");
        alice.save(&plan).unwrap();

        assert!(bob.load(&plan.id).unwrap().is_none());
        assert!(bob.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_removes_plan() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let plan = sample_plan("Finals");

        store.save(&plan).unwrap();
        store.delete(&plan.id).unwrap();

        assert!(store.load(&plan.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        assert!(store.delete("nonexistent").is_ok());
    }

    #[test]
    fn test_load_all_skips_corrupt_documents() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        store.save(&sample_plan("Good")).unwrap();
        fs::write(temp.path().join("alice").join("bad.json"), "not json").unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Good");
    }
}
