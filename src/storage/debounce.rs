//! Debounced save wrapper.
//!
//! Interactive use produces bursts of mutations (complete, complete, skip);
//! each re-serializes the whole plan. This wrapper coalesces rapid saves of
//! the same plan into one write: the latest snapshot is buffered and only
//! written through once the debounce interval has passed since the previous
//! write. Reads see buffered snapshots, so the in-memory plan stays the
//! source of truth whether or not the last write happened yet.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::warn;

use super::traits::PlanStore;
use crate::domain::StudyPlan;
use crate::error::{PlanrError, Result};

struct DebounceState {
    pending: HashMap<String, StudyPlan>,
    last_write: HashMap<String, Instant>,
}

/// Wraps any `PlanStore`, coalescing rapid successive saves per plan id.
pub struct DebouncedStore<S: PlanStore> {
    inner: S,
    interval: Duration,
    state: Mutex<DebounceState>,
}

impl<S: PlanStore> DebouncedStore<S> {
    /// Wrap a store with the given debounce interval.
    pub fn new(inner: S, interval: Duration) -> Self {
        Self {
            inner,
            interval,
            state: Mutex::new(DebounceState {
                pending: HashMap::new(),
                last_write: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, DebounceState>> {
        self.state
            .lock()
            .map_err(|e| PlanrError::Storage(e.to_string()))
    }

    /// Write all buffered snapshots through to the inner store.
    ///
    /// Attempts every pending plan even when one fails; the first error is
    /// reported after the rest have been tried.
    pub fn flush(&self) -> Result<()> {
        let mut state = self.lock()?;
        let pending: Vec<StudyPlan> = state.pending.drain().map(|(_, p)| p).collect();

        let mut first_err = None;
        for plan in pending {
            match self.inner.save(&plan) {
                Ok(()) => {
                    state.last_write.insert(plan.id.clone(), Instant::now());
                }
                Err(e) => {
                    warn!("flush failed for plan {}: {}", plan.id, e);
                    first_err.get_or_insert(e);
                }
            }
        }

        match first_err {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}

impl<S: PlanStore> PlanStore for DebouncedStore<S> {
    fn load(&self, id: &str) -> Result<Option<StudyPlan>> {
        if let Some(plan) = self.lock()?.pending.get(id) {
            return Ok(Some(plan.clone()));
        }
        self.inner.load(id)
    }

    fn load_all(&self) -> Result<Vec<StudyPlan>> {
        let mut plans = self.inner.load_all()?;
        let state = self.lock()?;
        for pending in state.pending.values() {
            match plans.iter_mut().find(|p| p.id == pending.id) {
                Some(stored) => *stored = pending.clone(),
                None => plans.push(pending.clone()),
            }
        }
        Ok(plans)
    }

    fn save(&self, plan: &StudyPlan) -> Result<()> {
        let mut state = self.lock()?;
        let due = state
            .last_write
            .get(&plan.id)
            .is_none_or(|at| at.elapsed() >= self.interval);

        if due {
            self.inner.save(plan)?;
            state.last_write.insert(plan.id.clone(), Instant::now());
            state.pending.remove(&plan.id);
        } else {
            state.pending.insert(plan.id.clone(), plan.clone());
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut state = self.lock()?;
        state.pending.remove(id);
        state.last_write.remove(id);
        self.inner.delete(id)
    }
}

impl<S: PlanStore> Drop for DebouncedStore<S> {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!("failed to flush pending plans on drop: {}", e);
        }
    }
}
