//! Process-lifetime store of literary works.
//!
//! Records live in insertion order inside a single `RwLock<Vec<_>>`.
//! Every mutation takes the write lock, so concurrent requests cannot lose
//! updates or observe a half-applied change. Lookups by id are linear scans
//! and resolve to the first matching record.

use parking_lot::RwLock;

use lw_domain::error::{Error, Result};
use lw_domain::{LiteraryWork, LiteraryWorkPatch};

use crate::aggregates::Aggregates;
use crate::sort::SortQuery;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// WorkStore
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Default)]
pub struct WorkStore {
    works: RwLock<Vec<LiteraryWork>>,
}

impl WorkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `works` (insertion order kept).
    pub fn with_works(works: Vec<LiteraryWork>) -> Self {
        Self {
            works: RwLock::new(works),
        }
    }

    pub fn len(&self) -> usize {
        self.works.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.read().is_empty()
    }

    /// Snapshot of every record in insertion order.
    pub fn list(&self) -> Vec<LiteraryWork> {
        self.works.read().clone()
    }

    /// Snapshot ordered per `query` (insertion order when it is empty).
    pub fn list_sorted(&self, query: &SortQuery) -> Vec<LiteraryWork> {
        if query.effective().is_none() {
            return self.list();
        }
        let works = self.works.read();
        query.apply(&works)
    }

    /// Append a record. Ids are not checked for uniqueness.
    pub fn insert(&self, work: LiteraryWork) -> LiteraryWork {
        let mut works = self.works.write();
        if works.iter().any(|w| w.id == work.id) {
            tracing::debug!(id = work.id, "inserting work with duplicate id");
        }
        works.push(work.clone());
        work
    }

    pub fn get(&self, id: i64) -> Result<LiteraryWork> {
        self.works
            .read()
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or(Error::WorkNotFound(id))
    }

    /// Merge `patch` into the first record with `id` and return the result.
    pub fn update(&self, id: i64, patch: LiteraryWorkPatch) -> Result<LiteraryWork> {
        let mut works = self.works.write();
        let work = works
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(Error::WorkNotFound(id))?;
        work.apply(patch);
        Ok(work.clone())
    }

    /// Remove the first record with `id`; the rest keep their order.
    pub fn remove(&self, id: i64) -> Result<LiteraryWork> {
        let mut works = self.works.write();
        let index = works
            .iter()
            .position(|w| w.id == id)
            .ok_or(Error::WorkNotFound(id))?;
        Ok(works.remove(index))
    }

    pub fn aggregates(&self) -> Aggregates {
        Aggregates::compute(&self.works.read())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
