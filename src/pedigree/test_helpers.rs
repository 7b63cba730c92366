//! In-memory horse source and record builders for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use super::resolve::HorseSource;
use super::types::{AncestryMap, Gender, HorseRecord, Pedigree};
use crate::services::horse::HorseError;

#[must_use]
pub fn horse(name: &str, gender: Gender, sire_id: Option<Uuid>, dam_id: Option<Uuid>) -> HorseRecord {
    HorseRecord { id: Uuid::new_v4(), name: name.into(), gender, sire_id, dam_id, is_pedigree_only: false }
}

#[must_use]
pub fn stallion(name: &str) -> HorseRecord {
    horse(name, Gender::Male, None, None)
}

#[must_use]
pub fn mare(name: &str) -> HorseRecord {
    horse(name, Gender::Female, None, None)
}

/// Build a `Pedigree` from a root and the ancestors to place in its map.
#[must_use]
pub fn pedigree(root: &HorseRecord, ancestors: &[&HorseRecord]) -> Pedigree {
    let mut by_id = AncestryMap::new();
    by_id.insert(root.id, root.clone());
    for ancestor in ancestors {
        by_id.insert(ancestor.id, (*ancestor).clone());
    }
    Pedigree { root: root.clone(), by_id }
}

/// `HorseSource` backed by a map, recording every batched lookup.
#[derive(Default)]
pub struct MemorySource {
    horses: HashMap<Uuid, HorseRecord>,
    /// Ids requested by each `get_horses_by_ids` call, in call order.
    pub batches: Mutex<Vec<Vec<Uuid>>>,
    /// Fail the root lookup with a database error.
    pub fail_root: bool,
    /// Fail batched lookups once this many batches have succeeded.
    pub fail_batches_after: Option<usize>,
}

impl MemorySource {
    #[must_use]
    pub fn new(horses: impl IntoIterator<Item = HorseRecord>) -> Self {
        Self { horses: horses.into_iter().map(|h| (h.id, h)).collect(), ..Self::default() }
    }

    pub fn batch_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl HorseSource for MemorySource {
    async fn get_horse(&self, id: Uuid) -> Result<Option<HorseRecord>, HorseError> {
        if self.fail_root {
            return Err(HorseError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.horses.get(&id).cloned())
    }

    async fn get_horses_by_ids(&self, ids: &[Uuid]) -> Result<Vec<HorseRecord>, HorseError> {
        let mut batches = self.batches.lock().unwrap();
        if self.fail_batches_after.is_some_and(|limit| batches.len() >= limit) {
            return Err(HorseError::Database(sqlx::Error::PoolTimedOut));
        }
        batches.push(ids.to_vec());
        Ok(ids.iter().filter_map(|id| self.horses.get(id).cloned()).collect())
    }
}
