//! Ancestry resolver: breadth-first walk over sire/dam links.
//!
//! DESIGN
//! ======
//! One lookup for the root, then one batched lookup per generation. The
//! frontier for generation N+1 is built from the records returned for
//! generation N, so generations are fetched strictly in order.
//!
//! ERROR HANDLING
//! ==============
//! A root that cannot be loaded yields `None`. A failed or empty batch
//! further out only truncates the pedigree at that generation; partial
//! pedigrees are the common case. Ids already in the map are dropped before
//! each fetch, which together with the depth bound keeps cyclic data from
//! causing unbounded work.

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use super::types::{AncestryMap, HorseRecord, Pedigree};
use crate::services::horse::HorseError;

/// Generations fetched above the root when no override is configured.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Read access to horse records, implemented by the Postgres store.
#[async_trait::async_trait]
pub trait HorseSource: Send + Sync {
    /// Fetch a single horse. `Ok(None)` when the id is unknown.
    async fn get_horse(&self, id: Uuid) -> Result<Option<HorseRecord>, HorseError>;

    /// Fetch many horses at once. Unknown ids are omitted from the result.
    async fn get_horses_by_ids(&self, ids: &[Uuid]) -> Result<Vec<HorseRecord>, HorseError>;
}

/// Resolve a horse and its ancestors up to `max_depth` generations.
///
/// Returns `None` when the root is missing or its lookup fails.
pub async fn resolve(source: &dyn HorseSource, root_id: Uuid, max_depth: usize) -> Option<Pedigree> {
    let root = match source.get_horse(root_id).await {
        Ok(Some(root)) => root,
        Ok(None) => return None,
        Err(e) => {
            warn!(horse_id = %root_id, error = %e, "pedigree root lookup failed");
            return None;
        }
    };

    let mut by_id = AncestryMap::new();
    by_id.insert(root.id, root.clone());

    let mut frontier: Vec<Uuid> = root.parent_ids().collect();
    let mut generation = 0;

    while !frontier.is_empty() && generation < max_depth {
        let ids = unvisited(&frontier, &by_id);
        if ids.is_empty() {
            break;
        }

        let ancestors = match source.get_horses_by_ids(&ids).await {
            Ok(ancestors) => ancestors,
            Err(e) => {
                warn!(horse_id = %root_id, generation, error = %e, "ancestor lookup failed; truncating pedigree");
                break;
            }
        };
        if ancestors.is_empty() {
            break;
        }

        frontier = ancestors.iter().flat_map(HorseRecord::parent_ids).collect();
        for ancestor in ancestors {
            by_id.insert(ancestor.id, ancestor);
        }
        generation += 1;
    }

    debug!(horse_id = %root_id, generation, count = by_id.len(), "pedigree resolved");
    Some(Pedigree { root, by_id })
}

/// Deduplicate the frontier, keeping first-seen order, and drop visited ids.
fn unvisited(frontier: &[Uuid], by_id: &AncestryMap) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    frontier
        .iter()
        .copied()
        .filter(|id| !by_id.contains_key(id) && seen.insert(*id))
        .collect()
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
