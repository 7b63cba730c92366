//! Horse store — read-only pedigree lookups against Postgres.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pedigree resolver only needs two reads: one horse by id and a batch
//! of horses by id set. `PgHorseStore` answers both from the `horses`
//! table; everything else about horse records is managed elsewhere.

use sqlx::PgPool;
use uuid::Uuid;

use crate::pedigree::{Gender, HorseRecord, HorseSource};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum HorseError {
    #[error("horse not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row shape shared by the single and batched queries.
type HorseRow = (Uuid, String, String, Option<Uuid>, Option<Uuid>, bool);

macro_rules! select_horses_where {
    ($filter:literal) => {
        concat!("SELECT id, name, gender, sire_id, dam_id, is_pedigree_only FROM horses WHERE ", $filter)
    };
}

const SELECT_HORSE_BY_ID: &str = select_horses_where!("id = $1");
const SELECT_HORSES_BY_IDS: &str = select_horses_where!("id = ANY($1)");

fn row_to_record((id, name, gender, sire_id, dam_id, is_pedigree_only): HorseRow) -> HorseRecord {
    HorseRecord { id, name, gender: Gender::from_db(&gender), sire_id, dam_id, is_pedigree_only }
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Clone)]
pub struct PgHorseStore {
    pool: PgPool,
}

impl PgHorseStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl HorseSource for PgHorseStore {
    async fn get_horse(&self, id: Uuid) -> Result<Option<HorseRecord>, HorseError> {
        let row = sqlx::query_as::<_, HorseRow>(SELECT_HORSE_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(row_to_record))
    }

    async fn get_horses_by_ids(&self, ids: &[Uuid]) -> Result<Vec<HorseRecord>, HorseError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, HorseRow>(SELECT_HORSES_BY_IDS)
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(row_to_record).collect())
    }
}

#[cfg(test)]
#[path = "horse_test.rs"]
mod tests;
