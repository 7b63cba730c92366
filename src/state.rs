//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the horse store and the layout tuning; both are cheap to clone and
//! nothing in it is mutated after startup.

use sqlx::PgPool;

use crate::pedigree::LayoutConfig;
use crate::services::horse::PgHorseStore;

#[derive(Clone)]
pub struct AppState {
    pub horses: PgHorseStore,
    pub layout: LayoutConfig,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, layout: LayoutConfig) -> Self {
        Self { horses: PgHorseStore::new(pool), layout }
    }
}
