//! Horse pedigree routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::error;
use uuid::Uuid;

use crate::pedigree::PedigreeGraph;
use crate::services::horse::HorseError;
use crate::services::pedigree::pedigree_graph;
use crate::state::AppState;

/// `GET /api/horses/:id/pedigree` — positioned pedigree nodes and edges.
pub async fn pedigree(
    State(state): State<AppState>,
    Path(horse_id): Path<Uuid>,
) -> Result<Json<PedigreeGraph>, StatusCode> {
    let graph = pedigree_graph(&state.horses, horse_id, &state.layout)
        .await
        .map_err(horse_error_to_status)?;
    Ok(Json(graph))
}

/// Map a horse service error to an HTTP status.
///
/// `pedigree_graph` reports a failed root lookup as `NotFound`, so the
/// pedigree route only ever yields 404 here; the `Database` arm covers store
/// errors from callers that surface them directly.
pub(crate) fn horse_error_to_status(err: HorseError) -> StatusCode {
    match err {
        HorseError::NotFound(_) => StatusCode::NOT_FOUND,
        HorseError::Database(e) => {
            error!(error = %e, "horse lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "horses_test.rs"]
mod tests;
