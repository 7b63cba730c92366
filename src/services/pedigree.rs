//! Pedigree service — resolve a horse's ancestry and lay it out.

use tracing::info;
use uuid::Uuid;

use super::horse::HorseError;
use crate::pedigree::{HorseSource, LayoutConfig, PedigreeGraph, build_graph, resolve};

/// Build the pedigree diagram for `horse_id`.
///
/// # Errors
///
/// Returns [`HorseError::NotFound`] if the horse itself cannot be loaded.
/// Missing or failing ancestor lookups only shorten the diagram.
pub async fn pedigree_graph(
    source: &dyn HorseSource,
    horse_id: Uuid,
    config: &LayoutConfig,
) -> Result<PedigreeGraph, HorseError> {
    let pedigree = resolve(source, horse_id, config.max_depth)
        .await
        .ok_or(HorseError::NotFound(horse_id))?;

    let graph = build_graph(&pedigree, config);
    info!(
        %horse_id,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        generations = graph.generations,
        "pedigree graph built"
    );
    Ok(graph)
}

#[cfg(test)]
#[path = "pedigree_test.rs"]
mod tests;
