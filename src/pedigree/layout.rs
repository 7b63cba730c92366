//! Layout engine: converts a resolved pedigree into diagram nodes and edges.
//!
//! Generation maps to the x axis (root at column 0, ancestors fanning out
//! to the right) and sibling order to the y axis. Leaves take consecutive
//! row slots in sire-before-dam depth-first order; every other node sits at
//! the midpoint of its parents, so subtrees never overlap.

use uuid::Uuid;

use super::resolve::DEFAULT_MAX_DEPTH;
use super::types::{
    DiagramEdge, DiagramNode, Gender, HorseRecord, NODE_TYPE, NodeData, Pedigree, PedigreeGraph, Position,
};

// Layout constants (in logical pixels).
pub const DEFAULT_COLUMN_WIDTH: f64 = 280.0;
pub const DEFAULT_ROW_GAP: f64 = 100.0;

/// Spacing and depth tuning. None of these affect ordering or centering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal distance between generations.
    pub column_width: f64,
    /// Vertical distance between consecutive leaf slots.
    pub row_gap: f64,
    /// Generation bound handed to the resolver.
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { column_width: DEFAULT_COLUMN_WIDTH, row_gap: DEFAULT_ROW_GAP, max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Lay out a resolved pedigree.
///
/// Parent links whose ids are not in `pedigree.by_id` are treated as absent.
/// A parent that already appears on the path from the root (cyclic data) is
/// treated as absent too, so the walk always terminates.
///
/// # Panics
///
/// Panics if the root is not stored in its own map under its own id; that
/// means the resolver contract was broken upstream.
#[must_use]
pub fn build_graph(pedigree: &Pedigree, config: &LayoutConfig) -> PedigreeGraph {
    let root = &pedigree.root;
    assert!(
        pedigree.by_id.get(&root.id).is_some_and(|stored| stored.id == root.id),
        "pedigree root {} missing from its ancestry map",
        root.id
    );
    debug_assert!(pedigree.by_id.iter().all(|(id, horse)| *id == horse.id), "ancestry map key/id mismatch");

    let mut lineage = Vec::new();
    let generations = max_depth(pedigree, root, 0, &mut lineage);

    let mut walk = Walk { pedigree, config, nodes: Vec::new(), edges: Vec::new() };
    let (_root_y, _leaf_slots) = walk.place(root, 0, &mut lineage, 0);

    PedigreeGraph { nodes: walk.nodes, edges: walk.edges, generations }
}

/// Resolvable `(sire, dam)` of `horse`, excluding anything already on `lineage`.
fn parents<'a>(
    pedigree: &'a Pedigree,
    horse: &HorseRecord,
    lineage: &[Uuid],
) -> (Option<&'a HorseRecord>, Option<&'a HorseRecord>) {
    let usable = |link: Option<Uuid>| pedigree.parent(link).filter(|p| !lineage.contains(&p.id));
    (usable(horse.sire_id), usable(horse.dam_id))
}

/// Length of the longest resolvable ancestor chain above `horse`.
fn max_depth(pedigree: &Pedigree, horse: &HorseRecord, current: usize, lineage: &mut Vec<Uuid>) -> usize {
    lineage.push(horse.id);
    let (sire, dam) = parents(pedigree, horse, lineage);
    let depth = [sire, dam]
        .into_iter()
        .flatten()
        .map(|parent| max_depth(pedigree, parent, current + 1, lineage))
        .fold(current, usize::max);
    lineage.pop();
    depth
}

struct Walk<'a> {
    pedigree: &'a Pedigree,
    config: &'a LayoutConfig,
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl Walk<'_> {
    /// Place `horse` and its ancestors. `next_slot` is the first free leaf
    /// slot; returns this node's y and the first slot still free afterwards.
    fn place(
        &mut self,
        horse: &HorseRecord,
        generation: usize,
        lineage: &mut Vec<Uuid>,
        next_slot: usize,
    ) -> (f64, usize) {
        lineage.push(horse.id);
        let (sire, dam) = parents(self.pedigree, horse, lineage);

        let mut slot = next_slot;
        let mut sire_center = None;
        let mut dam_center = None;
        if let Some(sire) = sire {
            let (center, after) = self.place(sire, generation + 1, lineage, slot);
            sire_center = Some(center);
            slot = after;
        }
        if let Some(dam) = dam {
            let (center, after) = self.place(dam, generation + 1, lineage, slot);
            dam_center = Some(center);
            slot = after;
        }
        lineage.pop();

        let y = match (sire_center, dam_center) {
            (Some(s), Some(d)) => f64::midpoint(s, d),
            (Some(center), None) | (None, Some(center)) => center,
            (None, None) => {
                #[allow(clippy::cast_precision_loss)]
                let leaf_y = slot as f64 * self.config.row_gap;
                slot += 1;
                leaf_y
            }
        };

        #[allow(clippy::cast_precision_loss)]
        let x = generation as f64 * self.config.column_width;

        self.nodes.push(DiagramNode {
            id: horse.id,
            kind: NODE_TYPE,
            position: Position { x, y },
            data: NodeData {
                name: horse.name.clone(),
                gender: horse.gender,
                role: role_name(generation, horse.gender),
                horse_id: horse.id,
                is_pedigree_only: horse.is_pedigree_only,
                has_sire: horse.sire_id.is_some(),
                has_dam: horse.dam_id.is_some(),
            },
        });
        for parent in [sire, dam].into_iter().flatten() {
            self.edges.push(DiagramEdge::new(horse.id, parent.id));
        }

        (y, slot)
    }
}

/// Generation title for a horse at `generation` steps from the root.
///
/// Past great-grandparents the title grows one `Ük` per extra generation.
#[must_use]
pub fn role_name(generation: usize, gender: Gender) -> String {
    let female = gender == Gender::Female;
    match generation {
        0 => String::new(),
        1 => (if female { "Anyakanca" } else { "Fedeztetőmén" }).to_owned(),
        2 => (if female { "Nagyanya" } else { "Nagyapa" }).to_owned(),
        3 => (if female { "Dédnagyanya" } else { "Dédnagyapa" }).to_owned(),
        n => {
            let prefix = "Ük".repeat(n - 3);
            if female { format!("{prefix}nagyanya") } else { format!("{prefix}nagyapa") }
        }
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
