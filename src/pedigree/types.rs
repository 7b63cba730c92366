//! Pedigree records and diagram output types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// INPUT RECORDS
// =============================================================================

/// Sex of a horse as far as pedigree labeling is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Map the stored text value. Anything other than exactly `female` is a male.
    #[must_use]
    pub fn from_db(raw: &str) -> Self {
        if raw == "female" { Self::Female } else { Self::Male }
    }
}

/// One horse in the genealogy. Mirrors the pedigree columns of `horses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorseRecord {
    pub id: Uuid,
    pub name: String,
    pub gender: Gender,
    /// Father. May reference an id that never resolves.
    pub sire_id: Option<Uuid>,
    /// Mother. Same caveats as `sire_id`.
    pub dam_id: Option<Uuid>,
    /// Stub ancestor entered only to complete a pedigree.
    pub is_pedigree_only: bool,
}

impl HorseRecord {
    /// Non-null parent links, sire first.
    pub fn parent_ids(&self) -> impl Iterator<Item = Uuid> {
        self.sire_id.into_iter().chain(self.dam_id)
    }
}

/// Every resolved record keyed by its own id.
pub type AncestryMap = HashMap<Uuid, HorseRecord>;

/// Resolver output: the queried horse plus everything reachable from it.
#[derive(Debug, Clone)]
pub struct Pedigree {
    pub root: HorseRecord,
    pub by_id: AncestryMap,
}

impl Pedigree {
    /// Look up a parent link, treating an id missing from the map as absent.
    #[must_use]
    pub fn parent(&self, link: Option<Uuid>) -> Option<&HorseRecord> {
        link.and_then(|id| self.by_id.get(&id))
    }
}

// =============================================================================
// DIAGRAM OUTPUT
// =============================================================================

pub const NODE_TYPE: &str = "pedigreeNode";
pub const EDGE_TYPE: &str = "smoothstep";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Label data rendered inside a diagram node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub name: String,
    pub gender: Gender,
    /// Generation title; empty for the queried horse.
    pub role: String,
    pub horse_id: Uuid,
    pub is_pedigree_only: bool,
    /// Whether the record itself names a sire, resolved or not.
    pub has_sire: bool,
    pub has_dam: bool,
}

/// A positioned horse. Inbred ancestors produce one node per occurrence,
/// so `id` is not unique across a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramNode {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub position: Position,
    pub data: NodeData,
}

/// Directed arc from a child to one of its resolved parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramEdge {
    pub id: String,
    pub source: Uuid,
    pub target: Uuid,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl DiagramEdge {
    #[must_use]
    pub fn new(source: Uuid, target: Uuid) -> Self {
        Self { id: format!("e-{source}-{target}"), source, target, kind: EDGE_TYPE }
    }
}

/// Layout result handed to the rendering widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PedigreeGraph {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
    /// Longest resolvable ancestor chain from the root.
    pub generations: usize,
}
