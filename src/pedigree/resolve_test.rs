use super::*;
use crate::pedigree::test_helpers::{MemorySource, horse, mare, stallion};
use crate::pedigree::types::Gender;

/// A single-parent chain `generations` deep; returns (root, all records).
fn sire_chain(generations: usize) -> (HorseRecord, Vec<HorseRecord>) {
    let mut records = vec![stallion("gen-top")];
    for i in (0..generations).rev() {
        let sire_id = records.last().map(|h| h.id);
        records.push(horse(&format!("gen-{i}"), Gender::Male, sire_id, None));
    }
    let root = records.last().cloned().unwrap();
    (root, records)
}

#[tokio::test]
async fn missing_root_resolves_to_none() {
    let source = MemorySource::new([stallion("Other")]);
    assert!(resolve(&source, Uuid::new_v4(), DEFAULT_MAX_DEPTH).await.is_none());
    assert_eq!(source.batch_count(), 0);
}

#[tokio::test]
async fn root_lookup_error_resolves_to_none() {
    let root = stallion("Root");
    let mut source = MemorySource::new([root.clone()]);
    source.fail_root = true;
    assert!(resolve(&source, root.id, DEFAULT_MAX_DEPTH).await.is_none());
}

#[tokio::test]
async fn parentless_root_needs_no_batches() {
    let root = stallion("Loner");
    let source = MemorySource::new([root.clone()]);

    let pedigree = resolve(&source, root.id, DEFAULT_MAX_DEPTH).await.unwrap();
    assert_eq!(pedigree.root, root);
    assert_eq!(pedigree.by_id.len(), 1);
    assert_eq!(source.batch_count(), 0);
}

#[tokio::test]
async fn resolves_one_batch_per_generation() {
    let grand_sire = stallion("Grand Sire");
    let grand_dam = mare("Grand Dam");
    let sire = horse("Sire", Gender::Male, Some(grand_sire.id), Some(grand_dam.id));
    let dam = mare("Dam");
    let root = horse("Foal", Gender::Female, Some(sire.id), Some(dam.id));
    let source = MemorySource::new([root.clone(), sire.clone(), dam.clone(), grand_sire.clone(), grand_dam.clone()]);

    let pedigree = resolve(&source, root.id, DEFAULT_MAX_DEPTH).await.unwrap();
    assert_eq!(pedigree.by_id.len(), 5);
    for (id, record) in &pedigree.by_id {
        assert_eq!(*id, record.id);
    }

    let batches = source.batches.lock().unwrap();
    assert_eq!(*batches, vec![vec![sire.id, dam.id], vec![grand_sire.id, grand_dam.id]]);
}

#[tokio::test]
async fn depth_bound_stops_long_chains() {
    let (root, records) = sire_chain(12);
    let source = MemorySource::new(records);

    let pedigree = resolve(&source, root.id, DEFAULT_MAX_DEPTH).await.unwrap();
    assert_eq!(pedigree.by_id.len(), DEFAULT_MAX_DEPTH + 1);
    assert_eq!(source.batch_count(), DEFAULT_MAX_DEPTH);
}

#[tokio::test]
async fn zero_depth_resolves_root_only() {
    let (root, records) = sire_chain(3);
    let source = MemorySource::new(records);

    let pedigree = resolve(&source, root.id, 0).await.unwrap();
    assert_eq!(pedigree.by_id.len(), 1);
    assert_eq!(source.batch_count(), 0);
}

#[tokio::test]
async fn sire_pointing_back_to_root_terminates() {
    let root_id = Uuid::new_v4();
    let sire = horse("Loop", Gender::Male, Some(root_id), None);
    let mut root = horse("Root", Gender::Male, Some(sire.id), None);
    root.id = root_id;
    let source = MemorySource::new([root.clone(), sire.clone()]);

    let pedigree = resolve(&source, root_id, DEFAULT_MAX_DEPTH).await.unwrap();
    assert_eq!(pedigree.by_id.len(), 2);
    assert_eq!(pedigree.by_id.keys().filter(|id| **id == root_id).count(), 1);
    // The second frontier is only the root again, which is filtered before fetching.
    assert_eq!(source.batch_count(), 1);
}

#[tokio::test]
async fn self_parented_record_terminates() {
    let mut root = stallion("Ouroboros");
    root.sire_id = Some(root.id);
    root.dam_id = Some(root.id);
    let source = MemorySource::new([root.clone()]);

    let pedigree = resolve(&source, root.id, DEFAULT_MAX_DEPTH).await.unwrap();
    assert_eq!(pedigree.by_id.len(), 1);
    assert_eq!(source.batch_count(), 0);
}

#[tokio::test]
async fn shared_ancestor_is_fetched_once() {
    let common = stallion("Common");
    let sire = horse("Sire", Gender::Male, Some(common.id), None);
    let dam = horse("Dam", Gender::Female, Some(common.id), None);
    let root = horse("Foal", Gender::Male, Some(sire.id), Some(dam.id));
    let source = MemorySource::new([root.clone(), sire.clone(), dam.clone(), common.clone()]);

    let pedigree = resolve(&source, root.id, DEFAULT_MAX_DEPTH).await.unwrap();
    assert_eq!(pedigree.by_id.len(), 4);
    let batches = source.batches.lock().unwrap();
    assert_eq!(batches[1], vec![common.id]);
}

#[tokio::test]
async fn unknown_parent_ids_end_the_branch() {
    let root = horse("Foal", Gender::Male, Some(Uuid::new_v4()), Some(Uuid::new_v4()));
    let source = MemorySource::new([root.clone()]);

    let pedigree = resolve(&source, root.id, DEFAULT_MAX_DEPTH).await.unwrap();
    assert_eq!(pedigree.by_id.len(), 1);
    assert_eq!(source.batch_count(), 1);
}

#[tokio::test]
async fn mid_traversal_failure_keeps_partial_pedigree() {
    let (root, records) = sire_chain(5);
    let mut source = MemorySource::new(records);
    source.fail_batches_after = Some(2);

    let pedigree = resolve(&source, root.id, DEFAULT_MAX_DEPTH).await.unwrap();
    assert_eq!(pedigree.by_id.len(), 3);
    assert_eq!(source.batch_count(), 2);
}

#[test]
fn unvisited_dedups_in_first_seen_order() {
    let visited = stallion("Seen");
    let mut by_id = AncestryMap::new();
    by_id.insert(visited.id, visited.clone());
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let ids = unvisited(&[b, visited.id, a, b, a], &by_id);
    assert_eq!(ids, vec![b, a]);
}
