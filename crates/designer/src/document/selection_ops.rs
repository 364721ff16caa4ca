//! Selection transitions (not history-significant)
//!
//! Ids that do not reference an element are dropped so the selection never
//! points at something that is not in the garden.

use std::collections::HashSet;
use std::sync::Arc;

use shared::ElementId;

use super::{derive, Snapshot};

/// Replace the selection with `[id]`, or add `id` when `additive`.
pub fn select_element(doc: &Snapshot, id: &str, additive: bool) -> Snapshot {
    if !doc.contains(id) {
        return Arc::clone(doc);
    }

    if additive {
        if doc.is_selected(id) {
            return Arc::clone(doc);
        }
        derive(doc, |garden| garden.selection.push(id.to_string()))
    } else {
        if doc.selection.len() == 1 && doc.selection[0] == id {
            return Arc::clone(doc);
        }
        derive(doc, |garden| garden.selection = vec![id.to_string()])
    }
}

/// Replace the selection with `ids`, de-duplicated in first-seen order.
pub fn select_elements(doc: &Snapshot, ids: &[ElementId]) -> Snapshot {
    let mut seen = HashSet::new();
    let selection: Vec<ElementId> = ids
        .iter()
        .filter(|&id| doc.contains(id))
        .filter(|&id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    if selection == doc.selection {
        return Arc::clone(doc);
    }
    derive(doc, |garden| garden.selection = selection)
}

/// Select every element in document order.
pub fn select_all(doc: &Snapshot) -> Snapshot {
    let ids: Vec<ElementId> = doc.elements.iter().map(|e| e.id.clone()).collect();
    select_elements(doc, &ids)
}

pub fn clear_selection(doc: &Snapshot) -> Snapshot {
    if doc.selection.is_empty() {
        return Arc::clone(doc);
    }
    derive(doc, |garden| garden.selection.clear())
}
