//! Z-order reindexing
//!
//! After any move the elements' `z_index` equals their 1-based array rank.
//! This is the only place z-indices are recomputed.

use std::sync::Arc;

use shared::{Element, LayerDirection};

use crate::document::{derive, Snapshot};

/// Assign `z_index = rank` (1-based) in array order.
pub fn reindex(elements: &mut [Element]) {
    for (rank, element) in elements.iter_mut().enumerate() {
        element.z_index = rank as i64 + 1;
    }
}

/// True when z-indices are exactly `1..=N` in array order.
pub fn is_dense(elements: &[Element]) -> bool {
    elements
        .iter()
        .enumerate()
        .all(|(rank, e)| e.z_index == rank as i64 + 1)
}

/// Destination index for a move, `None` when already at the boundary.
fn destination(index: usize, len: usize, direction: LayerDirection) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match direction {
        LayerDirection::Forward if index < last => Some(index + 1),
        LayerDirection::Front if index < last => Some(last),
        LayerDirection::Backward if index > 0 => Some(index - 1),
        LayerDirection::Back if index > 0 => Some(0),
        _ => None,
    }
}

/// Move the element one step or all the way in `direction`, then reindex.
pub fn reorder_layer(doc: &Snapshot, id: &str, direction: LayerDirection) -> Snapshot {
    let Some(index) = doc.index_of(id) else {
        return Arc::clone(doc);
    };
    let Some(to) = destination(index, doc.elements.len(), direction) else {
        return Arc::clone(doc);
    };

    derive(doc, |garden| {
        let element = garden.elements.remove(index);
        garden.elements.insert(to, element);
        reindex(&mut garden.elements);
    })
}
