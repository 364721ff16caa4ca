//! Element add/update/remove/duplicate

use std::sync::Arc;

use shared::{Element, ElementPatch};

use super::{derive, Snapshot};
use crate::error::EditError;
use crate::ids::IdGenerator;

/// Append an element. Ids must stay unique and the size positive.
pub fn add_element(doc: &Snapshot, element: Element) -> Result<Snapshot, EditError> {
    if doc.contains(&element.id) {
        return Err(EditError::DuplicateId { id: element.id });
    }
    if !element.size.is_valid() {
        return Err(EditError::InvalidSize { id: element.id });
    }
    Ok(derive(doc, |garden| garden.elements.push(element)))
}

/// Merge `changes` into the element with `id`.
pub fn update_element(doc: &Snapshot, id: &str, changes: &ElementPatch) -> Snapshot {
    let Some(index) = doc.index_of(id) else {
        return Arc::clone(doc);
    };
    if changes.is_empty() {
        return Arc::clone(doc);
    }
    derive(doc, |garden| changes.apply(&mut garden.elements[index]))
}

/// Remove the element and strip it from the selection.
pub fn remove_element(doc: &Snapshot, id: &str) -> Snapshot {
    if !doc.contains(id) {
        return Arc::clone(doc);
    }
    derive(doc, |garden| {
        garden.elements.retain(|e| e.id != id);
        garden.selection.retain(|s| s != id);
    })
}

/// Clone an element under a fresh id, shifted by `offset` on both axes, and
/// make the clone the only selected element.
pub fn duplicate_element(
    doc: &Snapshot,
    id: &str,
    ids: &mut dyn IdGenerator,
    offset: f64,
) -> Result<Snapshot, EditError> {
    let Some(source) = doc.element(id) else {
        return Ok(Arc::clone(doc));
    };

    let new_id = ids.next_id();
    if doc.contains(&new_id) {
        return Err(EditError::DuplicateId { id: new_id });
    }

    let mut clone = source.clone();
    clone.id = new_id.clone();
    clone.position.x += offset;
    clone.position.y += offset;

    Ok(derive(doc, |garden| {
        garden.elements.push(clone);
        garden.selection = vec![new_id];
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{element_at, garden_with};
    use crate::ids::SequentialIdGenerator;
    use shared::{ElementKind, Garden, Position, Size};

    #[test]
    fn test_add_appends() {
        let doc = garden_with(vec![element_at("a", 0.0, 0.0)]);
        let next = add_element(&doc, Element::new("b", ElementKind::Tree)).unwrap();
        assert_eq!(next.elements.len(), 2);
        assert_eq!(next.elements[1].id, "b");
        assert_eq!(next.elements[1].z_index, 1);
        // input snapshot untouched
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let doc = garden_with(vec![element_at("a", 0.0, 0.0)]);
        let err = add_element(&doc, Element::new("a", ElementKind::Tree)).unwrap_err();
        assert_eq!(err, EditError::DuplicateId { id: "a".to_string() });
    }

    #[test]
    fn test_add_rejects_degenerate_size() {
        let doc = garden_with(vec![element_at("a", 0.0, 0.0)]);
        for (w, h) in [(0.0, -10.0), (48.0, 0.0), (f64::NAN, 48.0)] {
            let element = Element::new("b", ElementKind::Plant).with_size(w, h);
            let err = add_element(&doc, element).unwrap_err();
            assert_eq!(err, EditError::InvalidSize { id: "b".to_string() });
        }
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn test_update_merges_position() {
        let doc = garden_with(vec![element_at("a", 5.0, 6.0)]);
        let patch: ElementPatch = serde_json::from_str(r#"{"position": {"x": 50}}"#).unwrap();
        let next = update_element(&doc, "a", &patch);
        assert_eq!(next.elements[0].position, Position::new(50.0, 6.0));
        assert_eq!(next.elements[0].size, Size::new(48.0, 48.0));
    }

    #[test]
    fn test_update_missing_id_is_same_snapshot() {
        let doc = garden_with(vec![element_at("a", 0.0, 0.0)]);
        let next = update_element(&doc, "nope", &ElementPatch::move_to(1.0, 1.0));
        assert!(Arc::ptr_eq(&doc, &next));
    }

    #[test]
    fn test_update_empty_patch_is_same_snapshot() {
        let doc = garden_with(vec![element_at("a", 0.0, 0.0)]);
        let next = update_element(&doc, "a", &ElementPatch::default());
        assert!(Arc::ptr_eq(&doc, &next));
    }

    #[test]
    fn test_remove_prunes_selection() {
        let mut garden = Garden::clone(&garden_with(vec![
            element_at("a", 0.0, 0.0),
            element_at("b", 0.0, 0.0),
        ]));
        garden.selection = vec!["a".to_string(), "b".to_string()];
        let doc = Arc::new(garden);

        let next = remove_element(&doc, "a");
        assert_eq!(next.elements.len(), 1);
        assert_eq!(next.selection, vec!["b".to_string()]);
    }

    #[test]
    fn test_remove_missing_is_same_snapshot() {
        let doc = garden_with(vec![element_at("a", 0.0, 0.0)]);
        assert!(Arc::ptr_eq(&doc, &remove_element(&doc, "zzz")));
    }

    #[test]
    fn test_duplicate_offsets_and_selects() {
        let doc = garden_with(vec![element_at("a", 10.0, 20.0)]);
        let mut ids = SequentialIdGenerator::new("copy_");
        let next = duplicate_element(&doc, "a", &mut ids, 10.0).unwrap();

        assert_eq!(next.elements.len(), 2);
        let clone = &next.elements[1];
        assert_eq!(clone.id, "copy_1");
        assert_eq!(clone.position, Position::new(20.0, 30.0));
        assert_eq!(clone.kind, next.elements[0].kind);
        assert_eq!(next.selection, vec!["copy_1".to_string()]);
    }

    #[test]
    fn test_duplicate_missing_source_is_same_snapshot() {
        let doc = garden_with(vec![element_at("a", 0.0, 0.0)]);
        let mut ids = SequentialIdGenerator::new("copy_");
        let next = duplicate_element(&doc, "nope", &mut ids, 10.0).unwrap();
        assert!(Arc::ptr_eq(&doc, &next));
    }

    #[test]
    fn test_duplicate_rejects_colliding_generated_id() {
        let doc = garden_with(vec![element_at("a", 0.0, 0.0), element_at("x1", 0.0, 0.0)]);
        let mut ids = SequentialIdGenerator::new("x");
        let err = duplicate_element(&doc, "a", &mut ids, 10.0).unwrap_err();
        assert_eq!(err, EditError::DuplicateId { id: "x1".to_string() });
    }
}
