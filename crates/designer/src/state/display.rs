//! Display helper functions for elements and layers

use serde::Serialize;
use shared::{Element, ElementKind, Garden};

/// Get display name for an element
pub fn element_display_name(element: &Element) -> String {
    match element.props.get("label").and_then(|v| v.as_str()) {
        Some(label) if !label.is_empty() => format!("{} ({})", label, short_id(&element.id)),
        _ => format!("{} ({})", element.kind.label(), short_id(&element.id)),
    }
}

/// Get icon for an element kind
pub fn element_icon(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Plant => "[P]",
        ElementKind::Tree => "[T]",
        ElementKind::Flower => "[*]",
        ElementKind::Path => "[=]",
        ElementKind::Water => "[~]",
        ElementKind::Decor => "[D]",
        ElementKind::Shape => "[#]",
    }
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// One row of the layers panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerEntry {
    pub id: String,
    pub icon: &'static str,
    pub name: String,
    pub z_index: i64,
    pub selected: bool,
}

/// Layers panel rows, topmost first
pub fn layer_listing(garden: &Garden) -> Vec<LayerEntry> {
    garden
        .elements
        .iter()
        .rev()
        .map(|e| LayerEntry {
            id: e.id.clone(),
            icon: element_icon(e.kind),
            name: element_display_name(e),
            z_index: e.z_index,
            selected: garden.is_selected(&e.id),
        })
        .collect()
}
