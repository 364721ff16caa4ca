//! Factory functions for creating test data.
//!
//! Provides convenient helpers to construct `Element`s, garden snapshots and
//! sessions with deterministic ids.

use std::sync::Arc;

use shared::*;

use crate::document::Snapshot;
use crate::ids::SequentialIdGenerator;
use crate::state::{EngineConfig, EngineSession};

// ── Element factories ───────────────────────────────────────────

/// Create a default-sized decor element at a position.
pub fn element_at(id: &str, x: f64, y: f64) -> Element {
    Element::new(id, ElementKind::Decor).with_position(x, y)
}

/// Create a decor element with an explicit box.
pub fn sized_at(id: &str, x: f64, y: f64, w: f64, h: f64) -> Element {
    element_at(id, x, y).with_size(w, h)
}

/// Create a labelled flower.
pub fn flower(id: &str, label: &str, x: f64, y: f64) -> Element {
    Element::new(id, ElementKind::Flower)
        .with_position(x, y)
        .with_size(24.0, 24.0)
        .with_prop("label", serde_json::json!(label))
}

// ── Garden factories ────────────────────────────────────────────

/// Snapshot of garden "g1" holding `elements`, z-indices densely assigned.
pub fn garden_with(elements: Vec<Element>) -> Snapshot {
    let mut garden = Garden::new("g1", "Test Garden");
    garden.elements = elements;
    crate::layers::reindex(&mut garden.elements);
    Arc::new(garden)
}

/// A small garden: a path, a tree and two flowers.
pub fn sample_garden() -> Garden {
    let mut garden = Garden::new("sample", "Sample Garden");
    garden.elements = vec![
        Element::new("path", ElementKind::Path)
            .with_position(0.0, 100.0)
            .with_size(240.0, 24.0),
        Element::new("oak", ElementKind::Tree)
            .with_position(20.0, 10.0)
            .with_size(80.0, 80.0),
        flower("rose", "Rose", 150.0, 40.0),
        flower("tulip", "Tulip", 190.0, 60.0),
    ];
    crate::layers::reindex(&mut garden.elements);
    garden
}

// ── Sessions ────────────────────────────────────────────────────

/// Session with default config and sequential ids ("id_1", "id_2", ...).
pub fn session() -> EngineSession {
    EngineSession::with_id_generator(
        EngineConfig::default(),
        Box::new(SequentialIdGenerator::new("id_")),
    )
}

/// Session whose initial present is `garden`.
pub fn session_with(garden: Garden) -> Result<EngineSession, crate::error::EditError> {
    EngineSession::from_garden(
        garden,
        EngineConfig::default(),
        Box::new(SequentialIdGenerator::new("id_")),
    )
}
