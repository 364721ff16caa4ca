//! Axis-aligned bounding boxes and selection alignment/distribution
//!
//! Alignment works on the selection's bounding box only, never the whole
//! garden. Fewer than two resolvable selected elements is a no-op.

use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Rect;
use shared::{AlignKind, Element, Garden, Position};

use crate::document::{derive, Snapshot};

/// Rectangle covered by an element (rotation ignored).
pub fn element_rect(element: &Element) -> Rect {
    Rect::new(
        element.position.x,
        element.position.y,
        element.right(),
        element.bottom(),
    )
}

/// Union of element rectangles, `None` for an empty set.
pub fn bounding_box<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Option<Rect> {
    elements
        .into_iter()
        .map(element_rect)
        .reduce(|acc, rect| acc.union(rect))
}

/// Selected elements in selection order. Stale ids are skipped.
pub fn resolve_selection(garden: &Garden) -> Vec<&Element> {
    garden
        .selection
        .iter()
        .filter_map(|id| garden.element(id))
        .collect()
}

/// Half-way values round toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Even spacing along one axis between the lowest and highest element.
struct Distribution<'a> {
    first: f64,
    step: f64,
    rank: HashMap<&'a str, usize>,
}

impl<'a> Distribution<'a> {
    fn along(selected: &[&'a Element], axis: impl Fn(&Element) -> f64) -> Self {
        let mut sorted = selected.to_vec();
        sorted.sort_by(|a, b| axis(*a).total_cmp(&axis(*b)));

        let first = sorted.first().map_or(0.0, |e| axis(*e));
        let last = sorted.last().map_or(0.0, |e| axis(*e));
        let gaps = sorted.len().saturating_sub(1).max(1);

        Self {
            first,
            step: (last - first) / gaps as f64,
            rank: sorted
                .iter()
                .enumerate()
                .map(|(i, e)| (e.id.as_str(), i))
                .collect(),
        }
    }

    fn slot(&self, element: &Element) -> f64 {
        let rank = self.rank.get(element.id.as_str()).copied().unwrap_or(0);
        round_half_up(self.first + self.step * rank as f64)
    }
}

/// Target position of every selected element for `kind`, or `None` when
/// fewer than two selected elements resolve.
pub fn alignment_targets(garden: &Garden, kind: AlignKind) -> Option<Vec<(&str, Position)>> {
    let selected = resolve_selection(garden);
    if selected.len() < 2 {
        return None;
    }
    let bounds = bounding_box(selected.iter().copied())?;
    let center = bounds.center();

    let distribution = match kind {
        AlignKind::DistributeX => Some(Distribution::along(&selected, |e| e.position.x)),
        AlignKind::DistributeY => Some(Distribution::along(&selected, |e| e.position.y)),
        _ => None,
    };

    let targets = selected
        .iter()
        .map(|e| {
            let mut p = e.position;
            match kind {
                AlignKind::Left => p.x = bounds.x0,
                AlignKind::Right => p.x = bounds.x1 - e.size.width,
                AlignKind::Top => p.y = bounds.y0,
                AlignKind::Bottom => p.y = bounds.y1 - e.size.height,
                AlignKind::CenterX => p.x = round_half_up(center.x - e.size.width / 2.0),
                AlignKind::CenterY => p.y = round_half_up(center.y - e.size.height / 2.0),
                AlignKind::DistributeX => {
                    if let Some(d) = &distribution {
                        p.x = d.slot(e);
                    }
                }
                AlignKind::DistributeY => {
                    if let Some(d) = &distribution {
                        p.y = d.slot(e);
                    }
                }
            }
            (e.id.as_str(), p)
        })
        .collect();

    Some(targets)
}

/// Move the selected elements according to `kind`. Unselected elements pass
/// through unchanged.
pub fn align_selection(doc: &Snapshot, kind: AlignKind) -> Snapshot {
    let Some(targets) = alignment_targets(doc, kind) else {
        return Arc::clone(doc);
    };
    let targets: HashMap<&str, Position> = targets.into_iter().collect();

    derive(doc, |garden| {
        for element in &mut garden.elements {
            if let Some(position) = targets.get(element.id.as_str()) {
                element.position = *position;
            }
        }
    })
}
