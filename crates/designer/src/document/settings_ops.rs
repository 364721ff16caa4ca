//! Canvas settings transitions (not history-significant)

use std::sync::Arc;

use shared::{SettingChange, Settings, MAX_ZOOM, MIN_ZOOM};

use super::{derive, Snapshot};
use crate::error::EditError;

fn checked_grid_size(size: f64) -> Result<f64, EditError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(EditError::InvalidSetting {
            key: "gridSize",
            value: size.to_string(),
        });
    }
    Ok(size)
}

fn checked_zoom(zoom: f64) -> Result<f64, EditError> {
    if !zoom.is_finite() {
        return Err(EditError::InvalidSetting {
            key: "zoom",
            value: zoom.to_string(),
        });
    }
    Ok(zoom.clamp(MIN_ZOOM, MAX_ZOOM))
}

/// Bring loaded settings within bounds: zoom is clamped, a bad grid size is
/// rejected.
pub fn normalize_settings(settings: &mut Settings) -> Result<(), EditError> {
    settings.grid_size = checked_grid_size(settings.grid_size)?;
    settings.zoom = checked_zoom(settings.zoom)?;
    Ok(())
}

/// Apply one setting change. Grid size must be positive; zoom is clamped into
/// `[MIN_ZOOM, MAX_ZOOM]`.
pub fn apply_setting(doc: &Snapshot, change: SettingChange) -> Result<Snapshot, EditError> {
    let settings = &doc.settings;
    match change {
        SettingChange::GridSize(size) => {
            let size = checked_grid_size(size)?;
            if settings.grid_size == size {
                return Ok(Arc::clone(doc));
            }
            Ok(derive(doc, |garden| garden.settings.grid_size = size))
        }
        SettingChange::SnapToGrid(snap) => {
            if settings.snap_to_grid == snap {
                return Ok(Arc::clone(doc));
            }
            Ok(derive(doc, |garden| garden.settings.snap_to_grid = snap))
        }
        SettingChange::Zoom(zoom) => {
            let zoom = checked_zoom(zoom)?;
            if settings.zoom == zoom {
                return Ok(Arc::clone(doc));
            }
            Ok(derive(doc, |garden| garden.settings.zoom = zoom))
        }
        SettingChange::Background(background) => {
            if settings.background == background {
                return Ok(Arc::clone(doc));
            }
            Ok(derive(doc, |garden| garden.settings.background = background))
        }
    }
}
