//! Engine configuration

use serde::{Deserialize, Serialize};

use super::history::MAX_HISTORY;

fn default_history_limit() -> usize {
    MAX_HISTORY
}

fn default_duplicate_offset() -> f64 {
    10.0
}

fn default_garden_name() -> String {
    "Untitled Garden".to_string()
}

fn default_zoom_step() -> f64 {
    0.1
}

fn default_nudge_step() -> f64 {
    1.0
}

fn default_nudge_step_large() -> f64 {
    10.0
}

/// Tunables for an editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of undo steps
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Offset applied on both axes to duplicated elements
    #[serde(default = "default_duplicate_offset")]
    pub duplicate_offset: f64,
    /// Name given to new gardens
    #[serde(default = "default_garden_name")]
    pub default_garden_name: String,
    /// Zoom change per zoom shortcut
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
    /// Arrow key nudge distance
    #[serde(default = "default_nudge_step")]
    pub nudge_step: f64,
    /// Shift+arrow nudge distance
    #[serde(default = "default_nudge_step_large")]
    pub nudge_step_large: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            duplicate_offset: default_duplicate_offset(),
            default_garden_name: default_garden_name(),
            zoom_step: default_zoom_step(),
            nudge_step: default_nudge_step(),
            nudge_step_large: default_nudge_step_large(),
        }
    }
}

impl EngineConfig {
    /// Path of the config file in the platform config directory
    pub fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "garden", "garden-designer")
            .map(|dirs| dirs.config_dir().join("engine.json"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(json) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parse config from a JSON string (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// A zero history limit would silently disable undo.
    fn validated(mut self) -> Self {
        if self.history_limit == 0 {
            tracing::warn!("history_limit 0 disables undo, using {MAX_HISTORY}");
            self.history_limit = MAX_HISTORY;
        }
        self
    }
}
