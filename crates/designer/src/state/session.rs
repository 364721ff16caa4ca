//! Editing session: the single entry point that turns commands into history
//! transitions.
//!
//! A session owns exactly one [`HistoryState`]. Sessions share nothing, so any
//! number of them can coexist. Commands run synchronously to completion; hosts
//! with several threads must serialize commands before they reach `dispatch`.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use shared::{Element, ElementId, Garden, Settings};

use super::config::EngineConfig;
use super::history::HistoryState;
use crate::command::Command;
use crate::document::{
    add_element, apply_setting, clear_selection, duplicate_element, normalize_settings,
    remove_element, select_all, select_element, select_elements, update_element, Snapshot,
};
use crate::error::EditError;
use crate::geometry::align_selection;
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::layers::reorder_layer;

/// What a dispatched command did to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// New undoable snapshot; future cleared
    Committed,
    /// Present swapped without touching past/future (selection, settings)
    Replaced,
    Undone,
    Redone,
    /// Nothing changed
    Unchanged,
}

pub struct EngineSession {
    history: HistoryState,
    config: EngineConfig,
    ids: Box<dyn IdGenerator>,
    /// Monotonically increasing version, bumped whenever `present` changes
    version: u64,
}

impl EngineSession {
    /// New session on an empty garden, with random ids.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_id_generator(config, Box::new(UuidIdGenerator))
    }

    /// New session on an empty garden with a custom id source.
    pub fn with_id_generator(config: EngineConfig, mut ids: Box<dyn IdGenerator>) -> Self {
        let garden = Garden::new(ids.next_id(), config.default_garden_name.clone());
        Self {
            history: HistoryState::with_limit(Arc::new(garden), config.history_limit),
            config,
            ids,
            version: 0,
        }
    }

    /// Session whose initial present is `garden` (nothing to undo yet).
    pub fn from_garden(
        garden: Garden,
        config: EngineConfig,
        mut ids: Box<dyn IdGenerator>,
    ) -> Result<Self, EditError> {
        let garden = normalize_garden(garden, ids.as_mut())?;
        Ok(Self {
            history: HistoryState::with_limit(Arc::new(garden), config.history_limit),
            config,
            ids,
            version: 0,
        })
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current snapshot
    pub fn present(&self) -> &Snapshot {
        self.history.present()
    }

    pub fn garden(&self) -> &Garden {
        self.history.present()
    }

    pub fn selection(&self) -> &[ElementId] {
        &self.garden().selection
    }

    pub fn settings(&self) -> &Settings {
        &self.garden().settings
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.garden().element(id)
    }

    /// Selected elements in document order
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.garden().selected_elements()
    }

    pub fn history(&self) -> &HistoryState {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current version (increments on every change of `present`)
    pub fn version(&self) -> u64 {
        self.version
    }

    // ── Commands ──────────────────────────────────────────────

    /// Apply a command. On `Err` the session is unchanged.
    pub fn dispatch(&mut self, command: Command) -> Result<Transition, EditError> {
        let tag = command.tag();
        tracing::debug!(command = tag, "dispatch");

        match self.apply(command) {
            Ok(transition) => {
                if transition != Transition::Unchanged {
                    self.version += 1;
                }
                Ok(transition)
            }
            Err(e) => {
                tracing::warn!("Rejected {tag}: {e}");
                Err(e)
            }
        }
    }

    /// Start over with an empty garden (undoable). Returns the new garden id.
    pub fn create_empty_garden(&mut self, name: Option<&str>) -> Result<String, EditError> {
        let id = self.ids.next_id();
        let name = name.unwrap_or(&self.config.default_garden_name).to_string();
        self.dispatch(Command::InitDocument {
            garden: Garden::new(id.clone(), name),
        })?;
        Ok(id)
    }

    fn apply(&mut self, command: Command) -> Result<Transition, EditError> {
        let present = Arc::clone(self.history.present());

        let transition = match command {
            Command::InitDocument { garden } => {
                let garden = normalize_garden(garden, self.ids.as_mut())?;
                tracing::info!(
                    "Initialized garden {} ({} elements)",
                    garden.id,
                    garden.elements.len()
                );
                self.history.commit(Arc::new(garden));
                Transition::Committed
            }
            Command::AddElement { element } => {
                self.commit_if_changed(&present, add_element(&present, element)?)
            }
            Command::UpdateElement { id, changes } => {
                self.commit_if_changed(&present, update_element(&present, &id, &changes))
            }
            Command::RemoveElement { id } => {
                self.commit_if_changed(&present, remove_element(&present, &id))
            }
            Command::DuplicateElement { id } => {
                let next = duplicate_element(
                    &present,
                    &id,
                    self.ids.as_mut(),
                    self.config.duplicate_offset,
                )?;
                self.commit_if_changed(&present, next)
            }
            Command::SelectElement { id, additive } => {
                self.replace_if_changed(&present, select_element(&present, &id, additive))
            }
            Command::SelectElements { ids } => {
                self.replace_if_changed(&present, select_elements(&present, &ids))
            }
            Command::ClearSelection => self.replace_if_changed(&present, clear_selection(&present)),
            Command::SelectAll => self.replace_if_changed(&present, select_all(&present)),
            Command::SetSetting(change) => {
                self.replace_if_changed(&present, apply_setting(&present, change)?)
            }
            Command::AlignSelection { align } => {
                self.commit_if_changed(&present, align_selection(&present, align))
            }
            Command::ReorderLayer { id, direction } => {
                self.commit_if_changed(&present, reorder_layer(&present, &id, direction))
            }
            Command::Undo => {
                if self.history.undo() {
                    Transition::Undone
                } else {
                    Transition::Unchanged
                }
            }
            Command::Redo => {
                if self.history.redo() {
                    Transition::Redone
                } else {
                    Transition::Unchanged
                }
            }
            Command::Unknown => Transition::Unchanged,
        };

        Ok(transition)
    }

    fn commit_if_changed(&mut self, present: &Snapshot, next: Snapshot) -> Transition {
        if Arc::ptr_eq(present, &next) {
            return Transition::Unchanged;
        }
        self.history.commit(next);
        Transition::Committed
    }

    fn replace_if_changed(&mut self, present: &Snapshot, next: Snapshot) -> Transition {
        if Arc::ptr_eq(present, &next) {
            return Transition::Unchanged;
        }
        self.history.replace_present(next);
        Transition::Replaced
    }
}

impl Default for EngineSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Validate a garden coming from outside: unique ids, positive sizes and
/// in-range settings. Fills a missing garden id and drops stale or repeated
/// selection ids.
fn normalize_garden(mut garden: Garden, ids: &mut dyn IdGenerator) -> Result<Garden, EditError> {
    if let Some(id) = garden.first_duplicate_id() {
        return Err(EditError::DuplicateId { id: id.clone() });
    }
    if let Some(element) = garden.elements.iter().find(|e| !e.size.is_valid()) {
        return Err(EditError::InvalidSize {
            id: element.id.clone(),
        });
    }
    normalize_settings(&mut garden.settings)?;
    if garden.id.is_empty() {
        garden.id = ids.next_id();
    }

    let known: HashSet<&str> = garden.elements.iter().map(|e| e.id.as_str()).collect();
    let mut seen = HashSet::new();
    let selection: Vec<ElementId> = garden
        .selection
        .iter()
        .filter(|&id| known.contains(id.as_str()) && seen.insert(id.as_str()))
        .cloned()
        .collect();
    garden.selection = selection;

    Ok(garden)
}
