//! Command protocol for the editing engine.
//!
//! Commands travel as `{"type": "<tag>", "payload": {...}}`. Unknown tags and
//! malformed payloads leave the garden untouched.

use serde::{Deserialize, Serialize};
use shared::{AlignKind, Element, ElementId, ElementPatch, Garden, LayerDirection, SettingChange};

use crate::state::display::layer_listing;
use crate::state::session::{EngineSession, Transition};

/// A command accepted by [`EngineSession::dispatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Command {
    /// Replace the whole document (undoable).
    InitDocument {
        #[serde(default)]
        garden: Garden,
    },
    AddElement {
        element: Element,
    },
    /// Patch an element with absolute values.
    UpdateElement {
        id: ElementId,
        changes: ElementPatch,
    },
    RemoveElement {
        id: ElementId,
    },
    DuplicateElement {
        #[serde(alias = "elementId")]
        id: ElementId,
    },
    SelectElement {
        id: ElementId,
        #[serde(default)]
        additive: bool,
    },
    SelectElements {
        ids: Vec<ElementId>,
    },
    ClearSelection,
    SelectAll,
    SetSetting(SettingChange),
    AlignSelection {
        align: AlignKind,
    },
    ReorderLayer {
        #[serde(alias = "elementId")]
        id: ElementId,
        direction: LayerDirection,
    },
    Undo,
    Redo,
    /// Any tag this engine does not know.
    #[serde(other)]
    Unknown,
}

impl Command {
    /// Protocol tag, used in logs
    pub fn tag(&self) -> &'static str {
        match self {
            Command::InitDocument { .. } => "init_document",
            Command::AddElement { .. } => "add_element",
            Command::UpdateElement { .. } => "update_element",
            Command::RemoveElement { .. } => "remove_element",
            Command::DuplicateElement { .. } => "duplicate_element",
            Command::SelectElement { .. } => "select_element",
            Command::SelectElements { .. } => "select_elements",
            Command::ClearSelection => "clear_selection",
            Command::SelectAll => "select_all",
            Command::SetSetting(_) => "set_setting",
            Command::AlignSelection { .. } => "align_selection",
            Command::ReorderLayer { .. } => "reorder_layer",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Unknown => "unknown",
        }
    }
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: Some(data),
        }
    }
}

/// Execute a single command on the session.
pub fn execute_command(session: &mut EngineSession, cmd: Command) -> CommandResponse {
    match session.dispatch(cmd) {
        Ok(transition) => CommandResponse::ok_with_data(serde_json::json!({
            "transition": transition,
            "version": session.version(),
        })),
        Err(e) => CommandResponse::err(
            e.to_string(),
            serde_json::json!({
                "transition": Transition::Unchanged,
                "version": session.version(),
            }),
        ),
    }
}

/// Execute an already-parsed JSON value. Values that are not a valid command
/// are ignored.
pub fn execute_value(session: &mut EngineSession, value: serde_json::Value) -> CommandResponse {
    match serde_json::from_value::<Command>(value) {
        Ok(cmd) => execute_command(session, cmd),
        Err(e) => {
            tracing::debug!("Ignoring malformed command: {e}");
            CommandResponse::ok_with_data(serde_json::json!({
                "transition": Transition::Unchanged,
                "version": session.version(),
                "ignored": e.to_string(),
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(session: &mut EngineSession, json: &str) -> Result<CommandResponse, String> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_value(session, value))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    session: &mut EngineSession,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(values
        .into_iter()
        .map(|value| execute_value(session, value))
        .collect())
}

/// Summary of the current garden: layers, selection, settings and history depth.
pub fn inspect(session: &EngineSession) -> serde_json::Value {
    let garden = session.garden();
    serde_json::json!({
        "garden_id": garden.id,
        "name": garden.name,
        "element_count": garden.elements.len(),
        "layers": layer_listing(garden),
        "selection": garden.selection,
        "settings": garden.settings,
        "can_undo": session.can_undo(),
        "can_redo": session.can_redo(),
        "history_depth": session.history().past_len(),
        "version": session.version(),
    })
}
