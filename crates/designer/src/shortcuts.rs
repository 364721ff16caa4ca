//! Keyboard shortcut translation.
//!
//! Hosts feed key chords in and dispatch whatever command comes out. The
//! garden is only read here, never modified.

use shared::{ElementPatch, Garden, SettingChange, MAX_ZOOM, MIN_ZOOM};

use crate::command::Command;
use crate::state::EngineConfig;

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Backspace,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// A key press with its modifiers. `command` is Ctrl, or Cmd on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub command: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            command: false,
            shift: false,
        }
    }

    pub fn command(key: Key) -> Self {
        Self {
            key,
            command: true,
            shift: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Map a key chord to the command it triggers, if any.
pub fn command_for_key(garden: &Garden, config: &EngineConfig, chord: KeyChord) -> Option<Command> {
    let first_selected = garden.selection.iter().find_map(|id| garden.element(id));

    match chord.key {
        Key::Char(c) if chord.command => match c.to_ascii_lowercase() {
            // Ctrl+Z undo, Ctrl+Shift+Z redo
            'z' if chord.shift => Some(Command::Redo),
            'z' => Some(Command::Undo),
            'y' => Some(Command::Redo),
            'd' => first_selected.map(|e| Command::DuplicateElement { id: e.id.clone() }),
            'a' => Some(Command::SelectAll),
            _ => None,
        },
        Key::Char('+') | Key::Char('=') => Some(zoom_by(garden, config.zoom_step)),
        Key::Char('-') => Some(zoom_by(garden, -config.zoom_step)),
        Key::Char(_) => None,
        Key::Delete | Key::Backspace => {
            first_selected.map(|e| Command::RemoveElement { id: e.id.clone() })
        }
        Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
            let element = first_selected?;
            let step = if chord.shift {
                config.nudge_step_large
            } else {
                config.nudge_step
            };
            let (dx, dy) = match chord.key {
                Key::ArrowUp => (0.0, -step),
                Key::ArrowDown => (0.0, step),
                Key::ArrowLeft => (-step, 0.0),
                _ => (step, 0.0),
            };
            Some(Command::UpdateElement {
                id: element.id.clone(),
                changes: ElementPatch::move_to(element.position.x + dx, element.position.y + dy),
            })
        }
        Key::Escape => Some(Command::ClearSelection),
    }
}

fn zoom_by(garden: &Garden, delta: f64) -> Command {
    let zoom = (garden.settings.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    Command::SetSetting(SettingChange::Zoom((zoom * 100.0).round() / 100.0))
}
