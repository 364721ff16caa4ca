//! Pure document transforms
//!
//! Every transform takes the current snapshot and returns a snapshot. A no-op
//! hands back the same `Arc`, so callers detect "nothing changed" with
//! `Arc::ptr_eq` and skip the history commit.

mod element_ops;
mod selection_ops;
mod settings_ops;

use std::sync::Arc;

use shared::Garden;

pub use element_ops::{add_element, duplicate_element, remove_element, update_element};
pub use selection_ops::{clear_selection, select_all, select_element, select_elements};
pub use settings_ops::{apply_setting, normalize_settings};

/// Immutable garden snapshot shared between history entries and readers.
pub type Snapshot = Arc<Garden>;

/// Copy the garden out of `doc`, apply `edit`, and wrap the result.
pub(crate) fn derive(doc: &Snapshot, edit: impl FnOnce(&mut Garden)) -> Snapshot {
    let mut next = Garden::clone(doc);
    edit(&mut next);
    Arc::new(next)
}
