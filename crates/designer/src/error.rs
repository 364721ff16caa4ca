//! Errors raised by document transforms.

use shared::ElementId;
use thiserror::Error;

/// A transform refused to produce a new snapshot. The document is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("element id '{id}' already exists in the garden")]
    DuplicateId { id: ElementId },

    #[error("element '{id}' has a non-positive or non-finite size")]
    InvalidSize { id: ElementId },

    #[error("invalid value {value} for setting '{key}'")]
    InvalidSetting { key: &'static str, value: String },
}
