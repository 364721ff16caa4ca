//! Id generation for new elements and gardens.

use shared::ElementId;

/// Source of fresh identifiers, injected into the engine session.
pub trait IdGenerator {
    fn next_id(&mut self) -> ElementId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> ElementId {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix` + counter ids (scripted runs and tests).
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ElementId {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
