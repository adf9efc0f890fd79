//! Identifier newtypes.
//!
//! Both identifiers are uuid-backed and stable: editing an event must
//! produce the same `EventId` it started with so the caller can do an
//! index-free replace-in-place.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an event within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(EventId::generate(), EventId::generate());
        assert_ne!(ProjectId::generate(), ProjectId::generate());
    }

    #[test]
    fn event_id_is_copy_and_stable() {
        let id = EventId::generate();
        let copy = id;
        assert_eq!(id, copy);
    }

    #[test]
    fn ids_serialize_as_plain_uuid_strings() {
        let id = EventId::generate();
        let json = serde_json::to_string(&id).unwrap();
        // Transparent repr: a quoted uuid, no wrapper object
        assert!(json.starts_with('"') && json.ends_with('"'));
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
