//! Contact identifiers
//!
//! The contacts file has no id column, so ids are assigned when a contact is
//! created or loaded and live only for the running session. They let the
//! phonebook tell apart contacts whose stored fields are identical.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "con-";

/// Session-scoped contact identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let uuid = self.0.simple().to_string();
        write!(f, "{}{}", DISPLAY_PREFIX, &uuid[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let id1 = ContactId::new();
        let id2 = ContactId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_display() {
        let display = ContactId::new().to_string();
        assert!(display.starts_with("con-"));
        assert_eq!(display.len(), 12);
    }
}
