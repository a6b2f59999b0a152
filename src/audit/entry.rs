//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// Entity was deleted
    Delete,
    /// Successful login
    Login,
    /// Rejected login attempt
    LoginFailed,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Login => write!(f, "LOGIN"),
            Operation::LoginFailed => write!(f, "LOGIN_FAILED"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Contact,
    Credential,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Contact => write!(f, "Contact"),
            EntityType::Credential => write!(f, "Credential"),
        }
    }
}

/// A single audit log entry
///
/// Records a single operation on an entity with optional before/after values
/// for tracking changes. Credential entries never carry a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// ID of the affected entity (session id for contacts, username for credentials)
    pub entity_id: String,

    /// Human-readable description of the entity (e.g., contact name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the entity before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the entity after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn bare(operation: Operation, entity_type: EntityType, entity_id: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            entity_name,
            after: serde_json::to_value(entity).ok(),
            ..Self::bare(Operation::Create, entity_type, entity_id.into())
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            entity_name,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::bare(Operation::Update, entity_type, entity_id.into())
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            entity_name,
            before: serde_json::to_value(entity).ok(),
            ..Self::bare(Operation::Delete, entity_type, entity_id.into())
        }
    }

    /// Record that an account was registered (username only)
    pub fn registered(username: &str) -> Self {
        Self::bare(Operation::Create, EntityType::Credential, username.to_string())
    }

    /// Record a login attempt (username only)
    pub fn login(username: &str, success: bool) -> Self {
        let operation = if success {
            Operation::Login
        } else {
            Operation::LoginFailed
        };
        Self::bare(operation, EntityType::Credential, username.to_string())
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(Operation::LoginFailed.to_string(), "LOGIN_FAILED");
    }

    #[test]
    fn test_entity_type_display() {
        assert_eq!(EntityType::Contact.to_string(), "Contact");
        assert_eq!(EntityType::Credential.to_string(), "Credential");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"name": "Bob", "phone": "+44123"});
        let entry = AuditEntry::create(
            EntityType::Contact,
            "con-12345678",
            Some("Bob".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Contact);
        assert_eq!(entry.entity_id, "con-12345678");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry() {
        let before = json!({"phone": "+44123", "country": "UK"});
        let after = json!({"phone": "+1242555", "country": "Bahamas"});

        let entry = AuditEntry::update(
            EntityType::Contact,
            "con-12345678",
            Some("Bob".to_string()),
            &before,
            &after,
            Some("country: \"UK\" -> \"Bahamas\"".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert!(entry.diff_summary.unwrap().contains("Bahamas"));
    }

    #[test]
    fn test_delete_entry() {
        let data = json!({"name": "Bob"});
        let entry = AuditEntry::delete(EntityType::Contact, "con-1", None, &data);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_credential_entries_have_no_snapshot() {
        let registered = AuditEntry::registered("alice");
        assert_eq!(registered.operation, Operation::Create);
        assert_eq!(registered.entity_type, EntityType::Credential);
        assert!(registered.before.is_none() && registered.after.is_none());

        let failed = AuditEntry::login("alice", false);
        assert_eq!(failed.operation, Operation::LoginFailed);
        assert_eq!(failed.entity_id, "alice");

        assert_eq!(AuditEntry::login("alice", true).operation, Operation::Login);
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::login("alice", false);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"login_failed\""));
        assert!(!json.contains("\"after\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::LoginFailed);
        assert_eq!(deserialized.entity_type, EntityType::Credential);
    }

    #[test]
    fn test_human_readable_format() {
        let data = json!({"name": "Bob"});
        let entry = AuditEntry::create(
            EntityType::Contact,
            "con-12345678",
            Some("Bob".to_string()),
            &data,
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Contact"));
        assert!(formatted.contains("con-12345678"));
        assert!(formatted.contains("(Bob)"));
    }
}
