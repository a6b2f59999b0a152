//! Audit logging for the phonebook
//!
//! Records contact creates, updates and deletes with before/after snapshots,
//! plus account registration and login attempts, in an append-only JSONL
//! file. Passwords and hashes are never written here.
//!
//! # Example
//!
//! ```rust,ignore
//! use phonebook::audit::{AuditEntry, AuditLogger, EntityType, generate_diff};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Contact,
//!     contact.id().to_string(),
//!     Some(contact.name().to_string()),
//!     &contact,
//! ))?;
//! logger.log(&AuditEntry::login("alice", true))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
