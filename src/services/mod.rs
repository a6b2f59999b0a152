//! Service layer for the phonebook
//!
//! The service layer provides business logic on top of the storage layer:
//! the login gate and contact management, each change persisted and audited.

pub mod auth;
pub mod phonebook;

pub use auth::{AuthState, Authenticator, Session};
pub use phonebook::{ContactUpdate, Phonebook};
