//! Credential model
//!
//! The single login record: a username and a one-way password hash. The
//! plaintext password is never stored.

use std::fmt;

use crate::crypto::password::{hash_password, verify_password, PasswordHashParams};
use crate::error::{PhonebookError, PhonebookResult};

/// A registered user
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password_hash: String,
}

impl Credential {
    /// Register a new credential, hashing the plaintext password
    pub fn register(
        username: impl Into<String>,
        password: &str,
        params: &PasswordHashParams,
    ) -> PhonebookResult<Self> {
        let username = username.into();

        if username.trim().is_empty() {
            return Err(PhonebookError::Validation("Username cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(PhonebookError::Validation("Password cannot be empty".into()));
        }

        Ok(Self {
            password_hash: hash_password(password, params)?,
            username,
        })
    }

    /// Rebuild a credential from stored fields
    pub fn from_stored(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Check a plaintext password against the stored hash
    pub fn verify_password(&self, password: &str) -> PhonebookResult<bool> {
        verify_password(password, &self.password_hash)
    }
}

// Keep the hash out of debug output
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
