//! Authentication service
//!
//! Single-user registration and login against credentials.csv. The result
//! of a successful gate is an explicit [`Session`] value.

use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::crypto::PasswordHashParams;
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::Credential;
use crate::storage::Storage;

/// Whether an account has been registered yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    NoAccount,
    Registered,
}

/// Outcome of the login gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Unauthenticated,
    Authenticated { username: String },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Username of the logged-in user
    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated { username } => Some(username),
            Session::Unauthenticated => None,
        }
    }
}

/// Service for account registration and login
pub struct Authenticator<'a> {
    storage: &'a Storage,
    params: PasswordHashParams,
    credential: Option<Credential>,
}

impl<'a> Authenticator<'a> {
    /// Create a new authenticator; the credential is loaded on first use
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self {
            storage,
            params: settings.password_hashing,
            credential: None,
        }
    }

    /// Whether an account exists
    pub fn state(&mut self) -> PhonebookResult<AuthState> {
        Ok(match self.credential()? {
            Some(_) => AuthState::Registered,
            None => AuthState::NoAccount,
        })
    }

    /// Register the single account and start an authenticated session
    pub fn register(&mut self, username: &str, password: &str) -> PhonebookResult<Session> {
        if let Some(existing) = self.credential()? {
            return Err(PhonebookError::Duplicate {
                entity_type: "Account",
                identifier: existing.username().to_string(),
            });
        }

        let username = username.trim();
        let credential = Credential::register(username, password, &self.params)?;
        self.storage.credentials.save(&credential)?;
        self.storage.log(&AuditEntry::registered(username));

        self.credential = Some(credential);

        Ok(Session::Authenticated {
            username: username.to_string(),
        })
    }

    /// Check a password against the stored credential
    ///
    /// A wrong password (or no account at all) gives
    /// `Session::Unauthenticated`. The stored hash is never rewritten.
    pub fn login(&mut self, password: &str) -> PhonebookResult<Session> {
        let Some(credential) = self.credential()? else {
            return Ok(Session::Unauthenticated);
        };

        let username = credential.username().to_string();
        let verified = credential.verify_password(password)?;

        self.storage.log(&AuditEntry::login(&username, verified));

        Ok(if verified {
            Session::Authenticated { username }
        } else {
            Session::Unauthenticated
        })
    }

    /// The registered username, if any
    pub fn username(&mut self) -> PhonebookResult<Option<String>> {
        Ok(self.credential()?.map(|c| c.username().to_string()))
    }

    fn credential(&mut self) -> PhonebookResult<Option<&Credential>> {
        if self.credential.is_none() {
            self.credential = self.storage.credentials.load()?;
        }
        Ok(self.credential.as_ref())
    }
}
