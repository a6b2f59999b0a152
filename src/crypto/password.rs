//! Password hashing using Argon2id
//!
//! Passwords are turned into PHC-format strings
//! (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`) with a fresh random salt.
//! The string carries its own parameters, so verification does not depend on
//! the current settings.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use crate::error::{PhonebookError, PhonebookResult};

/// Cost parameters for password hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHashParams {
    /// Memory cost in KiB (default: 19456 = 19 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 2)
    pub time_cost: u32,
    /// Parallelism degree (default: 1)
    pub parallelism: u32,
}

impl Default for PasswordHashParams {
    fn default() -> Self {
        Self {
            memory_cost: Params::DEFAULT_M_COST,
            time_cost: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordHashParams {
    /// Create params with specific values
    pub fn with_values(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    fn hasher(&self) -> PhonebookResult<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| PhonebookError::Auth(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash a plaintext password into a PHC string
pub fn hash_password(password: &str, params: &PasswordHashParams) -> PhonebookResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = params
        .hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PhonebookError::Auth(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC string
///
/// Returns `Ok(false)` on a mismatch. A stored value that is not a valid PHC
/// string is an error, not a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> PhonebookResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| PhonebookError::Auth(format!("Invalid stored password hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(e) => Err(PhonebookError::Auth(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

#[cfg(test)]
pub(crate) fn test_params() -> PasswordHashParams {
    PasswordHashParams::with_values(8, 1, 1)
}
