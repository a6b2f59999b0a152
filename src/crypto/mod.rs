//! Cryptographic functions for the phonebook
//!
//! Provides one-way Argon2id password hashing for the login gate and a
//! zeroizing string for plaintext passwords held in memory.

pub mod password;
pub mod secure_memory;

pub use password::{hash_password, verify_password, PasswordHashParams};
pub use secure_memory::SecureString;
