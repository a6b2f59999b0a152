//! phonebook - password-protected terminal phonebook
//!
//! This library provides the core functionality for a single-user phonebook:
//! a login gate backed by an Argon2 password hash, contacts whose country is
//! derived from the phone number, and flat CSV persistence. It also carries a
//! small basic COCOMO estimator used by the `cocomo` binary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Contacts, categories, country resolution and credentials
//! - `storage`: CSV file storage layer
//! - `services`: Authentication and phonebook logic
//! - `audit`: Audit logging system
//! - `crypto`: Password hashing and zeroizing strings
//! - `display`: Terminal formatting
//! - `cli`: Interactive login gate and menu
//! - `estimate`: Basic COCOMO model
//!
//! # Example
//!
//! ```rust,ignore
//! use phonebook::config::{PhonebookPaths, Settings};
//! use phonebook::services::Phonebook;
//! use phonebook::storage::Storage;
//!
//! let paths = PhonebookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let book = Phonebook::load(&storage)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod estimate;
pub mod models;
pub mod services;
pub mod storage;

pub use error::PhonebookError;
