//! Core data models for the phonebook
//!
//! Contacts with their derived country and category, the calling-code table
//! used to derive countries, and the single login credential.

pub mod category;
pub mod contact;
pub mod country;
pub mod credential;
pub mod ids;

pub use category::ContactCategory;
pub use contact::{Contact, ContactValidationError, CreateContactInput};
pub use country::{resolve_country, CountryResolver, COUNTRY_CODES, UNKNOWN_COUNTRY};
pub use credential::Credential;
pub use ids::ContactId;
