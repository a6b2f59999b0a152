//! Contact model
//!
//! A contact is one phonebook record. Its country is derived from the phone
//! number and recomputed whenever the number changes, so the two never
//! disagree.

use serde::Serialize;
use std::fmt;

use super::category::ContactCategory;
use super::country::{resolve_country, UNKNOWN_COUNTRY};
use super::ids::ContactId;

/// Input for creating a new contact
#[derive(Debug, Clone, Default)]
pub struct CreateContactInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Known country, or `None`/`"Unknown"` to derive it from the phone number
    pub country: Option<String>,
    /// Raw category value; anything unrecognized becomes `General`
    pub category: Option<String>,
}

impl CreateContactInput {
    /// Input with the three required fields
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            country: None,
            category: None,
        }
    }

    /// Set the raw category value
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set an already known country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// A single phonebook record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    phone: String,
    email: String,
    country: String,
    category: ContactCategory,
}

impl Contact {
    /// Build a fully normalized contact
    ///
    /// The country is resolved from the phone number unless the input carries
    /// a known one, and an unrecognized category becomes `General`.
    pub fn create(input: CreateContactInput) -> Result<Self, ContactValidationError> {
        validate_name(&input.name)?;
        Ok(Self::from_stored(input))
    }

    /// Rebuild a contact read back from storage
    ///
    /// Normalizes country and category like [`Contact::create`] but accepts
    /// any name, blank included, so existing rows always load.
    pub fn from_stored(input: CreateContactInput) -> Self {
        let CreateContactInput {
            name,
            phone,
            email,
            country,
            category,
        } = input;

        let country = match country {
            Some(c) if !c.trim().is_empty() && c != UNKNOWN_COUNTRY => c,
            _ => resolve_country(&phone).to_string(),
        };

        let category = category
            .as_deref()
            .map(ContactCategory::normalize)
            .unwrap_or_default();

        Self {
            id: ContactId::new(),
            name,
            phone,
            email,
            country,
            category,
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Country derived from the phone number (or loaded with the record)
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn category(&self) -> ContactCategory {
        self.category
    }

    /// Rename the contact
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ContactValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_category(&mut self, category: ContactCategory) {
        self.category = category;
    }

    /// Replace the phone number and recompute the country from it
    pub fn update_phone(&mut self, new_phone: impl Into<String>) {
        self.phone = new_phone.into();
        self.country = resolve_country(&self.phone).to_string();
    }

    /// Case-insensitive substring match on the name
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Compare the persisted fields, ignoring the session id
    pub fn same_record(&self, other: &Contact) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.country == other.country
            && self.category == other.category
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)
    }
}

fn validate_name(name: &str) -> Result<(), ContactValidationError> {
    if name.trim().is_empty() {
        return Err(ContactValidationError::EmptyName);
    }
    Ok(())
}

/// Validation errors for contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
        }
    }
}

impl std::error::Error for ContactValidationError {}
