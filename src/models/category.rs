//! Contact categories
//!
//! Every contact belongs to exactly one of five fixed categories. Anything
//! unrecognized falls back to [`ContactCategory::General`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContactCategory {
    #[default]
    General,
    Family,
    Friends,
    Emergency,
    Favourites,
}

impl ContactCategory {
    /// All categories in menu order
    pub fn all() -> &'static [ContactCategory] {
        &[
            ContactCategory::General,
            ContactCategory::Family,
            ContactCategory::Friends,
            ContactCategory::Emergency,
            ContactCategory::Favourites,
        ]
    }

    /// Canonical name as stored in the contacts file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Family => "Family",
            Self::Friends => "Friends",
            Self::Emergency => "Emergency",
            Self::Favourites => "Favourites",
        }
    }

    /// Match user input against the category names (trimmed, case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(input))
    }

    /// Normalize a raw value, coercing anything unrecognized to `General`
    ///
    /// Only exact canonical names are recognized; use [`ContactCategory::parse`]
    /// for lenient user input.
    pub fn normalize(value: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == value)
            .unwrap_or_default()
    }

    /// Menu hint listing all options, e.g. `General | Family | ...`
    pub fn options_hint() -> String {
        Self::all()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("'{}' is not a valid category", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_general() {
        assert_eq!(ContactCategory::default(), ContactCategory::General);
    }

    #[test]
    fn test_recognized_values_pass_through() {
        for category in ContactCategory::all() {
            assert_eq!(ContactCategory::normalize(category.as_str()), *category);
        }
    }

    #[test]
    fn test_unrecognized_values_become_general() {
        assert_eq!(ContactCategory::normalize("Work"), ContactCategory::General);
        assert_eq!(ContactCategory::normalize(""), ContactCategory::General);
        assert_eq!(ContactCategory::normalize("family"), ContactCategory::General);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ContactCategory::parse("family"), Some(ContactCategory::Family));
        assert_eq!(ContactCategory::parse("  FRIENDS "), Some(ContactCategory::Friends));
        assert_eq!(ContactCategory::parse("Work"), None);
        assert_eq!(ContactCategory::parse(""), None);
    }

    #[test]
    fn test_from_str() {
        let category: ContactCategory = "emergency".parse().unwrap();
        assert_eq!(category, ContactCategory::Emergency);
        assert!("colleagues".parse::<ContactCategory>().is_err());
    }

    #[test]
    fn test_options_hint() {
        assert_eq!(
            ContactCategory::options_hint(),
            "General | Family | Friends | Emergency | Favourites"
        );
    }
}
