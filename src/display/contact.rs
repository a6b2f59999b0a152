//! Contact display formatting
//!
//! Formats contacts for terminal output: the sorted table for View All,
//! one-line summaries for search results, and numbered pick lists.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Contact;

#[derive(Tabled)]
struct ContactRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Phone")]
    phone: &'a str,
    #[tabled(rename = "Country")]
    country: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
}

impl<'a> From<&'a Contact> for ContactRow<'a> {
    fn from(contact: &'a Contact) -> Self {
        Self {
            name: contact.name(),
            phone: contact.phone(),
            country: contact.country(),
            email: contact.email(),
            category: contact.category().as_str(),
        }
    }
}

/// Format contacts as a table, in the order given
pub fn format_contact_table(contacts: &[&Contact]) -> String {
    if contacts.is_empty() {
        return "Phonebook is empty.".to_string();
    }

    let rows = contacts.iter().map(|c| ContactRow::from(*c));
    Table::new(rows).with(Style::psql()).to_string()
}

/// ` - name (phone) [category]`
pub fn format_contact_line(contact: &Contact) -> String {
    format!(
        " - {} ({}) [{}]",
        contact.name(),
        contact.phone(),
        contact.category()
    )
}

/// Format search results with a count header
pub fn format_search_results(matches: &[&Contact]) -> String {
    if matches.is_empty() {
        return "No contacts found.".to_string();
    }

    let mut output = format!("Found {} result(s)", matches.len());
    for contact in matches {
        output.push('\n');
        output.push_str(&format_contact_line(contact));
    }
    output
}

/// Numbered list used when several contacts match a query
pub fn format_choice_list(matches: &[&Contact]) -> String {
    matches
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {} ({}) [{}]", i + 1, c.name(), c.phone(), c.category()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `name | phone | country`, shown before a deletion is confirmed
pub fn format_contact_summary(contact: &Contact) -> String {
    format!(
        "{} | {} | {}",
        contact.name(),
        contact.phone(),
        contact.country()
    )
}
