//! Interactive main menu
//!
//! Dispatches the numbered menu choices to the phonebook service. Every
//! change is saved before the menu is shown again.

use std::io::{BufRead, Write};

use crate::display::{
    format_choice_list, format_contact_summary, format_contact_table, format_search_results,
};
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{Contact, ContactCategory, ContactId, CreateContactInput};
use crate::services::{ContactUpdate, Phonebook};

use super::console::Console;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    ViewAll,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Search),
            "3" => Some(Self::ViewAll),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n--- MENU ---\n\
                    1. Add Contact\n\
                    2. Search Contact\n\
                    3. View All\n\
                    4. Update a contact\n\
                    5. Delete a contact\n\
                    6. Exit";

/// Run the menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut Phonebook<'_>,
) -> PhonebookResult<()> {
    loop {
        console.say(MENU)?;

        let Some(input) = console.prompt("Select an option: ")? else {
            break;
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Add) => add_contact(console, book)?,
            Some(MenuChoice::Search) => search_contacts(console, book)?,
            Some(MenuChoice::ViewAll) => list_contacts(console, book)?,
            Some(MenuChoice::Update) => update_contact(console, book)?,
            Some(MenuChoice::Delete) => delete_contact(console, book)?,
            Some(MenuChoice::Exit) => break,
            None => console.say("Invalid option, try again.")?,
        }
    }

    console.say("Goodbye!")
}

fn add_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut Phonebook<'_>,
) -> PhonebookResult<()> {
    console.say("\n--- Add Contact ---")?;

    let name = loop {
        let Some(name) = console.prompt("Enter name: ")? else {
            return Ok(());
        };
        if !name.trim().is_empty() {
            break name;
        }
        console.say("Name cannot be empty.")?;
    };
    let Some(phone) = console.prompt("Enter phone number: ")? else {
        return Ok(());
    };
    let Some(email) = console.prompt("Enter email: ")? else {
        return Ok(());
    };
    let Some(category) = prompt_category(console)? else {
        return Ok(());
    };

    let input = CreateContactInput::new(name, phone, email).with_category(category.as_str());
    let contact =
        Contact::create(input).map_err(|e| PhonebookError::Validation(e.to_string()))?;
    book.add(contact)?;

    console.say("Contact saved!")
}

/// Ask for a category until the input is blank (General) or recognized
fn prompt_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> PhonebookResult<Option<ContactCategory>> {
    loop {
        console.say(format!("Options: {}", ContactCategory::options_hint()))?;
        let Some(input) = console.prompt("Category (Press Enter for 'General'): ")? else {
            return Ok(None);
        };

        let input = input.trim();
        if input.is_empty() {
            return Ok(Some(ContactCategory::General));
        }

        match ContactCategory::parse(input) {
            Some(category) => return Ok(Some(category)),
            None => console.say(format!(
                "'{}' is not valid. Please choose from the list.",
                input
            ))?,
        }
    }
}

fn search_contacts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &Phonebook<'_>,
) -> PhonebookResult<()> {
    let Some(query) = console.prompt("Enter name to search: ")? else {
        return Ok(());
    };

    let matches = book.search(query.trim());
    console.say(format!("\n{}", format_search_results(&matches)))
}

fn list_contacts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &Phonebook<'_>,
) -> PhonebookResult<()> {
    console.say("\n--- All Contacts ---")?;
    console.say(format_contact_table(&book.sorted_by_name()))
}

fn update_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut Phonebook<'_>,
) -> PhonebookResult<()> {
    console.say("\n--- Update Contact ---")?;

    let Some(id) = find_contact(console, book, "Enter name to search: ")? else {
        return Ok(());
    };
    if let Some(target) = book.get(id) {
        console.say(format!("Editing: {} | {}", target.name(), target.phone()))?;
    }

    console.say("1. Name\n2. Phone\n3. Email\n4. Category")?;
    let Some(choice) = console.prompt("Select: ")? else {
        return Ok(());
    };

    let change = match choice.trim() {
        "1" => console.prompt("Enter new name: ")?.map(ContactUpdate::Name),
        "2" => console.prompt("Enter new phone: ")?.map(ContactUpdate::Phone),
        "3" => console.prompt("Enter new email: ")?.map(ContactUpdate::Email),
        "4" => prompt_category(console)?.map(ContactUpdate::Category),
        _ => {
            console.say("Invalid option, nothing changed.")?;
            return Ok(());
        }
    };
    let Some(change) = change else {
        return Ok(());
    };
    let phone_changed = matches!(change, ContactUpdate::Phone(_));

    match book.update(id, change) {
        Ok(updated) => {
            if phone_changed {
                let country = updated.country().to_string();
                console.say(format!("Country updated to: {}", country))?;
            }
            console.say("Contact updated!")
        }
        Err(e) if e.is_validation() => console.say(e.to_string()),
        Err(e) => Err(e),
    }
}

fn delete_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut Phonebook<'_>,
) -> PhonebookResult<()> {
    console.say("\n--- Delete Contact ---")?;

    let Some(id) = find_contact(console, book, "Enter name to delete: ")? else {
        return Ok(());
    };
    if let Some(target) = book.get(id) {
        console.say(format!("Found: {}", format_contact_summary(target)))?;
    }

    let confirm = console
        .prompt("Are you sure you want to delete this contact? (y/n)?: ")?
        .unwrap_or_default();

    if confirm.trim().eq_ignore_ascii_case("y") {
        book.delete(id)?;
        console.say("Contact deleted permanently")
    } else {
        console.say("Deletion Cancelled")
    }
}

/// Search by name and settle on a single contact
///
/// With several matches the user picks one by number.
fn find_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &Phonebook<'_>,
    prompt: &str,
) -> PhonebookResult<Option<ContactId>> {
    let Some(query) = console.prompt(prompt)? else {
        return Ok(None);
    };

    let matches = book.search(query.trim());
    match matches.as_slice() {
        [] => {
            console.say("No contact found.")?;
            Ok(None)
        }
        [only] => Ok(Some(only.id())),
        _ => {
            console.say(format!("\n{}", format_choice_list(&matches)))?;
            let Some(pick) = console.prompt("Select a contact (number): ")? else {
                return Ok(None);
            };

            match pick.trim().parse::<usize>() {
                Ok(n) if (1..=matches.len()).contains(&n) => Ok(Some(matches[n - 1].id())),
                _ => {
                    console.say("Invalid selection.")?;
                    Ok(None)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PhonebookPaths, Settings};
    use crate::storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn run(storage: &Storage, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut book = Phonebook::load(storage).unwrap();
        run_menu(&mut console, &mut book).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_exit_and_invalid_option() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "9\n6\n");

        assert!(out.contains("Invalid option, try again."));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "1\nBob\n");

        assert!(out.ends_with("Goodbye!\n"));
        assert!(Phonebook::load(&storage).unwrap().is_empty());
    }

    #[test]
    fn test_add_with_category_loop() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(
            &storage,
            "1\nBob\n+44123\nb@x.com\ncolleague\n  family \n6\n",
        );

        assert!(out.contains("Options: General | Family | Friends | Emergency | Favourites"));
        assert!(out.contains("'colleague' is not valid. Please choose from the list."));
        assert!(out.contains("Contact saved!"));

        let book = Phonebook::load(&storage).unwrap();
        let bob = &book.contacts()[0];
        assert_eq!(bob.country(), "UK");
        assert_eq!(bob.category(), ContactCategory::Family);
    }

    #[test]
    fn test_add_blank_category_is_general() {
        let (_temp_dir, storage) = create_test_storage();
        run(&storage, "1\nBob\n+44123\nb@x.com\n\n6\n");

        let book = Phonebook::load(&storage).unwrap();
        assert_eq!(book.contacts()[0].category(), ContactCategory::General);
    }

    #[test]
    fn test_search_output() {
        let (_temp_dir, storage) = create_test_storage();
        run(&storage, "1\nBob\n+44123\nb@x.com\n\n6\n");

        let out = run(&storage, "2\nbo\n2\nzed\n6\n");
        assert!(out.contains("Found 1 result(s)\n - Bob (+44123) [General]"));
        assert!(out.contains("No contacts found."));
    }

    #[test]
    fn test_view_all_sorted() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "3\n6\n");
        assert!(out.contains("Phonebook is empty."));

        run(
            &storage,
            "1\nZed\n+49123\nz@x.com\n\n1\nAmy\n+33123\na@x.com\n\n6\n",
        );
        let out = run(&storage, "3\n6\n");
        let amy = out.find("Amy").unwrap();
        let zed = out.find("Zed").unwrap();
        assert!(amy < zed);
        assert!(out.contains("Germany"));
    }

    #[test]
    fn test_update_phone_reports_country() {
        let (_temp_dir, storage) = create_test_storage();
        run(&storage, "1\nBob\n+44123\nb@x.com\n\n6\n");

        let out = run(&storage, "4\nBob\n2\n+1242555\n6\n");
        assert!(out.contains("Editing: Bob | +44123"));
        assert!(out.contains("Country updated to: Bahamas"));
        assert!(out.contains("Contact updated!"));

        let book = Phonebook::load(&storage).unwrap();
        assert_eq!(book.contacts()[0].country(), "Bahamas");
    }

    #[test]
    fn test_update_picks_among_matches() {
        let (_temp_dir, storage) = create_test_storage();
        run(
            &storage,
            "1\nBob\n+44123\nb@x.com\n\n1\nBobby\n+33123\nby@x.com\n\n6\n",
        );

        let out = run(&storage, "4\nbob\n2\n4\nemergency\n6\n");
        assert!(out.contains("1. Bob (+44123) [General]\n2. Bobby (+33123) [General]"));

        let book = Phonebook::load(&storage).unwrap();
        assert_eq!(book.contacts()[0].category(), ContactCategory::General);
        assert_eq!(book.contacts()[1].category(), ContactCategory::Emergency);
    }

    #[test]
    fn test_update_rejects_empty_name() {
        let (_temp_dir, storage) = create_test_storage();
        run(&storage, "1\nBob\n+44123\nb@x.com\n\n6\n");

        let out = run(&storage, "4\nBob\n1\n\n6\n");
        assert!(out.contains("Contact name cannot be empty"));
        assert_eq!(Phonebook::load(&storage).unwrap().contacts()[0].name(), "Bob");
    }

    #[test]
    fn test_delete_confirm_and_cancel() {
        let (_temp_dir, storage) = create_test_storage();
        run(&storage, "1\nBob\n+44123\nb@x.com\n\n6\n");

        let out = run(&storage, "5\nBob\nn\n6\n");
        assert!(out.contains("Found: Bob | +44123 | UK"));
        assert!(out.contains("Deletion Cancelled"));
        assert_eq!(Phonebook::load(&storage).unwrap().len(), 1);

        let out = run(&storage, "5\nBob\nY\n6\n");
        assert!(out.contains("Contact deleted permanently"));
        assert!(Phonebook::load(&storage).unwrap().is_empty());
    }

    #[test]
    fn test_delete_no_match() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "5\nNobody\n6\n");
        assert!(out.contains("No contact found."));
    }
}
