//! Login gate
//!
//! Registers the single account on first run, otherwise asks for the
//! password once. There is no retry.

use std::io::{BufRead, Write};

use crate::crypto::SecureString;
use crate::error::PhonebookResult;
use crate::services::{AuthState, Authenticator, Session};

use super::console::Console;

/// Run the gate, returning the resulting session
pub fn login_gate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    auth: &mut Authenticator<'_>,
) -> PhonebookResult<Session> {
    match auth.state()? {
        AuthState::Registered => {
            console.say("Login Required")?;
            match console.read_secret("Please enter your password: ")? {
                Some(password) => auth.login(&password),
                None => Ok(Session::Unauthenticated),
            }
        }
        AuthState::NoAccount => {
            console.say("No account found. Starting setup...")?;
            register(console, auth)
        }
    }
}

fn register<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    auth: &mut Authenticator<'_>,
) -> PhonebookResult<Session> {
    let username = loop {
        let Some(input) = console.prompt("Please enter new username: ")? else {
            return Ok(Session::Unauthenticated);
        };
        let input = input.trim();
        if input.is_empty() {
            console.say("Username cannot be empty.")?;
            continue;
        }
        break input.to_string();
    };

    let Some(password) = prompt_new_password(console)? else {
        return Ok(Session::Unauthenticated);
    };

    let session = auth.register(&username, &password)?;
    console.say("Account created.")?;
    Ok(session)
}

/// Ask for a new password twice until both entries match
fn prompt_new_password<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> PhonebookResult<Option<SecureString>> {
    loop {
        let Some(first) = console.read_secret("Please enter new password: ")? else {
            return Ok(None);
        };

        if first.is_empty() {
            console.say("Password cannot be empty.")?;
            continue;
        }

        let Some(second) = console.read_secret("Confirm password: ")? else {
            return Ok(None);
        };

        if first != second {
            console.say("Passwords do not match. Please try again.")?;
            continue;
        }

        return Ok(Some(first));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PhonebookPaths, Settings};
    use crate::crypto::password::test_params;
    use crate::storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn test_settings() -> Settings {
        Settings {
            password_hashing: test_params(),
            ..Settings::default()
        }
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &test_settings()).unwrap();
        (temp_dir, storage)
    }

    fn run_gate(storage: &Storage, input: &str) -> (Session, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut auth = Authenticator::new(storage, &test_settings());
        let session = login_gate(&mut console, &mut auth).unwrap();
        (session, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_first_run_registers() {
        let (_temp_dir, storage) = create_test_storage();
        let (session, out) = run_gate(&storage, "alice\nsecret1\nsecret1\n");

        assert_eq!(session.username(), Some("alice"));
        assert!(out.contains("No account found. Starting setup..."));
        assert!(storage.credentials.path().exists());
    }

    #[test]
    fn test_registration_reprompts() {
        let (_temp_dir, storage) = create_test_storage();
        let (session, out) = run_gate(&storage, "\nalice\n\nsecret1\nsecretX\nsecret1\nsecret1\n");

        assert!(session.is_authenticated());
        assert!(out.contains("Username cannot be empty."));
        assert!(out.contains("Password cannot be empty."));
        assert!(out.contains("Passwords do not match. Please try again."));
    }

    #[test]
    fn test_registration_abandoned_at_eof() {
        let (_temp_dir, storage) = create_test_storage();
        let (session, _) = run_gate(&storage, "alice\n");

        assert_eq!(session, Session::Unauthenticated);
        assert!(!storage.credentials.path().exists());
    }

    #[test]
    fn test_login_after_registration() {
        let (_temp_dir, storage) = create_test_storage();
        run_gate(&storage, "alice\nsecret1\nsecret1\n");

        let (session, out) = run_gate(&storage, "secret1\n");
        assert!(out.starts_with("Login Required"));
        assert!(session.is_authenticated());

        let (session, _) = run_gate(&storage, "nope\n");
        assert_eq!(session, Session::Unauthenticated);
    }
}
