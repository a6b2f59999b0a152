//! Interactive session
//!
//! Login gate followed by the main menu.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::PhonebookResult;
use crate::services::{Authenticator, Phonebook, Session};
use crate::storage::Storage;

use super::console::Console;
use super::login::login_gate;
use super::menu::run_menu;

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user logged in and left the menu
    Completed,
    /// Authentication failed; the menu was never shown
    LoginFailed,
}

/// Run the login gate and, once authenticated, the main menu
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    settings: &Settings,
) -> PhonebookResult<SessionOutcome> {
    let mut auth = Authenticator::new(storage, settings);

    let username = match login_gate(console, &mut auth)? {
        Session::Authenticated { username } => username,
        Session::Unauthenticated => {
            console.say("Login failed. Exiting.")?;
            return Ok(SessionOutcome::LoginFailed);
        }
    };

    let mut book = Phonebook::load(storage)?;
    console.say(format!("Welcome, {}!", username))?;

    run_menu(console, &mut book)?;
    Ok(SessionOutcome::Completed)
}
