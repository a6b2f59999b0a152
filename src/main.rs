use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use phonebook::audit::AuditLogger;
use phonebook::cli::{run_session, Console, SessionOutcome};
use phonebook::config::{PhonebookPaths, Settings};
use phonebook::storage::{CredentialRepository, Storage};

#[derive(Parser)]
#[command(
    name = "phonebook",
    version,
    about = "Password-protected terminal phonebook",
    long_about = "A single-user phonebook for the terminal. Contacts are kept in a \
                  CSV file, each tagged with a category and the country derived \
                  from its phone number."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and open the interactive menu (the default)
    #[command(alias = "menu")]
    Run,

    /// Show configuration paths and settings
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = PhonebookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Run) => {
            let storage = Storage::new(paths, &settings)?;
            let mut console = Console::stdio();

            match run_session(&mut console, &storage, &settings)? {
                SessionOutcome::Completed => Ok(ExitCode::SUCCESS),
                SessionOutcome::LoginFailed => Ok(ExitCode::FAILURE),
            }
        }
        Some(Commands::Config) => {
            let credential = CredentialRepository::new(paths.credentials_file()).load()?;
            let audit_entries = AuditLogger::new(paths.audit_log()).entry_count()?;

            println!("Phonebook Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Contacts file:    {}", paths.contacts_file().display());
            println!("Credentials file: {}", paths.credentials_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit logging: {}", settings.audit_enabled);
            println!("  Audit entries: {}", audit_entries);
            println!(
                "  Password hashing: argon2id (m={}, t={}, p={})",
                settings.password_hashing.memory_cost,
                settings.password_hashing.time_cost,
                settings.password_hashing.parallelism
            );
            println!();
            match credential {
                Some(c) => println!("Account: {}", c.username()),
                None => println!("Account: not registered"),
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}
