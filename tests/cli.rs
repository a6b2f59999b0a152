//! End-to-end tests driving the compiled binaries

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Data directory with cheap Argon2 settings so registration is fast
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"password_hashing": {"memory_cost": 8, "time_cost": 1, "parallelism": 1}}"#,
    )
    .unwrap();
    dir
}

fn phonebook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env("PHONEBOOK_DATA_DIR", dir);
    cmd
}

#[test]
fn register_add_search_and_exit() {
    let dir = data_dir();

    phonebook(dir.path())
        .write_stdin("alice\nsecret1\nsecret1\n1\nBob\n+44123\nb@x.com\n\n2\nbob\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No account found. Starting setup..."))
        .stdout(predicate::str::contains("Welcome, alice!"))
        .stdout(predicate::str::contains("Contact saved!"))
        .stdout(predicate::str::contains(" - Bob (+44123) [General]"))
        .stdout(predicate::str::contains("Goodbye!"));

    let contacts = fs::read_to_string(dir.path().join("data").join("contacts.csv")).unwrap();
    assert_eq!(
        contacts,
        "name,phone,country,email,category\nBob,+44123,UK,b@x.com,General\n"
    );

    let credentials =
        fs::read_to_string(dir.path().join("data").join("credentials.csv")).unwrap();
    assert!(credentials.starts_with("username,password_hash\n"));
    assert!(!credentials.contains("secret1"));
}

#[test]
fn contacts_survive_restart() {
    let dir = data_dir();

    phonebook(dir.path())
        .write_stdin("alice\nsecret1\nsecret1\n1\nBob\n+1242555\nb@x.com\nfriends\n6\n")
        .assert()
        .success();

    phonebook(dir.path())
        .write_stdin("secret1\n3\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login Required"))
        .stdout(predicate::str::contains("Bahamas"))
        .stdout(predicate::str::contains("Friends"));
}

#[test]
fn wrong_password_exits_with_failure() {
    let dir = data_dir();

    phonebook(dir.path())
        .write_stdin("alice\nsecret1\nsecret1\n6\n")
        .assert()
        .success();

    phonebook(dir.path())
        .arg("run")
        .write_stdin("not-it\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Login failed. Exiting."))
        .stdout(predicate::str::contains("MENU").not());
}

#[test]
fn malformed_contacts_file_is_fatal() {
    let dir = data_dir();
    phonebook(dir.path())
        .write_stdin("alice\nsecret1\nsecret1\n6\n")
        .assert()
        .success();

    fs::write(
        dir.path().join("data").join("contacts.csv"),
        "name,phone\nBob,+44123\n",
    )
    .unwrap();

    phonebook(dir.path())
        .write_stdin("secret1\n6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("country"));
}

#[test]
fn config_reports_paths_and_account() {
    let dir = data_dir();

    phonebook(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts.csv"))
        .stdout(predicate::str::contains("m=8, t=1, p=1"))
        .stdout(predicate::str::contains("Audit entries: 0"))
        .stdout(predicate::str::contains("Account: not registered"));

    phonebook(dir.path())
        .write_stdin("alice\nsecret1\nsecret1\n6\n")
        .assert()
        .success();

    phonebook(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit entries: 1"))
        .stdout(predicate::str::contains("Account: alice"));
}

#[test]
fn cocomo_default_estimate() {
    Command::cargo_bin("cocomo")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected Mode: Organic"))
        .stdout(predicate::str::contains("Effort: 24.11 Person-Months"))
        .stdout(predicate::str::contains("Formula: 2.4 * (9^1.05)"))
        .stdout(predicate::str::contains("Development Time: 8.38 Months"))
        .stdout(predicate::str::contains("Average Staffing: 2.9 Person(s)"));
}

#[test]
fn cocomo_larger_project_and_invalid_size() {
    Command::cargo_bin("cocomo")
        .unwrap()
        .args(["--kloc", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected Mode: Semi-Detached"));

    Command::cargo_bin("cocomo")
        .unwrap()
        .args(["--kloc", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KLoC must be a positive number"));
}

#[test]
fn blank_name_row_loads_with_the_rest() {
    let dir = data_dir();
    phonebook(dir.path())
        .write_stdin("alice\nsecret1\nsecret1\n6\n")
        .assert()
        .success();

    fs::write(
        dir.path().join("data").join("contacts.csv"),
        "name,phone,country,email,category\n,+44123,UK,b@x.com,General\nAmy,+33123,France,a@x.com,Family\n",
    )
    .unwrap();

    phonebook(dir.path())
        .write_stdin("secret1\n2\namy\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(" - Amy (+33123) [Family]"));
}
