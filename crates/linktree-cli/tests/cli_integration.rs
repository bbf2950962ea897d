//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.

use assert_cmd::Command;
use linktree_core::{KeyValueStore, Storage, THEME_KEY};
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linktree").expect("Failed to find linktree binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

// ============================================================================
// Links Command Tests
// ============================================================================

#[test]
fn test_links_lists_in_authored_order() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir).arg("links").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("Links (7):"));
    let portfolio = stdout.find("1. Portfolio 🚀").unwrap();
    let github = stdout.find("2. GitHub").unwrap();
    let blog = stdout.find("7. Blog 📝").unwrap();
    assert!(portfolio < github && github < blog);
}

#[test]
fn test_links_marks_coming_soon() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir).arg("links").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("(Soon™)").count(), 2);
    assert!(stdout.contains("https://github.com/root-Akira"));
}

#[test]
fn test_links_json() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir).args(["links", "--json"]).output().unwrap();
    assert!(output.status.success());

    let cards: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cards = cards.as_array().unwrap();
    assert_eq!(cards.len(), 7);
    assert_eq!(cards[1]["action"]["kind"], "external");
    assert_eq!(cards[1]["action"]["rel"], "noopener noreferrer");
    assert_eq!(cards[6]["action"]["kind"], "disabled");
}

// ============================================================================
// Theme Command Tests
// ============================================================================

#[test]
fn test_theme_defaults_to_light() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn test_theme_set_persists() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set: dark"));

    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn test_theme_toggle_twice_restores() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir).args(["theme", "toggle"]).assert().success();
    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .stdout(predicate::str::contains("Theme: dark"));

    cli_cmd(&data_dir).args(["theme", "toggle"]).assert().success();
    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn test_theme_set_rejects_unknown() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme: sepia"));
}

#[test]
fn test_theme_show_with_data_dir_under_a_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("plain-file");
    std::fs::write(&file, b"not a directory").unwrap();

    Command::cargo_bin("linktree")
        .unwrap()
        .arg("--data-dir")
        .arg(file.join("sub"))
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"))
        .stderr(predicate::str::contains("using memory"));
}

#[test]
fn test_theme_commands_while_database_is_held_open() {
    let data_dir = TempDir::new().unwrap();
    let held = Storage::open_in(data_dir.path()).unwrap();
    held.set(THEME_KEY, "true").unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    // Session-only: the held database keeps its value.
    cli_cmd(&data_dir)
        .args(["theme", "set", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set: light"));
    assert_eq!(held.get(THEME_KEY).unwrap().as_deref(), Some("true"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_data_dir_matches_desktop_app() {
    let home = TempDir::new().unwrap();
    let xdg = home.path().join("share");

    Command::cargo_bin("linktree")
        .unwrap()
        .env("HOME", home.path())
        .env("XDG_DATA_HOME", &xdg)
        .args(["theme", "set", "dark"])
        .assert()
        .success();

    assert!(xdg.join("linktree").join("preferences.redb").exists());
}

// ============================================================================
// Head Command Tests
// ============================================================================

#[test]
fn test_head_prints_title_and_preview_tags() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("head")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<title>AK1RA | Sunny Singh - Web3 Enthusiast &amp; Blockchain Event Manager</title>",
        ))
        .stdout(predicate::str::contains(
            r#"<meta name="twitter:card" content="summary_large_image">"#,
        ))
        .stdout(predicate::str::contains(
            r#"<link rel="icon" href="/icon.png" sizes="32x32" type="image/png">"#,
        ))
        .stdout(predicate::str::contains("google-site-verification").not());
}
