//! Runs the built binary with one-shot subcommands.

mod common;

use common::temp_file;
use std::process::{Command, Output};

fn herbal_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_herbal-catalog"));
    cmd.env("RUST_LOG", "off");
    cmd
}

fn run(args: &[&str]) -> Output {
    herbal_cmd()
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_subcommands() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("list"));
    assert!(stdout.contains("link"));
    assert!(stdout.contains("open"));
}

#[test]
fn test_list_prints_builtin_catalog() {
    let output = run(&["list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("薄荷 (Mint)"));
    assert!(stdout.contains("迷迭香 (Rosemary)"));
    assert!(stdout.contains("枸杞 (Goji Berry)"));
}

#[test]
fn test_link_output_opens_in_detail() {
    let link = run(&["link", "2"]);
    assert!(link.status.success());
    let url = String::from_utf8_lossy(&link.stdout).trim().to_string();
    assert!(url.starts_with("/pages/detail?data="));

    let open = run(&["open", &url]);
    let stdout = String::from_utf8_lossy(&open.stdout);
    assert!(open.status.success());
    assert!(stdout.starts_with("迷迭香 (Rosemary)"));
}

#[test]
fn test_open_accepts_legacy_path() {
    let link = run(&["link", "1"]);
    let url = String::from_utf8_lossy(&link.stdout)
        .trim()
        .replace("/pages/detail", "/pages/logs");

    let open = run(&["open", &url]);
    assert!(open.status.success());
    assert!(String::from_utf8_lossy(&open.stdout).contains("薄荷"));
}

#[test]
fn test_open_malformed_data_exits_with_error() {
    let output = run(&["open", "/pages/detail?data=%7Bbroken"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to decode navigation data"));
}

#[test]
fn test_unknown_link_id_exits_with_error() {
    let output = run(&["link", "99"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No catalog entry with id 99"));
}

#[test]
fn test_catalog_flag_replaces_builtin() {
    let (_dir, path) = temp_file(
        "herbs.toml",
        r#"
[[entries]]
id = 7
name = "鼠尾草 (Sage)"
desc = "Savory."
image = "/images/sage.png"
detail = "Sage pairs well with butter."
"#,
    );

    let output = run(&["list", "--catalog", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "7. 鼠尾草 (Sage)  Savory.");
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let output = run(&["list", "--config", "/nonexistent/herbal/config.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn test_open_with_bare_data_key_shows_no_entry() {
    let output = run(&["open", "/pages/detail?data"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "(no entry)\n");
}
