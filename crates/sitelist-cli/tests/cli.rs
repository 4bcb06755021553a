use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the binary with config and log dirs isolated under `home`.
fn sitelist(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitelist"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_STATE_HOME", home.join("state"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run CLI")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn write(dir: &TempDir, name: &str, body: &str) {
    std::fs::write(dir.path().join(name), body).unwrap();
}

#[test]
fn remove_reports_counts_and_writes_output() {
    let home = tempfile::tempdir().unwrap();
    write(&home, "large.txt", "a.com\nb.com\n\nc.com\n");
    write(&home, "small.txt", "b.com\n");

    let output = sitelist(
        home.path(),
        &["remove", "-l", "large.txt", "-s", "small.txt", "-o", "out.txt"],
    );
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Removed URLs: 1"), "stdout: {stdout}");
    assert!(stdout.contains("Kept URLs:    2"), "stdout: {stdout}");
    let written = std::fs::read_to_string(home.path().join("out.txt")).unwrap();
    assert_eq!(written, "a.com\nc.com\n");
}

#[test]
fn remove_missing_input_exits_non_zero() {
    let home = tempfile::tempdir().unwrap();
    write(&home, "large.txt", "a.com\n");

    let output = sitelist(
        home.path(),
        &["remove", "-l", "large.txt", "-s", "nope.txt", "-o", "out.txt"],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sitelist error:"), "stderr: {stderr}");
    assert!(stderr.contains("nope.txt"), "stderr: {stderr}");
    assert!(!home.path().join("out.txt").exists());
}

#[test]
fn dedupe_verbose_prints_collisions() {
    let home = tempfile::tempdir().unwrap();
    write(&home, "domains.txt", "http://www.foo.org/page\nfoo.org\nbar.com\n");

    let output = sitelist(home.path(), &["dedupe", "-i", "domains.txt", "-o", "out.txt", "-v"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unique sites:       2"), "stdout: {stdout}");
    assert!(stdout.contains("1. http://www.foo.org/page -> foo.org"), "stdout: {stdout}");
    let written = std::fs::read_to_string(home.path().join("out.txt")).unwrap();
    assert_eq!(written, "foo.org\nbar.com\n");
}

#[test]
fn dedupe_json_report() {
    let home = tempfile::tempdir().unwrap();
    write(&home, "domains.txt", "www.example.com\nexample.com\n");

    let output = sitelist(home.path(), &["--json", "dedupe", "-i", "domains.txt", "-o", "out.txt"]);
    assert_success(&output);

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_count"], 2);
    assert_eq!(report["unique_count"], 1);
    assert_eq!(report["duplicates_removed"], 1);
}

#[test]
fn pipeline_uses_default_file_names() {
    let home = tempfile::tempdir().unwrap();
    write(&home, "urls_10000.txt", "shop.com\nwww.shop.com\nseen.org\n");
    write(&home, "urls_100.txt", "seen.org\n");

    let output = sitelist(home.path(), &["pipeline"]);
    assert_success(&output);

    let filtered = std::fs::read_to_string(home.path().join("urls_filtered.txt")).unwrap();
    assert_eq!(filtered, "shop.com\nwww.shop.com\n");
    let final_list = std::fs::read_to_string(home.path().join("urls_final.txt")).unwrap();
    assert_eq!(final_list, "shop.com\n");
}

#[test]
fn normalize_prints_keys() {
    let home = tempfile::tempdir().unwrap();
    let output = sitelist(home.path(), &["normalize", "HTTP://WWW.Example.COM/x?y=1", "co.uk"]);
    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "HTTP://WWW.Example.COM/x?y=1\texample.com\nco.uk\tco.uk\n"
    );
}
