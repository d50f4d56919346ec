//! Integration tests for vault-toc


use assert_cmd::Command;
use harness::{TestVault, run_toc};
use predicates::prelude::*;

const ROOT_INDEX_OF_SAMPLE: &str =
    "# Folders\n- [[A/1.Table of Contents|A]]\n\t-[[A/x|x]]\n# Files\n- [[root]]";

fn sample_vault() -> TestVault {
    let vault = TestVault::new();
    vault.add_file("A/x.md", "# x");
    vault.add_file("root.md", "# root");
    vault
}

#[test]
fn test_end_to_end_scenario() {
    let vault = sample_vault();

    let (_stdout, stderr, success) = run_toc(vault.path(), &[]);
    assert!(success, "vault-toc should succeed: {}", stderr);
    assert_eq!(vault.read_index(""), ROOT_INDEX_OF_SAMPLE);
    assert_eq!(vault.read_index("A"), "# Folders\n# Files\n- [[x]]");
}

#[test]
fn test_summary_line() {
    let vault = sample_vault();

    Command::cargo_bin("vault-toc")
        .unwrap()
        .arg(vault.path())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created 2 tables of contents (1 folder, 2 files)",
        ));
}

#[test]
fn test_quiet_prints_nothing() {
    let vault = sample_vault();

    Command::cargo_bin("vault-toc")
        .unwrap()
        .args(["-q"])
        .arg(vault.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(vault.has_index(""));
}

#[test]
fn test_idempotent_rerun() {
    let vault = sample_vault();
    vault.add_file("A/B/deep.md", "");
    vault.add_file("C/other.md", "");

    let (_, _, success) = run_toc(vault.path(), &[]);
    assert!(success);
    let first: Vec<String> = ["", "A", "A/B", "C"]
        .iter()
        .map(|d| vault.read_index(d))
        .collect();

    let (_, _, success) = run_toc(vault.path(), &[]);
    assert!(success);
    let second: Vec<String> = ["", "A", "A/B", "C"]
        .iter()
        .map(|d| vault.read_index(d))
        .collect();

    assert_eq!(first, second);
    for index in &second {
        assert!(
            !index.contains("1.Table of Contents]]"),
            "index must not list itself: {}",
            index
        );
    }
}

#[test]
fn test_flattening_depth_one() {
    let vault = TestVault::new();
    vault.add_file("A/mid.md", "");
    vault.add_file("A/B/deep.md", "");

    let (_, _, success) = run_toc(vault.path(), &[]);
    assert!(success);

    let root = vault.read_index("");
    assert!(root.contains("\t-[[A/mid|mid]]"));
    assert!(!root.contains("deep"), "grandchild leaked into root: {}", root);

    let a = vault.read_index("A");
    assert!(a.contains("- [[B/1.Table of Contents|B]]"));
    assert!(a.contains("\t-[[B/deep|deep]]"));
    assert_eq!(vault.read_index("A/B"), "# Folders\n# Files\n- [[deep]]");
}

#[test]
fn test_exclusions_everywhere() {
    let vault = sample_vault();
    vault.add_file(".obsidian/app.json", "{}");
    vault.add_file("Attachments/photo.png", "");
    vault.add_file("A/Attachments/scan.png", "");
    vault.add_file("A/.obsidian.bak", "");

    let (_, _, success) = run_toc(vault.path(), &[]);
    assert!(success);

    for dir in ["", "A"] {
        let index = vault.read_index(dir);
        assert!(!index.contains("Attachments"), "{}", index);
        assert!(!index.contains("obsidian"), "{}", index);
    }
    assert!(!vault.has_index(".obsidian"));
    assert!(!vault.has_index("Attachments"));
    assert!(!vault.has_index("A/Attachments"));
}

#[test]
fn test_empty_vault() {
    let vault = TestVault::new();

    let (_, _, success) = run_toc(vault.path(), &[]);
    assert!(success);
    assert_eq!(vault.read_index(""), "# Folders\n# Files");
}

#[test]
fn test_empty_subfolder_gets_index() {
    let vault = TestVault::new();
    vault.add_dir("Empty");

    let (_, _, success) = run_toc(vault.path(), &[]);
    assert!(success);
    assert_eq!(vault.read_index("Empty"), "# Folders\n# Files");
    assert_eq!(
        vault.read_index(""),
        "# Folders\n- [[Empty/1.Table of Contents|Empty]]\n# Files"
    );
}

#[test]
fn test_sorted_output() {
    let vault = TestVault::new();
    vault.add_file("b.md", "");
    vault.add_file("a.md", "");
    vault.add_file("c.md", "");

    let (_, _, success) = run_toc(vault.path(), &[]);
    assert!(success);
    assert_eq!(
        vault.read_index(""),
        "# Folders\n# Files\n- [[a]]\n- [[b]]\n- [[c]]"
    );
}

#[test]
fn test_overwrites_existing_index() {
    let vault = sample_vault();
    vault.add_file("1.Table of Contents.md", "stale content");

    let (_, _, success) = run_toc(vault.path(), &[]);
    assert!(success);
    assert_eq!(vault.read_index(""), ROOT_INDEX_OF_SAMPLE);
}

#[test]
fn test_ignore_pattern() {
    let vault = sample_vault();
    vault.add_file("diagram.png", "");
    vault.add_file("Templates/daily.md", "");

    let (_, _, success) = run_toc(vault.path(), &["-I", "*.png", "-I", "Templates"]);
    assert!(success);
    let root = vault.read_index("");
    assert!(!root.contains("diagram"), "{}", root);
    assert!(!root.contains("Templates"), "{}", root);
    assert!(!vault.has_index("Templates"));
}

#[test]
fn test_custom_attachments_dir() {
    let vault = sample_vault();
    vault.add_file("assets/logo.png", "");
    vault.add_file("Attachments/kept.md", "");

    let (_, _, success) = run_toc(vault.path(), &["--attachments-dir", "assets"]);
    assert!(success);
    let root = vault.read_index("");
    assert!(!root.contains("assets"), "{}", root);
    assert!(root.contains("- [[Attachments/1.Table of Contents|Attachments]]"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let vault = sample_vault();

    let (stdout, _stderr, success) = run_toc(vault.path(), &["--dry-run"]);
    assert!(success);
    assert!(!vault.has_index(""));
    assert!(!vault.has_index("A"));
    assert!(stdout.contains("1.Table of Contents.md <=="), "{}", stdout);
    assert!(stdout.contains(ROOT_INDEX_OF_SAMPLE), "{}", stdout);
    assert!(stdout.contains("Would create 2 tables of contents"), "{}", stdout);
}

#[test]
fn test_json_output() {
    let vault = sample_vault();

    let (stdout, _stderr, success) = run_toc(vault.path(), &["--json"]);
    assert!(success);
    let tree: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(tree["name"], "root");
    assert_eq!(tree["files"], serde_json::json!(["root.md"]));
    assert_eq!(tree["subdirectories"][0]["name"], "A");
    assert_eq!(tree["subdirectories"][0]["files"], serde_json::json!(["x.md"]));
}

#[test]
fn test_relative_path_argument() {
    let vault = TestVault::new();
    vault.add_file("notes/one.md", "");

    let (_, _, success) = run_toc(vault.path(), &["notes"]);
    assert!(success);
    assert_eq!(vault.read_index("notes"), "# Folders\n# Files\n- [[one]]");
    assert!(!vault.has_index(""));
}

#[test]
fn test_missing_root_fails() {
    let vault = TestVault::new();

    Command::cargo_bin("vault-toc")
        .unwrap()
        .arg(vault.path().join("nope"))
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot access"))
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_verbose_logs_written_files() {
    let vault = sample_vault();

    let (_, stderr, success) = run_toc(vault.path(), &["-v"]);
    assert!(success);
    assert!(stderr.contains("wrote"), "{}", stderr);
}
