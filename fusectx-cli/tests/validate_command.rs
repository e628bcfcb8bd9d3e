//! Integration tests for the `validate` command.
//!
//! These tests verify:
//! - Successful validation output and exit status
//! - Semantic failure (exit 1) on broken chains
//! - Chain listing (--show-chain) in text and JSON formats
//! - Output suppression (--quiet flag)

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_validate_success() {
    let env = TestEnv::new();
    let source = env.write_file("valid.md", "# Valid\nContent");

    env.command()
        .arg("validate")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation successful"));
}

#[test]
fn test_validate_broken_chain_exits_one() {
    let env = TestEnv::new();
    let source = env.write_file("invalid.md", "---\nextends: nonexistent.md\n---\nContent");

    env.command()
        .arg("validate")
        .arg(&source)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Validation failed"))
        .stderr(predicate::str::contains("nonexistent.md"));
}

#[test]
fn test_validate_circular_chain_exits_one() {
    let env = TestEnv::new();
    let a = env.write_file("a.md", "---\nincludes:\n  - b.md\n---\nA");
    env.write_file("b.md", "---\nincludes:\n  - a.md\n---\nB");

    env.command()
        .arg("validate")
        .arg(&a)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("circular dependency"));
}

#[test]
fn test_validate_quiet_suppresses_output() {
    let env = TestEnv::new();
    let source = env.write_file("valid.md", "# Valid");

    env.command()
        .arg("validate")
        .arg(&source)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_validate_quiet_failure_still_exits_one() {
    let env = TestEnv::new();
    let source = env.write_file("invalid.md", "---\nextends: gone.md\n---\nX");

    env.command()
        .arg("validate")
        .arg(&source)
        .arg("--quiet")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_validate_show_chain_lists_traversal_order() {
    let env = TestEnv::new();
    env.write_file("root.md", "# Root");
    env.write_file("middle.md", "---\nextends: root.md\n---\n# Middle");
    env.write_file("inc.md", "# Include");
    let leaf = env.write_file(
        "leaf.md",
        "---\nextends: middle.md\nincludes:\n  - inc.md\n---\n# Leaf",
    );

    let output = env
        .command()
        .arg("validate")
        .arg(&leaf)
        .arg("--show-chain")
        .output()
        .expect("Failed to run validate");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8");

    assert!(stdout.contains("Dependency chain:"), "{stdout}");

    // Ancestors come before the file, peers after it.
    let root_pos = stdout.find("root.md").unwrap();
    let middle_pos = stdout.find("middle.md").unwrap();
    let leaf_pos = stdout.find("leaf.md").unwrap();
    let inc_pos = stdout.find("inc.md").unwrap();
    assert!(root_pos < middle_pos);
    assert!(middle_pos < leaf_pos);
    assert!(leaf_pos < inc_pos);
}

#[test]
fn test_validate_show_chain_json_format() {
    let env = TestEnv::new();
    env.write_file("base.md", "# Base");
    let child = env.write_file("child.md", "---\nextends: base.md\n---\n# Child");

    let output = env
        .command()
        .arg("validate")
        .arg(&child)
        .arg("--show-chain")
        .arg("--format")
        .arg("json")
        .arg("--quiet")
        .output()
        .expect("Failed to run validate");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8");

    let chain: Vec<String> = serde_json::from_str(stdout.trim()).expect("Invalid JSON chain");
    assert_eq!(chain.len(), 2);
    assert!(chain[0].ends_with("base.md"));
    assert!(chain[1].ends_with("child.md"));
}
