//! Integration tests for chain resolution across directory structures.

use std::fs;
use std::path::PathBuf;

use fusectx::{dependency_chain, resolve, validate};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_base_file_resolves_to_trimmed_body() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.md", "# Base\nBase content\n\n");

    assert_eq!(resolve(&base).unwrap(), "# Base\nBase content");
}

#[test]
fn test_child_extends_base() {
    let dir = TempDir::new().unwrap();
    write(&dir, "base.md", "# Base\nBase content");
    let child = write(
        &dir,
        "child.md",
        "---\nextends: base.md\n---\n# Child\nChild content",
    );

    assert_eq!(
        resolve(&child).unwrap(),
        "# Base\nBase content\n\n# Child\nChild content"
    );
}

#[test]
fn test_includes_resolve_in_declared_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "inc1.md", "# Include 1\nContent 1");
    write(&dir, "inc2.md", "# Include 2\nContent 2");
    let main = write(
        &dir,
        "main.md",
        "---\nincludes:\n  - inc1.md\n  - inc2.md\n---\n# Main\nMain content",
    );

    assert_eq!(
        resolve(&main).unwrap(),
        "# Include 1\nContent 1\n\n# Include 2\nContent 2\n\n# Main\nMain content"
    );

    // Declaration order, not alphabetical order, drives the output.
    let reversed = write(
        &dir,
        "reversed.md",
        "---\nincludes:\n  - inc2.md\n  - inc1.md\n---\n# Main",
    );
    assert!(resolve(&reversed)
        .unwrap()
        .starts_with("# Include 2\nContent 2\n\n# Include 1"));
}

#[test]
fn test_full_precedence_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "grand.md", "grand");
    write(&dir, "parent.md", "---\nextends: grand.md\n---\nparent");
    write(&dir, "peer1.md", "peer one");
    write(&dir, "peer2.md", "peer two");
    let entry = write(
        &dir,
        "entry.md",
        "---\nextends: parent.md\nincludes:\n  - peer1.md\n  - peer2.md\n---\nself",
    );

    assert_eq!(
        resolve(&entry).unwrap(),
        "grand\n\nparent\n\npeer one\n\npeer two\n\nself"
    );
}

#[test]
fn test_references_across_directories() {
    let dir = TempDir::new().unwrap();
    write(&dir, "shared/base.md", "# Shared Base");
    write(
        &dir,
        "teams/backend/fusectx.md",
        "---\nextends: ../../shared/base.md\n---\n# Backend",
    );

    let entry = dir.path().join("teams/backend/fusectx.md");
    assert_eq!(resolve(&entry).unwrap(), "# Shared Base\n\n# Backend");
}

#[test]
fn test_absolute_reference() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.md", "# Base");
    let entry = write(
        &dir,
        "sub/entry.md",
        &format!("---\nextends: {}\n---\n# Entry", base.display()),
    );

    assert_eq!(resolve(&entry).unwrap(), "# Base\n\n# Entry");
}

#[test]
fn test_diamond_resolves_in_both_branches() {
    let dir = TempDir::new().unwrap();
    write(&dir, "common.md", "# Common");
    write(&dir, "left.md", "---\nextends: common.md\n---\nleft");
    write(&dir, "right.md", "---\nextends: common.md\n---\nright");
    let top = write(
        &dir,
        "top.md",
        "---\nincludes:\n  - left.md\n  - right.md\n---\ntop",
    );

    assert_eq!(
        resolve(&top).unwrap(),
        "# Common\n\nleft\n\n# Common\n\nright\n\ntop"
    );
}

#[test]
fn test_cycle_spanning_directories() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "x/a.md", "---\nextends: ../y/b.md\n---\nA");
    write(&dir, "y/b.md", "---\nextends: ../x/a.md\n---\nB");

    let err = resolve(&a).unwrap_err();
    assert!(err.is_circular());
}

#[test]
fn test_same_file_via_different_relative_spellings_is_a_cycle() {
    let dir = TempDir::new().unwrap();
    // b.md names a.md through a dotted path; still the same file.
    let a = write(&dir, "sub/a.md", "---\nextends: b.md\n---\nA");
    write(&dir, "sub/b.md", "---\nextends: ../sub/a.md\n---\nB");

    assert!(resolve(&a).unwrap_err().is_circular());
}

#[test]
fn test_missing_file_error_reaches_top_caller() {
    let dir = TempDir::new().unwrap();
    write(&dir, "mid.md", "---\nextends: missing.md\n---\nmid");
    let top = write(&dir, "top.md", "---\nextends: mid.md\n---\ntop");

    let err = resolve(&top).unwrap_err();
    assert!(err.is_not_found());
    assert!(format!("{err}").contains("missing.md"));
}

#[test]
fn test_validate_agrees_with_resolve() {
    let dir = TempDir::new().unwrap();
    write(&dir, "base.md", "# Base");
    let good = write(&dir, "good.md", "---\nextends: base.md\n---\ngood");
    let bad = write(&dir, "bad.md", "---\nextends: nope.md\n---\nbad");

    assert!(resolve(&good).is_ok());
    assert!(validate(&good).is_ok());
    assert!(resolve(&bad).is_err());
    assert!(validate(&bad).is_err());
}

#[test]
fn test_dependency_chain_matches_traversal() {
    let dir = TempDir::new().unwrap();
    write(&dir, "root.md", "root");
    write(&dir, "middle.md", "---\nextends: root.md\n---\nmiddle");
    write(&dir, "inc.md", "inc");
    let leaf = write(
        &dir,
        "leaf.md",
        "---\nextends: middle.md\nincludes:\n  - inc.md\n---\nleaf",
    );

    let chain = dependency_chain(&leaf).unwrap();
    let names: Vec<_> = chain
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, ["root.md", "middle.md", "leaf.md", "inc.md"]);
}

#[test]
fn test_dependency_chain_repeats_shared_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "common.md", "common");
    write(&dir, "left.md", "---\nincludes:\n  - common.md\n---\nleft");
    write(&dir, "right.md", "---\nincludes:\n  - common.md\n---\nright");
    let top = write(
        &dir,
        "top.md",
        "---\nincludes:\n  - left.md\n  - right.md\n---\ntop",
    );

    let chain = dependency_chain(&top).unwrap();
    let commons = chain
        .iter()
        .filter(|p| p.ends_with("common.md"))
        .count();
    assert_eq!(commons, 2);
}

#[test]
fn test_resolution_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write(&dir, "base.md", "# Base");
    write(&dir, "inc.md", "# Inc");
    let entry = write(
        &dir,
        "entry.md",
        "---\nextends: base.md\nincludes:\n  - inc.md\n---\n# Entry",
    );

    let first = resolve(&entry).unwrap();
    let second = resolve(&entry).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unicode_content_passes_through() {
    let dir = TempDir::new().unwrap();
    write(&dir, "base.md", "# Grundlage\nÜberblick 概要");
    let entry = write(&dir, "entry.md", "---\nextends: base.md\n---\nEintrag");

    assert_eq!(
        resolve(&entry).unwrap(),
        "# Grundlage\nÜberblick 概要\n\nEintrag"
    );
}
