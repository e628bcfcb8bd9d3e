use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use fusectx::path::normalize;
use fusectx::{header, resolver};

fn bench_header_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_parse");

    let plain = "# Title\n".to_string() + &"body line\n".repeat(50);
    group.bench_function("no_header", |b| {
        b.iter(|| header::parse(black_box(&plain)));
    });

    let with_header = format!(
        "---\nextends: base.md\nincludes:\n  - a.md\n  - b.md\n---\n{plain}"
    );
    group.bench_function("with_header", |b| {
        b.iter(|| header::parse(black_box(&with_header)));
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("absolute", |b| {
        b.iter(|| normalize(black_box(Path::new("/project/docs/entry.md"))));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| normalize(black_box(Path::new("/project/a/../docs/./entry.md"))));
    });

    group.finish();
}

/// Builds a linear extends chain of the given depth and returns the leaf.
fn make_chain(dir: &TempDir, depth: usize) -> PathBuf {
    let mut previous: Option<String> = None;
    let mut leaf = dir.path().join("file0.md");

    for i in 0..depth {
        let name = format!("file{i}.md");
        let path = dir.path().join(&name);
        let content = match &previous {
            Some(parent) => format!("---\nextends: {parent}\n---\n# File {i}\ncontent {i}"),
            None => format!("# File {i}\ncontent {i}"),
        };
        fs::write(&path, content).unwrap();
        previous = Some(name);
        leaf = path;
    }

    leaf
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let dir = TempDir::new().unwrap();
    let shallow = make_chain(&dir, 3);
    group.bench_function("chain_depth_3", |b| {
        b.iter(|| resolver::resolve(black_box(&shallow)).unwrap());
    });

    let deep_dir = TempDir::new().unwrap();
    let deep = make_chain(&deep_dir, 25);
    group.bench_function("chain_depth_25", |b| {
        b.iter(|| resolver::resolve(black_box(&deep)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_header_parse, bench_normalize, bench_resolve);
criterion_main!(benches);
