//! End-to-end HTML site builds against temporary content trees.

use docpress::site;
use docpress::types::Layout;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn demo_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp.path().join("markdown/demo/a.md"),
        "# Alpha\n\nFirst page.\n",
    );
    write(
        &tmp.path().join("markdown/demo/sub/b.md"),
        "# Beta\n\nSecond page.\n",
    );
    tmp
}

#[test]
fn two_page_tree_builds_full_site() {
    let tmp = demo_tree();
    let layout = Layout::new(tmp.path());

    let summary = site::build_site(&layout, &["demo".to_string()]).unwrap();

    assert!(tmp.path().join("html/demo/a.html").is_file());
    assert!(tmp.path().join("html/demo/sub/b.html").is_file());
    assert!(tmp.path().join("html/demo/index.html").is_file());
    assert!(tmp.path().join("html/index.html").is_file());

    assert_eq!(summary.frameworks.len(), 1);
    assert_eq!(summary.frameworks[0].page_count(), 2);
    assert!(summary.frameworks[0].failed.is_empty());
}

#[test]
fn framework_index_lists_pages_in_discovery_order() {
    let tmp = demo_tree();
    let layout = Layout::new(tmp.path());
    site::build_site(&layout, &["demo".to_string()]).unwrap();

    let index = fs::read_to_string(tmp.path().join("html/demo/index.html")).unwrap();
    let a = index.find(r#"<a href="a.html">a</a>"#).unwrap();
    let b = index.find(r#"<a href="sub/b.html">sub/b</a>"#).unwrap();
    assert!(a < b, "root-level page must precede nested page");
    assert_eq!(index.matches("<li>").count(), 2);
}

#[test]
fn global_index_reports_framework_page_count() {
    let tmp = demo_tree();
    let layout = Layout::new(tmp.path());
    site::build_site(&layout, &["demo".to_string()]).unwrap();

    let index = fs::read_to_string(tmp.path().join("html/index.html")).unwrap();
    assert!(index.contains(r#"<a href="demo/index.html">"#));
    assert!(index.contains("(2 pages)"));
}

#[test]
fn page_output_contains_breadcrumb_and_body() {
    let tmp = demo_tree();
    let layout = Layout::new(tmp.path());
    site::build_site(&layout, &["demo".to_string()]).unwrap();

    let nested = fs::read_to_string(tmp.path().join("html/demo/sub/b.html")).unwrap();
    assert!(nested.contains(r#"<a href="../../index.html">Home</a>"#));
    assert!(nested.contains(r#"<a href="../index.html">demo</a>"#));
    assert!(nested.contains("Second page."));
}

#[test]
fn metadata_block_is_stripped_before_rendering() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp.path().join("markdown/demo/page.md"),
        "---\ntitle: Hidden\n---\n# Visible\n\nBody.\n",
    );
    let layout = Layout::new(tmp.path());
    site::build_site(&layout, &["demo".to_string()]).unwrap();

    let page = fs::read_to_string(tmp.path().join("html/demo/page.html")).unwrap();
    assert!(page.contains("Visible"));
    assert!(!page.contains("title: Hidden"));
}

#[test]
fn unreadable_page_is_skipped_not_fatal() {
    let tmp = demo_tree();
    // Invalid UTF-8 defeats read_to_string for this one page.
    write(&tmp.path().join("markdown/demo/ok.md"), "# Ok\n");
    fs::write(tmp.path().join("markdown/demo/broken.md"), [0xff, 0xfe, 0x00]).unwrap();

    let layout = Layout::new(tmp.path());
    let summary = site::build_site(&layout, &["demo".to_string()]).unwrap();

    let demo = &summary.frameworks[0];
    assert_eq!(demo.page_count(), 3);
    assert_eq!(demo.failed.len(), 1);
    assert_eq!(demo.failed[0].rel_path, Path::new("broken.md"));
    assert!(!tmp.path().join("html/demo/broken.html").exists());

    // The index only lists successfully rendered pages.
    let index = fs::read_to_string(tmp.path().join("html/demo/index.html")).unwrap();
    assert_eq!(index.matches("<li>").count(), 3);
    assert!(!index.contains("broken"));
}

#[test]
fn missing_framework_is_skipped_with_others_processed() {
    let tmp = demo_tree();
    let layout = Layout::new(tmp.path());

    let summary =
        site::build_site(&layout, &["ghost".to_string(), "demo".to_string()]).unwrap();

    assert_eq!(summary.frameworks.len(), 1);
    assert_eq!(summary.frameworks[0].name, "demo");
    assert!(!tmp.path().join("html/ghost").exists());
}

#[test]
fn rebuild_is_idempotent() {
    let tmp = demo_tree();
    let layout = Layout::new(tmp.path());

    site::build_site(&layout, &["demo".to_string()]).unwrap();
    let first = fs::read_to_string(tmp.path().join("html/demo/a.html")).unwrap();
    site::build_site(&layout, &["demo".to_string()]).unwrap();
    let second = fs::read_to_string(tmp.path().join("html/demo/a.html")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn global_index_sorts_frameworks_by_name() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("markdown/uikit/a.md"), "# A\n");
    write(&tmp.path().join("markdown/combine/b.md"), "# B\n");
    let layout = Layout::new(tmp.path());

    // Processing order deliberately differs from name order.
    let summary =
        site::build_site(&layout, &["uikit".to_string(), "combine".to_string()]).unwrap();

    let names: Vec<&str> = summary
        .frameworks
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["combine", "uikit"]);

    let index = fs::read_to_string(tmp.path().join("html/index.html")).unwrap();
    let combine = index.find("combine/index.html").unwrap();
    let uikit = index.find("uikit/index.html").unwrap();
    assert!(combine < uikit);
}
